//! Expiry policy: stamps payloads at issue time and judges token age.

use chrono::{Duration, Utc};

/// Judges whether a presented token has aged past a fixed lifetime.
///
/// There is no sliding renewal: a token is valid for exactly one lifetime
/// window from its issuance timestamp and may be presented any number of
/// times within it.
#[derive(Debug, Clone, Copy)]
pub struct ExpiryPolicy {
    lifetime_ms: i64,
}

impl ExpiryPolicy {
    /// Create a policy with the given fixed lifetime.
    pub fn new(lifetime: Duration) -> Self {
        Self {
            lifetime_ms: lifetime.num_milliseconds(),
        }
    }

    /// Current time in milliseconds since epoch, truncated to an integer.
    pub fn stamp(&self) -> i64 {
        Utc::now().timestamp_millis()
    }

    /// Configured lifetime in milliseconds.
    pub fn lifetime_ms(&self) -> i64 {
        self.lifetime_ms
    }

    /// A token is expired once its age exceeds the lifetime:
    /// `now - lifetime > issued_at`. At exactly `issued_at + lifetime`
    /// the token is still valid.
    pub fn is_expired(&self, issued_at: i64, now: i64) -> bool {
        now - self.lifetime_ms > issued_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expiry_boundary() {
        let policy = ExpiryPolicy::new(Duration::minutes(5));
        let issued_at = 1_700_000_000_000;
        let lifetime = policy.lifetime_ms();

        assert!(!policy.is_expired(issued_at, issued_at));
        assert!(!policy.is_expired(issued_at, issued_at + lifetime - 1));
        assert!(!policy.is_expired(issued_at, issued_at + lifetime));
        assert!(policy.is_expired(issued_at, issued_at + lifetime + 1));
    }

    #[test]
    fn test_stamp_is_millisecond_scale() {
        let policy = ExpiryPolicy::new(Duration::minutes(5));
        let stamp = policy.stamp();
        // Well past 2001 in milliseconds, far future in seconds.
        assert!(stamp > 1_000_000_000_000);
    }
}
