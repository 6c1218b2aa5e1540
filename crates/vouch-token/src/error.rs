//! Error types for token building and validation.

use thiserror::Error;

/// Errors that can occur while building or validating tokens.
///
/// [`validate`](crate::TokenValidator::validate) surfaces the specific kind
/// so trusted callers can tell a bad request from a forgery from a stale
/// token. The `is_valid` and `decode_data` conveniences deliberately
/// collapse all kinds, so nothing here leaks to unauthenticated callers.
#[derive(Debug, Error)]
pub enum TokenError {
    /// Missing or structurally malformed input: empty required field,
    /// ambiguous part count, missing signature, non-numeric timestamp.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Malformed hex or base64 content.
    #[error("decode error: {0}")]
    Decode(String),

    /// Recomputed signature differs from the presented one.
    #[error("signature mismatch")]
    SignatureMismatch,

    /// Token age exceeds the configured lifetime.
    #[error("token expired: issued at {issued_at}ms, lifetime {lifetime_ms}ms")]
    Expired {
        /// Issuance timestamp from the token, milliseconds since epoch.
        issued_at: i64,
        /// Configured lifetime in milliseconds.
        lifetime_ms: i64,
    },
}
