//! Immutable configuration shared by builder and validator.

use std::sync::Arc;

use chrono::Duration;
use vouch_core::{SignatureEncoding, TokenOptions, WireShape};

use crate::codec::Codec;
use crate::expiry::ExpiryPolicy;
use crate::sign::{HmacSha256Signer, Signer};

/// Everything a [`TokenBuilder`](crate::TokenBuilder) or
/// [`TokenValidator`](crate::TokenValidator) needs, fixed at construction.
///
/// Cloning is cheap (the signer is behind an `Arc`), so one config can be
/// shared read-only across builders, validators, and threads without
/// locking.
#[derive(Clone)]
pub struct TokenConfig {
    signer: Arc<dyn Signer>,
    codec: Codec,
    wire: WireShape,
    expiry: ExpiryPolicy,
}

impl TokenConfig {
    /// Assemble a config from its parts.
    pub fn new(
        signer: Arc<dyn Signer>,
        scheme: SignatureEncoding,
        wire: WireShape,
        lifetime: Duration,
    ) -> Self {
        Self {
            signer,
            codec: Codec::new(scheme),
            wire,
            expiry: ExpiryPolicy::new(lifetime),
        }
    }

    /// Convenience constructor: HMAC-SHA-256 keyed from `secret`, sign-only
    /// wire shape, hex signatures, five-minute lifetime.
    pub fn with_secret(secret: &str) -> Self {
        Self::new(
            Arc::new(HmacSha256Signer::from_secret(secret)),
            SignatureEncoding::Hex,
            WireShape::SignOnly,
            Duration::minutes(5),
        )
    }

    /// Build a config from loaded [`TokenOptions`] and a signer.
    pub fn from_options(options: &TokenOptions, signer: Arc<dyn Signer>) -> Self {
        Self::new(
            signer,
            options.scheme,
            options.wire,
            Duration::seconds(options.lifetime_secs as i64),
        )
    }

    pub(crate) fn signer(&self) -> &dyn Signer {
        self.signer.as_ref()
    }

    pub(crate) fn codec(&self) -> &Codec {
        &self.codec
    }

    pub(crate) fn wire(&self) -> WireShape {
        self.wire
    }

    pub(crate) fn expiry(&self) -> &ExpiryPolicy {
        &self.expiry
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_secret_defaults() {
        let config = TokenConfig::with_secret("s3cr3t");
        assert_eq!(config.wire(), WireShape::SignOnly);
        assert_eq!(config.expiry().lifetime_ms(), 5 * 60 * 1000);
        assert_eq!(config.signer().signature_len(), 32);
    }

    #[test]
    fn test_from_options() {
        let options = TokenOptions {
            scheme: SignatureEncoding::Base64,
            wire: WireShape::EncodeAll,
            lifetime_secs: 60,
        };
        let signer = Arc::new(HmacSha256Signer::from_secret("s3cr3t"));
        let config = TokenConfig::from_options(&options, signer);
        assert_eq!(config.wire(), WireShape::EncodeAll);
        assert_eq!(config.expiry().lifetime_ms(), 60_000);
    }
}
