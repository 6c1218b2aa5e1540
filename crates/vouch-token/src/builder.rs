//! Token creation.

use tracing::debug;
use vouch_core::WireShape;

use crate::codec::{self, SEPARATOR};
use crate::config::TokenConfig;
use crate::error::TokenError;

/// Builds signed tokens from ordered identity fields.
///
/// Each call reads the system clock once to stamp the payload and invokes
/// the signing capability once; there is no other side effect and no shared
/// mutable state.
pub struct TokenBuilder {
    config: TokenConfig,
}

impl TokenBuilder {
    /// Create a builder over the given configuration.
    pub fn new(config: TokenConfig) -> Self {
        Self { config }
    }

    /// Create a signed token from a primary field and additional fields.
    ///
    /// Fields must not contain the `:` separator; see
    /// [`SEPARATOR`](crate::SEPARATOR).
    pub fn create_token(&self, primary: &str, additional: &[&str]) -> Result<String, TokenError> {
        if primary.is_empty() {
            return Err(TokenError::InvalidInput(
                "primary field must not be empty".into(),
            ));
        }

        let issued_at = self.config.expiry().stamp();
        let message = codec::flatten(primary, additional, issued_at);
        let signature = self.config.signer().sign(message.as_bytes());

        let token = match self.config.wire() {
            WireShape::SignOnly => {
                let sig_text = self.config.codec().encode(&signature);
                format!("{message}{SEPARATOR}{sig_text}")
            }
            WireShape::EncodeAll => {
                let mut blob = message.into_bytes();
                blob.extend_from_slice(&signature);
                self.config.codec().encode(&blob)
            }
        };

        debug!(
            fields = additional.len() + 1,
            issued_at,
            wire = ?self.config.wire(),
            "token created"
        );
        Ok(token)
    }

    /// Create a token already split on the separator, final element being
    /// the encoded signature.
    ///
    /// Only available for the sign-only wire shape: an encoded blob has no
    /// separator structure to split on, so this fails with `InvalidInput`
    /// when encode-everything is configured.
    pub fn create_token_parts(
        &self,
        primary: &str,
        additional: &[&str],
    ) -> Result<Vec<String>, TokenError> {
        if self.config.wire() == WireShape::EncodeAll {
            return Err(TokenError::InvalidInput(
                "token parts require the sign-only wire shape".into(),
            ));
        }
        let token = self.create_token(primary, additional)?;
        Ok(token.split(SEPARATOR).map(str::to_owned).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vouch_core::SignatureEncoding;

    fn sign_only_builder() -> TokenBuilder {
        TokenBuilder::new(TokenConfig::with_secret("s3cr3t"))
    }

    #[test]
    fn test_sign_only_token_shape() {
        let builder = sign_only_builder();
        let token = builder
            .create_token("jhondoe", &["jhondoe@example.com"])
            .unwrap();

        let parts: Vec<&str> = token.split(SEPARATOR).collect();
        assert_eq!(parts.len(), 4);
        assert_eq!(parts[0], "jhondoe");
        assert_eq!(parts[1], "jhondoe@example.com");
        assert!(parts[2].parse::<i64>().is_ok());
        assert_eq!(parts[3].len(), 64);
        assert!(parts[3].chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_empty_primary_field_fails() {
        let builder = sign_only_builder();
        let result = builder.create_token("", &["extra"]);
        assert!(matches!(result, Err(TokenError::InvalidInput(_))));
    }

    #[test]
    fn test_encode_all_token_is_one_blob() {
        let config = TokenConfig::new(
            std::sync::Arc::new(crate::sign::HmacSha256Signer::from_secret("s3cr3t")),
            SignatureEncoding::Hex,
            WireShape::EncodeAll,
            chrono::Duration::minutes(5),
        );
        let builder = TokenBuilder::new(config.clone());
        let token = builder.create_token("jhondoe", &[]).unwrap();

        assert!(!token.contains(SEPARATOR));
        let bytes = config.codec().decode(&token).unwrap();
        assert!(bytes.len() > 32);
        // Head of the blob is the UTF-8 message.
        let message = std::str::from_utf8(&bytes[..bytes.len() - 32]).unwrap();
        assert!(message.starts_with("jhondoe:"));
    }

    #[test]
    fn test_token_parts_round_trip() {
        let builder = sign_only_builder();
        let parts = builder
            .create_token_parts("jhondoe", &["jhondoe@example.com"])
            .unwrap();
        assert_eq!(parts.len(), 4);
        assert_eq!(parts[0], "jhondoe");
    }

    #[test]
    fn test_token_parts_rejected_for_encoded_shape() {
        let config = TokenConfig::new(
            std::sync::Arc::new(crate::sign::HmacSha256Signer::from_secret("s3cr3t")),
            SignatureEncoding::Base64,
            WireShape::EncodeAll,
            chrono::Duration::minutes(5),
        );
        let builder = TokenBuilder::new(config);
        let result = builder.create_token_parts("jhondoe", &[]);
        assert!(matches!(result, Err(TokenError::InvalidInput(_))));
    }
}
