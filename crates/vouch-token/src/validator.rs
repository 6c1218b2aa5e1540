//! Token validation: structural parse, signature check, expiry check.
//!
//! Parsing is two-phase. Phase one determines the wire shape of the
//! presented token by a structural rule (position of the last separator,
//! or its absence), yielding a plaintext message and a candidate signature.
//! Phase two verifies the signature in constant time and enforces expiry
//! before the message is split into fields.

use tracing::debug;

use crate::codec::SEPARATOR;
use crate::config::TokenConfig;
use crate::error::TokenError;
use crate::sign::constant_time_eq;

/// Validates presented tokens against the shared configuration.
pub struct TokenValidator {
    config: TokenConfig,
}

impl TokenValidator {
    /// Create a validator over the given configuration.
    pub fn new(config: TokenConfig) -> Self {
        Self { config }
    }

    /// Validate a token and return its ordered fields.
    ///
    /// Two calling conventions are supported and agree on output:
    ///
    /// - `validate(token, &[])` — `token` is the complete wire string.
    /// - `validate(first, &[second, ..., sig])` — the token was already
    ///   split on the separator by the caller; the final extra part is the
    ///   encoded signature and everything before it is plaintext data.
    ///
    /// Exactly one extra part is rejected as `InvalidInput`: it is
    /// ambiguous between "a plaintext field" and "the signature".
    ///
    /// The returned list still includes the issuance timestamp as its last
    /// element, matching the signed message. Callers know their own field
    /// count and should ignore the trailing timestamp.
    pub fn validate(&self, token: &str, extra_parts: &[&str]) -> Result<Vec<String>, TokenError> {
        if token.is_empty() {
            return Err(TokenError::InvalidInput("token must not be empty".into()));
        }
        if extra_parts.len() == 1 {
            return Err(TokenError::InvalidInput(
                "one extra part is ambiguous: pass none, or data parts plus a signature".into(),
            ));
        }

        let (message, signature) = if extra_parts.is_empty() {
            self.split_combined(token)?
        } else {
            self.split_parts(token, extra_parts)?
        };

        self.verify_signature(&message, &signature)?;
        self.check_expiry(&message)?;

        Ok(message.split(SEPARATOR).map(str::to_owned).collect())
    }

    /// True iff [`validate`](Self::validate) succeeds.
    pub fn is_valid(&self, token: &str, extra_parts: &[&str]) -> bool {
        self.validate(token, extra_parts).is_ok()
    }

    /// Validated fields, or an empty list on any failure.
    ///
    /// Never surfaces which failure occurred, so an unauthenticated caller
    /// cannot distinguish a forged signature from a stale token.
    pub fn decode_data(&self, token: &str, extra_parts: &[&str]) -> Vec<String> {
        self.validate(token, extra_parts).unwrap_or_default()
    }

    /// Phase one for a single combined string: locate the last separator.
    fn split_combined(&self, token: &str) -> Result<(String, Vec<u8>), TokenError> {
        match token.rfind(SEPARATOR) {
            // No separator at all: the whole string is an encoded blob with
            // the raw signature bytes appended.
            None => self.split_blob(token),
            Some(at) if at == token.len() - 1 => Err(TokenError::InvalidInput(
                "no signature present after trailing separator".into(),
            )),
            // Separator first with no data before it: still an encoded
            // blob, not a data/signature split.
            Some(0) => self.split_blob(token),
            Some(at) => {
                let signature = self.decode_signature(&token[at + 1..])?;
                Ok((token[..at].to_owned(), signature))
            }
        }
    }

    /// Phase one for the pre-split convention: the final extra part is the
    /// signature, everything before it is plaintext data.
    fn split_parts(&self, token: &str, extra: &[&str]) -> Result<(String, Vec<u8>), TokenError> {
        let Some((sig_text, data)) = extra.split_last() else {
            return Err(TokenError::InvalidInput("missing signature part".into()));
        };

        let mut message = String::from(token);
        for part in data {
            message.push(SEPARATOR);
            message.push_str(part);
        }
        let signature = self.decode_signature(sig_text)?;
        Ok((message, signature))
    }

    /// Decode an encode-everything blob: trailing fixed-length signature
    /// bytes, preceded by the UTF-8 message.
    fn split_blob(&self, token: &str) -> Result<(String, Vec<u8>), TokenError> {
        let bytes = self.config.codec().decode(token)?;
        let sig_len = self.config.signer().signature_len();
        if bytes.len() <= sig_len {
            return Err(TokenError::InvalidInput(
                "encoded token no longer than its signature".into(),
            ));
        }

        let split = bytes.len() - sig_len;
        let signature = bytes[split..].to_vec();
        let message = String::from_utf8(bytes[..split].to_vec())
            .map_err(|e| TokenError::Decode(e.to_string()))?;
        Ok((message, signature))
    }

    /// Decode a text-encoded signature and reject any length other than
    /// the algorithm's fixed one.
    fn decode_signature(&self, text: &str) -> Result<Vec<u8>, TokenError> {
        let signature = self.config.codec().decode(text)?;
        if signature.len() != self.config.signer().signature_len() {
            return Err(TokenError::SignatureMismatch);
        }
        Ok(signature)
    }

    fn verify_signature(&self, message: &str, presented: &[u8]) -> Result<(), TokenError> {
        let expected = self.config.signer().sign(message.as_bytes());
        if !constant_time_eq(&expected, presented) {
            debug!("signature mismatch");
            return Err(TokenError::SignatureMismatch);
        }
        Ok(())
    }

    /// Recover the trailing timestamp field and enforce the lifetime.
    fn check_expiry(&self, message: &str) -> Result<(), TokenError> {
        let stamp_text = match message.rfind(SEPARATOR) {
            Some(at) => &message[at + 1..],
            None => message,
        };
        let issued_at: i64 = stamp_text.parse().map_err(|_| {
            TokenError::InvalidInput(format!("non-numeric timestamp field: {stamp_text:?}"))
        })?;

        let expiry = self.config.expiry();
        let now = expiry.stamp();
        if expiry.is_expired(issued_at, now) {
            debug!(issued_at, now, "token expired");
            return Err(TokenError::Expired {
                issued_at,
                lifetime_ms: expiry.lifetime_ms(),
            });
        }
        Ok(())
    }
}
