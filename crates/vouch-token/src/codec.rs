//! Wire codec: text encodings for signature bytes and message flattening.

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use vouch_core::SignatureEncoding;

use crate::error::TokenError;

/// Reserved field separator.
///
/// Must never occur inside a field value: it is not part of the hex or
/// standard base64 alphabets, nor of a decimal timestamp, so only
/// caller-supplied field content can collide with it. That is an accepted
/// input-format risk and is not validated here.
pub const SEPARATOR: char = ':';

/// Encodes and decodes binary data under a fixed [`SignatureEncoding`].
#[derive(Debug, Clone, Copy)]
pub struct Codec {
    scheme: SignatureEncoding,
}

impl Codec {
    /// Create a codec for the given encoding scheme.
    pub fn new(scheme: SignatureEncoding) -> Self {
        Self { scheme }
    }

    /// Encode bytes as text. Hex output is lowercase.
    pub fn encode(&self, bytes: &[u8]) -> String {
        match self.scheme {
            SignatureEncoding::Hex => hex::encode(bytes),
            SignatureEncoding::Base64 => BASE64.encode(bytes),
        }
    }

    /// Decode text back to bytes.
    ///
    /// Fails with [`TokenError::Decode`] on odd-length or non-hex-digit
    /// input, and on malformed base64 characters or padding. Malformed
    /// input never silently produces wrong bytes.
    pub fn decode(&self, text: &str) -> Result<Vec<u8>, TokenError> {
        match self.scheme {
            SignatureEncoding::Hex => {
                hex::decode(text).map_err(|e| TokenError::Decode(e.to_string()))
            }
            SignatureEncoding::Base64 => BASE64
                .decode(text)
                .map_err(|e| TokenError::Decode(e.to_string())),
        }
    }
}

/// Flatten identity fields and an issuance timestamp into the message that
/// gets signed: `primary:additional1:...:additionalN:issued_at`.
pub fn flatten(primary: &str, additional: &[&str], issued_at: i64) -> String {
    let mut message = String::from(primary);
    for field in additional {
        message.push(SEPARATOR);
        message.push_str(field);
    }
    message.push(SEPARATOR);
    message.push_str(&issued_at.to_string());
    message
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_encode_is_lowercase() {
        let codec = Codec::new(SignatureEncoding::Hex);
        assert_eq!(codec.encode(&[0xDE, 0xAD, 0xBE, 0xEF]), "deadbeef");
    }

    #[test]
    fn test_hex_decode_accepts_both_cases() {
        let codec = Codec::new(SignatureEncoding::Hex);
        assert_eq!(codec.decode("DEADbeef").unwrap(), vec![0xDE, 0xAD, 0xBE, 0xEF]);
    }

    #[test]
    fn test_hex_decode_odd_length_fails() {
        let codec = Codec::new(SignatureEncoding::Hex);
        assert!(matches!(codec.decode("abc"), Err(TokenError::Decode(_))));
    }

    #[test]
    fn test_hex_decode_invalid_digit_fails() {
        let codec = Codec::new(SignatureEncoding::Hex);
        assert!(matches!(codec.decode("zz"), Err(TokenError::Decode(_))));
    }

    #[test]
    fn test_base64_round_trip() {
        let codec = Codec::new(SignatureEncoding::Base64);
        let bytes = b"binary \x00\x01\x02 payload";
        assert_eq!(codec.decode(&codec.encode(bytes)).unwrap(), bytes);
    }

    #[test]
    fn test_base64_invalid_characters_fail() {
        let codec = Codec::new(SignatureEncoding::Base64);
        assert!(matches!(codec.decode("!!!!"), Err(TokenError::Decode(_))));
        assert!(matches!(codec.decode("AAA"), Err(TokenError::Decode(_))));
    }

    #[test]
    fn test_flatten_message() {
        assert_eq!(
            flatten("jhondoe", &["jhondoe@example.com"], 1700000000000),
            "jhondoe:jhondoe@example.com:1700000000000"
        );
        assert_eq!(flatten("solo", &[], 42), "solo:42");
    }
}
