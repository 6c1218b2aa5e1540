//! Signature engine: the keyed-hash capability behind token signing.

use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// A keyed signing capability.
///
/// Implementations must be stateless per call: every `sign` invocation uses
/// an independent hashing context so that concurrent calls never share
/// in-progress state. An implementation backed by a single mutable context
/// must be externally synchronized instead, and should say so.
pub trait Signer: Send + Sync {
    /// Compute the signature over `message`.
    fn sign(&self, message: &[u8]) -> Vec<u8>;

    /// Fixed signature length in bytes for this algorithm. Any candidate
    /// signature of a different length is rejected before comparison.
    fn signature_len(&self) -> usize;
}

/// HMAC-SHA-256 signer keyed from a shared secret.
pub struct HmacSha256Signer {
    key: Vec<u8>,
}

impl HmacSha256Signer {
    /// Key the signer from a passphrase (its UTF-8 bytes).
    pub fn from_secret(secret: &str) -> Self {
        Self {
            key: secret.as_bytes().to_vec(),
        }
    }

    /// Key the signer from raw key bytes.
    pub fn from_key_bytes(key: &[u8]) -> Self {
        Self { key: key.to_vec() }
    }
}

impl Signer for HmacSha256Signer {
    fn sign(&self, message: &[u8]) -> Vec<u8> {
        // Fresh context per call. HMAC accepts keys of any length, so
        // construction cannot fail.
        let mut mac =
            HmacSha256::new_from_slice(&self.key).expect("HMAC accepts keys of any length");
        mac.update(message);
        mac.finalize().into_bytes().to_vec()
    }

    fn signature_len(&self) -> usize {
        32
    }
}

/// Constant-time byte equality: compares every byte with no early exit, so
/// timing does not reveal how many leading bytes matched.
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut diff = 0u8;
    for (x, y) in a.iter().zip(b.iter()) {
        diff |= x ^ y;
    }
    diff == 0
}
