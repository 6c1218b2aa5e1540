//! Token configuration options.
//!
//! Options can be written inline or loaded from a YAML file. Both ends of a
//! service link must use identical options: there is no negotiation and no
//! version tag inside a token.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::ConfigError;

/// Text encoding used for signature bytes (and, in the encode-everything
/// wire shape, for the whole token blob).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SignatureEncoding {
    /// Two lowercase hex digits per byte.
    #[default]
    Hex,
    /// Standard base64 alphabet with padding.
    Base64,
}

/// Shape of the token on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WireShape {
    /// `field1:...:fieldN:timestamp:SIG` — plaintext message with the
    /// encoded signature appended after a separator.
    #[default]
    SignOnly,
    /// A single encoded blob: the message bytes with the raw signature
    /// bytes concatenated, then text-encoded as a whole.
    #[serde(rename = "encode-everything")]
    EncodeAll,
}

/// Tunable token settings.
///
/// Every field has a default so a config file can set only what it needs:
///
/// ```yaml
/// scheme: base64
/// wire: encode-everything
/// lifetime_secs: 60
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenOptions {
    /// Signature text encoding.
    #[serde(default)]
    pub scheme: SignatureEncoding,

    /// Wire shape.
    #[serde(default)]
    pub wire: WireShape,

    /// Token lifetime in seconds.
    #[serde(default = "default_lifetime_secs")]
    pub lifetime_secs: u64,
}

fn default_lifetime_secs() -> u64 {
    300
}

impl Default for TokenOptions {
    fn default() -> Self {
        Self {
            scheme: SignatureEncoding::default(),
            wire: WireShape::default(),
            lifetime_secs: default_lifetime_secs(),
        }
    }
}

impl TokenOptions {
    /// Parse options from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Load options from a YAML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        Self::from_yaml(&contents)
    }
}
