//! # vouch-token
//!
//! Short-lived, signed bearer tokens that let one service vouch for a
//! principal's identity to another service sharing a pre-exchanged secret.
//!
//! This crate provides functionality for:
//! - Building tokens from ordered identity fields plus an issuance timestamp
//! - Signing and verifying tokens with a keyed-hash capability (HMAC-SHA-256)
//! - Enforcing a fixed token lifetime at validation time
//! - Encoding tokens as hex or base64 in one of two wire shapes
//!
//! ## Wire Shapes
//!
//! | Shape | Layout | Readable? |
//! |-------|--------|-----------|
//! | **Sign-only** | `field1:...:fieldN:timestamp:SIG` | Fields in the clear |
//! | **Encode-everything** | `encoding(message_bytes ‖ sig_bytes)` | Single opaque blob |
//!
//! Both ends of a link must be configured identically: tokens carry no tag
//! saying which shape or encoding was used.
//!
//! ## Scope
//!
//! Tokens are reusable for their whole lifetime window; there is no replay
//! tracking, no key rotation, and no revocation. This is a deliberate fit
//! for point-to-point links where a single issuer is authoritative, not a
//! federation protocol.
//!
//! ```
//! use vouch_token::{TokenBuilder, TokenConfig, TokenValidator};
//!
//! let config = TokenConfig::with_secret("s3cr3t");
//! let builder = TokenBuilder::new(config.clone());
//! let validator = TokenValidator::new(config);
//!
//! let token = builder.create_token("jhondoe", &["jhondoe@example.com"]).unwrap();
//! assert!(validator.is_valid(&token, &[]));
//! ```

pub mod builder;
pub mod codec;
pub mod config;
pub mod error;
pub mod expiry;
pub mod sign;
pub mod validator;

pub use builder::TokenBuilder;
pub use codec::SEPARATOR;
pub use config::TokenConfig;
pub use error::TokenError;
pub use expiry::ExpiryPolicy;
pub use sign::{HmacSha256Signer, Signer, constant_time_eq};
pub use validator::TokenValidator;
pub use vouch_core::{SignatureEncoding, TokenOptions, WireShape};
