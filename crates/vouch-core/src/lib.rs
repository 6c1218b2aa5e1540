//! # vouch-core
//!
//! Shared configuration types for the Vouch token workspace.
//!
//! This crate defines the settings that builder and validator sides of a
//! service link must agree on out of band: the wire shape of a token, the
//! text encoding used for signatures, and the token lifetime. Tokens carry
//! no self-describing tag, so a mismatch here makes every token invalid.

pub mod config;
pub mod error;

pub use config::{SignatureEncoding, TokenOptions, WireShape};
pub use error::ConfigError;
