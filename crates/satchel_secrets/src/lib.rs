//! # Satchel Secrets
//!
//! Credential helpers for the Satchel toolkit.
//!
//! This crate provides:
//! - Random key, hex, and password generation
//! - SHA-256 and HMAC-SHA256 hashing helpers
//! - Password strength scoring
//! - One-time, time-boxed HMAC nonces ([`NonceStore`])
//!
//! All fallible operations return [`SecretsResult`]; nothing here logs or
//! panics on bad input.

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod error;
mod keys;
mod nonce;
mod strength;

pub use error::{SecretsError, SecretsResult};
pub use keys::{hmac_sha256_hex, random_hex, random_key, random_password, sha256_hex, Charset};
pub use nonce::{NonceConfig, NonceStore, DEFAULT_NONCE_TTL};
pub use strength::{password_strength, Strength};
