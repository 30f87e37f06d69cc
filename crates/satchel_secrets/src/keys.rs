//! Random key and password generation, plus hashing helpers.

use crate::error::{SecretsError, SecretsResult};
use hmac::{Hmac, Mac};
use rand::distributions::Alphanumeric;
use rand::Rng;
use sha2::{Digest, Sha256};

type HmacSha256 = Hmac<Sha256>;

const ALPHA: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";
const ALPHANUMERIC: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
const FULL: &[u8] =
    b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789!@#$%^&*()-_=+[]{}<>?";

/// Character set used by [`random_password`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Charset {
    /// Letters only.
    Alpha,
    /// Letters and digits.
    #[default]
    Alphanumeric,
    /// Letters, digits, and punctuation.
    Full,
}

impl Charset {
    fn bytes(self) -> &'static [u8] {
        match self {
            Self::Alpha => ALPHA,
            Self::Alphanumeric => ALPHANUMERIC,
            Self::Full => FULL,
        }
    }
}

/// Generates a random alphanumeric key of `len` characters.
pub fn random_key(len: usize) -> SecretsResult<String> {
    if len == 0 {
        return Err(SecretsError::invalid_length("key length must be non-zero"));
    }
    Ok(rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(len)
        .map(char::from)
        .collect())
}

/// Generates `bytes` random bytes and returns them hex-encoded.
pub fn random_hex(bytes: usize) -> SecretsResult<String> {
    if bytes == 0 {
        return Err(SecretsError::invalid_length("byte count must be non-zero"));
    }
    let mut buf = vec![0u8; bytes];
    rand::thread_rng().fill(buf.as_mut_slice());
    Ok(hex::encode(buf))
}

/// Generates a random password of `len` characters from the given charset.
pub fn random_password(len: usize, charset: Charset) -> SecretsResult<String> {
    if len == 0 {
        return Err(SecretsError::invalid_length(
            "password length must be non-zero",
        ));
    }
    let set = charset.bytes();
    let mut rng = rand::thread_rng();
    Ok((0..len)
        .map(|_| char::from(set[rng.gen_range(0..set.len())]))
        .collect())
}

/// SHA-256 digest of `data`, hex-encoded.
#[must_use]
pub fn sha256_hex(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hex::encode(hasher.finalize())
}

/// HMAC-SHA256 of `data` under `key`, hex-encoded.
#[must_use]
pub fn hmac_sha256_hex(key: &[u8], data: &[u8]) -> String {
    let mut mac = HmacSha256::new_from_slice(key).expect("HMAC can take key of any size");
    mac.update(data);
    hex::encode(mac.finalize().into_bytes())
}
