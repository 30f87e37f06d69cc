//! One-time HMAC nonces.
//!
//! A [`NonceStore`] pairs an action name with a freshly generated random
//! value. Only the keyed hash of the value is retained; verification
//! recomputes the HMAC over what the client presents. A nonce is consumed on
//! first successful verification and fails thereafter (one-time use), and an
//! unconsumed nonce expires after the configured window.

use crate::error::{SecretsError, SecretsResult};
use crate::keys::random_hex;
use hmac::{Hmac, Mac};
use parking_lot::Mutex;
use sha2::Sha256;
use std::collections::HashMap;
use std::time::{Duration, Instant};

type HmacSha256 = Hmac<Sha256>;

/// Default expiration window for issued nonces.
pub const DEFAULT_NONCE_TTL: Duration = Duration::from_secs(12 * 60 * 60);

/// Length in bytes of the random nonce value.
const NONCE_VALUE_BYTES: usize = 16;

/// Configuration for a [`NonceStore`].
#[derive(Debug, Clone)]
pub struct NonceConfig {
    /// Secret key for the keyed hash.
    pub secret: Vec<u8>,
    /// How long an unconsumed nonce stays valid.
    pub ttl: Duration,
}

impl NonceConfig {
    /// Creates a configuration with the default expiration window.
    pub fn new(secret: impl Into<Vec<u8>>) -> Self {
        Self {
            secret: secret.into(),
            ttl: DEFAULT_NONCE_TTL,
        }
    }

    /// Sets the expiration window.
    #[must_use]
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }
}

#[derive(Debug)]
struct NonceRecord {
    hash: Vec<u8>,
    created_at: Instant,
}

/// Session-scoped issuer and verifier of one-time nonces.
///
/// # Example
///
/// ```
/// use satchel_secrets::{NonceConfig, NonceStore};
///
/// let store = NonceStore::new(NonceConfig::new(b"app-secret".to_vec()));
/// let token = store.issue("delete-post").unwrap();
///
/// assert!(store.verify("delete-post", &token).is_ok());
/// // One-time use: the same token fails a second time.
/// assert!(store.verify("delete-post", &token).is_err());
/// ```
pub struct NonceStore {
    config: NonceConfig,
    records: Mutex<HashMap<String, NonceRecord>>,
}

impl NonceStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new(config: NonceConfig) -> Self {
        Self {
            config,
            records: Mutex::new(HashMap::new()),
        }
    }

    /// Issues a nonce for `action`, replacing any previous one.
    ///
    /// Returns the token to hand to the client. The store keeps only the
    /// keyed hash.
    pub fn issue(&self, action: &str) -> SecretsResult<String> {
        let value = random_hex(NONCE_VALUE_BYTES)?;
        let record = NonceRecord {
            hash: self.sign(action, &value),
            created_at: Instant::now(),
        };
        self.records.lock().insert(action.to_string(), record);
        Ok(value)
    }

    /// Verifies a presented token for `action`.
    ///
    /// The record is consumed on success; a second verification with the
    /// same token fails with [`SecretsError::UnknownNonce`]. Expired records
    /// are purged and fail with [`SecretsError::NonceExpired`]. A wrong token
    /// leaves the record in place so the legitimate holder can still verify.
    pub fn verify(&self, action: &str, token: &str) -> SecretsResult<()> {
        let mut records = self.records.lock();
        let record = records
            .get(action)
            .ok_or_else(|| SecretsError::unknown_nonce(action))?;

        if record.created_at.elapsed() > self.config.ttl {
            records.remove(action);
            return Err(SecretsError::nonce_expired(action));
        }

        let mut mac = HmacSha256::new_from_slice(&self.config.secret)
            .expect("HMAC can take key of any size");
        mac.update(action.as_bytes());
        mac.update(b":");
        mac.update(token.as_bytes());
        if mac.verify_slice(&record.hash).is_err() {
            return Err(SecretsError::nonce_mismatch(action));
        }

        records.remove(action);
        Ok(())
    }

    /// Whether an unconsumed nonce exists for `action` (expired or not).
    #[must_use]
    pub fn has_nonce(&self, action: &str) -> bool {
        self.records.lock().contains_key(action)
    }

    /// Drops every record whose window has elapsed. Returns how many.
    pub fn purge_expired(&self) -> usize {
        let mut records = self.records.lock();
        let before = records.len();
        records.retain(|_, r| r.created_at.elapsed() <= self.config.ttl);
        before - records.len()
    }

    fn sign(&self, action: &str, value: &str) -> Vec<u8> {
        let mut mac = HmacSha256::new_from_slice(&self.config.secret)
            .expect("HMAC can take key of any size");
        mac.update(action.as_bytes());
        mac.update(b":");
        mac.update(value.as_bytes());
        mac.finalize().into_bytes().to_vec()
    }
}

impl std::fmt::Debug for NonceStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NonceStore")
            .field("active", &self.records.lock().len())
            .finish_non_exhaustive()
    }
}
