//! Key derivation using PBKDF2-HMAC-SHA1.
//!
//! The salt handed to the deriver is the per-message nonce, so the same
//! passphrase yields a different key for every container while decryption can
//! still recompute the key from what the container carries.

use std::fmt;

use hmac::Hmac;
use serde::{Deserialize, Serialize};
use sha1::Sha1;
use zeroize::ZeroizeOnDrop;

use crate::error::{Result, SealError};

/// Production iteration count. Not stored in containers, so every deployment
/// that must read a container has to use the same value.
pub const DEFAULT_KDF_ITERATIONS: u32 = 1_000_000;

/// Length of derived key in bytes (32 bytes = 256 bits for AES-256).
pub const KEY_LENGTH: usize = 32;

/// Key derivation parameters injected into a [`KeyDeriver`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KdfParams {
    /// PBKDF2 iteration count
    pub iterations: u32,
}

impl Default for KdfParams {
    fn default() -> Self {
        Self {
            iterations: DEFAULT_KDF_ITERATIONS,
        }
    }
}

impl KdfParams {
    /// Parameters with a custom iteration count.
    ///
    /// Lower counts are meant for tests; containers produced with one count
    /// can only be opened with the same count.
    pub fn with_iterations(iterations: u32) -> Self {
        Self { iterations }
    }

    /// Reject parameters PBKDF2 cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.iterations == 0 {
            return Err(SealError::KeyDerivation(
                "Iteration count must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// A cryptographic key derived from a passphrase.
///
/// The backing buffer is overwritten when the key is dropped.
#[derive(Clone, ZeroizeOnDrop)]
pub struct DerivedKey {
    key: [u8; KEY_LENGTH],
}

impl DerivedKey {
    fn zeroed() -> Self {
        Self {
            key: [0u8; KEY_LENGTH],
        }
    }

    /// Get a reference to the raw key bytes.
    ///
    /// # Security
    ///
    /// Avoid storing or logging this value. Use only for the cipher call at hand.
    pub fn as_bytes(&self) -> &[u8; KEY_LENGTH] {
        &self.key
    }
}

impl fmt::Debug for DerivedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DerivedKey")
            .field("key", &"[REDACTED]")
            .finish()
    }
}

/// Stretches a passphrase and salt into an AES-256 key.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyDeriver {
    params: KdfParams,
}

impl KeyDeriver {
    pub fn new(params: KdfParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> KdfParams {
        self.params
    }

    /// Derive a key from `passphrase` and `salt`.
    ///
    /// Deterministic: the same passphrase, salt and parameters always produce
    /// the same key. Neither the passphrase nor the salt is length-checked.
    pub fn derive(&self, passphrase: &str, salt: &[u8]) -> Result<DerivedKey> {
        self.params.validate()?;

        let mut derived = DerivedKey::zeroed();
        pbkdf2::pbkdf2::<Hmac<Sha1>>(
            passphrase.as_bytes(),
            salt,
            self.params.iterations,
            &mut derived.key,
        )
        .map_err(|e| SealError::KeyDerivation(format!("PBKDF2-HMAC-SHA1 failed: {}", e)))?;

        Ok(derived)
    }
}

/// Derive an encryption key with explicit parameters.
///
/// # Examples
///
/// ```
/// use sealbox_core::crypto::{derive_key, KdfParams};
///
/// let params = KdfParams::with_iterations(1_000);
/// let key = derive_key("my-passphrase", b"twelve-bytes", &params).unwrap();
/// assert_eq!(key.as_bytes().len(), 32);
/// ```
pub fn derive_key(passphrase: &str, salt: &[u8], params: &KdfParams) -> Result<DerivedKey> {
    KeyDeriver::new(*params).derive(passphrase, salt)
}
