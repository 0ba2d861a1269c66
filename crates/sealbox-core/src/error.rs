//! Error types for Sealbox core operations.
//!
//! Every failure is terminal for the call that produced it: the core never
//! retries and never releases partial output. Messages never contain the
//! passphrase or derived key material.

use thiserror::Error;

/// Result type alias for Sealbox operations.
pub type Result<T> = std::result::Result<T, SealError>;

/// Core error type for Sealbox operations.
#[derive(Debug, Error)]
pub enum SealError {
    /// Key derivation primitive rejected its inputs or parameters
    #[error("Key derivation error: {0}")]
    KeyDerivation(String),

    /// Cipher primitive could not be initialized
    #[error("Cipher unavailable: {0}")]
    CipherUnavailable(String),

    /// Structurally invalid container handed to decrypt
    #[error("Malformed container: {0}")]
    MalformedContainer(String),

    /// Authentication tag did not verify
    #[error("integrity check failed: wrong passphrase or corrupted/tampered data")]
    AuthenticationFailed,

    /// Operating system random source failed
    #[error("Entropy error: {0}")]
    Entropy(String),
}

impl SealError {
    /// True when decryption failed because the tag did not verify.
    ///
    /// Wrong passphrase and tampered data are indistinguishable here.
    pub fn is_authentication_failure(&self) -> bool {
        matches!(self, SealError::AuthenticationFailed)
    }

    /// True when the input to decrypt was structurally invalid.
    pub fn is_malformed(&self) -> bool {
        matches!(self, SealError::MalformedContainer(_))
    }
}
