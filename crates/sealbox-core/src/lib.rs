//! # Sealbox Core
//!
//! Passphrase-based authenticated encryption of in-memory byte payloads.
//!
//! A container is self-describing enough to be opened with only the
//! passphrase: it carries the random nonce, which doubles as the PBKDF2 salt,
//! followed by the AES-256-GCM ciphertext and tag. File handling, passphrase
//! prompts and configuration files belong to the host (see `sealbox-cli`).
//!
//! ## Architecture
//!
//! - **crypto::key**: PBKDF2-HMAC-SHA1 key derivation
//! - **crypto::codec**: AES-GCM encrypt/decrypt over the container
//! - **container**: wire format parsing and packing
//! - **error**: error taxonomy shared by all of the above

pub mod container;
pub mod crypto;
pub mod error;

pub use container::Container;
pub use crypto::{Codec, KdfParams, KeyDeriver};
pub use error::{Result, SealError};

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Encrypt with the production KDF parameters.
///
/// Equivalent to `Codec::default().encrypt(passphrase, plaintext)`.
pub fn encrypt(passphrase: &str, plaintext: &[u8]) -> Result<Vec<u8>> {
    Codec::default().encrypt(passphrase, plaintext)
}

/// Decrypt with the production KDF parameters.
///
/// Equivalent to `Codec::default().decrypt(passphrase, container)`.
pub fn decrypt(passphrase: &str, container: &[u8]) -> Result<Vec<u8>> {
    Codec::default().decrypt(passphrase, container)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_default_codec_uses_production_iterations() {
        assert_eq!(
            Codec::default().params().iterations,
            crypto::DEFAULT_KDF_ITERATIONS
        );
    }

    #[test]
    fn test_free_decrypt_rejects_malformed_without_deriving() {
        // Fails at parse, so the million-iteration KDF never runs
        let result = decrypt("any", &[0, 0, 0, 1, 0xFF]);
        assert!(matches!(result, Err(SealError::MalformedContainer(_))));
    }
}
