//! AES-GCM authenticated encryption over the container format.
//!
//! Encryption draws a fresh 12-byte nonce, derives the key with that nonce as
//! salt, seals the plaintext and packs the result. Decryption parses the
//! container, re-derives the same key from the carried nonce and opens it.

use std::time::Instant;

use aes_gcm::aead::consts::{U13, U14, U15};
use aes_gcm::aead::{Aead, KeyInit, Nonce};
use aes_gcm::aes::Aes256;
use aes_gcm::{Aes256Gcm, AesGcm};
use tracing::debug;

use crate::container::{Container, NONCE_LEN};
use crate::crypto::key::{DerivedKey, KdfParams, KeyDeriver};
use crate::error::{Result, SealError};

/// Passphrase-based AES-256-GCM codec.
///
/// Holds only its KDF parameters; every call owns its nonce, key and buffers,
/// so one codec can be shared freely across threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct Codec {
    deriver: KeyDeriver,
}

impl Codec {
    pub fn new(params: KdfParams) -> Self {
        Self {
            deriver: KeyDeriver::new(params),
        }
    }

    pub fn params(&self) -> KdfParams {
        self.deriver.params()
    }

    /// Encrypt `plaintext` under `passphrase` into a serialized container.
    ///
    /// Two calls with identical inputs produce different containers because
    /// the nonce is drawn fresh each time.
    ///
    /// # Examples
    ///
    /// ```
    /// use sealbox_core::{Codec, KdfParams};
    ///
    /// let codec = Codec::new(KdfParams::with_iterations(1_000));
    /// let sealed = codec.encrypt("my-passphrase", b"secret data").unwrap();
    /// let opened = codec.decrypt("my-passphrase", &sealed).unwrap();
    /// assert_eq!(opened, b"secret data");
    /// ```
    pub fn encrypt(&self, passphrase: &str, plaintext: &[u8]) -> Result<Vec<u8>> {
        let started = Instant::now();
        debug!(plaintext_len = plaintext.len(), "encrypt started");

        let mut nonce = [0u8; NONCE_LEN];
        getrandom::getrandom(&mut nonce)
            .map_err(|e| SealError::Entropy(format!("Failed to generate nonce: {}", e)))?;

        let container = self.seal_with_nonce(passphrase, &nonce, plaintext)?;

        debug!(
            container_len = container.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "encrypt finished"
        );
        Ok(container)
    }

    /// Open a container produced by [`Codec::encrypt`] or any compatible
    /// AES-GCM writer using a 12..16 byte nonce.
    ///
    /// # Errors
    ///
    /// - `MalformedContainer` if the container is structurally invalid; no key
    ///   derivation is attempted in that case
    /// - `AuthenticationFailed` if the passphrase is wrong or any byte of the
    ///   nonce, ciphertext or tag was altered
    /// - `KeyDerivation` if the KDF parameters are unusable
    pub fn decrypt(&self, passphrase: &str, container: &[u8]) -> Result<Vec<u8>> {
        let started = Instant::now();
        debug!(container_len = container.len(), "decrypt started");

        let parsed = Container::parse(container)?;
        let key = self.deriver.derive(passphrase, parsed.nonce())?;
        let plaintext = open(&key, parsed.nonce(), parsed.ciphertext())?;

        debug!(
            plaintext_len = plaintext.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "decrypt finished"
        );
        Ok(plaintext)
    }

    fn seal_with_nonce(
        &self,
        passphrase: &str,
        nonce: &[u8; NONCE_LEN],
        plaintext: &[u8],
    ) -> Result<Vec<u8>> {
        let key = self.deriver.derive(passphrase, nonce)?;
        let cipher = Aes256Gcm::new_from_slice(key.as_bytes()).map_err(|e| {
            SealError::CipherUnavailable(format!("AES-256-GCM init failed: {}", e))
        })?;

        let ciphertext = cipher
            .encrypt(Nonce::<Aes256Gcm>::from_slice(nonce), plaintext)
            .map_err(|_| SealError::CipherUnavailable("AES-256-GCM seal failed".to_string()))?;

        Ok(Container::pack(nonce, &ciphertext))
    }
}

/// Dispatch on nonce length; GCM with a non-96-bit nonce derives its initial
/// counter block through GHASH, which needs a distinct cipher type per size.
fn open(key: &DerivedKey, nonce: &[u8], ciphertext: &[u8]) -> Result<Vec<u8>> {
    match nonce.len() {
        12 => open_with::<Aes256Gcm>(key, nonce, ciphertext),
        13 => open_with::<AesGcm<Aes256, U13>>(key, nonce, ciphertext),
        14 => open_with::<AesGcm<Aes256, U14>>(key, nonce, ciphertext),
        15 => open_with::<AesGcm<Aes256, U15>>(key, nonce, ciphertext),
        other => Err(SealError::MalformedContainer(format!(
            "nonce length out of accepted range ({})",
            other
        ))),
    }
}

fn open_with<C>(key: &DerivedKey, nonce: &[u8], ciphertext: &[u8]) -> Result<Vec<u8>>
where
    C: Aead + KeyInit,
{
    let cipher = C::new_from_slice(key.as_bytes()).map_err(|e| {
        SealError::CipherUnavailable(format!("AES-256-GCM init failed: {}", e))
    })?;

    cipher
        .decrypt(Nonce::<C>::from_slice(nonce), ciphertext)
        .map_err(|_| SealError::AuthenticationFailed)
}
