//! Cryptographic operations for Sealbox.
//!
//! - **PBKDF2-HMAC-SHA1**: passphrase stretching, salted with the message nonce
//! - **AES-256-GCM**: authenticated encryption, 96-bit nonce, 128-bit tag
//!
//! ## Security Model
//!
//! - One passphrase per call; the core never stores it
//! - Derived keys are zeroized from memory on drop
//! - Decryption verifies the tag before releasing any plaintext
//!
//! We do NOT defend against:
//! - Weak passphrases (policy belongs to the caller)
//! - Mismatched iteration counts between writer and reader

pub mod codec;
pub mod key;

pub use codec::Codec;
pub use key::{derive_key, DerivedKey, KdfParams, KeyDeriver, DEFAULT_KDF_ITERATIONS, KEY_LENGTH};
