//! Container wire format.
//!
//! ```text
//! offset 0..4     nonce length L, u32 big-endian
//! offset 4..4+L   nonce
//! offset 4+L..    ciphertext || 16-byte GCM tag
//! ```
//!
//! There is no magic number or version byte. The cipher (AES-256-GCM) and the
//! KDF parameters are agreed out of band.

use crate::error::{Result, SealError};

/// Size of the big-endian nonce length prefix.
pub const LENGTH_PREFIX_LEN: usize = 4;

/// Nonce length this codec writes.
pub const NONCE_LEN: usize = 12;

/// Smallest nonce length accepted on decrypt.
pub const MIN_NONCE_LEN: usize = 12;

/// Nonce lengths must be strictly below this bound.
pub const MAX_NONCE_LEN_EXCLUSIVE: usize = 16;

/// GCM authentication tag length (128 bits).
pub const TAG_LEN: usize = 16;

/// Borrowed view over a serialized container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Container<'a> {
    nonce: &'a [u8],
    ciphertext: &'a [u8],
}

impl<'a> Container<'a> {
    /// Split a serialized container into nonce and ciphertext.
    ///
    /// The nonce length is checked against `[12, 16)` before anything else is
    /// read past the prefix, so an out-of-range prefix never reaches the KDF or
    /// the cipher.
    pub fn parse(bytes: &'a [u8]) -> Result<Self> {
        let (prefix, rest) = bytes.split_at_checked(LENGTH_PREFIX_LEN).ok_or_else(|| {
            SealError::MalformedContainer(format!(
                "container is {} bytes, shorter than the {}-byte length prefix",
                bytes.len(),
                LENGTH_PREFIX_LEN
            ))
        })?;

        let mut len_bytes = [0u8; LENGTH_PREFIX_LEN];
        len_bytes.copy_from_slice(prefix);
        let nonce_len = u32::from_be_bytes(len_bytes) as usize;

        if !(MIN_NONCE_LEN..MAX_NONCE_LEN_EXCLUSIVE).contains(&nonce_len) {
            return Err(SealError::MalformedContainer(format!(
                "nonce length out of accepted range ({} not in {}..{})",
                nonce_len, MIN_NONCE_LEN, MAX_NONCE_LEN_EXCLUSIVE
            )));
        }

        let (nonce, ciphertext) = rest.split_at_checked(nonce_len).ok_or_else(|| {
            SealError::MalformedContainer(format!(
                "truncated nonce: expected {} bytes, found {}",
                nonce_len,
                rest.len()
            ))
        })?;

        if ciphertext.len() < TAG_LEN {
            return Err(SealError::MalformedContainer(format!(
                "ciphertext is {} bytes, shorter than the {}-byte authentication tag",
                ciphertext.len(),
                TAG_LEN
            )));
        }

        Ok(Self { nonce, ciphertext })
    }

    /// Nonce bytes, also the KDF salt.
    pub fn nonce(&self) -> &'a [u8] {
        self.nonce
    }

    /// Ciphertext with the trailing tag.
    pub fn ciphertext(&self) -> &'a [u8] {
        self.ciphertext
    }

    /// Length of the encrypted payload without the tag.
    pub fn payload_len(&self) -> usize {
        self.ciphertext.len() - TAG_LEN
    }

    /// Serialize `nonce` and `ciphertext` into a fresh buffer.
    pub fn pack(nonce: &[u8], ciphertext: &[u8]) -> Vec<u8> {
        let mut out = Vec::with_capacity(LENGTH_PREFIX_LEN + nonce.len() + ciphertext.len());
        out.extend_from_slice(&(nonce.len() as u32).to_be_bytes());
        out.extend_from_slice(nonce);
        out.extend_from_slice(ciphertext);
        out
    }

    /// Exact size of the container this codec produces for a plaintext of
    /// `plaintext_len` bytes.
    pub fn encoded_len(plaintext_len: usize) -> usize {
        LENGTH_PREFIX_LEN + NONCE_LEN + plaintext_len + TAG_LEN
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn container_with_prefix(nonce_len: u32, body_len: usize) -> Vec<u8> {
        let mut bytes = nonce_len.to_be_bytes().to_vec();
        bytes.extend(std::iter::repeat(0xAB).take(body_len));
        bytes
    }

    #[test]
    fn test_pack_layout() {
        let nonce = [1u8; NONCE_LEN];
        let ciphertext = [2u8; 20];

        let packed = Container::pack(&nonce, &ciphertext);

        assert_eq!(&packed[..4], &[0, 0, 0, 12]);
        assert_eq!(&packed[4..16], &nonce);
        assert_eq!(&packed[16..], &ciphertext);
    }

    #[test]
    fn test_parse_splits_fields() {
        let nonce = [4u8; NONCE_LEN];
        let ciphertext = [5u8; TAG_LEN + 3];
        let packed = Container::pack(&nonce, &ciphertext);

        let container = Container::parse(&packed).unwrap();

        assert_eq!(container.nonce(), &nonce);
        assert_eq!(container.ciphertext(), &ciphertext);
        assert_eq!(container.payload_len(), 3);
    }

    #[test]
    fn test_parse_accepts_nonce_lengths_12_to_15() {
        for nonce_len in 12u32..16 {
            let bytes = container_with_prefix(nonce_len, nonce_len as usize + TAG_LEN);
            let container = Container::parse(&bytes).unwrap();
            assert_eq!(container.nonce().len(), nonce_len as usize);
            assert_eq!(container.ciphertext().len(), TAG_LEN);
        }
    }

    #[test]
    fn test_parse_rejects_nonce_length_out_of_range() {
        for nonce_len in [0u32, 1, 11, 16, 17, 255, u32::MAX] {
            let bytes = container_with_prefix(nonce_len, 64);
            let err = Container::parse(&bytes).unwrap_err();
            assert!(err.is_malformed(), "nonce_len {} should be rejected", nonce_len);
            assert!(err.to_string().contains("nonce length out of accepted range"));
        }
    }

    #[test]
    fn test_parse_rejects_short_prefix() {
        for len in 0..LENGTH_PREFIX_LEN {
            let bytes = vec![0u8; len];
            assert!(Container::parse(&bytes).unwrap_err().is_malformed());
        }
    }

    #[test]
    fn test_parse_rejects_truncated_nonce() {
        let bytes = container_with_prefix(12, 11);
        let err = Container::parse(&bytes).unwrap_err();
        assert!(err.to_string().contains("truncated nonce"));
    }

    #[test]
    fn test_parse_rejects_missing_tag() {
        let bytes = container_with_prefix(12, 12 + TAG_LEN - 1);
        let err = Container::parse(&bytes).unwrap_err();
        assert!(err.to_string().contains("authentication tag"));
    }

    #[test]
    fn test_encoded_len() {
        assert_eq!(Container::encoded_len(0), 32);
        assert_eq!(Container::encoded_len(3), 35);
    }
}
