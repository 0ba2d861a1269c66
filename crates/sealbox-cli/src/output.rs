//! Output formatting helpers for the CLI.

use sealbox_core::container::TAG_LEN;
use sealbox_core::Container;

/// Convert a container header to JSON for output.
pub fn container_json(container: &Container<'_>, total_len: usize) -> serde_json::Value {
    serde_json::json!({
        "container_len": total_len,
        "nonce_len": container.nonce().len(),
        "nonce": hex::encode(container.nonce()),
        "ciphertext_len": container.ciphertext().len(),
        "payload_len": container.payload_len(),
        "tag_len": TAG_LEN,
        "cipher": "AES-256-GCM",
        "kdf": "PBKDF2-HMAC-SHA1",
    })
}

/// Render a container header in human-readable form.
pub fn container_text(container: &Container<'_>, total_len: usize) -> String {
    format!(
        "Container: {} bytes\nNonce: {} bytes ({})\nCiphertext: {} bytes ({} payload + {} tag)\nCipher: AES-256-GCM, key from PBKDF2-HMAC-SHA1",
        total_len,
        container.nonce().len(),
        hex::encode(container.nonce()),
        container.ciphertext().len(),
        container.payload_len(),
        TAG_LEN
    )
}
