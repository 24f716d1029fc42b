//! Thin glue over SHA-256, the only consumed hash primitive.

use sha2::{Digest, Sha256};

/// `SHA256(bytes)`.
pub fn sha256(bytes: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    hasher.finalize().into()
}
