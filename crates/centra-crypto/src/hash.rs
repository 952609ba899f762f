use sha2::{Digest, Sha256};

use centra_core::types::TxId;

/// SHA-256 of arbitrary bytes → 32-byte array.
pub fn sha256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// Derive a TxId from the fully signed transaction bytes: SHA-256, then
/// the first 8 digest bytes read little-endian.
pub fn tx_id_from_bytes(signed_bytes: &[u8]) -> TxId {
    TxId::from_digest_prefix(&sha256(signed_bytes))
}
