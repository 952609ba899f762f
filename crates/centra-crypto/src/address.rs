use centra_core::constants::ADDRESS_SUFFIX;
use centra_core::types::{Address, PublicKey};

use crate::hash::sha256;

/// Derive the human-facing address from a public key.
///
/// SHA-256 the raw key bytes, read the first 8 digest bytes as a
/// little-endian u64, render in decimal, append `C`. One-way and
/// deterministic; collisions live in a 64-bit space and are tolerated
/// by the ledger.
pub fn address_from_public_key(public_key: &PublicKey) -> Address {
    let digest = sha256(public_key.as_bytes());
    let mut prefix = [0u8; 8];
    prefix.copy_from_slice(&digest[..8]);
    format!("{}{}", u64::from_le_bytes(prefix), ADDRESS_SUFFIX)
}
