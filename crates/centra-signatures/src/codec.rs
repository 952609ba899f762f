//! Canonical encoding and signing of signature assets.
//!
//! The byte layout here is the compatibility contract between enrollment
//! and every later verification of a second signature: both sides must
//! hash exactly `SignatureAsset::canonical_bytes()`.

use centra_core::error::CentraError;
use centra_core::transaction::SignatureAsset;
use centra_crypto::{sha256, verify_detached, KeyPair};

/// SHA-256 over the asset's canonical bytes.
pub fn asset_hash(asset: &SignatureAsset) -> [u8; 32] {
    sha256(&asset.canonical_bytes())
}

/// Sign the asset hash with a passphrase-derived keypair; hex signature.
pub fn sign_asset(asset: &SignatureAsset, passphrase: &str) -> String {
    KeyPair::from_passphrase(passphrase).sign_hex(&asset_hash(asset))
}

/// Verify a second signature over an asset against the enrolled key.
pub fn verify_asset_signature(
    asset: &SignatureAsset,
    signature_hex: &str,
) -> Result<bool, CentraError> {
    verify_detached(&asset.public_key, &asset_hash(asset), signature_hex)
}
