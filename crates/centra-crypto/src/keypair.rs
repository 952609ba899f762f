use ed25519_dalek::{Signer, SigningKey, Verifier, VerifyingKey};
use zeroize::Zeroize;

use centra_core::constants::SIGNATURE_LEN;
use centra_core::error::CentraError;
use centra_core::types::PublicKey;

use crate::hash::sha256;

/// A passphrase-derived Ed25519 keypair.
///
/// The seed is the SHA-256 of the passphrase bytes, so the keypair is a
/// pure function of the passphrase: identical input, byte-identical keys.
/// Signing is RFC 8032 deterministic — no RNG anywhere.
///
/// Seed material is wiped on drop.
pub struct KeyPair {
    signing_key: SigningKey,
}

impl KeyPair {
    /// Derive from the UTF-8 bytes of a passphrase.
    pub fn from_passphrase(passphrase: &str) -> Self {
        Self::from_seed_bytes(passphrase.as_bytes())
    }

    /// Derive from raw bytes. A 32-byte SHA-256 digest is always a valid
    /// Ed25519 seed, so derivation cannot fail.
    pub fn from_seed_bytes(secret: &[u8]) -> Self {
        let seed = sha256(secret);
        Self {
            signing_key: SigningKey::from_bytes(&seed),
        }
    }

    pub fn public_key(&self) -> PublicKey {
        PublicKey::from_bytes(self.signing_key.verifying_key().to_bytes())
    }

    /// Sign `message`, returning the raw 64-byte signature.
    pub fn sign(&self, message: &[u8]) -> [u8; SIGNATURE_LEN] {
        self.signing_key.sign(message).to_bytes()
    }

    /// Sign `message`, returning the signature as lowercase hex.
    pub fn sign_hex(&self, message: &[u8]) -> String {
        hex::encode(self.sign(message))
    }
}

impl Drop for KeyPair {
    fn drop(&mut self) {
        let mut seed = self.signing_key.to_bytes();
        seed.zeroize();
    }
}

impl std::fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "KeyPair {{ public_key: {} }}", self.public_key())
    }
}

/// Verify a hex-encoded detached signature over `message` against `public_key`.
pub fn verify_detached(
    public_key: &PublicKey,
    message: &[u8],
    signature_hex: &str,
) -> Result<bool, CentraError> {
    let verifying_key = VerifyingKey::from_bytes(public_key.as_bytes())
        .map_err(|_| CentraError::InvalidPublicKey(public_key.to_hex()))?;
    let sig_bytes: [u8; SIGNATURE_LEN] = hex::decode(signature_hex)
        .map_err(|e| CentraError::Serialization(e.to_string()))?
        .try_into()
        .map_err(|_| CentraError::Serialization("signature must be 64 bytes".into()))?;
    let signature = ed25519_dalek::Signature::from_bytes(&sig_bytes);
    Ok(verifying_key.verify(message, &signature).is_ok())
}
