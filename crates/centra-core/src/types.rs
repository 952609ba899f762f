use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use crate::constants::{ADDRESS_SUFFIX, PUBLIC_KEY_LEN};
use crate::error::CentraError;

/// Balance / amount in the smallest ledger unit.
pub type Balance = u64;

/// Seconds since the network epoch (see `constants::EPOCH_TIMESTAMP`).
pub type Timestamp = u32;

/// Human-facing account address: decimal u64 with a trailing `C`.
pub type Address = String;

// ── PublicKey ────────────────────────────────────────────────────────────────

/// 32-byte Ed25519 public key. Serializes as lowercase hex, which is how
/// public keys appear everywhere in the JSON surface (accounts, assets,
/// genesis schemas).
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct PublicKey(pub [u8; PUBLIC_KEY_LEN]);

impl PublicKey {
    pub fn from_bytes(b: [u8; PUBLIC_KEY_LEN]) -> Self {
        Self(b)
    }

    pub fn as_bytes(&self) -> &[u8; PUBLIC_KEY_LEN] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Parse a 64-char hex string. Rejects wrong lengths and non-hex input.
    pub fn from_hex(s: &str) -> Result<Self, CentraError> {
        let bytes =
            hex::decode(s).map_err(|_| CentraError::InvalidPublicKey(s.to_string()))?;
        let arr: [u8; PUBLIC_KEY_LEN] = bytes
            .try_into()
            .map_err(|_| CentraError::InvalidPublicKey(s.to_string()))?;
        Ok(Self(arr))
    }
}

impl Serialize for PublicKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for PublicKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        PublicKey::from_hex(&s).map_err(D::Error::custom)
    }
}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PublicKey({}…)", &self.to_hex()[..8])
    }
}

// ── TxId ─────────────────────────────────────────────────────────────────────

/// Content-addressed transaction identifier: the first 8 bytes of the
/// SHA-256 of the signed transaction bytes, read little-endian, rendered
/// as a decimal string on the wire.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TxId(pub u64);

impl TxId {
    pub fn from_digest_prefix(digest: &[u8]) -> Self {
        let mut prefix = [0u8; 8];
        prefix.copy_from_slice(&digest[..8]);
        Self(u64::from_le_bytes(prefix))
    }

    pub fn parse(s: &str) -> Result<Self, CentraError> {
        s.parse::<u64>()
            .map(Self)
            .map_err(|_| CentraError::InvalidTransactionId(s.to_string()))
    }
}

impl Serialize for TxId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0.to_string())
    }
}

impl<'de> Deserialize<'de> for TxId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        TxId::parse(&s).map_err(D::Error::custom)
    }
}

impl fmt::Display for TxId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for TxId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TxId({})", self.0)
    }
}

// ── Address helpers ──────────────────────────────────────────────────────────

/// Strip the `C` suffix and parse the numeric part of an address.
pub fn address_to_u64(address: &str) -> Result<u64, CentraError> {
    let numeric = address
        .strip_suffix(ADDRESS_SUFFIX)
        .ok_or_else(|| CentraError::InvalidAddress(address.to_string()))?;
    numeric
        .parse::<u64>()
        .map_err(|_| CentraError::InvalidAddress(address.to_string()))
}
