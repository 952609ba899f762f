use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::constants::PUBLIC_KEY_LEN;
use crate::error::CentraError;
use crate::types::{address_to_u64, Address, Balance, PublicKey, Timestamp, TxId};

// ── TxType ───────────────────────────────────────────────────────────────────

/// Ledger transaction types. On the wire the type is a bare number.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TxType {
    /// Plain balance transfer.
    Send = 0,
    /// Second-signature enrollment; carries a `SignatureAsset`.
    SecondSignature = 1,
    /// Delegate registration.
    Delegate = 2,
    /// Delegate vote.
    Vote = 3,
}

impl TryFrom<u8> for TxType {
    type Error = u8;

    fn try_from(v: u8) -> Result<Self, u8> {
        match v {
            0 => Ok(TxType::Send),
            1 => Ok(TxType::SecondSignature),
            2 => Ok(TxType::Delegate),
            3 => Ok(TxType::Vote),
            other => Err(other),
        }
    }
}

impl Serialize for TxType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(*self as u8)
    }
}

impl<'de> Deserialize<'de> for TxType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let v = u8::deserialize(deserializer)?;
        TxType::try_from(v).map_err(|o| D::Error::custom(format!("unknown transaction type {o}")))
    }
}

// ── SignatureAsset ───────────────────────────────────────────────────────────

/// Payload of a type-1 transaction: the second public key being enrolled.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignatureAsset {
    pub public_key: PublicKey,
}

impl SignatureAsset {
    /// Canonical fixed-layout encoding: the raw 32 public-key bytes.
    ///
    /// Enrollment signing and later second-signature verification must both
    /// hash exactly these bytes; the layout is a compatibility contract.
    pub fn canonical_bytes(&self) -> [u8; PUBLIC_KEY_LEN] {
        *self.public_key.as_bytes()
    }
}

// ── TransactionAsset ─────────────────────────────────────────────────────────

/// Optional typed payloads attached to a transaction.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionAsset {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signature: Option<SignatureAsset>,
}

impl TransactionAsset {
    pub fn second_signature(asset: SignatureAsset) -> Self {
        Self {
            signature: Some(asset),
        }
    }
}

// ── Transaction ──────────────────────────────────────────────────────────────

/// A ledger transaction as constructed and signed by this node.
///
/// The `id` is content-addressed: the first 8 bytes of the SHA-256 of the
/// fully signed byte encoding, little-endian. Hashing itself lives in
/// `centra-crypto`; this type only defines the canonical byte layout.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    #[serde(rename = "type")]
    pub tx_type: TxType,
    pub amount: Balance,
    pub recipient_id: Option<Address>,
    pub sender_public_key: PublicKey,
    pub timestamp: Timestamp,
    #[serde(default)]
    pub asset: TransactionAsset,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signature: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<TxId>,
}

impl Transaction {
    /// Build an unsigned type-1 enrollment transaction: zero amount, no
    /// recipient, the new second public key as asset.
    pub fn second_signature(
        sender_public_key: PublicKey,
        timestamp: Timestamp,
        asset: SignatureAsset,
    ) -> Self {
        Self {
            tx_type: TxType::SecondSignature,
            amount: 0,
            recipient_id: None,
            sender_public_key,
            timestamp,
            asset: TransactionAsset::second_signature(asset),
            signature: None,
            id: None,
        }
    }

    /// Canonical wire bytes:
    ///
    /// ```text
    /// type (1) | timestamp u32 LE | sender public key (32)
    /// | recipient u64 BE, zero when absent (8) | amount u64 LE
    /// | asset canonical bytes | signature (64, when present and requested)
    /// ```
    ///
    /// Signing hashes the encoding without the signature; the transaction
    /// id hashes the encoding with it.
    pub fn to_bytes(&self, include_signature: bool) -> Result<Vec<u8>, CentraError> {
        let mut buf = Vec::with_capacity(160);
        buf.push(self.tx_type as u8);
        buf.extend_from_slice(&self.timestamp.to_le_bytes());
        buf.extend_from_slice(self.sender_public_key.as_bytes());
        match &self.recipient_id {
            Some(address) => buf.extend_from_slice(&address_to_u64(address)?.to_be_bytes()),
            None => buf.extend_from_slice(&[0u8; 8]),
        }
        buf.extend_from_slice(&self.amount.to_le_bytes());
        if let Some(asset) = &self.asset.signature {
            buf.extend_from_slice(&asset.canonical_bytes());
        }
        if include_signature {
            if let Some(signature) = &self.signature {
                let sig_bytes = hex::decode(signature)
                    .map_err(|e| CentraError::Serialization(e.to_string()))?;
                buf.extend_from_slice(&sig_bytes);
            }
        }
        Ok(buf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_pubkey() -> PublicKey {
        PublicKey::from_hex("5117ea567abd0d52404f307592c7ddc25739f0dff6ebecdff24a61b5bfb6b089")
            .unwrap()
    }

    fn second_pubkey() -> PublicKey {
        PublicKey::from_hex("0a406e85b69912499df2bfaf55156e42effa374d6ac6303687d489dc8c8408e4")
            .unwrap()
    }

    #[test]
    fn enrollment_tx_has_fixed_shape() {
        let tx = Transaction::second_signature(
            sample_pubkey(),
            100,
            SignatureAsset {
                public_key: second_pubkey(),
            },
        );
        assert_eq!(tx.tx_type, TxType::SecondSignature);
        assert_eq!(tx.amount, 0);
        assert!(tx.recipient_id.is_none());
        assert_eq!(tx.asset.signature.unwrap().public_key, second_pubkey());
    }

    #[test]
    fn canonical_bytes_layout() {
        let tx = Transaction::second_signature(
            sample_pubkey(),
            0x0102_0304,
            SignatureAsset {
                public_key: second_pubkey(),
            },
        );
        let bytes = tx.to_bytes(false).unwrap();
        // 1 type + 4 timestamp + 32 sender + 8 recipient + 8 amount + 32 asset
        assert_eq!(bytes.len(), 85);
        assert_eq!(bytes[0], 1);
        assert_eq!(&bytes[1..5], &0x0102_0304u32.to_le_bytes());
        assert_eq!(&bytes[5..37], sample_pubkey().as_bytes());
        assert_eq!(&bytes[37..45], &[0u8; 8]); // no recipient
        assert_eq!(&bytes[45..53], &0u64.to_le_bytes());
        assert_eq!(&bytes[53..85], second_pubkey().as_bytes());
    }

    #[test]
    fn signature_included_only_when_requested() {
        let mut tx = Transaction::second_signature(
            sample_pubkey(),
            7,
            SignatureAsset {
                public_key: second_pubkey(),
            },
        );
        tx.signature = Some(hex::encode([0xabu8; 64]));
        let unsigned = tx.to_bytes(false).unwrap();
        let signed = tx.to_bytes(true).unwrap();
        assert_eq!(signed.len(), unsigned.len() + 64);
        assert_eq!(&signed[..unsigned.len()], &unsigned[..]);
    }

    #[test]
    fn json_uses_wire_field_names() {
        let tx = Transaction::second_signature(
            sample_pubkey(),
            42,
            SignatureAsset {
                public_key: second_pubkey(),
            },
        );
        let json = serde_json::to_value(&tx).unwrap();
        assert_eq!(json["type"], 1);
        assert_eq!(json["amount"], 0);
        assert_eq!(json["recipientId"], serde_json::Value::Null);
        assert_eq!(
            json["asset"]["signature"]["publicKey"],
            second_pubkey().to_hex()
        );
        // Unsigned transactions carry no signature or id fields.
        assert!(json.get("signature").is_none());
        assert!(json.get("id").is_none());
    }
}
