//! JSON envelopes for the node's HTTP surface.
//!
//! The HTTP framework itself lives outside this crate; handlers call
//! [`SignatureService`](crate::service::SignatureService) and wrap the
//! outcome in these shapes. Errors travel as one-line messages next to a
//! `success: false` flag.

use serde::{Deserialize, Serialize};

use centra_core::error::CentraError;
use centra_core::transaction::Transaction;

use crate::ports::SignatureRecord;

/// Body of `PUT /signatures`.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PutSignatureBody {
    pub secret: String,
    pub second_secret: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_key: Option<String>,
}

/// Response of `GET /signatures?id=<transactionId>`.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GetSignatureResponse {
    Ok {
        success: bool,
        signature: SignatureRecord,
    },
    Err {
        success: bool,
        error: String,
    },
}

impl GetSignatureResponse {
    pub fn from_result(result: Result<SignatureRecord, CentraError>) -> Self {
        match result {
            Ok(signature) => Self::Ok {
                success: true,
                signature,
            },
            Err(err) => Self::Err {
                success: false,
                error: err.to_string(),
            },
        }
    }
}

/// Response of `PUT /signatures`.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PutSignatureResponse {
    Ok {
        success: bool,
        transaction: Transaction,
    },
    Err {
        success: bool,
        error: String,
    },
}

impl PutSignatureResponse {
    pub fn from_result(result: Result<Transaction, CentraError>) -> Self {
        match result {
            Ok(transaction) => Self::Ok {
                success: true,
                transaction,
            },
            Err(err) => Self::Err {
                success: false,
                error: err.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use centra_core::types::TxId;

    #[test]
    fn error_envelope_carries_flag_and_message() {
        let resp = PutSignatureResponse::from_result(Err(CentraError::MissingSecret));
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["error"], "provide secret key");
    }

    #[test]
    fn success_envelope_wraps_the_record() {
        let record = SignatureRecord {
            transaction_id: TxId(42),
            public_key: "aa".repeat(32),
        };
        let resp = GetSignatureResponse::from_result(Ok(record));
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["signature"]["transactionId"], "42");
    }
}
