//! Seams to the external node components. Implementations are injected at
//! service construction; there is no later bind step.

use centra_core::account::Account;
use centra_core::error::CentraError;
use centra_core::transaction::Transaction;
use centra_core::types::TxId;
use serde::{Deserialize, Serialize};

/// Read access to ledger account state, keyed by public key.
pub trait AccountLookup: Send + Sync {
    /// `Ok(None)` when no account exists for the key. Errors are external
    /// lookup failures, surfaced verbatim.
    fn account_by_public_key(&self, public_key_hex: &str)
        -> Result<Option<Account>, CentraError>;
}

/// The unconfirmed-pool sequencer. Acceptance here is the final arbiter of
/// at-most-one-enrollment-per-account; the service never retries.
pub trait TransactionSink: Send + Sync {
    fn submit(&self, transaction: &Transaction) -> Result<(), CentraError>;
}

/// A confirmed second-signature record as stored by the node.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignatureRecord {
    pub transaction_id: TxId,
    pub public_key: String,
}

/// Query access to persisted signature records.
pub trait SignatureStore: Send + Sync {
    fn signature_by_transaction_id(
        &self,
        id: &TxId,
    ) -> Result<Option<SignatureRecord>, CentraError>;
}
