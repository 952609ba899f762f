use std::sync::Arc;

use tracing::{debug, info};

use centra_core::error::CentraError;
use centra_core::slots;
use centra_core::transaction::{SignatureAsset, Transaction};
use centra_core::types::TxId;
use centra_crypto::{sha256, tx_id_from_bytes, KeyPair};

use crate::ports::{AccountLookup, SignatureRecord, SignatureStore, TransactionSink};

/// Input for a second-signature enrollment, as received from the caller.
#[derive(Clone, Debug)]
pub struct EnrollmentRequest {
    /// Primary passphrase; must derive the account's recorded public key.
    pub secret: String,
    /// Passphrase for the new second key.
    pub second_secret: String,
    /// Optional explicit public key; when supplied it must equal the one
    /// derived from `secret`.
    pub public_key: Option<String>,
}

/// Second-signature enrollment and signature queries.
///
/// Collaborators are injected at construction. The service reads account
/// flags and proposes a signed transaction; all state mutation happens
/// externally once the sequencer accepts it.
pub struct SignatureService {
    accounts: Arc<dyn AccountLookup>,
    sink: Arc<dyn TransactionSink>,
    store: Arc<dyn SignatureStore>,
}

impl SignatureService {
    pub fn new(
        accounts: Arc<dyn AccountLookup>,
        sink: Arc<dyn TransactionSink>,
        store: Arc<dyn SignatureStore>,
    ) -> Self {
        Self {
            accounts,
            sink,
            store,
        }
    }

    /// Look up a confirmed second-signature record by transaction id.
    pub fn get(&self, id: &str) -> Result<SignatureRecord, CentraError> {
        if id.is_empty() {
            return Err(CentraError::MissingId);
        }
        let tx_id = TxId::parse(id)?;
        self.store
            .signature_by_transaction_id(&tx_id)?
            .ok_or_else(|| CentraError::SignatureNotFound(id.to_string()))
    }

    /// Validate, build, sign and submit a type-1 enrollment transaction.
    ///
    /// Guard order: validation first (no I/O), then identity against a
    /// single account lookup, then state. The guard is not atomic with the
    /// ledger — a concurrent enrollment can race past it, and the sequencer
    /// makes the final call.
    pub fn enroll(&self, request: &EnrollmentRequest) -> Result<Transaction, CentraError> {
        if request.secret.is_empty() {
            return Err(CentraError::MissingSecret);
        }
        if request.second_secret.is_empty() {
            return Err(CentraError::MissingSecondSecret);
        }

        let primary = KeyPair::from_passphrase(&request.secret);
        let primary_hex = primary.public_key().to_hex();

        if let Some(supplied) = &request.public_key {
            if *supplied != primary_hex {
                return Err(CentraError::PublicKeyMismatch);
            }
        }

        let account = self
            .accounts
            .account_by_public_key(&primary_hex)?
            .ok_or_else(|| CentraError::AccountNotFound(primary_hex.clone()))?;

        let sender_public_key = account.public_key.ok_or(CentraError::AccountNotReady)?;

        if !account.can_enroll_second_signature() {
            return Err(CentraError::SecondSignatureAlreadyEnabled);
        }

        let second = KeyPair::from_passphrase(&request.second_secret);
        let asset = SignatureAsset {
            public_key: second.public_key(),
        };
        debug!(account = %account.address, second_key = %asset.public_key,
            "building second-signature enrollment");

        let mut transaction =
            Transaction::second_signature(sender_public_key, slots::epoch_time(), asset);

        // The enrollment is authorized by the existing primary key, not the
        // new second key.
        let unsigned = transaction.to_bytes(false)?;
        transaction.signature = Some(primary.sign_hex(&sha256(&unsigned)));

        let signed = transaction.to_bytes(true)?;
        let id = tx_id_from_bytes(&signed);
        transaction.id = Some(id);

        self.sink.submit(&transaction)?;
        info!(%id, account = %account.address, "second-signature enrollment submitted");

        Ok(transaction)
    }
}
