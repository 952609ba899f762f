use serde::{Deserialize, Serialize};

use crate::types::{Address, Balance, PublicKey};

// ── SecondSignatureStatus ────────────────────────────────────────────────────

/// Where an account stands in the second-signature lifecycle.
///
/// `NoSecondSignature → PendingSecondSignature → SecondSignatureActive`;
/// `SecondSignatureActive` is terminal. Enrollment is only permitted from
/// `NoSecondSignature`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SecondSignatureStatus {
    /// No second signature enrolled or pending.
    NoSecondSignature,
    /// An enrollment transaction was admitted to the unconfirmed pool.
    PendingSecondSignature,
    /// The enrollment confirmed; every sensitive transaction now needs a
    /// second signature.
    SecondSignatureActive,
}

// ── Account ──────────────────────────────────────────────────────────────────

/// Read-only view of ledger account state. The ledger-state component owns
/// and mutates the record; this crate only inspects the security flags and
/// proposes transactions.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub address: Address,
    /// None until the account has made its first outgoing transaction.
    pub public_key: Option<PublicKey>,
    pub second_public_key: Option<PublicKey>,
    pub second_signature_enabled: bool,
    /// An enrollment transaction is in the unconfirmed pool.
    pub unconfirmed_second_signature: bool,
    pub balance: Balance,
}

impl Account {
    pub fn second_signature_status(&self) -> SecondSignatureStatus {
        if self.second_signature_enabled {
            SecondSignatureStatus::SecondSignatureActive
        } else if self.unconfirmed_second_signature {
            SecondSignatureStatus::PendingSecondSignature
        } else {
            SecondSignatureStatus::NoSecondSignature
        }
    }

    /// True only in the `NoSecondSignature` state.
    pub fn can_enroll_second_signature(&self) -> bool {
        self.second_signature_status() == SecondSignatureStatus::NoSecondSignature
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn account(enabled: bool, unconfirmed: bool) -> Account {
        Account {
            address: "59077504049819386C".into(),
            public_key: None,
            second_public_key: None,
            second_signature_enabled: enabled,
            unconfirmed_second_signature: unconfirmed,
            balance: 0,
        }
    }

    #[test]
    fn status_transitions_follow_the_flags() {
        assert_eq!(
            account(false, false).second_signature_status(),
            SecondSignatureStatus::NoSecondSignature
        );
        assert_eq!(
            account(false, true).second_signature_status(),
            SecondSignatureStatus::PendingSecondSignature
        );
        assert_eq!(
            account(true, false).second_signature_status(),
            SecondSignatureStatus::SecondSignatureActive
        );
        // Enabled wins if both flags are somehow set.
        assert_eq!(
            account(true, true).second_signature_status(),
            SecondSignatureStatus::SecondSignatureActive
        );
    }

    #[test]
    fn enrollment_only_from_clean_state() {
        assert!(account(false, false).can_enroll_second_signature());
        assert!(!account(false, true).can_enroll_second_signature());
        assert!(!account(true, false).can_enroll_second_signature());
    }
}
