use thiserror::Error;

/// Coarse classification of a `CentraError`, for callers that branch on
/// cause rather than on the specific variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed or missing input; rejected before any I/O.
    Validation,
    /// The caller's identity does not match ledger state.
    Identity,
    /// The operation conflicts with current state (already enabled,
    /// already exists).
    State,
    /// An external collaborator failed; surfaced verbatim, never retried.
    External,
}

#[derive(Debug, Error)]
pub enum CentraError {
    // ── Validation ───────────────────────────────────────────────────────────
    #[error("provide secret key")]
    MissingSecret,

    #[error("provide second secret key")]
    MissingSecondSecret,

    #[error("provide id in url")]
    MissingId,

    #[error("invalid public key: {0}")]
    InvalidPublicKey(String),

    #[error("invalid address: {0}")]
    InvalidAddress(String),

    #[error("invalid transaction id: {0}")]
    InvalidTransactionId(String),

    // ── Identity ─────────────────────────────────────────────────────────────
    #[error("provided public key does not match the key derived from secret")]
    PublicKeyMismatch,

    #[error("account not found: {0}")]
    AccountNotFound(String),

    #[error("open account to make transaction")]
    AccountNotReady,

    // ── State ────────────────────────────────────────────────────────────────
    #[error("second signature already enabled")]
    SecondSignatureAlreadyEnabled,

    #[error("preset already exists: {0}")]
    PresetAlreadyExists(String),

    #[error("unknown preset: {0}")]
    UnknownPreset(String),

    #[error("signature not found: {0}")]
    SignatureNotFound(String),

    // ── External ─────────────────────────────────────────────────────────────
    #[error("account lookup failed: {0}")]
    Lookup(String),

    #[error("transaction rejected by sequencer: {0}")]
    Sequencer(String),

    #[error("genesis renderer failed: {0}")]
    Renderer(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(String),
}

impl CentraError {
    pub fn kind(&self) -> ErrorKind {
        use CentraError::*;
        match self {
            MissingSecret | MissingSecondSecret | MissingId | InvalidPublicKey(_)
            | InvalidAddress(_) | InvalidTransactionId(_) => ErrorKind::Validation,
            PublicKeyMismatch | AccountNotFound(_) | AccountNotReady => ErrorKind::Identity,
            SecondSignatureAlreadyEnabled | PresetAlreadyExists(_) | UnknownPreset(_)
            | SignatureNotFound(_) => ErrorKind::State,
            Lookup(_) | Sequencer(_) | Renderer(_) | Io(_) | Serialization(_) => {
                ErrorKind::External
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_follow_the_taxonomy() {
        assert_eq!(CentraError::MissingSecret.kind(), ErrorKind::Validation);
        assert_eq!(CentraError::PublicKeyMismatch.kind(), ErrorKind::Identity);
        assert_eq!(
            CentraError::SecondSignatureAlreadyEnabled.kind(),
            ErrorKind::State
        );
        assert_eq!(
            CentraError::Sequencer("queue full".into()).kind(),
            ErrorKind::External
        );
    }
}
