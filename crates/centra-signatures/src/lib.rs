//! centra-signatures
//!
//! Second-signature enrollment: the type-1 transaction that attaches an
//! additional required signing key to an account. Collaborators (account
//! lookup, unconfirmed-pool sink, signature storage) are injected through
//! the traits in [`ports`]; this crate never mutates ledger state itself.

pub mod api;
pub mod codec;
pub mod ports;
pub mod service;

pub use ports::{AccountLookup, SignatureStore, TransactionSink};
pub use service::{EnrollmentRequest, SignatureService};
