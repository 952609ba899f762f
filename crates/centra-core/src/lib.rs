pub mod account;
pub mod constants;
pub mod error;
pub mod slots;
pub mod transaction;
pub mod types;

pub use account::{Account, SecondSignatureStatus};
pub use error::{CentraError, ErrorKind};
pub use transaction::{SignatureAsset, Transaction, TransactionAsset, TxType};
pub use types::{Address, Balance, PublicKey, Timestamp, TxId};
