pub mod address;
pub mod hash;
pub mod keypair;

pub use address::address_from_public_key;
pub use hash::{sha256, tx_id_from_bytes};
pub use keypair::{verify_detached, KeyPair};
