//! centra-genesis
//!
//! Deterministic genesis/test-fixture generation: a named preset spec is
//! expanded into a full schema of delegates, funded accounts and initial
//! votes, staged on disk alongside per-delegate forging configs, rendered
//! into a genesis block by an external process, and atomically published.
//!
//! Everything except the initial-voter sampling is a pure function of the
//! preset; the sampling takes an explicit `Rng` so tests can pin a seed.

pub mod preset;
pub mod publisher;
pub mod schema;

pub use preset::{EntrySpec, PresetAccount, PresetSpec, SecondSecret};
pub use publisher::{GenesisRenderer, PresetPublisher, ProcessRenderer, RenderJob};
pub use schema::{build_schema, GeneratedAccount, GenesisSchema, VoteSchema};
