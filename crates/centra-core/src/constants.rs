/// ─── Centra Protocol Constants ──────────────────────────────────────────────
///
/// Centra is a delegated-proof-of-stake ledger; timestamps on the wire are
/// seconds since the network epoch, not Unix time.

// ── Time ─────────────────────────────────────────────────────────────────────

/// Network epoch: 2016-05-24 17:00:00 UTC. All transaction timestamps
/// count seconds from this instant.
pub const EPOCH_TIMESTAMP: i64 = 1_464_109_200;

// ── Keys / signatures ────────────────────────────────────────────────────────

/// Ed25519 public key length in bytes.
pub const PUBLIC_KEY_LEN: usize = 32;

/// Ed25519 signature length in bytes.
pub const SIGNATURE_LEN: usize = 64;

// ── Addresses ────────────────────────────────────────────────────────────────

/// Every Centra address is a decimal u64 followed by this suffix.
pub const ADDRESS_SUFFIX: char = 'C';
