use rand::Rng;
use serde::{Deserialize, Serialize};

use centra_core::types::{Address, Balance, PublicKey};
use centra_crypto::{address_from_public_key, KeyPair};

use crate::preset::{EntrySpec, PresetAccount, PresetSpec};

// ── Schema types ─────────────────────────────────────────────────────────────

/// One generated identity in a genesis schema.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedAccount {
    pub address: Address,
    pub public_key: PublicKey,
    /// Derived second public key, when the preset asked for one. The wire
    /// field is named `secondSecret` for compatibility with the schema
    /// document the renderer consumes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub second_secret: Option<PublicKey>,
    pub username: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub balance: Option<Balance>,
}

/// Initial vote wiring for the delegate set.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoteSchema {
    /// The initial voters: each delegate sampled in with 50% probability.
    pub public_keys: Vec<PublicKey>,
    /// Every delegate's public key, `+`-prefixed (a vote *for*).
    pub votes: Vec<String>,
}

/// The full generated document handed to the genesis-block renderer.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GenesisSchema {
    pub delegates: Vec<GeneratedAccount>,
    pub accounts: Vec<GeneratedAccount>,
    pub votes: VoteSchema,
}

// ── Builder ──────────────────────────────────────────────────────────────────

/// Expand a preset into a genesis schema.
///
/// Pure in everything except the initial-voter sampling, which draws from
/// `rng`. Entry order always follows the preset.
pub fn build_schema(spec: &PresetSpec, rng: &mut impl Rng) -> GenesisSchema {
    let delegates = match &spec.delegates {
        EntrySpec::Count(n) => (0..*n)
            .map(|i| {
                let mut account = generate_account(&format!("delegate{i}"), None);
                account.username = format!("genesisDelegate{i}");
                account
            })
            .collect(),
        EntrySpec::List(entries) => entries
            .iter()
            .enumerate()
            .map(|(i, entry)| from_entry(entry, &format!("account{i}"), None))
            .collect::<Vec<_>>(),
    };

    let accounts = match &spec.accounts {
        EntrySpec::Count(n) => (0..*n)
            .map(|i| {
                let mut account = generate_account(&format!("delegate{i}"), None);
                account.username = format!("genesisDelegate{i}");
                account.balance = Some(spec.balance);
                account
            })
            .collect(),
        EntrySpec::List(entries) => entries
            .iter()
            .enumerate()
            .map(|(i, entry)| from_entry(entry, &format!("delegate{i}"), Some(spec.balance)))
            .collect(),
    };

    let votes = VoteSchema {
        public_keys: delegates
            .iter()
            .filter(|_| rng.gen_bool(0.5))
            .map(|d: &GeneratedAccount| d.public_key)
            .collect(),
        votes: delegates
            .iter()
            .map(|d| format!("+{}", d.public_key))
            .collect(),
    };

    GenesisSchema {
        delegates,
        accounts,
        votes,
    }
}

/// Derive address and keys for one secret, plus the optional second key.
///
/// The second key is derived from the concatenation of the primary secret
/// and the second secret, not from the second secret alone. Schema
/// consumers depend on exactly this derivation; do not reuse the pattern
/// in new designs.
fn generate_account(secret: &str, second_secret: Option<&str>) -> GeneratedAccount {
    let public_key = KeyPair::from_passphrase(secret).public_key();
    let second = second_secret.map(|s| {
        KeyPair::from_passphrase(&format!("{secret}{s}"))
            .public_key()
    });
    GeneratedAccount {
        address: address_from_public_key(&public_key),
        public_key,
        second_secret: second,
        username: secret.to_string(),
        balance: None,
    }
}

fn from_entry(
    entry: &PresetAccount,
    default_secret: &str,
    default_balance: Option<Balance>,
) -> GeneratedAccount {
    let secret = entry.secret.as_deref().unwrap_or(default_secret);
    let second = entry.second_secret.as_ref().and_then(|s| s.passphrase());
    let mut account = generate_account(secret, second);
    if let Some(username) = &entry.username {
        account.username = username.clone();
    }
    account.balance = entry.balance.or(default_balance);
    account
}
