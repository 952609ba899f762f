use serde::{Deserialize, Serialize};

use centra_core::types::Balance;

/// Literal passphrase used when a preset says `"secondSecret": true`.
pub const DEFAULT_SECOND_SECRET: &str = "secret";

/// A named preset: the input document for genesis fixture generation.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PresetSpec {
    pub delegates: EntrySpec,
    pub accounts: EntrySpec,
    /// Default funding for generated accounts.
    #[serde(default)]
    pub balance: Balance,
}

/// Either "generate N accounts" or an explicit ordered list.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EntrySpec {
    Count(u64),
    List(Vec<PresetAccount>),
}

/// One explicit entry in a preset list. All fields optional; defaults are
/// positional (`account{i}` / `delegate{i}`) and applied by the builder.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PresetAccount {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secret: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub second_secret: Option<SecondSecret>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub balance: Option<Balance>,
}

/// `"secondSecret"` in a preset is either a boolean toggle or an explicit
/// passphrase; `true` means the literal passphrase `"secret"`.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SecondSecret {
    Enabled(bool),
    Passphrase(String),
}

impl SecondSecret {
    /// The effective second passphrase, if any.
    pub fn passphrase(&self) -> Option<&str> {
        match self {
            SecondSecret::Enabled(true) => Some(DEFAULT_SECOND_SECRET),
            SecondSecret::Enabled(false) => None,
            SecondSecret::Passphrase(s) => Some(s),
        }
    }
}
