use anchor_lang::prelude::Pubkey;
use hibernating_vault::events::VaultHibernated;
use serde::{Deserialize, Serialize};

/// Durable record of a hibernated vault's value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompressedState {
    #[serde(with = "pubkey_base58")]
    pub owner: Pubkey,
    pub balance: u64,
    pub state_hash: [u8; 32],
    /// Ledger time the vault was hibernated, Unix seconds.
    pub timestamp: i64,
}

impl From<&VaultHibernated> for CompressedState {
    fn from(event: &VaultHibernated) -> Self {
        Self {
            owner: event.owner,
            balance: event.balance,
            state_hash: event.state_hash,
            timestamp: event.hibernated_at,
        }
    }
}

mod pubkey_base58 {
    use std::str::FromStr;

    use anchor_lang::prelude::Pubkey;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(key: &Pubkey, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&key.to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Pubkey, D::Error> {
        let s = String::deserialize(deserializer)?;
        Pubkey::from_str(&s).map_err(de::Error::custom)
    }
}
