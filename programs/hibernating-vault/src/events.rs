//! Events consumed by the off-ledger snapshot store

use anchor_lang::prelude::*;

/// Emitted exactly once per successful hibernation. This is the only durable
/// trace of the destroyed vault.
#[event]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VaultHibernated {
    pub owner: Pubkey,
    /// Wallet that received the closed vault's lamports.
    pub destination: Pubkey,
    pub balance: u64,
    pub state_hash: [u8; 32],
    pub hibernated_at: i64,
}

/// Emitted when a vault is recreated from a valid proof.
#[event]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VaultRestored {
    pub owner: Pubkey,
    pub balance: u64,
    pub root: [u8; 32],
    pub restored_at: i64,
}

#[event]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootUpdated {
    pub admin: Pubkey,
    pub previous_root: [u8; 32],
    pub new_root: [u8; 32],
}
