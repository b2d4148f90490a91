//! State definitions for the global config and per-owner vaults

use anchor_lang::prelude::*;
use solana_sha256_hasher::hashv;

use crate::constants::{CONFIG_SEED, INACTIVITY_THRESHOLD_SECONDS, STATE_HASH_DOMAIN, VAULT_SEED};
use crate::error::VaultError;

/// Deployment-wide singleton holding the admin and the commitment root
#[account]
#[derive(InitSpace)]
pub struct GlobalConfig {
    /// Fixed by `initialize_config`; there is no rotation instruction
    pub admin: Pubkey,
    /// All-zero until the admin's first `update_root`
    pub latest_root: [u8; 32],
    /// Bump seed for the config PDA
    pub bump: u8,
}

impl GlobalConfig {
    pub fn address() -> (Pubkey, u8) {
        Pubkey::find_program_address(&[CONFIG_SEED], &crate::ID)
    }

    pub fn is_initialized(&self) -> bool {
        self.admin != Pubkey::default()
    }
}

/// Per-owner custody record. Its existence is what "Active" means.
#[account]
#[derive(InitSpace)]
pub struct VaultAccount {
    /// Owner of the vault
    pub owner: Pubkey,
    /// Lamports held on the owner's behalf, on top of the rent reserve
    pub balance: u64,
    /// Unix timestamp of the last balance change or restore
    pub last_used: i64,
    /// Root this vault was restored against; zero for a fresh vault
    pub restored_root: [u8; 32],
    /// Bump seed for PDA derivation
    pub bump: u8,
}

impl VaultAccount {
    pub fn address(owner: &Pubkey) -> (Pubkey, u8) {
        Pubkey::find_program_address(&[VAULT_SEED, owner.as_ref()], &crate::ID)
    }

    pub fn is_initialized(&self) -> bool {
        self.owner != Pubkey::default()
    }

    pub fn credit(&mut self, amount: u64, now: i64) -> Result<()> {
        require!(amount > 0, VaultError::InvalidAmount);
        self.balance = self
            .balance
            .checked_add(amount)
            .ok_or(VaultError::ArithmeticOverflow)?;
        self.last_used = now;
        Ok(())
    }

    pub fn debit(&mut self, amount: u64, now: i64) -> Result<()> {
        self.balance = self
            .balance
            .checked_sub(amount)
            .ok_or(VaultError::InsufficientFunds)?;
        self.last_used = now;
        Ok(())
    }

    pub fn idle_seconds(&self, now: i64) -> i64 {
        now.saturating_sub(self.last_used)
    }

    /// Pure inactivity gate evaluated against the clock at transition time.
    pub fn is_dormant(&self, now: i64) -> bool {
        self.idle_seconds(now) >= INACTIVITY_THRESHOLD_SECONDS
    }

    /// Commitment to the exact record being destroyed by hibernation.
    pub fn commitment_hash(&self) -> [u8; 32] {
        hashv(&[
            STATE_HASH_DOMAIN,
            self.owner.as_ref(),
            &self.balance.to_le_bytes(),
            &self.last_used.to_le_bytes(),
            &self.restored_root,
        ])
        .to_bytes()
    }
}
