//! Hibernating Vault - Anchor Program
//!
//! Per-owner lamport vaults that can be compacted out of account storage
//! once they have been idle long enough. Hibernation closes the vault PDA
//! and emits a `VaultHibernated` commitment for the off-ledger snapshot
//! store; wake-up recreates the vault after the caller presents the
//! admin-published commitment root.
//!
//! Lifecycle: Uninitialized -> Active (initialize) -> Active (deposit /
//! withdraw) -> Hibernated (hibernate_account) -> Active (wake_up_account).

#![allow(unexpected_cfgs)]

use anchor_lang::prelude::*;

pub mod constants;
pub mod error;
pub mod events;
pub mod instructions;
pub mod proof;
pub mod state;

use instructions::*;

declare_id!("3VVsXSvtFXnZN9ovdKiPnzxvKpdd7AepCm11aheGmmLd");

#[program]
pub mod hibernating_vault {
    use super::*;

    /// Create the config singleton. The signer becomes admin.
    pub fn initialize_config(ctx: Context<InitializeConfig>) -> Result<()> {
        ctx.accounts.initialize_config(&ctx.bumps)
    }

    /// Open an empty vault for the signer.
    pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
        ctx.accounts.initialize(&ctx.bumps)
    }

    /// Deposit lamports into the signer's vault.
    pub fn deposit(ctx: Context<Deposit>, amount: u64) -> Result<()> {
        ctx.accounts.deposit(amount)
    }

    /// Withdraw lamports from the signer's vault back to the signer.
    pub fn withdraw(ctx: Context<Withdraw>, amount: u64) -> Result<()> {
        ctx.accounts.withdraw(amount)
    }

    /// Admin only: overwrite the commitment root.
    pub fn update_root(ctx: Context<UpdateRoot>, new_root: [u8; 32]) -> Result<()> {
        ctx.accounts.update_root(new_root)
    }

    /// Close an idle vault, paying out to `destination` and emitting its
    /// commitment.
    pub fn hibernate_account(ctx: Context<HibernateAccount>) -> Result<()> {
        ctx.accounts.hibernate()
    }

    /// Recreate a vault for the signer if `proof` matches the latest root.
    pub fn wake_up_account(
        ctx: Context<WakeUpAccount>,
        proof: [u8; 32],
        balance: u64,
    ) -> Result<()> {
        ctx.accounts.wake_up(&ctx.bumps, proof, balance)
    }
}
