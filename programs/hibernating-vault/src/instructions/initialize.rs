use anchor_lang::prelude::*;

use crate::constants::VAULT_SEED;
use crate::error::VaultError;
use crate::state::VaultAccount;

// ---------------------------------------------------------------------------
// Initialize Vault
// ---------------------------------------------------------------------------
// Uninitialized -> Active. Creates an empty vault PDA owned by the signer.
// ---------------------------------------------------------------------------

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,

    #[account(
        init_if_needed,
        payer = owner,
        space = 8 + VaultAccount::INIT_SPACE,
        seeds = [VAULT_SEED, owner.key().as_ref()],
        bump
    )]
    pub vault_account: Account<'info, VaultAccount>,

    pub system_program: Program<'info, System>,
}

impl<'info> Initialize<'info> {
    pub fn initialize(&mut self, bumps: &InitializeBumps) -> Result<()> {
        require!(
            !self.vault_account.is_initialized(),
            VaultError::AlreadyInitialized
        );

        let now = Clock::get()?.unix_timestamp;
        self.vault_account.set_inner(VaultAccount {
            owner: self.owner.key(),
            balance: 0,
            last_used: now,
            restored_root: [0; 32],
            bump: bumps.vault_account,
        });

        msg!("Vault opened for {}", self.owner.key());
        Ok(())
    }
}
