use anchor_lang::prelude::*;
use anchor_lang::system_program::{transfer, Transfer};

use crate::constants::{CONFIG_SEED, VAULT_SEED};
use crate::error::VaultError;
use crate::events::VaultRestored;
use crate::proof::verify_root_proof;
use crate::state::{GlobalConfig, VaultAccount};

// ---------------------------------------------------------------------------
// Wake Up
// ---------------------------------------------------------------------------
// Hibernated -> Active. The signer becomes the owner of a fresh vault holding
// the claimed balance, funded from the signer so the record stays backed by
// lamports. Only the flat root comparison gates this; see `proof`.
// ---------------------------------------------------------------------------

#[derive(Accounts)]
pub struct WakeUpAccount<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,

    #[account(
        seeds = [CONFIG_SEED],
        bump = global_config.bump
    )]
    pub global_config: Account<'info, GlobalConfig>,

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

impl<'info> WakeUpAccount<'info> {
    pub fn wake_up(
        &mut self,
        bumps: &WakeUpAccountBumps,
        proof: [u8; 32],
        balance: u64,
    ) -> Result<()> {
        require!(
            !self.vault_account.is_initialized(),
            VaultError::AlreadyInitialized
        );
        require!(
            verify_root_proof(&proof, &self.global_config.latest_root),
            VaultError::InvalidProof
        );

        if balance > 0 {
            transfer(
                CpiContext::new(
                    self.system_program.to_account_info(),
                    Transfer {
                        from: self.owner.to_account_info(),
                        to: self.vault_account.to_account_info(),
                    },
                ),
                balance,
            )?;
        }

        let now = Clock::get()?.unix_timestamp;
        self.vault_account.set_inner(VaultAccount {
            owner: self.owner.key(),
            balance,
            last_used: now,
            restored_root: proof,
            bump: bumps.vault_account,
        });

        emit!(VaultRestored {
            owner: self.owner.key(),
            balance,
            root: proof,
            restored_at: now,
        });
        msg!("Vault restored for {} with {} lamports", self.owner.key(), balance);
        Ok(())
    }
}
