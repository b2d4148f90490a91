use anchor_lang::prelude::*;

use crate::constants::VAULT_SEED;
use crate::error::VaultError;
use crate::events::VaultHibernated;
use crate::state::VaultAccount;

// ---------------------------------------------------------------------------
// Hibernate
// ---------------------------------------------------------------------------
// Active -> Hibernated. Once the vault has been idle for the inactivity
// threshold, emit its commitment and close the PDA. `close` pays every
// lamport (balance and rent) to the destination and only runs if the
// handler returns Ok.
// ---------------------------------------------------------------------------

#[derive(Accounts)]
pub struct HibernateAccount<'info> {
    pub owner: Signer<'info>,

    #[account(
        mut,
        seeds = [VAULT_SEED, vault_account.owner.as_ref()],
        bump = vault_account.bump,
        has_one = owner @ VaultError::Unauthorized,
        close = destination
    )]
    pub vault_account: Account<'info, VaultAccount>,

    #[account(mut)]
    pub destination: SystemAccount<'info>,
}

impl<'info> HibernateAccount<'info> {
    pub fn hibernate(&mut self) -> Result<()> {
        let now = Clock::get()?.unix_timestamp;
        let vault = &self.vault_account;

        require!(vault.is_dormant(now), VaultError::InactiveThresholdNotMet);

        emit!(VaultHibernated {
            owner: vault.owner,
            destination: self.destination.key(),
            balance: vault.balance,
            state_hash: vault.commitment_hash(),
            hibernated_at: now,
        });

        msg!(
            "Vault {} hibernated after {}s idle, {} lamports to {}",
            vault.owner,
            vault.idle_seconds(now),
            vault.balance,
            self.destination.key()
        );
        Ok(())
    }
}
