use anchor_lang::prelude::*;

use crate::constants::VAULT_SEED;
use crate::error::VaultError;
use crate::state::VaultAccount;

#[derive(Accounts)]
pub struct Withdraw<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,

    #[account(
        mut,
        seeds = [VAULT_SEED, vault_account.owner.as_ref()],
        bump = vault_account.bump,
        has_one = owner @ VaultError::Unauthorized
    )]
    pub vault_account: Account<'info, VaultAccount>,
}

impl<'info> Withdraw<'info> {
    pub fn withdraw(&mut self, amount: u64) -> Result<()> {
        let now = Clock::get()?.unix_timestamp;
        self.vault_account.debit(amount, now)?;

        // The vault PDA is owned by this program, so its lamports can be
        // moved directly. The rent reserve stays behind because
        // amount <= balance.
        **self.vault_account.to_account_info().try_borrow_mut_lamports()? -= amount;
        **self.owner.to_account_info().try_borrow_mut_lamports()? += amount;

        msg!(
            "Withdrew {} lamports, balance {}",
            amount,
            self.vault_account.balance
        );
        Ok(())
    }
}
