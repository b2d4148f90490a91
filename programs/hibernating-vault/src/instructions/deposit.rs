use anchor_lang::prelude::*;
use anchor_lang::system_program::{transfer, Transfer};

use crate::constants::VAULT_SEED;
use crate::error::VaultError;
use crate::state::VaultAccount;

#[derive(Accounts)]
pub struct Deposit<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,

    #[account(
        mut,
        seeds = [VAULT_SEED, vault_account.owner.as_ref()],
        bump = vault_account.bump,
        has_one = owner @ VaultError::Unauthorized
    )]
    pub vault_account: Account<'info, VaultAccount>,

    pub system_program: Program<'info, System>,
}

impl<'info> Deposit<'info> {
    pub fn deposit(&mut self, amount: u64) -> Result<()> {
        let now = Clock::get()?.unix_timestamp;
        self.vault_account.credit(amount, now)?;

        transfer(
            CpiContext::new(
                self.system_program.to_account_info(),
                Transfer {
                    from: self.owner.to_account_info(),
                    to: self.vault_account.to_account_info(),
                },
            ),
            amount,
        )?;

        msg!(
            "Deposited {} lamports, balance {}",
            amount,
            self.vault_account.balance
        );
        Ok(())
    }
}
