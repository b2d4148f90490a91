use anchor_lang::prelude::*;

use crate::constants::CONFIG_SEED;
use crate::error::VaultError;
use crate::events::RootUpdated;
use crate::state::GlobalConfig;

// ---------------------------------------------------------------------------
// Update Root (admin only)
// ---------------------------------------------------------------------------
// Overwrites the commitment root. No history is kept: every pending wake-up
// is checked against whatever value this leaves behind.
// ---------------------------------------------------------------------------

#[derive(Accounts)]
pub struct UpdateRoot<'info> {
    pub admin: Signer<'info>,

    #[account(
        mut,
        seeds = [CONFIG_SEED],
        bump = global_config.bump,
        has_one = admin @ VaultError::Unauthorized
    )]
    pub global_config: Account<'info, GlobalConfig>,
}

impl<'info> UpdateRoot<'info> {
    pub fn update_root(&mut self, new_root: [u8; 32]) -> Result<()> {
        let previous_root = self.global_config.latest_root;
        self.global_config.latest_root = new_root;

        emit!(RootUpdated {
            admin: self.admin.key(),
            previous_root,
            new_root,
        });
        msg!("Commitment root updated");
        Ok(())
    }
}
