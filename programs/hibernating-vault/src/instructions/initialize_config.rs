use anchor_lang::prelude::*;

use crate::constants::CONFIG_SEED;
use crate::error::VaultError;
use crate::state::GlobalConfig;

// ---------------------------------------------------------------------------
// Initialize Config
// ---------------------------------------------------------------------------
// Creates the singleton config PDA. The signer becomes admin for the lifetime
// of the deployment. A second call finds the record populated and fails.
// ---------------------------------------------------------------------------

#[derive(Accounts)]
pub struct InitializeConfig<'info> {
    #[account(mut)]
    pub admin: Signer<'info>,

    #[account(
        init_if_needed,
        payer = admin,
        space = 8 + GlobalConfig::INIT_SPACE,
        seeds = [CONFIG_SEED],
        bump
    )]
    pub global_config: Account<'info, GlobalConfig>,

    pub system_program: Program<'info, System>,
}

impl<'info> InitializeConfig<'info> {
    pub fn initialize_config(&mut self, bumps: &InitializeConfigBumps) -> Result<()> {
        require!(
            !self.global_config.is_initialized(),
            VaultError::AlreadyInitialized
        );

        self.global_config.admin = self.admin.key();
        self.global_config.latest_root = [0; 32];
        self.global_config.bump = bumps.global_config;

        msg!("Config initialized, admin: {}", self.admin.key());
        Ok(())
    }
}
