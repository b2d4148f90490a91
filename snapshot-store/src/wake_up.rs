use anchor_lang::prelude::Pubkey;
use anchor_lang::InstructionData;
use hibernating_vault::instruction::WakeUpAccount;

use crate::state::CompressedState;

/// Arguments for `wake_up_account`, rebuilt from a stored snapshot.
///
/// The proof is the current commitment root, read from the config account
/// by the caller. The snapshot supplies the balance the owner is restoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WakeUpRequest {
    pub owner: Pubkey,
    pub proof: [u8; 32],
    pub balance: u64,
}

impl WakeUpRequest {
    pub fn from_snapshot(state: &CompressedState, current_root: [u8; 32]) -> Self {
        Self {
            owner: state.owner,
            proof: current_root,
            balance: state.balance,
        }
    }

    /// Serialized instruction data, discriminator included.
    pub fn instruction_data(&self) -> Vec<u8> {
        WakeUpAccount {
            proof: self.proof,
            balance: self.balance,
        }
        .data()
    }
}
