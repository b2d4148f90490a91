//! Error definitions

use anchor_lang::prelude::*;

#[error_code]
pub enum VaultError {
    #[msg("Unauthorized: signer does not hold the required role")]
    Unauthorized,
    #[msg("Account already initialized")]
    AlreadyInitialized,
    #[msg("Deposit amount must be greater than zero")]
    InvalidAmount,
    #[msg("Insufficient funds for withdrawal")]
    InsufficientFunds,
    #[msg("The account has not been inactive for long enough")]
    InactiveThresholdNotMet,
    #[msg("Proof does not match the latest commitment root")]
    InvalidProof,
    #[msg("Arithmetic overflow")]
    ArithmeticOverflow,
}
