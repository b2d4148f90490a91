//! Seeds and protocol constants

/// Seed for the deployment-wide config PDA.
pub const CONFIG_SEED: &[u8] = b"config";

/// Seed prefix for per-owner vault PDAs: `["vault", owner]`.
pub const VAULT_SEED: &[u8] = b"vault";

/// Seconds a vault must sit untouched before it may hibernate.
pub const INACTIVITY_THRESHOLD_SECONDS: i64 = 60;

/// Length of a commitment root and of a wake-up proof.
pub const ROOT_LEN: usize = 32;

/// Domain separator mixed into every hibernation state hash.
pub const STATE_HASH_DOMAIN: &[u8] = b"cvx-state";
