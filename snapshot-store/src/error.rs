use anchor_lang::prelude::Pubkey;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("snapshot store io: {0}")]
    Io(#[from] std::io::Error),

    #[error("snapshot store encoding: {0}")]
    Serde(#[from] serde_json::Error),

    /// No snapshot is held for this owner.
    #[error("no snapshot for owner {0}")]
    NotFound(Pubkey),

    #[error("event decode failed: {0}")]
    Decode(String),
}
