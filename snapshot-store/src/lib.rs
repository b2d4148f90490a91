//! Off-ledger snapshot store for hibernated vaults.
//!
//! Hibernation destroys the on-ledger vault record. What survives is the
//! `VaultHibernated` event; this crate decodes those events from program
//! logs and keeps one `CompressedState` per owner so a client can later
//! rebuild the `wake_up_account` call.

pub mod config;
pub mod error;
pub mod events;
pub mod state;
pub mod store;
pub mod subscriber;
pub mod wake_up;

pub use config::StoreConfig;
pub use error::SnapshotError;
pub use events::{decode_event, decode_program_logs, VaultEvent};
pub use state::CompressedState;
pub use store::{JsonFileSnapshotStore, MemorySnapshotStore, SnapshotStore};
pub use subscriber::HibernationSubscriber;
pub use wake_up::WakeUpRequest;
