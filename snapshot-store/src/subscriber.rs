use std::collections::HashMap;

use anchor_lang::prelude::Pubkey;
use tracing::{debug, info, warn};

use crate::error::SnapshotError;
use crate::events::{decode_program_logs, VaultEvent};
use crate::state::CompressedState;
use crate::store::SnapshotStore;

/// Applies vault events to a snapshot store.
///
/// Delivery is at-least-once: a repeated `Hibernated` overwrites the same
/// entry, and a stale `Hibernated` that arrives after the vault was
/// restored is dropped instead of resurrecting the snapshot.
#[derive(Debug)]
pub struct HibernationSubscriber<S: SnapshotStore> {
    store: S,
    restored_at: HashMap<Pubkey, i64>,
}

impl<S: SnapshotStore> HibernationSubscriber<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            restored_at: HashMap::new(),
        }
    }

    pub fn handle(&mut self, event: &VaultEvent) -> Result<(), SnapshotError> {
        match event {
            VaultEvent::Hibernated(e) => {
                if let Some(&restored) = self.restored_at.get(&e.owner) {
                    if e.hibernated_at <= restored {
                        warn!(owner = %e.owner, hibernated_at = e.hibernated_at, "dropping stale hibernation event");
                        return Ok(());
                    }
                }
                info!(owner = %e.owner, balance = e.balance, "storing hibernated vault");
                self.store.save(CompressedState::from(e))
            }
            VaultEvent::Restored(e) => {
                let watermark = self.restored_at.entry(e.owner).or_insert(e.restored_at);
                *watermark = (*watermark).max(e.restored_at);
                match self.store.remove(&e.owner)? {
                    Some(_) => info!(owner = %e.owner, "vault restored, snapshot cleared"),
                    None => debug!(owner = %e.owner, "vault restored with no snapshot held"),
                }
                Ok(())
            }
            VaultEvent::RootUpdated(_) => Ok(()),
        }
    }

    /// Decodes and applies every vault event in a transaction's logs.
    /// Returns how many events were applied.
    pub fn handle_logs<L: AsRef<str>>(&mut self, logs: &[L]) -> Result<usize, SnapshotError> {
        let events = decode_program_logs(logs)?;
        for event in &events {
            self.handle(event)?;
        }
        Ok(events.len())
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_inner(self) -> S {
        self.store
    }
}
