//! Snapshot store contract and its two implementations.
//!
//! Every store is last-write-wins per owner, so replaying the same
//! hibernation event any number of times leaves one entry behind.

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anchor_lang::prelude::Pubkey;
use tracing::debug;

use crate::config::StoreConfig;
use crate::error::SnapshotError;
use crate::state::CompressedState;

pub trait SnapshotStore {
    /// Insert or overwrite the snapshot for `state.owner`.
    fn save(&mut self, state: CompressedState) -> Result<(), SnapshotError>;

    fn get(&self, owner: &Pubkey) -> Result<Option<CompressedState>, SnapshotError>;

    /// Drop the snapshot for `owner`, returning it if one was held.
    fn remove(&mut self, owner: &Pubkey) -> Result<Option<CompressedState>, SnapshotError>;

    fn all(&self) -> Result<Vec<CompressedState>, SnapshotError>;

    /// Remove and return the snapshot, failing if there is none.
    fn take(&mut self, owner: &Pubkey) -> Result<CompressedState, SnapshotError> {
        self.remove(owner)?.ok_or(SnapshotError::NotFound(*owner))
    }
}

#[derive(Debug, Default)]
pub struct MemorySnapshotStore {
    states: HashMap<Pubkey, CompressedState>,
}

impl MemorySnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}

impl SnapshotStore for MemorySnapshotStore {
    fn save(&mut self, state: CompressedState) -> Result<(), SnapshotError> {
        self.states.insert(state.owner, state);
        Ok(())
    }

    fn get(&self, owner: &Pubkey) -> Result<Option<CompressedState>, SnapshotError> {
        Ok(self.states.get(owner).cloned())
    }

    fn remove(&mut self, owner: &Pubkey) -> Result<Option<CompressedState>, SnapshotError> {
        Ok(self.states.remove(owner))
    }

    fn all(&self) -> Result<Vec<CompressedState>, SnapshotError> {
        let mut states: Vec<_> = self.states.values().cloned().collect();
        states.sort_by_key(|s| s.timestamp);
        Ok(states)
    }
}

/// Keeps every snapshot in one JSON array file. Each mutation rewrites the
/// file through a temp file and a rename, so a crash leaves either the old
/// or the new contents.
#[derive(Debug)]
pub struct JsonFileSnapshotStore {
    path: PathBuf,
    states: Vec<CompressedState>,
}

impl JsonFileSnapshotStore {
    /// Opens the store at `config.path`. A missing file is an empty store;
    /// an unreadable one is an error rather than silently discarded.
    pub fn open(config: &StoreConfig) -> Result<Self, SnapshotError> {
        let states = match fs::read(&config.path) {
            Ok(bytes) => serde_json::from_slice(&bytes)?,
            Err(e) if e.kind() == ErrorKind::NotFound => Vec::new(),
            Err(e) => return Err(e.into()),
        };
        debug!(path = %config.path.display(), count = states.len(), "opened snapshot store");

        Ok(Self {
            path: config.path.clone(),
            states,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self) -> Result<(), SnapshotError> {
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, serde_json::to_vec_pretty(&self.states)?)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl SnapshotStore for JsonFileSnapshotStore {
    fn save(&mut self, state: CompressedState) -> Result<(), SnapshotError> {
        self.states.retain(|s| s.owner != state.owner);
        self.states.push(state);
        self.persist()
    }

    fn get(&self, owner: &Pubkey) -> Result<Option<CompressedState>, SnapshotError> {
        Ok(self.states.iter().find(|s| &s.owner == owner).cloned())
    }

    fn remove(&mut self, owner: &Pubkey) -> Result<Option<CompressedState>, SnapshotError> {
        let Some(index) = self.states.iter().position(|s| &s.owner == owner) else {
            return Ok(None);
        };
        let removed = self.states.remove(index);
        self.persist()?;
        Ok(Some(removed))
    }

    fn all(&self) -> Result<Vec<CompressedState>, SnapshotError> {
        Ok(self.states.clone())
    }
}
