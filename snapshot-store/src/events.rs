//! Decoding of `hibernating_vault` events from transaction logs.
//!
//! Anchor's `emit!` writes each event as a `Program data: <base64>` log line
//! whose payload is the 8-byte event discriminator followed by the borsh
//! encoded struct.

use anchor_lang::{AnchorDeserialize, Discriminator};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use hibernating_vault::events::{RootUpdated, VaultHibernated, VaultRestored};
use tracing::trace;

use crate::error::SnapshotError;

pub const PROGRAM_DATA_PREFIX: &str = "Program data: ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VaultEvent {
    Hibernated(VaultHibernated),
    Restored(VaultRestored),
    RootUpdated(RootUpdated),
}

fn parse<T: AnchorDeserialize>(name: &str, body: &[u8]) -> Result<T, SnapshotError> {
    T::try_from_slice(body).map_err(|e| SnapshotError::Decode(format!("{}: {}", name, e)))
}

/// Decodes one event payload. Payloads from other programs (unknown
/// discriminators) yield `Ok(None)`.
pub fn decode_event(data: &[u8]) -> Result<Option<VaultEvent>, SnapshotError> {
    let event = if let Some(body) = data.strip_prefix(VaultHibernated::DISCRIMINATOR) {
        VaultEvent::Hibernated(parse("VaultHibernated", body)?)
    } else if let Some(body) = data.strip_prefix(VaultRestored::DISCRIMINATOR) {
        VaultEvent::Restored(parse("VaultRestored", body)?)
    } else if let Some(body) = data.strip_prefix(RootUpdated::DISCRIMINATOR) {
        VaultEvent::RootUpdated(parse("RootUpdated", body)?)
    } else {
        trace!(len = data.len(), "skipping payload with unknown discriminator");
        return Ok(None);
    };
    Ok(Some(event))
}

/// Extracts every vault event from a transaction's log lines, in order.
pub fn decode_program_logs<S: AsRef<str>>(logs: &[S]) -> Result<Vec<VaultEvent>, SnapshotError> {
    let mut events = Vec::new();
    for line in logs {
        let Some(encoded) = line.as_ref().strip_prefix(PROGRAM_DATA_PREFIX) else {
            continue;
        };
        let data = STANDARD
            .decode(encoded.trim())
            .map_err(|e| SnapshotError::Decode(e.to_string()))?;
        if let Some(event) = decode_event(&data)? {
            events.push(event);
        }
    }
    Ok(events)
}
