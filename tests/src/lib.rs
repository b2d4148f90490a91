//! Shared LiteSVM harness for the hibernating-vault integration tests.
//!
//! The tests load `target/deploy/hibernating_vault.so`, so run
//! `anchor build` before `cargo test -p vault-tests`.

pub mod common;
