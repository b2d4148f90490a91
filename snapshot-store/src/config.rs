use std::path::PathBuf;

/// Environment variable that overrides the snapshot file location.
pub const STORE_PATH_ENV: &str = "SNAPSHOT_STORE_PATH";

pub const DEFAULT_STORE_PATH: &str = "cvx_compressed_states.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub path: PathBuf,
}

impl StoreConfig {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Reads `SNAPSHOT_STORE_PATH`, falling back to the default file name.
    pub fn from_env() -> Self {
        match std::env::var(STORE_PATH_ENV) {
            Ok(path) if !path.trim().is_empty() => Self::new(path),
            _ => Self::default(),
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::new(DEFAULT_STORE_PATH)
    }
}
