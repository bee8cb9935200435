mod config;
mod log_store;
pub mod persistence;

pub use config::{Config, ExportConfig, StorageConfig, TrackerConfig};
pub use log_store::TimeLogStore;
pub use persistence::{JsonFilePersistence, LogPersistence, MemoryPersistence};

use std::path::PathBuf;

use crate::error::ConfigError;

/// Returns the data directory, creating it if needed.
///
/// `OPPTIME_DATA_DIR` wins when set. Otherwise `~/.config/opptime`, or
/// `~/.config/opptime-dev` when `OPPTIME_ENV=dev`.
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn data_dir() -> Result<PathBuf, ConfigError> {
    let dir = match std::env::var_os("OPPTIME_DATA_DIR") {
        Some(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => {
            let base_dir = dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config");
            let env = std::env::var("OPPTIME_ENV").unwrap_or_else(|_| "production".to_string());
            if env == "dev" {
                base_dir.join("opptime-dev")
            } else {
                base_dir.join("opptime")
            }
        }
    };

    std::fs::create_dir_all(&dir)
        .map_err(|e| ConfigError::DataDir(format!("{}: {e}", dir.display())))?;
    Ok(dir)
}
