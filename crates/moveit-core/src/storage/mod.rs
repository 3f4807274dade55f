mod config;
pub mod database;

pub use config::{CatalogConfig, Config, NotificationsConfig, ProfileConfig};
pub use database::Database;

use std::path::PathBuf;

use crate::error::{Result, StorageError};

/// Returns the data directory.
///
/// `MOVEIT_HOME` wins when set. Otherwise `~/.config/moveit[-dev]/`
/// based on MOVEIT_ENV; set MOVEIT_ENV=dev to use the development
/// data directory.
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn data_dir() -> Result<PathBuf> {
    let dir = match std::env::var_os("MOVEIT_HOME") {
        Some(home) if !home.is_empty() => PathBuf::from(home),
        _ => {
            let base_dir = dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config");
            let env = std::env::var("MOVEIT_ENV").unwrap_or_else(|_| "production".to_string());
            if env == "dev" {
                base_dir.join("moveit-dev")
            } else {
                base_dir.join("moveit")
            }
        }
    };

    std::fs::create_dir_all(&dir)
        .map_err(|e| StorageError::DataDir(format!("{}: {e}", dir.display())))?;
    Ok(dir)
}
