//! Path utilities for the application data directory.
//!
//! - Returns `PathBuf` and `PathError` for clear error handling
//! - No interactive/terminal I/O - adapters handle user prompts separately

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Environment variable overriding the data directory.
pub const DATA_DIR_ENV: &str = "ORDERDESK_DATA_DIR";

/// File name of the local key-value database.
pub const DATABASE_FILE: &str = "orderdesk.db";

/// Errors that can occur during path resolution and directory operations.
#[derive(Debug, Error)]
pub enum PathError {
    /// Could not determine the system data directory.
    #[error("Cannot determine system data directory")]
    NoDataDir,

    /// A path was expected to be a directory but was not.
    #[error("{0} exists but is not a directory")]
    NotADirectory(PathBuf),

    /// Failed to create a directory.
    #[error("Failed to create directory {path}: {reason}")]
    CreateFailed { path: PathBuf, reason: String },
}

/// Get the root directory for application data.
///
/// Resolution order:
/// 1. `ORDERDESK_DATA_DIR` environment variable (highest priority)
/// 2. System data directory (e.g., `~/.local/share/orderdesk`)
pub fn data_root() -> Result<PathBuf, PathError> {
    if let Ok(path) = env::var(DATA_DIR_ENV) {
        if !path.trim().is_empty() {
            return Ok(PathBuf::from(path));
        }
    }

    let data_dir = dirs::data_local_dir().ok_or(PathError::NoDataDir)?;
    Ok(data_dir.join("orderdesk"))
}

/// Create `dir` (and parents) if missing.
pub fn ensure_directory(dir: &Path) -> Result<(), PathError> {
    if dir.exists() {
        if !dir.is_dir() {
            return Err(PathError::NotADirectory(dir.to_path_buf()));
        }
        return Ok(());
    }

    fs::create_dir_all(dir).map_err(|e| PathError::CreateFailed {
        path: dir.to_path_buf(),
        reason: e.to_string(),
    })
}

/// Path of the database file inside `root`, creating `root` if needed.
pub fn database_path_in(root: &Path) -> Result<PathBuf, PathError> {
    ensure_directory(root)?;
    Ok(root.join(DATABASE_FILE))
}

/// Get the path to the database file under [`data_root`].
pub fn database_path() -> Result<PathBuf, PathError> {
    database_path_in(&data_root()?)
}
