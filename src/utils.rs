//! Utility functions

use crate::constants::DATA_DIR_NAME;
use std::path::{Path, PathBuf};

/// Get the app data directory path (settings, logs)
pub fn get_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DATA_DIR_NAME)
}

/// Create each directory (and parents). Returns the ones that failed so the
/// caller can report them once logging is up.
pub fn create_dirs(paths: &[&Path]) -> Vec<(PathBuf, std::io::Error)> {
    paths
        .iter()
        .filter_map(|path| {
            std::fs::create_dir_all(path)
                .err()
                .map(|e| (path.to_path_buf(), e))
        })
        .collect()
}
