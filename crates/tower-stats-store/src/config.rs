//! Store configuration

use std::path::{Path, PathBuf};

/// File name used when no backing document is given
pub const DEFAULT_DATA_FILE: &str = "tower_stats.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Backing JSON document holding the whole session history
    pub data_file: PathBuf,
}

impl StoreConfig {
    pub fn new(data_file: impl Into<PathBuf>) -> Self {
        Self {
            data_file: data_file.into(),
        }
    }

    pub fn data_file(&self) -> &Path {
        &self.data_file
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::new(DEFAULT_DATA_FILE)
    }
}
