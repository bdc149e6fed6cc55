//! Runtime configuration
//!
//! Resolved once from command-line flags and the environment, then used to build the
//! catalog and the save-slot store.

use crate::catalog::{Catalog, CatalogError, loader};
use crate::storage::{FileStore, MemoryStore, Store};
use std::path::PathBuf;

/// Directory name under the platform data directory
const APP_DIR: &str = "chronos";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// JSON catalog to use instead of the built-in one
    pub catalog_path: Option<PathBuf>,
    /// Where the save slot lives
    pub save_dir: PathBuf,
    /// Keep the round in memory only
    pub ephemeral: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_path: None,
            save_dir: default_save_dir(),
            ephemeral: false,
        }
    }
}

impl Config {
    /// Load the configured catalog
    ///
    /// # Errors
    /// Returns an error if a custom catalog cannot be read or is invalid.
    pub fn load_catalog(&self) -> Result<Catalog, CatalogError> {
        match &self.catalog_path {
            Some(path) => Catalog::new(loader::load_from_file(path)?),
            None => Catalog::embedded(),
        }
    }

    /// Open the configured store
    #[must_use]
    pub fn open_store(&self) -> Box<dyn Store> {
        if self.ephemeral {
            tracing::debug!("using in-memory store");
            Box::new(MemoryStore::new())
        } else {
            tracing::debug!(dir = %self.save_dir.display(), "using file store");
            Box::new(FileStore::new(&self.save_dir))
        }
    }
}

/// Platform data directory for saves, falling back to `.chronos` in the working directory
#[must_use]
pub fn default_save_dir() -> PathBuf {
    dirs::data_dir().map_or_else(|| PathBuf::from(".chronos"), |dir| dir.join(APP_DIR))
}
