//! Local key-value persistence
//!
//! The game keeps a single save slot. A [`Store`] maps string keys to string values;
//! the session decides what goes in them.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Error type for failed writes
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("invalid storage key '{0}'")]
    InvalidKey(String),
    #[error("could not write {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// A string key-value store
///
/// `get` never fails: a missing or unreadable entry is `None`, and callers fall back
/// to a fresh state.
pub trait Store {
    /// Read the value stored under `key`
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any previous value
    ///
    /// # Errors
    /// Returns an error if the value could not be written.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

impl<S: Store + ?Sized> Store for Box<S> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }
}
