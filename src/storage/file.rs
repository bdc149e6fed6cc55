//! File-backed store: one `<key>.json` file per key in a directory

use super::{StorageError, Store};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Create a store rooted at `dir`; the directory is created on first write
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, StorageError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(StorageError::InvalidKey(key.to_string()));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl Store for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        let path = self.path_for(key).ok()?;
        match fs::read_to_string(&path) {
            Ok(content) => Some(content),
            Err(error) if error.kind() == io::ErrorKind::NotFound => None,
            Err(error) => {
                tracing::warn!(path = %path.display(), %error, "could not read saved state");
                None
            }
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        let write_err = |source| StorageError::Write {
            path: path.clone(),
            source,
        };

        fs::create_dir_all(&self.dir).map_err(write_err)?;

        // Write next to the target and rename, so a crash never leaves half a file
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, value).map_err(write_err)?;
        if let Err(error) = fs::rename(&tmp, &path) {
            let _ = fs::remove_file(&tmp);
            return Err(write_err(error));
        }

        tracing::trace!(path = %path.display(), bytes = value.len(), "saved state");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_key_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path());
        assert_eq!(store.get("history-guesser-v1"), None);
    }

    #[test]
    fn set_creates_directory_and_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("saves").join("chronos");
        let mut store = FileStore::new(&nested);

        store.set("slot_1", r#"{"a":1}"#).unwrap();
        assert!(nested.join("slot_1.json").exists());
        assert!(!nested.join("slot_1.json.tmp").exists());
        assert_eq!(store.get("slot_1").as_deref(), Some(r#"{"a":1}"#));

        store.set("slot_1", "replaced").unwrap();
        assert_eq!(store.get("slot_1").as_deref(), Some("replaced"));
    }

    #[test]
    fn failed_rename_removes_temporary_file() {
        let dir = tempfile::tempdir().unwrap();
        // A non-empty directory where the save file should go blocks the rename
        let blocker = dir.path().join("slot.json");
        fs::create_dir_all(blocker.join("inner")).unwrap();
        let mut store = FileStore::new(dir.path());

        assert!(matches!(
            store.set("slot", "{}"),
            Err(StorageError::Write { .. })
        ));
        assert!(!dir.path().join("slot.json.tmp").exists());
    }

    #[test]
    fn path_like_keys_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path());

        assert!(matches!(
            store.set("../escape", "x"),
            Err(StorageError::InvalidKey(_))
        ));
        assert!(matches!(store.set("", "x"), Err(StorageError::InvalidKey(_))));
        assert_eq!(store.get("../escape"), None);
    }
}
