//! Save slot backends.

use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};
#[cfg(feature = "std")]
use std::path::{Path, PathBuf};

use crate::error::StorageError;

/// Slot name used when none is given.
pub const DEFAULT_SLOT: &str = "dartsGame";

/// A key-value store holding serialized games.
///
/// Implementations are synchronous; a write is complete when it returns.
pub trait Storage {
    /// Reads the slot, returning `None` if it has never been written.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read.
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replaces the contents of the slot.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written.
    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// In-memory storage, lost when dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStorage {
    slots: BTreeMap<String, String>,
}

impl MemoryStorage {
    /// Creates empty storage.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            slots: BTreeMap::new(),
        }
    }

    /// Returns the raw contents of a slot.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.slots.get(key).map(String::as_str)
    }
}

impl Storage for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.slots.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.slots.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Storage keeping each slot in `<dir>/<key>.json`.
#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileStorage {
    dir: PathBuf,
}

#[cfg(feature = "std")]
impl FileStorage {
    /// Creates storage rooted at `dir`. The directory is created on first write.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Returns the directory holding the slots.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn slot_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

#[cfg(feature = "std")]
impl Storage for FileStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        match std::fs::read_to_string(self.slot_path(key)) {
            Ok(text) => Ok(Some(text)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        std::fs::create_dir_all(&self.dir)?;

        // Write beside the slot and rename so a crash never leaves half a file.
        let path = self.slot_path(key);
        let tmp = path.with_extension("json.tmp");
        std::fs::write(&tmp, value)?;
        std::fs::rename(&tmp, &path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_storage_round_trips_a_slot() {
        let mut storage = MemoryStorage::new();
        assert_eq!(storage.read(DEFAULT_SLOT).unwrap(), None);

        storage.write(DEFAULT_SLOT, "{}").unwrap();
        storage.write(DEFAULT_SLOT, "{\"players\":[]}").unwrap();
        assert_eq!(storage.get(DEFAULT_SLOT), Some("{\"players\":[]}"));
        assert_eq!(storage.read("other").unwrap(), None);
    }

    #[cfg(feature = "std")]
    #[test]
    fn file_storage_reads_what_it_wrote() {
        let dir = std::env::temp_dir().join(format!("dartrs-storage-{}", std::process::id()));
        let mut storage = FileStorage::new(&dir);
        assert_eq!(storage.read("slot").unwrap(), None);

        storage.write("slot", "saved").unwrap();
        assert_eq!(storage.read("slot").unwrap().as_deref(), Some("saved"));
        assert!(dir.join("slot.json").exists());

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
