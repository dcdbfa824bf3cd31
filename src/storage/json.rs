//! JSON file-based slot storage.
//!
//! Each slot lives in its own file, `<dir>/<slot>.json`. Writes use atomic file
//! replacement (write-to-temp + rename) to prevent corruption on crashes.
//!
//! # Performance Characteristics
//!
//! - **Read**: O(n) - reads the whole slot file on every call
//! - **Write**: O(n) - writes the whole slot file
//! - **Best for**: small documents such as a favorites list

use crate::domain::error::{CatalogError, Result};
use crate::storage::backend::SlotStorage;
use std::path::{Path, PathBuf};

/// JSON file slot storage.
///
/// Slot contents are stored verbatim; callers decide the document format.
///
/// # Thread Safety
///
/// This type is `Send` but not `Sync`. It's designed to be owned by a single
/// store, matching the single event loop of the catalog.
pub struct JsonSlotStorage {
    /// Directory holding one file per slot.
    dir: PathBuf,
}

impl JsonSlotStorage {
    /// Creates a slot storage rooted at `dir`.
    ///
    /// The directory is created if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use rickdex::storage::JsonSlotStorage;
    /// use std::path::PathBuf;
    ///
    /// let storage = JsonSlotStorage::new(PathBuf::from("/tmp/rickdex"))?;
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn new(dir: PathBuf) -> Result<Self> {
        tracing::debug!(dir = ?dir, "initializing JSON slot storage");
        std::fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    /// Directory holding the slot files.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Resolves the file backing a slot.
    ///
    /// # Errors
    ///
    /// Returns an error if the slot name is empty or could escape the directory.
    pub fn slot_path(&self, slot: &str) -> Result<PathBuf> {
        if slot.is_empty() || slot.contains(['/', '\\']) || slot.starts_with('.') {
            return Err(CatalogError::Storage(format!("invalid slot name: {slot:?}")));
        }
        Ok(self.dir.join(format!("{slot}.json")))
    }
}

impl SlotStorage for JsonSlotStorage {
    fn read(&self, slot: &str) -> Result<Option<String>> {
        let _span = tracing::debug_span!("json_slot_read", slot = %slot).entered();

        let path = self.slot_path(slot)?;
        if !path.exists() {
            tracing::debug!("slot file absent");
            return Ok(None);
        }

        let contents = std::fs::read_to_string(&path)?;
        tracing::debug!(bytes = contents.len(), "slot read");
        Ok(Some(contents))
    }

    /// Writes to a temporary file first, then atomically renames it over the
    /// slot file, so the slot is never left half-written.
    fn write(&mut self, slot: &str, contents: &str) -> Result<()> {
        let _span = tracing::debug_span!("json_slot_write",
            slot = %slot,
            bytes = contents.len()
        ).entered();

        let path = self.slot_path(slot)?;
        let tmp_path = path.with_extension("json.tmp");

        tracing::trace!(tmp_path = ?tmp_path, "writing to temporary file");
        std::fs::write(&tmp_path, contents)?;

        tracing::trace!("renaming temporary file to final location");
        if let Err(e) = std::fs::rename(&tmp_path, &path) {
            let _ = std::fs::remove_file(&tmp_path);
            return Err(e.into());
        }

        tracing::debug!("slot saved successfully");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_storage() -> (JsonSlotStorage, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let storage = JsonSlotStorage::new(temp_dir.path().join("data")).unwrap();
        (storage, temp_dir)
    }

    #[test]
    fn test_create_new_storage() {
        let (storage, _temp) = create_test_storage();
        assert!(storage.dir().exists());
        assert_eq!(storage.read("rick-morty-favorites").unwrap(), None);
    }

    #[test]
    fn test_write_then_read() {
        let (mut storage, _temp) = create_test_storage();
        storage.write("rick-morty-favorites", "[1,2]").unwrap();

        let path = storage.slot_path("rick-morty-favorites").unwrap();
        assert!(path.exists());
        assert!(!path.with_extension("json.tmp").exists());
        assert_eq!(
            storage.read("rick-morty-favorites").unwrap().as_deref(),
            Some("[1,2]")
        );
    }

    #[test]
    fn test_persistence_across_instances() {
        let temp_dir = TempDir::new().unwrap();
        {
            let mut storage = JsonSlotStorage::new(temp_dir.path().to_path_buf()).unwrap();
            storage.write("slot", "persisted").unwrap();
        }
        let storage = JsonSlotStorage::new(temp_dir.path().to_path_buf()).unwrap();
        assert_eq!(storage.read("slot").unwrap().as_deref(), Some("persisted"));
    }

    #[test]
    fn test_rejects_path_like_slot_names() {
        let (mut storage, _temp) = create_test_storage();
        assert!(storage.write("../escape", "x").is_err());
        assert!(storage.read("").is_err());
        assert!(storage.slot_path(".hidden").is_err());
    }
}
