//! Storage backend abstraction.
//!
//! This module defines the [`SlotStorage`] trait that abstracts over durable
//! key-value persistence. A slot is a named string value; the favorites store
//! keeps its whole set, serialized as JSON, in a single slot.
//!
//! # Design Philosophy
//!
//! The trait is designed to be minimal and focused on the actual operations needed
//! by the application, not a generic key-value API. Reads and writes are whole-slot
//! and synchronous, and the last write wins.

use crate::domain::error::{CatalogError, Result};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Abstraction over durable slot storage.
///
/// # Implementations
///
/// - [`JsonSlotStorage`](crate::storage::JsonSlotStorage): one JSON file per slot with atomic writes (default)
/// - [`MemorySlotStorage`]: process-local map, for tests and ephemeral runs
///
/// # Examples
///
/// ```
/// use rickdex::storage::{MemorySlotStorage, SlotStorage};
///
/// let mut storage = MemorySlotStorage::default();
/// storage.write("favorites", "[]")?;
/// assert_eq!(storage.read("favorites")?.as_deref(), Some("[]"));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub trait SlotStorage: Send {
    /// Reads the contents of a slot.
    ///
    /// Returns `Ok(None)` if the slot has never been written.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read.
    fn read(&self, slot: &str) -> Result<Option<String>>;

    /// Replaces the contents of a slot.
    ///
    /// # Errors
    ///
    /// Returns an error if the write cannot be completed. Backends leave the
    /// previous contents intact on failure.
    fn write(&mut self, slot: &str, contents: &str) -> Result<()>;
}

/// In-memory slot storage.
///
/// Clones share the same underlying map, so a test can keep a handle and
/// inspect what a store persisted.
#[derive(Debug, Clone, Default)]
pub struct MemorySlotStorage {
    slots: Arc<Mutex<HashMap<String, String>>>,
}

impl MemorySlotStorage {
    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, String>>> {
        self.slots
            .lock()
            .map_err(|e| CatalogError::Storage(format!("memory storage poisoned: {e}")))
    }
}

impl SlotStorage for MemorySlotStorage {
    fn read(&self, slot: &str) -> Result<Option<String>> {
        Ok(self.lock()?.get(slot).cloned())
    }

    fn write(&mut self, slot: &str, contents: &str) -> Result<()> {
        tracing::trace!(slot = %slot, bytes = contents.len(), "writing memory slot");
        self.lock()?.insert(slot.to_string(), contents.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_slot_reads_none() {
        let storage = MemorySlotStorage::default();
        assert_eq!(storage.read("missing").unwrap(), None);
    }

    #[test]
    fn clones_share_slots() {
        let mut writer = MemorySlotStorage::default();
        let reader = writer.clone();
        writer.write("slot", "value").unwrap();
        assert_eq!(reader.read("slot").unwrap().as_deref(), Some("value"));
    }

    #[test]
    fn last_write_wins() {
        let mut storage = MemorySlotStorage::default();
        storage.write("slot", "first").unwrap();
        storage.write("slot", "second").unwrap();
        assert_eq!(storage.read("slot").unwrap().as_deref(), Some("second"));
    }
}
