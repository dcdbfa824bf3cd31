//! Persisted favorites set.
//!
//! [`FavoritesStore`] owns the in-memory list of favorited characters and mirrors
//! it to a durable slot after every mutation. The list is keyed by character id
//! and keeps insertion order.
//!
//! Persistence is best-effort: a failed write is logged and the in-memory
//! mutation stands. A missing or malformed slot loads as an empty set.

use crate::domain::error::{CatalogError, Result};
use crate::domain::Character;
use crate::storage::backend::SlotStorage;

/// Slot name used when none is configured.
pub const DEFAULT_FAVORITES_SLOT: &str = "rick-morty-favorites";

/// Id-keyed, insertion-ordered set of favorited characters.
///
/// # Examples
///
/// ```
/// use rickdex::storage::{FavoritesStore, MemorySlotStorage};
///
/// let mut store = FavoritesStore::new(Box::new(MemorySlotStorage::default()), "favorites");
/// store.load();
/// assert!(store.is_empty());
/// ```
pub struct FavoritesStore {
    storage: Box<dyn SlotStorage>,
    slot: String,
    favorites: Vec<Character>,
}

impl FavoritesStore {
    /// Creates an empty store bound to `slot`. Call [`load`](Self::load) to read
    /// the persisted set.
    pub fn new(storage: Box<dyn SlotStorage>, slot: impl Into<String>) -> Self {
        Self {
            storage,
            slot: slot.into(),
            favorites: Vec::new(),
        }
    }

    /// Replaces the in-memory set with the persisted one.
    ///
    /// An absent slot, a read failure or malformed contents all yield an empty
    /// set. Returns the number of loaded favorites.
    pub fn load(&mut self) -> usize {
        let _span = tracing::debug_span!("favorites_load", slot = %self.slot).entered();

        self.favorites = match self.read_slot() {
            Ok(favorites) => favorites,
            Err(e) => {
                tracing::warn!(error = %e, "failed to load favorites, starting empty");
                Vec::new()
            }
        };

        tracing::debug!(count = self.favorites.len(), "favorites loaded");
        self.favorites.len()
    }

    /// Appends a character unless one with the same id is already present.
    ///
    /// Returns `true` if the character was added.
    pub fn add(&mut self, character: Character) -> bool {
        if self.is_favorite(character.id) {
            tracing::debug!(character_id = character.id, "already a favorite");
            return false;
        }

        tracing::debug!(character_id = character.id, "adding favorite");
        self.favorites.push(character);
        self.persist();
        true
    }

    /// Removes the character with `id`, if present.
    ///
    /// The set is persisted whether or not anything was removed. Returns `true`
    /// if an entry was removed.
    pub fn remove(&mut self, id: u32) -> bool {
        let before = self.favorites.len();
        self.favorites.retain(|c| c.id != id);
        let removed = self.favorites.len() != before;

        tracing::debug!(character_id = id, removed, "removing favorite");
        self.persist();
        removed
    }

    /// Removes the character if present, appends it otherwise.
    ///
    /// Returns `true` if the character is a favorite afterwards.
    pub fn toggle(&mut self, character: &Character) -> bool {
        let now_favorite = if let Some(index) = self.position(character.id) {
            self.favorites.remove(index);
            false
        } else {
            self.favorites.push(character.clone());
            true
        };

        tracing::debug!(character_id = character.id, now_favorite, "toggled favorite");
        self.persist();
        now_favorite
    }

    #[must_use]
    pub fn is_favorite(&self, id: u32) -> bool {
        self.position(id).is_some()
    }

    #[must_use]
    pub fn get(&self, id: u32) -> Option<&Character> {
        self.favorites.iter().find(|c| c.id == id)
    }

    /// Favorites in insertion order.
    #[must_use]
    pub fn favorites(&self) -> &[Character] {
        &self.favorites
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.favorites.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.favorites.is_empty()
    }

    #[must_use]
    pub fn slot(&self) -> &str {
        &self.slot
    }

    fn position(&self, id: u32) -> Option<usize> {
        self.favorites.iter().position(|c| c.id == id)
    }

    fn read_slot(&self) -> Result<Vec<Character>> {
        match self.storage.read(&self.slot)? {
            Some(contents) => serde_json::from_str(&contents).map_err(CatalogError::from),
            None => Ok(Vec::new()),
        }
    }

    fn persist(&mut self) {
        let result = serde_json::to_string(&self.favorites)
            .map_err(CatalogError::from)
            .and_then(|json| self.storage.write(&self.slot, &json));

        if let Err(e) = result {
            tracing::warn!(error = %e, slot = %self.slot, "failed to persist favorites");
        }
    }
}
