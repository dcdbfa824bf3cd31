//! Storage layer for persisted favorites.
//!
//! This module provides the storage abstraction for keeping the favorites list
//! across runs. Data lives in named slots; the default backend writes one JSON
//! file per slot with atomic replacement.
//!
//! # Modules
//!
//! - `backend`: Slot storage trait and the in-memory backend
//! - `json`: JSON file-based slot storage
//! - `favorites`: Favorites set mirrored to a slot after every mutation

pub mod backend;
pub mod favorites;
pub mod json;

pub use backend::{MemorySlotStorage, SlotStorage};
pub use favorites::{FavoritesStore, DEFAULT_FAVORITES_SLOT};
pub use json::JsonSlotStorage;
