//! View mode and selection state types for the application.
//!
//! This module defines the state machine enums that control which list is shown
//! and what the detail panel displays.
//!
//! # State Machine
//!
//! View modes control which characters are listed:
//! - **Catalog**: The paginated remote catalog (listing or search results)
//! - **Favorites**: The persisted favorites set
//!
//! The selection is independent of the view mode:
//!
//! ```text
//! None ──select (not buffered)──▶ Loading(id) ──found──▶ Found(character)
//!   ▲                                 │
//!   │                                 └──unknown id──▶ NotFound(id)
//!   └───────────── clear ─────────────────────────────────┘
//! ```

use crate::domain::Character;

/// View filtering mode determining which characters are listed.
///
/// Changes the header title, the available actions and whether pagination
/// controls are shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    /// Shows the current page of the remote catalog.
    ///
    /// Header displays "Characters" or the active search term.
    #[default]
    Catalog,

    /// Shows every favorited character in insertion order.
    ///
    /// Header displays "Favorites". No pagination.
    Favorites,
}

/// The character shown in the detail panel.
///
/// "Not found" is distinct from "nothing selected": the former renders the
/// not-found message, the latter hides the panel.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection {
    /// No character selected.
    #[default]
    None,

    /// A lookup for this id is in flight.
    Loading(u32),

    /// The selected character.
    Found(Box<Character>),

    /// The catalog does not know this id.
    NotFound(u32),
}

impl Selection {
    /// Id of the selected character, whatever its resolution state.
    #[must_use]
    pub fn id(&self) -> Option<u32> {
        match self {
            Self::None => None,
            Self::Loading(id) | Self::NotFound(id) => Some(*id),
            Self::Found(character) => Some(character.id),
        }
    }

    /// The selected character, once resolved.
    #[must_use]
    pub fn character(&self) -> Option<&Character> {
        match self {
            Self::Found(character) => Some(character),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}
