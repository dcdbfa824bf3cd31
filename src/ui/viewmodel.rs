//! View model types representing renderable UI state.
//!
//! This module defines immutable view models computed from application state,
//! following the MVVM pattern. View models are optimized for rendering and
//! contain pre-computed display information like highlight ranges, selection
//! and favorite markers.
//!
//! # Architecture
//!
//! View models are created via `AppState::compute_viewmodel()` and consumed by
//! the renderer. They contain no business logic, only display-ready data.

use crate::domain::Status;

/// Complete UI view model for rendering.
///
/// Contains all display information needed to render one frame: the visible
/// character cards, pagination controls, the detail panel and optional
/// elements like the error banner and the empty state.
#[derive(Debug, Clone)]
pub struct UIViewModel {
    /// Cards shown in the list column.
    pub cards: Vec<CardItem>,

    /// Header information (title, mode, counts).
    pub header: HeaderInfo,

    /// Pagination controls; `None` in the favorites view.
    pub pager: Option<PagerInfo>,

    /// Error banner shown above the footer.
    pub banner: Option<String>,

    /// Optional empty state message (when no cards are available).
    pub empty_state: Option<EmptyState>,

    /// Right-hand detail panel.
    pub detail: DetailPanel,

    /// Footer information (keybindings, help text).
    pub footer: FooterInfo,
}

/// Display information for one character card.
///
/// Represents one row in the list. Contains pre-computed highlight ranges for
/// search match rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardItem {
    pub id: u32,

    /// Display name, already truncated to the column width.
    pub name: String,

    pub status: Status,

    pub species: String,

    /// Whether this card is the selected character.
    pub is_selected: bool,

    /// Whether this character is in the favorites set.
    pub is_favorite: bool,

    /// Character ranges to highlight (for search matches).
    ///
    /// Each tuple is `(start_index, end_index)` in UTF-8 character indices.
    pub highlight_ranges: Vec<(usize, usize)>,
}

/// Header display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    /// Title text to display in the header.
    pub title: String,
}

/// Pagination display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PagerInfo {
    /// Current server page and the server page count.
    pub server_page: u32,
    pub server_pages: u32,

    /// Current UI sub-page and the sub-page count of the buffer.
    pub ui_page: usize,
    pub ui_pages: usize,

    /// Total characters matching the current query.
    pub total_count: u32,

    pub has_prev: bool,
    pub has_next: bool,

    /// Whether a fetch is in flight.
    pub loading: bool,
}

/// Footer display information.
///
/// Contains help text and keybinding hints for the bottom of the UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    /// Keybinding help text (e.g., "n: next  p: prev  q: quit").
    pub keybindings: String,
}

/// Empty state message display information.
///
/// Shown when no cards are available (e.g., no search matches, no favorites).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    /// Primary message (e.g., "No characters found.").
    pub message: String,

    /// Secondary explanatory text.
    pub subtitle: String,
}

/// Content of the detail panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailPanel {
    /// Nothing selected.
    Hidden,
    /// Waiting for a character lookup.
    Loading(u32),
    /// The catalog does not know the selected id.
    NotFound(u32),
    /// The selected character.
    Character(Box<CharacterDetail>),
}

/// Display fields for the selected character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterDetail {
    pub id: u32,
    pub name: String,
    pub status: Status,
    pub species: String,
    pub kind: String,
    pub gender: String,
    pub origin: String,
    pub location: String,
    pub episode_count: usize,
    pub created: String,
    pub image: String,
    pub is_favorite: bool,
}
