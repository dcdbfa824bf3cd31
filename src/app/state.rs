//! Application state management and view model computation.
//!
//! This module defines [`AppState`], the central state container for the catalog,
//! along with methods for selection management and UI view model generation. It
//! serves as the single source of truth for all transient UI state.
//!
//! # State Components
//!
//! - **Pages**: The [`PageCache`] holding the buffered server page and search term
//! - **Favorites**: The persisted [`FavoritesStore`]
//! - **Selection**: The character shown in the detail panel
//! - **View Mode**: Catalog or favorites list
//! - **Notice**: Last message not tied to a page fetch (e.g. a failed lookup)
//!
//! # View Model Computation
//!
//! The `compute_viewmodel` method transforms state into a renderable UI
//! representation, handling the two-column layout, search match highlighting
//! and the empty and not-found states.

use super::modes::{Selection, ViewMode};
use super::pagination::PageCache;
use crate::app::Action;
use crate::domain::{Character, CharacterRoute};
use crate::storage::FavoritesStore;
use crate::ui::components::{name_width, split_columns, CHROME_ROWS};
use crate::ui::helpers::truncate;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    CardItem, CharacterDetail, DetailPanel, EmptyState, FooterInfo, HeaderInfo, PagerInfo,
    UIViewModel,
};
use crate::worker::WorkerMessage;
use fuzzy_matcher::skim::SkimMatcherV2;

/// Empty state message for a list without characters.
pub const NO_CHARACTERS_MESSAGE: &str = "No characters found.";

/// Central application state container.
///
/// Mutated by the event handler in response to user input and worker
/// responses. View models are computed on-demand from state snapshots.
pub struct AppState {
    /// Buffered catalog page, pagination counters and search term.
    pub pages: PageCache,

    /// Persisted favorites, mirrored to storage on every mutation.
    pub favorites: FavoritesStore,

    /// Character shown in the detail panel.
    pub selection: Selection,

    /// Current list mode.
    pub view_mode: ViewMode,

    /// Color scheme for UI rendering.
    pub theme: Theme,

    /// Last message not tied to a page fetch, shown in the banner.
    pub notice: Option<String>,
}

impl AppState {
    /// Creates a new application state in catalog view with nothing selected.
    #[must_use]
    pub fn new(pages: PageCache, favorites: FavoritesStore, theme: Theme) -> Self {
        Self {
            pages,
            favorites,
            selection: Selection::None,
            view_mode: ViewMode::Catalog,
            theme,
            notice: None,
        }
    }

    /// Returns the actions that start the catalog.
    ///
    /// Requests the first page unless the cache was seeded with one, and opens
    /// `route` in the detail panel.
    pub fn bootstrap(&mut self, route: Option<CharacterRoute>) -> Vec<Action> {
        let mut actions = vec![];

        if self.pages.buffer().is_empty() {
            actions.push(Action::PostToWorker(self.pages.initial_load()));
        }

        if let Some(route) = route {
            tracing::debug!(character_id = route.character_id, "opening initial route");
            if let Some(request) = self.select(route.character_id) {
                actions.push(Action::PostToWorker(request));
            }
        } else {
            self.select_first_visible_if_none();
        }

        actions
    }

    /// Looks up a character already held in memory.
    ///
    /// Checks the resolved selection, the page buffer and the favorites, in that
    /// order.
    #[must_use]
    pub fn find_character(&self, id: u32) -> Option<&Character> {
        self.selection
            .character()
            .filter(|c| c.id == id)
            .or_else(|| self.pages.find(id))
            .or_else(|| self.favorites.get(id))
    }

    /// Selects a character for the detail panel.
    ///
    /// Resolves from memory when possible. Otherwise the selection becomes
    /// `Loading(id)` and the returned request must be posted to the worker.
    pub fn select(&mut self, id: u32) -> Option<WorkerMessage> {
        if let Some(character) = self.find_character(id).cloned() {
            tracing::debug!(character_id = id, "selected from memory");
            self.selection = Selection::Found(Box::new(character));
            return None;
        }

        tracing::debug!(character_id = id, "selection needs a lookup");
        self.selection = Selection::Loading(id);
        Some(WorkerMessage::FetchCharacter { id })
    }

    /// Applies a completed character lookup.
    ///
    /// Returns `false` if the selection has moved on since the request.
    pub fn apply_character(&mut self, id: u32, character: Option<&Character>) -> bool {
        if self.selection != Selection::Loading(id) {
            tracing::debug!(character_id = id, "discarding stale character lookup");
            return false;
        }

        self.selection = match character {
            Some(character) => Selection::Found(Box::new(character.clone())),
            None => Selection::NotFound(id),
        };
        true
    }

    /// Applies a failed character lookup; the panel shows the not-found state
    /// and the banner shows the error.
    pub fn apply_character_error(&mut self, id: u32, message: &str) -> bool {
        if self.selection != Selection::Loading(id) {
            tracing::debug!(character_id = id, "discarding stale character error");
            return false;
        }

        self.selection = Selection::NotFound(id);
        self.notice = Some(message.to_string());
        true
    }

    /// Selects the first visible catalog character when nothing is selected.
    pub fn select_first_visible_if_none(&mut self) {
        if !self.selection.is_none() || self.view_mode != ViewMode::Catalog {
            return;
        }
        if let Some(first) = self.pages.visible().first() {
            tracing::debug!(character_id = first.id, "selecting first character");
            self.selection = Selection::Found(Box::new(first.clone()));
        }
    }

    /// Computes a renderable UI view model from current state and terminal dimensions.
    ///
    /// # Parameters
    ///
    /// * `rows` - Terminal height in character cells
    /// * `cols` - Terminal width in character cells
    ///
    /// # Windowing
    ///
    /// The catalog view shows exactly the current UI sub-page. The favorites view
    /// has no pagination and is windowed around the selected favorite instead.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        let (list_width, _, _) = split_columns(cols);
        let max_name = name_width(list_width);

        let matcher = if self.view_mode == ViewMode::Catalog && self.pages.is_search() {
            Some(SkimMatcherV2::default())
        } else {
            None
        };

        let characters: &[Character] = match self.view_mode {
            ViewMode::Catalog => self.pages.visible(),
            ViewMode::Favorites => self.favorites_window(rows.saturating_sub(CHROME_ROWS).max(1)),
        };

        let cards: Vec<CardItem> = characters
            .iter()
            .map(|character| self.compute_card(character, max_name, matcher.as_ref()))
            .collect();

        UIViewModel {
            empty_state: self.compute_empty_state(cards.is_empty()),
            cards,
            header: self.compute_header(),
            pager: self.compute_pager(),
            banner: self
                .notice
                .clone()
                .or_else(|| self.pages.error().map(str::to_string)),
            detail: self.compute_detail(),
            footer: self.compute_footer(),
        }
    }

    /// Favorites visible in a list of `capacity` rows, keeping the selected
    /// favorite roughly centered.
    fn favorites_window(&self, capacity: usize) -> &[Character] {
        let favorites = self.favorites.favorites();
        if favorites.len() <= capacity {
            return favorites;
        }

        let selected = self
            .selection
            .id()
            .and_then(|id| favorites.iter().position(|c| c.id == id))
            .unwrap_or(0);

        let start = selected
            .saturating_sub(capacity / 2)
            .min(favorites.len() - capacity);
        &favorites[start..start + capacity]
    }

    fn compute_card(&self, character: &Character, max_name: usize, matcher: Option<&SkimMatcherV2>) -> CardItem {
        let name = truncate(&character.name, max_name);
        let highlight_ranges = matcher.map_or_else(Vec::new, |m| self.compute_highlight_ranges(&name, m));

        CardItem {
            id: character.id,
            name,
            status: character.status,
            species: character.species.clone(),
            is_selected: self.selection.id() == Some(character.id),
            is_favorite: self.favorites.is_favorite(character.id),
            highlight_ranges,
        }
    }

    /// Computes character index ranges to highlight for search match visualization.
    ///
    /// Uses the Skim fuzzy matcher to find matching character positions against
    /// the search term, then coalesces consecutive indices into `(start, end)`
    /// ranges (exclusive end).
    fn compute_highlight_ranges(&self, text: &str, matcher: &SkimMatcherV2) -> Vec<(usize, usize)> {
        use fuzzy_matcher::FuzzyMatcher;

        let Some((_score, indices)) = matcher.fuzzy_indices(text, self.pages.search_term()) else {
            return vec![];
        };

        let mut ranges: Vec<(usize, usize)> = Vec::new();
        for idx in indices {
            match ranges.last_mut() {
                Some((_, end)) if *end == idx => *end = idx + 1,
                _ => ranges.push((idx, idx + 1)),
            }
        }
        ranges
    }

    fn compute_header(&self) -> HeaderInfo {
        let title = match self.view_mode {
            ViewMode::Catalog if self.pages.is_search() => format!(
                " Search \"{}\" ({}) ",
                self.pages.search_term(),
                self.pages.info().count
            ),
            ViewMode::Catalog => format!(" Characters ({}) ", self.pages.info().count),
            ViewMode::Favorites => format!(" Favorites ({}) ", self.favorites.len()),
        };
        HeaderInfo { title }
    }

    fn compute_pager(&self) -> Option<PagerInfo> {
        if self.view_mode != ViewMode::Catalog {
            return None;
        }

        let info = self.pages.info();
        Some(PagerInfo {
            server_page: self.pages.server_page(),
            server_pages: info.pages,
            ui_page: self.pages.ui_page(),
            ui_pages: self.pages.ui_page_count(),
            total_count: info.count,
            has_prev: self.pages.has_prev(),
            has_next: self.pages.has_next(),
            loading: self.pages.is_loading(),
        })
    }

    fn compute_empty_state(&self, no_cards: bool) -> Option<EmptyState> {
        if !no_cards {
            return None;
        }

        match self.view_mode {
            ViewMode::Catalog if self.pages.is_loading() => Some(EmptyState {
                message: "Loading characters...".to_string(),
                subtitle: String::new(),
            }),
            ViewMode::Catalog if self.pages.error().is_some() => None,
            ViewMode::Catalog => Some(EmptyState {
                message: NO_CHARACTERS_MESSAGE.to_string(),
                subtitle: if self.pages.is_search() {
                    format!("No matches for \"{}\"", self.pages.search_term())
                } else {
                    "The catalog returned no characters".to_string()
                },
            }),
            ViewMode::Favorites => Some(EmptyState {
                message: "No favorites yet.".to_string(),
                subtitle: "Use `fav <id>` to add a character".to_string(),
            }),
        }
    }

    fn compute_detail(&self) -> DetailPanel {
        match &self.selection {
            Selection::None => DetailPanel::Hidden,
            Selection::Loading(id) => DetailPanel::Loading(*id),
            Selection::NotFound(id) => DetailPanel::NotFound(*id),
            Selection::Found(character) => DetailPanel::Character(Box::new(CharacterDetail {
                id: character.id,
                name: character.name.clone(),
                status: character.status,
                species: character.species.clone(),
                kind: character.kind.clone(),
                gender: character.gender.to_string(),
                origin: character.origin.name.clone(),
                location: character.location.name.clone(),
                episode_count: character.episode_count(),
                created: character.created.format("%Y-%m-%d").to_string(),
                image: character.image.clone(),
                is_favorite: self.favorites.is_favorite(character.id),
            })),
        }
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = match self.view_mode {
            ViewMode::Catalog => {
                "n: next  p: prev  s <term>: search  o <id>: open  f <id>: favorite  v: favorites  r: reload  q: quit"
            }
            ViewMode::Favorites => "o <id>: open  u <id>: unfavorite  c: catalog  q: quit",
        };
        FooterInfo {
            keybindings: keybindings.to_string(),
        }
    }
}
