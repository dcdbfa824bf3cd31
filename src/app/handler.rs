//! Event handling and state transition logic.
//!
//! This module implements the core event handler that processes user commands
//! and worker responses, translating them into state changes and action
//! sequences. It serves as the primary control flow coordinator for the
//! application.
//!
//! # Architecture
//!
//! The handler follows a unidirectional data flow pattern:
//! 1. Events arrive from the command line reader or the worker channel
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations occur via `AppState` and `PageCache` methods
//! 4. Actions are collected and returned for execution
//!
//! # Event Types
//!
//! Events fall into several categories:
//! - **Paging**: `NextPage`, `PrevPage`, `Resize`, `SetPageSize`, `Reload`
//! - **Search**: `Search`
//! - **Selection**: `Select`, `Navigate`, `ClearSelection`
//! - **Favorites**: `ToggleFavorite`, `RemoveFavorite`
//! - **Mode Switching**: `ShowCatalog`, `ShowFavorites`
//! - **Worker**: `WorkerResponse` with typed message variants

use crate::app::{Action, AppState};
use crate::domain::error::Result;
use crate::domain::CharacterRoute;
use crate::ui::CHROME_ROWS;
use crate::worker::WorkerResponse;

use super::modes::{Selection, ViewMode};

/// Events triggered by user commands or worker responses.
///
/// Each event represents a discrete occurrence that may cause state changes
/// and action emissions. The event handler processes these sequentially,
/// ensuring deterministic state transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Moves to the next UI sub-page, fetching the next server page if needed.
    NextPage,
    /// Moves to the previous UI sub-page, fetching the previous server page if needed.
    PrevPage,
    /// Replaces the search term; a blank term returns to the plain listing.
    Search(String),
    /// Terminal height changed; the UI page size follows the list height.
    Resize {
        /// New terminal height in rows.
        rows: usize,
    },
    /// Sets the UI page size explicitly.
    SetPageSize(usize),
    /// Opens a character in the detail panel.
    Select(u32),
    /// Opens the character named by a route query such as `?characterId=5`.
    Navigate(String),
    /// Closes the detail panel.
    ClearSelection,
    /// Adds or removes a character from favorites.
    ToggleFavorite(u32),
    /// Removes a character from favorites.
    RemoveFavorite(u32),
    /// Switches to the favorites list.
    ShowFavorites,
    /// Switches back to the catalog.
    ShowCatalog,
    /// Re-fetches the current server page.
    Reload,
    /// Exits the application.
    Quit,
    /// Delivers a response from the background worker.
    WorkerResponse(WorkerResponse),
}

impl Event {
    /// Parses a command line typed by the user.
    ///
    /// Returns `None` for blank lines, unknown commands and commands with a
    /// missing or malformed argument.
    ///
    /// # Example
    ///
    /// ```
    /// use rickdex::app::Event;
    ///
    /// assert_eq!(Event::from_command("n"), Some(Event::NextPage));
    /// assert_eq!(Event::from_command("search rick"), Some(Event::Search("rick".into())));
    /// assert_eq!(Event::from_command("open 5"), Some(Event::Select(5)));
    /// assert_eq!(Event::from_command("open five"), None);
    /// ```
    #[must_use]
    pub fn from_command(line: &str) -> Option<Self> {
        let line = line.trim();
        if line.starts_with('?') {
            return Some(Self::Navigate(line.to_string()));
        }

        let (command, argument) = match line.split_once(char::is_whitespace) {
            Some((command, argument)) => (command, argument.trim()),
            None => (line, ""),
        };

        let id = || argument.parse::<u32>().ok();
        let count = || argument.parse::<usize>().ok();

        match command {
            "n" | "next" => Some(Self::NextPage),
            "p" | "prev" => Some(Self::PrevPage),
            "s" | "search" => Some(Self::Search(argument.to_string())),
            "o" | "open" => id().map(Self::Select),
            "go" if !argument.is_empty() => Some(Self::Navigate(argument.to_string())),
            "x" | "close" => Some(Self::ClearSelection),
            "f" | "fav" => id().map(Self::ToggleFavorite),
            "u" | "unfav" => id().map(Self::RemoveFavorite),
            "v" | "favs" => Some(Self::ShowFavorites),
            "c" | "catalog" => Some(Self::ShowCatalog),
            "size" => count().map(Self::SetPageSize),
            "resize" => count().map(|rows| Self::Resize { rows }),
            "r" | "reload" => Some(Self::Reload),
            "q" | "quit" => Some(Self::Quit),
            _ => None,
        }
    }
}

/// Processes an event, mutating state and returning actions to execute.
///
/// The returned flag tells the caller whether the frame must be re-rendered.
///
/// # Errors
///
/// Returns errors from state mutation methods.
///
/// # Tracing
///
/// Each call creates a debug-level span with the event type.
#[allow(clippy::too_many_lines)]
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::NextPage => {
            if state.view_mode != ViewMode::Catalog {
                return Ok((false, vec![]));
            }
            state.notice = None;
            let actions = state.pages.advance().map(Action::PostToWorker).into_iter().collect();
            Ok((true, actions))
        }
        Event::PrevPage => {
            if state.view_mode != ViewMode::Catalog {
                return Ok((false, vec![]));
            }
            state.notice = None;
            let actions = state.pages.retreat().map(Action::PostToWorker).into_iter().collect();
            Ok((true, actions))
        }
        Event::Search(term) => {
            state.view_mode = ViewMode::Catalog;
            state.notice = None;
            let request = state.pages.search(term);
            Ok((true, vec![Action::PostToWorker(request)]))
        }
        Event::Resize { rows } => {
            state.pages.resize(rows.saturating_sub(CHROME_ROWS).max(1));
            Ok((true, vec![]))
        }
        Event::SetPageSize(size) => {
            state.pages.resize(*size);
            Ok((true, vec![]))
        }
        Event::Select(id) => {
            state.notice = None;
            let actions = state.select(*id).map(Action::PostToWorker).into_iter().collect();
            Ok((true, actions))
        }
        Event::Navigate(query) => {
            let Some(route) = CharacterRoute::from_query(query) else {
                tracing::debug!(query = %query, "route has no character id");
                state.notice = Some(format!("Invalid route: {query}"));
                return Ok((true, vec![]));
            };

            state.notice = None;
            let actions = state
                .select(route.character_id)
                .map(Action::PostToWorker)
                .into_iter()
                .collect();
            Ok((true, actions))
        }
        Event::ClearSelection => {
            if state.selection.is_none() {
                return Ok((false, vec![]));
            }
            state.selection = Selection::None;
            Ok((true, vec![]))
        }
        Event::ToggleFavorite(id) => {
            let Some(character) = state.find_character(*id).cloned() else {
                tracing::debug!(character_id = id, "cannot favorite a character that is not loaded");
                state.notice = Some(format!("Character #{id} is not loaded"));
                return Ok((true, vec![]));
            };

            let added = state.favorites.toggle(&character);
            tracing::debug!(character_id = id, added, "favorite toggled");
            state.notice = None;
            Ok((true, vec![]))
        }
        Event::RemoveFavorite(id) => {
            let removed = state.favorites.remove(*id);
            tracing::debug!(character_id = id, removed, "favorite removed");
            Ok((removed, vec![]))
        }
        Event::ShowFavorites => {
            state.view_mode = ViewMode::Favorites;
            Ok((true, vec![]))
        }
        Event::ShowCatalog => {
            state.view_mode = ViewMode::Catalog;
            state.select_first_visible_if_none();
            Ok((true, vec![]))
        }
        Event::Reload => {
            state.notice = None;
            Ok((true, vec![Action::PostToWorker(state.pages.reload())]))
        }
        Event::Quit => Ok((false, vec![Action::Quit])),
        Event::WorkerResponse(response) => handle_worker_response(state, response),
    }
}

fn handle_worker_response(state: &mut AppState, response: &WorkerResponse) -> Result<(bool, Vec<Action>)> {
    match response {
        WorkerResponse::PageLoaded { seq, page_number, page } => {
            tracing::debug!(
                seq,
                page_number,
                characters = page.results.len(),
                "page loaded"
            );

            if !state.pages.apply_page(*seq, page.clone()) {
                return Ok((false, vec![]));
            }
            state.select_first_visible_if_none();
            Ok((true, vec![]))
        }
        WorkerResponse::Error { seq, message } => {
            tracing::warn!(seq, error = %message, "page request failed");
            Ok((state.pages.apply_error(*seq, message), vec![]))
        }
        WorkerResponse::CharacterLoaded { id, character } => {
            tracing::debug!(character_id = id, found = character.is_some(), "character loaded");
            Ok((state.apply_character(*id, character.as_ref()), vec![]))
        }
        WorkerResponse::CharacterError { id, message } => {
            tracing::warn!(character_id = id, error = %message, "character lookup failed");
            Ok((state.apply_character_error(*id, message), vec![]))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::pagination::PageCache;
    use crate::domain::character::fixtures;
    use crate::domain::{CharacterPage, PageInfo};
    use crate::storage::{FavoritesStore, MemorySlotStorage};
    use crate::ui::Theme;
    use crate::worker::WorkerMessage;

    fn page(first_id: u32, count: u32, next: bool, prev: bool) -> CharacterPage {
        CharacterPage {
            info: PageInfo {
                count: 60,
                pages: 3,
                next: next.then(|| "next".to_string()),
                prev: prev.then(|| "prev".to_string()),
            },
            results: fixtures::characters(first_id, count),
        }
    }

    fn state(ui_page_size: usize) -> AppState {
        let favorites = FavoritesStore::new(Box::new(MemorySlotStorage::default()), "favorites");
        AppState::new(PageCache::new(ui_page_size), favorites, Theme::default())
    }

    fn posted(actions: &[Action]) -> Vec<WorkerMessage> {
        actions
            .iter()
            .filter_map(|a| match a {
                Action::PostToWorker(msg) => Some(msg.clone()),
                Action::Quit => None,
            })
            .collect()
    }

    fn respond(state: &mut AppState, response: WorkerResponse) -> bool {
        handle_event(state, &Event::WorkerResponse(response)).unwrap().0
    }

    /// Boots the state and answers the initial request with a first page of 20.
    fn loaded(ui_page_size: usize) -> AppState {
        let mut state = state(ui_page_size);
        let actions = state.bootstrap(None);
        let seq = posted(&actions)[0].seq().unwrap();
        respond(
            &mut state,
            WorkerResponse::PageLoaded {
                seq,
                page_number: 1,
                page: page(1, 20, true, false),
            },
        );
        state
    }

    #[test]
    fn parses_commands() {
        assert_eq!(Event::from_command("  next "), Some(Event::NextPage));
        assert_eq!(Event::from_command("p"), Some(Event::PrevPage));
        assert_eq!(Event::from_command("s  rick sanchez "), Some(Event::Search("rick sanchez".into())));
        assert_eq!(Event::from_command("search"), Some(Event::Search(String::new())));
        assert_eq!(Event::from_command("?characterId=3"), Some(Event::Navigate("?characterId=3".into())));
        assert_eq!(Event::from_command("go characterId=3"), Some(Event::Navigate("characterId=3".into())));
        assert_eq!(Event::from_command("fav 7"), Some(Event::ToggleFavorite(7)));
        assert_eq!(Event::from_command("unfav 7"), Some(Event::RemoveFavorite(7)));
        assert_eq!(Event::from_command("size 4"), Some(Event::SetPageSize(4)));
        assert_eq!(Event::from_command("resize 30"), Some(Event::Resize { rows: 30 }));
        assert_eq!(Event::from_command("q"), Some(Event::Quit));
        assert_eq!(Event::from_command("open"), None);
        assert_eq!(Event::from_command("go"), None);
        assert_eq!(Event::from_command(""), None);
        assert_eq!(Event::from_command("dance"), None);
    }

    #[test]
    fn first_page_selects_first_character() {
        let state = loaded(5);
        assert_eq!(state.pages.visible().len(), 5);
        assert_eq!(state.selection.id(), Some(1));
    }

    #[test]
    fn next_page_is_served_from_buffer_then_fetches() {
        let mut state = loaded(10);

        let (_, actions) = handle_event(&mut state, &Event::NextPage).unwrap();
        assert!(actions.is_empty());
        assert_eq!(state.pages.ui_page(), 2);

        let (_, actions) = handle_event(&mut state, &Event::NextPage).unwrap();
        let requests = posted(&actions);
        assert!(matches!(requests.as_slice(), [WorkerMessage::FetchListing { page: 2, .. }]));

        respond(
            &mut state,
            WorkerResponse::PageLoaded {
                seq: requests[0].seq().unwrap(),
                page_number: 2,
                page: page(21, 20, true, true),
            },
        );
        assert_eq!(state.pages.server_page(), 2);
        assert_eq!(state.pages.ui_page(), 1);
        assert_eq!(state.pages.visible()[0].id, 21);
    }

    #[test]
    fn prev_page_lands_on_last_sub_page() {
        let mut state = loaded(10);
        handle_event(&mut state, &Event::NextPage).unwrap();
        let (_, actions) = handle_event(&mut state, &Event::NextPage).unwrap();
        respond(
            &mut state,
            WorkerResponse::PageLoaded {
                seq: posted(&actions)[0].seq().unwrap(),
                page_number: 2,
                page: page(21, 20, true, true),
            },
        );

        let (_, actions) = handle_event(&mut state, &Event::PrevPage).unwrap();
        respond(
            &mut state,
            WorkerResponse::PageLoaded {
                seq: posted(&actions)[0].seq().unwrap(),
                page_number: 1,
                page: page(1, 20, true, false),
            },
        );

        assert_eq!(state.pages.server_page(), 1);
        assert_eq!(state.pages.ui_page(), 2);
        assert_eq!(state.pages.visible()[0].id, 11);
    }

    #[test]
    fn stale_search_response_is_ignored() {
        let mut state = loaded(5);

        let (_, first) = handle_event(&mut state, &Event::Search("ri".into())).unwrap();
        let (_, second) = handle_event(&mut state, &Event::Search("rick".into())).unwrap();
        let stale = posted(&first)[0].seq().unwrap();
        let latest = posted(&second)[0].seq().unwrap();

        assert!(!respond(
            &mut state,
            WorkerResponse::PageLoaded {
                seq: stale,
                page_number: 1,
                page: page(100, 3, false, false),
            },
        ));
        assert!(state.pages.buffer().is_empty());

        assert!(respond(
            &mut state,
            WorkerResponse::PageLoaded {
                seq: latest,
                page_number: 1,
                page: page(200, 2, false, false),
            },
        ));
        assert_eq!(state.pages.buffer()[0].id, 200);
        assert_eq!(state.pages.search_term(), "rick");
    }

    #[test]
    fn failed_fetch_keeps_current_page_and_shows_banner() {
        let mut state = loaded(10);
        handle_event(&mut state, &Event::NextPage).unwrap();
        let (_, actions) = handle_event(&mut state, &Event::NextPage).unwrap();

        respond(
            &mut state,
            WorkerResponse::Error {
                seq: posted(&actions)[0].seq().unwrap(),
                message: "Failed to fetch characters".into(),
            },
        );

        assert_eq!(state.pages.server_page(), 1);
        assert_eq!(state.pages.ui_page(), 2);
        let vm = state.compute_viewmodel(24, 100);
        assert_eq!(vm.banner.as_deref(), Some("Failed to fetch characters"));
        assert_eq!(vm.cards.len(), 10);
    }

    #[test]
    fn resize_keeps_first_visible_character() {
        let mut state = loaded(4);
        handle_event(&mut state, &Event::NextPage).unwrap();
        assert_eq!(state.pages.visible()[0].id, 5);

        handle_event(&mut state, &Event::SetPageSize(2)).unwrap();
        assert_eq!(state.pages.visible()[0].id, 5);

        handle_event(&mut state, &Event::Resize { rows: CHROME_ROWS + 8 }).unwrap();
        assert_eq!(state.pages.ui_page_size(), 8);
        assert_eq!(state.pages.visible()[0].id, 1);
    }

    #[test]
    fn navigate_to_unknown_character_shows_not_found() {
        let mut state = loaded(5);

        let (_, actions) = handle_event(&mut state, &Event::Navigate("?characterId=999".into())).unwrap();
        assert_eq!(posted(&actions), vec![WorkerMessage::FetchCharacter { id: 999 }]);

        respond(&mut state, WorkerResponse::CharacterLoaded { id: 999, character: None });
        assert_eq!(state.selection, Selection::NotFound(999));
    }

    #[test]
    fn navigate_with_bad_route_sets_notice() {
        let mut state = loaded(5);
        let (_, actions) = handle_event(&mut state, &Event::Navigate("?characterId=abc".into())).unwrap();
        assert!(actions.is_empty());
        assert!(state.notice.is_some());
        assert_eq!(state.selection.id(), Some(1));
    }

    #[test]
    fn selecting_buffered_character_needs_no_fetch() {
        let mut state = loaded(5);
        let (_, actions) = handle_event(&mut state, &Event::Select(12)).unwrap();
        assert!(actions.is_empty());
        assert_eq!(state.selection.id(), Some(12));
        assert!(state.selection.character().is_some());
    }

    #[test]
    fn favorites_toggle_and_remove() {
        let mut state = loaded(5);

        handle_event(&mut state, &Event::ToggleFavorite(3)).unwrap();
        assert!(state.favorites.is_favorite(3));

        handle_event(&mut state, &Event::ToggleFavorite(3)).unwrap();
        assert!(!state.favorites.is_favorite(3));

        handle_event(&mut state, &Event::ToggleFavorite(4)).unwrap();
        let (render, _) = handle_event(&mut state, &Event::RemoveFavorite(4)).unwrap();
        assert!(render);
        let (render, _) = handle_event(&mut state, &Event::RemoveFavorite(4)).unwrap();
        assert!(!render);
    }

    #[test]
    fn favoriting_unloaded_character_sets_notice() {
        let mut state = loaded(5);
        handle_event(&mut state, &Event::ToggleFavorite(500)).unwrap();
        assert!(state.favorites.is_empty());
        assert_eq!(state.notice.as_deref(), Some("Character #500 is not loaded"));
    }

    #[test]
    fn character_lookup_error_marks_not_found() {
        let mut state = loaded(5);
        handle_event(&mut state, &Event::Select(777)).unwrap();

        respond(
            &mut state,
            WorkerResponse::CharacterError {
                id: 777,
                message: "Failed to fetch character".into(),
            },
        );

        assert_eq!(state.selection, Selection::NotFound(777));
        assert_eq!(state.notice.as_deref(), Some("Failed to fetch character"));
    }

    #[test]
    fn paging_is_ignored_in_favorites_view() {
        let mut state = loaded(5);
        handle_event(&mut state, &Event::ShowFavorites).unwrap();

        let (render, actions) = handle_event(&mut state, &Event::NextPage).unwrap();
        assert!(!render);
        assert!(actions.is_empty());
        assert_eq!(state.pages.ui_page(), 1);
    }

    #[test]
    fn quit_emits_quit_action() {
        let mut state = state(5);
        let (_, actions) = handle_event(&mut state, &Event::Quit).unwrap();
        assert_eq!(actions, vec![Action::Quit]);
    }
}
