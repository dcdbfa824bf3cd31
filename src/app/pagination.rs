//! Client-side pagination over buffered server pages.
//!
//! The remote catalog serves characters in fixed server pages. [`PageCache`]
//! keeps the most recently fetched server page in a buffer and re-slices it into
//! smaller UI sub-pages, so most navigation is served from memory and a fetch
//! only happens when moving past either end of the buffer.
//!
//! # State Machine
//!
//! ```text
//!             advance (more sub-pages)          retreat (ui_page > 1)
//!         ┌──────────── ui_page += 1 ───┐   ┌─── ui_page -= 1 ────────────┐
//!         │                             ▼   ▼                             │
//!   ┌─────┴──────────────────────────── PageCache ────────────────────────┴─┐
//!   │ server_page, ui_page, search_term, buffer, info, pending request      │
//!   └─────┬────────────────────────────────┬────────────────────────────────┘
//!         │ advance past last sub-page     │ retreat before first sub-page
//!         ▼ (info.next present)            ▼ (server_page > 1)
//!   fetch server_page + 1,           fetch server_page - 1,
//!   land on first sub-page           land on last sub-page
//! ```
//!
//! Every fetch is tagged with a monotonically increasing sequence number. A
//! response is applied only if it answers the latest request; anything older is
//! discarded. A failed fetch leaves the buffer and both page counters untouched.

use crate::domain::{Character, CharacterPage, PageInfo};
use crate::worker::WorkerMessage;

/// Where the UI page lands once a fetch succeeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Landing {
    /// First sub-page of the new buffer.
    First,
    /// Last sub-page of the new buffer.
    Last,
    /// Current sub-page, clamped to the new buffer.
    Keep,
}

/// An issued request that has not been answered yet.
#[derive(Debug, Clone, PartialEq, Eq)]
struct PendingFetch {
    seq: u64,
    page: u32,
    landing: Landing,
}

/// Maps a UI page to the page showing the same first item under a new size.
///
/// The absolute offset of the first item of `old_ui_page` is kept, then the
/// result is clamped to `[1, max(1, ceil(buffered_len / new_size))]`. Sizes of
/// zero are treated as one.
///
/// # Examples
///
/// ```
/// use rickdex::app::pagination::relocate_ui_page;
///
/// // Items 4..8 of a buffer of 8 are on page 2 at size 4 and page 3 at size 2.
/// assert_eq!(relocate_ui_page(2, 4, 2, 8), 3);
/// assert_eq!(relocate_ui_page(3, 2, 4, 8), 2);
/// ```
#[must_use]
pub fn relocate_ui_page(old_ui_page: usize, old_size: usize, new_size: usize, buffered_len: usize) -> usize {
    let old_size = old_size.max(1);
    let new_size = new_size.max(1);

    let offset = old_ui_page.saturating_sub(1).saturating_mul(old_size);
    let page_count = buffered_len.div_ceil(new_size).max(1);

    (offset / new_size + 1).clamp(1, page_count)
}

/// Pagination and cache controller for the character list.
#[derive(Debug, Clone)]
pub struct PageCache {
    buffer: Vec<Character>,
    info: PageInfo,
    server_page: u32,
    ui_page: usize,
    ui_page_size: usize,
    search_term: String,
    pending: Option<PendingFetch>,
    last_seq: u64,
    error: Option<String>,
}

impl PageCache {
    /// Creates an empty cache in listing mode at server page 1, UI page 1.
    #[must_use]
    pub fn new(ui_page_size: usize) -> Self {
        Self {
            buffer: Vec::new(),
            info: PageInfo::default(),
            server_page: 1,
            ui_page: 1,
            ui_page_size: ui_page_size.max(1),
            search_term: String::new(),
            pending: None,
            last_seq: 0,
            error: None,
        }
    }

    /// Creates a cache whose buffer is an already fetched first server page.
    #[must_use]
    pub fn with_initial_page(page: CharacterPage, ui_page_size: usize) -> Self {
        let mut cache = Self::new(ui_page_size);
        cache.buffer = page.results;
        cache.info = page.info;
        cache
    }

    /// Requests the first server page of the current mode.
    pub fn initial_load(&mut self) -> WorkerMessage {
        self.request(1, Landing::First)
    }

    /// Re-fetches the current server page, keeping the UI page where possible.
    pub fn reload(&mut self) -> WorkerMessage {
        self.request(self.server_page, Landing::Keep)
    }

    /// Moves to the next UI sub-page.
    ///
    /// Served from the buffer when more sub-pages exist. Otherwise requests the
    /// next server page if the catalog advertises one, or does nothing.
    pub fn advance(&mut self) -> Option<WorkerMessage> {
        if self.ui_page < self.ui_page_count() {
            self.ui_page += 1;
            tracing::debug!(ui_page = self.ui_page, "advanced within buffer");
            return None;
        }

        if self.info.next.is_none() {
            tracing::debug!(server_page = self.server_page, "no next page, advance ignored");
            return None;
        }

        Some(self.request(self.server_page.saturating_add(1), Landing::First))
    }

    /// Moves to the previous UI sub-page.
    ///
    /// Served from the buffer when `ui_page > 1`. Otherwise requests the previous
    /// server page and lands on its last sub-page, or does nothing on server
    /// page 1.
    pub fn retreat(&mut self) -> Option<WorkerMessage> {
        if self.ui_page > 1 {
            self.ui_page -= 1;
            tracing::debug!(ui_page = self.ui_page, "retreated within buffer");
            return None;
        }

        if self.server_page <= 1 {
            tracing::debug!("already on first page, retreat ignored");
            return None;
        }

        Some(self.request(self.server_page - 1, Landing::Last))
    }

    /// Replaces the search term and restarts from the first page.
    ///
    /// The term is trimmed; a blank term returns to the plain listing. The
    /// buffer and page info are cleared on every term change, so the page
    /// counters always describe what is buffered, even if the fetch fails.
    pub fn search(&mut self, term: &str) -> WorkerMessage {
        let term = term.trim();

        self.search_term = term.to_string();
        self.buffer.clear();
        self.info = PageInfo::default();
        self.server_page = 1;
        self.ui_page = 1;
        self.error = None;

        tracing::debug!(term = %self.search_term, "search term changed");
        self.request(1, Landing::First)
    }

    /// Changes the UI sub-page size, keeping the first visible item on screen.
    pub fn resize(&mut self, new_size: usize) {
        let new_size = new_size.max(1);
        if new_size == self.ui_page_size {
            return;
        }

        let relocated = relocate_ui_page(self.ui_page, self.ui_page_size, new_size, self.buffer.len());
        tracing::debug!(
            old_size = self.ui_page_size,
            new_size,
            old_ui_page = self.ui_page,
            new_ui_page = relocated,
            "ui page size changed"
        );

        self.ui_page_size = new_size;
        self.ui_page = relocated;
    }

    /// Applies a fetched page.
    ///
    /// Returns `false` and leaves the cache untouched if `seq` does not answer
    /// the latest request.
    pub fn apply_page(&mut self, seq: u64, page: CharacterPage) -> bool {
        let Some(pending) = self.take_pending(seq) else {
            return false;
        };

        self.buffer = page.results;
        self.info = page.info;
        self.server_page = pending.page;
        self.error = None;

        let page_count = self.ui_page_count().max(1);
        self.ui_page = match pending.landing {
            Landing::First => 1,
            Landing::Last => page_count,
            Landing::Keep => self.ui_page.clamp(1, page_count),
        };

        tracing::debug!(
            seq,
            server_page = self.server_page,
            ui_page = self.ui_page,
            buffered = self.buffer.len(),
            "page applied"
        );
        true
    }

    /// Records a failed fetch.
    ///
    /// Buffer, page info and both page counters are kept. Returns `false` if
    /// `seq` does not answer the latest request.
    pub fn apply_error(&mut self, seq: u64, message: &str) -> bool {
        if self.take_pending(seq).is_none() {
            return false;
        }

        tracing::debug!(seq, error = %message, "fetch failed, keeping current page");
        self.error = Some(message.to_string());
        true
    }

    /// Characters on the current UI sub-page.
    #[must_use]
    pub fn visible(&self) -> &[Character] {
        let start = (self.ui_page - 1)
            .saturating_mul(self.ui_page_size)
            .min(self.buffer.len());
        let end = start.saturating_add(self.ui_page_size).min(self.buffer.len());
        &self.buffer[start..end]
    }

    /// Number of UI sub-pages in the buffer; 0 for an empty buffer.
    #[must_use]
    pub fn ui_page_count(&self) -> usize {
        self.buffer.len().div_ceil(self.ui_page_size)
    }

    #[must_use]
    pub fn has_next(&self) -> bool {
        self.ui_page < self.ui_page_count() || self.info.next.is_some()
    }

    #[must_use]
    pub fn has_prev(&self) -> bool {
        self.ui_page > 1 || self.server_page > 1
    }

    #[must_use]
    pub fn buffer(&self) -> &[Character] {
        &self.buffer
    }

    #[must_use]
    pub fn find(&self, id: u32) -> Option<&Character> {
        self.buffer.iter().find(|c| c.id == id)
    }

    #[must_use]
    pub const fn info(&self) -> &PageInfo {
        &self.info
    }

    #[must_use]
    pub const fn server_page(&self) -> u32 {
        self.server_page
    }

    #[must_use]
    pub const fn ui_page(&self) -> usize {
        self.ui_page
    }

    #[must_use]
    pub const fn ui_page_size(&self) -> usize {
        self.ui_page_size
    }

    #[must_use]
    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    #[must_use]
    pub fn is_search(&self) -> bool {
        !self.search_term.is_empty()
    }

    /// Whether a request is waiting for its response.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    /// Sequence number of the most recently issued request.
    #[must_use]
    pub const fn latest_seq(&self) -> u64 {
        self.last_seq
    }

    /// Message of the last failed fetch, cleared by the next success.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    fn request(&mut self, page: u32, landing: Landing) -> WorkerMessage {
        self.last_seq += 1;
        let seq = self.last_seq;

        if let Some(superseded) = self.pending.replace(PendingFetch { seq, page, landing }) {
            tracing::debug!(superseded_seq = superseded.seq, seq, "request superseded");
        }

        tracing::debug!(seq, page, search = %self.search_term, ?landing, "issuing fetch");

        if self.search_term.is_empty() {
            WorkerMessage::FetchListing { seq, page }
        } else {
            WorkerMessage::FetchSearch {
                seq,
                term: self.search_term.clone(),
                page,
            }
        }
    }

    fn take_pending(&mut self, seq: u64) -> Option<PendingFetch> {
        if self.pending.as_ref().is_some_and(|p| p.seq == seq) {
            self.pending.take()
        } else {
            tracing::debug!(seq, latest = self.last_seq, "discarding stale response");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::character::fixtures;

    fn page(first_id: u32, count: u32, next: bool, prev: bool) -> CharacterPage {
        CharacterPage {
            info: PageInfo {
                count: 100,
                pages: 13,
                next: next.then(|| "next".to_string()),
                prev: prev.then(|| "prev".to_string()),
            },
            results: fixtures::characters(first_id, count),
        }
    }

    fn ids(characters: &[Character]) -> Vec<u32> {
        characters.iter().map(|c| c.id).collect()
    }

    #[test]
    fn advance_serves_buffer_before_fetching() {
        let mut cache = PageCache::with_initial_page(page(1, 8, true, false), 4);

        assert_eq!(cache.advance(), None);
        assert_eq!(cache.ui_page(), 2);
        assert_eq!(ids(cache.visible()), vec![5, 6, 7, 8]);

        let request = cache.advance();
        assert_eq!(request, Some(WorkerMessage::FetchListing { seq: 1, page: 2 }));
        assert_eq!(cache.ui_page(), 2);
        assert!(cache.is_loading());
    }

    #[test]
    fn advance_without_next_page_is_noop() {
        let mut cache = PageCache::with_initial_page(page(1, 4, false, false), 4);

        assert_eq!(cache.advance(), None);
        assert_eq!(cache.ui_page(), 1);
        assert!(!cache.is_loading());
        assert!(!cache.has_next());
    }

    #[test]
    fn successful_advance_commits_next_page() {
        let mut cache = PageCache::with_initial_page(page(1, 4, true, false), 4);

        let Some(WorkerMessage::FetchListing { seq, page: 2 }) = cache.advance() else {
            panic!("expected listing fetch of page 2");
        };
        assert!(cache.apply_page(seq, page(5, 4, true, true)));

        assert_eq!(cache.server_page(), 2);
        assert_eq!(cache.ui_page(), 1);
        assert_eq!(ids(cache.visible()), vec![5, 6, 7, 8]);
        assert!(!cache.is_loading());
    }

    #[test]
    fn retreat_lands_on_last_sub_page() {
        let mut cache = PageCache::with_initial_page(page(1, 4, true, false), 4);
        let Some(WorkerMessage::FetchListing { seq, .. }) = cache.advance() else {
            panic!("expected fetch");
        };
        cache.apply_page(seq, page(9, 4, true, true));
        assert_eq!((cache.server_page(), cache.ui_page()), (2, 1));

        let Some(WorkerMessage::FetchListing { seq, page: 1 }) = cache.retreat() else {
            panic!("expected listing fetch of page 1");
        };
        assert!(cache.apply_page(seq, page(1, 8, true, false)));

        assert_eq!(cache.server_page(), 1);
        assert_eq!(cache.ui_page(), 2);
        assert_eq!(ids(cache.visible()), vec![5, 6, 7, 8]);
    }

    #[test]
    fn retreat_within_buffer_and_on_first_page() {
        let mut cache = PageCache::with_initial_page(page(1, 8, true, false), 4);
        cache.advance();

        assert_eq!(cache.retreat(), None);
        assert_eq!(cache.ui_page(), 1);
        assert_eq!(cache.retreat(), None);
        assert!(!cache.is_loading());
        assert!(!cache.has_prev());
    }

    #[test]
    fn failed_fetch_keeps_position() {
        let mut cache = PageCache::with_initial_page(page(1, 8, true, false), 4);
        cache.advance();
        let Some(WorkerMessage::FetchListing { seq, .. }) = cache.advance() else {
            panic!("expected fetch");
        };

        assert!(cache.apply_error(seq, "Failed to fetch characters: Internal Server Error"));

        assert_eq!(cache.server_page(), 1);
        assert_eq!(cache.ui_page(), 2);
        assert_eq!(cache.buffer().len(), 8);
        assert_eq!(
            cache.error(),
            Some("Failed to fetch characters: Internal Server Error")
        );
        assert!(!cache.is_loading());
    }

    #[test]
    fn stale_responses_are_discarded() {
        let mut cache = PageCache::new(4);
        let WorkerMessage::FetchListing { seq: first, .. } = cache.initial_load() else {
            panic!("expected listing fetch");
        };
        let WorkerMessage::FetchSearch { seq: second, .. } = cache.search("rick") else {
            panic!("expected search fetch");
        };

        assert!(!cache.apply_page(first, page(1, 8, true, false)));
        assert!(cache.buffer().is_empty());

        assert!(cache.apply_page(second, page(50, 2, false, false)));
        assert_eq!(ids(cache.buffer()), vec![50, 51]);

        assert!(!cache.apply_page(second, page(1, 8, true, false)));
        assert!(!cache.apply_error(first, "late failure"));
        assert_eq!(cache.error(), None);
    }

    #[test]
    fn search_resets_pages_and_clears_buffer() {
        let mut cache = PageCache::with_initial_page(page(1, 8, true, false), 4);
        cache.advance();

        let request = cache.search("  Morty ");

        assert_eq!(
            request,
            WorkerMessage::FetchSearch {
                seq: 1,
                term: "Morty".to_string(),
                page: 1
            }
        );
        assert_eq!(cache.search_term(), "Morty");
        assert_eq!(cache.ui_page(), 1);
        assert_eq!(cache.server_page(), 1);
        assert!(cache.buffer().is_empty());
    }

    #[test]
    fn blank_search_returns_to_listing() {
        let mut cache = PageCache::new(4);
        cache.search("rick");

        let request = cache.search("   ");

        assert!(matches!(request, WorkerMessage::FetchListing { page: 1, .. }));
        assert!(!cache.is_search());
    }

    #[test]
    fn failed_return_to_listing_leaves_consistent_pages() {
        let mut cache = PageCache::with_initial_page(page(1, 4, true, false), 4);
        for first_id in [5, 9] {
            let Some(WorkerMessage::FetchListing { seq, .. }) = cache.advance() else {
                panic!("expected listing fetch");
            };
            cache.apply_page(seq, page(first_id, 4, true, true));
        }
        assert_eq!(cache.server_page(), 3);

        let WorkerMessage::FetchListing { seq, page: 1 } = cache.search("   ") else {
            panic!("expected listing fetch of page 1");
        };
        assert!(cache.apply_error(seq, "Failed to fetch characters: Bad Gateway"));

        assert!(cache.buffer().is_empty());
        assert_eq!(cache.info(), &PageInfo::default());
        assert_eq!((cache.server_page(), cache.ui_page()), (1, 1));
        assert!(!cache.has_prev());
        assert_eq!(cache.advance(), None);
        assert_eq!(cache.reload(), WorkerMessage::FetchListing { seq: 4, page: 1 });
    }

    #[test]
    fn search_pages_follow_search_term() {
        let mut cache = PageCache::new(4);
        let WorkerMessage::FetchSearch { seq, .. } = cache.search("smith") else {
            panic!("expected search fetch");
        };
        cache.apply_page(seq, page(1, 4, true, false));

        let request = cache.advance();
        assert_eq!(
            request,
            Some(WorkerMessage::FetchSearch {
                seq: 2,
                term: "smith".to_string(),
                page: 2
            })
        );
    }

    #[test]
    fn resize_relocates_without_discarding_buffer() {
        let mut cache = PageCache::with_initial_page(page(1, 8, true, false), 4);
        cache.advance();

        cache.resize(2);

        assert_eq!(cache.ui_page(), 3);
        assert_eq!(cache.buffer().len(), 8);
        assert_eq!(ids(cache.visible()), vec![5, 6]);
    }

    #[test]
    fn reload_keeps_ui_page() {
        let mut cache = PageCache::with_initial_page(page(1, 8, true, false), 4);
        cache.advance();

        let WorkerMessage::FetchListing { seq, page: 1 } = cache.reload() else {
            panic!("expected listing fetch of page 1");
        };
        cache.apply_page(seq, page(1, 8, true, false));

        assert_eq!(cache.ui_page(), 2);
    }

    #[test]
    fn relocation_clamps_to_buffer() {
        assert_eq!(relocate_ui_page(1, 4, 2, 8), 1);
        assert_eq!(relocate_ui_page(2, 4, 2, 8), 3);
        assert_eq!(relocate_ui_page(2, 4, 8, 8), 1);
        assert_eq!(relocate_ui_page(4, 2, 20, 8), 1);
        assert_eq!(relocate_ui_page(5, 20, 2, 8), 4);
        assert_eq!(relocate_ui_page(3, 4, 4, 0), 1);
        assert_eq!(relocate_ui_page(2, 0, 0, 8), 2);
    }

    #[test]
    fn empty_buffer_has_zero_ui_pages() {
        let cache = PageCache::new(4);
        assert_eq!(cache.ui_page_count(), 0);
        assert!(cache.visible().is_empty());
    }
}
