//! Paginated responses from the remote catalog.

use super::character::Character;
use serde::{Deserialize, Serialize};

/// Pagination metadata for one query, recomputed on every fetch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageInfo {
    /// Total number of characters matching the query.
    pub count: u32,
    /// Total number of server pages for the query.
    pub pages: u32,
    /// Locator of the next server page, if any.
    pub next: Option<String>,
    /// Locator of the previous server page, if any.
    pub prev: Option<String>,
}

/// One server page of characters plus its metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterPage {
    pub info: PageInfo,
    pub results: Vec<Character>,
}

impl CharacterPage {
    /// The page returned for a search without matches.
    ///
    /// `count=0, pages=0, next=None, prev=None, results=[]`.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns `true` if the page holds no characters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_page_has_no_cursors() {
        let page = CharacterPage::empty();
        assert_eq!(page.info.count, 0);
        assert_eq!(page.info.pages, 0);
        assert!(page.info.next.is_none());
        assert!(page.info.prev.is_none());
        assert!(page.is_empty());
    }

    #[test]
    fn parses_null_cursors() {
        let json = r#"{"info":{"count":826,"pages":42,"next":"https://rickandmortyapi.com/api/character?page=2","prev":null},"results":[]}"#;
        let page: CharacterPage = serde_json::from_str(json).unwrap();
        assert_eq!(page.info.pages, 42);
        assert!(page.info.next.is_some());
        assert!(page.info.prev.is_none());
    }
}
