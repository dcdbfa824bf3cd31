//! The catalog port.
//!
//! [`CatalogApi`] is the seam between the application and the remote character
//! catalog. The worker only talks to this trait, so tests substitute an in-memory
//! catalog for the HTTP client.

use crate::domain::{ActionResult, Character, CharacterPage};
use std::future::Future;

/// Failure message prefix for listing requests.
pub const FETCH_CHARACTERS_FAILED: &str = "Failed to fetch characters";
/// Failure message prefix for search requests.
pub const SEARCH_CHARACTERS_FAILED: &str = "Failed to search characters";
/// Failure message prefix for single-character requests.
pub const FETCH_CHARACTER_FAILED: &str = "Failed to fetch character";

/// Remote source of character pages.
///
/// Every operation resolves to an [`ActionResult`]; failures carry a message
/// prefixed with the failed operation (see the `*_FAILED` constants) and the
/// upstream status code when one was received.
pub trait CatalogApi: Send + Sync {
    /// Fetches one page of the unfiltered listing.
    ///
    /// Any non-success upstream status is a failure.
    fn fetch_page(&self, page: u32) -> impl Future<Output = ActionResult<CharacterPage>> + Send;

    /// Fetches one page of characters whose name matches `term`.
    ///
    /// An upstream "not found" means no matches and resolves to
    /// `Ok(CharacterPage::empty())`. Other non-success statuses are failures.
    fn fetch_search_page(
        &self,
        term: &str,
        page: u32,
    ) -> impl Future<Output = ActionResult<CharacterPage>> + Send;

    /// Fetches a single character.
    ///
    /// An upstream "not found" resolves to `Ok(None)`.
    fn fetch_character(
        &self,
        id: u32,
    ) -> impl Future<Output = ActionResult<Option<Character>>> + Send;
}

/// How an upstream HTTP status is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusClass {
    Success,
    NotFound,
    Failure,
}

/// Classifies an upstream HTTP status code.
#[must_use]
pub const fn classify_status(status: u16) -> StatusClass {
    match status {
        200..=299 => StatusClass::Success,
        404 => StatusClass::NotFound,
        _ => StatusClass::Failure,
    }
}

/// Classifies an optional status; failures without a status (transport,
/// decode) are plain failures.
#[must_use]
pub fn classify(status: Option<u16>) -> StatusClass {
    status.map_or(StatusClass::Failure, classify_status)
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_statuses() {
        assert_eq!(classify_status(200), StatusClass::Success);
        assert_eq!(classify_status(204), StatusClass::Success);
        assert_eq!(classify_status(404), StatusClass::NotFound);
        assert_eq!(classify_status(500), StatusClass::Failure);
        assert_eq!(classify_status(410), StatusClass::Failure);
    }

    #[test]
    fn missing_status_is_a_failure() {
        assert_eq!(classify(None), StatusClass::Failure);
        assert_eq!(classify(Some(404)), StatusClass::NotFound);
    }
}
