//! Worker message types.
//!
//! This module defines the request and response protocol between the event loop
//! and the fetch worker. Page requests carry the sequence number issued by the
//! page cache so that responses can be matched to the latest request.

use crate::domain::{Character, CharacterPage};
use serde::{Deserialize, Serialize};

/// Messages sent from the event loop to the worker.
///
/// Each variant corresponds to one call into the remote catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkerMessage {
    /// Fetch one page of the unfiltered listing.
    FetchListing {
        /// Sequence number of the request.
        seq: u64,

        /// Server page to fetch (1-based).
        page: u32,
    },

    /// Fetch one page of a name search.
    FetchSearch {
        /// Sequence number of the request.
        seq: u64,

        /// Trimmed, non-empty search term.
        term: String,

        /// Server page to fetch (1-based).
        page: u32,
    },

    /// Fetch a single character for the detail view.
    FetchCharacter {
        /// Character id.
        id: u32,
    },
}

impl WorkerMessage {
    /// Sequence number of a page request, `None` for character requests.
    #[must_use]
    pub const fn seq(&self) -> Option<u64> {
        match self {
            Self::FetchListing { seq, .. } | Self::FetchSearch { seq, .. } => Some(*seq),
            Self::FetchCharacter { .. } => None,
        }
    }

    /// Short label used in logs.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::FetchListing { .. } => "fetch_listing",
            Self::FetchSearch { .. } => "fetch_search",
            Self::FetchCharacter { .. } => "fetch_character",
        }
    }
}

/// Responses sent from the worker back to the event loop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkerResponse {
    /// A listing or search page was fetched.
    PageLoaded {
        /// Sequence number of the originating request.
        seq: u64,

        /// Server page that was fetched.
        page_number: u32,

        /// The fetched page (empty for a search without matches).
        page: CharacterPage,
    },

    /// A single character lookup completed.
    CharacterLoaded {
        /// Requested character id.
        id: u32,

        /// The character, or `None` if the catalog does not know it.
        character: Option<Character>,
    },

    /// A page request failed.
    Error {
        /// Sequence number of the originating request.
        seq: u64,

        /// Human-readable error message.
        message: String,
    },

    /// A character lookup failed for a reason other than "not found".
    CharacterError {
        /// Requested character id.
        id: u32,

        /// Human-readable error message.
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_requests_expose_seq() {
        assert_eq!(WorkerMessage::FetchListing { seq: 3, page: 1 }.seq(), Some(3));
        assert_eq!(
            WorkerMessage::FetchSearch {
                seq: 4,
                term: "rick".to_string(),
                page: 2
            }
            .seq(),
            Some(4)
        );
        assert_eq!(WorkerMessage::FetchCharacter { id: 1 }.seq(), None);
    }

    #[test]
    fn messages_serialize_for_logging() {
        let json = serde_json::to_string(&WorkerMessage::FetchListing { seq: 1, page: 2 }).unwrap();
        assert_eq!(json, r#"{"FetchListing":{"seq":1,"page":2}}"#);
    }
}
