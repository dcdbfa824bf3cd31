//! Query-style navigation to a single character.
//!
//! The catalog accepts a `?characterId=N` parameter (on the command line or as a
//! typed command) to open the detail view of one character.

use serde::{Deserialize, Serialize};

const CHARACTER_ID_PARAM: &str = "characterId";

/// A parsed navigation target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterRoute {
    pub character_id: u32,
}

impl CharacterRoute {
    /// Parses a query string such as `?characterId=5` or `page=2&characterId=5`.
    ///
    /// Returns `None` when the parameter is absent or not a positive integer.
    ///
    /// # Examples
    ///
    /// ```
    /// use rickdex::domain::CharacterRoute;
    ///
    /// assert_eq!(CharacterRoute::from_query("?characterId=5").map(|r| r.character_id), Some(5));
    /// assert!(CharacterRoute::from_query("?characterId=abc").is_none());
    /// ```
    #[must_use]
    pub fn from_query(query: &str) -> Option<Self> {
        let query = query.trim().trim_start_matches('?');

        query
            .split('&')
            .filter_map(|pair| pair.split_once('='))
            .find(|(key, _)| *key == CHARACTER_ID_PARAM)
            .and_then(|(_, value)| value.trim().parse::<u32>().ok())
            .filter(|id| *id > 0)
            .map(|character_id| Self { character_id })
    }

    /// Renders the route back to its query form.
    #[must_use]
    pub fn to_query(self) -> String {
        format!("?{CHARACTER_ID_PARAM}={}", self.character_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_leading_question_mark() {
        let route = CharacterRoute::from_query("?characterId=42").unwrap();
        assert_eq!(route.character_id, 42);
        assert_eq!(route.to_query(), "?characterId=42");
    }

    #[test]
    fn parses_among_other_params() {
        let route = CharacterRoute::from_query("page=3&characterId=7").unwrap();
        assert_eq!(route.character_id, 7);
    }

    #[test]
    fn rejects_missing_or_invalid_values() {
        assert!(CharacterRoute::from_query("").is_none());
        assert!(CharacterRoute::from_query("?page=2").is_none());
        assert!(CharacterRoute::from_query("?characterId=").is_none());
        assert!(CharacterRoute::from_query("?characterId=-1").is_none());
        assert!(CharacterRoute::from_query("?characterId=0").is_none());
    }
}
