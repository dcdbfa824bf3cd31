//! HTTP implementation of the catalog port.
//!
//! [`HttpCatalogClient`] talks to the Rick and Morty REST API:
//!
//! - `GET {base}/character?page=N`
//! - `GET {base}/character?name=TERM&page=N`
//! - `GET {base}/character/{id}`
//!
//! Non-success statuses become [`CatalogError::Http`] with the structured status
//! code, and the "not found" decision is made on that code alone.

use crate::api::client::{
    classify, CatalogApi, StatusClass, FETCH_CHARACTERS_FAILED, FETCH_CHARACTER_FAILED,
    SEARCH_CHARACTERS_FAILED,
};
use crate::domain::error::{CatalogError, Result};
use crate::domain::{ActionError, ActionResult, Character, CharacterPage};
use reqwest::Url;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Public endpoint used when no base URL is configured.
pub const DEFAULT_API_BASE_URL: &str = "https://rickandmortyapi.com/api";

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Catalog client over HTTP.
#[derive(Debug, Clone)]
pub struct HttpCatalogClient {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpCatalogClient {
    /// Builds a client for `base_url` with a per-request `timeout`.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Config`] if the base URL does not parse, or
    /// [`CatalogError::Transport`] if the HTTP client cannot be built.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let base_url = Url::parse(base_url.trim_end_matches('/'))
            .map_err(|e| CatalogError::Config(format!("invalid api_base_url {base_url:?}: {e}")))?;

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| CatalogError::Transport(e.to_string()))?;

        tracing::debug!(base_url = %base_url, ?timeout, "catalog client ready");
        Ok(Self { client, base_url })
    }

    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// URL of one listing page.
    ///
    /// # Errors
    ///
    /// Returns an error if the resulting URL is invalid.
    pub fn listing_url(&self, page: u32) -> Result<Url> {
        self.endpoint("character", &[("page", page.to_string())])
    }

    /// URL of one search page.
    ///
    /// # Errors
    ///
    /// Returns an error if the resulting URL is invalid.
    pub fn search_url(&self, term: &str, page: u32) -> Result<Url> {
        self.endpoint(
            "character",
            &[("name", term.to_string()), ("page", page.to_string())],
        )
    }

    /// URL of a single character.
    ///
    /// # Errors
    ///
    /// Returns an error if the resulting URL is invalid.
    pub fn character_url(&self, id: u32) -> Result<Url> {
        self.endpoint(&format!("character/{id}"), &[])
    }

    fn endpoint(&self, path: &str, params: &[(&str, String)]) -> Result<Url> {
        let raw = format!("{}/{path}", self.base_url.as_str().trim_end_matches('/'));
        let parsed = if params.is_empty() {
            Url::parse(&raw)
        } else {
            Url::parse_with_params(&raw, params)
        };
        parsed.map_err(|e| CatalogError::Config(format!("invalid endpoint {raw:?}: {e}")))
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        tracing::debug!(url = %url, "GET");
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            tracing::debug!(status = status.as_u16(), "upstream returned non-success status");
            return Err(CatalogError::Http {
                status: status.as_u16(),
                message: status
                    .canonical_reason()
                    .unwrap_or("Unexpected status")
                    .to_string(),
            });
        }

        Ok(response.json::<T>().await?)
    }
}

impl CatalogApi for HttpCatalogClient {
    async fn fetch_page(&self, page: u32) -> ActionResult<CharacterPage> {
        let result = match self.listing_url(page) {
            Ok(url) => self.get_json(url).await.map_err(ActionError::from),
            Err(e) => Err(ActionError::from(e)),
        };
        result.map_err(|e| e.context(FETCH_CHARACTERS_FAILED))
    }

    async fn fetch_search_page(&self, term: &str, page: u32) -> ActionResult<CharacterPage> {
        let result = match self.search_url(term, page) {
            Ok(url) => self.get_json(url).await.map_err(ActionError::from),
            Err(e) => Err(ActionError::from(e)),
        };

        let outcome = search_outcome(result);
        if outcome.as_ref().is_ok_and(CharacterPage::is_empty) {
            tracing::debug!(term = %term, page, "search has no matches");
        }
        outcome
    }

    async fn fetch_character(&self, id: u32) -> ActionResult<Option<Character>> {
        let result = match self.character_url(id) {
            Ok(url) => self.get_json(url).await.map_err(ActionError::from),
            Err(e) => Err(ActionError::from(e)),
        };

        let outcome = character_outcome(result);
        if matches!(outcome, Ok(None)) {
            tracing::debug!(character_id = id, "character not found");
        }
        outcome
    }
}

/// Maps a raw search response: an upstream 404 means "no matches".
fn search_outcome(result: ActionResult<CharacterPage>) -> ActionResult<CharacterPage> {
    match result {
        Err(e) if classify(e.status()) == StatusClass::NotFound => Ok(CharacterPage::empty()),
        other => other.map_err(|e| e.context(SEARCH_CHARACTERS_FAILED)),
    }
}

/// Maps a raw character response: an upstream 404 means "not found".
fn character_outcome(result: ActionResult<Character>) -> ActionResult<Option<Character>> {
    match result {
        Ok(character) => Ok(Some(character)),
        Err(e) if classify(e.status()) == StatusClass::NotFound => Ok(None),
        Err(e) => Err(e.context(FETCH_CHARACTER_FAILED)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> HttpCatalogClient {
        HttpCatalogClient::new("https://rickandmortyapi.com/api/", Duration::from_secs(5)).unwrap()
    }

    #[test]
    fn builds_listing_url() {
        let url = client().listing_url(3).unwrap();
        assert_eq!(url.as_str(), "https://rickandmortyapi.com/api/character?page=3");
    }

    #[test]
    fn builds_search_url_with_encoded_term() {
        let url = client().search_url("rick sanchez", 1).unwrap();
        assert_eq!(
            url.as_str(),
            "https://rickandmortyapi.com/api/character?name=rick+sanchez&page=1"
        );
    }

    #[test]
    fn builds_character_url() {
        let url = client().character_url(42).unwrap();
        assert_eq!(url.as_str(), "https://rickandmortyapi.com/api/character/42");
    }

    fn upstream(status: u16, message: &str) -> ActionError {
        ActionError::from(CatalogError::Http {
            status,
            message: message.to_string(),
        })
    }

    #[test]
    fn search_not_found_is_an_empty_page() {
        let outcome = search_outcome(Err(upstream(404, "Not Found")));
        assert_eq!(outcome, Ok(CharacterPage::empty()));
    }

    #[test]
    fn search_not_found_is_decided_by_status_not_text() {
        let outcome = search_outcome(Err(upstream(404, "There is nothing here")));
        assert_eq!(outcome, Ok(CharacterPage::empty()));

        let err = search_outcome(Err(upstream(500, "Not Found"))).unwrap_err();
        assert_eq!(err.status(), Some(500));
        assert_eq!(err.message(), "Failed to search characters: Not Found");
    }

    #[test]
    fn search_transport_failure_is_an_error() {
        let err = search_outcome(Err(ActionError::from(CatalogError::Transport(
            "connection refused".to_string(),
        ))))
        .unwrap_err();
        assert_eq!(err.status(), None);
        assert!(err.message().starts_with(SEARCH_CHARACTERS_FAILED));
    }

    #[test]
    fn character_not_found_is_none() {
        assert_eq!(character_outcome(Err(upstream(404, "Not Found"))), Ok(None));
        assert_eq!(character_outcome(Err(upstream(404, "gone"))), Ok(None));
    }

    #[test]
    fn character_failures_keep_status() {
        let err = character_outcome(Err(upstream(503, "Service Unavailable"))).unwrap_err();
        assert_eq!(err.status(), Some(503));
        assert_eq!(err.message(), "Failed to fetch character: Service Unavailable");

        let err = character_outcome(Err(ActionError::from(CatalogError::Decode(
            "missing field `id`".to_string(),
        ))))
        .unwrap_err();
        assert_eq!(err.status(), None);
        assert!(err.message().starts_with(FETCH_CHARACTER_FAILED));
    }

    #[test]
    fn rejects_invalid_base_url() {
        let err = HttpCatalogClient::new("not a url", Duration::from_secs(1)).unwrap_err();
        assert!(matches!(err, CatalogError::Config(_)));
    }
}
