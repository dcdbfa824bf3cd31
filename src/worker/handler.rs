//! Fetch worker.
//!
//! This module executes [`WorkerMessage`]s against a [`CatalogApi`] off the event
//! loop. Each request runs in its own task, so overlapping fetches may finish out
//! of order; the page cache reconciles them by sequence number.

use crate::api::CatalogApi;
use crate::domain::ActionResult;
use crate::worker::{WorkerMessage, WorkerResponse};
use std::sync::Arc;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tracing::Instrument;

/// Worker that performs catalog calls.
///
/// Cloning is cheap; clones share the same catalog client.
pub struct CatalogWorker<C> {
    api: Arc<C>,
}

impl<C> Clone for CatalogWorker<C> {
    fn clone(&self) -> Self {
        Self {
            api: Arc::clone(&self.api),
        }
    }
}

impl<C: CatalogApi> CatalogWorker<C> {
    pub fn new(api: Arc<C>) -> Self {
        Self { api }
    }

    /// Helper for handling catalog results with consistent logging.
    ///
    /// Standardizes failure logging across all requests in the worker.
    fn handle_api_result<T, F, E>(
        operation: &str,
        result: ActionResult<T>,
        on_success: F,
        on_error: E,
    ) -> WorkerResponse
    where
        F: FnOnce(T) -> WorkerResponse,
        E: FnOnce(String) -> WorkerResponse,
    {
        match result {
            Ok(value) => {
                tracing::debug!(operation = operation, "catalog request successful");
                on_success(value)
            }
            Err(e) => {
                tracing::warn!(
                    operation = operation,
                    status = ?e.status(),
                    error = %e,
                    "catalog request failed"
                );
                on_error(e.to_string())
            }
        }
    }

    /// Processes a worker message and returns the response.
    ///
    /// This is the main message handling entry point, dispatching to the catalog
    /// call matching the message variant inside a tracing span.
    pub async fn handle(&self, message: WorkerMessage) -> WorkerResponse {
        let span = tracing::debug_span!("worker_handle_message",
            kind = message.kind(),
            seq = ?message.seq()
        );

        async move {
            match message {
                WorkerMessage::FetchListing { seq, page } => Self::handle_api_result(
                    "fetch listing",
                    self.api.fetch_page(page).await,
                    |fetched| {
                        tracing::debug!(page, count = fetched.results.len(), "listing page fetched");
                        WorkerResponse::PageLoaded { seq, page_number: page, page: fetched }
                    },
                    |message| WorkerResponse::Error { seq, message },
                ),

                WorkerMessage::FetchSearch { seq, term, page } => Self::handle_api_result(
                    "fetch search",
                    self.api.fetch_search_page(&term, page).await,
                    |fetched| {
                        tracing::debug!(
                            term = %term,
                            page,
                            count = fetched.results.len(),
                            "search page fetched"
                        );
                        WorkerResponse::PageLoaded { seq, page_number: page, page: fetched }
                    },
                    |message| WorkerResponse::Error { seq, message },
                ),

                WorkerMessage::FetchCharacter { id } => Self::handle_api_result(
                    "fetch character",
                    self.api.fetch_character(id).await,
                    |character| {
                        tracing::debug!(character_id = id, found = character.is_some(), "character fetched");
                        WorkerResponse::CharacterLoaded { id, character }
                    },
                    |message| WorkerResponse::CharacterError { id, message },
                ),
            }
        }
        .instrument(span)
        .await
    }
}

impl<C: CatalogApi + 'static> CatalogWorker<C> {
    /// Runs `message` in a spawned task and sends the response on `responses`.
    ///
    /// A closed channel means the event loop is shutting down; the response is
    /// dropped.
    pub fn spawn(&self, message: WorkerMessage, responses: UnboundedSender<WorkerResponse>) -> JoinHandle<()> {
        let worker = self.clone();
        tokio::spawn(async move {
            let response = worker.handle(message).await;
            if responses.send(response).is_err() {
                tracing::debug!("response channel closed, dropping worker response");
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::client::fake::{Call, FakeCatalog};
    use tokio::sync::mpsc;

    fn worker(fake: FakeCatalog) -> (CatalogWorker<FakeCatalog>, Arc<FakeCatalog>) {
        let api = Arc::new(fake);
        (CatalogWorker::new(Arc::clone(&api)), api)
    }

    #[tokio::test]
    async fn listing_page_is_loaded_with_seq() {
        let (worker, api) = worker(FakeCatalog::new(25, 20));

        let response = worker.handle(WorkerMessage::FetchListing { seq: 7, page: 2 }).await;

        match response {
            WorkerResponse::PageLoaded { seq, page_number, page } => {
                assert_eq!(seq, 7);
                assert_eq!(page_number, 2);
                assert_eq!(page.results.len(), 5);
                assert!(page.info.next.is_none());
            }
            other => panic!("unexpected response: {other:?}"),
        }
        assert_eq!(api.calls(), vec![Call::Page(2)]);
    }

    #[tokio::test]
    async fn search_without_matches_is_empty_page() {
        let (worker, _api) = worker(FakeCatalog::new(10, 20));

        let response = worker
            .handle(WorkerMessage::FetchSearch {
                seq: 1,
                term: "nobody".to_string(),
                page: 1,
            })
            .await;

        match response {
            WorkerResponse::PageLoaded { page, .. } => assert!(page.is_empty()),
            other => panic!("unexpected response: {other:?}"),
        }
    }

    #[tokio::test]
    async fn failures_become_error_responses() {
        let (worker, _api) = worker(FakeCatalog::failing("Internal Server Error", 500));

        let response = worker.handle(WorkerMessage::FetchListing { seq: 2, page: 1 }).await;

        assert_eq!(
            response,
            WorkerResponse::Error {
                seq: 2,
                message: "Failed to fetch characters: Internal Server Error".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn unknown_character_loads_as_none() {
        let (worker, _api) = worker(FakeCatalog::new(3, 20));

        let response = worker.handle(WorkerMessage::FetchCharacter { id: 99 }).await;

        assert_eq!(
            response,
            WorkerResponse::CharacterLoaded {
                id: 99,
                character: None
            }
        );
    }

    #[tokio::test]
    async fn spawned_requests_post_to_channel() {
        let (worker, _api) = worker(FakeCatalog::new(3, 20));
        let (tx, mut rx) = mpsc::unbounded_channel();

        worker
            .spawn(WorkerMessage::FetchCharacter { id: 2 }, tx)
            .await
            .unwrap();

        match rx.recv().await {
            Some(WorkerResponse::CharacterLoaded { id, character }) => {
                assert_eq!(id, 2);
                assert_eq!(character.map(|c| c.id), Some(2));
            }
            other => panic!("unexpected response: {other:?}"),
        }
    }
}
