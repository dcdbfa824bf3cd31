//! Actions representing side effects to be executed by the runtime.
//!
//! This module defines the [`Action`] type, which represents imperative commands
//! produced by the event handler after processing user input or worker
//! responses. Actions bridge pure state transformations and effectful
//! operations like network requests or shutting down.
//!
//! # Architecture
//!
//! The event handler returns a `Vec<Action>` after processing each event, allowing
//! multiple side effects to be queued atomically. The runtime executes these
//! actions in sequence.
//!
//! # Example
//!
//! ```
//! use rickdex::app::Action;
//! use rickdex::worker::WorkerMessage;
//!
//! let actions = vec![
//!     Action::PostToWorker(WorkerMessage::FetchListing { seq: 1, page: 1 }),
//! ];
//! # assert_eq!(actions.len(), 1);
//! ```

use crate::worker::WorkerMessage;

/// Commands representing side effects to be executed by the runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Posts a request to the fetch worker.
    ///
    /// The response comes back later as [`Event::WorkerResponse`](crate::app::Event::WorkerResponse).
    PostToWorker(WorkerMessage),

    /// Stops the event loop.
    ///
    /// Sent when the user explicitly requests to exit (e.g., typing `q`).
    Quit,
}
