//! Background fetch worker.
//!
//! This module implements the worker that performs all remote catalog calls so
//! the event loop never blocks on the network. Responses come back as typed
//! messages over a channel.
//!
//! # Architecture
//!
//! - `messages`: Request/response protocol types
//! - `handler`: Worker implementation and message processing logic

pub mod handler;
pub mod messages;

pub use handler::CatalogWorker;
pub use messages::{WorkerMessage, WorkerResponse};
