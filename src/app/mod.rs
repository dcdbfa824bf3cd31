//! Application layer coordinating state, events, and actions.
//!
//! This module defines the core application logic layer, sitting between the
//! terminal front end (main.rs) and the domain/storage/worker layers. It
//! implements the event-driven architecture that drives the catalog.
//!
//! # Architecture
//!
//! The application layer follows a unidirectional data flow pattern:
//!
//! ```text
//! User Input → Events → Event Handler → State Mutations → Actions → Side Effects
//!                           ↑                                  ↓
//!                           └──────── Worker Responses ────────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing logic and state transition coordinator
//! - [`modes`]: View mode and selection state types
//! - [`pagination`]: Buffered server pages re-sliced into UI sub-pages
//! - [`state`]: Central application state container and view model computation

pub mod actions;
pub mod handler;
pub mod modes;
pub mod pagination;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use modes::{Selection, ViewMode};
pub use pagination::{relocate_ui_page, Landing, PageCache};
pub use state::AppState;
