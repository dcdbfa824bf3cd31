//! Infrastructure layer for filesystem and environment interactions.
//!
//! This module resolves where application data lives on the host and expands
//! user-supplied paths from configuration.

pub mod paths;

pub use paths::{expand_tilde, get_data_dir};
