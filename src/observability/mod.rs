//! File-based logging for the catalog.
//!
//! This module provides the tracing infrastructure for the application. The
//! terminal is owned by the rendered frame, so events are formatted by
//! `tracing-subscriber` and written to a rotating log file instead.
//!
//! # Architecture
//!
//! ```text
//! tracing macros → EnvFilter → fmt layer → FileWriter → rickdex.log
//! ```
//!
//! # Features
//!
//! - **File Output**: Logs written to `<data_dir>/rickdex.log`
//! - **Automatic Rotation**: Files rotate at 10MB with 3-backup retention
//! - **Span Context**: Events carry their enclosing spans (`handle_event`, `worker_request`)
//!
//! # Configuration
//!
//! Trace level is controlled via:
//! 1. `RUST_LOG` environment variable (highest priority)
//! 2. `trace_level` config option
//! 3. Default: `"info"`
//!
//! # Usage
//!
//! Initialize tracing early in the application lifecycle:
//!
//! ```rust,no_run
//! use rickdex::observability::init_tracing;
//! use rickdex::Config;
//!
//! let config = Config::default();
//! init_tracing(&config);
//!
//! tracing::debug!("catalog started");
//! ```
//!
//! # Modules
//!
//! - `init`: Tracing initialization and subscriber setup
//! - `file_writer`: Rotating file writer with size-based rotation

mod file_writer;
mod init;

pub use file_writer::FileWriter;
pub use init::{init_tracing, LOG_FILE_NAME};
