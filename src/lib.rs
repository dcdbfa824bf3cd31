//! rickdex: a terminal catalog of Rick and Morty characters.
//!
//! rickdex browses the public Rick and Morty REST API and provides:
//! - Paginated browsing with a UI page size independent of the server page size
//! - Name search with fuzzy match highlighting
//! - A detail panel reachable through `?characterId=N` routes
//! - Favorites persisted to a JSON slot file
//! - Asynchronous fetching on a tokio worker so the UI never blocks
//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Terminal Front End (main.rs)                       │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling                                   │  ← Business logic
//! │  - Pagination cache                                 │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Storage Layer │   │ Worker Layer  │
//! │ (ui/)         │   │ (storage/)    │   │ (worker/)     │
//! │ - Rendering   │   │ - Slot files  │   │ - Async fetch │
//! │ - Theming     │   │ - Favorites   │   │ - Seq numbers │
//! │ - Components  │   │ - Backend API │   │               │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Catalog Client (api/), Infrastructure & Domain     │
//! │  - HTTP client and CatalogApi port (api/)           │
//! │  - Data paths (infrastructure/)                     │
//! │  - Character model, pages, errors (domain/)         │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │
//! │  - tracing-subscriber fmt layer                     │
//! │  - Rotating log file                                │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`api`]: Remote catalog port and its HTTP implementation
//! - [`app`]: Application state machine with event/action model
//! - [`domain`]: Core domain types (Character, pages, errors)
//! - [`infrastructure`]: Platform-specific utilities (paths)
//! - [`storage`]: Slot persistence and the favorites store
//! - [`worker`]: Background worker for catalog requests
//! - [`ui`]: Terminal rendering with theme support
//! - [`observability`]: File-based tracing
//!
//! # Configuration
//!
//! Configuration is read from an optional TOML file and overridden by command
//! line flags:
//!
//! ```toml
//! api_base_url = "https://rickandmortyapi.com/api"
//! ui_page_size = 8
//! request_timeout_secs = 10
//! favorites_slot = "rick-morty-favorites"
//! theme = "catppuccin-mocha"
//! trace_level = "debug"
//! ```
//!
//! # Initialization Flow
//!
//! 1. **Startup** (`main.rs`):
//!    - Parse configuration file and flags
//!    - Initialize tracing
//!    - Create `AppState` with theme and loaded favorites
//!    - Bootstrap: request the first page and the routed character
//!
//! 2. **Worker Processing**:
//!    - Fetch pages or characters over HTTP
//!    - Send a `WorkerResponse` tagged with the request sequence number
//!
//! 3. **UI Rendering**:
//!    - Apply the response if it answers the latest request
//!    - Compute view model from state
//!    - Render components (header, table, detail, footer)
//!
//! # Examples
//!
//! ```rust
//! use rickdex::storage::MemorySlotStorage;
//! use rickdex::{handle_event, initialize_with_storage, Config, Event};
//!
//! let config = Config::default();
//! let mut state = initialize_with_storage(&config, Box::new(MemorySlotStorage::default()));
//!
//! let actions = state.bootstrap(None);
//! assert_eq!(actions.len(), 1); // first page request
//!
//! let (render, actions) = handle_event(&mut state, &Event::Search("rick".into()))?;
//! assert!(render);
//! assert_eq!(actions.len(), 1);
//! # Ok::<(), rickdex::CatalogError>(())
//! ```

#![allow(clippy::multiple_crate_versions)]

pub mod api;
pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod storage;
pub mod ui;
pub mod worker;

pub use app::{handle_event, Action, AppState, Event, ViewMode};
pub use domain::{CatalogError, Character, CharacterRoute, Result};
pub use ui::Theme;

use app::PageCache;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Duration;
use storage::{FavoritesStore, JsonSlotStorage, SlotStorage};

/// Default number of characters per UI page.
pub const DEFAULT_UI_PAGE_SIZE: usize = 8;

/// Default per-request timeout in seconds.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

/// Application configuration.
///
/// Built from a string map (a TOML file and command line overrides merged by
/// the caller), then checked with [`Config::validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base URL of the catalog API. Default: [`api::DEFAULT_API_BASE_URL`]
    pub api_base_url: String,

    /// Characters per UI page. Must be at least 1. Default: 8
    pub ui_page_size: usize,

    /// Per-request timeout in seconds. Must be at least 1. Default: 10
    pub request_timeout_secs: u64,

    /// Directory for the favorites slot and the log file.
    ///
    /// Default: [`infrastructure::get_data_dir`]. A leading `~` is expanded.
    pub data_dir: PathBuf,

    /// Storage slot holding the favorites. Default: `"rick-morty-favorites"`
    pub favorites_slot: String,

    /// Built-in theme name to use.
    ///
    /// Options: `catppuccin-mocha`, `catppuccin-latte`, `catppuccin-frappe`,
    /// `catppuccin-macchiato`. Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file.
    ///
    /// Takes precedence over `theme_name`. See [`ui::theme`] for format.
    pub theme_file: Option<String>,

    /// Tracing level.
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`. Default: `"info"`
    pub trace_level: Option<String>,

    /// Character opened in the detail panel at startup.
    pub character_id: Option<u32>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: api::DEFAULT_API_BASE_URL.to_string(),
            ui_page_size: DEFAULT_UI_PAGE_SIZE,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            data_dir: infrastructure::get_data_dir(),
            favorites_slot: storage::DEFAULT_FAVORITES_SLOT.to_string(),
            theme_name: None,
            theme_file: None,
            trace_level: None,
            character_id: None,
        }
    }
}

impl Config {
    /// Parses configuration from a string map.
    ///
    /// Missing keys keep their defaults; unknown keys are ignored with a debug
    /// log.
    ///
    /// # Parsing Rules
    ///
    /// - `ui_page_size`: String → `usize`
    /// - `request_timeout_secs`: String → `u64`
    /// - `character_id`: String → `u32`; a `?characterId=N` route is accepted too
    /// - `data_dir`, `theme_file`: tilde-expanded paths
    /// - `api_base_url`, `favorites_slot`, `theme`, `trace_level`: taken verbatim
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Config`] if a numeric value does not parse.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use rickdex::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("ui_page_size".to_string(), "4".to_string());
    /// map.insert("theme".to_string(), "catppuccin-latte".to_string());
    ///
    /// let config = Config::from_map(&map)?;
    /// assert_eq!(config.ui_page_size, 4);
    /// assert_eq!(config.theme_name.as_deref(), Some("catppuccin-latte"));
    /// # Ok::<(), rickdex::CatalogError>(())
    /// ```
    pub fn from_map(map: &BTreeMap<String, String>) -> Result<Self> {
        let mut config = Self::default();

        for (key, value) in map {
            let value = value.trim();
            match key.as_str() {
                "api_base_url" => config.api_base_url = value.to_string(),
                "ui_page_size" => config.ui_page_size = parse_number(key, value)?,
                "request_timeout_secs" => config.request_timeout_secs = parse_number(key, value)?,
                "data_dir" => config.data_dir = PathBuf::from(infrastructure::expand_tilde(value)),
                "favorites_slot" => config.favorites_slot = value.to_string(),
                "theme" => config.theme_name = Some(value.to_string()),
                "theme_file" => config.theme_file = Some(infrastructure::expand_tilde(value)),
                "trace_level" => config.trace_level = Some(value.to_string()),
                "character_id" => config.character_id = Some(parse_character_id(value)?),
                _ => tracing::debug!(key = %key, "ignoring unknown config key"),
            }
        }

        Ok(config)
    }

    /// Reads a TOML configuration file into a string map.
    ///
    /// Scalar values are converted to their string form so file values and
    /// command line overrides can be merged before [`Config::from_map`].
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Config`] if the file cannot be read, is not
    /// valid TOML, or contains tables or arrays.
    pub fn read_map<P: AsRef<Path>>(path: P) -> Result<BTreeMap<String, String>> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .map_err(|e| CatalogError::Config(format!("Failed to read config file {}: {e}", path.display())))?;

        let table: toml::Table = toml::from_str(&contents)
            .map_err(|e| CatalogError::Config(format!("Failed to parse config TOML: {e}")))?;

        table
            .into_iter()
            .map(|(key, value)| {
                let value = match value {
                    toml::Value::String(s) => s,
                    toml::Value::Integer(i) => i.to_string(),
                    toml::Value::Boolean(b) => b.to_string(),
                    toml::Value::Float(f) => f.to_string(),
                    other => {
                        return Err(CatalogError::Config(format!(
                            "config key {key:?} must be a scalar, found {}",
                            other.type_str()
                        )))
                    }
                };
                Ok((key, value))
            })
            .collect()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Config`] if the file cannot be read or parsed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::from_map(&Self::read_map(path)?)
    }

    /// Checks values that parse but cannot work.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Config`] for a zero page size or timeout, an
    /// unparsable base URL, an empty favorites slot name or a zero character id.
    pub fn validate(&self) -> Result<()> {
        if self.ui_page_size == 0 {
            return Err(CatalogError::Config("ui_page_size must be at least 1".into()));
        }
        if self.request_timeout_secs == 0 {
            return Err(CatalogError::Config("request_timeout_secs must be at least 1".into()));
        }
        reqwest::Url::parse(&self.api_base_url)
            .map_err(|e| CatalogError::Config(format!("invalid api_base_url {:?}: {e}", self.api_base_url)))?;
        if self.favorites_slot.trim().is_empty() {
            return Err(CatalogError::Config("favorites_slot must not be empty".into()));
        }
        if self.character_id == Some(0) {
            return Err(CatalogError::Config("character_id must be positive".into()));
        }
        Ok(())
    }

    /// Per-request timeout for the catalog client.
    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Route opened at startup, if a character id is configured.
    #[must_use]
    pub fn initial_route(&self) -> Option<CharacterRoute> {
        self.character_id
            .filter(|id| *id > 0)
            .map(|character_id| CharacterRoute { character_id })
    }

    /// Resolves the configured theme, falling back to the default one.
    #[must_use]
    pub fn theme(&self) -> Theme {
        self.theme_file.as_ref().map_or_else(
            || {
                self.theme_name.as_ref().map_or_else(Theme::default, |theme_name| {
                    Theme::from_name(theme_name).unwrap_or_else(|| {
                        tracing::debug!(theme_name = %theme_name, "failed to load theme, using default");
                        Theme::default()
                    })
                })
            },
            |theme_file| {
                Theme::from_file(theme_file).unwrap_or_else(|e| {
                    tracing::debug!(theme_file = %theme_file, error = %e, "failed to load theme from file, using default");
                    Theme::default()
                })
            },
        )
    }
}

fn parse_number<T: std::str::FromStr>(key: &str, value: &str) -> Result<T>
where
    T::Err: std::fmt::Display,
{
    value
        .parse()
        .map_err(|e| CatalogError::Config(format!("invalid {key} {value:?}: {e}")))
}

fn parse_character_id(value: &str) -> Result<u32> {
    if let Some(route) = CharacterRoute::from_query(value) {
        return Ok(route.character_id);
    }
    parse_number("character_id", value)
}

/// Initializes the application with configuration.
///
/// Creates a new `AppState` with:
/// - Loaded theme (from file, name, or default)
/// - Favorites loaded from `<data_dir>/<favorites_slot>.json`
/// - Empty page cache (populated after [`AppState::bootstrap`])
///
/// # Errors
///
/// Returns an error if the data directory cannot be created.
pub fn initialize(config: &Config) -> Result<AppState> {
    let storage = JsonSlotStorage::new(config.data_dir.clone())?;
    Ok(initialize_with_storage(config, Box::new(storage)))
}

/// Initializes the application on top of an arbitrary slot storage.
#[must_use]
pub fn initialize_with_storage(config: &Config, storage: Box<dyn SlotStorage>) -> AppState {
    tracing::debug!(
        ui_page_size = config.ui_page_size,
        favorites_slot = %config.favorites_slot,
        "initializing rickdex"
    );

    let mut favorites = FavoritesStore::new(storage, config.favorites_slot.clone());
    let loaded = favorites.load();
    tracing::debug!(favorites = loaded, "favorites loaded");

    AppState::new(PageCache::new(config.ui_page_size), favorites, config.theme())
}
