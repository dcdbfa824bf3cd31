//! User interface rendering layer with component-based architecture.
//!
//! This module orchestrates the terminal UI, transforming view models into
//! ANSI-styled frames through composable rendering components. It provides theme
//! support, a two-column layout and search match highlighting.
//!
//! # Architecture
//!
//! The UI layer follows a declarative rendering model:
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel → render → frame String
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: View model types representing renderable UI state
//! - [`renderer`]: Top-level rendering coordinator
//! - [`components`]: Composable UI component renderers
//! - [`helpers`]: Shared rendering utilities (highlighting, truncation)
//! - [`theme`]: Color scheme definitions and ANSI escape sequence generation

pub mod components;
pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use components::CHROME_ROWS;
pub use renderer::render;
pub use theme::Theme;
pub use viewmodel::{
    CardItem, CharacterDetail, DetailPanel, EmptyState, FooterInfo, HeaderInfo, PagerInfo,
    UIViewModel,
};
