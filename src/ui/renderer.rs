//! Top-level rendering coordinator.
//!
//! This module provides the main rendering entry point, coordinating view model
//! computation and delegation to UI components.
//!
//! # Architecture
//!
//! The renderer follows a two-step process:
//!
//! 1. **View Model Computation**: Transform `AppState` into `UIViewModel`
//! 2. **Component Rendering**: Delegate to specialized component renderers
//!
//! The result is a complete frame string; the caller decides where it goes.

use crate::app::AppState;
use crate::ui::components;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

/// Clears the screen and homes the cursor.
const CLEAR_SCREEN: &str = "\u{1b}[2J\u{1b}[H";

/// Renders the catalog UI into a frame string.
///
/// Computes the view model from application state and delegates to the
/// component renderers.
///
/// # Output
///
/// ANSI-styled text starting with a clear-screen sequence, using absolute cursor
/// positioning for every line.
#[must_use]
pub fn render(state: &AppState, rows: usize, cols: usize) -> String {
    let viewmodel = state.compute_viewmodel(rows, cols);

    render_viewmodel(&viewmodel, &state.theme, rows, cols)
}

/// Renders a pre-computed view model into a frame string.
#[must_use]
pub fn render_viewmodel(vm: &UIViewModel, theme: &Theme, rows: usize, cols: usize) -> String {
    let mut out = String::with_capacity(rows * cols * 2);
    out.push_str(CLEAR_SCREEN);

    components::render_catalog(&mut out, vm, theme, cols, rows);

    out
}
