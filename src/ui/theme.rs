//! Theme management and ANSI escape sequence generation.
//!
//! This module defines the color scheme system for the catalog, supporting both
//! built-in themes (Catppuccin variants) and custom themes loaded from TOML files.
//! It provides utilities for converting hex colors to ANSI escape sequences.
//!
//! # Built-in Themes
//!
//! - `catppuccin-mocha`: Dark theme with warm tones (default)
//! - `catppuccin-latte`: Light theme with soft pastels
//! - `catppuccin-frappe`: Cool dark theme
//! - `catppuccin-macchiato`: Warm dark theme
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! header_fg = "#cdd6f4"
//! selection_fg = "#1e1e2e"
//! selection_bg = "#f5c2e7"
//! text_normal = "#cdd6f4"
//! text_dim = "#6c7086"
//! border = "#45475a"
//! match_highlight_fg = "#1e1e2e"
//! match_highlight_bg = "#f9e2af"
//! empty_state_fg = "#89b4fa"
//! favorite_fg = "#f9e2af"
//! status_alive = "#a6e3a1"
//! status_dead = "#f38ba8"
//! status_unknown = "#6c7086"
//! error_fg = "#f38ba8"
//! ```
//!
//! # Example
//!
//! ```
//! use rickdex::ui::theme::Theme;
//!
//! let theme = Theme::from_name("catppuccin-mocha").unwrap();
//! println!("{}", Theme::fg(&theme.colors.header_fg));
//! println!("{}Bold Text{}", Theme::bold(), Theme::reset());
//! ```

use crate::domain::error::{CatalogError, Result};
use crate::domain::Status;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Name of the theme used when none is configured.
pub const DEFAULT_THEME: &str = "catppuccin-mocha";

/// Color scheme configuration for UI rendering.
///
/// Contains theme metadata and color definitions. Can be loaded from built-in
/// themes or custom TOML files.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Theme {
    /// Human-readable theme name.
    pub name: String,
    /// Color palette for all UI elements.
    pub colors: ThemeColors,
}

/// Color definitions for all UI elements.
///
/// All colors are specified as hex strings (e.g., "#cdd6f4"). Optional fields
/// default to `None`, allowing themes to opt out of certain styling.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ThemeColors {
    /// Header text color.
    pub header_fg: String,
    /// Optional header background color.
    #[serde(default)]
    pub header_bg: Option<String>,

    /// Selected row foreground color.
    pub selection_fg: String,
    /// Selected row background color.
    pub selection_bg: String,

    /// Normal text color.
    pub text_normal: String,
    /// Dimmed text color (footer, secondary info).
    pub text_dim: String,

    /// Border and separator line color.
    pub border: String,

    /// Search match highlight foreground.
    pub match_highlight_fg: String,
    /// Search match highlight background.
    pub match_highlight_bg: String,

    /// Empty state message color.
    pub empty_state_fg: String,

    /// Favorite marker color.
    pub favorite_fg: String,

    /// Status badge colors.
    pub status_alive: String,
    pub status_dead: String,
    pub status_unknown: String,

    /// Error banner color.
    pub error_fg: String,
}

impl ThemeColors {
    /// Badge color for a character status.
    #[must_use]
    pub fn status(&self, status: Status) -> &str {
        match status {
            Status::Alive => &self.status_alive,
            Status::Dead => &self.status_dead,
            Status::Unknown => &self.status_unknown,
        }
    }
}

impl Theme {
    /// Loads a built-in theme by name.
    ///
    /// Supported names: `catppuccin-mocha`, `catppuccin-latte`,
    /// `catppuccin-frappe`, `catppuccin-macchiato`.
    ///
    /// # Returns
    ///
    /// - `Some(Theme)` if the theme name is recognized
    /// - `None` if the theme name is unknown
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "catppuccin-mocha" => include_str!("../../themes/catppuccin-mocha.toml"),
            "catppuccin-latte" => include_str!("../../themes/catppuccin-latte.toml"),
            "catppuccin-frappe" => include_str!("../../themes/catppuccin-frappe.toml"),
            "catppuccin-macchiato" => include_str!("../../themes/catppuccin-macchiato.toml"),
            _ => return None,
        };

        toml::from_str(toml_str).ok()
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Theme`] if:
    /// - The file cannot be read (file not found, permission denied, etc.)
    /// - The TOML content cannot be parsed (invalid syntax, missing fields, type mismatches)
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| CatalogError::Theme(format!("Failed to read theme file: {e}")))?;

        toml::from_str(&contents)
            .map_err(|e| CatalogError::Theme(format!("Failed to parse theme TOML: {e}")))
    }

    /// Converts a hex color to RGB tuple.
    ///
    /// Strips `#` prefix if present, validates length, and parses hex digits.
    /// Returns `(255, 255, 255)` (white) on parse errors.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim_start_matches('#').trim();

        if hex.len() != 6 || !hex.is_ascii() {
            return (255, 255, 255);
        }

        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(255);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(255);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(255);

        (r, g, b)
    }

    /// Generates an ANSI 24-bit foreground color escape sequence.
    ///
    /// Converts a hex color to RGB and formats as `\x1b[38;2;r;g;bm`.
    ///
    /// # Example
    ///
    /// ```
    /// use rickdex::ui::theme::Theme;
    ///
    /// assert_eq!(Theme::fg("#cdd6f4"), "\u{1b}[38;2;205;214;244m");
    /// ```
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// Generates an ANSI 24-bit background color escape sequence.
    ///
    /// Converts a hex color to RGB and formats as `\x1b[48;2;r;g;bm`.
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[48;2;{r};{g};{b}m")
    }

    /// Returns the ANSI bold escape sequence (`\x1b[1m`).
    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    /// Returns the ANSI dim escape sequence (`\x1b[2m`).
    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{001b}[2m"
    }

    /// Returns the ANSI reset escape sequence (`\x1b[0m`).
    ///
    /// Clears all styling (colors, bold, dim, etc.).
    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}

impl Default for Theme {
    /// Returns the default theme (Catppuccin Mocha).
    ///
    /// # Panics
    ///
    /// Panics if the built-in theme fails to parse (should never occur).
    fn default() -> Self {
        Self::from_name(DEFAULT_THEME)
            .expect("Built-in catppuccin-mocha theme should always parse")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn all_builtin_themes_parse() {
        for name in [
            "catppuccin-mocha",
            "catppuccin-latte",
            "catppuccin-frappe",
            "catppuccin-macchiato",
        ] {
            let theme = Theme::from_name(name).unwrap();
            assert_eq!(theme.name, name);
        }
        assert!(Theme::from_name("solarized").is_none());
    }

    #[test]
    fn invalid_hex_falls_back_to_white() {
        assert_eq!(Theme::fg("nope"), "\u{1b}[38;2;255;255;255m");
        assert_eq!(Theme::bg("#000000"), "\u{1b}[48;2;0;0;0m");
    }

    #[test]
    fn loads_theme_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(include_str!("../../themes/catppuccin-latte.toml").as_bytes())
            .unwrap();

        let theme = Theme::from_file(file.path()).unwrap();
        assert_eq!(theme.name, "catppuccin-latte");
        assert_eq!(theme.colors.status(Status::Dead), "#d20f39");
    }

    #[test]
    fn malformed_theme_file_is_a_theme_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"name = ").unwrap();

        assert!(matches!(Theme::from_file(file.path()), Err(CatalogError::Theme(_))));
    }
}
