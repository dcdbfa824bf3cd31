//! Shared rendering utilities and helpers.
//!
//! This module provides low-level rendering utilities used across multiple UI
//! components. All output is appended to the frame buffer; nothing here writes
//! to the terminal directly.
//!
//! # Features
//!
//! - **Cursor Positioning**: Absolute placement inside the frame
//! - **Match Highlighting**: Renders text with highlighted character ranges
//! - **UTF-8 Safe**: Operates on character indices, not byte indices
//!
//! # Example
//!
//! ```
//! use rickdex::ui::helpers::render_highlighted_text;
//! use rickdex::ui::Theme;
//!
//! let theme = Theme::default();
//! let mut out = String::new();
//! render_highlighted_text(&mut out, "Rick Sanchez", &[(0, 4)], &theme, false);
//! assert!(out.contains("Rick"));
//! ```

use crate::ui::theme::Theme;
use std::fmt::Write;

/// Positions the cursor at a specific row and column.
///
/// Appends the ANSI escape sequence `\u{1b}[{row};{col}H`. Coordinates are
/// 1-indexed (row 1 = first row, col 1 = first column).
pub fn position_cursor(out: &mut String, row: usize, col: usize) {
    let _ = write!(out, "\u{1b}[{row};{col}H");
}

/// Number of characters in `text`.
#[must_use]
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Truncates `text` to at most `width` characters, ending with `...` when cut.
#[must_use]
pub fn truncate(text: &str, width: usize) -> String {
    if char_len(text) <= width {
        return text.to_string();
    }
    if width <= 3 {
        return text.chars().take(width).collect();
    }
    let kept: String = text.chars().take(width - 3).collect();
    format!("{kept}...")
}

/// Appends `text` left-aligned in a field of `width` characters.
pub fn write_padded(out: &mut String, text: &str, width: usize) {
    let text = truncate(text, width);
    let len = char_len(&text);
    out.push_str(&text);
    out.push_str(&" ".repeat(width.saturating_sub(len)));
}

/// Renders text with highlighted character ranges for search matches.
///
/// Splits the text into highlighted and normal sections based on the provided
/// character ranges. Highlighting is skipped for the selected item so it does
/// not fight the selection background.
///
/// Ranges use UTF-8 character indices `(start, end)` with exclusive end and are
/// clamped to the text.
pub fn render_highlighted_text(
    out: &mut String,
    text: &str,
    ranges: &[(usize, usize)],
    theme: &Theme,
    is_selected: bool,
) {
    if ranges.is_empty() || is_selected {
        out.push_str(text);
        return;
    }

    let chars: Vec<char> = text.chars().collect();
    let mut current_pos = 0;

    for &(start, end) in ranges {
        let start = start.min(chars.len()).max(current_pos);
        let end = end.min(chars.len());
        if start >= end {
            continue;
        }

        out.extend(&chars[current_pos..start]);

        out.push_str(&Theme::fg(&theme.colors.match_highlight_fg));
        out.push_str(&Theme::bg(&theme.colors.match_highlight_bg));
        out.extend(&chars[start..end]);
        out.push_str(Theme::reset());
        out.push_str(&Theme::fg(&theme.colors.text_normal));

        current_pos = end;
    }

    if current_pos < chars.len() {
        out.extend(&chars[current_pos..]);
    }
}
