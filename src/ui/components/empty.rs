//! Empty state component renderer.
//!
//! This module renders the empty state message displayed when the list column
//! has no cards, such as a search without matches or an empty favorites list.

use crate::ui::helpers::{char_len, position_cursor, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;

/// Renders the empty state message inside the list column.
///
/// Displays a centered two-line message starting at `row`. The message uses the
/// `empty_state_fg` theme color, and the subtitle uses `text_dim` with dim
/// styling.
///
/// # Layout
///
/// ```text
/// [left padding] MESSAGE
/// [left padding] subtitle
/// ```
pub fn render_empty_state(out: &mut String, row: usize, empty: &EmptyState, theme: &Theme, width: usize) {
    let message = truncate(&empty.message, width);
    let msg_padding = (width.saturating_sub(char_len(&message))) / 2;

    position_cursor(out, row, 1);
    out.push_str(&Theme::fg(&theme.colors.empty_state_fg));
    out.push_str(&" ".repeat(msg_padding));
    out.push_str(&message);
    out.push_str(Theme::reset());

    let subtitle = truncate(&empty.subtitle, width);
    let sub_padding = (width.saturating_sub(char_len(&subtitle))) / 2;

    position_cursor(out, row + 1, 1);
    out.push_str(Theme::dim());
    out.push_str(&Theme::fg(&theme.colors.text_dim));
    out.push_str(&" ".repeat(sub_padding));
    out.push_str(&subtitle);
    out.push_str(Theme::reset());
}
