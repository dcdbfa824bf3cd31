//! Footer component renderers.
//!
//! This module renders the bottom of the frame: the pagination line, the error
//! banner and the centered keybinding hints.

use crate::ui::helpers::{char_len, position_cursor, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{FooterInfo, PagerInfo};

/// Renders the footer help bar at the specified row.
///
/// Displays keybinding hints centered horizontally with dimmed styling. If the
/// help text exceeds terminal width, it is truncated to fit.
///
/// # Returns
///
/// The next available row position (row + 1)
pub fn render_footer(out: &mut String, row: usize, footer: &FooterInfo, theme: &Theme, cols: usize) -> usize {
    let help_text = truncate(&footer.keybindings, cols);
    let text_len = char_len(&help_text);
    let padding = (cols.saturating_sub(text_len)) / 2;

    position_cursor(out, row, 1);
    out.push_str(&Theme::fg(&theme.colors.text_dim));
    out.push_str(&" ".repeat(padding));
    out.push_str(&help_text);
    out.push_str(&" ".repeat(cols.saturating_sub(padding + text_len)));
    out.push_str(Theme::reset());
    row + 1
}

/// Formats the pagination line, e.g. `< prev  Page 2/42 (view 1/5, 826 characters)  next >`.
#[must_use]
pub fn format_pager(pager: &PagerInfo) -> String {
    let prev = if pager.has_prev { "< prev" } else { "      " };
    let next = if pager.has_next { "next >" } else { "      " };
    let loading = if pager.loading { "  loading..." } else { "" };

    format!(
        "{prev}  Page {}/{} (view {}/{}, {} characters)  {next}{loading}",
        pager.server_page,
        pager.server_pages.max(1),
        pager.ui_page,
        pager.ui_pages.max(1),
        pager.total_count,
    )
}

/// Renders the pagination line centered in the list column.
///
/// # Returns
///
/// The next available row position (row + 1)
pub fn render_pager(out: &mut String, row: usize, pager: &PagerInfo, theme: &Theme, width: usize) -> usize {
    let text = truncate(&format_pager(pager), width);
    let padding = width.saturating_sub(char_len(&text)) / 2;

    position_cursor(out, row, 1);
    out.push_str(&Theme::fg(&theme.colors.text_normal));
    out.push_str(&" ".repeat(padding));
    out.push_str(&text);
    out.push_str(Theme::reset());
    row + 1
}

/// Renders the error banner, shown verbatim.
///
/// # Returns
///
/// The next available row position (row + 1)
pub fn render_banner(out: &mut String, row: usize, message: &str, theme: &Theme, cols: usize) -> usize {
    position_cursor(out, row, 1);
    out.push_str(Theme::bold());
    out.push_str(&Theme::fg(&theme.colors.error_fg));
    out.push_str(&truncate(&format!(" {message}"), cols));
    out.push_str(Theme::reset());
    row + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pager_shows_available_directions() {
        let pager = PagerInfo {
            server_page: 2,
            server_pages: 42,
            ui_page: 1,
            ui_pages: 5,
            total_count: 826,
            has_prev: true,
            has_next: false,
            loading: true,
        };

        let text = format_pager(&pager);
        assert!(text.starts_with("< prev  Page 2/42 (view 1/5, 826 characters)"));
        assert!(!text.contains("next >"));
        assert!(text.ends_with("loading..."));
    }
}
