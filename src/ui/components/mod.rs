//! Composable UI component renderers.
//!
//! This module provides specialized rendering components for different UI
//! elements, following a component-based architecture. Each component is
//! responsible for rendering a specific part of the frame.
//!
//! # Components
//!
//! - [`header`]: Title bar
//! - [`table`]: Character list with columns (NAME, STATUS, SPECIES)
//! - [`detail`]: Selected character panel
//! - [`footer`]: Pagination line, error banner and keybinding hints
//! - [`empty`]: Empty state message for no cards

mod detail;
mod empty;
mod footer;
mod header;
mod table;

pub use detail::NOT_FOUND_MESSAGE;
pub use footer::format_pager;
pub use table::name_width;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

use detail::render_detail;
use empty::render_empty_state;
use footer::{render_banner, render_footer, render_pager};
use header::render_header;
use table::{render_table_headers, render_table_rows};

/// Rows used by everything except the card list.
///
/// Blank line, header, border and table headers on top; pager, banner, border
/// and footer at the bottom; one spare row below the footer.
pub const CHROME_ROWS: usize = 9;

/// First row of the card list.
const LIST_START_ROW: usize = 5;

/// Terminals narrower than this get no detail column.
const MIN_SPLIT_COLS: usize = 60;

/// Renders a horizontal border line at the specified row.
///
/// Used to separate UI sections (header/table, table/footer).
///
/// # Returns
///
/// The next available row position (row + 1)
fn render_border(out: &mut String, row: usize, color: &str, cols: usize) -> usize {
    position_cursor(out, row, 1);
    out.push_str(&Theme::fg(color));
    out.push_str(&"─".repeat(cols));
    out.push_str(Theme::reset());
    row + 1
}

/// Splits the terminal width into the list column and the detail column.
///
/// Returns `(list_width, detail_col, detail_width)`; `detail_width` is zero when
/// the terminal is too narrow for two columns.
#[must_use]
pub const fn split_columns(cols: usize) -> (usize, usize, usize) {
    if cols < MIN_SPLIT_COLS {
        return (cols, cols + 1, 0);
    }
    let list_width = cols * 3 / 5;
    (list_width, list_width + 3, cols.saturating_sub(list_width + 3))
}

/// Renders the full catalog layout.
///
/// Layout structure:
/// ```text
/// [blank line]
/// [Header]
/// [Border]
/// [Table Headers]                     [Detail panel]
/// [Cards or empty state]              [...         ]
/// [Pager]
/// [Error banner]
/// [Border]
/// [Footer]
/// ```
pub fn render_catalog(out: &mut String, vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let (list_width, detail_col, detail_width) = split_columns(cols);

    let mut current_row = 2;
    current_row = render_header(out, current_row, &vm.header, theme, cols);
    current_row = render_border(out, current_row, &theme.colors.border, cols);
    current_row = render_table_headers(out, current_row, theme, list_width);

    if let Some(empty) = &vm.empty_state {
        render_empty_state(out, current_row + 1, empty, theme, list_width);
    } else {
        render_table_rows(out, current_row, &vm.cards, theme, list_width);
    }

    if detail_width > 0 {
        render_detail(out, LIST_START_ROW - 1, detail_col, &vm.detail, theme, detail_width);
    }

    let footer_row = rows.saturating_sub(1).max(LIST_START_ROW + 3);
    let border_row = footer_row - 1;
    let banner_row = border_row - 1;
    let pager_row = banner_row - 1;

    if let Some(pager) = &vm.pager {
        render_pager(out, pager_row, pager, theme, list_width);
    }
    if let Some(message) = &vm.banner {
        render_banner(out, banner_row, message, theme, cols);
    }
    render_border(out, border_row, &theme.colors.border, cols);
    render_footer(out, footer_row, &vm.footer, theme, cols);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wide_terminals_get_a_detail_column() {
        let (list, col, width) = split_columns(100);
        assert_eq!(list, 60);
        assert_eq!(col, 63);
        assert_eq!(width, 37);
    }

    #[test]
    fn narrow_terminals_hide_the_detail_column() {
        assert_eq!(split_columns(40).2, 0);
    }
}
