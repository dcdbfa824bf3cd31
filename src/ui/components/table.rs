//! Character list component renderer.
//!
//! This module renders the visible characters as a table with NAME, STATUS and
//! SPECIES columns. It supports selection highlighting, favorite markers and
//! search match highlighting.

use crate::ui::helpers::{self, position_cursor, write_padded};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::CardItem;

/// Width of the selection and favorite markers (`> * `).
const MARKER_WIDTH: usize = 4;
/// Width of the STATUS column.
const STATUS_WIDTH: usize = 9;
/// Width of the SPECIES column.
const SPECIES_WIDTH: usize = 14;

/// Width left for names in a list column of `width` characters.
#[must_use]
pub const fn name_width(width: usize) -> usize {
    width.saturating_sub(MARKER_WIDTH + STATUS_WIDTH + SPECIES_WIDTH)
}

/// Renders the table column headers at the specified row.
///
/// # Returns
///
/// The next available row position (row + 1)
pub fn render_table_headers(out: &mut String, row: usize, theme: &Theme, width: usize) -> usize {
    position_cursor(out, row, 1);
    out.push_str(Theme::bold());
    out.push_str(&Theme::fg(&theme.colors.header_fg));
    out.push_str(&" ".repeat(MARKER_WIDTH));
    write_padded(out, "NAME", name_width(width));
    write_padded(out, "STATUS", STATUS_WIDTH);
    write_padded(out, "SPECIES", SPECIES_WIDTH);
    out.push_str(Theme::reset());
    row + 1
}

/// Renders all cards starting at the specified row.
///
/// # Returns
///
/// The next available row position (row + number of cards)
pub fn render_table_rows(out: &mut String, row: usize, cards: &[CardItem], theme: &Theme, width: usize) -> usize {
    let mut current_row = row;
    for card in cards {
        current_row = render_table_row(out, current_row, card, theme, width);
    }
    current_row
}

/// Renders a single card at the specified row position.
///
/// # Styling Precedence
///
/// 1. Selection background (if `is_selected`)
/// 2. Search match highlights (unless selected)
/// 3. Normal text color
///
/// The row is padded to the full column width so the selection background is
/// drawn consistently.
fn render_table_row(out: &mut String, row: usize, card: &CardItem, theme: &Theme, width: usize) -> usize {
    position_cursor(out, row, 1);

    let base_colors = if card.is_selected {
        format!(
            "{}{}",
            Theme::fg(&theme.colors.selection_fg),
            Theme::bg(&theme.colors.selection_bg)
        )
    } else {
        Theme::fg(&theme.colors.text_normal)
    };
    out.push_str(&base_colors);

    out.push_str(if card.is_selected { "> " } else { "  " });

    if card.is_favorite {
        out.push_str(&Theme::fg(&theme.colors.favorite_fg));
        out.push_str("* ");
        out.push_str(&base_colors);
    } else {
        out.push_str("  ");
    }

    let name_width = name_width(width);
    helpers::render_highlighted_text(out, &card.name, &card.highlight_ranges, theme, card.is_selected);
    out.push_str(&base_colors);
    out.push_str(&" ".repeat(name_width.saturating_sub(helpers::char_len(&card.name))));

    if !card.is_selected {
        out.push_str(&Theme::fg(theme.colors.status(card.status)));
    }
    write_padded(out, card.status.badge(), STATUS_WIDTH);
    out.push_str(&base_colors);

    write_padded(out, &card.species, SPECIES_WIDTH);

    out.push_str(Theme::reset());
    row + 1
}
