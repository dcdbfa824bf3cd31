//! Detail panel component renderer.
//!
//! Renders the selected character in the right-hand column, or the loading and
//! "not found" placeholders.

use crate::domain::CharacterRoute;
use crate::ui::helpers::{position_cursor, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{CharacterDetail, DetailPanel};

/// Message shown when the selected id is unknown to the catalog.
pub const NOT_FOUND_MESSAGE: &str = "Character Not Found";

/// Renders the detail panel with its top-left corner at (`row`, `col`).
pub fn render_detail(out: &mut String, row: usize, col: usize, panel: &DetailPanel, theme: &Theme, width: usize) {
    match panel {
        DetailPanel::Hidden => {
            position_cursor(out, row, col);
            out.push_str(&Theme::fg(&theme.colors.text_dim));
            out.push_str(&truncate("Select a character to see details", width));
            out.push_str(Theme::reset());
        }
        DetailPanel::Loading(id) => {
            position_cursor(out, row, col);
            out.push_str(&Theme::fg(&theme.colors.text_dim));
            out.push_str(&truncate(&format!("Loading character #{id}..."), width));
            out.push_str(Theme::reset());
        }
        DetailPanel::NotFound(id) => {
            position_cursor(out, row, col);
            out.push_str(Theme::bold());
            out.push_str(&Theme::fg(&theme.colors.error_fg));
            out.push_str(&truncate(NOT_FOUND_MESSAGE, width));
            out.push_str(Theme::reset());

            position_cursor(out, row + 1, col);
            out.push_str(&Theme::fg(&theme.colors.text_dim));
            out.push_str(&truncate(&format!("No character with id {id}"), width));
            out.push_str(Theme::reset());
        }
        DetailPanel::Character(detail) => render_character(out, row, col, detail, theme, width),
    }
}

fn render_character(out: &mut String, row: usize, col: usize, detail: &CharacterDetail, theme: &Theme, width: usize) {
    position_cursor(out, row, col);
    out.push_str(Theme::bold());
    out.push_str(&Theme::fg(&theme.colors.header_fg));
    out.push_str(&truncate(&detail.name, width.saturating_sub(2)));
    if detail.is_favorite {
        out.push_str(&Theme::fg(&theme.colors.favorite_fg));
        out.push_str(" *");
    }
    out.push_str(Theme::reset());

    position_cursor(out, row + 1, col);
    out.push_str(&Theme::fg(theme.colors.status(detail.status)));
    out.push_str(detail.status.badge());
    out.push_str(Theme::reset());

    let kind = if detail.kind.is_empty() { "-" } else { detail.kind.as_str() };
    let route = CharacterRoute { character_id: detail.id }.to_query();
    let episodes = detail.episode_count.to_string();
    let fields = [
        ("Species", detail.species.as_str()),
        ("Type", kind),
        ("Gender", detail.gender.as_str()),
        ("Origin", detail.origin.as_str()),
        ("Location", detail.location.as_str()),
        ("Episodes", episodes.as_str()),
        ("Created", detail.created.as_str()),
        ("Image", detail.image.as_str()),
        ("Route", route.as_str()),
    ];

    for (offset, (label, value)) in fields.iter().enumerate() {
        position_cursor(out, row + 3 + offset, col);
        out.push_str(&Theme::fg(&theme.colors.text_dim));
        out.push_str(&format!("{label:<10}"));
        out.push_str(&Theme::fg(&theme.colors.text_normal));
        out.push_str(&truncate(value, width.saturating_sub(10)));
        out.push_str(Theme::reset());
    }
}
