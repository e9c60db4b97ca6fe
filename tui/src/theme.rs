//! Maps content style tokens onto terminal colors.
//!
//! Content never names colors directly; it carries [`Accent`] tokens and the
//! theme decides what they look like. Keeping the mapping in one place means
//! a different palette is a one-file change.

use folio_content::Accent;
use ratatui::style::Color;
use ratatui::style::Style;
use ratatui::style::Stylize;

pub(crate) fn accent_color(accent: Accent) -> Color {
    match accent {
        Accent::Blue => Color::Blue,
        Accent::Cyan => Color::Cyan,
        Accent::Green => Color::Green,
        Accent::Purple => Color::Magenta,
        Accent::Emerald => Color::LightGreen,
    }
}

/// Color used for headings, the brand, and the active navigation entry.
pub(crate) const HIGHLIGHT: Color = Color::Cyan;

pub(crate) fn brand_style() -> Style {
    Style::default().fg(HIGHLIGHT).bold()
}

pub(crate) fn active_nav_style() -> Style {
    Style::default().fg(HIGHLIGHT).bold()
}

pub(crate) fn inactive_nav_style() -> Style {
    Style::default().dim()
}

pub(crate) fn heading_style() -> Style {
    Style::default().bold()
}

pub(crate) fn gauge_filled_style() -> Style {
    Style::default().fg(HIGHLIGHT)
}

pub(crate) fn gauge_empty_style() -> Style {
    Style::default().dim()
}
