//! Fixed navigation bar and the collapsible menu for narrow terminals.

use folio_content::SectionId;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::style::Stylize;
use ratatui::text::Line;
use ratatui::text::Span;
use ratatui::widgets::Block;
use ratatui::widgets::BorderType;
use ratatui::widgets::Borders;
use ratatui::widgets::Clear;
use ratatui::widgets::Paragraph;
use ratatui::widgets::Widget;
use ratatui::widgets::WidgetRef;

use crate::theme;

/// Bar plus separator row.
pub(crate) const NAV_HEIGHT: u16 = 2;

/// Below this width the section entries collapse behind the menu.
pub(crate) const NARROW_WIDTH: u16 = 72;

fn entry_spans(active: Option<SectionId>) -> Vec<Span<'static>> {
    let mut spans = Vec::new();
    for (i, section) in SectionId::in_order().enumerate() {
        if i > 0 {
            spans.push(Span::from("  "));
        }
        let style = if active == Some(section) {
            theme::active_nav_style()
        } else {
            theme::inactive_nav_style()
        };
        spans.push(Span::styled(section.label(), style));
    }
    spans
}

pub(crate) fn render_nav(area: Rect, buf: &mut Buffer, brand: &str, active: Option<SectionId>) {
    if area.width == 0 || area.height == 0 {
        return;
    }
    let left = vec![Span::from(" "), Span::styled(brand.to_string(), theme::brand_style())];
    let right: Vec<Span<'static>> = if area.width >= NARROW_WIDTH {
        entry_spans(active)
    } else {
        vec![Span::styled("≡ menu (m)", Style::default().dim())]
    };

    let left_width = Line::from(left.clone()).width();
    let right_width = Line::from(right.clone()).width();
    let padding = usize::from(area.width)
        .saturating_sub(left_width + right_width + 1)
        .max(1);

    let mut spans = left;
    spans.push(Span::from(" ".repeat(padding)));
    spans.extend(right);
    let bar = Rect::new(area.x, area.y, area.width, 1);
    Paragraph::new(Line::from(spans)).render(bar, buf);

    if area.height > 1 {
        let separator = Rect::new(area.x, area.y + 1, area.width, 1);
        Span::styled("─".repeat(usize::from(area.width)), Style::default().dim())
            .render_ref(separator, buf);
    }
}

/// Dropdown menu under the bar's right edge. Drawn over the page while
/// `menu_open` is set.
pub(crate) fn render_menu(
    frame_area: Rect,
    buf: &mut Buffer,
    cursor: usize,
    active: Option<SectionId>,
) {
    let entries: Vec<SectionId> = SectionId::in_order().collect();
    let height = (entries.len() as u16).saturating_add(2);
    let width = 18u16;
    if frame_area.width < width || frame_area.height < NAV_HEIGHT + height {
        return;
    }
    let x = frame_area.right().saturating_sub(width + 1);
    let rect = Rect::new(x, frame_area.y + NAV_HEIGHT, width, height);

    Clear.render(rect, buf);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().dim());
    let inner = block.inner(rect);
    block.render(rect, buf);

    for (i, section) in entries.iter().enumerate() {
        let y = inner.y + i as u16;
        if y >= inner.bottom() {
            break;
        }
        let marker = if active == Some(*section) { "•" } else { " " };
        let text = format!(" {marker} {}", section.label());
        let line = if i == cursor {
            Line::styled(text, Style::default().fg(theme::HIGHLIGHT).bold().reversed())
        } else {
            Line::from(text)
        };
        line.render_ref(Rect::new(inner.x, y, inner.width, 1), buf);
    }
}
