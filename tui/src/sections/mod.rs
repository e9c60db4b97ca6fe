//! Per-section renderers. Each section turns the static content tables into
//! a block of page lines for a given width; the page view stacks the blocks
//! and derives section top offsets from their heights.

pub mod about;
pub mod contact;
pub mod hero;
pub mod projects;
pub mod skills;

use ratatui::style::Style;
use ratatui::style::Stylize;
use ratatui::text::Line;
use ratatui::text::Span;
use unicode_width::UnicodeWidthStr;

use crate::theme;

/// Body text wrapped and indented two columns.
pub(crate) fn wrap_body(text: &str, width: u16) -> Vec<Line<'static>> {
    let wrap_width = usize::from(width.saturating_sub(4)).max(20);
    textwrap::wrap(text, wrap_width)
        .into_iter()
        .map(|piece| Line::from(format!("  {piece}")))
        .collect()
}

/// Centered two-tone section heading with a dim subtitle underneath.
pub(crate) fn heading(
    plain: &str,
    accented: &str,
    subtitle: &str,
    width: u16,
) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled(format!("{plain} "), theme::heading_style()),
            Span::styled(
                accented.to_string(),
                Style::default().fg(theme::HIGHLIGHT).bold(),
            ),
        ])
        .centered(),
        Line::from(""),
    ];
    let wrap_width = usize::from(width.saturating_sub(8)).max(20);
    for piece in textwrap::wrap(subtitle, wrap_width) {
        lines.push(Line::from(Span::styled(piece.to_string(), Style::default().dim())).centered());
    }
    lines.push(Line::from(""));
    lines
}

/// Accent-colored sub-heading within a section.
pub(crate) fn subheading(text: &str, style: Style) -> Vec<Line<'static>> {
    vec![
        Line::from(""),
        Line::from(vec![Span::from("  "), Span::styled(text.to_string(), style.bold())]),
        Line::from(""),
    ]
}

/// Lay `[tag]` chips out across as many indented rows as the width needs.
pub(crate) fn tag_rows(tags: &[String], width: u16, style: Style) -> Vec<Line<'static>> {
    let max_width = usize::from(width.saturating_sub(4)).max(16);
    let mut lines = Vec::new();
    let mut row: Vec<Span<'static>> = Vec::new();
    let mut row_width = 0usize;
    for tag in tags {
        let chip = format!("[{tag}]");
        let chip_width = chip.width() + 1;
        if row_width + chip_width > max_width && !row.is_empty() {
            lines.push(Line::from(std::mem::take(&mut row)));
            row_width = 0;
        }
        if row.is_empty() {
            row.push(Span::from("  "));
        } else {
            row.push(Span::from(" "));
        }
        row.push(Span::styled(chip, style));
        row_width += chip_width;
    }
    if !row.is_empty() {
        lines.push(Line::from(row));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_text(line: &Line<'_>) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn tag_rows_keep_every_tag_in_order() {
        let tags: Vec<String> = ["TypeScript", "Next.js", "GraphQL", "Docker"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let lines = tag_rows(&tags, 30, Style::default());
        let joined: String = lines.iter().map(|l| line_text(l)).collect::<Vec<_>>().join(" ");
        for tag in &tags {
            assert!(joined.contains(&format!("[{tag}]")), "missing {tag} in {joined}");
        }
        assert!(lines.len() > 1, "narrow width should wrap onto multiple rows");
    }

    #[test]
    fn wrap_body_indents_every_line() {
        let lines = wrap_body("one two three four five six seven eight nine ten", 24);
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(line_text(line).starts_with("  "));
        }
    }
}
