use folio_content::Content;
use ratatui::style::Style;
use ratatui::style::Stylize;
use ratatui::text::Line;
use ratatui::text::Span;

use crate::sections::heading;
use crate::sections::subheading;
use crate::sections::wrap_body;
use crate::theme;

pub fn lines(content: &Content, width: u16) -> Vec<Line<'static>> {
    let profile = &content.profile;
    let mut lines = heading(
        "About",
        "Me",
        "Get to know more about my journey and what drives me as a developer",
        width,
    );

    lines.extend(subheading("My Story", Style::default().fg(theme::HIGHLIGHT)));
    for (i, paragraph) in profile.story.iter().enumerate() {
        if i > 0 {
            lines.push(Line::from(""));
        }
        lines.extend(wrap_body(paragraph, width));
    }

    if !profile.stats.is_empty() {
        lines.push(Line::from(""));
        let mut spans: Vec<Span<'static>> = vec![Span::from("  ")];
        for (i, stat) in profile.stats.iter().enumerate() {
            if i > 0 {
                spans.push(Span::from("    "));
            }
            spans.push(Span::styled(
                stat.value.clone(),
                Style::default().fg(theme::HIGHLIGHT).bold(),
            ));
            spans.push(Span::from(" "));
            spans.push(Span::styled(stat.label.clone(), Style::default().dim()));
        }
        lines.push(Line::from(spans));
    }

    lines.extend(subheading("What I Do", Style::default().fg(theme::HIGHLIGHT)));
    for area in &profile.focus {
        lines.push(Line::from(vec![
            Span::from("  "),
            Span::styled(
                area.icon.glyph().to_string(),
                Style::default().fg(theme::accent_color(area.accent)),
            ),
            Span::from(" "),
            Span::styled(area.title.clone(), Style::default().bold()),
        ]));
        let wrap_width = usize::from(width.saturating_sub(8)).max(20);
        for piece in textwrap::wrap(&area.summary, wrap_width) {
            lines.push(Line::from(Span::styled(
                format!("      {piece}"),
                Style::default().dim(),
            )));
        }
    }

    lines.extend(subheading("Education", Style::default().fg(theme::HIGHLIGHT)));
    let education = &profile.education;
    lines.push(Line::from(vec![
        Span::from("  "),
        Span::styled(education.degree.clone(), Style::default().bold()),
    ]));
    lines.push(Line::from(Span::styled(
        format!("  {} • {}", education.school, education.years),
        Style::default().dim(),
    )));
    if let Some(note) = &education.note {
        lines.push(Line::from(Span::styled(
            format!("  {note}"),
            Style::default().dim(),
        )));
    }
    lines.push(Line::from(""));
    lines
}
