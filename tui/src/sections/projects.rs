use folio_content::Content;
use folio_content::Project;
use ratatui::style::Style;
use ratatui::style::Stylize;
use ratatui::text::Line;
use ratatui::text::Span;

use crate::sections::heading;
use crate::sections::tag_rows;
use crate::sections::wrap_body;
use crate::theme;

fn link_span(label: &str, url: &str, style: Style) -> Span<'static> {
    // "#" placeholders from the content tables render as bare labels.
    if url == "#" {
        Span::styled(label.to_string(), style)
    } else {
        Span::styled(format!("{label} ({url})"), style)
    }
}

fn project_lines(project: &Project, width: u16) -> Vec<Line<'static>> {
    let accent = theme::accent_color(project.accent);
    let banner_width = usize::from(width.saturating_sub(4)).max(16);
    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("  {}", "▄".repeat(banner_width)),
            Style::default().fg(accent),
        )),
        Line::from(vec![
            Span::from("  "),
            Span::styled(project.title.clone(), Style::default().bold()),
        ]),
    ];
    for line in wrap_body(&project.description, width) {
        lines.push(line.dim());
    }
    lines.extend(tag_rows(
        &project.technologies,
        width,
        Style::default().fg(accent),
    ));
    lines.push(Line::from(vec![
        Span::from("  "),
        link_span("↗ Live Demo", &project.live_demo, Style::default().fg(theme::HIGHLIGHT)),
        Span::from("    "),
        link_span("⌁ Code", &project.code_url, Style::default().dim()),
    ]));
    lines
}

pub fn lines(content: &Content, width: u16) -> Vec<Line<'static>> {
    let mut lines = heading(
        "Featured",
        "Projects",
        "A showcase of my recent work and personal projects",
        width,
    );
    for project in &content.projects {
        lines.extend(project_lines(project, width));
    }
    lines.push(Line::from(""));
    lines
}
