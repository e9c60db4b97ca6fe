use folio_content::Content;
use ratatui::style::Style;
use ratatui::style::Stylize;
use ratatui::text::Line;
use ratatui::text::Span;

use crate::theme;

/// Letter-spaced display form of the profile name.
fn display_name(name: &str) -> String {
    let mut spaced = String::new();
    for (i, ch) in name.chars().enumerate() {
        if i > 0 {
            spaced.push(' ');
        }
        spaced.push(ch.to_ascii_uppercase());
    }
    spaced
}

pub fn lines(content: &Content, width: u16) -> Vec<Line<'static>> {
    let profile = &content.profile;
    let mut lines = vec![
        Line::from(""),
        Line::from(""),
        Line::from(""),
        Line::from(Span::styled("Hello, I'm", Style::default().fg(theme::HIGHLIGHT))).centered(),
        Line::from(""),
        Line::from(Span::styled(
            display_name(&profile.name),
            Style::default().bold(),
        ))
        .centered(),
        Line::from(""),
        Line::from(profile.tagline.clone()).centered(),
        Line::from(""),
    ];
    let wrap_width = usize::from(width.saturating_sub(10)).max(20);
    for piece in textwrap::wrap(&profile.intro, wrap_width) {
        lines.push(Line::from(Span::styled(piece.to_string(), Style::default().dim())).centered());
    }
    lines.push(Line::from(""));
    if !content.social.is_empty() {
        let labels: Vec<String> = content.social.iter().map(|s| s.label.clone()).collect();
        lines.push(
            Line::from(Span::styled(labels.join(" · "), Style::default().dim())).centered(),
        );
        lines.push(Line::from(""));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("▼ scroll", Style::default().dim())).centered());
    lines.push(Line::from(""));
    lines.push(Line::from(""));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_is_letter_spaced() {
        assert_eq!(display_name("Alex Johnson"), "A L E X   J O H N S O N");
    }
}
