use folio_content::Content;
use folio_content::SKILL_LEVEL_MAX;
use folio_content::Skill;
use ratatui::style::Style;
use ratatui::style::Stylize;
use ratatui::text::Line;
use ratatui::text::Span;
use unicode_width::UnicodeWidthStr;

use crate::sections::heading;
use crate::sections::subheading;
use crate::sections::tag_rows;
use crate::theme;

/// Column the proficiency gauge is aligned to.
const GAUGE_COLUMN: usize = 26;

/// Five-dot proficiency gauge; levels beyond the range fill the gauge.
fn gauge(skill: &Skill) -> Vec<Span<'static>> {
    let filled = usize::from(skill.gauge_level());
    let empty = usize::from(SKILL_LEVEL_MAX) - filled;
    vec![
        Span::styled("●".repeat(filled), theme::gauge_filled_style()),
        Span::styled("○".repeat(empty), theme::gauge_empty_style()),
    ]
}

pub fn lines(content: &Content, width: u16) -> Vec<Line<'static>> {
    let mut lines = heading(
        "Technical",
        "Skills",
        "Technologies and tools I work with to bring ideas to life",
        width,
    );

    for category in &content.skill_categories {
        let accent = theme::accent_color(category.accent);
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::from("  "),
            Span::styled(
                category.icon.glyph().to_string(),
                Style::default().fg(accent),
            ),
            Span::from(" "),
            Span::styled(category.title.clone(), Style::default().fg(accent).bold()),
        ]));
        for skill in &category.skills {
            let name_width = skill.name.width();
            let padding = GAUGE_COLUMN.saturating_sub(name_width).max(1);
            let mut spans = vec![
                Span::from("    "),
                Span::from(skill.name.clone()),
                Span::from(" ".repeat(padding)),
            ];
            spans.extend(gauge(skill));
            lines.push(Line::from(spans));
        }
    }

    if !content.currently_learning.is_empty() {
        lines.extend(subheading(
            "Currently Learning",
            Style::default().fg(theme::HIGHLIGHT),
        ));
        lines.extend(tag_rows(
            &content.currently_learning,
            width,
            Style::default().dim(),
        ));
    }
    lines.push(Line::from(""));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gauge_is_always_five_dots() {
        let overflowing = Skill {
            name: "Everything".to_string(),
            level: 11,
        };
        let spans = gauge(&overflowing);
        let rendered: String = spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(rendered, "●●●●●");

        let half = Skill {
            name: "CSS".to_string(),
            level: 2,
        };
        let rendered: String = gauge(&half).iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(rendered, "●●○○○");
    }
}
