use folio_content::Content;
use ratatui::style::Style;
use ratatui::style::Stylize;
use ratatui::text::Line;
use ratatui::text::Span;

use crate::contact_form::ContactFormState;
use crate::sections::heading;
use crate::sections::subheading;
use crate::theme;

fn channel_line(glyph: &str, label: &str, value: &str) -> Line<'static> {
    Line::from(vec![
        Span::from("  "),
        Span::styled(glyph.to_string(), Style::default().fg(theme::HIGHLIGHT)),
        Span::from(" "),
        Span::styled(format!("{label:<10}"), Style::default().dim()),
        Span::from(value.to_string()),
    ])
}

pub fn lines(content: &Content, form: &ContactFormState, width: u16) -> Vec<Line<'static>> {
    let profile = &content.profile;
    let mut lines = heading(
        "Get In",
        "Touch",
        "I'm always open to discussing new opportunities and interesting projects",
        width,
    );

    lines.extend(subheading("Let's Connect", Style::default().fg(theme::HIGHLIGHT)));
    lines.push(channel_line("✉", "Email", &profile.email));
    lines.push(channel_line("☎", "Phone", &profile.phone));
    lines.push(channel_line("⌂", "Location", &profile.location));

    if !content.social.is_empty() {
        lines.extend(subheading("Follow Me", Style::default().fg(theme::HIGHLIGHT)));
        let labels: Vec<String> = content.social.iter().map(|s| s.label.clone()).collect();
        lines.push(Line::from(Span::styled(
            format!("  {}", labels.join(" · ")),
            Style::default().dim(),
        )));
    }

    lines.extend(subheading("Send Me a Message", Style::default().fg(theme::HIGHLIGHT)));
    lines.extend(form.render_lines(width));
    lines.push(Line::from(""));
    lines
}
