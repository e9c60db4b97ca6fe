//! The scrolling page: one block of lines per section, stacked in document
//! order. Section top offsets fall out of the block heights and feed the
//! scroll tracker and navigator.

use folio_content::Content;
use folio_content::SectionId;
use ratatui::buffer::Buffer;
use ratatui::buffer::Cell;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::style::Stylize;
use ratatui::text::Line;
use ratatui::text::Span;
use ratatui::text::Text;
use ratatui::widgets::Paragraph;
use ratatui::widgets::Widget;

use crate::contact_form::ContactFormState;
use crate::sections;

struct SectionBlock {
    id: SectionId,
    lines: Vec<Line<'static>>,
}

pub struct PageView {
    blocks: Vec<SectionBlock>,
    /// Footer lines below the last section; part of the scroll range but not
    /// a navigation anchor.
    tail: Vec<Line<'static>>,
    width: u16,
}

impl PageView {
    pub fn new(content: &Content, form: &ContactFormState, width: u16) -> Self {
        let mut view = Self {
            blocks: Vec::new(),
            tail: Vec::new(),
            width,
        };
        view.rebuild(content, form, width);
        view
    }

    /// Re-lay the page out. Called whenever the width or the form state
    /// changes; line wrapping depends on both.
    pub fn rebuild(&mut self, content: &Content, form: &ContactFormState, width: u16) {
        self.width = width;
        self.blocks = SectionId::in_order()
            .map(|id| SectionBlock {
                id,
                lines: match id {
                    SectionId::Home => sections::hero::lines(content, width),
                    SectionId::About => sections::about::lines(content, width),
                    SectionId::Skills => sections::skills::lines(content, width),
                    SectionId::Projects => sections::projects::lines(content, width),
                    SectionId::Contact => sections::contact::lines(content, form, width),
                },
            })
            .collect();
        self.tail = footer_tail(content, width);
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    /// Top row offset of every section, in document order.
    pub fn section_tops(&self) -> Vec<(SectionId, u16)> {
        let mut tops = Vec::with_capacity(self.blocks.len());
        let mut y: u16 = 0;
        for block in &self.blocks {
            tops.push((block.id, y));
            y = y.saturating_add(block.lines.len() as u16);
        }
        tops
    }

    pub fn total_height(&self) -> u16 {
        let body: usize = self.blocks.iter().map(|b| b.lines.len()).sum();
        (body + self.tail.len()).min(usize::from(u16::MAX)) as u16
    }

    pub fn max_scroll(&self, viewport_height: u16) -> u16 {
        self.total_height().saturating_sub(viewport_height)
    }

    /// The rendered lines of one section (test access).
    pub fn section_lines(&self, id: SectionId) -> &[Line<'static>] {
        self.blocks
            .iter()
            .find(|b| b.id == id)
            .map(|b| b.lines.as_slice())
            .unwrap_or(&[])
    }

    fn iter_lines(&self) -> impl Iterator<Item = &Line<'static>> {
        self.blocks
            .iter()
            .flat_map(|b| b.lines.iter())
            .chain(self.tail.iter())
    }

    /// Paint the slice of page content visible at `offset`. Rows past the
    /// end of the content get a `~` gutter like a pager.
    pub fn render(&self, area: Rect, buf: &mut Buffer, offset: u16) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let visible: Vec<Line<'static>> = self
            .iter_lines()
            .skip(usize::from(offset))
            .take(usize::from(area.height))
            .cloned()
            .collect();
        let drawn = visible.len() as u16;
        Paragraph::new(Text::from(visible)).render(area, buf);
        for y in area.y.saturating_add(drawn)..area.bottom() {
            buf[(area.x, y)] = Cell::from('~');
        }
    }
}

fn footer_tail(content: &Content, width: u16) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "─".repeat(usize::from(width)),
            Style::default().dim(),
        )),
        Line::from(Span::styled(
            format!(
                "© {} · built with passion and lots of coffee",
                content.profile.name
            ),
            Style::default().dim(),
        ))
        .centered(),
    ];
    if !content.social.is_empty() {
        let labels: Vec<String> = content.social.iter().map(|s| s.label.clone()).collect();
        lines.push(
            Line::from(Span::styled(labels.join(" · "), Style::default().dim())).centered(),
        );
    }
    lines.push(Line::from(""));
    lines
}
