//! Transient toast notifications, stacked in the top-right corner.

use std::collections::VecDeque;
use std::time::Duration;
use std::time::Instant;

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Color;
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
use ratatui::widgets::Wrap;

/// How long a toast stays on screen.
pub const TOAST_TTL: Duration = Duration::from_secs(4);

/// Newest toasts are shown first; older ones beyond this count stay queued
/// until they expire.
const MAX_VISIBLE: usize = 3;

const TOAST_WIDTH: u16 = 38;
const TOAST_HEIGHT: u16 = 4;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Clone, Debug)]
pub struct Toast {
    pub title: String,
    pub description: String,
    pub kind: ToastKind,
    deadline: Instant,
}

/// FIFO of live toasts; expiry is driven by the app's frame timer.
#[derive(Clone, Debug, Default)]
pub struct ToastStack {
    toasts: VecDeque<Toast>,
}

impl ToastStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn success(&mut self, title: impl Into<String>, description: impl Into<String>) {
        self.push(ToastKind::Success, title.into(), description.into());
    }

    pub fn error(&mut self, title: impl Into<String>, description: impl Into<String>) {
        self.push(ToastKind::Error, title.into(), description.into());
    }

    fn push(&mut self, kind: ToastKind, title: String, description: String) {
        self.toasts.push_back(Toast {
            title,
            description,
            kind,
            deadline: Instant::now() + TOAST_TTL,
        });
    }

    /// Drop every toast whose deadline has passed. Returns true when any
    /// was removed (the caller should redraw).
    pub fn expire_due(&mut self, now: Instant) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|toast| toast.deadline > now);
        self.toasts.len() != before
    }

    /// Earliest pending deadline, used to size the event-loop timeout.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.toasts.iter().map(|toast| toast.deadline).min()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    /// Most recent toast, newest-first like the rendering order.
    pub fn latest(&self) -> Option<&Toast> {
        self.toasts.back()
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer) {
        let mut y = area.y;
        for toast in self.toasts.iter().rev().take(MAX_VISIBLE) {
            if y + TOAST_HEIGHT > area.bottom() {
                break;
            }
            let width = TOAST_WIDTH.min(area.width);
            let x = area.right().saturating_sub(width);
            let rect = Rect::new(x, y, width, TOAST_HEIGHT);
            render_toast(toast, rect, buf);
            y += TOAST_HEIGHT + 1;
        }
    }
}

fn render_toast(toast: &Toast, rect: Rect, buf: &mut Buffer) {
    let border_color = match toast.kind {
        ToastKind::Success => Color::Green,
        ToastKind::Error => Color::Red,
    };
    Clear.render(rect, buf);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_color))
        .title(Line::from(Span::styled(
            format!(" {} ", toast.title),
            Style::default().fg(border_color).bold(),
        )));
    let inner = block.inner(rect);
    block.render(rect, buf);
    Paragraph::new(toast.description.clone())
        .wrap(Wrap { trim: true })
        .render(inner, buf);
}
