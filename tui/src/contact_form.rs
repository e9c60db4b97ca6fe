//! The contact form: four text fields, Tab-cycled focus, and a simulated
//! send. Submission never performs I/O; validation gates a toast and a
//! field reset, nothing more.

use crossterm::event::Event;
use crossterm::event::KeyCode;
use crossterm::event::KeyEvent;
use crossterm::event::KeyEventKind;
use ratatui::style::Style;
use ratatui::style::Stylize;
use ratatui::text::Line;
use ratatui::text::Span;
use tui_input::Input;
use tui_input::backend::crossterm::EventHandler;

use crate::theme;
use crate::toast::ToastStack;

/// Form fields in focus order.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum FormField {
    #[default]
    Name,
    Email,
    Subject,
    Message,
}

impl FormField {
    pub fn all() -> [FormField; 4] {
        [
            FormField::Name,
            FormField::Email,
            FormField::Subject,
            FormField::Message,
        ]
    }

    fn next(self) -> FormField {
        match self {
            FormField::Name => FormField::Email,
            FormField::Email => FormField::Subject,
            FormField::Subject => FormField::Message,
            FormField::Message => FormField::Name,
        }
    }

    fn prev(self) -> FormField {
        match self {
            FormField::Name => FormField::Message,
            FormField::Email => FormField::Name,
            FormField::Subject => FormField::Email,
            FormField::Message => FormField::Subject,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FormField::Name => "Name",
            FormField::Email => "Email",
            FormField::Subject => "Subject",
            FormField::Message => "Message",
        }
    }

    fn placeholder(self) -> &'static str {
        match self {
            FormField::Name => "Your Name",
            FormField::Email => "your@email.com",
            FormField::Subject => "What's this about?",
            FormField::Message => "Tell me about your project...",
        }
    }

    /// Subject is the only optional field.
    pub fn is_required(self) -> bool {
        !matches!(self, FormField::Subject)
    }
}

/// Snapshot of the form's field values.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ContactFormData {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SubmitOutcome {
    Success,
    MissingRequired,
}

/// Gate submission on the three required fields. There is exactly one error
/// kind; which field is missing is not distinguished.
pub fn validate(data: &ContactFormData) -> SubmitOutcome {
    if data.name.is_empty() || data.email.is_empty() || data.message.is_empty() {
        SubmitOutcome::MissingRequired
    } else {
        SubmitOutcome::Success
    }
}

/// What a key press did to the form.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FormEvent {
    None,
    /// A field value or the focus changed; the page needs a rebuild.
    Changed,
    Submitted,
    /// The user left the form; key control returns to the page.
    Exited,
}

#[derive(Clone, Debug, Default)]
pub struct ContactFormState {
    name: Input,
    email: Input,
    subject: Input,
    message: Input,
    focus: FormField,
    active: bool,
}

impl ContactFormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn focused_field(&self) -> FormField {
        self.focus
    }

    /// Give the form key focus, starting from the first field.
    pub fn focus(&mut self) {
        self.active = true;
    }

    pub fn blur(&mut self) {
        self.active = false;
    }

    pub fn data(&self) -> ContactFormData {
        ContactFormData {
            name: self.name.value().to_string(),
            email: self.email.value().to_string(),
            subject: self.subject.value().to_string(),
            message: self.message.value().to_string(),
        }
    }

    /// Replace a field's value wholesale (tests and prefill).
    pub fn set_field(&mut self, field: FormField, value: &str) {
        *self.input_mut(field) = Input::new(value.to_string());
    }

    /// Clear all four fields and return focus to the first.
    pub fn reset(&mut self) {
        self.name = Input::default();
        self.email = Input::default();
        self.subject = Input::default();
        self.message = Input::default();
        self.focus = FormField::Name;
    }

    fn input(&self, field: FormField) -> &Input {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Subject => &self.subject,
            FormField::Message => &self.message,
        }
    }

    fn input_mut(&mut self, field: FormField) -> &mut Input {
        match field {
            FormField::Name => &mut self.name,
            FormField::Email => &mut self.email,
            FormField::Subject => &mut self.subject,
            FormField::Message => &mut self.message,
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> FormEvent {
        if key.kind == KeyEventKind::Release {
            return FormEvent::None;
        }
        match key.code {
            KeyCode::Esc => {
                self.active = false;
                FormEvent::Exited
            }
            KeyCode::Tab | KeyCode::Down => {
                self.focus = self.focus.next();
                FormEvent::Changed
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.focus = self.focus.prev();
                FormEvent::Changed
            }
            KeyCode::Enter => FormEvent::Submitted,
            _ => {
                let event = Event::Key(key);
                let field = self.focus;
                if self.input_mut(field).handle_event(&event).is_some() {
                    FormEvent::Changed
                } else {
                    FormEvent::None
                }
            }
        }
    }

    /// Render the form body as page lines. The cursor is drawn inline on the
    /// focused field while the form holds key focus.
    pub fn render_lines(&self, width: u16) -> Vec<Line<'static>> {
        let wrap_width = usize::from(width.saturating_sub(8)).max(16);
        let mut lines = Vec::new();
        for field in FormField::all() {
            let focused = self.active && self.focus == field;
            let label_style = if focused {
                Style::default().fg(theme::HIGHLIGHT).bold()
            } else {
                Style::default().dim()
            };
            let mut label = vec![Span::from("  "), Span::styled(field.label(), label_style)];
            if field.is_required() {
                label.push(Span::styled(" *", Style::default().dim()));
            }
            lines.push(Line::from(label));

            let value = self.input(field).value();
            if value.is_empty() {
                let mut spans = vec![
                    Span::from("  ▏ "),
                    Span::styled(field.placeholder().to_string(), Style::default().dim().italic()),
                ];
                if focused {
                    spans.insert(1, Span::styled("█", Style::default().fg(theme::HIGHLIGHT)));
                }
                lines.push(Line::from(spans));
            } else {
                let wrapped = textwrap::wrap(value, wrap_width);
                let last = wrapped.len().saturating_sub(1);
                for (i, piece) in wrapped.iter().enumerate() {
                    let mut spans = vec![Span::from("  ▏ "), Span::from(piece.to_string())];
                    if focused && i == last {
                        spans.push(Span::styled("█", Style::default().fg(theme::HIGHLIGHT)));
                    }
                    lines.push(Line::from(spans));
                }
            }
            lines.push(Line::from(""));
        }
        let send = if self.active {
            Line::from(vec![
                Span::from("  "),
                Span::styled("[ Send Message ]", Style::default().fg(theme::HIGHLIGHT).bold()),
                Span::styled("  enter to send, esc to leave", Style::default().dim()),
            ])
        } else {
            Line::from(vec![
                Span::from("  "),
                Span::styled("[ Send Message ]", Style::default().dim()),
                Span::styled("  press tab to write a message", Style::default().dim()),
            ])
        };
        lines.push(send);
        lines
    }
}

/// Apply a submit: emit the outcome toast and, on success, reset the form.
/// Field values are left untouched on a validation failure so nothing the
/// user typed is lost.
pub fn submit(form: &mut ContactFormState, toasts: &mut ToastStack) -> SubmitOutcome {
    let data = form.data();
    let outcome = validate(&data);
    match outcome {
        SubmitOutcome::MissingRequired => {
            tracing::debug!("contact form rejected: required field missing");
            toasts.error("Error", "Please fill in all required fields.");
        }
        SubmitOutcome::Success => {
            tracing::info!("contact form submitted (simulated send)");
            toasts.success(
                "Message Sent!",
                "Thank you for your message. I'll get back to you soon.",
            );
            form.reset();
        }
    }
    outcome
}
