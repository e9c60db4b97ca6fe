//! End-to-end behavior of the page layout, scroll tracking, navigation, and
//! the contact form, exercised without a real terminal.

use folio_content::Content;
use folio_content::SectionId;
use folio_tui::contact_form;
use folio_tui::contact_form::ContactFormData;
use folio_tui::contact_form::ContactFormState;
use folio_tui::contact_form::FormField;
use folio_tui::contact_form::SubmitOutcome;
use folio_tui::page::PageView;
use folio_tui::scroll;
use folio_tui::scroll::HEADER_CLEARANCE;
use folio_tui::scroll::SCROLL_SPY_LOOKAHEAD;
use folio_tui::toast::ToastKind;
use folio_tui::toast::ToastStack;
use folio_tui::view_model::ViewState;
use pretty_assertions::assert_eq;
use ratatui::text::Line;

const WIDTH: u16 = 80;

fn page() -> PageView {
    PageView::new(&Content::built_in(), &ContactFormState::new(), WIDTH)
}

fn section_text(view: &PageView, id: SectionId) -> String {
    view.section_lines(id)
        .iter()
        .map(line_text)
        .collect::<Vec<_>>()
        .join("\n")
}

fn line_text(line: &Line<'_>) -> String {
    line.spans.iter().map(|s| s.content.as_ref()).collect()
}

#[test]
fn skills_section_renders_every_entry_once_in_order() {
    let content = Content::built_in();
    let text = section_text(&page(), SectionId::Skills);

    let mut cursor = 0;
    for category in &content.skill_categories {
        for skill in &category.skills {
            assert_eq!(
                text.matches(&skill.name).count(),
                1,
                "skill {:?} must appear exactly once",
                skill.name
            );
            let at = text[cursor..]
                .find(&skill.name)
                .unwrap_or_else(|| panic!("skill {:?} out of order", skill.name));
            cursor += at;
        }
    }
    for tag in &content.currently_learning {
        assert_eq!(text.matches(&format!("[{tag}]")).count(), 1);
    }
}

#[test]
fn projects_section_renders_every_project_once_in_order() {
    let content = Content::built_in();
    let text = section_text(&page(), SectionId::Projects);

    let mut cursor = 0;
    for project in &content.projects {
        assert_eq!(
            text.matches(&project.title).count(),
            1,
            "project {:?} must appear exactly once",
            project.title
        );
        let at = text[cursor..]
            .find(&project.title)
            .unwrap_or_else(|| panic!("project {:?} out of order", project.title));
        cursor += at;
        for tech in &project.technologies {
            assert!(
                text.contains(&format!("[{tech}]")),
                "missing technology tag {tech:?}"
            );
        }
    }
}

#[test]
fn active_section_tracks_scroll_through_the_real_layout() {
    let view = page();
    let tops = view.section_tops();

    assert_eq!(scroll::active_section(&tops, 0), Some(SectionId::Home));

    let about_top = tops
        .iter()
        .find(|(id, _)| *id == SectionId::About)
        .map(|(_, top)| *top)
        .expect("about in layout");
    let threshold = about_top - SCROLL_SPY_LOOKAHEAD;
    assert_eq!(
        scroll::active_section(&tops, threshold - 1),
        Some(SectionId::Home),
        "one row above the threshold home is still active"
    );
    assert_eq!(
        scroll::active_section(&tops, threshold),
        Some(SectionId::About)
    );

    let bottom = view.max_scroll(24);
    assert_eq!(
        scroll::active_section(&tops, bottom),
        Some(SectionId::Contact),
        "scrolled to the bottom the last section wins"
    );
}

#[test]
fn every_section_has_a_navigation_target_with_clearance() {
    let view = page();
    let tops = view.section_tops();
    for (id, top) in &tops {
        let target = scroll::navigation_target(&tops, *id).expect("section navigable");
        assert_eq!(target, top.saturating_sub(HEADER_CLEARANCE));
        assert!(target <= view.total_height());
    }
}

#[test]
fn navigation_to_a_missing_section_is_a_noop_but_closes_the_menu() {
    let view = page();
    // Drop contact from the layout to model a stale identifier.
    let partial: Vec<(SectionId, u16)> = view
        .section_tops()
        .into_iter()
        .filter(|(id, _)| *id != SectionId::Contact)
        .collect();

    let mut state = ViewState::new();
    state.toggle_menu();
    assert!(state.menu_open());
    assert_eq!(state.navigate(&partial, SectionId::Contact), None);
    assert!(!state.menu_open(), "menu closes even when nothing scrolls");
}

#[test]
fn submitting_a_complete_form_succeeds_and_resets_all_fields() {
    let mut form = ContactFormState::new();
    form.set_field(FormField::Name, "Jane");
    form.set_field(FormField::Email, "jane@x.com");
    form.set_field(FormField::Message, "Hello");
    let mut toasts = ToastStack::new();

    assert_eq!(
        contact_form::submit(&mut form, &mut toasts),
        SubmitOutcome::Success
    );
    let toast = toasts.latest().expect("a toast was shown");
    assert_eq!(toast.kind, ToastKind::Success);
    assert_eq!(toast.title, "Message Sent!");
    assert_eq!(
        toast.description,
        "Thank you for your message. I'll get back to you soon."
    );
    assert_eq!(form.data(), ContactFormData::default());
}

#[test]
fn submitting_with_a_missing_required_field_errors_and_keeps_values() {
    for missing in [FormField::Name, FormField::Email, FormField::Message] {
        let mut form = ContactFormState::new();
        form.set_field(FormField::Name, "Jane");
        form.set_field(FormField::Email, "jane@x.com");
        form.set_field(FormField::Subject, "Hi");
        form.set_field(FormField::Message, "Hello");
        form.set_field(missing, "");
        let before = form.data();
        let mut toasts = ToastStack::new();

        assert_eq!(
            contact_form::submit(&mut form, &mut toasts),
            SubmitOutcome::MissingRequired,
            "missing {missing:?} must fail"
        );
        let toast = toasts.latest().expect("a toast was shown");
        assert_eq!(toast.kind, ToastKind::Error);
        assert_eq!(toast.title, "Error");
        assert_eq!(toast.description, "Please fill in all required fields.");
        assert_eq!(form.data(), before, "values survive a failed submit");
    }
}

#[test]
fn empty_subject_never_blocks_submission() {
    let mut form = ContactFormState::new();
    form.set_field(FormField::Name, "Jane");
    form.set_field(FormField::Email, "jane@x.com");
    form.set_field(FormField::Message, "Hello");
    let mut toasts = ToastStack::new();
    assert_eq!(
        contact_form::submit(&mut form, &mut toasts),
        SubmitOutcome::Success
    );
}

mod rendering {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use ratatui::layout::Rect;

    fn render_to_rows(view: &PageView, offset: u16, height: u16) -> Vec<String> {
        let mut terminal = Terminal::new(TestBackend::new(WIDTH, height)).expect("terminal");
        terminal
            .draw(|frame| {
                let area = Rect::new(0, 0, WIDTH, height);
                view.render(area, frame.buffer_mut(), offset);
            })
            .expect("draw");
        let buffer = terminal.backend().buffer().clone();
        (0..height)
            .map(|y| {
                (0..WIDTH)
                    .map(|x| buffer[(x, y)].symbol().to_string())
                    .collect::<String>()
                    .trim_end()
                    .to_string()
            })
            .collect()
    }

    #[test]
    fn the_top_of_the_page_greets() {
        let rows = render_to_rows(&page(), 0, 24);
        assert!(
            rows.iter().any(|row| row.contains("Hello, I'm")),
            "hero greeting missing: {rows:?}"
        );
    }

    #[test]
    fn rows_past_the_end_of_content_get_a_pager_gutter() {
        let view = page();
        let rows = render_to_rows(&view, view.total_height(), 10);
        assert!(rows.iter().all(|row| row.starts_with('~')), "{rows:?}");
    }

    #[test]
    fn scrolling_to_a_section_top_shows_its_heading() {
        let view = page();
        let tops = view.section_tops();
        let skills_top = tops
            .iter()
            .find(|(id, _)| *id == SectionId::Skills)
            .map(|(_, top)| *top)
            .expect("skills in layout");
        let rows = render_to_rows(&view, skills_top, 24);
        assert!(
            rows.iter().any(|row| row.contains("Technical Skills")),
            "skills heading missing: {rows:?}"
        );
    }
}
