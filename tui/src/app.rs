use std::sync::mpsc::RecvTimeoutError;
use std::sync::mpsc::channel;
use std::thread;
use std::time::Duration;
use std::time::Instant;

use anyhow::Result;
use crossterm::event::Event;
use crossterm::event::KeyCode;
use crossterm::event::KeyEvent;
use crossterm::event::KeyEventKind;
use folio_content::Content;
use folio_content::SectionId;
use ratatui::Frame;
use ratatui::layout::Rect;

use crate::app_event::AppEvent;
use crate::app_event_sender::AppEventSender;
use crate::contact_form;
use crate::contact_form::ContactFormState;
use crate::contact_form::FormEvent;
use crate::footer;
use crate::footer::FOOTER_HEIGHT;
use crate::footer::FooterContext;
use crate::key_hint;
use crate::key_hint::KeyBinding;
use crate::nav;
use crate::nav::NAV_HEIGHT;
use crate::page::PageView;
use crate::scroll::ScrollState;
use crate::terminal::Tui;
use crate::toast::ToastStack;
use crate::view_model::ViewState;

/// Cadence of smooth-scroll animation frames.
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Idle wait when no timer is pending.
const IDLE_POLL: Duration = Duration::from_secs(60);

const KEY_Q: KeyBinding = key_hint::plain(KeyCode::Char('q'));
const KEY_CTRL_C: KeyBinding = key_hint::ctrl(KeyCode::Char('c'));
const KEY_UP: KeyBinding = key_hint::plain(KeyCode::Up);
const KEY_DOWN: KeyBinding = key_hint::plain(KeyCode::Down);
const KEY_K: KeyBinding = key_hint::plain(KeyCode::Char('k'));
const KEY_J: KeyBinding = key_hint::plain(KeyCode::Char('j'));
const KEY_PAGE_UP: KeyBinding = key_hint::plain(KeyCode::PageUp);
const KEY_PAGE_DOWN: KeyBinding = key_hint::plain(KeyCode::PageDown);
const KEY_SPACE: KeyBinding = key_hint::plain(KeyCode::Char(' '));
const KEY_HOME: KeyBinding = key_hint::plain(KeyCode::Home);
const KEY_END: KeyBinding = key_hint::plain(KeyCode::End);
const KEY_MENU: KeyBinding = key_hint::plain(KeyCode::Char('m'));
const KEY_TAB: KeyBinding = key_hint::plain(KeyCode::Tab);
const KEY_ENTER: KeyBinding = key_hint::plain(KeyCode::Enter);
const KEY_ESC: KeyBinding = key_hint::plain(KeyCode::Esc);

fn viewport_height(total_rows: u16) -> u16 {
    total_rows.saturating_sub(NAV_HEIGHT + FOOTER_HEIGHT).max(1)
}

pub(crate) struct App {
    content: Content,
    view: ViewState,
    scroll: ScrollState,
    page: PageView,
    form: ContactFormState,
    toasts: ToastStack,
    size: (u16, u16),
    next_frame: Option<Instant>,
    needs_redraw: bool,
    should_exit: bool,
}

impl App {
    pub(crate) fn new(content: Content, width: u16, height: u16) -> Self {
        let form = ContactFormState::new();
        let page = PageView::new(&content, &form, width);
        let scroll = ScrollState::new(page.max_scroll(viewport_height(height)));
        let mut view = ViewState::new();
        view.sync_active_section(&page.section_tops(), scroll.offset());
        Self {
            content,
            view,
            scroll,
            page,
            form,
            toasts: ToastStack::new(),
            size: (width, height),
            next_frame: None,
            needs_redraw: true,
            should_exit: false,
        }
    }

    /// Smooth-scroll to `id` and close the menu. Unknown sections scroll
    /// nowhere; the menu closes regardless.
    pub(crate) fn navigate_to(&mut self, id: SectionId) {
        if let Some(target) = self.view.navigate(&self.page.section_tops(), id) {
            self.scroll.animate_to(target);
            self.schedule_frame();
        }
        self.needs_redraw = true;
    }

    fn schedule_frame(&mut self) {
        if self.next_frame.is_none() {
            self.next_frame = Some(Instant::now());
        }
    }

    pub(crate) fn run(&mut self, terminal: &mut Tui) -> Result<()> {
        let (tx, rx) = channel();
        spawn_input_thread(AppEventSender::new(tx));

        while !self.should_exit {
            if self.needs_redraw {
                terminal.draw(|frame| self.render(frame))?;
                self.needs_redraw = false;
            }
            let timeout = self
                .next_timer_deadline()
                .map(|deadline| deadline.saturating_duration_since(Instant::now()))
                .unwrap_or(IDLE_POLL);
            match rx.recv_timeout(timeout) {
                Ok(AppEvent::Key(key)) => self.handle_key(key),
                Ok(AppEvent::Resize(width, height)) => self.handle_resize(width, height),
                Ok(AppEvent::ExitRequest) => self.should_exit = true,
                Err(RecvTimeoutError::Timeout) => {}
                Err(RecvTimeoutError::Disconnected) => break,
            }
            self.advance_timers(Instant::now());
        }
        Ok(())
    }

    fn next_timer_deadline(&self) -> Option<Instant> {
        match (self.next_frame, self.toasts.next_deadline()) {
            (Some(frame), Some(toast)) => Some(frame.min(toast)),
            (frame, toast) => frame.or(toast),
        }
    }

    fn advance_timers(&mut self, now: Instant) {
        if let Some(frame_at) = self.next_frame
            && now >= frame_at
        {
            if self.scroll.step_animation() {
                self.sync_active();
                self.needs_redraw = true;
            }
            self.next_frame = self.scroll.is_animating().then(|| now + FRAME_INTERVAL);
        }
        if self.toasts.expire_due(now) {
            self.needs_redraw = true;
        }
    }

    fn sync_active(&mut self) {
        if self
            .view
            .sync_active_section(&self.page.section_tops(), self.scroll.offset())
        {
            self.needs_redraw = true;
        }
    }

    fn handle_resize(&mut self, width: u16, height: u16) {
        self.size = (width, height);
        self.rebuild_page();
    }

    /// Re-lay the page out and re-derive everything that depends on it.
    fn rebuild_page(&mut self) {
        let (width, height) = self.size;
        self.page.rebuild(&self.content, &self.form, width);
        self.scroll
            .set_max_offset(self.page.max_scroll(viewport_height(height)));
        self.view
            .sync_active_section(&self.page.section_tops(), self.scroll.offset());
        self.needs_redraw = true;
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if key.kind == KeyEventKind::Release {
            return;
        }

        // Quits from anywhere, including the form.
        if KEY_CTRL_C.is_press(key) {
            self.should_exit = true;
            return;
        }

        if self.form.is_active() {
            match self.form.handle_key(key) {
                FormEvent::Submitted => {
                    contact_form::submit(&mut self.form, &mut self.toasts);
                    self.rebuild_page();
                }
                FormEvent::Changed | FormEvent::Exited => self.rebuild_page(),
                FormEvent::None => {}
            }
            return;
        }

        if self.view.menu_open() {
            match key {
                e if KEY_UP.is_press(e) || KEY_K.is_press(e) => {
                    self.view.menu_up();
                    self.needs_redraw = true;
                }
                e if KEY_DOWN.is_press(e) || KEY_J.is_press(e) => {
                    self.view.menu_down();
                    self.needs_redraw = true;
                }
                e if KEY_ENTER.is_press(e) => {
                    let selection = self.view.menu_selection();
                    self.navigate_to(selection);
                }
                e if KEY_ESC.is_press(e) || KEY_MENU.is_press(e) => {
                    self.view.close_menu();
                    self.needs_redraw = true;
                }
                _ => {}
            }
            return;
        }

        let page_rows = i32::from(viewport_height(self.size.1));
        match key {
            e if KEY_Q.is_press(e) => self.should_exit = true,
            e if KEY_UP.is_press(e) || KEY_K.is_press(e) => self.scroll_by(-1),
            e if KEY_DOWN.is_press(e) || KEY_J.is_press(e) => self.scroll_by(1),
            e if KEY_PAGE_UP.is_press(e) => self.scroll_by(-page_rows),
            e if KEY_PAGE_DOWN.is_press(e) || KEY_SPACE.is_press(e) => self.scroll_by(page_rows),
            e if KEY_HOME.is_press(e) => {
                self.scroll.scroll_to_top();
                self.sync_active();
                self.needs_redraw = true;
            }
            e if KEY_END.is_press(e) => {
                self.scroll.scroll_to_bottom();
                self.sync_active();
                self.needs_redraw = true;
            }
            e if KEY_MENU.is_press(e) => {
                self.view.toggle_menu();
                self.needs_redraw = true;
            }
            e if KEY_TAB.is_press(e) => {
                self.navigate_to(SectionId::Contact);
                self.form.focus();
                self.rebuild_page();
            }
            _ => {
                if let KeyCode::Char(digit @ '1'..='5') = key.code {
                    let index = usize::from(digit as u8 - b'1');
                    if let Some(section) = SectionId::in_order().nth(index) {
                        self.navigate_to(section);
                    }
                }
            }
        }
    }

    fn scroll_by(&mut self, delta: i32) {
        self.scroll.scroll_by(delta);
        self.sync_active();
        self.needs_redraw = true;
    }

    fn render(&self, frame: &mut Frame<'_>) {
        let area = frame.area();
        let buf = frame.buffer_mut();

        let nav_area = Rect::new(area.x, area.y, area.width, NAV_HEIGHT.min(area.height));
        let page_area = Rect::new(
            area.x,
            area.y.saturating_add(NAV_HEIGHT),
            area.width,
            area.height.saturating_sub(NAV_HEIGHT + FOOTER_HEIGHT),
        );
        let footer_area = Rect::new(
            area.x,
            area.bottom().saturating_sub(FOOTER_HEIGHT),
            area.width,
            FOOTER_HEIGHT.min(area.height),
        );

        self.page.render(page_area, buf, self.scroll.offset());
        nav::render_nav(
            nav_area,
            buf,
            &self.content.profile.brand,
            self.view.active_section(),
        );
        if self.view.menu_open() {
            nav::render_menu(area, buf, self.view.menu_cursor(), self.view.active_section());
        }
        self.toasts.render(page_area, buf);

        let context = if self.form.is_active() {
            FooterContext::Form
        } else if self.view.menu_open() {
            FooterContext::Menu
        } else {
            FooterContext::Page
        };
        footer::render_footer(footer_area, buf, context);
    }
}

fn spawn_input_thread(sender: AppEventSender) {
    thread::spawn(move || {
        loop {
            match crossterm::event::read() {
                Ok(Event::Key(key)) => sender.send(AppEvent::Key(key)),
                Ok(Event::Resize(width, height)) => sender.send(AppEvent::Resize(width, height)),
                Ok(_) => {}
                Err(err) => {
                    tracing::error!("input thread terminated: {err}");
                    sender.send(AppEvent::ExitRequest);
                    break;
                }
            }
        }
    });
}
