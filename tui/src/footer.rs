//! One-line footer of key hints, switched by what currently has key focus.

use crossterm::event::KeyCode;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;

use crate::key_hint;
use crate::key_hint::KeyBinding;
use crate::key_hint::render_key_hints;

pub(crate) const FOOTER_HEIGHT: u16 = 1;

/// Which interaction surface the hints should describe.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum FooterContext {
    Page,
    Menu,
    Form,
}

const KEY_UP: KeyBinding = key_hint::plain(KeyCode::Up);
const KEY_DOWN: KeyBinding = key_hint::plain(KeyCode::Down);
const KEY_PAGE_UP: KeyBinding = key_hint::plain(KeyCode::PageUp);
const KEY_PAGE_DOWN: KeyBinding = key_hint::plain(KeyCode::PageDown);
const KEY_TAB: KeyBinding = key_hint::plain(KeyCode::Tab);
const KEY_ENTER: KeyBinding = key_hint::plain(KeyCode::Enter);
const KEY_ESC: KeyBinding = key_hint::plain(KeyCode::Esc);
const KEY_M: KeyBinding = key_hint::plain(KeyCode::Char('m'));
const KEY_Q: KeyBinding = key_hint::plain(KeyCode::Char('q'));

const PAGE_HINTS: &[(&[KeyBinding], &str)] = &[
    (&[KEY_UP, KEY_DOWN], "to scroll"),
    (&[KEY_PAGE_UP, KEY_PAGE_DOWN], "to page"),
    (&[KEY_M], "for menu"),
    (&[KEY_TAB], "to message me"),
    (&[KEY_Q], "to quit"),
];

const MENU_HINTS: &[(&[KeyBinding], &str)] = &[
    (&[KEY_UP, KEY_DOWN], "to choose"),
    (&[KEY_ENTER], "to go"),
    (&[KEY_ESC], "to close"),
];

const FORM_HINTS: &[(&[KeyBinding], &str)] = &[
    (&[KEY_TAB], "for next field"),
    (&[KEY_ENTER], "to send"),
    (&[KEY_ESC], "to leave the form"),
];

pub(crate) fn render_footer(area: Rect, buf: &mut Buffer, context: FooterContext) {
    if area.width == 0 || area.height == 0 {
        return;
    }
    let pairs = match context {
        FooterContext::Page => PAGE_HINTS,
        FooterContext::Menu => MENU_HINTS,
        FooterContext::Form => FORM_HINTS,
    };
    render_key_hints(area, buf, pairs);
}
