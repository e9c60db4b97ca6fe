//! Ephemeral UI state, kept separate from rendering so the scroll-spy and
//! navigation behaviors can be exercised without a terminal.

use folio_content::SectionId;

use crate::scroll;

/// Per-session view state: the highlighted navigation entry and the
/// collapsible menu. Scroll position lives in
/// [`ScrollState`](crate::scroll::ScrollState); form fields live in
/// [`ContactFormState`](crate::contact_form::ContactFormState).
#[derive(Clone, Debug, Default)]
pub struct ViewState {
    active_section: Option<SectionId>,
    menu_open: bool,
    menu_cursor: usize,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_section(&self) -> Option<SectionId> {
        self.active_section
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn menu_cursor(&self) -> usize {
        self.menu_cursor
    }

    /// Recompute the active section from the current layout and scroll
    /// offset. Returns true when the highlight changed.
    pub fn sync_active_section(&mut self, tops: &[(SectionId, u16)], offset: u16) -> bool {
        let next = scroll::active_section(tops, offset);
        if next == self.active_section {
            return false;
        }
        self.active_section = next;
        true
    }

    /// Navigate to `id`: returns the target scroll offset when the layout
    /// knows the section, `None` otherwise (a no-op scroll). The menu is
    /// closed in both cases.
    pub fn navigate(&mut self, tops: &[(SectionId, u16)], id: SectionId) -> Option<u16> {
        let target = scroll::navigation_target(tops, id);
        if target.is_none() {
            tracing::debug!("navigation to {id} ignored: not in layout");
        }
        self.menu_open = false;
        target
    }

    /// Open or close the menu. Opening seeds the cursor from the current
    /// highlight so Enter without movement stays put.
    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
        if self.menu_open {
            self.menu_cursor = self
                .active_section
                .and_then(|active| SectionId::in_order().position(|id| id == active))
                .unwrap_or(0);
        }
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    pub fn menu_up(&mut self) {
        let len = SectionId::in_order().count();
        self.menu_cursor = self.menu_cursor.checked_sub(1).unwrap_or(len - 1);
    }

    pub fn menu_down(&mut self) {
        let len = SectionId::in_order().count();
        self.menu_cursor = (self.menu_cursor + 1) % len;
    }

    /// Section under the menu cursor.
    pub fn menu_selection(&self) -> SectionId {
        SectionId::in_order()
            .nth(self.menu_cursor)
            .unwrap_or(SectionId::Home)
    }
}
