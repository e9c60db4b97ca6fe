//! Scroll position tracking: which section is active, where navigation
//! lands, and how the smooth-scroll animation advances.
//!
//! Offsets are rows into the stacked page content. The two tuning constants
//! below are visual affordances with no semantic meaning and can be changed
//! freely.

use folio_content::SectionId;

/// Rows of lookahead when deciding which section is active: a section counts
/// as reached once the viewport is within this many rows of its top.
pub const SCROLL_SPY_LOOKAHEAD: u16 = 5;

/// Rows left visible above a section's top after navigating to it, so the
/// section heading does not sit flush against the navigation bar.
pub const HEADER_CLEARANCE: u16 = 2;

/// Fraction of the remaining distance covered per animation frame.
const SMOOTH_SCROLL_DIVISOR: u16 = 4;

/// Determine the active section for the given scroll offset.
///
/// Walks `tops` in document order and keeps the last section whose top,
/// less [`SCROLL_SPY_LOOKAHEAD`], has been crossed, i.e. the furthest-down
/// section the viewport has reached. Returns `None` when no section
/// qualifies, in which case nothing is highlighted.
pub fn active_section(tops: &[(SectionId, u16)], offset: u16) -> Option<SectionId> {
    let mut current = None;
    for (id, top) in tops {
        if offset >= top.saturating_sub(SCROLL_SPY_LOOKAHEAD) {
            current = Some(*id);
        }
    }
    current
}

/// Row offset navigation should scroll to for `id`, or `None` when the
/// layout has no such section.
pub fn navigation_target(tops: &[(SectionId, u16)], id: SectionId) -> Option<u16> {
    tops.iter()
        .find(|(section, _)| *section == id)
        .map(|(_, top)| top.saturating_sub(HEADER_CLEARANCE))
}

#[derive(Clone, Copy, Debug)]
struct ScrollAnimation {
    target: u16,
}

/// The viewport's vertical position within the page content.
#[derive(Clone, Debug, Default)]
pub struct ScrollState {
    offset: u16,
    max_offset: u16,
    animation: Option<ScrollAnimation>,
}

impl ScrollState {
    pub fn new(max_offset: u16) -> Self {
        Self {
            offset: 0,
            max_offset,
            animation: None,
        }
    }

    pub fn offset(&self) -> u16 {
        self.offset
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Update the scroll range after a layout change. The offset is clamped
    /// into the new range and any in-flight animation is dropped: its target
    /// was computed against the old layout.
    pub fn set_max_offset(&mut self, max_offset: u16) {
        self.max_offset = max_offset;
        self.offset = self.offset.min(max_offset);
        self.animation = None;
    }

    /// Manual scroll by a signed number of rows. Cancels any smooth-scroll
    /// in flight; the user's hand wins.
    pub fn scroll_by(&mut self, delta: i32) {
        self.animation = None;
        let offset = i64::from(self.offset) + i64::from(delta);
        self.offset = offset.clamp(0, i64::from(self.max_offset)) as u16;
    }

    pub fn scroll_to_top(&mut self) {
        self.animation = None;
        self.offset = 0;
    }

    pub fn scroll_to_bottom(&mut self) {
        self.animation = None;
        self.offset = self.max_offset;
    }

    /// Begin a smooth scroll toward `target`. Fire-and-forget: a new call
    /// simply replaces the previous target.
    pub fn animate_to(&mut self, target: u16) {
        let target = target.min(self.max_offset);
        if target == self.offset {
            self.animation = None;
            return;
        }
        self.animation = Some(ScrollAnimation { target });
    }

    /// Advance the animation by one frame. Returns true when the offset
    /// moved; the animation clears itself on arrival.
    pub fn step_animation(&mut self) -> bool {
        let Some(animation) = self.animation else {
            return false;
        };
        let remaining = animation.target.abs_diff(self.offset);
        let step = (remaining / SMOOTH_SCROLL_DIVISOR).max(1);
        if animation.target > self.offset {
            self.offset = self.offset.saturating_add(step);
        } else {
            self.offset = self.offset.saturating_sub(step);
        }
        if self.offset == animation.target {
            self.animation = None;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn layout() -> Vec<(SectionId, u16)> {
        vec![
            (SectionId::Home, 0),
            (SectionId::About, 40),
            (SectionId::Skills, 80),
            (SectionId::Projects, 120),
            (SectionId::Contact, 160),
        ]
    }

    #[test]
    fn last_crossed_section_wins() {
        let tops = layout();
        assert_eq!(active_section(&tops, 0), Some(SectionId::Home));
        assert_eq!(active_section(&tops, 34), Some(SectionId::Home));
        // 40 - 5 = 35: about becomes active within the lookahead window.
        assert_eq!(active_section(&tops, 35), Some(SectionId::About));
        assert_eq!(active_section(&tops, 200), Some(SectionId::Contact));
    }

    #[test]
    fn no_section_crossed_yields_none() {
        let tops = vec![(SectionId::About, 50), (SectionId::Skills, 90)];
        assert_eq!(active_section(&tops, 10), None);
        assert_eq!(active_section(&tops, 45), Some(SectionId::About));
    }

    #[test]
    fn empty_layout_yields_none() {
        assert_eq!(active_section(&[], 100), None);
    }

    proptest! {
        /// The active section is always the lowest section whose top minus
        /// the lookahead has been crossed, for any offset.
        #[test]
        fn active_section_matches_reference(offset in 0u16..400) {
            let tops = layout();
            let expected = tops
                .iter()
                .filter(|(_, top)| offset >= top.saturating_sub(SCROLL_SPY_LOOKAHEAD))
                .map(|(id, _)| *id)
                .next_back();
            prop_assert_eq!(active_section(&tops, offset), expected);
        }
    }

    #[test]
    fn navigation_target_subtracts_header_clearance() {
        let tops = layout();
        assert_eq!(
            navigation_target(&tops, SectionId::Skills),
            Some(80 - HEADER_CLEARANCE)
        );
        // The first section saturates at the top of the page.
        assert_eq!(navigation_target(&tops, SectionId::Home), Some(0));
    }

    #[test]
    fn navigation_target_for_unknown_layout_is_none() {
        let tops = vec![(SectionId::Home, 0)];
        assert_eq!(navigation_target(&tops, SectionId::Contact), None);
    }

    #[test]
    fn animation_converges_on_target() {
        let mut scroll = ScrollState::new(200);
        scroll.animate_to(100);
        let mut frames = 0;
        while scroll.is_animating() {
            assert!(scroll.step_animation());
            frames += 1;
            assert!(frames < 200, "animation failed to converge");
        }
        assert_eq!(scroll.offset(), 100);
    }

    #[test]
    fn animation_converges_upward_too() {
        let mut scroll = ScrollState::new(200);
        scroll.scroll_by(150);
        scroll.animate_to(20);
        while scroll.is_animating() {
            scroll.step_animation();
        }
        assert_eq!(scroll.offset(), 20);
    }

    #[test]
    fn manual_scroll_cancels_animation() {
        let mut scroll = ScrollState::new(200);
        scroll.animate_to(100);
        assert!(scroll.is_animating());
        scroll.scroll_by(1);
        assert!(!scroll.is_animating());
        assert_eq!(scroll.offset(), 1);
    }

    #[test]
    fn scroll_by_clamps_to_range() {
        let mut scroll = ScrollState::new(10);
        scroll.scroll_by(-5);
        assert_eq!(scroll.offset(), 0);
        scroll.scroll_by(100);
        assert_eq!(scroll.offset(), 10);
    }

    #[test]
    fn layout_change_clamps_offset_and_drops_animation() {
        let mut scroll = ScrollState::new(200);
        scroll.scroll_by(180);
        scroll.animate_to(10);
        scroll.set_max_offset(50);
        assert_eq!(scroll.offset(), 50);
        assert!(!scroll.is_animating());
    }
}
