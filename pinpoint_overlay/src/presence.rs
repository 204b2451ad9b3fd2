// Copyright 2025 the Pinpoint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Presence marking: the DOM hooks that make targeting visible.

use pinpoint_targeting::Mode;

use crate::dom::Document;

/// Body attribute carrying the mode name while hovering.
pub const MODE_ATTRIBUTE: &str = "data-click-to-component";

/// Attribute marking the hovered element.
pub const TARGET_ATTRIBUTE: &str = "data-click-to-component-target";

/// Body custom property holding the targeting cursor.
pub const CURSOR_PROPERTY: &str = "--click-to-component-cursor";

/// Cursor shown while hovering.
pub const HOVER_CURSOR: &str = "crosshair";

/// Tracks which element currently carries [`TARGET_ATTRIBUTE`].
///
/// [`apply`](Self::apply) derives the marks from `(mode, target)` alone, so calling it
/// again with the same inputs leaves the document unchanged.
#[derive(Clone, Debug)]
pub struct PresenceIndicator<N> {
    marked: Option<N>,
}

impl<N> Default for PresenceIndicator<N> {
    fn default() -> Self {
        Self { marked: None }
    }
}

impl<N: Clone> PresenceIndicator<N> {
    /// An indicator with nothing marked.
    pub fn new() -> Self {
        Self::default()
    }

    /// The element currently marked, if any.
    pub fn marked(&self) -> Option<&N> {
        self.marked.as_ref()
    }

    /// Bring the document in line with `mode` and `target`.
    pub fn apply<D: Document<N>>(&mut self, doc: &mut D, mode: Mode, target: Option<&N>) {
        if let Some(previous) = self.marked.take() {
            doc.set_element_attribute(&previous, TARGET_ATTRIBUTE, None);
        }
        match (mode, target) {
            (Mode::Hover(_), Some(target)) => {
                doc.set_body_attribute(MODE_ATTRIBUTE, Some(mode.as_str()));
                doc.set_element_attribute(target, TARGET_ATTRIBUTE, Some(mode.as_str()));
                doc.set_body_style_property(CURSOR_PROPERTY, Some(HOVER_CURSOR));
                self.marked = Some(target.clone());
            }
            // No target yet: only the previous mark is cleared.
            (Mode::Hover(_), None) => {}
            (Mode::Idle, _) => clear_body::<N, D>(doc),
        }
    }

    /// Remove every mark.
    pub fn clear<D: Document<N>>(&mut self, doc: &mut D) {
        self.apply(doc, Mode::Idle, None);
    }
}

fn clear_body<N, D: Document<N>>(doc: &mut D) {
    doc.set_body_attribute(MODE_ATTRIBUTE, None);
    doc.set_body_style_property(CURSOR_PROPERTY, None);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::Page;
    use pinpoint_targeting::Trigger;

    const HOVER: Mode = Mode::Hover(Trigger::AltKey);

    #[test]
    fn hover_marks_body_target_and_cursor() {
        let mut page = Page::sample();
        let mut presence = PresenceIndicator::new();
        presence.apply(&mut page, HOVER, Some(&Page::TITLE));

        assert_eq!(page.body_attribute(MODE_ATTRIBUTE), Some("HOVER"));
        assert_eq!(page.body_style(CURSOR_PROPERTY), Some("crosshair"));
        assert_eq!(page.attribute(Page::TITLE, TARGET_ATTRIBUTE), Some("HOVER"));
        assert_eq!(presence.marked(), Some(&Page::TITLE));
    }

    #[test]
    fn moving_the_target_moves_the_mark() {
        let mut page = Page::sample();
        let mut presence = PresenceIndicator::new();
        presence.apply(&mut page, HOVER, Some(&Page::TITLE));
        presence.apply(&mut page, HOVER, Some(&Page::CARD));

        assert_eq!(page.attribute(Page::TITLE, TARGET_ATTRIBUTE), None);
        assert_eq!(page.attribute(Page::CARD, TARGET_ATTRIBUTE), Some("HOVER"));
        assert_eq!(page.marked_elements(), vec![Page::CARD]);
    }

    #[test]
    fn idle_clears_everything() {
        let mut page = Page::sample();
        let mut presence = PresenceIndicator::new();
        presence.apply(&mut page, HOVER, Some(&Page::TITLE));
        presence.apply(&mut page, Mode::Idle, Some(&Page::TITLE));

        assert_eq!(page.body_attribute(MODE_ATTRIBUTE), None);
        assert_eq!(page.body_style(CURSOR_PROPERTY), None);
        assert!(page.marked_elements().is_empty());
        assert_eq!(presence.marked(), None);
    }

    #[test]
    fn apply_is_idempotent() {
        let mut page = Page::sample();
        let mut presence = PresenceIndicator::new();
        presence.apply(&mut page, HOVER, Some(&Page::CARD));
        let once = page.clone();
        presence.apply(&mut page, HOVER, Some(&Page::CARD));
        assert_eq!(page, once);

        presence.clear(&mut page);
        let cleared = page.clone();
        presence.clear(&mut page);
        assert_eq!(page, cleared);
    }
}
