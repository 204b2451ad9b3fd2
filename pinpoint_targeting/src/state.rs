// Copyright 2025 the Pinpoint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mode, trigger and the targeting state machine.

use crate::keys::{Key, KeyInput};

/// Input mechanism that activated hover mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Trigger {
    /// Hover lasts while the Alt modifier is held.
    AltKey,
    /// Hover was latched by the toggle affordance.
    Button,
}

impl Trigger {
    /// Stable lower-case name, used in logs.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AltKey => "alt-key",
            Self::Button => "button",
        }
    }
}

/// Top-level activity of the overlay.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Mode {
    /// No interception; the page owns every event.
    #[default]
    Idle,
    /// Interception is active, entered through the given trigger.
    Hover(Trigger),
}

impl Mode {
    /// The trigger that activated hover mode, or `None` when idle.
    pub const fn trigger(self) -> Option<Trigger> {
        match self {
            Self::Idle => None,
            Self::Hover(trigger) => Some(trigger),
        }
    }

    /// Whether input interception is active.
    pub const fn is_hover(self) -> bool {
        matches!(self, Self::Hover(_))
    }

    /// Upper-case mode name, as written into DOM marker attributes.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "IDLE",
            Self::Hover(_) => "HOVER",
        }
    }
}

/// Result of feeding an event to [`TargetingState`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Transition {
    /// The mode did not change.
    Unchanged,
    /// Hover mode was entered (or re-entered with a different trigger).
    Entered(Trigger),
    /// Hover mode was left; the machine is idle.
    Exited,
}

impl Transition {
    /// Whether the mode changed and presentation should be refreshed.
    pub const fn changed(self) -> bool {
        !matches!(self, Self::Unchanged)
    }
}

/// The targeting state machine: current [`Mode`] plus the element under the pointer.
///
/// `K` is a host handle for an element. The machine never inspects it beyond
/// equality and does not own the element it refers to.
#[derive(Clone, Debug)]
pub struct TargetingState<K> {
    mode: Mode,
    target: Option<K>,
}

impl<K> TargetingState<K> {
    /// Create an idle machine with no target.
    pub const fn new() -> Self {
        Self {
            mode: Mode::Idle,
            target: None,
        }
    }

    /// Current mode.
    pub const fn mode(&self) -> Mode {
        self.mode
    }

    /// Trigger of the current hover session, `None` when idle.
    pub const fn trigger(&self) -> Option<Trigger> {
        self.mode.trigger()
    }

    /// Element currently under the pointer, if any has been seen.
    pub const fn target(&self) -> Option<&K> {
        self.target.as_ref()
    }

    /// Whether input interception is active.
    pub const fn is_active(&self) -> bool {
        self.mode.is_hover()
    }

    /// Pressed state of the toggle affordance: hovering because of the button.
    pub const fn button_active(&self) -> bool {
        matches!(self.mode, Mode::Hover(Trigger::Button))
    }

    /// Key-down: Alt enters alt-key hover from idle; Escape leaves button hover.
    pub fn on_key_down(&mut self, input: &KeyInput) -> Transition {
        match self.mode {
            Mode::Idle if input.alt_held() => self.enter(Trigger::AltKey),
            Mode::Hover(Trigger::Button) if input.key == Key::Escape => self.exit(),
            _ => Transition::Unchanged,
        }
    }

    /// Key-up: releasing Alt leaves alt-key hover.
    pub fn on_key_up(&mut self, input: &KeyInput) -> Transition {
        match self.mode {
            Mode::Hover(Trigger::AltKey) if input.releases_alt() => self.exit(),
            _ => Transition::Unchanged,
        }
    }

    /// Window focus was lost: any hover session ends.
    pub fn on_blur(&mut self) -> Transition {
        if self.mode.is_hover() {
            self.exit()
        } else {
            Transition::Unchanged
        }
    }

    /// The toggle affordance was activated.
    ///
    /// Leaves button hover when it is active, otherwise enters it. Toggling during an
    /// alt-key session converts it into a button session.
    pub fn toggle(&mut self) -> Transition {
        if self.button_active() {
            self.exit()
        } else {
            self.enter(Trigger::Button)
        }
    }

    /// A selection was completed; the session closes.
    pub fn complete_selection(&mut self) -> Transition {
        if self.mode.is_hover() {
            self.exit()
        } else {
            Transition::Unchanged
        }
    }

    /// Drop the target and return to idle, as on unmount.
    pub fn reset(&mut self) {
        self.mode = Mode::Idle;
        self.target = None;
    }

    fn enter(&mut self, trigger: Trigger) -> Transition {
        self.mode = Mode::Hover(trigger);
        Transition::Entered(trigger)
    }

    fn exit(&mut self) -> Transition {
        self.mode = Mode::Idle;
        Transition::Exited
    }
}

impl<K: PartialEq> TargetingState<K> {
    /// Pointer moved over `element`. Returns `true` if the target changed.
    ///
    /// Tracked in every mode so that a session entered later starts on the element
    /// already under the pointer.
    pub fn on_pointer_move(&mut self, element: K) -> bool {
        if self.target.as_ref() == Some(&element) {
            return false;
        }
        self.target = Some(element);
        true
    }
}

impl<K> Default for TargetingState<K> {
    fn default() -> Self {
        Self::new()
    }
}
