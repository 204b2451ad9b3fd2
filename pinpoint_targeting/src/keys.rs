// Copyright 2025 the Pinpoint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keyboard input as seen by the state machine.

bitflags::bitflags! {
    /// Modifier keys held when a keyboard event was produced.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        /// Alt (Option on macOS).
        const ALT   = 0b0000_0001;
        /// Control.
        const CTRL  = 0b0000_0010;
        /// Shift.
        const SHIFT = 0b0000_0100;
        /// Meta (Command on macOS, Windows key elsewhere).
        const META  = 0b0000_1000;
    }
}

/// The logical key of a keyboard event.
///
/// Only the keys the targeting machine reacts to are distinguished.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    /// The Alt key itself.
    Alt,
    /// The Escape key.
    Escape,
    /// Any other key.
    Other,
}

/// A key-down or key-up event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct KeyInput {
    /// Key that changed state.
    pub key: Key,
    /// Modifiers held after the change was applied.
    pub modifiers: Modifiers,
}

impl KeyInput {
    /// Create a key event.
    pub const fn new(key: Key, modifiers: Modifiers) -> Self {
        Self { key, modifiers }
    }

    /// Whether the Alt modifier flag is set on this event.
    pub const fn alt_held(&self) -> bool {
        self.modifiers.contains(Modifiers::ALT)
    }

    /// Whether this key-up event releases the Alt modifier.
    ///
    /// Browsers report the Alt key-up either with `key == Alt` or, when another key
    /// transition is observed after the release, with the flag already cleared.
    pub const fn releases_alt(&self) -> bool {
        matches!(self.key, Key::Alt) || !self.alt_held()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alt_key_up_releases_alt() {
        let up = KeyInput::new(Key::Alt, Modifiers::empty());
        assert!(up.releases_alt());
    }

    #[test]
    fn other_key_up_while_alt_held_does_not_release() {
        let up = KeyInput::new(Key::Other, Modifiers::ALT | Modifiers::SHIFT);
        assert!(up.alt_held());
        assert!(!up.releases_alt());
    }

    #[test]
    fn other_key_up_without_flag_releases() {
        let up = KeyInput::new(Key::Other, Modifiers::CTRL);
        assert!(up.releases_alt());
    }
}
