// Copyright 2025 the Pinpoint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pinpoint Targeting: the state machine behind "pick a component" mode.
//!
//! ## Overview
//!
//! The overlay is either idle, in which case every input event belongs to the page, or hovering,
//! in which case clicks are intercepted and the element under the pointer is the pick candidate.
//! Hover mode is always entered through a [`Trigger`]:
//!
//! - [`Trigger::AltKey`]: active exactly while the Alt modifier is held.
//! - [`Trigger::Button`]: latched by an explicit toggle affordance until Escape, blur,
//!   a second toggle, or a completed selection.
//!
//! [`Mode`] carries the trigger inside its `Hover` variant, so "hovering without a trigger"
//! cannot be represented.
//!
//! ## Transitions
//!
//! | From | Event | To |
//! |---|---|---|
//! | `Idle` | key-down with Alt held | `Hover(AltKey)` |
//! | any but `Hover(Button)` | toggle | `Hover(Button)` |
//! | `Hover(Button)` | toggle | `Idle` |
//! | `Hover(AltKey)` | Alt released | `Idle` |
//! | `Hover(Button)` | Escape key-down | `Idle` |
//! | `Hover(_)` | blur | `Idle` |
//! | `Hover(_)` | completed selection | `Idle` |
//!
//! Anything else leaves the mode untouched. Pointer movement only updates the tracked target.
//!
//! ## Usage
//!
//! ```
//! use pinpoint_targeting::{Key, KeyInput, Mode, Modifiers, TargetingState, Transition, Trigger};
//!
//! let mut state: TargetingState<u32> = TargetingState::new();
//!
//! // Holding Alt enters hover mode.
//! let t = state.on_key_down(&KeyInput::new(Key::Alt, Modifiers::ALT));
//! assert_eq!(t, Transition::Entered(Trigger::AltKey));
//!
//! // The pointer moves over element 7.
//! state.on_pointer_move(7);
//! assert_eq!(state.target(), Some(&7));
//!
//! // Releasing Alt leaves hover mode; the target is kept for the next session.
//! let t = state.on_key_up(&KeyInput::new(Key::Alt, Modifiers::empty()));
//! assert_eq!(t, Transition::Exited);
//! assert_eq!(state.mode(), Mode::Idle);
//! ```
//!
//! The toggle is its own inverse:
//!
//! ```
//! # use pinpoint_targeting::{Mode, TargetingState};
//! let mut state: TargetingState<u32> = TargetingState::new();
//! state.toggle();
//! assert!(state.button_active());
//! state.toggle();
//! assert_eq!(state.mode(), Mode::Idle);
//! assert_eq!(state.trigger(), None);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod keys;
mod state;

pub use keys::{Key, KeyInput, Modifiers};
pub use state::{Mode, TargetingState, Transition, Trigger};
