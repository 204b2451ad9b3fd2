// Copyright 2025 the Pinpoint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Window events, listener registrations and per-event responses.
//!
//! ## Listener table
//!
//! [`LISTENERS`] lists every window listener the overlay needs. Click and context-menu are
//! registered in the [`ListenerPhase::Capture`] phase so the overlay sees them before any
//! page handler and can veto them; keyboard, pointer-move and blur listen in the
//! [`ListenerPhase::Bubble`] phase and never suppress anything.

use kurbo::Point;
use pinpoint_targeting::KeyInput;

/// DOM event types the overlay listens for.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// `click`
    Click,
    /// `contextmenu`
    ContextMenu,
    /// `keydown`
    KeyDown,
    /// `keyup`
    KeyUp,
    /// `mousemove`
    MouseMove,
    /// `blur`
    Blur,
}

impl EventKind {
    /// DOM event type name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Click => "click",
            Self::ContextMenu => "contextmenu",
            Self::KeyDown => "keydown",
            Self::KeyUp => "keyup",
            Self::MouseMove => "mousemove",
            Self::Blur => "blur",
        }
    }
}

/// Phase a window listener is registered for.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ListenerPhase {
    /// Root to target, before page handlers on descendants.
    Capture,
    /// Target to root; at the window this runs after page handlers.
    Bubble,
}

/// One window listener registration.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ListenerSpec {
    /// Event type.
    pub kind: EventKind,
    /// Registration phase.
    pub phase: ListenerPhase,
}

impl ListenerSpec {
    const fn new(kind: EventKind, phase: ListenerPhase) -> Self {
        Self { kind, phase }
    }
}

/// Every listener the overlay registers on mount and removes on unmount.
pub const LISTENERS: [ListenerSpec; 6] = [
    ListenerSpec::new(EventKind::Click, ListenerPhase::Capture),
    ListenerSpec::new(EventKind::ContextMenu, ListenerPhase::Capture),
    ListenerSpec::new(EventKind::KeyDown, ListenerPhase::Bubble),
    ListenerSpec::new(EventKind::KeyUp, ListenerPhase::Bubble),
    ListenerSpec::new(EventKind::MouseMove, ListenerPhase::Bubble),
    ListenerSpec::new(EventKind::Blur, ListenerPhase::Bubble),
];

/// A pointer event as delivered to a window listener.
#[derive(Clone, Debug, PartialEq)]
pub struct PointerInput<N> {
    /// The event target, or `None` when it is not an element (a text node, the document).
    pub target: Option<N>,
    /// Client position, when the event carries one.
    pub position: Option<Point>,
}

impl<N> PointerInput<N> {
    /// A pointer event on `element` at `position`.
    pub fn on(element: N, position: Point) -> Self {
        Self {
            target: Some(element),
            position: Some(position),
        }
    }

    /// A pointer event whose target is not an element.
    pub fn detached(position: Option<Point>) -> Self {
        Self {
            target: None,
            position,
        }
    }
}

/// A window-level event.
#[derive(Clone, Debug, PartialEq)]
pub enum WindowEvent<N> {
    /// Primary-button click.
    Click(PointerInput<N>),
    /// Context-menu request.
    ContextMenu(PointerInput<N>),
    /// Key pressed.
    KeyDown(KeyInput),
    /// Key released.
    KeyUp(KeyInput),
    /// Pointer moved.
    MouseMove(PointerInput<N>),
    /// Window lost focus.
    Blur,
}

impl<N> WindowEvent<N> {
    /// The DOM event type.
    pub const fn kind(&self) -> EventKind {
        match self {
            Self::Click(_) => EventKind::Click,
            Self::ContextMenu(_) => EventKind::ContextMenu,
            Self::KeyDown(_) => EventKind::KeyDown,
            Self::KeyUp(_) => EventKind::KeyUp,
            Self::MouseMove(_) => EventKind::MouseMove,
            Self::Blur => EventKind::Blur,
        }
    }
}

/// What the host must do with the event after the overlay's listener ran.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct EventResponse {
    /// Call `preventDefault()`.
    pub prevent_default: bool,
    /// Call `stopPropagation()`; page handlers never see the event.
    pub stop_propagation: bool,
}

impl EventResponse {
    /// Leave the event alone.
    pub const PASS: Self = Self {
        prevent_default: false,
        stop_propagation: false,
    };

    /// Suppress the default action only.
    pub const PREVENT_DEFAULT: Self = Self {
        prevent_default: true,
        stop_propagation: false,
    };

    /// Suppress the default action and stop propagation.
    pub const SUPPRESS: Self = Self {
        prevent_default: true,
        stop_propagation: true,
    };

    /// Whether the page's own handlers still run.
    pub const fn reaches_page(self) -> bool {
        !self.stop_propagation
    }
}
