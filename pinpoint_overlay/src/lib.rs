// Copyright 2025 the Pinpoint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pinpoint Overlay: click a rendered element, learn which component wrote it.
//!
//! ## Overview
//!
//! The overlay ties the other Pinpoint crates to a live page:
//!
//! - It listens on the window ([`LISTENERS`]) and feeds keyboard, pointer and focus events
//!   into the targeting state machine from `pinpoint_targeting`.
//! - While hovering it marks the page through a [`Document`] so that a stylesheet can
//!   outline the element under the pointer and switch the cursor.
//! - On a pick it resolves the element with `pinpoint_resolver` and reports the result to
//!   the parent window through `pinpoint_messaging`.
//!
//! The host owns the real window. It registers the listeners the overlay asks for, forwards
//! each event to [`Overlay::handle_event`] and applies the returned [`EventResponse`]:
//! click and context-menu are captured so a pick never reaches the page's own handlers.
//!
//! Outside a targeting session the overlay is inert: events pass through untouched and no
//! message is sent.
//!
//! ## Example
//!
//! ```
//! use kurbo::Point;
//! use pinpoint_messaging::{ElementSummary, MessagePort, PortError};
//! use pinpoint_overlay::{
//!     Document, EventListeners, EventResponse, ListenerSpec, Overlay, OverlayConfig,
//!     PointerInput, WindowEvent,
//! };
//! use pinpoint_resolver::{
//!     DebugSource, InstanceInfo, InstanceKind, InstanceTreeWalker, LookupError,
//! };
//! use pinpoint_targeting::{Key, KeyInput, Modifiers};
//! use serde_json::Value;
//!
//! // One element (0) rendered by one component.
//! struct Walker;
//! impl InstanceTreeWalker<u32> for Walker {
//!     type Instance = u32;
//!     fn instance_for(&self, _: &u32) -> Result<Option<u32>, LookupError> {
//!         Ok(Some(0))
//!     }
//!     fn owner_of(&self, _: &u32) -> Result<Option<u32>, LookupError> {
//!         Ok(None)
//!     }
//!     fn describe(&self, _: &u32) -> Result<InstanceInfo, LookupError> {
//!         Ok(InstanceInfo {
//!             kind: InstanceKind::Component { display_name: None, name: Some("Card".into()) },
//!             source: Some(DebugSource::new("src/Card.tsx", 10, 3)),
//!             props: Vec::new(),
//!         })
//!     }
//! }
//!
//! #[derive(Default)]
//! struct Parent(Vec<Value>);
//! impl MessagePort for Parent {
//!     fn is_embedded(&self) -> Result<bool, PortError> {
//!         Ok(true)
//!     }
//!     fn post(&mut self, message: Value, _: &str) -> Result<(), PortError> {
//!         self.0.push(message);
//!         Ok(())
//!     }
//! }
//!
//! #[derive(Default)]
//! struct Window(Vec<ListenerSpec>);
//! impl EventListeners for Window {
//!     fn add_listener(&mut self, spec: ListenerSpec) {
//!         self.0.push(spec);
//!     }
//!     fn remove_listener(&mut self, spec: ListenerSpec) {
//!         self.0.retain(|s| *s != spec);
//!     }
//! }
//! impl Document<u32> for Window {
//!     fn set_body_attribute(&mut self, _: &str, _: Option<&str>) {}
//!     fn set_body_style_property(&mut self, _: &str, _: Option<&str>) {}
//!     fn set_element_attribute(&mut self, _: &u32, _: &str, _: Option<&str>) {}
//!     fn summarize(&self, _: &u32) -> Option<ElementSummary> {
//!         None
//!     }
//! }
//!
//! let mut window = Window::default();
//! let config = OverlayConfig::default();
//! let mut overlay = Overlay::mount(config, Walker, Parent::default(), &mut window);
//!
//! let at = Point::new(10.0, 20.0);
//! let alt = KeyInput::new(Key::Alt, Modifiers::ALT);
//! overlay.handle_event(&mut window, &WindowEvent::KeyDown(alt));
//! overlay.handle_event(&mut window, &WindowEvent::MouseMove(PointerInput::on(0, at)));
//! let response = overlay.handle_event(&mut window, &WindowEvent::Click(PointerInput::on(0, at)));
//! assert_eq!(response, EventResponse::SUPPRESS);
//!
//! let parent = overlay.unmount(&mut window);
//! assert_eq!(parent.0.len(), 2);
//! assert_eq!(parent.0[1]["payload"]["selected"]["pathToSource"], "src/Card.tsx:10:3");
//! ```

mod config;
mod dom;
mod events;
mod overlay;
mod presence;

#[cfg(test)]
mod testing;

pub use config::OverlayConfig;
pub use dom::{Document, EventListeners};
pub use events::{
    EventKind, EventResponse, LISTENERS, ListenerPhase, ListenerSpec, PointerInput, WindowEvent,
};
pub use overlay::Overlay;
pub use presence::{
    CURSOR_PROPERTY, HOVER_CURSOR, MODE_ATTRIBUTE, PresenceIndicator, TARGET_ATTRIBUTE,
};
