// Copyright 2025 the Pinpoint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pinpoint Messaging: report picks to the parent frame.
//!
//! ## Overview
//!
//! An inspector overlay running inside an embedded page does not navigate or open editors
//! itself. It tells the embedding window what was picked, and the embedder decides. This crate
//! owns that channel:
//!
//! - [`Envelope`] is the versioned wire schema. Every message carries
//!   `source: "click-to-component"` and `version: 1`, followed by a `type` of `"ready"` or
//!   `"open-in-editor"` and, for the latter, an [`OpenInEditor`] payload.
//! - [`MessagePort`] abstracts the window's posting API.
//! - [`Gateway`] posts envelopes when the window is embedded and swallows every failure,
//!   logging it through `tracing`. Messaging can never break the host page.
//! - [`EditorUrlBuilder`] turns `file:line:column` into an editor URL; [`SchemeUrl`] is the
//!   default.
//!
//! Receivers use [`Envelope::decode`], which ignores foreign sources, other versions and
//! unknown types instead of failing.
//!
//! ## Example
//!
//! ```
//! use pinpoint_messaging::{Delivery, Envelope, Gateway, MessagePort, PortError};
//! use serde_json::Value;
//!
//! #[derive(Default)]
//! struct Parent(Vec<Value>);
//!
//! impl MessagePort for Parent {
//!     fn is_embedded(&self) -> Result<bool, PortError> {
//!         Ok(true)
//!     }
//!     fn post(&mut self, message: Value, _origin: &str) -> Result<(), PortError> {
//!         self.0.push(message);
//!         Ok(())
//!     }
//! }
//!
//! let mut gateway = Gateway::new(Parent::default());
//! assert_eq!(gateway.notify(&Envelope::ready()), Delivery::Posted);
//!
//! let received = &gateway.port().0[0];
//! assert_eq!(Envelope::decode(received), Some(Envelope::ready()));
//! ```

mod editor;
mod envelope;
mod gateway;

pub use editor::{DEFAULT_EDITOR, EditorUrlBuilder, SchemeUrl, editor_url};
pub use envelope::{
    Coords, EditorTarget, ElementSummary, Envelope, MESSAGE_SOURCE, MESSAGE_VERSION, Message,
    OpenInEditor, PickTrigger, SelectedComponent, UNKNOWN_COMPONENT,
};
pub use gateway::{Delivery, Gateway, MessagePort, PortError, TARGET_ORIGIN};
