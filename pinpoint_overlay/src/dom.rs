// Copyright 2025 the Pinpoint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host seams: the document the overlay marks and the window it listens on.

use pinpoint_messaging::ElementSummary;

use crate::events::ListenerSpec;

/// The page document, as far as the overlay writes to it.
///
/// `N` is the host's element handle. Passing `None` as a value removes the attribute or
/// property; removing something that is not set is a no-op.
pub trait Document<N> {
    /// Set or remove an attribute on `<body>`.
    fn set_body_attribute(&mut self, name: &str, value: Option<&str>);

    /// Set or remove a custom style property on `<body>`.
    fn set_body_style_property(&mut self, name: &str, value: Option<&str>);

    /// Set or remove an attribute on `element`.
    fn set_element_attribute(&mut self, element: &N, name: &str, value: Option<&str>);

    /// Summary of `element` for pick reports.
    ///
    /// Return `None` when the element can no longer be inspected.
    fn summarize(&self, element: &N) -> Option<ElementSummary>;
}

/// The window's listener registry.
pub trait EventListeners {
    /// Register the overlay's listener for `spec`.
    fn add_listener(&mut self, spec: ListenerSpec);

    /// Remove the listener registered for `spec`.
    fn remove_listener(&mut self, spec: ListenerSpec);
}
