// Copyright 2025 the Pinpoint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The mounted overlay: input arbitration over the targeting machine.

use core::fmt;

use kurbo::Point;
use pinpoint_messaging::{
    Coords, Delivery, EditorTarget, EditorUrlBuilder, Envelope, Gateway, MessagePort,
    OpenInEditor, PickTrigger, editor_url,
};
use pinpoint_resolver::{ComponentDescriptor, InstanceTreeWalker, Resolver};
use pinpoint_targeting::{KeyInput, Mode, TargetingState, Transition, Trigger};

use crate::config::OverlayConfig;
use crate::dom::{Document, EventListeners};
use crate::events::{EventResponse, LISTENERS, PointerInput, WindowEvent};
use crate::presence::PresenceIndicator;

/// A mounted click-to-component overlay.
///
/// `N` is the host's element handle, `W` walks the framework's instance tree and `P` is the
/// port to the parent window. The host forwards every event of the [`LISTENERS`] table to
/// [`handle_event`](Self::handle_event) and applies the returned [`EventResponse`].
pub struct Overlay<N, W, P> {
    state: TargetingState<N>,
    presence: PresenceIndicator<N>,
    resolver: Resolver<W>,
    gateway: Gateway<P>,
    editor: String,
    url_builder: Box<dyn EditorUrlBuilder>,
    framed: bool,
}

impl<N: fmt::Debug, W: fmt::Debug, P: fmt::Debug> fmt::Debug for Overlay<N, W, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Overlay")
            .field("state", &self.state)
            .field("presence", &self.presence)
            .field("resolver", &self.resolver)
            .field("gateway", &self.gateway)
            .field("editor", &self.editor)
            .field("framed", &self.framed)
            .finish_non_exhaustive()
    }
}

impl<N, W, P> Overlay<N, W, P>
where
    N: Clone + PartialEq,
    W: InstanceTreeWalker<N>,
    P: MessagePort,
{
    /// Register the window listeners, probe embedding and announce readiness.
    pub fn mount<H: EventListeners>(
        config: OverlayConfig,
        walker: W,
        port: P,
        host: &mut H,
    ) -> Self {
        let (editor, path_modifier, url_builder) = config.into_parts();
        let mut resolver = Resolver::new(walker);
        resolver.set_path_modifier(path_modifier);

        for spec in LISTENERS {
            host.add_listener(spec);
        }

        let mut gateway = Gateway::new(port);
        let framed = gateway.is_embedded();
        gateway.notify(&Envelope::ready());
        tracing::debug!(framed, editor = %editor, "overlay mounted");

        Self {
            state: TargetingState::new(),
            presence: PresenceIndicator::new(),
            resolver,
            gateway,
            editor,
            url_builder,
            framed,
        }
    }

    /// Remove the window listeners and every presence mark, returning the port.
    pub fn unmount<H: Document<N> + EventListeners>(mut self, host: &mut H) -> P {
        for spec in LISTENERS {
            host.remove_listener(spec);
        }
        self.presence.clear(host);
        self.state.reset();
        tracing::debug!("overlay unmounted");
        self.gateway.into_port()
    }

    /// Current mode.
    pub fn mode(&self) -> Mode {
        self.state.mode()
    }

    /// Element under the pointer, as last observed.
    pub fn target(&self) -> Option<&N> {
        self.state.target()
    }

    /// Whether the toggle affordance renders as pressed.
    pub fn button_active(&self) -> bool {
        self.state.button_active()
    }

    /// Whether the toggle affordance is shown; only embedded pages get one.
    pub fn show_toggle(&self) -> bool {
        self.framed
    }

    /// The resolver used for picks.
    pub fn resolver(&self) -> &Resolver<W> {
        &self.resolver
    }

    /// The parent-window gateway.
    pub fn gateway(&self) -> &Gateway<P> {
        &self.gateway
    }

    /// The toggle affordance was activated.
    pub fn toggle_targeting<D: Document<N>>(&mut self, doc: &mut D) {
        let transition = self.state.toggle();
        self.after(doc, transition);
    }

    /// Handle one window event.
    pub fn handle_event<D: Document<N>>(
        &mut self,
        doc: &mut D,
        event: &WindowEvent<N>,
    ) -> EventResponse {
        match event {
            WindowEvent::MouseMove(pointer) => {
                self.on_mouse_move(doc, pointer);
                EventResponse::PASS
            }
            WindowEvent::KeyDown(input) => {
                self.on_key(doc, input, TargetingState::on_key_down);
                EventResponse::PASS
            }
            WindowEvent::KeyUp(input) => {
                self.on_key(doc, input, TargetingState::on_key_up);
                EventResponse::PASS
            }
            WindowEvent::Blur => {
                let transition = self.state.on_blur();
                self.after(doc, transition);
                EventResponse::PASS
            }
            WindowEvent::Click(pointer) => self.on_click(doc, pointer),
            WindowEvent::ContextMenu(pointer) => self.on_context_menu(doc, pointer),
        }
    }

    fn on_mouse_move<D: Document<N>>(&mut self, doc: &mut D, pointer: &PointerInput<N>) {
        let Some(element) = &pointer.target else {
            return;
        };
        if self.state.on_pointer_move(element.clone()) && self.state.is_active() {
            self.refresh(doc);
        }
    }

    fn on_key<D: Document<N>>(
        &mut self,
        doc: &mut D,
        input: &KeyInput,
        apply: fn(&mut TargetingState<N>, &KeyInput) -> Transition,
    ) {
        let transition = apply(&mut self.state, input);
        self.after(doc, transition);
    }

    fn on_click<D: Document<N>>(
        &mut self,
        doc: &mut D,
        pointer: &PointerInput<N>,
    ) -> EventResponse {
        let Some(trigger) = self.state.trigger() else {
            return EventResponse::PASS;
        };
        let target = self.state.target().cloned();
        match (trigger, target) {
            (Trigger::Button, Some(target)) => {
                let request = EditorTarget {
                    editor: self.editor.clone(),
                    ..EditorTarget::default()
                };
                let position = pointer.position;
                self.report(doc, &target, &request, PickTrigger::ContextMenu, position);
                self.complete(doc);
            }
            (Trigger::Button, None) => self.complete(doc),
            (Trigger::AltKey, Some(target)) => {
                let components = self.resolver.resolve(&target);
                let Some(nearest) = components.first() else {
                    tracing::info!("[click-to-component] no sourced component under the click");
                    return EventResponse::SUPPRESS;
                };
                let url = editor_url(
                    self.url_builder.as_ref(),
                    &self.editor,
                    &nearest.path_to_source,
                );
                let request = EditorTarget {
                    editor: self.editor.clone(),
                    path_to_source: nearest.path_to_source.clone(),
                    url,
                };
                let position = pointer.position;
                self.send(doc, &target, &request, components, PickTrigger::AltClick, position);
                self.complete(doc);
            }
            (Trigger::AltKey, None) => {}
        }
        EventResponse::SUPPRESS
    }

    fn on_context_menu<D: Document<N>>(
        &mut self,
        doc: &mut D,
        pointer: &PointerInput<N>,
    ) -> EventResponse {
        if !self.state.is_active() {
            return EventResponse::PASS;
        }
        if let Some(element) = &pointer.target {
            let request = EditorTarget {
                editor: self.editor.clone(),
                ..EditorTarget::default()
            };
            self.report(doc, element, &request, PickTrigger::ContextMenu, pointer.position);
        }
        EventResponse::PREVENT_DEFAULT
    }

    /// Resolve `element` and report it with `request`.
    fn report<D: Document<N>>(
        &mut self,
        doc: &D,
        element: &N,
        request: &EditorTarget,
        trigger: PickTrigger,
        position: Option<Point>,
    ) {
        let components = self.resolver.resolve(element);
        self.send(doc, element, request, components, trigger, position);
    }

    fn send<D: Document<N>>(
        &mut self,
        doc: &D,
        element: &N,
        request: &EditorTarget,
        components: Vec<ComponentDescriptor>,
        trigger: PickTrigger,
        position: Option<Point>,
    ) {
        let found = components.len();
        let payload = OpenInEditor::new(request, components, trigger)
            .with_coords(position.map(|p| Coords { x: p.x, y: p.y }))
            .with_clicked_element(doc.summarize(element));
        let selected = payload.selected.name.clone();
        let delivery = self.gateway.notify(&Envelope::open_in_editor(payload));
        if delivery == Delivery::Posted {
            tracing::debug!(%selected, found, trigger = ?trigger, "reported pick");
        }
    }

    fn complete<D: Document<N>>(&mut self, doc: &mut D) {
        let transition = self.state.complete_selection();
        self.after(doc, transition);
    }

    fn after<D: Document<N>>(&mut self, doc: &mut D, transition: Transition) {
        if transition.changed() {
            let mode = self.state.mode().as_str();
            tracing::debug!(mode, ?transition, "targeting mode changed");
            self.refresh(doc);
        }
    }

    fn refresh<D: Document<N>>(&mut self, doc: &mut D) {
        self.presence.apply(doc, self.state.mode(), self.state.target());
    }
}
