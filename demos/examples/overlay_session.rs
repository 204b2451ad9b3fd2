// Copyright 2025 the Pinpoint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A scripted targeting session against an in-memory page.
//!
//! This example shows how a host wires the overlay:
//! - a page whose elements are laid out as rectangles, hit tested with `kurbo`,
//! - a component tree exposed through `InstanceTreeWalker`,
//! - a parent window that prints every message it receives.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p pinpoint_demos --example overlay_session`

use std::collections::BTreeMap;

use kurbo::{Point, Rect};
use pinpoint_messaging::{ElementSummary, Envelope, Message, MessagePort, PortError};
use pinpoint_overlay::{
    Document, EventListeners, ListenerSpec, MODE_ATTRIBUTE, Overlay, OverlayConfig,
    PointerInput, WindowEvent,
};
use pinpoint_resolver::{
    DebugSource, InstanceInfo, InstanceKind, InstanceTreeWalker, LookupError, PropValue,
};
use pinpoint_targeting::{Key, KeyInput, Modifiers};
use serde_json::Value;
use tracing_subscriber::EnvFilter;

/// An element on the page: its box, its tag and the instance that rendered it.
struct Element {
    bounds: Rect,
    tag: &'static str,
    class_name: &'static str,
    rendered_by: usize,
}

#[derive(Default)]
struct Page {
    elements: Vec<Element>,
    body: BTreeMap<String, String>,
    marked: BTreeMap<usize, String>,
    listeners: Vec<ListenerSpec>,
}

impl Page {
    /// Topmost element under `pt`; later elements paint above earlier ones.
    fn hit(&self, pt: Point) -> Option<usize> {
        self.elements.iter().rposition(|e| e.bounds.contains(pt))
    }

    fn pointer(&self, pt: Point) -> PointerInput<usize> {
        match self.hit(pt) {
            Some(element) => PointerInput::on(element, pt),
            None => PointerInput::detached(Some(pt)),
        }
    }
}

impl Document<usize> for Page {
    fn set_body_attribute(&mut self, name: &str, value: Option<&str>) {
        match value {
            Some(value) => self.body.insert(name.into(), value.into()),
            None => self.body.remove(name),
        };
    }

    fn set_body_style_property(&mut self, name: &str, value: Option<&str>) {
        self.set_body_attribute(&format!("style:{name}"), value);
    }

    fn set_element_attribute(&mut self, element: &usize, _name: &str, value: Option<&str>) {
        match value {
            Some(value) => self.marked.insert(*element, value.into()),
            None => self.marked.remove(element),
        };
    }

    fn summarize(&self, element: &usize) -> Option<ElementSummary> {
        let element = self.elements.get(*element)?;
        Some(ElementSummary {
            tag: element.tag.into(),
            class_name: element.class_name.into(),
            ..ElementSummary::default()
        })
    }
}

impl EventListeners for Page {
    fn add_listener(&mut self, spec: ListenerSpec) {
        self.listeners.push(spec);
    }

    fn remove_listener(&mut self, spec: ListenerSpec) {
        self.listeners.retain(|s| *s != spec);
    }
}

/// Instances: 0 App, 1 Card (owned by App), 2 <button> host (owned by Card).
struct Components {
    owners: Vec<Option<usize>>,
    infos: Vec<InstanceInfo>,
    elements: Vec<usize>,
}

impl InstanceTreeWalker<usize> for Components {
    type Instance = usize;

    fn instance_for(&self, node: &usize) -> Result<Option<usize>, LookupError> {
        self.elements
            .get(*node)
            .map(|instance| Some(*instance))
            .ok_or(LookupError::Detached)
    }

    fn owner_of(&self, instance: &usize) -> Result<Option<usize>, LookupError> {
        self.owners
            .get(*instance)
            .copied()
            .ok_or(LookupError::Unmounted)
    }

    fn describe(&self, instance: &usize) -> Result<InstanceInfo, LookupError> {
        self.infos
            .get(*instance)
            .cloned()
            .ok_or(LookupError::Unmounted)
    }
}

/// Parent window that decodes and prints what it receives.
struct PrintingParent;

impl MessagePort for PrintingParent {
    fn is_embedded(&self) -> Result<bool, PortError> {
        Ok(true)
    }

    fn post(&mut self, message: Value, target_origin: &str) -> Result<(), PortError> {
        match Envelope::decode(&message).as_ref().map(Envelope::message) {
            Some(Message::OpenInEditor(pick)) => println!(
                "parent <- open-in-editor ({target_origin}): {} at {:?} via {:?}",
                pick.selected.name, pick.selected.path_to_source, pick.trigger
            ),
            Some(other) => println!("parent <- {} ({target_origin})", other.type_name()),
            None => println!("parent <- ignored foreign message"),
        }
        Ok(())
    }
}

fn component(name: &str, source: DebugSource, props: Vec<(String, PropValue)>) -> InstanceInfo {
    InstanceInfo {
        kind: InstanceKind::Component {
            display_name: None,
            name: Some(name.into()),
        },
        source: Some(source),
        props,
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut page = Page {
        elements: vec![
            Element {
                bounds: Rect::new(0.0, 0.0, 400.0, 300.0),
                tag: "main",
                class_name: "app",
                rendered_by: 0,
            },
            Element {
                bounds: Rect::new(40.0, 40.0, 240.0, 200.0),
                tag: "button",
                class_name: "card-action",
                rendered_by: 2,
            },
        ],
        ..Page::default()
    };
    let walker = Components {
        owners: vec![None, Some(0), Some(1)],
        infos: vec![
            component("App", DebugSource::new("src/App.tsx", 4, 1), Vec::new()),
            component(
                "Card",
                DebugSource::new("src/Card.tsx", 10, 3),
                vec![("title".into(), PropValue::Str("Hello".into()))],
            ),
            InstanceInfo {
                kind: InstanceKind::Host {
                    tag: "button".into(),
                },
                source: None,
                props: Vec::new(),
            },
        ],
        elements: page.elements.iter().map(|e| e.rendered_by).collect(),
    };

    let config = OverlayConfig::default().with_editor("cursor");
    let mut overlay = Overlay::mount(config, walker, PrintingParent, &mut page);
    println!("registered {} window listeners", page.listeners.len());

    let over_button = Point::new(100.0, 100.0);
    let over_app = Point::new(300.0, 250.0);

    // Alt-hover the button and click it.
    let alt_down = WindowEvent::KeyDown(KeyInput::new(Key::Alt, Modifiers::ALT));
    overlay.handle_event(&mut page, &alt_down);
    let moved = WindowEvent::MouseMove(page.pointer(over_button));
    overlay.handle_event(&mut page, &moved);
    println!(
        "hovering: body marker = {:?}, marked elements = {:?}",
        page.body.get(MODE_ATTRIBUTE),
        page.marked.keys().collect::<Vec<_>>()
    );
    let click = WindowEvent::Click(page.pointer(over_button));
    let response = overlay.handle_event(&mut page, &click);
    println!("alt-click reaches page handlers: {}", response.reaches_page());

    // Toggle button targeting and right-click the app shell, then leave with Escape.
    overlay.toggle_targeting(&mut page);
    let menu = WindowEvent::ContextMenu(page.pointer(over_app));
    let response = overlay.handle_event(&mut page, &menu);
    println!("context menu suppressed: {}", response.prevent_default);
    let escape = WindowEvent::KeyDown(KeyInput::new(Key::Escape, Modifiers::empty()));
    overlay.handle_event(&mut page, &escape);
    println!("mode after escape: {}", overlay.mode().as_str());

    let _parent = overlay.unmount(&mut page);
    println!("listeners after unmount: {}", page.listeners.len());
}
