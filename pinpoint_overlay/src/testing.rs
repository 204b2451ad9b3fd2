// Copyright 2025 the Pinpoint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! In-memory page, component tree and parent port shared by the unit tests.

use std::collections::BTreeMap;

use pinpoint_messaging::{ElementSummary, MessagePort, PortError};
use pinpoint_resolver::{
    DebugSource, InstanceInfo, InstanceKind, InstanceTreeWalker, LookupError, PropValue,
};
use serde_json::Value;

use crate::dom::{Document, EventListeners};
use crate::events::ListenerSpec;

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Page {
    body_attributes: BTreeMap<String, String>,
    body_styles: BTreeMap<String, String>,
    attributes: Vec<BTreeMap<String, String>>,
    summaries: Vec<ElementSummary>,
    pub(crate) listeners: Vec<ListenerSpec>,
}

impl Page {
    pub(crate) const APP_ROOT: usize = 0;
    pub(crate) const CARD: usize = 1;
    pub(crate) const TITLE: usize = 2;
    /// Rendered outside any component.
    pub(crate) const BARE: usize = 3;
    /// Rendered by a component without source metadata.
    pub(crate) const PLAIN: usize = 4;

    pub(crate) fn sample() -> Self {
        let summary = |tag: &str, class_name: &str| ElementSummary {
            tag: tag.into(),
            class_name: class_name.into(),
            ..ElementSummary::default()
        };
        let mut card = summary("div", "card");
        card.id = Some("card-1".into());
        card.dataset.insert("testid".into(), "card".into());
        let summaries = vec![
            summary("div", "app"),
            card,
            summary("h2", "card-title"),
            summary("span", ""),
            summary("p", ""),
        ];
        Self {
            body_attributes: BTreeMap::new(),
            body_styles: BTreeMap::new(),
            attributes: vec![BTreeMap::new(); summaries.len()],
            summaries,
            listeners: Vec::new(),
        }
    }

    pub(crate) fn body_attribute(&self, name: &str) -> Option<&str> {
        self.body_attributes.get(name).map(String::as_str)
    }

    pub(crate) fn body_style(&self, name: &str) -> Option<&str> {
        self.body_styles.get(name).map(String::as_str)
    }

    pub(crate) fn attribute(&self, element: usize, name: &str) -> Option<&str> {
        self.attributes[element].get(name).map(String::as_str)
    }

    /// Elements carrying any attribute.
    pub(crate) fn marked_elements(&self) -> Vec<usize> {
        (0..self.attributes.len())
            .filter(|&i| !self.attributes[i].is_empty())
            .collect()
    }
}

fn set(map: &mut BTreeMap<String, String>, name: &str, value: Option<&str>) {
    match value {
        Some(value) => {
            map.insert(name.into(), value.into());
        }
        None => {
            map.remove(name);
        }
    }
}

impl Document<usize> for Page {
    fn set_body_attribute(&mut self, name: &str, value: Option<&str>) {
        set(&mut self.body_attributes, name, value);
    }

    fn set_body_style_property(&mut self, name: &str, value: Option<&str>) {
        set(&mut self.body_styles, name, value);
    }

    fn set_element_attribute(&mut self, element: &usize, name: &str, value: Option<&str>) {
        set(&mut self.attributes[*element], name, value);
    }

    fn summarize(&self, element: &usize) -> Option<ElementSummary> {
        self.summaries.get(*element).cloned()
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

/// Component tree behind [`Page::sample`].
///
/// ```text
/// instance  owner  kind                               element
/// 0         -      App        src/App.tsx:5:1         -
/// 1         0      Card       src/Card.tsx:10:3       -
/// 2         1      <div>                              CARD (1)
/// 3         1      <h2>                               TITLE (2)
/// 4         0      <div>                              APP_ROOT (0)
/// 5         -      Anonymous  (no source)             -
/// 6         5      <p>                                PLAIN (4)
/// ```
///
/// `BARE` (3) has no instance.
#[derive(Clone, Debug)]
pub(crate) struct Components {
    owners: Vec<Option<usize>>,
    infos: Vec<InstanceInfo>,
    rendered: Vec<Option<usize>>,
}

impl Components {
    pub(crate) fn sample() -> Self {
        let component = |name: &str, source: Option<DebugSource>, props| InstanceInfo {
            kind: InstanceKind::Component {
                display_name: None,
                name: Some(name.into()),
            },
            source,
            props,
        };
        let host = |tag: &str| InstanceInfo {
            kind: InstanceKind::Host { tag: tag.into() },
            source: None,
            props: Vec::new(),
        };
        Self {
            owners: vec![None, Some(0), Some(1), Some(1), Some(0), None, Some(5)],
            infos: vec![
                component("App", Some(DebugSource::new("src/App.tsx", 5, 1)), Vec::new()),
                component(
                    "Card",
                    Some(DebugSource::new("src/Card.tsx", 10, 3)),
                    vec![
                        ("title".into(), PropValue::Str("Hello".into())),
                        ("onSelect".into(), PropValue::Function),
                    ],
                ),
                host("div"),
                host("h2"),
                host("div"),
                component("Anonymous", None, Vec::new()),
                host("p"),
            ],
            rendered: vec![Some(4), Some(2), Some(3), None, Some(6)],
        }
    }
}

impl InstanceTreeWalker<usize> for Components {
    type Instance = usize;

    fn instance_for(&self, node: &usize) -> Result<Option<usize>, LookupError> {
        self.rendered
            .get(*node)
            .copied()
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

/// Parent window recording everything posted to it.
#[derive(Debug, Default)]
pub(crate) struct Parent {
    /// `None` makes the embedding probe fail.
    pub(crate) embedded: Option<bool>,
    pub(crate) sent: Vec<Value>,
}

impl Parent {
    pub(crate) fn framed() -> Self {
        Self {
            embedded: Some(true),
            sent: Vec::new(),
        }
    }

    pub(crate) fn top_level() -> Self {
        Self {
            embedded: Some(false),
            sent: Vec::new(),
        }
    }

    /// `type` of every message, in order.
    pub(crate) fn types(&self) -> Vec<&str> {
        self.sent
            .iter()
            .filter_map(|message| message["type"].as_str())
            .collect()
    }
}

impl MessagePort for Parent {
    fn is_embedded(&self) -> Result<bool, PortError> {
        self.embedded
            .ok_or_else(|| PortError::CrossOrigin("window.top".into()))
    }

    fn post(&mut self, message: Value, _target_origin: &str) -> Result<(), PortError> {
        self.sent.push(message);
        Ok(())
    }
}
