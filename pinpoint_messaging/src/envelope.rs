// Copyright 2025 the Pinpoint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The wire schema: envelope, message types and the "open-in-editor" payload.

use std::collections::BTreeMap;

use pinpoint_resolver::{ComponentDescriptor, SourceLocation};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Source tag carried by every envelope.
pub const MESSAGE_SOURCE: &str = "click-to-component";

/// Protocol version carried by every envelope.
pub const MESSAGE_VERSION: u32 = 1;

/// Name shown for the selection when no instance could be resolved.
pub const UNKNOWN_COMPONENT: &str = "Unknown";

/// A message to the parent window with its fixed source tag and version.
///
/// Envelopes can only be built through [`Envelope::ready`] and [`Envelope::open_in_editor`],
/// so the source tag and version are always the current ones.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Envelope {
    source: &'static str,
    version: u32,
    #[serde(flatten)]
    message: Message,
}

/// The typed body of an [`Envelope`].
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", content = "payload", rename_all = "kebab-case")]
pub enum Message {
    /// The overlay mounted and is listening.
    Ready,
    /// The developer picked an element.
    OpenInEditor(OpenInEditor),
}

impl Message {
    /// Wire name of the message type.
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Ready => "ready",
            Self::OpenInEditor(_) => "open-in-editor",
        }
    }
}

impl Envelope {
    /// The mount announcement.
    pub const fn ready() -> Self {
        Self {
            source: MESSAGE_SOURCE,
            version: MESSAGE_VERSION,
            message: Message::Ready,
        }
    }

    /// A pick report.
    pub fn open_in_editor(payload: OpenInEditor) -> Self {
        Self {
            source: MESSAGE_SOURCE,
            version: MESSAGE_VERSION,
            message: Message::OpenInEditor(payload),
        }
    }

    /// Source tag.
    pub const fn source(&self) -> &'static str {
        self.source
    }

    /// Protocol version.
    pub const fn version(&self) -> u32 {
        self.version
    }

    /// Body.
    pub const fn message(&self) -> &Message {
        &self.message
    }

    /// Serialize into the JSON value handed to the port.
    pub fn to_value(&self) -> Result<Value, serde_json::Error> {
        serde_json::to_value(self)
    }

    /// Receiver-side parsing.
    ///
    /// Returns `None` for anything that is not a well-formed envelope of this protocol:
    /// foreign sources, other versions, unknown types or malformed payloads. Receivers are
    /// expected to ignore such messages rather than fail.
    pub fn decode(value: &Value) -> Option<Self> {
        let object = value.as_object()?;
        if object.get("source")?.as_str()? != MESSAGE_SOURCE {
            return None;
        }
        if object.get("version")?.as_u64()? != u64::from(MESSAGE_VERSION) {
            return None;
        }
        let message = match object.get("type")?.as_str()? {
            "ready" => Message::Ready,
            "open-in-editor" => {
                let payload = object.get("payload")?.clone();
                match serde_json::from_value(payload) {
                    Ok(payload) => Message::OpenInEditor(payload),
                    Err(err) => {
                        tracing::debug!(error = %err, "malformed open-in-editor payload");
                        return None;
                    }
                }
            }
            _ => return None,
        };
        Some(Self {
            source: MESSAGE_SOURCE,
            version: MESSAGE_VERSION,
            message,
        })
    }
}

/// How the pick was made, as reported to the parent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PickTrigger {
    /// Alt held while clicking: a navigation request.
    AltClick,
    /// Context menu, or a click while the toggle affordance is active.
    ContextMenu,
}

/// Pointer position in client coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Coords {
    /// Horizontal position.
    pub x: f64,
    /// Vertical position.
    pub y: f64,
}

/// Flattened summary of the clicked element.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementSummary {
    /// Lower-case tag name.
    pub tag: String,
    /// `id` attribute, when non-empty.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// `class` attribute, possibly empty.
    #[serde(default)]
    pub class_name: String,
    /// `role` attribute, when non-empty.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// `data-*` attributes, keyed by their camel-cased names.
    #[serde(default)]
    pub dataset: BTreeMap<String, String>,
}

/// Editor, path and URL the report was made with.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EditorTarget {
    /// Editor identifier, such as `vscode`.
    pub editor: String,
    /// Requested `file:line:column`, empty when the receiver decides.
    pub path_to_source: String,
    /// Editor URL, empty when the receiver decides.
    pub url: String,
}

/// The component the report is about, merged with the editor request.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectedComponent {
    /// Editor identifier.
    pub editor: String,
    /// Path of the selected component (or the requested path if none matched).
    pub path_to_source: String,
    /// Editor URL.
    pub url: String,
    /// Display name, [`UNKNOWN_COMPONENT`] if none matched.
    pub name: String,
    /// Props snapshot, empty if none matched.
    pub props: Map<String, Value>,
    /// Authoring location; serialized as `{}` when none matched.
    #[serde(with = "source_or_empty")]
    pub source: Option<SourceLocation>,
}

impl SelectedComponent {
    fn from_descriptor(target: &EditorTarget, descriptor: &ComponentDescriptor) -> Self {
        Self {
            editor: target.editor.clone(),
            path_to_source: descriptor.path_to_source.clone(),
            url: target.url.clone(),
            name: descriptor.name.clone(),
            props: descriptor.props.clone(),
            source: Some(descriptor.source.clone()),
        }
    }

    fn unknown(target: &EditorTarget) -> Self {
        Self {
            editor: target.editor.clone(),
            path_to_source: target.path_to_source.clone(),
            url: target.url.clone(),
            name: UNKNOWN_COMPONENT.into(),
            props: Map::new(),
            source: None,
        }
    }
}

/// Payload of an "open-in-editor" message.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenInEditor {
    /// The default selection.
    pub selected: SelectedComponent,
    /// Every resolved instance, nearest first.
    pub components: Vec<ComponentDescriptor>,
    /// How the pick was made.
    pub trigger: PickTrigger,
    /// Pointer position, when the event carried one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coords: Option<Coords>,
    /// The element that was resolved.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clicked_element: Option<ElementSummary>,
}

impl OpenInEditor {
    /// Build a report from a resolution.
    ///
    /// The selection is the component whose path equals the requested path, else the
    /// nearest component, else an [`UNKNOWN_COMPONENT`] record carrying the request.
    pub fn new(
        target: &EditorTarget,
        components: Vec<ComponentDescriptor>,
        trigger: PickTrigger,
    ) -> Self {
        let selected = components
            .iter()
            .find(|c| c.path_to_source == target.path_to_source)
            .or_else(|| components.first())
            .map(|c| SelectedComponent::from_descriptor(target, c))
            .unwrap_or_else(|| SelectedComponent::unknown(target));
        Self {
            selected,
            components,
            trigger,
            coords: None,
            clicked_element: None,
        }
    }

    /// Attach the pointer position.
    pub fn with_coords(mut self, coords: Option<Coords>) -> Self {
        self.coords = coords;
        self
    }

    /// Attach the clicked element summary.
    pub fn with_clicked_element(mut self, element: Option<ElementSummary>) -> Self {
        self.clicked_element = element;
        self
    }
}

mod source_or_empty {
    use pinpoint_resolver::SourceLocation;
    use serde::de::Error as _;
    use serde::ser::SerializeMap as _;
    use serde::{Deserialize as _, Deserializer, Serialize as _, Serializer};
    use serde_json::Value;

    pub(super) fn serialize<S: Serializer>(
        source: &Option<SourceLocation>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match source {
            Some(location) => location.serialize(serializer),
            None => serializer.serialize_map(Some(0))?.end(),
        }
    }

    pub(super) fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<SourceLocation>, D::Error> {
        let value = Value::deserialize(deserializer)?;
        match &value {
            Value::Null => Ok(None),
            Value::Object(map) if map.is_empty() => Ok(None),
            _ => serde_json::from_value(value)
                .map(Some)
                .map_err(D::Error::custom),
        }
    }
}
