// Copyright 2025 the Pinpoint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Serializable summaries of resolved instances.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

use crate::walker::PropValue;

/// Where a component instance was authored.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceLocation {
    /// Source file path as recorded by the build.
    pub file_name: String,
    /// 1-based line.
    pub line_number: u32,
    /// 1-based column.
    pub column_number: u32,
}

impl SourceLocation {
    /// Create a location.
    pub fn new(file_name: impl Into<String>, line_number: u32, column_number: u32) -> Self {
        Self {
            file_name: file_name.into(),
            line_number,
            column_number,
        }
    }

    /// `file:line:column`, the form editors and terminals understand.
    pub fn to_path(&self) -> String {
        format!(
            "{}:{}:{}",
            self.file_name, self.line_number, self.column_number
        )
    }
}

/// One resolved component instance.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentDescriptor {
    /// Display name.
    pub name: String,
    /// Shallow snapshot of the serializable props.
    pub props: Map<String, Value>,
    /// Authoring location.
    pub source: SourceLocation,
    /// Location after the path modifier was applied.
    pub path_to_source: String,
}

/// Shallow, best-effort snapshot of an instance's props.
///
/// Strings, finite numbers, booleans and symbol descriptions are kept. `children`,
/// functions, objects, null, undefined and non-finite numbers are dropped.
pub fn snapshot_props(props: &[(String, PropValue)]) -> Map<String, Value> {
    props
        .iter()
        .filter(|(key, _)| key != "children")
        .filter_map(|(key, value)| {
            let value = match value {
                PropValue::Str(s) => Value::String(s.clone()),
                PropValue::Number(n) => Value::Number(Number::from_f64(*n)?),
                PropValue::Bool(b) => Value::Bool(*b),
                PropValue::Symbol(description) => Value::String(format!("Symbol({description})")),
                PropValue::Null
                | PropValue::Undefined
                | PropValue::Function
                | PropValue::Object => return None,
            };
            Some((key.clone(), value))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn snapshot_keeps_primitives_in_order() {
        let props = vec![
            ("title".to_string(), PropValue::Str("Hello".into())),
            ("children".to_string(), PropValue::Str("text".into())),
            ("count".to_string(), PropValue::Number(3.0)),
            ("onClick".to_string(), PropValue::Function),
            ("style".to_string(), PropValue::Object),
            ("open".to_string(), PropValue::Bool(false)),
            ("kind".to_string(), PropValue::Symbol("primary".into())),
            ("ratio".to_string(), PropValue::Number(f64::NAN)),
            ("ref".to_string(), PropValue::Null),
            ("hidden".to_string(), PropValue::Undefined),
        ];
        let snap = snapshot_props(&props);
        assert_eq!(
            Value::Object(snap.clone()),
            json!({
                "title": "Hello",
                "count": 3.0,
                "open": false,
                "kind": "Symbol(primary)",
            })
        );
        let keys: Vec<&str> = snap.keys().map(String::as_str).collect();
        assert_eq!(keys, ["title", "count", "open", "kind"]);
    }

    #[test]
    fn null_props_are_dropped() {
        let snap = snapshot_props(&[("ref".to_string(), PropValue::Null)]);
        assert!(snap.is_empty(), "null prop kept: {snap:?}");
    }

    #[test]
    fn descriptor_uses_camel_case_wire_names() {
        let descriptor = ComponentDescriptor {
            name: "Card".into(),
            props: Map::new(),
            source: SourceLocation::new("src/Card.tsx", 10, 3),
            path_to_source: "src/Card.tsx:10:3".into(),
        };
        assert_eq!(
            serde_json::to_value(&descriptor).unwrap(),
            json!({
                "name": "Card",
                "props": {},
                "source": { "fileName": "src/Card.tsx", "lineNumber": 10, "columnNumber": 3 },
                "pathToSource": "src/Card.tsx:10:3",
            })
        );
    }

    #[test]
    fn location_renders_as_editor_path() {
        assert_eq!(
            SourceLocation::new("/app/src/App.jsx", 7, 1).to_path(),
            "/app/src/App.jsx:7:1"
        );
    }
}
