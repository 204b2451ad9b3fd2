// Copyright 2025 the Pinpoint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Overlay configuration.

use core::fmt;

use pinpoint_messaging::{DEFAULT_EDITOR, EditorUrlBuilder, SchemeUrl};
use pinpoint_resolver::{IdentityPath, PathModifier};
use serde::Deserialize;

/// Settings fixed at mount time.
///
/// Only [`editor`](Self::editor) is plain data and can be loaded with serde; the path
/// modifier and URL builder are code and default to [`IdentityPath`] and [`SchemeUrl`].
///
/// ```
/// use pinpoint_overlay::OverlayConfig;
///
/// let config: OverlayConfig = serde_json::from_str(r#"{ "editor": "cursor" }"#).unwrap();
/// assert_eq!(config.editor, "cursor");
///
/// let config = OverlayConfig::default()
///     .with_path_modifier(|path: &str| format!("/workspace/{path}"));
/// assert_eq!(config.editor, "vscode");
/// ```
#[derive(Deserialize)]
pub struct OverlayConfig {
    /// Editor identifier used in reports and URLs.
    #[serde(default = "default_editor")]
    pub editor: String,
    #[serde(skip, default = "default_path_modifier")]
    path_modifier: Box<dyn PathModifier>,
    #[serde(skip, default = "default_url_builder")]
    url_builder: Box<dyn EditorUrlBuilder>,
}

fn default_editor() -> String {
    DEFAULT_EDITOR.into()
}

fn default_path_modifier() -> Box<dyn PathModifier> {
    Box::new(IdentityPath)
}

fn default_url_builder() -> Box<dyn EditorUrlBuilder> {
    Box::new(SchemeUrl)
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            editor: default_editor(),
            path_modifier: default_path_modifier(),
            url_builder: default_url_builder(),
        }
    }
}

impl fmt::Debug for OverlayConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OverlayConfig")
            .field("editor", &self.editor)
            .finish_non_exhaustive()
    }
}

impl OverlayConfig {
    /// Use `editor` instead of [`DEFAULT_EDITOR`].
    #[must_use]
    pub fn with_editor(mut self, editor: impl Into<String>) -> Self {
        self.editor = editor.into();
        self
    }

    /// Rewrite every `file:line:column` with `modifier`.
    #[must_use]
    pub fn with_path_modifier(mut self, modifier: impl PathModifier + 'static) -> Self {
        self.path_modifier = Box::new(modifier);
        self
    }

    /// Build editor URLs with `builder`.
    #[must_use]
    pub fn with_url_builder(mut self, builder: impl EditorUrlBuilder + 'static) -> Self {
        self.url_builder = Box::new(builder);
        self
    }

    pub(crate) fn into_parts(self) -> (String, Box<dyn PathModifier>, Box<dyn EditorUrlBuilder>) {
        (self.editor, self.path_modifier, self.url_builder)
    }
}
