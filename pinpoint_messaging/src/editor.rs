// Copyright 2025 the Pinpoint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Editor URL building.

/// Editor used when the embedder does not pick one.
pub const DEFAULT_EDITOR: &str = "vscode";

/// Builds the URL an editor registers for opening `file:line:column`.
///
/// Returning `None` means no URL could be built; the report then carries an empty URL.
/// Any `Fn(&str, &str) -> Option<String>` closure taking `(editor, path_to_source)` is a
/// builder.
pub trait EditorUrlBuilder {
    /// URL for opening `path_to_source` in `editor`.
    fn build(&self, editor: &str, path_to_source: &str) -> Option<String>;
}

impl<F: Fn(&str, &str) -> Option<String>> EditorUrlBuilder for F {
    fn build(&self, editor: &str, path_to_source: &str) -> Option<String> {
        self(editor, path_to_source)
    }
}

/// `<editor>://file/<path>` URLs, as registered by VS Code and its forks.
///
/// Absolute paths are joined without a second slash (`vscode://file/abs/path`), which
/// some editors would otherwise misread as a host name.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SchemeUrl;

impl EditorUrlBuilder for SchemeUrl {
    fn build(&self, editor: &str, path_to_source: &str) -> Option<String> {
        if editor.is_empty() || path_to_source.is_empty() {
            return None;
        }
        Some(if path_to_source.starts_with('/') {
            format!("{editor}://file{path_to_source}")
        } else {
            format!("{editor}://file/{path_to_source}")
        })
    }
}

/// Build a URL with `builder`, degrading to an empty string.
pub fn editor_url(builder: &dyn EditorUrlBuilder, editor: &str, path_to_source: &str) -> String {
    builder.build(editor, path_to_source).unwrap_or_else(|| {
        tracing::debug!(editor, path_to_source, "no editor url; reporting empty url");
        String::new()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_and_absolute_paths() {
        assert_eq!(
            SchemeUrl.build("vscode", "src/Card.tsx:10:3").as_deref(),
            Some("vscode://file/src/Card.tsx:10:3")
        );
        assert_eq!(
            SchemeUrl.build("cursor", "/app/src/Card.tsx:10:3").as_deref(),
            Some("cursor://file/app/src/Card.tsx:10:3")
        );
    }

    #[test]
    fn failures_degrade_to_empty_url() {
        assert_eq!(editor_url(&SchemeUrl, "", "src/Card.tsx:1:1"), "");
        let refuse = |_: &str, _: &str| -> Option<String> { None };
        assert_eq!(editor_url(&refuse, "vscode", "src/Card.tsx:1:1"), "");
    }
}
