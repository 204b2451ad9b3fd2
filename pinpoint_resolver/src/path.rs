// Copyright 2025 the Pinpoint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Path modifiers: embedder hooks that rewrite `file:line:column` paths.

use crate::descriptor::SourceLocation;

/// Rewrites a source path before it is reported, for example to map a container path
/// onto the developer's checkout.
///
/// Any `Fn(&str) -> String` closure is a modifier.
pub trait PathModifier {
    /// Rewrite `path`, which has the form `file:line:column`.
    fn modify(&self, path: &str) -> String;
}

impl<F: Fn(&str) -> String> PathModifier for F {
    fn modify(&self, path: &str) -> String {
        self(path)
    }
}

/// The default modifier: leaves paths untouched.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct IdentityPath;

impl PathModifier for IdentityPath {
    fn modify(&self, path: &str) -> String {
        path.to_owned()
    }
}

/// The reported path for `source`: `modifier("file:line:column")`.
pub fn path_to_source(source: &SourceLocation, modifier: &dyn PathModifier) -> String {
    modifier.modify(&source.to_path())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_keeps_path() {
        let source = SourceLocation::new("src/Card.tsx", 10, 3);
        assert_eq!(path_to_source(&source, &IdentityPath), "src/Card.tsx:10:3");
    }

    #[test]
    fn closures_are_modifiers() {
        let source = SourceLocation::new("/workspace/src/Card.tsx", 10, 3);
        let strip = |path: &str| path.replacen("/workspace/", "/home/dev/app/", 1);
        assert_eq!(
            path_to_source(&source, &strip),
            "/home/dev/app/src/Card.tsx:10:3"
        );
    }
}
