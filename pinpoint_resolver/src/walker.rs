// Copyright 2025 the Pinpoint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The capability interface over a UI framework's instance tree.
//!
//! Everything framework-specific (where the instance hangs off a DOM node, which field
//! links to the rendering owner, how debug source metadata is stored) lives behind
//! [`InstanceTreeWalker`]. The rest of the workspace only sees [`InstanceInfo`].

use crate::descriptor::SourceLocation;

/// Failure while introspecting framework internals.
///
/// The resolver never propagates these; a failed lookup is treated as "no match".
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
    /// The node carries no framework bookkeeping at all.
    #[error("node has no framework instance attached")]
    Detached,
    /// The instance was unmounted while it was being inspected.
    #[error("instance is no longer mounted")]
    Unmounted,
    /// Internal fields were missing or had an unexpected shape.
    #[error("framework introspection failed: {0}")]
    Introspection(String),
}

/// What kind of framework instance a node is, with the naming slots each kind carries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InstanceKind {
    /// A function or class component.
    Component {
        /// Explicit `displayName`, if the author set one.
        display_name: Option<String>,
        /// The function or class name, if the build kept it.
        name: Option<String>,
    },
    /// A host element such as `div`.
    Host {
        /// Element tag.
        tag: String,
    },
    /// A text node.
    Text,
    /// A fragment.
    Fragment,
    /// A context consumer.
    ContextConsumer,
    /// A context provider.
    ContextProvider,
    /// A forward-ref wrapper.
    ForwardRef,
    /// A memo wrapper.
    Memo,
    /// A lazy wrapper.
    Lazy,
    /// A kind this crate does not know, with the framework's numeric tag.
    Other(u32),
}

impl InstanceKind {
    /// Human-readable name, falling back through the naming slots.
    pub fn display_name(&self) -> String {
        match self {
            Self::Component { display_name, name } => display_name
                .as_deref()
                .filter(|s| !s.is_empty())
                .or(name.as_deref().filter(|s| !s.is_empty()))
                .unwrap_or("Anonymous Component")
                .into(),
            Self::Host { tag } => tag.clone(),
            Self::Text => "String".into(),
            Self::Fragment => "React.Fragment".into(),
            Self::ContextConsumer => "Context.Consumer".into(),
            Self::ContextProvider => "Context.Provider".into(),
            Self::ForwardRef => "React.forwardRef".into(),
            Self::Memo => "React.memo".into(),
            Self::Lazy => "React.lazy".into(),
            Self::Other(tag) => format!("Unknown ({tag})"),
        }
    }
}

/// Debug source metadata as recorded by the build, possibly incomplete.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DebugSource {
    /// Source file path.
    pub file_name: Option<String>,
    /// 1-based line.
    pub line_number: Option<u32>,
    /// 1-based column.
    pub column_number: Option<u32>,
}

impl DebugSource {
    /// Fully specified metadata.
    pub fn new(file_name: impl Into<String>, line_number: u32, column_number: u32) -> Self {
        Self {
            file_name: Some(file_name.into()),
            line_number: Some(line_number),
            column_number: Some(column_number),
        }
    }

    /// The location, only if file, line and column are all present.
    pub fn complete(&self) -> Option<SourceLocation> {
        Some(SourceLocation {
            file_name: self.file_name.clone().filter(|f| !f.is_empty())?,
            line_number: self.line_number?,
            column_number: self.column_number?,
        })
    }
}

/// A prop value as read from an instance.
#[derive(Clone, Debug, PartialEq)]
pub enum PropValue {
    /// A string.
    Str(String),
    /// A number.
    Number(f64),
    /// A boolean.
    Bool(bool),
    /// A symbol, by description.
    Symbol(String),
    /// An explicit null.
    Null,
    /// An explicit undefined.
    Undefined,
    /// A function (event handler, render prop, ...).
    Function,
    /// An object, array or element.
    Object,
}

/// Everything the resolver needs from one instance.
#[derive(Clone, Debug, PartialEq)]
pub struct InstanceInfo {
    /// Kind and naming slots.
    pub kind: InstanceKind,
    /// Debug source metadata, if the build recorded any.
    pub source: Option<DebugSource>,
    /// Current props in declaration order.
    pub props: Vec<(String, PropValue)>,
}

/// Walks a UI framework's instance tree.
///
/// `N` is the host's element handle. Implementations wrap whatever the framework exposes
/// (a fiber graph, a virtual DOM) and report failures as [`LookupError`] instead of panicking.
pub trait InstanceTreeWalker<N> {
    /// Handle to one framework instance.
    type Instance: Clone + PartialEq;

    /// The instance that produced `node`, if any.
    fn instance_for(&self, node: &N) -> Result<Option<Self::Instance>, LookupError>;

    /// The next instance up the render tree: the owner that rendered `instance`.
    fn owner_of(&self, instance: &Self::Instance) -> Result<Option<Self::Instance>, LookupError>;

    /// Kind, source metadata and props of `instance`.
    fn describe(&self, instance: &Self::Instance) -> Result<InstanceInfo, LookupError>;

    /// The instance chain for `node`, nearest first.
    ///
    /// Each instance appears once; reaching an instance a second time ends the walk.
    /// A failed lookup ends the walk with whatever was collected so far.
    fn ancestors_of(&self, node: &N) -> Vec<Self::Instance> {
        let mut out = Vec::new();
        let mut cur = match self.instance_for(node) {
            Ok(instance) => instance,
            Err(err) => {
                tracing::debug!(error = %err, "no instance for node");
                None
            }
        };
        while let Some(instance) = cur {
            if out.contains(&instance) {
                break;
            }
            cur = match self.owner_of(&instance) {
                Ok(owner) => owner,
                Err(err) => {
                    tracing::debug!(error = %err, "owner lookup failed; truncating chain");
                    None
                }
            };
            out.push(instance);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Chain {
        owners: Vec<Option<usize>>,
        broken: Option<usize>,
    }

    impl InstanceTreeWalker<usize> for Chain {
        type Instance = usize;

        fn instance_for(&self, node: &usize) -> Result<Option<usize>, LookupError> {
            if *node >= self.owners.len() {
                return Err(LookupError::Detached);
            }
            Ok(Some(*node))
        }

        fn owner_of(&self, instance: &usize) -> Result<Option<usize>, LookupError> {
            if self.broken == Some(*instance) {
                return Err(LookupError::Introspection("owner field missing".into()));
            }
            Ok(self.owners[*instance])
        }

        fn describe(&self, _: &usize) -> Result<InstanceInfo, LookupError> {
            Ok(InstanceInfo {
                kind: InstanceKind::Fragment,
                source: None,
                props: Vec::new(),
            })
        }
    }

    #[test]
    fn walks_owners_nearest_first() {
        let chain = Chain {
            owners: vec![None, Some(0), Some(1)],
            broken: None,
        };
        assert_eq!(chain.ancestors_of(&2_usize), vec![2, 1, 0]);
    }

    #[test]
    fn cyclic_owners_terminate() {
        let chain = Chain {
            owners: vec![Some(1), Some(0)],
            broken: None,
        };
        assert_eq!(chain.ancestors_of(&0_usize), vec![0, 1]);
    }

    #[test]
    fn failed_owner_lookup_truncates() {
        let chain = Chain {
            owners: vec![None, Some(0), Some(1)],
            broken: Some(1),
        };
        assert_eq!(chain.ancestors_of(&2_usize), vec![2, 1]);
    }

    #[test]
    fn detached_node_has_no_ancestors() {
        let chain = Chain {
            owners: vec![None],
            broken: None,
        };
        assert!(chain.ancestors_of(&5_usize).is_empty());
    }

    #[test]
    fn display_name_falls_back_through_slots() {
        let named = InstanceKind::Component {
            display_name: Some("Card".into()),
            name: Some("CardImpl".into()),
        };
        assert_eq!(named.display_name(), "Card");

        let fn_name = InstanceKind::Component {
            display_name: Some(String::new()),
            name: Some("CardImpl".into()),
        };
        assert_eq!(fn_name.display_name(), "CardImpl");

        let anonymous = InstanceKind::Component {
            display_name: None,
            name: None,
        };
        assert_eq!(anonymous.display_name(), "Anonymous Component");

        assert_eq!(
            InstanceKind::Host { tag: "div".into() }.display_name(),
            "div"
        );
        assert_eq!(InstanceKind::Memo.display_name(), "React.memo");
        assert_eq!(InstanceKind::Other(42).display_name(), "Unknown (42)");
    }

    #[test]
    fn incomplete_debug_source_is_rejected() {
        let partial = DebugSource {
            file_name: Some("src/Card.tsx".into()),
            line_number: Some(10),
            column_number: None,
        };
        assert!(partial.complete().is_none());

        let empty_file = DebugSource::new("", 1, 1);
        assert!(empty_file.complete().is_none());

        let full = DebugSource::new("src/Card.tsx", 10, 3);
        let loc = full.complete().unwrap();
        assert_eq!(loc.line_number, 10);
        assert_eq!(loc.column_number, 3);
    }
}
