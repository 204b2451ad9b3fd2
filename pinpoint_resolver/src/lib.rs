// Copyright 2025 the Pinpoint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pinpoint Resolver: map a rendered element back to the components that produced it.
//!
//! ## Overview
//!
//! A UI framework keeps an instance tree next to the DOM it renders. When the build records
//! debug source metadata on each instance, every element can be traced to the component
//! (and the file, line and column) that authored it. This crate performs that trace:
//!
//! - [`InstanceTreeWalker`] is the narrow capability interface a framework binding implements:
//!   find the instance for a node, step to its owner, and describe an instance.
//! - [`Resolver`] walks the chain from the node's own instance upward, keeps the instances that
//!   carry complete [`SourceLocation`]s, and produces [`ComponentDescriptor`]s nearest first.
//! - [`PathModifier`] rewrites reported `file:line:column` paths; identity by default.
//!
//! Resolution never fails. Missing instances, missing metadata and introspection errors all
//! degrade to "no match" and are logged at `debug` level through `tracing`.
//!
//! ## Example
//!
//! ```
//! use pinpoint_resolver::{
//!     DebugSource, InstanceInfo, InstanceKind, InstanceTreeWalker, LookupError, Resolver,
//! };
//!
//! // Node 1 is a <button> rendered by component 0, `SaveButton`.
//! struct Fibers;
//!
//! impl InstanceTreeWalker<u32> for Fibers {
//!     type Instance = u32;
//!
//!     fn instance_for(&self, node: &u32) -> Result<Option<u32>, LookupError> {
//!         Ok(Some(*node))
//!     }
//!
//!     fn owner_of(&self, instance: &u32) -> Result<Option<u32>, LookupError> {
//!         Ok(instance.checked_sub(1))
//!     }
//!
//!     fn describe(&self, instance: &u32) -> Result<InstanceInfo, LookupError> {
//!         Ok(match instance {
//!             0 => InstanceInfo {
//!                 kind: InstanceKind::Component {
//!                     display_name: None,
//!                     name: Some("SaveButton".into()),
//!                 },
//!                 source: Some(DebugSource::new("src/SaveButton.tsx", 4, 10)),
//!                 props: Vec::new(),
//!             },
//!             _ => InstanceInfo {
//!                 kind: InstanceKind::Host { tag: "button".into() },
//!                 source: None,
//!                 props: Vec::new(),
//!             },
//!         })
//!     }
//! }
//!
//! let resolver = Resolver::new(Fibers);
//! let found = resolver.resolve(&1_u32);
//! assert_eq!(found.len(), 1);
//! assert_eq!(found[0].name, "SaveButton");
//! assert_eq!(found[0].path_to_source, "src/SaveButton.tsx:4:10");
//! ```

mod descriptor;
mod path;
mod resolver;
mod walker;

pub use descriptor::{ComponentDescriptor, SourceLocation, snapshot_props};
pub use path::{IdentityPath, PathModifier, path_to_source};
pub use resolver::Resolver;
pub use walker::{
    DebugSource, InstanceInfo, InstanceKind, InstanceTreeWalker, LookupError, PropValue,
};
