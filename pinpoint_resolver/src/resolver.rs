// Copyright 2025 the Pinpoint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Resolver implementation.
//!
//! ## Overview
//!
//! Walks the instance chain of a node (via [`InstanceTreeWalker::ancestors_of`]), keeps the
//! instances that carry complete source metadata, and turns each into a
//! [`ComponentDescriptor`].
//!
//! ## Failure policy
//!
//! Resolution is total: a node without an instance yields an empty list, and an instance
//! whose [`describe`](InstanceTreeWalker::describe) fails is skipped as if it had no source.

use core::fmt;

use crate::descriptor::{ComponentDescriptor, snapshot_props};
use crate::path::{IdentityPath, PathModifier, path_to_source};
use crate::walker::InstanceTreeWalker;

/// Maps rendered nodes back to the components that produced them.
///
/// ## Usage
///
/// - Construct with [`Resolver::new`] for unmodified paths, or with
///   [`Resolver::with_path_modifier`] to rewrite every reported path.
/// - Call [`Resolver::resolve`] for the full chain, or [`Resolver::nearest`] when only the
///   default selection is needed.
pub struct Resolver<W> {
    walker: W,
    path_modifier: Box<dyn PathModifier>,
}

impl<W> fmt::Debug for Resolver<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Resolver").finish_non_exhaustive()
    }
}

impl<W> Resolver<W> {
    /// Create a resolver that reports paths unmodified.
    pub fn new(walker: W) -> Self {
        Self {
            walker,
            path_modifier: Box::new(IdentityPath),
        }
    }

    /// Create a resolver that passes every path through `modifier`.
    pub fn with_path_modifier(walker: W, modifier: impl PathModifier + 'static) -> Self {
        Self {
            walker,
            path_modifier: Box::new(modifier),
        }
    }

    /// Replace the path modifier.
    pub fn set_path_modifier(&mut self, modifier: Box<dyn PathModifier>) {
        self.path_modifier = modifier;
    }

    /// The underlying walker.
    pub fn walker(&self) -> &W {
        &self.walker
    }

    /// The active path modifier.
    pub fn path_modifier(&self) -> &dyn PathModifier {
        self.path_modifier.as_ref()
    }

    /// Every instance on `node`'s chain that carries source metadata, nearest first.
    pub fn resolve<N>(&self, node: &N) -> Vec<ComponentDescriptor>
    where
        W: InstanceTreeWalker<N>,
    {
        self.walker
            .ancestors_of(node)
            .iter()
            .filter_map(|instance| self.describe::<N>(instance))
            .collect()
    }

    /// The nearest instance on `node`'s chain that carries source metadata.
    ///
    /// Equivalent to the first element of [`Resolver::resolve`], without describing the
    /// rest of the chain.
    pub fn nearest<N>(&self, node: &N) -> Option<ComponentDescriptor>
    where
        W: InstanceTreeWalker<N>,
    {
        self.walker
            .ancestors_of(node)
            .iter()
            .find_map(|instance| self.describe::<N>(instance))
    }

    fn describe<N>(&self, instance: &W::Instance) -> Option<ComponentDescriptor>
    where
        W: InstanceTreeWalker<N>,
    {
        let info = match self.walker.describe(instance) {
            Ok(info) => info,
            Err(err) => {
                tracing::debug!(error = %err, "describing instance failed; skipping");
                return None;
            }
        };
        let source = info.source.as_ref()?.complete()?;
        let path_to_source = path_to_source(&source, self.path_modifier.as_ref());
        Some(ComponentDescriptor {
            name: info.kind.display_name(),
            props: snapshot_props(&info.props),
            source,
            path_to_source,
        })
    }
}
