//! Depth-first traversal helpers over a [`VertexGraph`].
//!
//! [`GraphTraversal`] is a borrowed, stateless view: every operation starts
//! from an optional vertex, builds its own visited set, walks depth-first with
//! an explicit stack, and discards the bookkeeping on return. An absent start
//! (`None`) yields an empty result everywhere except the path query, which
//! reports it as [`TraversalError::MissingEndpoint`](crate::TraversalError).
//!
//! Operations are grouped by shape:
//! - `reach`: reachable sets, leaves, printing
//! - `fold`: single-value summaries (maximum, all-odd)
//! - `path`: strictly increasing path search

mod dfs;
mod fold;
mod path;
mod reach;

pub use dfs::Dfs;

use crate::graph::{VertexGraph, VertexId};

/// Depth-first traversal operations over a borrowed graph.
pub struct GraphTraversal<'g, 'brand, T> {
    graph: &'g VertexGraph<'brand, T>,
}

impl<'g, 'brand, T> Clone for GraphTraversal<'g, 'brand, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'g, 'brand, T> Copy for GraphTraversal<'g, 'brand, T> {}

impl<'g, 'brand, T> GraphTraversal<'g, 'brand, T> {
    /// Creates a traversal view over `graph`.
    pub fn new(graph: &'g VertexGraph<'brand, T>) -> Self {
        Self { graph }
    }

    /// Returns the underlying graph.
    pub fn graph(&self) -> &'g VertexGraph<'brand, T> {
        self.graph
    }

    /// Returns a pre-order depth-first iterator over the vertices reachable
    /// from `start`, including `start` itself. Each vertex is yielded once.
    pub fn dfs(&self, start: Option<VertexId<'brand>>) -> Dfs<'g, 'brand, T> {
        Dfs::new(self.graph, start)
    }
}
