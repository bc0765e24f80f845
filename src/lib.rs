//! # `vertexwalk` - Depth-First Traversal Helpers
//!
//! Depth-first traversals over a directed graph of valued vertices:
//! reachability, printing reachable values, the maximum reachable value,
//! reachable leaves, an all-odd check, and strictly increasing path search.
//!
//! ## Architecture
//!
//! Graphs are arenas. Vertices live in a `Vec` inside a [`VertexGraph`] and are
//! addressed by [`VertexId`] handles, so cycles need no shared ownership and
//! identity is an index rather than a value. Each graph is created inside a
//! closure that introduces a fresh, invariant `'brand` lifetime; ids carry the
//! brand of the graph that made them and cannot be used with any other.
//!
//! Traversals live on [`GraphTraversal`], a borrowed view with no state of its
//! own. Every operation builds a visited set for the duration of the call and
//! walks with an explicit stack, so deep graphs do not exhaust the call stack.
//!
//! ## Absent vertices
//!
//! Start vertices are passed as `Option<VertexId>`. `None` is a valid input
//! producing an empty result for every operation except the path query, which
//! rejects it with [`TraversalError::MissingEndpoint`].
//!
//! ## Example
//!
//! ```rust
//! use vertexwalk::VertexGraph;
//!
//! VertexGraph::new(|mut graph| {
//!     let a = graph.add_vertex(1);
//!     let b = graph.add_vertex(2);
//!     let c = graph.add_vertex(3);
//!     graph.add_edge(a, b);
//!     graph.add_edge(b, c);
//!     graph.add_edge(c, a);
//!
//!     let walk = graph.traversal();
//!     assert_eq!(walk.reachable(Some(a)).len(), 3);
//!     assert_eq!(walk.max(Some(a)), Some(&3));
//!     assert!(walk.leaves(Some(a)).is_empty());
//!     assert!(walk.has_strictly_increasing_path(Some(a), Some(c)).unwrap());
//!     assert!(!walk.has_strictly_increasing_path(Some(c), Some(a)).unwrap());
//! });
//! ```
//!
//! ## Features
//!
//! - `tracing` (off by default): emit `tracing` events when traversals finish.

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod brand;
pub mod error;
pub mod graph;
pub mod traversal;

pub use error::{Endpoint, TraversalError};
pub use graph::{GraphDescription, VertexDescription, VertexGraph, VertexId};
pub use traversal::{Dfs, GraphTraversal};

// Compile-time assertions for handle layout.
const _: () = {
    use core::mem;

    // Brands are ZSTs, so a vertex handle is exactly an index.
    assert!(mem::size_of::<brand::InvariantLifetime<'static>>() == 0);
    assert!(mem::size_of::<VertexId<'static>>() == mem::size_of::<usize>());
};
