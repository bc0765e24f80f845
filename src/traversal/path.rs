//! Strictly increasing path search.
//!
//! Unlike the other traversals, visited marks here are path-local: a vertex is
//! marked when it is pushed onto the current path and unmarked when the search
//! backtracks past it. A vertex may appear on several explored branches, but
//! never twice on one path.
//!
//! Vertices whose frames are exhausted are also recorded as dead ends. Along an
//! increasing path, whether `end` is reachable from a vertex depends only on
//! that vertex, so a dead end is never entered again and the search stays
//! linear in the size of the reachable graph.

use super::GraphTraversal;
use crate::error::{Endpoint, TraversalError};
use crate::graph::access::visited::VisitedSet;
use crate::graph::VertexId;

/// One vertex on the current path and the next neighbor slot to try.
struct Frame<'brand> {
    vertex: VertexId<'brand>,
    next: usize,
}

impl<'g, 'brand, T: Ord> GraphTraversal<'g, 'brand, T> {
    /// Returns `true` iff some path `start -> ... -> end` has strictly
    /// increasing values at every step. `start == end` counts as a path of
    /// zero edges.
    ///
    /// # Errors
    /// Returns [`TraversalError::MissingEndpoint`] if either endpoint is
    /// absent.
    pub fn has_strictly_increasing_path(
        &self,
        start: Option<VertexId<'brand>>,
        end: Option<VertexId<'brand>>,
    ) -> Result<bool, TraversalError> {
        Ok(self.increasing_path(start, end)?.is_some())
    }

    /// Finds a strictly increasing path from `start` to `end` and returns its
    /// vertices, both endpoints included, or `None` if there is no such path.
    ///
    /// Branches are explored depth-first in neighbor order; the first complete
    /// path found is returned.
    ///
    /// # Errors
    /// Returns [`TraversalError::MissingEndpoint`] if either endpoint is
    /// absent.
    pub fn increasing_path(
        &self,
        start: Option<VertexId<'brand>>,
        end: Option<VertexId<'brand>>,
    ) -> Result<Option<Vec<VertexId<'brand>>>, TraversalError> {
        let start = start.ok_or(TraversalError::MissingEndpoint(Endpoint::Start))?;
        let end = end.ok_or(TraversalError::MissingEndpoint(Endpoint::End))?;

        if start == end {
            return Ok(Some(vec![start]));
        }

        let graph = self.graph;
        let mut on_path = VisitedSet::new(graph.vertex_count());
        let mut dead = VisitedSet::new(graph.vertex_count());
        on_path.try_visit(start);
        let mut frames = vec![Frame { vertex: start, next: 0 }];

        while let Some(frame) = frames.last_mut() {
            let vertex = frame.vertex;
            let Some(&next) = graph.neighbors(vertex).get(frame.next) else {
                // Exhausted: backtrack.
                frames.pop();
                on_path.unmark(vertex);
                dead.try_visit(vertex);

                #[cfg(feature = "tracing")]
                tracing::trace!(vertex = vertex.index(), depth = frames.len(), "backtrack");

                continue;
            };
            frame.next += 1;

            if graph.value(next) <= graph.value(vertex) || on_path.is_visited(next) || dead.is_visited(next) {
                continue;
            }
            if next == end {
                let path: Vec<_> = frames.iter().map(|f| f.vertex).chain(Some(end)).collect();

                #[cfg(feature = "tracing")]
                tracing::debug!(op = "increasing_path", start = start.index(), end = end.index(), len = path.len(), "path found");

                return Ok(Some(path));
            }
            on_path.try_visit(next);
            frames.push(Frame { vertex: next, next: 0 });
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(op = "increasing_path", start = start.index(), end = end.index(), "no path");

        Ok(None)
    }
}
