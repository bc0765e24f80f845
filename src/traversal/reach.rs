//! Reachability, leaf collection and value printing.

use std::collections::HashSet;
use std::fmt::Display;
use std::io::{self, Write};

use super::GraphTraversal;
use crate::graph::VertexId;

impl<'g, 'brand, T> GraphTraversal<'g, 'brand, T> {
    /// Returns every vertex reachable from `start`, including `start`.
    ///
    /// Membership is by identity. An absent start gives an empty set.
    pub fn reachable(&self, start: Option<VertexId<'brand>>) -> HashSet<VertexId<'brand>> {
        let set: HashSet<_> = self.dfs(start).collect();

        #[cfg(feature = "tracing")]
        tracing::debug!(op = "reachable", start = ?start.map(VertexId::index), found = set.len(), "traversal finished");

        set
    }

    /// Counts the vertices reachable from `start`, including `start`.
    pub fn reachable_count(&self, start: Option<VertexId<'brand>>) -> usize {
        self.dfs(start).count()
    }

    /// Returns every reachable vertex with no outgoing edges.
    ///
    /// `start` is included when it is itself a leaf. An absent start gives an
    /// empty set.
    pub fn leaves(&self, start: Option<VertexId<'brand>>) -> HashSet<VertexId<'brand>> {
        let set: HashSet<_> = self.dfs(start).filter(|&v| self.graph.is_leaf(v)).collect();

        #[cfg(feature = "tracing")]
        tracing::debug!(op = "leaves", start = ?start.map(VertexId::index), found = set.len(), "traversal finished");

        set
    }

    /// Writes the value of every vertex reachable from `start` to `out`, one
    /// per line, each exactly once. Writes nothing for an absent start.
    ///
    /// # Errors
    /// Propagates the first write error from `out`.
    pub fn write_vertex_vals<W: Write>(&self, start: Option<VertexId<'brand>>, out: &mut W) -> io::Result<()>
    where
        T: Display,
    {
        for vertex in self.dfs(start) {
            writeln!(out, "{}", self.graph.value(vertex))?;
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(op = "print", start = ?start.map(VertexId::index), "traversal finished");

        Ok(())
    }

    /// Prints the value of every vertex reachable from `start` to standard
    /// output. See [`GraphTraversal::write_vertex_vals`].
    ///
    /// # Errors
    /// Returns an error if standard output cannot be written.
    pub fn print_vertex_vals(&self, start: Option<VertexId<'brand>>) -> io::Result<()>
    where
        T: Display,
    {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.write_vertex_vals(start, &mut out)?;
        out.flush()
    }
}
