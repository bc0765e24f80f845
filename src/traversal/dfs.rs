use crate::graph::access::visited::VisitedSet;
use crate::graph::{VertexGraph, VertexId};

/// An iterator for Depth-First Search (DFS).
///
/// Yields vertex ids in pre-order. Vertices are marked visited when they are
/// first discovered, not when they are popped, so a vertex queued through two
/// parents is still yielded once. Neighbors are pushed in reverse so the first
/// listed neighbor is explored first.
pub struct Dfs<'g, 'brand, T> {
    graph: &'g VertexGraph<'brand, T>,
    visited: VisitedSet<'brand>,
    stack: Vec<VertexId<'brand>>,
}

impl<'g, 'brand, T> Dfs<'g, 'brand, T> {
    /// Creates a new DFS iterator starting from `start`. `None` yields nothing.
    pub fn new(graph: &'g VertexGraph<'brand, T>, start: Option<VertexId<'brand>>) -> Self {
        let mut visited = VisitedSet::new(graph.vertex_count());
        let mut stack = Vec::new();

        if let Some(start) = start {
            visited.try_visit(start);
            stack.push(start);
        }

        Self {
            graph,
            visited,
            stack,
        }
    }
}

impl<'g, 'brand, T> Iterator for Dfs<'g, 'brand, T> {
    type Item = VertexId<'brand>;

    fn next(&mut self) -> Option<Self::Item> {
        let u = self.stack.pop()?;

        for &v in self.graph.neighbors(u).iter().rev() {
            if self.visited.try_visit(v) {
                self.stack.push(v);
            }
        }

        Some(u)
    }
}
