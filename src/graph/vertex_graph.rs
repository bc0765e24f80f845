//! An arena-backed directed graph of valued vertices.
//!
//! Vertices live in a `Vec` and are addressed by branded [`VertexId`]s. Edges
//! are stored as ordered neighbor lists on the source vertex, so cycles,
//! self-loops and parallel edges need no shared ownership. Vertices are never
//! removed; every id handed out by a graph stays valid for the graph's scope.
//!
//! ### Performance Characteristics
//! | Operation | Complexity | Notes |
//! |-----------|------------|-------|
//! | `add_vertex` | \(O(1)\) amortized | Appends to the arena |
//! | `add_edge` | \(O(1)\) amortized | Appends to the source's neighbor list |
//! | `neighbors` | \(O(1)\) | Borrowed slice |
//! | `edge_count` | \(O(n)\) | Sums neighbor list lengths |

use crate::brand::InvariantLifetime;
use crate::error::TraversalError;
use crate::graph::description::{GraphDescription, VertexDescription};
use crate::graph::vertex::{Vertex, VertexId};
use crate::traversal::GraphTraversal;

/// A directed graph whose vertex handles are branded with `'brand`.
///
/// Graphs are only created inside a closure scope (see [`VertexGraph::new`]),
/// which gives each graph its own brand.
pub struct VertexGraph<'brand, T> {
    vertices: Vec<Vertex<'brand, T>>,
    _brand: InvariantLifetime<'brand>,
}

impl<T> VertexGraph<'_, T> {
    /// Creates an empty graph with a fresh brand and passes it to `f`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use vertexwalk::VertexGraph;
    ///
    /// let count = VertexGraph::new(|mut graph| {
    ///     let a = graph.add_vertex(1);
    ///     let b = graph.add_vertex(2);
    ///     graph.add_edge(a, b);
    ///     graph.traversal().reachable(Some(a)).len()
    /// });
    /// assert_eq!(count, 2);
    /// ```
    pub fn new<F, R>(f: F) -> R
    where
        F: for<'new_brand> FnOnce(VertexGraph<'new_brand, T>) -> R,
    {
        Self::with_capacity(0, f)
    }

    /// Like [`VertexGraph::new`], reserving room for `capacity` vertices.
    pub fn with_capacity<F, R>(capacity: usize, f: F) -> R
    where
        F: for<'new_brand> FnOnce(VertexGraph<'new_brand, T>) -> R,
    {
        f(VertexGraph {
            vertices: Vec::with_capacity(capacity),
            _brand: InvariantLifetime::new(),
        })
    }

    /// Builds a graph from a description and passes it to `f` along with the
    /// ids of its vertices, in description order.
    ///
    /// # Errors
    /// Returns [`TraversalError::DanglingNeighbor`] if any neighbor index has
    /// no matching vertex. `f` is not called in that case.
    pub fn from_description<F, R>(description: &GraphDescription<T>, f: F) -> Result<R, TraversalError>
    where
        T: Clone,
        F: for<'new_brand> FnOnce(VertexGraph<'new_brand, T>, Vec<VertexId<'new_brand>>) -> R,
    {
        description.validate()?;
        Ok(Self::with_capacity(description.vertices.len(), |mut graph| {
            let ids: Vec<_> = description
                .vertices
                .iter()
                .map(|v| graph.add_vertex(v.value.clone()))
                .collect();
            for (from, v) in description.vertices.iter().enumerate() {
                for &to in &v.neighbors {
                    graph.add_edge(ids[from], ids[to]);
                }
            }
            f(graph, ids)
        }))
    }
}

impl<'brand, T> VertexGraph<'brand, T> {
    /// Adds a vertex holding `value` and returns its id.
    pub fn add_vertex(&mut self, value: T) -> VertexId<'brand> {
        let id = VertexId::new(self.vertices.len());
        self.vertices.push(Vertex::new(value));
        id
    }

    /// Appends `to` to the neighbor list of `from`.
    ///
    /// Self-loops and repeated edges are kept as given; traversals tolerate both.
    pub fn add_edge(&mut self, from: VertexId<'brand>, to: VertexId<'brand>) {
        self.vertices[from.index()].neighbors.push(to);
    }

    /// Returns the number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of directed edges, counting repeats.
    pub fn edge_count(&self) -> usize {
        self.vertices.iter().map(|v| v.neighbors.len()).sum()
    }

    /// Returns the value held by `vertex`.
    #[inline]
    pub fn value(&self, vertex: VertexId<'brand>) -> &T {
        &self.vertices[vertex.index()].value
    }

    /// Returns a mutable reference to the value held by `vertex`.
    pub fn value_mut(&mut self, vertex: VertexId<'brand>) -> &mut T {
        &mut self.vertices[vertex.index()].value
    }

    /// Returns the outgoing neighbors of `vertex`, in insertion order.
    #[inline]
    pub fn neighbors(&self, vertex: VertexId<'brand>) -> &[VertexId<'brand>] {
        &self.vertices[vertex.index()].neighbors
    }

    /// Returns the number of outgoing edges of `vertex`.
    pub fn out_degree(&self, vertex: VertexId<'brand>) -> usize {
        self.neighbors(vertex).len()
    }

    /// A leaf has no outgoing edges. The test is purely structural.
    #[inline]
    pub fn is_leaf(&self, vertex: VertexId<'brand>) -> bool {
        self.neighbors(vertex).is_empty()
    }

    /// Iterates over every vertex id, in insertion order.
    pub fn vertex_ids(&self) -> impl ExactSizeIterator<Item = VertexId<'brand>> {
        (0..self.vertices.len()).map(VertexId::new)
    }

    /// Returns a depth-first traversal view over this graph.
    pub fn traversal(&self) -> GraphTraversal<'_, 'brand, T> {
        GraphTraversal::new(self)
    }

    /// Captures the graph's structure as a serializable description.
    pub fn to_description(&self) -> GraphDescription<T>
    where
        T: Clone,
    {
        GraphDescription {
            vertices: self
                .vertices
                .iter()
                .map(|v| VertexDescription {
                    value: v.value.clone(),
                    neighbors: v.neighbors.iter().map(|n| n.index()).collect(),
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertex_graph_construction() {
        VertexGraph::new(|mut graph| {
            let a = graph.add_vertex("a");
            let b = graph.add_vertex("b");
            let c = graph.add_vertex("c");
            graph.add_edge(a, b);
            graph.add_edge(a, c);
            graph.add_edge(b, c);

            assert_eq!(graph.vertex_count(), 3);
            assert_eq!(graph.edge_count(), 3);
            assert_eq!(graph.neighbors(a), &[b, c]);
            assert_eq!(graph.out_degree(b), 1);
            assert!(graph.is_leaf(c));
            assert!(!graph.is_leaf(a));
            assert_eq!(*graph.value(b), "b");
            assert_eq!(graph.vertex_ids().collect::<Vec<_>>(), vec![a, b, c]);
        });
    }

    #[test]
    fn equal_values_keep_distinct_identities() {
        VertexGraph::new(|mut graph| {
            let x = graph.add_vertex(7);
            let y = graph.add_vertex(7);
            assert_ne!(x, y);
            assert_eq!(graph.value(x), graph.value(y));
        });
    }

    #[test]
    fn self_loops_and_parallel_edges_are_kept() {
        VertexGraph::new(|mut graph| {
            let a = graph.add_vertex(0);
            let b = graph.add_vertex(1);
            graph.add_edge(a, a);
            graph.add_edge(a, b);
            graph.add_edge(a, b);
            assert_eq!(graph.neighbors(a), &[a, b, b]);
            assert_eq!(graph.edge_count(), 3);
        });
    }

    #[test]
    fn value_mut_updates_in_place() {
        VertexGraph::new(|mut graph| {
            let a = graph.add_vertex(1);
            *graph.value_mut(a) += 41;
            assert_eq!(*graph.value(a), 42);
        });
    }

    #[test]
    fn description_round_trip_preserves_structure() {
        let description = GraphDescription {
            vertices: vec![
                VertexDescription { value: 1, neighbors: vec![1] },
                VertexDescription { value: 2, neighbors: vec![2, 0] },
                VertexDescription { value: 3, neighbors: vec![] },
            ],
        };

        let rebuilt = VertexGraph::from_description(&description, |graph, ids| {
            assert_eq!(ids.len(), 3);
            assert_eq!(graph.neighbors(ids[1]), &[ids[2], ids[0]]);
            graph.to_description()
        })
        .unwrap();

        assert_eq!(rebuilt, description);
    }

    #[test]
    fn dangling_neighbor_is_rejected_before_building() {
        let description = GraphDescription {
            vertices: vec![VertexDescription { value: 1, neighbors: vec![3] }],
        };

        let mut called = false;
        let result = VertexGraph::from_description(&description, |_, _| called = true);

        assert!(matches!(
            result,
            Err(TraversalError::DanglingNeighbor { vertex: 0, neighbor: 3 })
        ));
        assert!(!called);
    }
}
