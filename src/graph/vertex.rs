//! Vertex handles and per-vertex storage.

use crate::brand::InvariantLifetime;

/// A handle to a vertex in one specific branded graph.
///
/// Identity is the arena index, never the value: two vertices holding equal
/// values still have distinct ids. The brand ties the handle to the graph that
/// produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VertexId<'brand> {
    index: usize,
    _brand: InvariantLifetime<'brand>,
}

impl<'brand> VertexId<'brand> {
    #[inline(always)]
    pub(crate) fn new(index: usize) -> Self {
        Self {
            index,
            _brand: InvariantLifetime::new(),
        }
    }

    /// Position of this vertex in insertion order.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.index
    }
}

/// A vertex: its value and its ordered outgoing neighbors.
pub(crate) struct Vertex<'brand, T> {
    pub(crate) value: T,
    pub(crate) neighbors: Vec<VertexId<'brand>>,
}

impl<'brand, T> Vertex<'brand, T> {
    pub(crate) fn new(value: T) -> Self {
        Self {
            value,
            neighbors: Vec::new(),
        }
    }
}
