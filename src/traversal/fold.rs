//! Single-value summaries over the reachable set.

use num_traits::{Bounded, PrimInt};

use super::GraphTraversal;
use crate::graph::VertexId;

#[inline]
fn is_odd<T: PrimInt>(value: T) -> bool {
    // Two's complement keeps the low bit set for negative odd values too.
    value & T::one() == T::one()
}

impl<'g, 'brand, T> GraphTraversal<'g, 'brand, T> {
    /// Returns the largest value among the vertices reachable from `start`,
    /// or `None` when `start` is absent.
    ///
    /// When several vertices hold the maximum, the first one reached wins.
    pub fn max(&self, start: Option<VertexId<'brand>>) -> Option<&'g T>
    where
        T: Ord,
    {
        let graph = self.graph;
        let best = self
            .dfs(start)
            .map(|v| graph.value(v))
            .fold(None, |best: Option<&'g T>, value| match best {
                Some(b) if b >= value => Some(b),
                _ => Some(value),
            });

        #[cfg(feature = "tracing")]
        tracing::debug!(op = "max", start = ?start.map(VertexId::index), found = best.is_some(), "traversal finished");

        best
    }

    /// Like [`GraphTraversal::max`], but reports an absent start as
    /// `T::min_value()`.
    ///
    /// The sentinel is indistinguishable from a graph whose maximum really is
    /// the minimum representable value; prefer [`GraphTraversal::max`].
    pub fn max_or_min(&self, start: Option<VertexId<'brand>>) -> T
    where
        T: Ord + Clone + Bounded,
    {
        self.max(start).cloned().unwrap_or_else(T::min_value)
    }

    /// Returns `true` iff every vertex reachable from `start` holds an odd
    /// value. Vacuously `true` for an absent start.
    ///
    /// Stops at the first even value found.
    pub fn all_odd(&self, start: Option<VertexId<'brand>>) -> bool
    where
        T: PrimInt,
    {
        let graph = self.graph;
        let odd = self.dfs(start).all(|v| is_odd(*graph.value(v)));

        #[cfg(feature = "tracing")]
        tracing::debug!(op = "all_odd", start = ?start.map(VertexId::index), odd, "traversal finished");

        odd
    }
}
