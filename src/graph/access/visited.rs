//! Branded visited sets for graph traversals.
//!
//! A dense, word-packed bitset keyed on vertex index. Each public traversal
//! builds a fresh one sized to the graph and drops it on return, so no
//! bookkeeping leaks between calls.

use crate::brand::InvariantLifetime;
use crate::graph::VertexId;

const WORD_BITS: usize = usize::BITS as usize;

#[inline(always)]
fn bit_word_mask(bit: usize) -> (usize, usize) {
    (bit / WORD_BITS, 1usize << (bit % WORD_BITS))
}

/// Visited marks for the vertices of one graph.
pub(crate) struct VisitedSet<'brand> {
    bits: usize,
    words: Vec<usize>,
    _brand: InvariantLifetime<'brand>,
}

impl<'brand> VisitedSet<'brand> {
    pub(crate) fn new(bits: usize) -> Self {
        Self {
            bits,
            words: vec![0; bits.div_ceil(WORD_BITS)],
            _brand: InvariantLifetime::new(),
        }
    }

    /// Returns `true` iff the vertex was not yet visited, marking it visited.
    #[inline(always)]
    pub(crate) fn try_visit(&mut self, vertex: VertexId<'brand>) -> bool {
        debug_assert!(vertex.index() < self.bits, "vertex {} outside visited set", vertex.index());
        let (word, mask) = bit_word_mask(vertex.index());
        let w = &mut self.words[word];
        let fresh = *w & mask == 0;
        *w |= mask;
        fresh
    }

    #[inline(always)]
    pub(crate) fn is_visited(&self, vertex: VertexId<'brand>) -> bool {
        let (word, mask) = bit_word_mask(vertex.index());
        self.words[word] & mask != 0
    }

    /// Clears the mark on `vertex`, for path-local bookkeeping.
    #[inline(always)]
    pub(crate) fn unmark(&mut self, vertex: VertexId<'brand>) {
        let (word, mask) = bit_word_mask(vertex.index());
        self.words[word] &= !mask;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn try_visit_reports_first_discovery_only() {
        let mut visited = VisitedSet::new(130);
        assert_eq!(visited.bits, 130);
        assert_eq!(visited.words.len(), 130usize.div_ceil(WORD_BITS));

        let v = VertexId::new(129);
        assert!(!visited.is_visited(v));
        assert!(visited.try_visit(v));
        assert!(!visited.try_visit(v));
        assert!(visited.is_visited(v));
        assert!(!visited.is_visited(VertexId::new(128)));
    }

    #[test]
    fn unmark_clears_a_single_bit() {
        let mut visited = VisitedSet::new(64);
        let a = VertexId::new(3);
        let b = VertexId::new(4);
        visited.try_visit(a);
        visited.try_visit(b);
        visited.unmark(a);
        assert!(!visited.is_visited(a));
        assert!(visited.is_visited(b));
        assert!(visited.try_visit(a));
    }

    #[test]
    fn empty_set_has_no_words() {
        let visited = VisitedSet::new(0);
        assert_eq!(visited.bits, 0);
        assert!(visited.words.is_empty());
    }
}
