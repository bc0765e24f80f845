//! Lifetime brands tying vertex handles to their graph.

use core::marker::PhantomData;

/// Zero-sized tag naming the graph scope that `'brand` stands for.
///
/// A `VertexGraph` and every `VertexId` it hands out hold the same tag. The
/// `fn(&'brand ()) -> &'brand ()` payload pins `'brand` exactly: no subtyping
/// can stretch or shrink it, so ids minted by one `VertexGraph::new` closure
/// fail to type-check against a graph from any other closure.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct InvariantLifetime<'brand>(PhantomData<fn(&'brand ()) -> &'brand ()>);

impl<'brand> InvariantLifetime<'brand> {
    /// Returns the tag for `'brand`. Carries no data.
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_is_zero_sized_and_uniform() {
        assert_eq!(core::mem::size_of::<InvariantLifetime<'static>>(), 0);
        assert_eq!(InvariantLifetime::new(), InvariantLifetime::default());
    }
}
