//! The candidate contract.

use crate::cursor::{Cursor, CursorMut};

/// A sequence-like candidate type: an element type and a mutable
/// traversal pair, plus the immutable mirror of that pair.
///
/// This is the only trait a candidate has to implement by hand. Everything
/// else is either an optional primitive from [`caps`](crate::caps) or a
/// derived operation on [`Container`](crate::Container).
///
/// A *common* pair is one whose end endpoint has the cursor's own type
/// (`Sentinel = Cursor`). Operations that step backwards from the end
/// require it.
pub trait Sequence {
    type Item;

    /// Mutable traversal object.
    type Cursor: CursorMut<Self> + PartialEq + PartialEq<Self::Sentinel>;

    /// End endpoint of the mutable pair.
    type Sentinel: Clone;

    /// Immutable traversal object. Always constructible from the mutable one.
    type ConstCursor: Cursor<Self> + From<Self::Cursor> + PartialEq + PartialEq<Self::ConstSentinel>;

    /// End endpoint of the immutable pair.
    type ConstSentinel: Clone + From<Self::Sentinel>;

    fn begin(&self) -> Self::Cursor;

    fn end(&self) -> Self::Sentinel;

    #[inline]
    fn cbegin(&self) -> Self::ConstCursor {
        self.begin().into()
    }

    #[inline]
    fn cend(&self) -> Self::ConstSentinel {
        self.end().into()
    }
}
