//! The traversal object contract.
//!
//! Cursors are lifetime-free position handles. They never borrow the
//! sequence they walk; every dereference or step that needs the elements
//! receives the sequence explicitly. This keeps `begin`/`end` pairs, saved
//! positions and the mutable/immutable split expressible under ordinary
//! borrowing rules.

use crate::container::Sequence;
use crate::cursor::CategoryTag;

/// Forward traversal: advance, dereference, and (through `PartialEq`)
/// equality against other positions.
pub trait Cursor<S: Sequence + ?Sized>: Clone {
    /// Declared traversal category.
    ///
    /// The declaration must be backed by the matching trait impls; see
    /// [`Classified`](crate::cursor::Classified).
    type Category: CategoryTag;

    /// Step to the next position.
    fn advance(&mut self, seq: &S);

    /// Dereference. Calling this on the end position is a contract violation.
    fn get<'a>(&self, seq: &'a S) -> &'a S::Item;

    /// By-value form of [`advance`](Cursor::advance).
    #[inline]
    fn next(mut self, seq: &S) -> Self {
        self.advance(seq);
        self
    }
}

/// Dereference for exclusive access.
pub trait CursorMut<S: Sequence + ?Sized>: Cursor<S> {
    fn get_mut<'a>(&self, seq: &'a mut S) -> &'a mut S::Item;
}

/// Reversible traversal.
pub trait BidirectionalCursor<S: Sequence + ?Sized>: Cursor<S> {
    /// Step to the previous position.
    fn retreat(&mut self, seq: &S);

    #[inline]
    fn prev(mut self, seq: &S) -> Self {
        self.retreat(seq);
        self
    }
}

/// Random offset and signed distance.
///
/// Neither operation needs the sequence: a random-access position is
/// arithmetic on its own.
pub trait RandomAccessCursor<S: Sequence + ?Sized>: BidirectionalCursor<S> {
    /// Move by `n` positions (negative moves backwards).
    fn offset(&mut self, n: isize);

    /// Signed number of steps from `from` to `self`.
    fn distance(&self, from: &Self) -> isize;

    #[inline]
    fn offset_by(mut self, n: isize) -> Self {
        self.offset(n);
        self
    }
}

/// Elements between two positions are stored back to back, so the range
/// can be materialized as a slice (and therefore as a raw address).
pub trait ContiguousCursor<S: Sequence + ?Sized>: RandomAccessCursor<S> {
    fn as_slice<'a>(&self, end: &Self, seq: &'a S) -> &'a [S::Item];

    fn as_mut_slice<'a>(&self, end: &Self, seq: &'a mut S) -> &'a mut [S::Item];
}

/// "This endpoint type is the cursor type": the mark of a common-range pair.
///
/// Only the reflexive impl exists, so `S::Sentinel: Common<S::Cursor>` holds
/// exactly when the two associated types are the same.
pub trait Common<C> {
    fn into_common(self) -> C;
    fn as_common(&self) -> &C;
    fn as_common_mut(&mut self) -> &mut C;
}

impl<C> Common<C> for C {
    #[inline(always)]
    fn into_common(self) -> C {
        self
    }

    #[inline(always)]
    fn as_common(&self) -> &C {
        self
    }

    #[inline(always)]
    fn as_common_mut(&mut self) -> &mut C {
        self
    }
}

/// Signed offset from an index. Indices beyond `isize::MAX` cannot name an
/// element of any real sequence.
#[inline]
pub(crate) fn to_offset(n: usize) -> isize {
    debug_assert!(n <= isize::MAX as usize, "index {n} does not fit a cursor offset");
    n as isize
}
