//! Reverse traversal adapter.
//!
//! `Reverse<C>` keeps a *base* position and dereferences the element just
//! before it, so `Reverse(end)` designates the last element and
//! `Reverse(begin)` is the reverse end.

use crate::container::Sequence;
use crate::cursor::{BidirectionalCursor, CategoryTag, Cursor, CursorMut, RandomAccessCursor};

/// A cursor walking its base cursor backwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Reverse<C>(C);

impl<C> Reverse<C> {
    #[inline]
    pub const fn new(base: C) -> Self {
        Self(base)
    }

    /// The forward position one past the designated element.
    #[inline]
    pub const fn base(&self) -> &C {
        &self.0
    }

    #[inline]
    pub fn into_base(self) -> C {
        self.0
    }

    /// Convert the base cursor (e.g. mutable to immutable).
    #[inline]
    pub fn convert<D: From<C>>(self) -> Reverse<D> {
        Reverse(D::from(self.0))
    }
}

impl<S, C> Cursor<S> for Reverse<C>
where
    S: Sequence + ?Sized,
    C: BidirectionalCursor<S>,
{
    type Category = <C::Category as CategoryTag>::Reversed;

    #[inline]
    fn advance(&mut self, seq: &S) {
        self.0.retreat(seq);
    }

    #[inline]
    fn get<'a>(&self, seq: &'a S) -> &'a S::Item {
        self.0.clone().prev(seq).get(seq)
    }
}

impl<S, C> CursorMut<S> for Reverse<C>
where
    S: Sequence + ?Sized,
    C: BidirectionalCursor<S> + CursorMut<S>,
{
    #[inline]
    fn get_mut<'a>(&self, seq: &'a mut S) -> &'a mut S::Item {
        let at = self.0.clone().prev(seq);
        at.get_mut(seq)
    }
}

impl<S, C> BidirectionalCursor<S> for Reverse<C>
where
    S: Sequence + ?Sized,
    C: BidirectionalCursor<S>,
{
    #[inline]
    fn retreat(&mut self, seq: &S) {
        self.0.advance(seq);
    }
}

impl<S, C> RandomAccessCursor<S> for Reverse<C>
where
    S: Sequence + ?Sized,
    C: RandomAccessCursor<S>,
{
    #[inline]
    fn offset(&mut self, n: isize) {
        self.0.offset(-n);
    }

    #[inline]
    fn distance(&self, from: &Self) -> isize {
        from.0.distance(&self.0)
    }
}
