//! `Iterator` over a sequence's immutable traversal pair.

use core::fmt;
use core::iter::FusedIterator;

use crate::container::Sequence;
use crate::cursor::{BidirectionalCursor, Common, Cursor};

/// Borrowing iterator from `cbegin()` to `cend()`.
///
/// Double-ended when the immutable pair is bidirectional and common.
pub struct Iter<'a, S: Sequence + ?Sized> {
    seq: &'a S,
    front: S::ConstCursor,
    back: S::ConstSentinel,
}

impl<'a, S: Sequence + ?Sized> Iter<'a, S> {
    pub fn new(seq: &'a S) -> Self {
        Self {
            seq,
            front: seq.cbegin(),
            back: seq.cend(),
        }
    }
}

impl<S: Sequence + ?Sized> Clone for Iter<'_, S> {
    fn clone(&self) -> Self {
        Self {
            seq: self.seq,
            front: self.front.clone(),
            back: self.back.clone(),
        }
    }
}

impl<S: Sequence + ?Sized> fmt::Debug for Iter<'_, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Iter")
            .field("exhausted", &(self.front == self.back))
            .finish_non_exhaustive()
    }
}

impl<'a, S: Sequence + ?Sized> Iterator for Iter<'a, S> {
    type Item = &'a S::Item;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        let item = self.front.get(self.seq);
        self.front.advance(self.seq);
        Some(item)
    }
}

impl<S> DoubleEndedIterator for Iter<'_, S>
where
    S: Sequence + ?Sized,
    S::ConstCursor: BidirectionalCursor<S>,
    S::ConstSentinel: Common<S::ConstCursor>,
{
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        let back: &mut S::ConstCursor = self.back.as_common_mut();
        back.retreat(self.seq);
        Some(back.get(self.seq))
    }
}

impl<S: Sequence + ?Sized> FusedIterator for Iter<'_, S> {}
