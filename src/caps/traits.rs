//! Primitive capability traits.
//!
//! Each trait is one optional primitive a candidate may supply. They are
//! independent: none is a supertrait of another, so any combination can be
//! implemented and detected.

use crate::container::Sequence;

/// Construct an element in place before the first one.
pub trait EmplaceFront: Sequence {
    fn emplace_front(&mut self, value: Self::Item);
}

/// Construct an element in place after the last one.
pub trait EmplaceBack: Sequence {
    fn emplace_back(&mut self, value: Self::Item);
}

/// Construct an element in place before `pos`.
pub trait Emplace: Sequence {
    /// Returns a cursor to the new element. Inserting a single element must
    /// have no effect if it panics.
    fn emplace(&mut self, pos: Self::ConstCursor, value: Self::Item) -> Self::Cursor;
}

/// Remove the half-open range `[first, last)`.
pub trait EraseRange: Sequence {
    /// Returns a cursor to the element that followed the removed range.
    fn erase_range(&mut self, first: Self::ConstCursor, last: Self::ConstCursor) -> Self::Cursor;
}

/// Insert a run of elements before `pos`.
pub trait InsertRange: Sequence {
    /// Returns a cursor to the first inserted element (or `pos` when `items`
    /// is empty). A panic raised by `items` midway leaves the elements
    /// already inserted in place.
    fn insert_range<I>(&mut self, pos: Self::ConstCursor, items: I) -> Self::Cursor
    where
        I: IntoIterator<Item = Self::Item>;
}

/// Remove every element.
pub trait Clear: Sequence {
    fn clear(&mut self);
}

/// Adjust the length to `n`, filling new slots with clones of `value`.
pub trait Resize: Sequence {
    fn resize(&mut self, n: usize, value: Self::Item);
}

/// Strict weak ordering between two whole candidates.
///
/// Not tied to [`Sequence`]: the ordering trio derived from it only needs
/// the comparison itself.
pub trait LessThan {
    fn less_than(&self, other: &Self) -> bool;
}
