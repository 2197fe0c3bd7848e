//! The derived operation surface.

use crate::caps::{Clear, Emplace, EmplaceBack, EmplaceFront, EraseRange, InsertRange, Resize};
use crate::container::Sequence;
use crate::cursor::{
    BidirectionalCursor, Common, ContiguousCursor, Cursor, Iter, Measure, RandomAccessCursor,
    Reverse,
};
use crate::derive;
use crate::error::OutOfRange;

/// Standard-shaped operations derived from a [`Sequence`] and whichever
/// primitives from [`caps`](crate::caps) it implements.
///
/// Register a candidate with an empty impl (or `#[derive(Container)]`):
///
/// ```
/// # use tola_container::prelude::*;
/// # #[derive(Default)] struct Bag(Vec<u8>);
/// # #[derive(Clone, PartialEq)] struct Pos(usize);
/// # impl Cursor<Bag> for Pos {
/// #     type Category = ForwardTag;
/// #     fn advance(&mut self, _: &Bag) { self.0 += 1; }
/// #     fn get<'a>(&self, b: &'a Bag) -> &'a u8 { &b.0[self.0] }
/// # }
/// # impl CursorMut<Bag> for Pos {
/// #     fn get_mut<'a>(&self, b: &'a mut Bag) -> &'a mut u8 { &mut b.0[self.0] }
/// # }
/// # impl Sequence for Bag {
/// #     type Item = u8;
/// #     type Cursor = Pos;
/// #     type Sentinel = Pos;
/// #     type ConstCursor = Pos;
/// #     type ConstSentinel = Pos;
/// #     fn begin(&self) -> Pos { Pos(0) }
/// #     fn end(&self) -> Pos { Pos(self.0.len()) }
/// # }
/// impl Container for Bag {}
///
/// let bag = Bag(vec![3, 1, 4]);
/// assert!(!bag.is_empty());
/// assert_eq!(bag.len(), 3);
/// assert_eq!(*bag.front(), 3);
/// ```
///
/// Every operation is a provided method whose `where` clause is its gate
/// in the rule table: a method whose primitives or traversal category are
/// missing does not exist for that candidate. A candidate that defines an
/// operation itself (by overriding it in the impl, or with an inherent
/// method of the same name) keeps its own definition.
pub trait Container: Sequence {
    // =========================================================================
    // Size queries
    // =========================================================================

    #[inline]
    fn is_empty(&self) -> bool {
        derive::is_empty(self)
    }

    /// Element count: endpoint subtraction for random-access cursors over a
    /// common pair, a linear walk otherwise.
    #[inline]
    fn len(&self) -> usize
    where
        <Self::ConstCursor as Cursor<Self>>::Category: Measure<Self>,
    {
        derive::len(self)
    }

    // =========================================================================
    // Element access
    // =========================================================================

    /// First element. Calling this on an empty container is a logic error.
    #[inline]
    fn front(&self) -> &Self::Item {
        derive::front(self)
    }

    #[inline]
    fn front_mut(&mut self) -> &mut Self::Item {
        derive::front_mut(self)
    }

    /// Last element. Calling this on an empty container is a logic error.
    #[inline]
    fn back(&self) -> &Self::Item
    where
        Self::ConstCursor: BidirectionalCursor<Self>,
        Self::ConstSentinel: Common<Self::ConstCursor>,
    {
        derive::back(self)
    }

    #[inline]
    fn back_mut(&mut self) -> &mut Self::Item
    where
        Self::Cursor: BidirectionalCursor<Self>,
        Self::Sentinel: Common<Self::Cursor>,
    {
        derive::back_mut(self)
    }

    /// `begin()[n]`. `n >= len()` is a contract violation; use [`at`](Container::at)
    /// for a checked lookup.
    #[inline]
    fn nth(&self, n: usize) -> &Self::Item
    where
        Self::ConstCursor: RandomAccessCursor<Self>,
    {
        derive::nth(self, n)
    }

    #[inline]
    fn nth_mut(&mut self, n: usize) -> &mut Self::Item
    where
        Self::Cursor: RandomAccessCursor<Self>,
    {
        derive::nth_mut(self, n)
    }

    /// Bounds-checked element access, through [`len`](Container::len) and
    /// [`nth`](Container::nth).
    #[inline]
    fn at(&self, n: usize) -> Result<&Self::Item, OutOfRange>
    where
        Self::ConstCursor: RandomAccessCursor<Self>,
        <Self::ConstCursor as Cursor<Self>>::Category: Measure<Self>,
    {
        derive::at(self, n)
    }

    #[inline]
    fn at_mut(&mut self, n: usize) -> Result<&mut Self::Item, OutOfRange>
    where
        Self::Cursor: RandomAccessCursor<Self>,
        <Self::ConstCursor as Cursor<Self>>::Category: Measure<Self>,
    {
        derive::at_mut(self, n)
    }

    // =========================================================================
    // Contiguous storage
    // =========================================================================

    #[inline]
    fn data(&self) -> *const Self::Item
    where
        Self::ConstCursor: ContiguousCursor<Self>,
        Self::ConstSentinel: Common<Self::ConstCursor>,
    {
        derive::data(self)
    }

    #[inline]
    fn data_mut(&mut self) -> *mut Self::Item
    where
        Self::Cursor: ContiguousCursor<Self>,
        Self::Sentinel: Common<Self::Cursor>,
    {
        derive::data_mut(self)
    }

    #[inline]
    fn as_slice(&self) -> &[Self::Item]
    where
        Self::ConstCursor: ContiguousCursor<Self>,
        Self::ConstSentinel: Common<Self::ConstCursor>,
    {
        derive::as_slice(self)
    }

    #[inline]
    fn as_mut_slice(&mut self) -> &mut [Self::Item]
    where
        Self::Cursor: ContiguousCursor<Self>,
        Self::Sentinel: Common<Self::Cursor>,
    {
        derive::as_mut_slice(self)
    }

    // =========================================================================
    // Ends
    // =========================================================================

    #[inline]
    fn push_front(&mut self, value: Self::Item)
    where
        Self: EmplaceFront,
    {
        derive::push_front(self, value)
    }

    /// Remove the first element. Calling this on an empty container is a
    /// logic error.
    #[inline]
    fn pop_front(&mut self)
    where
        Self: EmplaceFront + EraseRange,
    {
        derive::pop_front(self)
    }

    #[inline]
    fn push_back(&mut self, value: Self::Item)
    where
        Self: EmplaceBack,
    {
        derive::push_back(self, value)
    }

    /// Remove the last element. Calling this on an empty container is a
    /// logic error.
    #[inline]
    fn pop_back(&mut self)
    where
        Self: EmplaceBack + EraseRange,
        Self::Cursor: BidirectionalCursor<Self>,
        Self::Sentinel: Common<Self::Cursor>,
    {
        derive::pop_back(self)
    }

    // =========================================================================
    // Positional insert / erase
    // =========================================================================

    #[inline]
    fn insert(&mut self, pos: Self::ConstCursor, value: Self::Item) -> Self::Cursor
    where
        Self: Emplace,
    {
        derive::insert(self, pos, value)
    }

    #[inline]
    fn insert_n(&mut self, pos: Self::ConstCursor, n: usize, value: Self::Item) -> Self::Cursor
    where
        Self: InsertRange,
        Self::Item: Clone,
    {
        derive::insert_n(self, pos, n, value)
    }

    /// Remove the element at `pos`; returns the position that followed it.
    #[inline]
    fn erase(&mut self, pos: Self::ConstCursor) -> Self::Cursor
    where
        Self: EraseRange,
    {
        derive::erase(self, pos)
    }

    /// Remove every element through the range-erase primitive.
    #[inline]
    fn erase_all(&mut self)
    where
        Self: EraseRange,
        Self::ConstSentinel: Common<Self::ConstCursor>,
    {
        derive::erase_all(self)
    }

    // =========================================================================
    // Bulk reinitialization
    // =========================================================================

    #[inline]
    fn assign<I>(&mut self, items: I)
    where
        Self: Clear + InsertRange,
        I: IntoIterator<Item = Self::Item>,
    {
        derive::assign(self, items)
    }

    #[inline]
    fn assign_n(&mut self, n: usize, value: Self::Item)
    where
        Self: Clear + InsertRange,
        Self::Item: Clone,
    {
        derive::assign_n(self, n, value)
    }

    /// Like [`assign`](Container::assign), but stops at the first `Err`,
    /// keeping whatever was inserted before it.
    #[inline]
    fn try_assign<I, E>(&mut self, items: I) -> Result<(), E>
    where
        Self: Clear + InsertRange,
        I: IntoIterator<Item = Result<Self::Item, E>>,
    {
        derive::try_assign(self, items)
    }

    /// `resize(n, Item::default())`.
    #[inline]
    fn resize_default(&mut self, n: usize)
    where
        Self: Resize,
        Self::Item: Default,
    {
        derive::resize_default(self, n)
    }

    // =========================================================================
    // Traversal
    // =========================================================================

    #[inline]
    fn iter(&self) -> Iter<'_, Self> {
        Iter::new(self)
    }

    #[inline]
    fn rbegin(&self) -> Reverse<Self::Cursor>
    where
        Self::Cursor: BidirectionalCursor<Self>,
        Self::Sentinel: Common<Self::Cursor>,
    {
        let end: Self::Cursor = self.end().into_common();
        Reverse::new(end)
    }

    #[inline]
    fn rend(&self) -> Reverse<Self::Cursor>
    where
        Self::Cursor: BidirectionalCursor<Self>,
        Self::Sentinel: Common<Self::Cursor>,
    {
        Reverse::new(self.begin())
    }

    #[inline]
    fn crbegin(&self) -> Reverse<Self::ConstCursor>
    where
        Self::ConstCursor: BidirectionalCursor<Self>,
        Self::ConstSentinel: Common<Self::ConstCursor>,
    {
        let end: Self::ConstCursor = self.cend().into_common();
        Reverse::new(end)
    }

    #[inline]
    fn crend(&self) -> Reverse<Self::ConstCursor>
    where
        Self::ConstCursor: BidirectionalCursor<Self>,
        Self::ConstSentinel: Common<Self::ConstCursor>,
    {
        Reverse::new(self.cbegin())
    }
}
