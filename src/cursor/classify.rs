//! # Traversal Category Classifier
//!
//! Two complementary views of a cursor's category:
//!
//! - **Declared** ([`Classified`]): the cursor names its category through
//!   `Cursor::Category`. The blanket impl only exists when the declaration
//!   is backed by the matching trait, so a cursor claiming random access
//!   without implementing [`RandomAccessCursor`] fails to compile at the
//!   first use that needs the category.
//! - **Observed** (`classify!`, behind the `detect` feature): autoref witnesses
//!   report the strongest category a concrete cursor actually implements.
//!
//! [`Measure`] dispatches element counting on the declared tag: linear
//! walks below random access, endpoint subtraction from random access up
//! (walking again when the end endpoint is a sentinel).

use core::any::Any;

use crate::container::Sequence;
use crate::cursor::{
    BidirectionalCursor, BidirectionalTag, Category, CategoryTag, ContiguousCursor, ContiguousTag,
    Cursor, ForwardTag, RandomAccessCursor, RandomAccessTag,
};
use crate::primitives::Bool;

// =============================================================================
// Declared category verification
// =============================================================================

/// `Self` (a category tag) is backed by `C`'s trait impls.
pub trait Satisfies<S: Sequence + ?Sized, C> {}

impl<S: Sequence + ?Sized, C: Cursor<S>> Satisfies<S, C> for ForwardTag {}
impl<S: Sequence + ?Sized, C: BidirectionalCursor<S>> Satisfies<S, C> for BidirectionalTag {}
impl<S: Sequence + ?Sized, C: RandomAccessCursor<S>> Satisfies<S, C> for RandomAccessTag {}
impl<S: Sequence + ?Sized, C: ContiguousCursor<S>> Satisfies<S, C> for ContiguousTag {}

/// A cursor whose declared category is verified.
pub trait Classified<S: Sequence + ?Sized>: Cursor<S> {
    const CATEGORY: Category;
}

impl<S, C> Classified<S> for C
where
    S: Sequence + ?Sized,
    C: Cursor<S>,
    C::Category: Satisfies<S, C>,
{
    const CATEGORY: Category = <C::Category as CategoryTag>::CATEGORY;
}

// =============================================================================
// Element counting
// =============================================================================

/// Count the elements of `S` using the strategy its category licenses.
///
/// Blanket over every tag: `CategoryTag::RandomAccess` picks [`Subtract`]
/// or [`Walk`].
pub trait Measure<S: Sequence + ?Sized>: CategoryTag {
    fn measure(seq: &S) -> usize;
}

/// A counting strategy.
pub trait CountBy<S: Sequence + ?Sized> {
    fn count(seq: &S) -> usize;
}

/// Step the immutable pair from begin to end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Walk;

/// Subtract the endpoints when the end is itself a cursor, walk otherwise.
///
/// Needs `'static` endpoints to tell the two pair shapes apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Subtract;

impl<S: Sequence + ?Sized> CountBy<S> for Walk {
    #[inline]
    fn count(seq: &S) -> usize {
        walk(seq)
    }
}

impl<S> CountBy<S> for Subtract
where
    S: Sequence + ?Sized,
    S::ConstCursor: RandomAccessCursor<S> + 'static,
    S::ConstSentinel: 'static,
{
    #[inline]
    fn count(seq: &S) -> usize {
        let end = seq.cend();
        match (&end as &dyn Any).downcast_ref::<S::ConstCursor>() {
            Some(end) => {
                let d = end.distance(&seq.cbegin());
                debug_assert!(d >= 0, "end precedes begin (distance {d})");
                d as usize
            }
            None => walk(seq),
        }
    }
}

impl<S, T> Measure<S> for T
where
    S: Sequence + ?Sized,
    T: CategoryTag,
    <T::RandomAccess as Bool>::If<Subtract, Walk>: CountBy<S>,
{
    #[inline]
    fn measure(seq: &S) -> usize {
        <<T::RandomAccess as Bool>::If<Subtract, Walk> as CountBy<S>>::count(seq)
    }
}

fn walk<S: Sequence + ?Sized>(seq: &S) -> usize {
    let mut at = seq.cbegin();
    let end = seq.cend();
    let mut n = 0;
    while at != end {
        at.advance(seq);
        n += 1;
    }
    n
}
