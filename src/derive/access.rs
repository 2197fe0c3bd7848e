//! Read-side derived operations: emptiness, count, element access.

use crate::container::{Container, Sequence};
use crate::cursor::{
    BidirectionalCursor, Common, ContiguousCursor, Cursor, CursorMut, Measure, RandomAccessCursor,
    to_offset,
};
use crate::error::OutOfRange;
use crate::trace;

/// First endpoint equals second.
#[inline]
pub fn is_empty<S: Sequence + ?Sized>(seq: &S) -> bool {
    seq.cbegin() == seq.cend()
}

/// Element count, by the strategy the immutable cursor's category allows.
#[inline]
pub fn len<S>(seq: &S) -> usize
where
    S: Sequence + ?Sized,
    <S::ConstCursor as Cursor<S>>::Category: Measure<S>,
{
    <<S::ConstCursor as Cursor<S>>::Category as Measure<S>>::measure(seq)
}

#[inline]
pub fn front<S: Sequence + ?Sized>(seq: &S) -> &S::Item {
    debug_assert!(!is_empty(seq), "front() on an empty container");
    seq.cbegin().get(seq)
}

#[inline]
pub fn front_mut<S: Sequence + ?Sized>(seq: &mut S) -> &mut S::Item {
    let first = seq.begin();
    debug_assert!(first != seq.end(), "front_mut() on an empty container");
    first.get_mut(seq)
}

#[inline]
pub fn back<S>(seq: &S) -> &S::Item
where
    S: Sequence + ?Sized,
    S::ConstCursor: BidirectionalCursor<S>,
    S::ConstSentinel: Common<S::ConstCursor>,
{
    debug_assert!(!is_empty(seq), "back() on an empty container");
    let end: S::ConstCursor = seq.cend().into_common();
    end.prev(seq).get(seq)
}

#[inline]
pub fn back_mut<S>(seq: &mut S) -> &mut S::Item
where
    S: Sequence + ?Sized,
    S::Cursor: BidirectionalCursor<S>,
    S::Sentinel: Common<S::Cursor>,
{
    let end: S::Cursor = seq.end().into_common();
    debug_assert!(end != seq.begin(), "back_mut() on an empty container");
    let last = end.prev(seq);
    last.get_mut(seq)
}

/// `begin()[n]`, unchecked.
#[inline]
pub fn nth<S>(seq: &S, n: usize) -> &S::Item
where
    S: Sequence + ?Sized,
    S::ConstCursor: RandomAccessCursor<S>,
{
    seq.cbegin().offset_by(to_offset(n)).get(seq)
}

#[inline]
pub fn nth_mut<S>(seq: &mut S, n: usize) -> &mut S::Item
where
    S: Sequence + ?Sized,
    S::Cursor: RandomAccessCursor<S>,
{
    let at = seq.begin().offset_by(to_offset(n));
    at.get_mut(seq)
}

fn check<S>(seq: &S, n: usize) -> Result<(), OutOfRange>
where
    S: Container + ?Sized,
    <S::ConstCursor as Cursor<S>>::Category: Measure<S>,
{
    let len = seq.len();
    if n < len {
        Ok(())
    } else {
        trace::debug!(index = n, len, "checked access out of range");
        Err(OutOfRange { index: n, len })
    }
}

/// Bounds-checked [`Container::nth`].
pub fn at<S>(seq: &S, n: usize) -> Result<&S::Item, OutOfRange>
where
    S: Container + ?Sized,
    S::ConstCursor: RandomAccessCursor<S>,
    <S::ConstCursor as Cursor<S>>::Category: Measure<S>,
{
    check(seq, n)?;
    Ok(seq.nth(n))
}

/// Bounds-checked [`Container::nth_mut`].
pub fn at_mut<S>(seq: &mut S, n: usize) -> Result<&mut S::Item, OutOfRange>
where
    S: Container + ?Sized,
    S::Cursor: RandomAccessCursor<S>,
    <S::ConstCursor as Cursor<S>>::Category: Measure<S>,
{
    check(seq, n)?;
    Ok(seq.nth_mut(n))
}

#[inline]
pub fn as_slice<S>(seq: &S) -> &[S::Item]
where
    S: Sequence + ?Sized,
    S::ConstCursor: ContiguousCursor<S>,
    S::ConstSentinel: Common<S::ConstCursor>,
{
    let end: S::ConstCursor = seq.cend().into_common();
    seq.cbegin().as_slice(&end, seq)
}

#[inline]
pub fn as_mut_slice<S>(seq: &mut S) -> &mut [S::Item]
where
    S: Sequence + ?Sized,
    S::Cursor: ContiguousCursor<S>,
    S::Sentinel: Common<S::Cursor>,
{
    let last: S::Cursor = seq.end().into_common();
    let first = seq.begin();
    first.as_mut_slice(&last, seq)
}

/// Address of the first element (dangling but non-null when empty).
#[inline]
pub fn data<S>(seq: &S) -> *const S::Item
where
    S: Sequence + ?Sized,
    S::ConstCursor: ContiguousCursor<S>,
    S::ConstSentinel: Common<S::ConstCursor>,
{
    as_slice(seq).as_ptr()
}

#[inline]
pub fn data_mut<S>(seq: &mut S) -> *mut S::Item
where
    S: Sequence + ?Sized,
    S::Cursor: ContiguousCursor<S>,
    S::Sentinel: Common<S::Cursor>,
{
    as_mut_slice(seq).as_mut_ptr()
}
