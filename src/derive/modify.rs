//! Write-side derived operations, each expressed through one or two
//! primitives.

use core::iter;

use crate::caps::{Clear, Emplace, EmplaceBack, EmplaceFront, EraseRange, InsertRange, Resize};
use crate::container::Container;
use crate::cursor::{BidirectionalCursor, Common, Cursor};
use crate::trace;

#[inline]
pub fn push_front<S: EmplaceFront + ?Sized>(seq: &mut S, value: S::Item) {
    seq.emplace_front(value);
}

#[inline]
pub fn push_back<S: EmplaceBack + ?Sized>(seq: &mut S, value: S::Item) {
    seq.emplace_back(value);
}

/// Erase the half-open range `[pos, next(pos))`.
#[inline]
pub fn erase<S: EraseRange + ?Sized>(seq: &mut S, pos: S::ConstCursor) -> S::Cursor {
    let next = pos.clone().next(seq);
    seq.erase_range(pos, next)
}

/// Goes through [`Container::erase`], so an overriding `erase` sees pops too.
pub fn pop_front<S: Container + EraseRange + ?Sized>(seq: &mut S) {
    debug_assert!(!seq.is_empty(), "pop_front() on an empty container");
    let first = seq.cbegin();
    seq.erase(first);
}

pub fn pop_back<S>(seq: &mut S)
where
    S: Container + EraseRange + ?Sized,
    S::Cursor: BidirectionalCursor<S>,
    S::Sentinel: Common<S::Cursor>,
{
    debug_assert!(!seq.is_empty(), "pop_back() on an empty container");
    let end: S::Cursor = seq.end().into_common();
    let last = end.prev(seq);
    seq.erase(last.into());
}

#[inline]
pub fn insert<S: Emplace + ?Sized>(seq: &mut S, pos: S::ConstCursor, value: S::Item) -> S::Cursor {
    seq.emplace(pos, value)
}

/// `n` clones of `value` before `pos`.
#[inline]
pub fn insert_n<S>(seq: &mut S, pos: S::ConstCursor, n: usize, value: S::Item) -> S::Cursor
where
    S: InsertRange + ?Sized,
    S::Item: Clone,
{
    seq.insert_range(pos, iter::repeat_n(value, n))
}

/// Remove `[begin, end)` through the range-erase primitive.
pub fn erase_all<S>(seq: &mut S)
where
    S: EraseRange + ?Sized,
    S::ConstSentinel: Common<S::ConstCursor>,
{
    let last: S::ConstCursor = seq.cend().into_common();
    let first = seq.cbegin();
    seq.erase_range(first, last);
}

/// Clear, then bulk-insert at the (now empty) first endpoint.
///
/// If `items` panics midway, the elements inserted before the panic stay.
pub fn assign<S, I>(seq: &mut S, items: I)
where
    S: Clear + InsertRange + ?Sized,
    I: IntoIterator<Item = S::Item>,
{
    seq.clear();
    let first = seq.cbegin();
    seq.insert_range(first, items);
    trace::trace!("container reassigned");
}

pub fn assign_n<S>(seq: &mut S, n: usize, value: S::Item)
where
    S: Clear + InsertRange + ?Sized,
    S::Item: Clone,
{
    assign(seq, iter::repeat_n(value, n));
}

/// [`assign`] from fallible items: stops at the first `Err` and returns it,
/// keeping the prefix already inserted.
pub fn try_assign<S, I, E>(seq: &mut S, items: I) -> Result<(), E>
where
    S: Clear + InsertRange + ?Sized,
    I: IntoIterator<Item = Result<S::Item, E>>,
{
    let mut residual = None;
    let mut shunt = Shunt {
        iter: items.into_iter(),
        residual: &mut residual,
        taken: 0,
    };
    seq.clear();
    let first = seq.cbegin();
    seq.insert_range(first, shunt.by_ref());
    let _taken = shunt.taken;
    match residual {
        None => {
            trace::trace!(len = _taken, "container reassigned");
            Ok(())
        }
        Some(err) => {
            trace::debug!(kept = _taken, "reassignment stopped early; keeping prefix");
            Err(err)
        }
    }
}

pub fn resize_default<S>(seq: &mut S, n: usize)
where
    S: Resize + ?Sized,
    S::Item: Default,
{
    seq.resize(n, S::Item::default());
}

/// Full-range removal for candidates that expose a clear primitive.
#[inline]
pub fn teardown<S: Clear + ?Sized>(seq: &mut S) {
    seq.clear();
}

/// Yields the `Ok` values of `iter` until the first `Err`, which it parks
/// in `residual`.
struct Shunt<'r, I, E> {
    iter: I,
    residual: &'r mut Option<E>,
    taken: usize,
}

impl<I, T, E> Iterator for Shunt<'_, I, E>
where
    I: Iterator<Item = Result<T, E>>,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.residual.is_some() {
            return None;
        }
        match self.iter.next()? {
            Ok(value) => {
                self.taken += 1;
                Some(value)
            }
            Err(err) => {
                *self.residual = Some(err);
                None
            }
        }
    }
}
