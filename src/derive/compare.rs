//! Ordering derived from a single strict less-than.

use core::cmp::Ordering;

use crate::caps::LessThan;
use crate::container::Sequence;
use crate::cursor::Iter;

/// `>`, `<=` and `>=` in terms of [`LessThan::less_than`].
///
/// Implemented once, for every `LessThan` type, so the trio cannot be
/// obtained partially or overridden piecemeal.
pub trait Comparisons: LessThan {
    /// `rhs < lhs`
    #[inline]
    fn greater_than(&self, other: &Self) -> bool {
        other.less_than(self)
    }

    /// `!(rhs < lhs)`
    #[inline]
    fn less_equal(&self, other: &Self) -> bool {
        !other.less_than(self)
    }

    /// `!(lhs < rhs)`
    #[inline]
    fn greater_equal(&self, other: &Self) -> bool {
        !self.less_than(other)
    }
}

impl<T: LessThan + ?Sized> Comparisons for T {}

/// Three-way result from two less-than witnesses. Neither side less is
/// `Equal` only when the two also compare equal; otherwise the pair is
/// unordered.
#[inline]
pub fn partial_cmp_by_less<T: LessThan + PartialEq + ?Sized>(a: &T, b: &T) -> Option<Ordering> {
    if a.less_than(b) {
        Some(Ordering::Less)
    } else if b.less_than(a) {
        Some(Ordering::Greater)
    } else if a == b {
        Some(Ordering::Equal)
    } else {
        None
    }
}

/// Element-wise lexicographic less-than; a proper prefix is less.
pub fn lexicographic_less<S>(a: &S, b: &S) -> bool
where
    S: Sequence + ?Sized,
    S::Item: PartialOrd,
{
    Iter::new(a).lt(Iter::new(b))
}

/// Equal length and pairwise equal elements.
pub fn sequence_eq<S>(a: &S, b: &S) -> bool
where
    S: Sequence + ?Sized,
    S::Item: PartialEq,
{
    Iter::new(a).eq(Iter::new(b))
}
