//! Traversal categories, as values and as type-level tags.
//!
//! ```text
//! Forward  <  Bidirectional  <  RandomAccess  <  Contiguous
//! ```
//!
//! Each category strictly extends the guarantees of the one before it.
//! Cursors declare their category with a tag type (`ForwardTag`, ...) so
//! the derived surface can dispatch on it without runtime checks.

use core::fmt;

use crate::primitives::{Absent, Bool, Present};

// =============================================================================
// Value-level category
// =============================================================================

/// The strength of movement/access a cursor supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    /// Forward-only advance and equality.
    Forward,
    /// Forward plus backward stepping.
    Bidirectional,
    /// Signed offsets and signed distances.
    RandomAccess,
    /// Random access over elements stored back to back in memory.
    Contiguous,
}

impl Category {
    /// All categories, weakest first.
    pub const ALL: [Category; 4] = [
        Category::Forward,
        Category::Bidirectional,
        Category::RandomAccess,
        Category::Contiguous,
    ];

    /// `true` when `self` offers every guarantee of `other`.
    #[inline]
    pub const fn includes(self, other: Category) -> bool {
        self as u8 >= other as u8
    }

    /// Pick the strongest category whose whole operation set is present.
    ///
    /// Witnesses are consulted weakest first; a stronger witness never rescues a
    /// missing weaker one (a cursor that claims contiguous storage but
    /// cannot step backwards is only forward).
    pub const fn from_witnesses(bidirectional: bool, random_access: bool, contiguous: bool) -> Category {
        if !bidirectional {
            Category::Forward
        } else if !random_access {
            Category::Bidirectional
        } else if !contiguous {
            Category::RandomAccess
        } else {
            Category::Contiguous
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Category::Forward => "forward",
            Category::Bidirectional => "bidirectional",
            Category::RandomAccess => "random-access",
            Category::Contiguous => "contiguous",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// Type-level tags
// =============================================================================

/// Type-level traversal category.
pub trait CategoryTag: 'static {
    const CATEGORY: Category;

    /// "At least random access?", for selecting implementations with
    /// `Bool::If` (see [`Measure`](crate::cursor::Measure)).
    type RandomAccess: Bool;

    /// Category of a [`Reverse`](crate::cursor::Reverse) walk over a cursor
    /// of this category.
    type Reversed: CategoryTag;
}

/// Tag for [`Category::Forward`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ForwardTag;

/// Tag for [`Category::Bidirectional`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BidirectionalTag;

/// Tag for [`Category::RandomAccess`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RandomAccessTag;

/// Tag for [`Category::Contiguous`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ContiguousTag;

macro_rules! impl_category_tag {
    ($tag:ident => $cat:ident, $ra:ty, reversed: $rev:ty) => {
        impl CategoryTag for $tag {
            const CATEGORY: Category = Category::$cat;
            type RandomAccess = $ra;
            type Reversed = $rev;
        }
    };
}

impl_category_tag!(ForwardTag => Forward, Absent, reversed: ForwardTag);
impl_category_tag!(BidirectionalTag => Bidirectional, Absent, reversed: BidirectionalTag);
impl_category_tag!(RandomAccessTag => RandomAccess, Present, reversed: RandomAccessTag);
// Walking contiguous storage backwards is no longer address-ordered.
impl_category_tag!(ContiguousTag => Contiguous, Present, reversed: RandomAccessTag);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_is_strength() {
        assert!(Category::Contiguous > Category::RandomAccess);
        assert!(Category::RandomAccess > Category::Bidirectional);
        assert!(Category::Bidirectional > Category::Forward);
        assert!(Category::Contiguous.includes(Category::Forward));
        assert!(!Category::Forward.includes(Category::Bidirectional));
    }

    #[test]
    fn test_from_witnesses_never_partial() {
        assert_eq!(Category::from_witnesses(false, true, true), Category::Forward);
        assert_eq!(Category::from_witnesses(true, false, true), Category::Bidirectional);
        assert_eq!(Category::from_witnesses(true, true, false), Category::RandomAccess);
        assert_eq!(Category::from_witnesses(true, true, true), Category::Contiguous);
    }

    #[test]
    fn test_tag_predicates() {
        assert!(!<<BidirectionalTag as CategoryTag>::RandomAccess as Bool>::VALUE);
        assert!(<<RandomAccessTag as CategoryTag>::RandomAccess as Bool>::VALUE);
        assert!(<<ContiguousTag as CategoryTag>::RandomAccess as Bool>::VALUE);
        assert_eq!(
            <<ContiguousTag as CategoryTag>::Reversed as CategoryTag>::CATEGORY,
            Category::RandomAccess
        );
    }
}
