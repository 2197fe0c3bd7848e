//! Explicit registration of a concrete candidate with the rule table.

use crate::container::Container;
use crate::cursor::Category;
use crate::rules::{DerivedOp, OperationSet, Profile};

/// A candidate whose detected [`Profile`] is recorded at its definition.
///
/// Implement with [`register!`](crate::register) or
/// `#[container(register)]`; both verify, at compile time, that each
/// cursor's declared category is backed by its trait impls.
pub trait Registered: Container {
    const PROFILE: Profile;

    const OFFERED: OperationSet = Self::PROFILE.offered();

    #[inline]
    fn offers(op: DerivedOp) -> bool {
        Self::PROFILE.offers(op)
    }
}

/// Reject cursors that declare a category their trait impls do not back.
///
/// Declaring less than the impls support is allowed: the declared tag only
/// picks the counting strategy, and the profile keeps the detected category.
#[doc(hidden)]
pub const fn verified(profile: Profile, declared_shared: Category, declared_exclusive: Category) -> Profile {
    if !profile.shared.category.includes(declared_shared) {
        panic!("ConstCursor declares a traversal category its trait impls do not back");
    }
    if !profile.exclusive.category.includes(declared_exclusive) {
        panic!("Cursor declares a traversal category its trait impls do not back");
    }
    profile
}

/// Turn a failed cursor witness into a compile-time error.
#[doc(hidden)]
pub const fn classified(is_cursor: bool, bidirectional: bool, random_access: bool, contiguous: bool) -> Category {
    if !is_cursor {
        panic!("type is not a cursor over this sequence");
    }
    Category::from_witnesses(bidirectional, random_access, contiguous)
}
