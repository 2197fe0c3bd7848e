//! Autoref-based capability and category detection.
//!
//! Same "Inherent Const Fallback" pattern as `has_impl!`: for each witness,
//! a fallback trait supplies `const X: bool = false` for every wrapper, and
//! an inherent impl bounded on the witnessed trait supplies `const X: bool = true`.
//! When `Wrapper::<Concrete>::X` resolves, the inherent const wins whenever
//! its bounds hold.
//!
//! ## Limitation
//!
//! Works for **concrete types** named at the call site only. Inside
//! `fn foo<T>()` every witness sees the fallback.
//!
//! The fallback traits must be in scope where a witness is read; the
//! `capabilities!`/`classify!`/`profile!` macros import
//! [`fallback`](crate::detect::fallback) themselves.

use core::marker::PhantomData;

/// Witnesses a candidate for its primitive capability traits.
#[doc(hidden)]
pub struct Detect<T>(PhantomData<T>);

/// Witnesses a candidate's element type.
#[doc(hidden)]
pub struct DetectItem<T>(PhantomData<T>);

/// Witnesses cursor type `C` against sequence `S`.
#[doc(hidden)]
pub struct ClassifyWitness<S, C>(PhantomData<(S, C)>);

/// Witnesses whether two endpoint types are the same type.
#[doc(hidden)]
pub struct CommonWitness<A, B>(PhantomData<(A, B)>);

pub mod fallback {
    //! Fallback traits for the autoref witnesses. Glob-import to read witnesses.

    use super::{ClassifyWitness, CommonWitness, Detect, DetectItem};
    use crate::container::Sequence;
    use crate::cursor::{BidirectionalCursor, ContiguousCursor, Cursor, RandomAccessCursor};

    /// Fallback trait + inherent const for one capability trait.
    macro_rules! impl_capability_witness {
        ($Trait:ident, $CONST:ident) => {
            ::paste::paste! {
                #[doc(hidden)]
                pub trait [<$Trait Fallback>] { const $CONST: bool = false; }
                impl<T> [<$Trait Fallback>] for Detect<T> {}
                impl<T: crate::caps::$Trait> Detect<T> {
                    pub const $CONST: bool = true;
                }
            }
        };
    }

    impl_capability_witness!(EmplaceFront, EMPLACE_FRONT);
    impl_capability_witness!(EmplaceBack, EMPLACE_BACK);
    impl_capability_witness!(Emplace, EMPLACE);
    impl_capability_witness!(EraseRange, ERASE_RANGE);
    impl_capability_witness!(InsertRange, INSERT_RANGE);
    impl_capability_witness!(Clear, CLEAR);
    impl_capability_witness!(LessThan, LESS_THAN);
    impl_capability_witness!(Resize, RESIZE);

    // Element properties

    #[doc(hidden)]
    pub trait ItemCloneFallback {
        const ITEM_CLONE: bool = false;
    }
    impl<T> ItemCloneFallback for DetectItem<T> {}
    impl<T: Sequence> DetectItem<T>
    where
        T::Item: Clone,
    {
        pub const ITEM_CLONE: bool = true;
    }

    #[doc(hidden)]
    pub trait ItemDefaultFallback {
        const ITEM_DEFAULT: bool = false;
    }
    impl<T> ItemDefaultFallback for DetectItem<T> {}
    impl<T: Sequence> DetectItem<T>
    where
        T::Item: Default,
    {
        pub const ITEM_DEFAULT: bool = true;
    }

    // Traversal category

    macro_rules! impl_cursor_witness {
        ($Fallback:ident, $CONST:ident, $Trait:ident) => {
            #[doc(hidden)]
            pub trait $Fallback {
                const $CONST: bool = false;
            }
            impl<S, C> $Fallback for ClassifyWitness<S, C> {}
            impl<S: Sequence, C: $Trait<S>> ClassifyWitness<S, C> {
                pub const $CONST: bool = true;
            }
        };
    }

    impl_cursor_witness!(IsCursorFallback, IS_CURSOR, Cursor);
    impl_cursor_witness!(BidirectionalFallback, BIDIRECTIONAL, BidirectionalCursor);
    impl_cursor_witness!(RandomAccessFallback, RANDOM_ACCESS, RandomAccessCursor);
    impl_cursor_witness!(ContiguousFallback, CONTIGUOUS, ContiguousCursor);

    // Common pair

    #[doc(hidden)]
    pub trait CommonFallback {
        const COMMON: bool = false;
    }
    impl<A, B> CommonFallback for CommonWitness<A, B> {}
    impl<A> CommonWitness<A, A> {
        pub const COMMON: bool = true;
    }
}
