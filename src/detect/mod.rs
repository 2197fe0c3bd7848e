//! # Layer 5: Capability Detection
//!
//! Structural, compile-time detection over **concrete** candidate types.
//!
//! ```ignore
//! use tola_container::{capabilities, classify, profile, caps_check, offers};
//!
//! const CAPS: CapabilitySet = capabilities!(MyList<u8>);
//! const CAT: Category = classify!(MyList<u8>, ListCursor);
//! const PROFILE: Profile = profile!(MyList<u8>);
//!
//! assert!(caps_check!(MyList<u8>: EmplaceBack & !Resize));
//! const _: () = assert!(!offers!(MyList<u8>: pop_front));
//! ```
//!
//! Each witness is independent: a candidate missing one primitive is still
//! checked for every other.

mod autoref;
mod offers;
mod registry;

pub use autoref::{ClassifyWitness, CommonWitness, Detect, DetectItem};
pub use offers::Offers;
pub use registry::{Registered, classified, verified};

/// All fallback traits. Glob-import before reading a witness constant.
#[doc(hidden)]
pub mod fallback {
    pub use super::autoref::fallback::*;
    pub use super::offers::fallback::*;
}

/// Detected [`CapabilitySet`](crate::caps::CapabilitySet) of a concrete
/// candidate.
#[macro_export]
macro_rules! capabilities {
    ($T:ty) => {{
        #[allow(unused_imports)]
        use $crate::detect::fallback::*;
        $crate::caps::CapabilitySet::from_witnesses([
            $crate::detect::Detect::<$T>::EMPLACE_FRONT,
            $crate::detect::Detect::<$T>::EMPLACE_BACK,
            $crate::detect::Detect::<$T>::EMPLACE,
            $crate::detect::Detect::<$T>::ERASE_RANGE,
            $crate::detect::Detect::<$T>::INSERT_RANGE,
            $crate::detect::Detect::<$T>::CLEAR,
            $crate::detect::Detect::<$T>::LESS_THAN,
            $crate::detect::Detect::<$T>::RESIZE,
        ])
    }};
}

/// Strongest [`Category`](crate::cursor::Category) cursor `C` implements over
/// sequence `S`. A `C` that is not a cursor at all fails const evaluation.
#[macro_export]
macro_rules! classify {
    ($S:ty, $C:ty) => {{
        #[allow(unused_imports)]
        use $crate::detect::fallback::*;
        $crate::detect::classified(
            $crate::detect::ClassifyWitness::<$S, $C>::IS_CURSOR,
            $crate::detect::ClassifyWitness::<$S, $C>::BIDIRECTIONAL,
            $crate::detect::ClassifyWitness::<$S, $C>::RANDOM_ACCESS,
            $crate::detect::ClassifyWitness::<$S, $C>::CONTIGUOUS,
        )
    }};
}

/// Full detected [`Profile`](crate::rules::Profile) of a concrete candidate.
#[macro_export]
macro_rules! profile {
    ($T:ty) => {{
        #[allow(unused_imports)]
        use $crate::detect::fallback::*;
        $crate::rules::Profile {
            capabilities: $crate::capabilities!($T),
            element: $crate::caps::ElementSet::from_witnesses(
                $crate::detect::DetectItem::<$T>::ITEM_CLONE,
                $crate::detect::DetectItem::<$T>::ITEM_DEFAULT,
            ),
            shared: $crate::rules::Traversal::new(
                $crate::classify!($T, <$T as $crate::Sequence>::ConstCursor),
                $crate::detect::CommonWitness::<
                    <$T as $crate::Sequence>::ConstSentinel,
                    <$T as $crate::Sequence>::ConstCursor,
                >::COMMON,
            ),
            exclusive: $crate::rules::Traversal::new(
                $crate::classify!($T, <$T as $crate::Sequence>::Cursor),
                $crate::detect::CommonWitness::<
                    <$T as $crate::Sequence>::Sentinel,
                    <$T as $crate::Sequence>::Cursor,
                >::COMMON,
            ),
        }
    }};
}

/// Implement [`Registered`] for a concrete candidate and evaluate its
/// profile immediately, so a cursor that declares more than it implements
/// fails the build at the registration site.
#[macro_export]
macro_rules! register {
    ($T:ty) => {
        impl $crate::detect::Registered for $T {
            const PROFILE: $crate::rules::Profile = $crate::detect::verified(
                $crate::profile!($T),
                <<<$T as $crate::Sequence>::ConstCursor as $crate::cursor::Cursor<$T>>::Category
                    as $crate::cursor::CategoryTag>::CATEGORY,
                <<<$T as $crate::Sequence>::Cursor as $crate::cursor::Cursor<$T>>::Category
                    as $crate::cursor::CategoryTag>::CATEGORY,
            );
        }

        const _: () = {
            let _ = <$T as $crate::detect::Registered>::PROFILE;
        };
    };
}
