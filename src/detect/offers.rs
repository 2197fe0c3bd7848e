//! Witnesses for the derived surface itself.
//!
//! `Offers::<T>::POP_BACK` is `true` exactly when `T`'s `Container`
//! implementation has a callable `pop_back`: each inherent const below
//! repeats the `where` clause of the matching `Container` method. The
//! `offers!` macro reads these, and the tests compare them against the
//! rule table's verdict for the same candidate.

use core::marker::PhantomData;

/// Witnesses which derived operations a concrete candidate receives.
#[doc(hidden)]
pub struct Offers<T>(PhantomData<T>);

pub mod fallback {
    //! Fallback traits for [`Offers`](super::Offers).

    use super::Offers;
    use crate::caps::{Clear, Emplace, EmplaceBack, EmplaceFront, EraseRange, InsertRange, LessThan, Resize};
    use crate::container::Container;
    use crate::cursor::{BidirectionalCursor, Common, ContiguousCursor, Cursor, Measure, RandomAccessCursor};

    macro_rules! offers_witness {
        ($Fallback:ident, $CONST:ident $(; $($pred:tt)*)?) => {
            #[doc(hidden)]
            pub trait $Fallback {
                const $CONST: bool = false;
            }
            impl<T> $Fallback for Offers<T> {}
            impl<T> Offers<T>
            where
                T: Container,
                $($($pred)*)?
            {
                pub const $CONST: bool = true;
            }
        };
    }

    offers_witness!(OffersIsEmpty, IS_EMPTY);
    offers_witness!(OffersLen, LEN;
        <T::ConstCursor as Cursor<T>>::Category: Measure<T>,
    );
    offers_witness!(OffersData, DATA;
        T::ConstCursor: ContiguousCursor<T>,
        T::ConstSentinel: Common<T::ConstCursor>,
    );
    offers_witness!(OffersDataMut, DATA_MUT;
        T::Cursor: ContiguousCursor<T>,
        T::Sentinel: Common<T::Cursor>,
    );
    offers_witness!(OffersFront, FRONT);
    offers_witness!(OffersFrontMut, FRONT_MUT);
    offers_witness!(OffersBack, BACK;
        T::ConstCursor: BidirectionalCursor<T>,
        T::ConstSentinel: Common<T::ConstCursor>,
    );
    offers_witness!(OffersBackMut, BACK_MUT;
        T::Cursor: BidirectionalCursor<T>,
        T::Sentinel: Common<T::Cursor>,
    );
    offers_witness!(OffersNth, NTH;
        T::ConstCursor: RandomAccessCursor<T>,
    );
    offers_witness!(OffersNthMut, NTH_MUT;
        T::Cursor: RandomAccessCursor<T>,
    );
    offers_witness!(OffersAt, AT;
        T::ConstCursor: RandomAccessCursor<T>,
        <T::ConstCursor as Cursor<T>>::Category: Measure<T>,
    );
    offers_witness!(OffersAtMut, AT_MUT;
        T::Cursor: RandomAccessCursor<T>,
        <T::ConstCursor as Cursor<T>>::Category: Measure<T>,
    );
    offers_witness!(OffersPushFront, PUSH_FRONT;
        T: EmplaceFront,
    );
    offers_witness!(OffersPopFront, POP_FRONT;
        T: EmplaceFront + EraseRange,
    );
    offers_witness!(OffersPushBack, PUSH_BACK;
        T: EmplaceBack,
    );
    offers_witness!(OffersPopBack, POP_BACK;
        T: EmplaceBack + EraseRange,
        T::Cursor: BidirectionalCursor<T>,
        T::Sentinel: Common<T::Cursor>,
    );
    offers_witness!(OffersInsert, INSERT;
        T: Emplace,
    );
    offers_witness!(OffersInsertN, INSERT_N;
        T: InsertRange,
        T::Item: Clone,
    );
    offers_witness!(OffersErase, ERASE;
        T: EraseRange,
    );
    offers_witness!(OffersAssign, ASSIGN;
        T: Clear + InsertRange,
    );
    offers_witness!(OffersAssignN, ASSIGN_N;
        T: Clear + InsertRange,
        T::Item: Clone,
    );
    offers_witness!(OffersResizeDefault, RESIZE_DEFAULT;
        T: Resize,
        T::Item: Default,
    );
    offers_witness!(OffersRbegin, RBEGIN;
        T::Cursor: BidirectionalCursor<T>,
        T::Sentinel: Common<T::Cursor>,
    );
    offers_witness!(OffersCrbegin, CRBEGIN;
        T::ConstCursor: BidirectionalCursor<T>,
        T::ConstSentinel: Common<T::ConstCursor>,
    );
    offers_witness!(OffersComparisons, COMPARISONS;
        T: LessThan,
    );
    offers_witness!(OffersEraseAll, ERASE_ALL;
        T: EraseRange,
        T::ConstSentinel: Common<T::ConstCursor>,
    );
    offers_witness!(OffersTeardown, TEARDOWN;
        T: Clear,
    );
}
