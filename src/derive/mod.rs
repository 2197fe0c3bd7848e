//! # Layer 4: Synthesized Operations
//!
//! Bodies of every derived operation, written as free functions generic
//! over the candidate. [`Container`](crate::Container) forwards to them, and
//! they stay callable directly (from an override, or from generated
//! `Drop`/`PartialOrd` impls).
//!
//! Each function's bounds are exactly the primitives its algorithm touches;
//! the gates that additionally depend on the rule table (e.g. `pop_front`
//! needing front-emplace) live on the `Container` methods.

mod access;
mod compare;
mod modify;

pub use access::{
    as_mut_slice, as_slice, at, at_mut, back, back_mut, data, data_mut, front, front_mut, is_empty,
    len, nth, nth_mut,
};
pub use compare::{Comparisons, lexicographic_less, partial_cmp_by_less, sequence_eq};
pub use modify::{
    assign, assign_n, erase, erase_all, insert, insert_n, pop_back, pop_front, push_back,
    push_front, resize_default, teardown, try_assign,
};
