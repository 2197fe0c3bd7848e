#![cfg_attr(not(feature = "std"), no_std)]

// Feature flags handled:
// - std: default, enables std library
// - detect: autoref witnesses (capabilities!, classify!, profile!, register!)
// - tracing: structured events from derived operations

//! # tola-container
//!
//! Capability-driven derivation of a standard-shaped container surface.
//!
//! A candidate type supplies a mutable traversal pair ([`Sequence`]) and
//! whichever primitives it has ([`caps`]). In return it gets every derived
//! operation the rule table licenses for that combination, as provided
//! methods of [`Container`]. An operation whose primitives or traversal
//! category are missing does not exist for that candidate: calling it is a
//! compile error, not a run-time failure.
//!
//! ## Architecture
//!
//! ```text
//! +-------------------------------------------------------------------+
//! |  Layer 0: Primitives                                              |
//! |  - Type-level Bool (Present / Absent)                             |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 1: Cursors                                                 |
//! |  - Cursor contract, Category tags, Classified, Reverse, Iter      |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 2-3: Capabilities + Rule Table                             |
//! |  - EmplaceFront, EraseRange, ... / DerivedOp, Rule, Profile       |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 4: Sequence -> Container, synthesized bodies (derive)      |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 5: Detection                                               |
//! |  - capabilities!, classify!, profile!, register!                  |
//! |  - #[derive(Container)], caps_check!, offers!                     |
//! +-------------------------------------------------------------------+
//! ```
//!
//! ## Quick Start
//!
//! ```ignore
//! use tola_container::prelude::*;
//!
//! #[derive(Container)]
//! #[container(eq, lexicographic, ord, register)]
//! struct Ring { /* ... */ }
//!
//! impl Sequence for Ring { /* begin / end */ }
//! impl EmplaceBack for Ring { /* ... */ }
//!
//! ring.push_back(7);          // EmplaceBack
//! ring.back();                // bidirectional + common cursor
//! ring.pop_back();            // does not compile: no EraseRange
//! ```
//!
//! ## Absent operations
//!
//! A candidate with front/back emplace but no range erase has no pops:
//!
//! ```compile_fail
//! # use tola_container::prelude::*;
//! fn drain<S: Container + EmplaceBack>(s: &mut S) {
//!     s.pop_back();
//! }
//! ```
//!
//! Indexing requires a random-access cursor:
//!
//! ```compile_fail
//! # use tola_container::prelude::*;
//! fn third<S: Container>(s: &S) -> &S::Item {
//!     s.nth(2)
//! }
//! ```

// Allow `::tola_container` to work inside the crate itself
extern crate self as tola_container;

mod trace;

// =============================================================================
// Layer 0: Primitives
// =============================================================================
pub mod primitives;

// =============================================================================
// Layer 1: Cursors
// =============================================================================
pub mod cursor;

// =============================================================================
// Layer 2-3: Capabilities and Rule Table
// =============================================================================
pub mod caps;
pub mod rules;

// =============================================================================
// Layer 4: Candidate Contract, Derived Surface, Synthesized Bodies
// =============================================================================
pub mod container;
pub mod derive;
pub mod error;

// =============================================================================
// Layer 5: Detection
// =============================================================================
#[cfg(feature = "detect")]
pub mod detect;

// =============================================================================
// Re-exports at Crate Root
// =============================================================================

pub use caps::{Capability, CapabilitySet, ElementSet};
pub use container::{Container, Sequence};
pub use cursor::{Category, Iter, Reverse};
pub use derive::Comparisons;
pub use error::OutOfRange;
pub use primitives::{Absent, Bool, Present};
pub use rules::{DerivedOp, OperationSet, Profile};

#[cfg(feature = "detect")]
pub use detect::Registered;

// Re-export proc-macros
pub use macros::{Container, caps_check, offers};

/// Everything needed to write and use a candidate.
pub mod prelude {
    pub use crate::caps::{
        Clear, Emplace, EmplaceBack, EmplaceFront, EraseRange, InsertRange, LessThan, Resize,
    };
    pub use crate::container::{Container, Sequence};
    pub use crate::cursor::{
        BidirectionalCursor, BidirectionalTag, Common, ContiguousCursor, ContiguousTag, Cursor,
        CursorMut, ForwardTag, RandomAccessCursor, RandomAccessTag,
    };
    pub use crate::derive::Comparisons;
    pub use crate::error::OutOfRange;
    #[cfg(feature = "detect")]
    pub use crate::detect::Registered;
    pub use macros::{Container, caps_check, offers};
}
