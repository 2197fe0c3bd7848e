//! # Layer 2: Capabilities
//!
//! Optional primitives a candidate can supply on top of [`Sequence`], and
//! the value-level vocabulary ([`Capability`], [`CapabilitySet`]) the rule
//! table and the detector share.
//!
//! [`Sequence`]: crate::Sequence

pub mod set;
pub mod traits;

pub use set::{Capability, CapabilitySet, ElementSet};
pub use traits::{Clear, Emplace, EmplaceBack, EmplaceFront, EraseRange, InsertRange, LessThan, Resize};
