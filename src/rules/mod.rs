//! # Layer 3: Derivation Rule Table
//!
//! A static, total mapping from each derived operation to the primitives,
//! element properties and traversal conditions it needs.
//!
//! The table is the value-level mirror of the `where` clauses on
//! [`Container`](crate::Container). It is what `profile!` reports and what
//! the witness tests cross-check against the real method bounds.

pub mod profile;
pub mod table;

pub use profile::{Access, PairShape, Profile, Traversal, TraversalGate};
pub use table::{DerivedOp, OperationSet, RULES, Rule};
