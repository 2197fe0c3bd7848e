//! # Layer 0: Primitives
//!
//! - `bool.rs`: type-level `Present` / `Absent`, used by the traversal
//!   category tags to answer "at least X?" at the type level.

pub mod bool;

pub use bool::{Absent, Bool, Present};
