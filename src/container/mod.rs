//! # Layer 4: Candidate Contract and Derived Surface
//!
//! ```text
//! container/
//! ├── sequence.rs  - Sequence: what a candidate supplies
//! └── surface.rs   - Container: what it gets back
//! ```

pub mod sequence;
pub mod surface;

pub use sequence::Sequence;
pub use surface::Container;
