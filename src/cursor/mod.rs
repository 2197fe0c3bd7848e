//! # Layer 1: Cursors
//!
//! The traversal object contract and everything that classifies or adapts
//! traversal objects.
//!
//! ```text
//! cursor/
//! ├── category.rs  - Category values and type-level tags
//! ├── traits.rs    - Cursor, CursorMut, Bidirectional/RandomAccess/Contiguous, Common
//! ├── classify.rs  - Declared category verification, element counting strategies
//! ├── reverse.rs   - Reverse<C> adapter
//! └── iter.rs      - std Iterator over the immutable pair
//! ```

pub mod category;
pub mod classify;
pub mod iter;
pub mod reverse;
pub mod traits;

pub use category::{BidirectionalTag, Category, CategoryTag, ContiguousTag, ForwardTag, RandomAccessTag};
pub use classify::{Classified, CountBy, Measure, Satisfies, Subtract, Walk};
pub use iter::Iter;
pub use reverse::Reverse;
pub use traits::{BidirectionalCursor, Common, ContiguousCursor, Cursor, CursorMut, RandomAccessCursor};

pub(crate) use traits::to_offset;
