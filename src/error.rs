//! Run-time faults reported by derived operations.

/// A checked index was not strictly less than the element count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
#[error("index {index} out of range for a container of length {len}")]
pub struct OutOfRange {
    pub index: usize,
    pub len: usize,
}
