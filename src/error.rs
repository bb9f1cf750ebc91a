//! Errors reported by fallible vector operations.
//!
//! Note that out-of-range `get` is deliberately not an error; it returns
//! `None` instead.

/// The error type for operations on [`Vector`](crate::Vector) and
/// [`Slice`](crate::Slice).
///
/// Fallible operations are atomic: when they return an error, the receiver
/// is observably unchanged (the new version is fully built before being
/// returned).
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// An index was past the end for an operation that requires an existing
    /// slot, like `set`.
    #[error("index {index} out of bounds for length {len}")]
    IndexOutOfBounds { index: usize, len: usize },
    /// `reduce` was called on an empty vector, which has no first element to
    /// seed the accumulator with.
    #[error("reduce called on an empty vector with no initial value")]
    ReduceOnEmpty,
}
