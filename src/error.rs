//! Error types for sequence operations.
//!
//! Every fallible operation in this crate reports one of the
//! [`SequenceError`] variants. Errors are raised at the point of detection
//! and are never retried or corrected internally.

use thiserror::Error;

/// Represents the conditions under which a sequence operation cannot
/// produce a value.
///
/// # Examples
///
/// ```rust
/// use seqops::SequenceError;
///
/// let error = SequenceError::OutOfRange { index: 5, length: 3 };
/// assert_eq!(
///     format!("{error}"),
///     "index 5 is out of range for a sequence of 3 elements"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SequenceError {
    /// The requested index is negative or not less than the sequence length.
    #[error("index {index} is out of range for a sequence of {length} elements")]
    OutOfRange {
        /// The index that was requested.
        index: isize,
        /// The number of elements observed before the index was rejected.
        length: usize,
    },
    /// More than one element satisfied a predicate that must match exactly once.
    #[error("sequence contains more than one matching element")]
    AmbiguousMatch,
    /// No element satisfied the predicate.
    #[error("sequence contains no matching element")]
    NotFound,
}

/// Result alias for fallible sequence operations.
pub type SequenceResult<T> = Result<T, SequenceError>;

static_assertions::assert_impl_all!(SequenceError: Send, Sync, Clone, std::error::Error);
