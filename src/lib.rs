//! # seqops
//!
//! Sequence and set operations over lazily produced element streams.
//!
//! ## Overview
//!
//! Every operation takes its inputs as `IntoIterator` values and leaves
//! them untouched. Operations fall into two groups:
//!
//! - **Scalar / search** ([`scalar`]): `all`, `any`, `contains`, `count`,
//!   `element_at`, `first`, `last`, `single`, `sequence_equal`
//! - **Lazy adapters** ([`set_algebra`], [`filtering`]): `distinct`,
//!   `except`, `intersect`, `union`, `where_matching`, `skip_while_matching`
//!
//! Lazy adapters are ordinary iterators and compose by nesting calls or,
//! with [`SequenceExt`], by method chaining.
//!
//! ## Equality
//!
//! Operations that compare elements take an explicit
//! [`Equivalence`](equivalence::Equivalence) value. Use
//! [`DefaultEquivalence`](equivalence::DefaultEquivalence) for the element's
//! own `Eq + Hash`, or [`KeyEquivalence`](equivalence::KeyEquivalence) and
//! [`FnEquivalence`](equivalence::FnEquivalence) for custom rules.
//!
//! ## Feature Flags
//!
//! - `fxhash`: hash seen sets with `rustc_hash::FxBuildHasher`
//! - `ahash`: hash seen sets with `ahash::RandomState`
//!
//! Without either feature the standard library's `RandomState` is used.
//!
//! ## Example
//!
//! ```rust
//! use seqops::equivalence::DefaultEquivalence;
//! use seqops::scalar::{all, any};
//! use seqops::set_algebra::{distinct, intersect};
//!
//! let left = vec![1, 2, 2, 3];
//! let right = vec![2, 3, 3, 4];
//!
//! let common: Vec<i32> = intersect(&left, &right, DefaultEquivalence).copied().collect();
//! assert_eq!(common, vec![2, 3]);
//!
//! let unique: Vec<&i32> = distinct(&left, DefaultEquivalence).collect();
//! assert_eq!(unique, vec![&1, &2, &3]);
//!
//! assert_eq!(all(&left, |value| **value > 0), !any(&left, |value| **value <= 0));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the equivalence strategies, the error type, and
/// [`SequenceExt`].
///
/// # Usage
///
/// ```rust
/// use seqops::prelude::*;
///
/// let unique: Vec<i32> = [1, 1, 2].into_iter().distinct(DefaultEquivalence).collect();
/// assert_eq!(unique, vec![1, 2]);
/// ```
pub mod prelude {
    pub use crate::SequenceExt;
    pub use crate::equivalence::*;
    pub use crate::error::*;
}

pub mod equivalence;
pub mod error;
pub mod filtering;
pub mod scalar;
pub mod seen_set;
pub mod sequence_ext;
pub mod set_algebra;

pub use error::{SequenceError, SequenceResult};
pub use seen_set::{DefaultHashBuilder, SeenSet};
pub use sequence_ext::SequenceExt;
