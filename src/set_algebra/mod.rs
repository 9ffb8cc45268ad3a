//! Lazy set-algebra operations.
//!
//! Each operation returns an iterator adapter that owns its sources and a
//! [`SeenSet`](crate::SeenSet). Elements are produced on demand, one
//! per call to `next`, and each adapter yields every equivalence class at
//! most once, in the order its first representative appears.
//!
//! - [`distinct`]: first occurrences of a single source
//! - [`except`]: first occurrences of the first source absent from the second
//! - [`intersect`]: first occurrences of the first source present in the second
//! - [`union`]: first occurrences across both sources, first source first
//!
//! # Complexity
//!
//! | Operation   | Time (expected) | Auxiliary memory          |
//! |-------------|-----------------|---------------------------|
//! | `distinct`  | O(n)            | O(distinct(n))            |
//! | `except`    | O(n + m)        | O(m + distinct(n))        |
//! | `intersect` | O(n + m)        | O(m)                      |
//! | `union`     | O(n + m)        | O(distinct(n + m))        |
//!
//! `except` and `intersect` drain the second source into a membership set on
//! the first call to `next`, never earlier and never more than once.
//!
//! # Examples
//!
//! ```rust
//! use seqops::equivalence::DefaultEquivalence;
//! use seqops::set_algebra::{except, intersect, union};
//!
//! let left = vec![1, 2, 2, 3];
//! let right = vec![2, 3, 3, 4];
//!
//! let common: Vec<i32> = intersect(left.clone(), right.clone(), DefaultEquivalence).collect();
//! assert_eq!(common, vec![2, 3]);
//!
//! let only_left: Vec<i32> = except(left.clone(), right.clone(), DefaultEquivalence).collect();
//! assert_eq!(only_left, vec![1]);
//!
//! let everything: Vec<i32> = union(left, right, DefaultEquivalence).collect();
//! assert_eq!(everything, vec![1, 2, 3, 4]);
//! ```

mod distinct;
mod except;
mod intersect;
mod union;

pub use distinct::{Distinct, distinct, distinct_with_hasher};
pub use except::{Except, except, except_with_hasher};
pub use intersect::{Intersect, intersect, intersect_with_hasher};
pub use union::{Union, union, union_with_hasher};
