//! Method syntax for sequence operations.
//!
//! [`SequenceExt`] is implemented for every [`Iterator`] and forwards to the
//! free functions in [`crate::scalar`], [`crate::set_algebra`] and
//! [`crate::filtering`]. Method names avoid those already provided by
//! `Iterator` so both traits can be in scope together.
//!
//! # Examples
//!
//! ```rust
//! use seqops::equivalence::DefaultEquivalence;
//! use seqops::SequenceExt;
//!
//! let result: Vec<i32> = vec![5, 1, 5, 2, 8, 1]
//!     .into_iter()
//!     .skip_while_matching(|value| *value > 4)
//!     .union([3, 2, 9], DefaultEquivalence)
//!     .except([9], DefaultEquivalence)
//!     .collect();
//! assert_eq!(result, vec![1, 5, 2, 8, 3]);
//! ```

use crate::equivalence::Equivalence;
use crate::error::SequenceResult;
use crate::filtering::{SkipWhile, Where, skip_while_matching, where_matching};
use crate::scalar;
use crate::set_algebra::{Distinct, Except, Intersect, Union, distinct, except, intersect, union};

/// Extension methods for piping iterators through sequence operations.
pub trait SequenceExt: Iterator + Sized {
    /// See [`set_algebra::distinct`](crate::set_algebra::distinct).
    fn distinct<E>(self, equivalence: E) -> Distinct<Self, E>
    where
        E: Equivalence<Self::Item>,
    {
        distinct(self, equivalence)
    }

    /// See [`set_algebra::except`](crate::set_algebra::except).
    fn except<J, E>(self, other: J, equivalence: E) -> Except<Self, J::IntoIter, E>
    where
        J: IntoIterator<Item = Self::Item>,
        E: Equivalence<Self::Item>,
    {
        except(self, other, equivalence)
    }

    /// See [`set_algebra::intersect`](crate::set_algebra::intersect).
    fn intersect<J, E>(self, other: J, equivalence: E) -> Intersect<Self, J::IntoIter, E>
    where
        J: IntoIterator<Item = Self::Item>,
        E: Equivalence<Self::Item>,
    {
        intersect(self, other, equivalence)
    }

    /// See [`set_algebra::union`](crate::set_algebra::union).
    fn union<J, E>(self, other: J, equivalence: E) -> Union<Self, J::IntoIter, E>
    where
        J: IntoIterator<Item = Self::Item>,
        E: Equivalence<Self::Item>,
    {
        union(self, other, equivalence)
    }

    /// See [`filtering::where_matching`](crate::filtering::where_matching).
    fn where_matching<P>(self, predicate: P) -> Where<Self, P>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        where_matching(self, predicate)
    }

    /// See [`filtering::skip_while_matching`](crate::filtering::skip_while_matching).
    fn skip_while_matching<P>(self, predicate: P) -> SkipWhile<Self, P>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        skip_while_matching(self, predicate)
    }

    /// See [`scalar::contains`].
    fn contains_item<E>(self, item: &Self::Item, equivalence: E) -> bool
    where
        E: Equivalence<Self::Item>,
    {
        scalar::contains(self, item, equivalence)
    }

    /// See [`scalar::element_at`].
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::OutOfRange`](crate::SequenceError::OutOfRange)
    /// for a negative or too-large index.
    fn element_at(self, index: isize) -> SequenceResult<Self::Item> {
        scalar::element_at(self, index)
    }

    /// See [`scalar::first`].
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::NotFound`](crate::SequenceError::NotFound)
    /// if nothing matches.
    fn first_matching<P>(self, predicate: P) -> SequenceResult<Self::Item>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        scalar::first(self, predicate)
    }

    /// See [`scalar::last`].
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::NotFound`](crate::SequenceError::NotFound)
    /// if nothing matches.
    fn last_matching<P>(self, predicate: P) -> SequenceResult<Self::Item>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        scalar::last(self, predicate)
    }

    /// See [`scalar::single`].
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::AmbiguousMatch`](crate::SequenceError::AmbiguousMatch)
    /// or [`SequenceError::NotFound`](crate::SequenceError::NotFound).
    fn single<P>(self, predicate: P) -> SequenceResult<Self::Item>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        scalar::single(self, predicate)
    }

    /// See [`scalar::sequence_equal`].
    fn sequence_equal<J, E>(self, other: J, equivalence: E) -> bool
    where
        J: IntoIterator<Item = Self::Item>,
        E: Equivalence<Self::Item>,
    {
        scalar::sequence_equal(self, other, equivalence)
    }
}

impl<I: Iterator> SequenceExt for I {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SequenceError;
    use crate::equivalence::{DefaultEquivalence, KeyEquivalence};
    use rstest::rstest;

    #[rstest]
    fn test_methods_match_free_functions() {
        let left = vec![4, 1, 4, 2];
        let right = vec![2, 7];

        let piped: Vec<i32> = left.clone().into_iter().distinct(DefaultEquivalence).collect();
        let direct: Vec<i32> = distinct(left.clone(), DefaultEquivalence).collect();
        assert_eq!(piped, direct);

        let piped: Vec<i32> = left
            .clone()
            .into_iter()
            .intersect(right.clone(), DefaultEquivalence)
            .collect();
        assert_eq!(piped, vec![2]);

        let piped: Vec<i32> = left.into_iter().except(right, DefaultEquivalence).collect();
        assert_eq!(piped, vec![4, 1]);
    }

    #[rstest]
    fn test_scalar_methods() {
        assert_eq!([10, 20, 30].into_iter().element_at(2), Ok(30));
        assert_eq!([1, 2, 3].into_iter().single(|value| *value > 2), Ok(3));
        assert_eq!(
            [1, 2, 3].into_iter().first_matching(|value| *value > 5),
            Err(SequenceError::NotFound)
        );
        assert_eq!([1, 2, 3].into_iter().last_matching(|value| *value < 3), Ok(2));
        assert!([1, 2].into_iter().sequence_equal([1, 2], DefaultEquivalence));
        assert!(["a", "B"].into_iter().contains_item(
            &"b",
            KeyEquivalence::new(|text: &&str| text.to_ascii_lowercase())
        ));
    }

    #[rstest]
    fn test_pipeline_composes_lazily() {
        let result: Vec<i32> = (1..)
            .where_matching(|value| value % 3 == 0)
            .distinct(DefaultEquivalence)
            .take(3)
            .collect();
        assert_eq!(result, vec![3, 6, 9]);
    }
}
