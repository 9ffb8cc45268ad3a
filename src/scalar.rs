//! Scalar and search operations.
//!
//! Each function in this module consumes its source, fully or up to the
//! first decisive element, and returns a single value. Sources are anything
//! implementing `IntoIterator`, so slices, vectors, and lazy adapters from
//! [`crate::set_algebra`] are all accepted.
//!
//! # Short-circuiting
//!
//! | Operation         | Stops at                                   |
//! |-------------------|--------------------------------------------|
//! | [`all`]           | first failing element                      |
//! | [`any`]           | first matching element                     |
//! | [`contains`]      | first equivalent element                   |
//! | [`count`]         | never, full scan                           |
//! | [`element_at`]    | the requested position                     |
//! | [`first`]         | first matching element                     |
//! | [`last`]          | never, full scan                           |
//! | [`last_from_back`]| last matching element, scanning backwards  |
//! | [`single`]        | second matching element                    |
//! | [`sequence_equal`]| first mismatch or length divergence        |
//!
//! # Examples
//!
//! ```rust
//! use seqops::scalar::{all, any, element_at, single};
//! use seqops::SequenceError;
//!
//! let values = vec![10, 20, 30];
//! assert!(all(&values, |value| **value >= 10));
//! assert!(!any(&values, |value| **value > 30));
//! assert_eq!(element_at(&values, 1), Ok(&20));
//! assert_eq!(single(&values, |value| **value > 5), Err(SequenceError::AmbiguousMatch));
//! ```

use crate::equivalence::Equivalence;
use crate::error::{SequenceError, SequenceResult};

/// Returns `true` if `predicate` holds for every element.
///
/// An empty source yields `true`.
///
/// # Examples
///
/// ```rust
/// use seqops::scalar::all;
///
/// assert!(all([2, 4, 6], |value| value % 2 == 0));
/// assert!(all(Vec::<i32>::new(), |_| false));
/// ```
pub fn all<I, P>(source: I, mut predicate: P) -> bool
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
{
    source.into_iter().all(|element| predicate(&element))
}

/// Returns `true` if `predicate` holds for at least one element.
///
/// An empty source yields `false`.
///
/// # Examples
///
/// ```rust
/// use seqops::scalar::any;
///
/// assert!(any([1, 2, 3], |value| *value == 2));
/// assert!(!any(Vec::<i32>::new(), |_| true));
/// ```
pub fn any<I, P>(source: I, mut predicate: P) -> bool
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
{
    source.into_iter().any(|element| predicate(&element))
}

/// Returns `true` if some element is equivalent to `item`.
///
/// # Examples
///
/// ```rust
/// use seqops::equivalence::{DefaultEquivalence, KeyEquivalence};
/// use seqops::scalar::contains;
///
/// assert!(contains([1, 2, 3], &2, DefaultEquivalence));
///
/// let by_length = KeyEquivalence::new(|text: &&str| text.len());
/// assert!(contains(["abc", "de"], &"xy", by_length));
/// ```
pub fn contains<I, E>(source: I, item: &I::Item, equivalence: E) -> bool
where
    I: IntoIterator,
    E: Equivalence<I::Item>,
{
    source
        .into_iter()
        .any(|element| equivalence.equivalent(&element, item))
}

/// Returns the number of elements satisfying `predicate`.
///
/// # Examples
///
/// ```rust
/// use seqops::scalar::count;
///
/// assert_eq!(count([1, 2, 3, 4], |value| value % 2 == 0), 2);
/// ```
pub fn count<I, P>(source: I, mut predicate: P) -> usize
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
{
    source
        .into_iter()
        .filter(|element| predicate(element))
        .count()
}

/// Returns the element at zero-based `index`.
///
/// When the source reports an exact length through `size_hint`, the index is
/// checked before any element is consumed. Otherwise the source is scanned
/// up to the index.
///
/// # Errors
///
/// Returns [`SequenceError::OutOfRange`] if `index` is negative or not less
/// than the number of elements.
///
/// # Examples
///
/// ```rust
/// use seqops::scalar::element_at;
/// use seqops::SequenceError;
///
/// assert_eq!(element_at([10, 20, 30], 1), Ok(20));
/// assert_eq!(
///     element_at([10, 20, 30], 5),
///     Err(SequenceError::OutOfRange { index: 5, length: 3 })
/// );
/// assert_eq!(
///     element_at([10, 20, 30], -1),
///     Err(SequenceError::OutOfRange { index: -1, length: 0 })
/// );
/// ```
pub fn element_at<I>(source: I, index: isize) -> SequenceResult<I::Item>
where
    I: IntoIterator,
{
    let Ok(position) = usize::try_from(index) else {
        tracing::debug!(index, "element_at rejected a negative index");
        return Err(SequenceError::OutOfRange { index, length: 0 });
    };

    let mut iterator = source.into_iter();
    let (lower, upper) = iterator.size_hint();
    if upper == Some(lower) {
        if position >= lower {
            tracing::debug!(index, length = lower, "element_at index past the end");
            return Err(SequenceError::OutOfRange {
                index,
                length: lower,
            });
        }
        return iterator.nth(position).ok_or_else(|| {
            tracing::debug!(index, length = lower, "element_at index past the end");
            SequenceError::OutOfRange {
                index,
                length: lower,
            }
        });
    }

    let mut length = 0;
    for element in iterator {
        if length == position {
            return Ok(element);
        }
        length += 1;
    }
    tracing::debug!(index, length, "element_at index past the end");
    Err(SequenceError::OutOfRange { index, length })
}

/// Returns the first element satisfying `predicate`.
///
/// # Errors
///
/// Returns [`SequenceError::NotFound`] if no element matches.
///
/// # Examples
///
/// ```rust
/// use seqops::scalar::first;
/// use seqops::SequenceError;
///
/// assert_eq!(first([1, 5, 7], |value| *value > 3), Ok(5));
/// assert_eq!(first([1, 2], |value| *value > 3), Err(SequenceError::NotFound));
/// ```
pub fn first<I, P>(source: I, mut predicate: P) -> SequenceResult<I::Item>
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
{
    source
        .into_iter()
        .find(|element| predicate(element))
        .ok_or(SequenceError::NotFound)
}

/// Returns the last element satisfying `predicate`.
///
/// The source is scanned once from the front, keeping the most recent match,
/// so forward-only sources need no buffering. For sources that can be
/// traversed backwards, [`last_from_back`] stops at the first hit instead.
///
/// # Errors
///
/// Returns [`SequenceError::NotFound`] if no element matches.
///
/// # Examples
///
/// ```rust
/// use seqops::scalar::last;
///
/// assert_eq!(last([1, 5, 7, 2], |value| *value > 3), Ok(7));
/// ```
pub fn last<I, P>(source: I, mut predicate: P) -> SequenceResult<I::Item>
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
{
    source
        .into_iter()
        .fold(None, |latest, element| {
            if predicate(&element) {
                Some(element)
            } else {
                latest
            }
        })
        .ok_or(SequenceError::NotFound)
}

/// Returns the last element satisfying `predicate`, scanning from the back.
///
/// # Errors
///
/// Returns [`SequenceError::NotFound`] if no element matches.
///
/// # Examples
///
/// ```rust
/// use seqops::scalar::last_from_back;
///
/// assert_eq!(last_from_back(vec![1, 5, 7, 2], |value| *value > 3), Ok(7));
/// ```
pub fn last_from_back<I, P>(source: I, mut predicate: P) -> SequenceResult<I::Item>
where
    I: IntoIterator,
    I::IntoIter: DoubleEndedIterator,
    P: FnMut(&I::Item) -> bool,
{
    source
        .into_iter()
        .rfind(|element| predicate(element))
        .ok_or(SequenceError::NotFound)
}

/// Returns the only element satisfying `predicate`.
///
/// Scanning stops as soon as a second match is seen.
///
/// # Errors
///
/// Returns [`SequenceError::AmbiguousMatch`] if more than one element
/// matches, and [`SequenceError::NotFound`] if none does.
///
/// # Examples
///
/// ```rust
/// use seqops::scalar::single;
/// use seqops::SequenceError;
///
/// assert_eq!(single([1, 2, 3], |value| *value == 2), Ok(2));
/// assert_eq!(single([1, 2, 3, 2], |value| *value == 2), Err(SequenceError::AmbiguousMatch));
/// assert_eq!(single([1, 2, 3], |value| *value == 9), Err(SequenceError::NotFound));
/// ```
pub fn single<I, P>(source: I, mut predicate: P) -> SequenceResult<I::Item>
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
{
    let mut found = None;
    for element in source {
        if predicate(&element) {
            if found.is_some() {
                tracing::debug!("single found a second matching element");
                return Err(SequenceError::AmbiguousMatch);
            }
            found = Some(element);
        }
    }
    found.ok_or(SequenceError::NotFound)
}

/// Returns `true` if both sequences have the same length and pairwise
/// equivalent elements.
///
/// Both sources are advanced in lockstep. Comparison stops at the first
/// mismatch or as soon as one source runs out before the other, so neither
/// input is buffered.
///
/// # Examples
///
/// ```rust
/// use seqops::equivalence::DefaultEquivalence;
/// use seqops::scalar::sequence_equal;
///
/// assert!(sequence_equal([1, 2, 3], [1, 2, 3], DefaultEquivalence));
/// assert!(!sequence_equal([1, 2, 3], [1, 2], DefaultEquivalence));
/// ```
pub fn sequence_equal<I, J, E>(first: I, second: J, equivalence: E) -> bool
where
    I: IntoIterator,
    J: IntoIterator<Item = I::Item>,
    E: Equivalence<I::Item>,
{
    let mut left = first.into_iter();
    let mut right = second.into_iter();
    loop {
        match (left.next(), right.next()) {
            (None, None) => return true,
            (Some(left_element), Some(right_element)) => {
                if !equivalence.equivalent(&left_element, &right_element) {
                    return false;
                }
            }
            _ => return false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::equivalence::{DefaultEquivalence, KeyEquivalence};
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    #[case(vec![], true)]
    #[case(vec![2, 4], true)]
    #[case(vec![2, 3, 4], false)]
    fn test_all(#[case] values: Vec<i32>, #[case] expected: bool) {
        assert_eq!(all(values, |value| value % 2 == 0), expected);
    }

    #[rstest]
    fn test_all_short_circuits_on_first_failure() {
        let calls = Cell::new(0);
        let result = all([1, 10, 2, 3], |value| {
            calls.set(calls.get() + 1);
            *value < 5
        });
        assert!(!result);
        assert_eq!(calls.get(), 2);
    }

    #[rstest]
    fn test_any_short_circuits_on_first_match() {
        let calls = Cell::new(0);
        let result = any([1, 10, 2, 30], |value| {
            calls.set(calls.get() + 1);
            *value > 5
        });
        assert!(result);
        assert_eq!(calls.get(), 2);
    }

    #[rstest]
    fn test_contains_with_custom_equivalence() {
        let case_insensitive = KeyEquivalence::new(|text: &String| text.to_lowercase());
        let words = vec!["Alpha".to_string(), "Beta".to_string()];
        assert!(contains(words.clone(), &"BETA".to_string(), &case_insensitive));
        assert!(!contains(words, &"gamma".to_string(), &case_insensitive));
    }

    #[rstest]
    fn test_count_scans_everything() {
        let calls = Cell::new(0);
        let total = count([1, 2, 3, 4, 5], |value| {
            calls.set(calls.get() + 1);
            *value > 2
        });
        assert_eq!(total, 3);
        assert_eq!(calls.get(), 5);
    }

    #[rstest]
    #[case(0, Ok(10))]
    #[case(2, Ok(30))]
    #[case(3, Err(SequenceError::OutOfRange { index: 3, length: 3 }))]
    #[case(-1, Err(SequenceError::OutOfRange { index: -1, length: 0 }))]
    fn test_element_at_exact_size(#[case] index: isize, #[case] expected: SequenceResult<i32>) {
        assert_eq!(element_at(vec![10, 20, 30], index), expected);
    }

    #[rstest]
    #[case(1, Ok(20))]
    #[case(5, Err(SequenceError::OutOfRange { index: 5, length: 3 }))]
    fn test_element_at_without_exact_size(
        #[case] index: isize,
        #[case] expected: SequenceResult<i32>,
    ) {
        let unsized_source = [10, 20, 30].into_iter().filter(|_| true);
        assert_eq!(element_at(unsized_source, index), expected);
    }

    #[rstest]
    fn test_element_at_stops_at_index() {
        let pulled = Cell::new(0);
        let source = (0..100).inspect(|_| pulled.set(pulled.get() + 1)).filter(|_| true);
        assert_eq!(element_at(source, 4), Ok(4));
        assert_eq!(pulled.get(), 5);
    }

    #[rstest]
    #[case(3)]
    #[case(5)]
    fn test_element_at_exact_size_rejects_without_pulling(#[case] index: isize) {
        let pulled = Cell::new(0);
        let source = vec![10, 20, 30].into_iter().map(|value| {
            pulled.set(pulled.get() + 1);
            value
        });
        assert_eq!(
            element_at(source, index),
            Err(SequenceError::OutOfRange { index, length: 3 })
        );
        assert_eq!(pulled.get(), 0);
    }

    #[rstest]
    fn test_first_and_last_agree_on_single_match() {
        assert_eq!(first([1, 2, 3], |value| *value == 2), Ok(2));
        assert_eq!(last([1, 2, 3], |value| *value == 2), Ok(2));
    }

    // A match equal to the type's default value must still be reported as found.
    #[rstest]
    fn test_zero_valued_match_is_not_confused_with_absence() {
        assert_eq!(first([3, 0, 5], |value| *value == 0), Ok(0));
        assert_eq!(last([0, 3, 5], |value| *value == 0), Ok(0));
        assert_eq!(single([3, 0, 5], |value| *value == 0), Ok(0));
        assert_eq!(
            single([0, 0], |value| *value == 0),
            Err(SequenceError::AmbiguousMatch)
        );
    }

    #[rstest]
    fn test_last_variants_agree() {
        let values = vec![4, 8, 15, 16, 23, 42];
        let predicate = |value: &i32| value % 2 == 1;
        assert_eq!(last(values.clone(), predicate), Ok(23));
        assert_eq!(last_from_back(values, predicate), Ok(23));
    }

    #[rstest]
    fn test_last_from_back_stops_at_first_hit() {
        let calls = Cell::new(0);
        let result = last_from_back(vec![1, 2, 3, 4], |value| {
            calls.set(calls.get() + 1);
            *value < 4
        });
        assert_eq!(result, Ok(3));
        assert_eq!(calls.get(), 2);
    }

    #[rstest]
    fn test_single_stops_at_second_match() {
        let calls = Cell::new(0);
        let result = single([2, 1, 2, 5, 2], |value| {
            calls.set(calls.get() + 1);
            *value == 2
        });
        assert_eq!(result, Err(SequenceError::AmbiguousMatch));
        assert_eq!(calls.get(), 3);
    }

    #[rstest]
    #[case(vec![1, 2, 3], vec![1, 2, 3], true)]
    #[case(vec![1, 2, 3], vec![1, 2], false)]
    #[case(vec![1, 2], vec![1, 2, 3], false)]
    #[case(vec![1, 9, 3], vec![1, 2, 3], false)]
    #[case(vec![], vec![], true)]
    fn test_sequence_equal(
        #[case] left: Vec<i32>,
        #[case] right: Vec<i32>,
        #[case] expected: bool,
    ) {
        assert_eq!(sequence_equal(left, right, DefaultEquivalence), expected);
    }

    #[rstest]
    fn test_sequence_equal_stops_at_first_mismatch() {
        let pulled = Cell::new(0);
        let left = (0..1000).inspect(|_| pulled.set(pulled.get() + 1));
        let right = [0, 1, 99, 3];
        assert!(!sequence_equal(left, right, DefaultEquivalence));
        assert_eq!(pulled.get(), 3);
    }

    #[rstest]
    #[should_panic(expected = "predicate failure")]
    fn test_predicate_panic_propagates() {
        let _ = count([1, 2, 3], |value| {
            assert!(*value < 2, "predicate failure");
            true
        });
    }
}
