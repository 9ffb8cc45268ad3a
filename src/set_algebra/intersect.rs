//! Set intersection preserving the order of the first source.

use std::fmt;
use std::hash::BuildHasher;
use std::iter::FusedIterator;

use crate::equivalence::Equivalence;
use crate::seen_set::{DefaultHashBuilder, SeenSet};

/// Lazy iterator over the elements of one source that also appear in another.
///
/// Created by [`intersect`] and [`intersect_with_hasher`].
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Intersect<I: Iterator, J, E, S = DefaultHashBuilder> {
    source: I,
    required: Option<J>,
    candidates: SeenSet<I::Item, E, S>,
}

/// Yields the first occurrence of each element of `first` that has an
/// equivalent in `second`.
///
/// `second` is drained into a hash set once, on the first pull. Each match
/// removes its entry from that set, so a repeated element of `first` is
/// never emitted twice and no clones of `first`'s elements are kept.
///
/// # Examples
///
/// ```rust
/// use seqops::equivalence::DefaultEquivalence;
/// use seqops::set_algebra::intersect;
///
/// let result: Vec<i32> = intersect([1, 2, 2, 3], [2, 3, 3, 4], DefaultEquivalence).collect();
/// assert_eq!(result, vec![2, 3]);
/// ```
pub fn intersect<I, J, E>(
    first: I,
    second: J,
    equivalence: E,
) -> Intersect<I::IntoIter, J::IntoIter, E>
where
    I: IntoIterator,
    J: IntoIterator<Item = I::Item>,
{
    intersect_with_hasher(first, second, equivalence)
}

/// Like [`intersect`], hashing with `S::default()`.
pub fn intersect_with_hasher<I, J, E, S>(
    first: I,
    second: J,
    equivalence: E,
) -> Intersect<I::IntoIter, J::IntoIter, E, S>
where
    I: IntoIterator,
    J: IntoIterator<Item = I::Item>,
    S: Default,
{
    Intersect {
        source: first.into_iter(),
        required: Some(second.into_iter()),
        candidates: SeenSet::with_hasher(equivalence),
    }
}

impl<I, J, E, S> Iterator for Intersect<I, J, E, S>
where
    I: Iterator,
    J: Iterator<Item = I::Item>,
    E: Equivalence<I::Item>,
    S: BuildHasher,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(required) = self.required.take() {
            self.candidates.extend(required);
            tracing::trace!(
                members = self.candidates.len(),
                "intersect built its membership set"
            );
        }
        if self.candidates.is_empty() {
            return None;
        }
        let candidates = &mut self.candidates;
        self.source.find(|element| candidates.remove(element))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let upper = self.source.size_hint().1;
        if self.required.is_some() {
            return (0, upper);
        }
        let remaining = self.candidates.len();
        (0, Some(upper.map_or(remaining, |upper| upper.min(remaining))))
    }
}

impl<I, J, E, S> FusedIterator for Intersect<I, J, E, S>
where
    I: FusedIterator,
    J: Iterator<Item = I::Item>,
    E: Equivalence<I::Item>,
    S: BuildHasher,
{
}

impl<I, J, E, S> fmt::Debug for Intersect<I, J, E, S>
where
    I: Iterator + fmt::Debug,
    I::Item: fmt::Debug,
    J: fmt::Debug,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Intersect")
            .field("source", &self.source)
            .field("required", &self.required)
            .field("candidates", &self.candidates)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::equivalence::{DefaultEquivalence, KeyEquivalence};
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    #[case(vec![1, 2, 2, 3], vec![2, 3, 3, 4], vec![2, 3])]
    #[case(vec![1, 2, 3], vec![], vec![])]
    #[case(vec![], vec![1, 2, 3], vec![])]
    #[case(vec![3, 1, 2, 1, 3], vec![1, 3], vec![3, 1])]
    fn test_intersect(
        #[case] first: Vec<i32>,
        #[case] second: Vec<i32>,
        #[case] expected: Vec<i32>,
    ) {
        let result: Vec<i32> = intersect(first, second, DefaultEquivalence).collect();
        assert_eq!(result, expected);
    }

    // Once every element of the second source has been matched, nothing more
    // can be emitted, so the first source is not read any further.
    #[rstest]
    fn test_intersect_stops_when_candidates_run_out() {
        let pulled = Cell::new(0);
        let first = (0..1000).inspect(|_| pulled.set(pulled.get() + 1));
        let result: Vec<i32> = intersect(first, [1, 2], DefaultEquivalence).collect();
        assert_eq!(result, vec![1, 2]);
        assert_eq!(pulled.get(), 3);
    }

    #[rstest]
    fn test_intersect_keeps_representative_from_first_source() {
        let by_magnitude = KeyEquivalence::new(|value: &i32| value.abs());
        let result: Vec<i32> = intersect([-1, 2, -3], [1, 3], by_magnitude).collect();
        assert_eq!(result, vec![-1, -3]);
    }

    #[rstest]
    fn test_intersect_size_hint_is_bounded_by_candidates() {
        let mut common = intersect(vec![1, 2, 3, 4, 5], vec![2, 4], DefaultEquivalence);
        assert_eq!(common.size_hint(), (0, Some(5)));
        assert_eq!(common.next(), Some(2));
        assert_eq!(common.size_hint(), (0, Some(1)));
    }
}
