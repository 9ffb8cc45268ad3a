//! Order-preserving deduplication.

use std::fmt;
use std::hash::BuildHasher;
use std::iter::FusedIterator;

use crate::equivalence::Equivalence;
use crate::seen_set::{DefaultHashBuilder, SeenSet};

/// Lazy iterator over the first occurrence of each element.
///
/// Created by [`distinct`] and [`distinct_with_hasher`].
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Distinct<I: Iterator, E, S = DefaultHashBuilder> {
    source: I,
    seen: SeenSet<I::Item, E, S>,
}

/// Yields each element of `source` the first time an equivalent element is
/// seen, in source order.
///
/// Every element is emitted as soon as it is known to be new; the source is
/// never read ahead. The seen set keeps one clone of each emitted element.
///
/// # Examples
///
/// ```rust
/// use seqops::equivalence::{DefaultEquivalence, KeyEquivalence};
/// use seqops::set_algebra::distinct;
///
/// let unique: Vec<i32> = distinct([3, 1, 3, 2, 1], DefaultEquivalence).collect();
/// assert_eq!(unique, vec![3, 1, 2]);
///
/// let by_initial = KeyEquivalence::new(|word: &&str| word.chars().next());
/// let firsts: Vec<&str> = distinct(["apple", "avocado", "banana"], by_initial).collect();
/// assert_eq!(firsts, vec!["apple", "banana"]);
/// ```
pub fn distinct<I, E>(source: I, equivalence: E) -> Distinct<I::IntoIter, E>
where
    I: IntoIterator,
{
    distinct_with_hasher(source, equivalence)
}

/// Like [`distinct`], hashing with `S::default()`.
pub fn distinct_with_hasher<I, E, S>(source: I, equivalence: E) -> Distinct<I::IntoIter, E, S>
where
    I: IntoIterator,
    S: Default,
{
    Distinct {
        source: source.into_iter(),
        seen: SeenSet::with_hasher(equivalence),
    }
}

impl<I, E, S> Iterator for Distinct<I, E, S>
where
    I: Iterator,
    I::Item: Clone,
    E: Equivalence<I::Item>,
    S: BuildHasher,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let seen = &mut self.seen;
        self.source.find(|element| seen.insert(element))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.source.size_hint();
        (usize::from(lower > 0 && self.seen.is_empty()), upper)
    }
}

impl<I, E, S> FusedIterator for Distinct<I, E, S>
where
    I: FusedIterator,
    I::Item: Clone,
    E: Equivalence<I::Item>,
    S: BuildHasher,
{
}

impl<I, E, S> fmt::Debug for Distinct<I, E, S>
where
    I: Iterator + fmt::Debug,
    I::Item: fmt::Debug,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Distinct")
            .field("source", &self.source)
            .field("seen", &self.seen)
            .finish()
    }
}
