//! Deduplicated concatenation of two sources.

use std::fmt;
use std::hash::BuildHasher;
use std::iter::FusedIterator;

use crate::equivalence::Equivalence;
use crate::seen_set::{DefaultHashBuilder, SeenSet};

/// Lazy iterator over the distinct elements of two sources, first source first.
///
/// Created by [`union`] and [`union_with_hasher`].
///
/// `leading` holds the first source until it is exhausted, after which it is
/// dropped and elements come from `trailing`. Both phases share `seen`.
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Union<I: Iterator, J, E, S = DefaultHashBuilder> {
    leading: Option<I>,
    trailing: J,
    seen: SeenSet<I::Item, E, S>,
}

/// Yields every element of `first` then every element of `second`, skipping
/// anything equivalent to an element already yielded.
///
/// The result equals `distinct` over the concatenation of both sources.
///
/// # Examples
///
/// ```rust
/// use seqops::equivalence::DefaultEquivalence;
/// use seqops::set_algebra::union;
///
/// let result: Vec<i32> = union([3, 1, 3], [2, 1, 4], DefaultEquivalence).collect();
/// assert_eq!(result, vec![3, 1, 2, 4]);
/// ```
pub fn union<I, J, E>(first: I, second: J, equivalence: E) -> Union<I::IntoIter, J::IntoIter, E>
where
    I: IntoIterator,
    J: IntoIterator<Item = I::Item>,
{
    union_with_hasher(first, second, equivalence)
}

/// Like [`union`], hashing with `S::default()`.
pub fn union_with_hasher<I, J, E, S>(
    first: I,
    second: J,
    equivalence: E,
) -> Union<I::IntoIter, J::IntoIter, E, S>
where
    I: IntoIterator,
    J: IntoIterator<Item = I::Item>,
    S: Default,
{
    Union {
        leading: Some(first.into_iter()),
        trailing: second.into_iter(),
        seen: SeenSet::with_hasher(equivalence),
    }
}

impl<I, J, E, S> Iterator for Union<I, J, E, S>
where
    I: Iterator,
    I::Item: Clone,
    J: Iterator<Item = I::Item>,
    E: Equivalence<I::Item>,
    S: BuildHasher,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let seen = &mut self.seen;
        if let Some(leading) = &mut self.leading {
            if let Some(element) = leading.find(|element| seen.insert(element)) {
                return Some(element);
            }
            self.leading = None;
            tracing::trace!(emitted = seen.len(), "union exhausted its first source");
        }
        self.trailing.find(|element| seen.insert(element))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (trailing_lower, trailing_upper) = self.trailing.size_hint();
        let (leading_lower, leading_upper) = self
            .leading
            .as_ref()
            .map_or((0, Some(0)), Iterator::size_hint);
        let lower =
            usize::from(self.seen.is_empty() && (leading_lower > 0 || trailing_lower > 0));
        let upper = leading_upper.and_then(|leading| trailing_upper?.checked_add(leading));
        (lower, upper)
    }
}

impl<I, J, E, S> FusedIterator for Union<I, J, E, S>
where
    I: Iterator,
    I::Item: Clone,
    J: FusedIterator<Item = I::Item>,
    E: Equivalence<I::Item>,
    S: BuildHasher,
{
}

impl<I, J, E, S> fmt::Debug for Union<I, J, E, S>
where
    I: Iterator + fmt::Debug,
    I::Item: fmt::Debug,
    J: fmt::Debug,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Union")
            .field("leading", &self.leading)
            .field("trailing", &self.trailing)
            .field("seen", &self.seen)
            .finish()
    }
}
