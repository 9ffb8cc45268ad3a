//! Set difference preserving the order of the first source.

use std::fmt;
use std::hash::BuildHasher;
use std::iter::FusedIterator;

use crate::equivalence::Equivalence;
use crate::seen_set::{DefaultHashBuilder, SeenSet};

/// Lazy iterator over the elements of one source that are absent from another.
///
/// Created by [`except`] and [`except_with_hasher`].
///
/// The adapter is in one of two states. While `excluded` is still held, the
/// membership set has not been built. The first call to `next` drains it into
/// `seen` and the adapter streams from then on.
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Except<I: Iterator, J, E, S = DefaultHashBuilder> {
    source: I,
    excluded: Option<J>,
    seen: SeenSet<I::Item, E, S>,
}

/// Yields the first occurrence of each element of `first` that has no
/// equivalent in `second`.
///
/// `second` is drained into a hash set once, on the first pull, so the total
/// cost is linear in the combined size. The same set also records emitted
/// elements, which suppresses duplicates from `first`.
///
/// # Examples
///
/// ```rust
/// use seqops::equivalence::DefaultEquivalence;
/// use seqops::set_algebra::except;
///
/// let result: Vec<i32> = except([1, 2, 1, 3, 4], [2, 4], DefaultEquivalence).collect();
/// assert_eq!(result, vec![1, 3]);
/// ```
pub fn except<I, J, E>(first: I, second: J, equivalence: E) -> Except<I::IntoIter, J::IntoIter, E>
where
    I: IntoIterator,
    J: IntoIterator<Item = I::Item>,
{
    except_with_hasher(first, second, equivalence)
}

/// Like [`except`], hashing with `S::default()`.
pub fn except_with_hasher<I, J, E, S>(
    first: I,
    second: J,
    equivalence: E,
) -> Except<I::IntoIter, J::IntoIter, E, S>
where
    I: IntoIterator,
    J: IntoIterator<Item = I::Item>,
    S: Default,
{
    Except {
        source: first.into_iter(),
        excluded: Some(second.into_iter()),
        seen: SeenSet::with_hasher(equivalence),
    }
}

impl<I, J, E, S> Iterator for Except<I, J, E, S>
where
    I: Iterator,
    I::Item: Clone,
    J: Iterator<Item = I::Item>,
    E: Equivalence<I::Item>,
    S: BuildHasher,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(excluded) = self.excluded.take() {
            self.seen.extend(excluded);
            tracing::trace!(members = self.seen.len(), "except built its membership set");
        }
        let seen = &mut self.seen;
        self.source.find(|element| seen.insert(element))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.source.size_hint().1)
    }
}

impl<I, J, E, S> FusedIterator for Except<I, J, E, S>
where
    I: FusedIterator,
    I::Item: Clone,
    J: Iterator<Item = I::Item>,
    E: Equivalence<I::Item>,
    S: BuildHasher,
{
}

impl<I, J, E, S> fmt::Debug for Except<I, J, E, S>
where
    I: Iterator + fmt::Debug,
    I::Item: fmt::Debug,
    J: fmt::Debug,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Except")
            .field("source", &self.source)
            .field("excluded", &self.excluded)
            .field("seen", &self.seen)
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
    #[case(vec![1, 2, 3], vec![], vec![1, 2, 3])]
    #[case(vec![], vec![1, 2], vec![])]
    #[case(vec![1, 2, 2, 3], vec![2, 3, 3, 4], vec![1])]
    #[case(vec![4, 1, 4, 5, 1], vec![9], vec![4, 1, 5])]
    fn test_except(#[case] first: Vec<i32>, #[case] second: Vec<i32>, #[case] expected: Vec<i32>) {
        let result: Vec<i32> = except(first, second, DefaultEquivalence).collect();
        assert_eq!(result, expected);
    }

    #[rstest]
    fn test_except_is_deferred_until_first_pull() {
        let pulled = Cell::new(0);
        let second = [2, 3].into_iter().inspect(|_| pulled.set(pulled.get() + 1));
        let mut difference = except([1, 2, 3, 4], second, DefaultEquivalence);

        assert_eq!(pulled.get(), 0);
        assert_eq!(difference.next(), Some(1));
        assert_eq!(pulled.get(), 2);
        assert_eq!(difference.next(), Some(4));
        assert_eq!(difference.next(), None);
        assert_eq!(pulled.get(), 2);
    }

    #[rstest]
    fn test_except_with_key_equivalence() {
        let case_insensitive = KeyEquivalence::new(|text: &&str| text.to_ascii_lowercase());
        let result: Vec<&str> =
            except(["Red", "green", "BLUE", "Green"], ["blue"], case_insensitive).collect();
        assert_eq!(result, vec!["Red", "green"]);
    }
}
