//! Lazy predicate-driven filtering.
//!
//! - [`where_matching`]: keeps every element satisfying a predicate
//! - [`skip_while_matching`]: drops the leading run satisfying a predicate
//!
//! Neither adapter needs auxiliary hashing state. Both evaluate the
//! predicate one element at a time as the consumer pulls.
//!
//! # Examples
//!
//! ```rust
//! use seqops::filtering::{skip_while_matching, where_matching};
//!
//! let evens: Vec<i32> = where_matching([1, 2, 3, 4], |value| value % 2 == 0).collect();
//! assert_eq!(evens, vec![2, 4]);
//!
//! // `3` is kept: skipping ended at `8` and is never resumed.
//! let tail: Vec<i32> = skip_while_matching([1, 2, 8, 3, 9], |value| *value < 5).collect();
//! assert_eq!(tail, vec![8, 3, 9]);
//! ```

use std::fmt;
use std::iter::FusedIterator;

// =============================================================================
// Where
// =============================================================================

/// Lazy iterator over the elements satisfying a predicate.
///
/// Created by [`where_matching`].
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Where<I, P> {
    source: I,
    predicate: P,
}

/// Yields the elements of `source` for which `predicate` returns `true`,
/// in source order.
pub fn where_matching<I, P>(source: I, predicate: P) -> Where<I::IntoIter, P>
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
{
    Where {
        source: source.into_iter(),
        predicate,
    }
}

impl<I, P> Iterator for Where<I, P>
where
    I: Iterator,
    P: FnMut(&I::Item) -> bool,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let predicate = &mut self.predicate;
        self.source.find(|element| predicate(element))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.source.size_hint().1)
    }
}

impl<I, P> FusedIterator for Where<I, P>
where
    I: FusedIterator,
    P: FnMut(&I::Item) -> bool,
{
}

impl<I: fmt::Debug, P> fmt::Debug for Where<I, P> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Where")
            .field("source", &self.source)
            .finish_non_exhaustive()
    }
}

// =============================================================================
// SkipWhile
// =============================================================================

/// Lazy iterator that drops a leading run of elements.
///
/// Created by [`skip_while_matching`].
///
/// The adapter starts out skipping and holds the predicate. When the first
/// element fails the predicate, the predicate is dropped and every remaining
/// element passes through. The transition happens at most once.
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct SkipWhile<I, P> {
    source: I,
    predicate: Option<P>,
}

/// Skips elements of `source` while `predicate` holds, then yields the first
/// failing element and everything after it.
///
/// Later elements are yielded even if they satisfy `predicate`.
pub fn skip_while_matching<I, P>(source: I, predicate: P) -> SkipWhile<I::IntoIter, P>
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
{
    SkipWhile {
        source: source.into_iter(),
        predicate: Some(predicate),
    }
}

impl<I, P> SkipWhile<I, P> {
    /// Returns `true` while the leading run is still being skipped.
    #[inline]
    #[must_use]
    pub const fn is_skipping(&self) -> bool {
        self.predicate.is_some()
    }
}

impl<I, P> Iterator for SkipWhile<I, P>
where
    I: Iterator,
    P: FnMut(&I::Item) -> bool,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let Some(mut predicate) = self.predicate.take() else {
            return self.source.next();
        };
        let mut skipped = 0_usize;
        let boundary = self.source.find(|element| {
            let skip = predicate(element);
            skipped += usize::from(skip);
            !skip
        });
        if boundary.is_some() {
            tracing::trace!(skipped, "skip_while stopped skipping");
        } else {
            tracing::trace!(skipped, "skip_while skipped the whole source");
        }
        boundary
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.source.size_hint();
        if self.is_skipping() {
            (0, upper)
        } else {
            (lower, upper)
        }
    }
}

impl<I, P> FusedIterator for SkipWhile<I, P>
where
    I: FusedIterator,
    P: FnMut(&I::Item) -> bool,
{
}

impl<I: fmt::Debug, P> fmt::Debug for SkipWhile<I, P> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("SkipWhile")
            .field("source", &self.source)
            .field("skipping", &self.is_skipping())
            .finish()
    }
}
