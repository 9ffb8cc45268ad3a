//! Hash-based membership set keyed by an [`Equivalence`].
//!
//! [`SeenSet`] is the auxiliary state behind every deduplicating operation.
//! It owns its equivalence, so a set built with one strategy can never be
//! queried with another.
//!
//! # Internal Structure
//!
//! Elements live in a `hashbrown::HashTable`, which stores values without a
//! key of its own. Lookups use the hash the equivalence feeds into the hash
//! builder, and slots are compared with [`Equivalence::equivalent`]. The
//! queried element is hashed once per operation. Stored elements are rehashed
//! only when the table grows.
//!
//! # Examples
//!
//! ```rust
//! use seqops::SeenSet;
//! use seqops::equivalence::KeyEquivalence;
//!
//! let mut seen = SeenSet::new(KeyEquivalence::new(|text: &String| text.to_lowercase()));
//! assert!(seen.insert(&"Rust".to_string()));
//! assert!(!seen.insert(&"RUST".to_string()));
//! assert_eq!(seen.len(), 1);
//! ```

use std::fmt;
use std::hash::{BuildHasher, Hasher};

use hashbrown::HashTable;
use hashbrown::hash_table::Entry;

use crate::equivalence::Equivalence;

// =============================================================================
// Hash builder selection
// =============================================================================

/// The hash builder used when no hasher is given explicitly.
///
/// With the `fxhash` feature this is `rustc_hash::FxBuildHasher`.
#[cfg(feature = "fxhash")]
pub type DefaultHashBuilder = rustc_hash::FxBuildHasher;

/// The hash builder used when no hasher is given explicitly.
///
/// With the `ahash` feature this is `ahash::RandomState`.
#[cfg(all(feature = "ahash", not(feature = "fxhash")))]
pub type DefaultHashBuilder = ahash::RandomState;

/// The hash builder used when no hasher is given explicitly.
///
/// Without a fast-hash feature this is the standard library's `RandomState`.
#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
pub type DefaultHashBuilder = std::collections::hash_map::RandomState;

#[inline]
fn hash_with<T, E, S>(hash_builder: &S, equivalence: &E, element: &T) -> u64
where
    E: Equivalence<T>,
    S: BuildHasher,
{
    let mut hasher = hash_builder.build_hasher();
    equivalence.hash(element, &mut hasher);
    hasher.finish()
}

// =============================================================================
// SeenSet Definition
// =============================================================================

/// A mutable hash set whose equality is defined by an [`Equivalence`].
///
/// # Time Complexity
///
/// | Operation  | Complexity (expected) |
/// |------------|-----------------------|
/// | `insert`   | O(1)                  |
/// | `contains` | O(1)                  |
/// | `remove`   | O(1)                  |
/// | `len`      | O(1)                  |
///
/// # Type Parameters
///
/// * `T` - The element type
/// * `E` - The equivalence used for hashing and comparison
/// * `S` - The hash builder, [`DefaultHashBuilder`] unless chosen explicitly
pub struct SeenSet<T, E, S = DefaultHashBuilder> {
    table: HashTable<T>,
    hash_builder: S,
    equivalence: E,
}

impl<T, E> SeenSet<T, E> {
    /// Creates an empty set using the default hash builder.
    #[inline]
    #[must_use]
    pub fn new(equivalence: E) -> Self {
        Self::with_hasher(equivalence)
    }
}

impl<T, E, S: Default> SeenSet<T, E, S> {
    /// Creates an empty set using `S::default()` for hashing.
    #[must_use]
    pub fn with_hasher(equivalence: E) -> Self {
        Self {
            table: HashTable::new(),
            hash_builder: S::default(),
            equivalence,
        }
    }
}

impl<T, E, S> SeenSet<T, E, S> {
    /// Returns the number of distinct elements in the set.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Returns `true` if the set holds no elements.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Returns the equivalence this set was built with.
    #[inline]
    #[must_use]
    pub const fn equivalence(&self) -> &E {
        &self.equivalence
    }
}

impl<T, E, S> SeenSet<T, E, S>
where
    E: Equivalence<T>,
    S: BuildHasher,
{
    /// Returns `true` if an element equivalent to `element` is present.
    #[must_use]
    pub fn contains(&self, element: &T) -> bool {
        let hash = hash_with(&self.hash_builder, &self.equivalence, element);
        self.table
            .find(hash, |stored| self.equivalence.equivalent(stored, element))
            .is_some()
    }

    /// Adds `element` if no equivalent element is present.
    ///
    /// Returns `true` if the element was newly added. The set stores a clone,
    /// so the caller keeps ownership of `element`. Nothing is cloned when an
    /// equivalent element is already present.
    pub fn insert(&mut self, element: &T) -> bool
    where
        T: Clone,
    {
        match self.entry_for(element) {
            Entry::Occupied(_) => false,
            Entry::Vacant(vacant) => {
                vacant.insert(element.clone());
                true
            }
        }
    }

    /// Adds an owned element if no equivalent element is present.
    ///
    /// Returns `true` if the element was newly added.
    pub fn insert_owned(&mut self, element: T) -> bool {
        match self.entry_for(&element) {
            Entry::Occupied(_) => false,
            Entry::Vacant(vacant) => {
                vacant.insert(element);
                true
            }
        }
    }

    /// Removes the element equivalent to `element`, if present.
    ///
    /// Returns `true` if an element was removed.
    pub fn remove(&mut self, element: &T) -> bool {
        let hash = hash_with(&self.hash_builder, &self.equivalence, element);
        let equivalence = &self.equivalence;
        match self
            .table
            .find_entry(hash, |stored| equivalence.equivalent(stored, element))
        {
            Ok(occupied) => {
                occupied.remove();
                true
            }
            Err(_) => false,
        }
    }

    fn entry_for(&mut self, element: &T) -> Entry<'_, T> {
        let Self {
            ref mut table,
            ref hash_builder,
            ref equivalence,
        } = *self;
        let hash = hash_with(hash_builder, equivalence, element);
        table.entry(
            hash,
            |stored| equivalence.equivalent(stored, element),
            |stored| hash_with(hash_builder, equivalence, stored),
        )
    }
}

impl<T, E, S> Extend<T> for SeenSet<T, E, S>
where
    E: Equivalence<T>,
    S: BuildHasher,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iterable: I) {
        for element in iterable {
            self.insert_owned(element);
        }
    }
}

impl<T: fmt::Debug, E, S> fmt::Debug for SeenSet<T, E, S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_set().entries(self.table.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::equivalence::{DefaultEquivalence, FnEquivalence};
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    fn test_insert_reports_first_occurrence_only() {
        let mut seen = SeenSet::new(DefaultEquivalence);
        assert!(seen.insert(&1));
        assert!(seen.insert(&2));
        assert!(!seen.insert(&1));
        assert_eq!(seen.len(), 2);
    }

    #[rstest]
    fn test_remove_then_contains() {
        let mut seen: SeenSet<i32, _> = SeenSet::new(DefaultEquivalence);
        seen.extend([1, 2, 3]);
        assert!(seen.remove(&2));
        assert!(!seen.remove(&2));
        assert!(!seen.contains(&2));
        assert!(seen.contains(&3));
        assert_eq!(seen.len(), 2);
    }

    // Every element hashes to the same bucket, so correctness rests on the
    // collision path.
    #[rstest]
    fn test_full_collisions_still_distinguish_elements() {
        let constant_hash = FnEquivalence::new(|left: &i32, right: &i32| left == right, |_: &i32| 0_u64);
        let mut seen = SeenSet::new(constant_hash);
        for value in 0..20 {
            assert!(seen.insert(&value));
        }
        assert_eq!(seen.len(), 20);
        assert!(seen.remove(&7));
        assert!(!seen.contains(&7));
        assert!(seen.contains(&8));
        assert!(!seen.insert(&8));
    }

    #[rstest]
    fn test_each_lookup_hashes_the_element_once() {
        let hash_calls = Cell::new(0);
        let counting = FnEquivalence::new(
            |left: &i32, right: &i32| left == right,
            |value: &i32| {
                hash_calls.set(hash_calls.get() + 1);
                u64::from(value.unsigned_abs())
            },
        );
        let mut seen = SeenSet::new(&counting);
        seen.extend([1, 2, 3]);

        hash_calls.set(0);
        assert!(seen.contains(&2));
        assert_eq!(hash_calls.get(), 1);

        hash_calls.set(0);
        assert!(!seen.insert(&3));
        assert_eq!(hash_calls.get(), 1);

        hash_calls.set(0);
        assert!(seen.remove(&1));
        assert_eq!(hash_calls.get(), 1);
    }

    #[rstest]
    fn test_empty_set() {
        let seen: SeenSet<String, _> = SeenSet::new(DefaultEquivalence);
        assert!(seen.is_empty());
        assert!(!seen.contains(&"absent".to_string()));
    }

    #[rstest]
    fn test_with_explicit_hasher() {
        let mut seen: SeenSet<&str, _, std::collections::hash_map::RandomState> =
            SeenSet::with_hasher(DefaultEquivalence);
        assert!(seen.insert(&"alpha"));
        assert!(seen.contains(&"alpha"));
    }
}
