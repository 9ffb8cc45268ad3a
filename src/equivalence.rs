//! Pluggable equality strategies.
//!
//! This module provides the [`Equivalence`] trait, which decides whether two
//! elements are equal and produces a hash consistent with that decision.
//! Every operation that compares elements takes an `Equivalence` value, so
//! the choice of equality is always visible at the call site.
//!
//! # Laws
//!
//! Implementations must satisfy:
//!
//! ```text
//! equivalent(a, a)                                   // reflexivity
//! equivalent(a, b) == equivalent(b, a)               // symmetry
//! equivalent(a, b) && equivalent(b, c) => equivalent(a, c)
//! equivalent(a, b) => hash(a) == hash(b)             // hash consistency
//! ```
//!
//! # Examples
//!
//! ```rust
//! use seqops::equivalence::{DefaultEquivalence, Equivalence, KeyEquivalence};
//!
//! assert!(DefaultEquivalence.equivalent(&1, &1));
//!
//! let case_insensitive = KeyEquivalence::new(|text: &&str| text.to_lowercase());
//! assert!(case_insensitive.equivalent(&"Hello", &"HELLO"));
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};

/// A strategy for comparing two elements and hashing them consistently.
///
/// Hash-backed operations call [`Equivalence::hash`] to bucket elements and
/// [`Equivalence::equivalent`] to resolve collisions. Two elements that are
/// equivalent must feed identical data to the hasher.
pub trait Equivalence<T: ?Sized> {
    /// Returns `true` if `left` and `right` are considered equal.
    fn equivalent(&self, left: &T, right: &T) -> bool;

    /// Feeds `value` into `state` in a way consistent with [`Self::equivalent`].
    fn hash<H: Hasher>(&self, value: &T, state: &mut H);
}

impl<T: ?Sized, E: Equivalence<T> + ?Sized> Equivalence<T> for &E {
    #[inline]
    fn equivalent(&self, left: &T, right: &T) -> bool {
        (**self).equivalent(left, right)
    }

    #[inline]
    fn hash<H: Hasher>(&self, value: &T, state: &mut H) {
        (**self).hash(value, state);
    }
}

// =============================================================================
// DefaultEquivalence
// =============================================================================

/// Structural equality through the element's own `Eq` and `Hash`.
///
/// # Examples
///
/// ```rust
/// use seqops::equivalence::{DefaultEquivalence, Equivalence};
///
/// assert!(DefaultEquivalence.equivalent("a", "a"));
/// assert!(!DefaultEquivalence.equivalent(&1, &2));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DefaultEquivalence;

impl<T: Eq + Hash + ?Sized> Equivalence<T> for DefaultEquivalence {
    #[inline]
    fn equivalent(&self, left: &T, right: &T) -> bool {
        left == right
    }

    #[inline]
    fn hash<H: Hasher>(&self, value: &T, state: &mut H) {
        Hash::hash(value, state);
    }
}

// =============================================================================
// KeyEquivalence
// =============================================================================

/// Equality of a projected key.
///
/// Two elements are equivalent when their keys are equal. The hash is the
/// hash of the key, so consistency holds whenever `K: Eq + Hash` is lawful.
///
/// # Examples
///
/// ```rust
/// use seqops::equivalence::{Equivalence, KeyEquivalence};
///
/// let by_parity = KeyEquivalence::new(|value: &i32| value % 2);
/// assert!(by_parity.equivalent(&2, &8));
/// assert!(!by_parity.equivalent(&2, &3));
/// ```
#[derive(Clone, Copy)]
pub struct KeyEquivalence<F> {
    key: F,
}

impl<F> KeyEquivalence<F> {
    /// Creates an equivalence that compares elements by `key(element)`.
    #[inline]
    pub const fn new(key: F) -> Self {
        Self { key }
    }
}

impl<T: ?Sized, K, F> Equivalence<T> for KeyEquivalence<F>
where
    F: Fn(&T) -> K,
    K: Eq + Hash,
{
    #[inline]
    fn equivalent(&self, left: &T, right: &T) -> bool {
        (self.key)(left) == (self.key)(right)
    }

    #[inline]
    fn hash<H: Hasher>(&self, value: &T, state: &mut H) {
        Hash::hash(&(self.key)(value), state);
    }
}

impl<F> fmt::Debug for KeyEquivalence<F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("KeyEquivalence").finish_non_exhaustive()
    }
}

// =============================================================================
// FnEquivalence
// =============================================================================

/// Equality and hashing supplied as two separate functions.
///
/// The caller is responsible for keeping the two functions consistent:
/// elements reported equal by `equal` must produce the same value from `hash`.
///
/// # Examples
///
/// ```rust
/// use seqops::equivalence::{Equivalence, FnEquivalence};
///
/// let modulo_ten = FnEquivalence::new(
///     |left: &u32, right: &u32| left % 10 == right % 10,
///     |value: &u32| u64::from(value % 10),
/// );
/// assert!(modulo_ten.equivalent(&13, &23));
/// ```
#[derive(Clone, Copy)]
pub struct FnEquivalence<Q, H> {
    equal: Q,
    hash: H,
}

impl<Q, H> FnEquivalence<Q, H> {
    /// Creates an equivalence from an equality function and a hash function.
    #[inline]
    pub const fn new(equal: Q, hash: H) -> Self {
        Self { equal, hash }
    }
}

impl<T: ?Sized, Q, H> Equivalence<T> for FnEquivalence<Q, H>
where
    Q: Fn(&T, &T) -> bool,
    H: Fn(&T) -> u64,
{
    #[inline]
    fn equivalent(&self, left: &T, right: &T) -> bool {
        (self.equal)(left, right)
    }

    #[inline]
    fn hash<S: Hasher>(&self, value: &T, state: &mut S) {
        state.write_u64((self.hash)(value));
    }
}

impl<Q, H> fmt::Debug for FnEquivalence<Q, H> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("FnEquivalence").finish_non_exhaustive()
    }
}
