// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Pluggable three-way comparison and the combinators built on it.

use crate::direction::Direction;
use crate::key_selector::KeySelector;
use std::cmp::Ordering;

/// A three-way comparison used wherever elements must be ranked.
///
/// Every `Fn(&T, &T) -> Ordering` is a `Comparer<T>`, so `Ord::cmp`-style
/// closures can be passed directly.
///
/// # Contract
///
/// The comparison must be antisymmetric and transitive, and consistent with any
/// [`EqualityComparer`](crate::EqualityComparer) used for the same field. A
/// comparer that is not a total order yields an unspecified (but memory-safe)
/// order, and sorting with it may panic: the standard library sort is allowed
/// to panic when it detects an inconsistent ordering.
///
/// # Examples
///
/// ```
/// use seqkit_core::Comparer;
/// use std::cmp::Ordering;
///
/// let by_len = |a: &&str, b: &&str| a.len().cmp(&b.len());
/// assert_eq!(by_len.compare(&"ab", &"abc"), Ordering::Less);
/// ```
pub trait Comparer<T: ?Sized> {
    /// Compares `a` with `b`.
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

impl<T, F> Comparer<T> for F
where
    T: ?Sized,
    F: Fn(&T, &T) -> Ordering,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

/// Combinators available on every [`Comparer`].
pub trait ComparerExt<T: ?Sized>: Comparer<T> + Sized {
    /// Inverts this comparer.
    ///
    /// Descending ordering in `seqkit-ops` does not go through this; it never
    /// negates the caller's comparer.
    fn reversed(self) -> Reversed<Self> {
        Reversed { inner: self }
    }

    /// Breaks ties of this comparer with `next`.
    fn then_by<N>(self, next: N) -> ThenBy<Self, N>
    where
        N: Comparer<T>,
    {
        ThenBy { first: self, next }
    }

    /// Applies `direction` to this comparer's results.
    fn directed(self, direction: Direction) -> Directed<Self> {
        Directed {
            inner: self,
            direction,
        }
    }
}

impl<T: ?Sized, C: Comparer<T>> ComparerExt<T> for C {}

/// The native `Ord` ordering of a type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NaturalOrder;

impl<T: Ord + ?Sized> Comparer<T> for NaturalOrder {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// A comparer with its arguments swapped. Created by [`ComparerExt::reversed`].
#[derive(Debug, Clone, Copy)]
pub struct Reversed<C> {
    inner: C,
}

impl<T: ?Sized, C: Comparer<T>> Comparer<T> for Reversed<C> {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self.inner.compare(b, a)
    }
}

/// A comparer tagged with a [`Direction`]. Created by [`ComparerExt::directed`].
///
/// Descending compares as the inner comparer with its result reversed.
#[derive(Debug, Clone, Copy)]
pub struct Directed<C> {
    inner: C,
    direction: Direction,
}

impl<C> Directed<C> {
    /// The direction applied to the inner comparer.
    pub const fn direction(&self) -> Direction {
        self.direction
    }

    /// The undirected comparer.
    pub const fn inner(&self) -> &C {
        &self.inner
    }
}

impl<T: ?Sized, C: Comparer<T>> Comparer<T> for Directed<C> {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self.direction.apply(self.inner.compare(a, b))
    }
}

/// Lexicographic composition of two comparers. Created by [`ComparerExt::then_by`].
#[derive(Debug, Clone, Copy)]
pub struct ThenBy<A, B> {
    first: A,
    next: B,
}

impl<T, A, B> Comparer<T> for ThenBy<A, B>
where
    T: ?Sized,
    A: Comparer<T>,
    B: Comparer<T>,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self.first
            .compare(a, b)
            .then_with(|| self.next.compare(a, b))
    }
}

/// Compares elements by a projected key.
///
/// Created by [`comparing`], or by [`KeyComparer::with_comparer`] when the keys
/// need a custom comparer themselves.
#[derive(Debug, Clone, Copy)]
pub struct KeyComparer<S, C = NaturalOrder> {
    selector: S,
    inner: C,
}

impl<S, C> KeyComparer<S, C> {
    /// Compares keys extracted by `selector` with `inner`.
    pub const fn with_comparer(selector: S, inner: C) -> Self {
        Self { selector, inner }
    }
}

impl<T, S, C> Comparer<T> for KeyComparer<S, C>
where
    T: ?Sized,
    S: KeySelector<T>,
    C: Comparer<S::Key>,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self.inner
            .compare(&self.selector.select(a), &self.selector.select(b))
    }
}

/// Compares elements by the natural order of a projected key.
///
/// # Examples
///
/// ```
/// use seqkit_core::{comparing, Comparer};
/// use std::cmp::Ordering;
///
/// let by_age = comparing(|p: &(&str, u32)| p.1);
/// assert_eq!(by_age.compare(&("Ann", 40), &("Bob", 30)), Ordering::Greater);
/// ```
pub fn comparing<T, K, F>(selector: F) -> KeyComparer<F>
where
    T: ?Sized,
    K: Ord,
    F: Fn(&T) -> K,
{
    KeyComparer::with_comparer(selector, NaturalOrder)
}
