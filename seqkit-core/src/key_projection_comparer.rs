// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Element equality defined as equality of extracted keys.

use crate::equality_comparer::{DefaultEquality, EqualityComparer};
use crate::key_selector::KeySelector;

/// An [`EqualityComparer`] over elements that compares their projected keys.
///
/// Two elements are equal when `inner.equals(selector(a), selector(b))`, and an
/// element hashes as `inner.hash(selector(a))`. Comparing an element with
/// itself short-circuits to `true` without calling the selector.
///
/// This is the comparer behind `distinct_by`; it can also be handed to any
/// operator that accepts an [`EqualityComparer`].
///
/// The selector must be pure. A selector with side effects or non-deterministic
/// output makes de-duplication results undefined.
///
/// # Examples
///
/// ```
/// use seqkit_core::{EqualityComparer, KeyProjectionComparer};
///
/// let by_first = KeyProjectionComparer::new(|pair: &(u32, &str)| pair.0);
///
/// assert!(by_first.equals(&(1, "a"), &(1, "b")));
/// assert!(!by_first.equals(&(1, "a"), &(2, "a")));
/// assert_eq!(by_first.hash(&(1, "a")), by_first.hash(&(1, "z")));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct KeyProjectionComparer<S, C = DefaultEquality> {
    selector: S,
    inner: C,
}

impl<S> KeyProjectionComparer<S> {
    /// Projects with `selector` and compares keys with their native equality.
    pub const fn new(selector: S) -> Self {
        Self {
            selector,
            inner: DefaultEquality,
        }
    }
}

impl<S, C> KeyProjectionComparer<S, C> {
    /// Projects with `selector` and compares keys with `inner`.
    pub const fn with_comparer(selector: S, inner: C) -> Self {
        Self { selector, inner }
    }

    /// Extracts the key of `item`.
    pub fn project<T>(&self, item: &T) -> S::Key
    where
        T: ?Sized,
        S: KeySelector<T>,
    {
        self.selector.select(item)
    }

    /// The comparer applied to projected keys.
    pub const fn key_comparer(&self) -> &C {
        &self.inner
    }

    /// Splits the comparer into its selector and key comparer.
    pub fn into_parts(self) -> (S, C) {
        (self.selector, self.inner)
    }
}

impl<T, S, C> EqualityComparer<T> for KeyProjectionComparer<S, C>
where
    T: ?Sized,
    S: KeySelector<T>,
    C: EqualityComparer<S::Key>,
{
    fn equals(&self, a: &T, b: &T) -> bool {
        if core::ptr::eq(a, b) {
            return true;
        }

        self.inner
            .equals(&self.selector.select(a), &self.selector.select(b))
    }

    fn hash(&self, value: &T) -> u64 {
        self.inner.hash(&self.selector.select(value))
    }
}
