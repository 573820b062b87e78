// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Key-based de-duplication keeping the first element per key.

use seqkit_core::{
    ComparerSet, DefaultEquality, EqualityComparer, KeyProjectionComparer, KeySelector,
};
use std::fmt;
use std::hash::Hash;

/// Extension trait providing the `distinct_by` family of operators.
///
/// These operators yield each element at most once, keeping only the first
/// element encountered for each distinct projected key, in the original order.
pub trait DistinctByExt: Iterator + Sized {
    /// Yields the first element for every distinct key extracted by `selector`.
    ///
    /// Keys are compared with their native `Eq` + `Hash`.
    ///
    /// # Behavior
    ///
    /// - Lazy: the source is pulled only as output is requested
    /// - The first element seen for a key wins; later ones are skipped
    /// - Encounter order is preserved
    /// - The selector must be pure; it is called once per pulled element
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqkit_ops::DistinctByExt;
    ///
    /// let words = ["apple", "avocado", "banana", "blueberry", "cherry"];
    /// let first_per_letter: Vec<_> = words
    ///     .into_iter()
    ///     .distinct_by(|w| w.chars().next())
    ///     .collect();
    ///
    /// assert_eq!(first_per_letter, ["apple", "banana", "cherry"]);
    /// ```
    ///
    /// # Performance
    ///
    /// - O(n) expected time for n pulled elements
    /// - O(k) space for k distinct keys
    fn distinct_by<K, F>(self, selector: F) -> DistinctBy<Self, F, K, DefaultEquality>
    where
        F: Fn(&Self::Item) -> K,
        K: Eq + Hash,
    {
        self.distinct_by_comparer(KeyProjectionComparer::new(selector))
    }

    /// Like [`distinct_by`](Self::distinct_by), comparing keys with `comparer`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqkit_core::{default_hash, equality_by};
    /// use seqkit_ops::DistinctByExt;
    ///
    /// let ignore_case = equality_by(
    ///     |a: &String, b: &String| a.eq_ignore_ascii_case(b),
    ///     |v: &String| default_hash(&v.to_ascii_lowercase()),
    /// );
    ///
    /// let tags: Vec<_> = ["Rust", "rust", "Go", "RUST", "go"]
    ///     .into_iter()
    ///     .distinct_by_with(|t| t.to_string(), ignore_case)
    ///     .collect();
    ///
    /// assert_eq!(tags, ["Rust", "Go"]);
    /// ```
    fn distinct_by_with<K, F, C>(self, selector: F, comparer: C) -> DistinctBy<Self, F, K, C>
    where
        F: Fn(&Self::Item) -> K,
        C: EqualityComparer<K>,
    {
        self.distinct_by_comparer(KeyProjectionComparer::with_comparer(selector, comparer))
    }

    /// De-duplicates with a ready-made [`KeyProjectionComparer`].
    fn distinct_by_comparer<S, C>(
        self,
        comparer: KeyProjectionComparer<S, C>,
    ) -> DistinctBy<Self, S, S::Key, C>
    where
        S: KeySelector<Self::Item>,
        C: EqualityComparer<S::Key>,
    {
        let (selector, key_comparer) = comparer.into_parts();
        DistinctBy {
            iter: self,
            selector,
            seen: ComparerSet::new(key_comparer),
            exhausted: false,
        }
    }
}

impl<I: Iterator> DistinctByExt for I {}

/// Iterator returned by [`DistinctByExt::distinct_by`] and its variants.
///
/// The set of seen keys belongs to this value. Cloning it clones the set, so
/// clones never observe each other's progress. Once the source reports the
/// end, the source is not pulled again.
#[derive(Clone)]
pub struct DistinctBy<I, S, K, C> {
    iter: I,
    selector: S,
    seen: ComparerSet<K, C>,
    exhausted: bool,
}

impl<I, S, K, C> Iterator for DistinctBy<I, S, K, C>
where
    I: Iterator,
    S: KeySelector<I::Item, Key = K>,
    C: EqualityComparer<K>,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        if self.exhausted {
            return None;
        }

        for item in self.iter.by_ref() {
            if self.seen.insert(self.selector.select(&item)) {
                return Some(item);
            }
        }

        self.exhausted = true;
        trace!(distinct_keys = self.seen.len(), "distinct_by: source exhausted");
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.exhausted {
            return (0, Some(0));
        }
        (0, self.iter.size_hint().1)
    }
}

impl<I, S, K, C> fmt::Debug for DistinctBy<I, S, K, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DistinctBy")
            .field("distinct_keys", &self.seen.len())
            .finish_non_exhaustive()
    }
}
