// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Hash set whose membership is decided by an [`EqualityComparer`].

use crate::equality_comparer::EqualityComparer;
use std::collections::HashMap;
use std::fmt;

/// A set that asks an [`EqualityComparer`] whether two values are the same.
///
/// Values are bucketed by [`EqualityComparer::hash`] and compared with
/// [`EqualityComparer::equals`] within a bucket, giving expected O(1) insert and
/// lookup for a well-distributed hash. The first value inserted for a class of
/// equal values is the one kept.
///
/// # Examples
///
/// ```
/// use seqkit_core::{ComparerSet, DefaultEquality};
///
/// let mut seen = ComparerSet::new(DefaultEquality);
/// assert!(seen.insert("a"));
/// assert!(!seen.insert("a"));
/// assert_eq!(seen.len(), 1);
/// ```
pub struct ComparerSet<T, C> {
    buckets: HashMap<u64, Vec<T>>,
    comparer: C,
    len: usize,
}

impl<T, C> ComparerSet<T, C>
where
    C: EqualityComparer<T>,
{
    /// Creates an empty set using `comparer`.
    pub fn new(comparer: C) -> Self {
        Self {
            buckets: HashMap::new(),
            comparer,
            len: 0,
        }
    }

    /// Adds `value` unless an equal value is already present.
    ///
    /// Returns `true` if the value was added.
    pub fn insert(&mut self, value: T) -> bool {
        let hash = self.comparer.hash(&value);
        let bucket = self.buckets.entry(hash).or_default();

        if bucket
            .iter()
            .any(|existing| self.comparer.equals(existing, &value))
        {
            return false;
        }

        bucket.push(value);
        self.len += 1;
        true
    }

    /// Returns `true` if a value equal to `value` is present.
    pub fn contains(&self, value: &T) -> bool {
        self.buckets
            .get(&self.comparer.hash(value))
            .is_some_and(|bucket| {
                bucket
                    .iter()
                    .any(|existing| self.comparer.equals(existing, value))
            })
    }
}

impl<T, C> ComparerSet<T, C> {
    /// Number of distinct values held.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the set holds no values.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The comparer deciding membership.
    pub const fn comparer(&self) -> &C {
        &self.comparer
    }

    /// Removes every value, keeping the comparer.
    pub fn clear(&mut self) {
        self.buckets.clear();
        self.len = 0;
    }
}

impl<T: Clone, C: Clone> Clone for ComparerSet<T, C> {
    fn clone(&self) -> Self {
        Self {
            buckets: self.buckets.clone(),
            comparer: self.comparer.clone(),
            len: self.len,
        }
    }
}

impl<T, C> fmt::Debug for ComparerSet<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComparerSet")
            .field("len", &self.len)
            .finish_non_exhaustive()
    }
}
