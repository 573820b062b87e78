// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Containment under pluggable equality.

use seqkit_core::{ComparerSet, DefaultEquality, EqualityComparer};
use std::hash::Hash;

/// Extension trait providing comparer-aware containment checks.
pub trait ContainsExt: Iterator + Sized {
    /// Whether any element is equal to `item` under `comparer`.
    ///
    /// Stops pulling at the first equal element.
    fn contains_with<C>(mut self, item: &Self::Item, comparer: C) -> bool
    where
        C: EqualityComparer<Self::Item>,
    {
        self.any(|candidate| comparer.equals(&candidate, item))
    }

    /// Whether any of `items` occurs in the source.
    ///
    /// `items` is buffered into a set first; an empty `items` never pulls
    /// from the source.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqkit_ops::ContainsExt;
    ///
    /// assert!([1, 2, 3].into_iter().contains_any([9, 3]));
    /// assert!(![1, 2, 3].into_iter().contains_any([7, 8]));
    /// ```
    fn contains_any<J>(mut self, items: J) -> bool
    where
        J: IntoIterator<Item = Self::Item>,
        Self::Item: Eq + Hash,
    {
        let mut wanted = ComparerSet::new(DefaultEquality);
        for item in items {
            wanted.insert(item);
        }

        !wanted.is_empty() && self.any(|candidate| wanted.contains(&candidate))
    }
}

impl<I: Iterator> ContainsExt for I {}
