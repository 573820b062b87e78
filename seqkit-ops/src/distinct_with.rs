// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Whole-element de-duplication under a pluggable equality.

use seqkit_core::{ComparerSet, EqualityComparer};
use std::fmt;

/// Extension trait providing the `distinct_with` operator.
pub trait DistinctWithExt: Iterator + Sized {
    /// Yields each element at most once, where "the same element" is decided by
    /// `comparer`. The first occurrence wins and order is preserved.
    ///
    /// A clone of every yielded element is kept to detect later repeats. Use
    /// [`distinct_by`](crate::DistinctByExt::distinct_by) to keep only keys.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqkit_core::DefaultEquality;
    /// use seqkit_ops::DistinctWithExt;
    ///
    /// let unique: Vec<_> = [3, 1, 3, 2, 1].into_iter().distinct_with(DefaultEquality).collect();
    /// assert_eq!(unique, [3, 1, 2]);
    /// ```
    fn distinct_with<C>(self, comparer: C) -> DistinctWith<Self, Self::Item, C>
    where
        Self::Item: Clone,
        C: EqualityComparer<Self::Item>,
    {
        DistinctWith {
            iter: self,
            seen: ComparerSet::new(comparer),
        }
    }
}

impl<I: Iterator> DistinctWithExt for I {}

/// Iterator returned by [`DistinctWithExt::distinct_with`].
#[derive(Clone)]
pub struct DistinctWith<I, T, C> {
    iter: I,
    seen: ComparerSet<T, C>,
}

impl<I, T, C> Iterator for DistinctWith<I, T, C>
where
    I: Iterator<Item = T>,
    T: Clone,
    C: EqualityComparer<T>,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.iter.by_ref().find(|item| self.seen.insert(item.clone()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.iter.size_hint().1)
    }
}

impl<I, T, C> fmt::Debug for DistinctWith<I, T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DistinctWith")
            .field("distinct", &self.seen.len())
            .finish_non_exhaustive()
    }
}
