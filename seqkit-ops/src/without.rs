// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Value exclusion.

use seqkit_core::EqualityComparer;
use std::fmt;

/// Extension trait providing the `without` operators.
pub trait WithoutExt: Iterator + Sized {
    /// Skips every element equal to `item`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqkit_ops::WithoutExt;
    ///
    /// let kept: Vec<_> = [1, 2, 1, 3].into_iter().without(1).collect();
    /// assert_eq!(kept, [2, 3]);
    /// ```
    fn without(self, item: Self::Item) -> Without<Self, Self::Item, NativeEq>
    where
        Self::Item: PartialEq,
    {
        Without {
            iter: self,
            item,
            equality: NativeEq,
        }
    }

    /// Skips every element that `comparer` considers equal to `item`.
    fn without_by<C>(self, item: Self::Item, comparer: C) -> Without<Self, Self::Item, ByComparer<C>>
    where
        C: EqualityComparer<Self::Item>,
    {
        Without {
            iter: self,
            item,
            equality: ByComparer(comparer),
        }
    }
}

impl<I: Iterator> WithoutExt for I {}

/// Element test used by [`Without`].
///
/// Implemented by [`NativeEq`] and [`ByComparer`].
pub trait Excludes<T> {
    /// Returns `true` if `candidate` should be skipped because it matches
    /// `excluded`.
    fn excludes(&self, excluded: &T, candidate: &T) -> bool;
}

/// `PartialEq`-based exclusion for [`WithoutExt::without`].
#[derive(Debug, Clone, Copy, Default)]
pub struct NativeEq;

impl<T: PartialEq> Excludes<T> for NativeEq {
    fn excludes(&self, excluded: &T, candidate: &T) -> bool {
        candidate == excluded
    }
}

/// [`EqualityComparer`]-based exclusion for [`WithoutExt::without_by`].
#[derive(Debug, Clone, Copy)]
pub struct ByComparer<C>(C);

impl<C> ByComparer<C> {
    /// Excludes through `comparer`.
    pub const fn new(comparer: C) -> Self {
        Self(comparer)
    }
}

impl<T, C: EqualityComparer<T>> Excludes<T> for ByComparer<C> {
    fn excludes(&self, excluded: &T, candidate: &T) -> bool {
        self.0.equals(excluded, candidate)
    }
}

/// Iterator returned by [`WithoutExt::without`] and [`WithoutExt::without_by`].
#[derive(Clone)]
pub struct Without<I, T, E> {
    iter: I,
    item: T,
    equality: E,
}

impl<I, T, E> Iterator for Without<I, T, E>
where
    I: Iterator<Item = T>,
    E: Excludes<T>,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let Self {
            iter,
            item,
            equality,
        } = self;
        iter.find(|candidate| !equality.excludes(item, candidate))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.iter.size_hint().1)
    }
}

impl<I: fmt::Debug, T: fmt::Debug, E> fmt::Debug for Without<I, T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Without")
            .field("iter", &self.iter)
            .field("item", &self.item)
            .finish_non_exhaustive()
    }
}
