// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Guarded sequences that hide their source.
//!
//! A [`Closed`] sequence borrows a source and exposes exactly one capability:
//! start a new iteration. The iterator it hands out, [`ClosedIter`], forwards
//! only `next`. Length, double-ended iteration, size hints and the source's
//! concrete type all stay behind the guard, so downstream code cannot take
//! shortcuts that depend on what the source happens to be.
//!
//! Nothing is copied. Each iteration request calls `into_iter` on the borrowed
//! source again; a single-pass source that is already exhausted therefore
//! yields nothing through the guard either.
//!
//! Lazy adapters such as [`DistinctBy`](crate::DistinctBy) are iterators rather
//! than iterable sources. [`ClosedIterExt::restartable`] turns a cloneable
//! iterator into a [`Restartable`] source, which can then be guarded like any
//! other.

use std::fmt;

/// Wraps `source` in a [`Closed`] guard.
///
/// # Examples
///
/// ```rust
/// use seqkit_ops::close;
///
/// let source = vec![1, 2, 3];
/// let guarded = close(&source);
///
/// let first: Vec<_> = guarded.iter().copied().collect();
/// let second: Vec<_> = guarded.iter().copied().collect();
/// assert_eq!(first, second);
///
/// // Only the generic iteration contract survives.
/// assert_eq!(guarded.iter().size_hint(), (0, None));
/// ```
pub fn close<S>(source: &S) -> Closed<'_, S> {
    Closed { source }
}

/// A sequence guard around a borrowed source. Created by [`close`].
pub struct Closed<'s, S> {
    source: &'s S,
}

impl<'s, S> Closed<'s, S>
where
    &'s S: IntoIterator,
{
    /// Starts a fresh iteration of the source.
    pub fn iter(&self) -> ClosedIter<<&'s S as IntoIterator>::IntoIter> {
        ClosedIter {
            inner: self.source.into_iter(),
        }
    }
}

impl<S> Clone for Closed<'_, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S> Copy for Closed<'_, S> {}

impl<S> fmt::Debug for Closed<'_, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Closed").finish_non_exhaustive()
    }
}

impl<'s, S> IntoIterator for Closed<'s, S>
where
    &'s S: IntoIterator,
{
    type Item = <&'s S as IntoIterator>::Item;
    type IntoIter = ClosedIter<<&'s S as IntoIterator>::IntoIter>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'s, S> IntoIterator for &Closed<'s, S>
where
    &'s S: IntoIterator,
{
    type Item = <&'s S as IntoIterator>::Item;
    type IntoIter = ClosedIter<<&'s S as IntoIterator>::IntoIter>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator handed out by [`Closed`], [`Restartable`] and
/// [`ClosedIterExt::closed`].
///
/// Forwards `next` and nothing else.
pub struct ClosedIter<I> {
    inner: I,
}

impl<I: Iterator> Iterator for ClosedIter<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        self.inner.next()
    }
}

impl<I> fmt::Debug for ClosedIter<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClosedIter").finish_non_exhaustive()
    }
}

/// Extension trait guarding any source by reference.
pub trait CloseExt: Sized {
    /// Same as [`close(self)`](close).
    fn close(&self) -> Closed<'_, Self> {
        close(self)
    }
}

impl<S> CloseExt for S {}

/// An owned, restartable source built from a cloneable iterator.
///
/// Every iteration starts from a clone of the iterator as it was when the
/// source was created, so adapter state (such as a set of seen keys) is never
/// shared between passes. Created by [`ClosedIterExt::restartable`].
#[derive(Clone)]
pub struct Restartable<I> {
    origin: I,
}

impl<I: Iterator + Clone> Restartable<I> {
    /// Starts a fresh iteration from the original position.
    pub fn iter(&self) -> ClosedIter<I> {
        ClosedIter {
            inner: self.origin.clone(),
        }
    }
}

impl<I: Iterator + Clone> IntoIterator for &Restartable<I> {
    type Item = I::Item;
    type IntoIter = ClosedIter<I>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<I> fmt::Debug for Restartable<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Restartable").finish_non_exhaustive()
    }
}

/// Extension trait hiding an iterator's concrete type and extra capabilities.
pub trait ClosedIterExt: Iterator + Sized {
    /// Re-yields every element through a [`ClosedIter`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqkit_ops::ClosedIterExt;
    ///
    /// let closed = vec![1, 2, 3].into_iter().closed();
    /// assert_eq!(closed.size_hint(), (0, None));
    /// assert_eq!(closed.sum::<i32>(), 6);
    /// ```
    fn closed(self) -> ClosedIter<Self> {
        ClosedIter { inner: self }
    }

    /// Turns this iterator into a source that can be iterated from the start
    /// any number of times, and therefore guarded with [`close`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqkit_ops::{close, ClosedIterExt, DistinctByExt};
    ///
    /// let source = [3, 1, 3, 2, 1];
    /// let distinct = source.iter().distinct_by(|x| **x).restartable();
    /// let guarded = close(&distinct);
    ///
    /// let first: Vec<_> = guarded.iter().copied().collect();
    /// let second: Vec<_> = guarded.iter().copied().collect();
    /// assert_eq!(first, [3, 1, 2]);
    /// assert_eq!(first, second);
    /// ```
    fn restartable(self) -> Restartable<Self>
    where
        Self: Clone,
    {
        Restartable { origin: self }
    }
}

impl<I: Iterator> ClosedIterExt for I {}
