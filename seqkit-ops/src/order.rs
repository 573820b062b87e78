// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Stable ordering with caller-supplied comparers.
//!
//! Ordering is the one eager operator: the source is drained into a buffer when
//! the ordered sequence is created, and the buffer is then sorted exactly once.

use seqkit_core::{Comparer, ComparerExt, Directed, Direction, ThenBy};
use std::fmt;

/// Drains `source` and stably sorts it ascending with `comparer`.
///
/// Elements equal under `comparer` keep their original relative order.
///
/// # Examples
///
/// ```rust
/// use seqkit_ops::order;
///
/// let rows = [(1, 'a'), (2, 'b'), (1, 'c')];
/// let sorted = order(rows, |x: &(i32, char), y: &(i32, char)| x.0.cmp(&y.0));
///
/// assert_eq!(sorted.as_slice(), [(1, 'a'), (1, 'c'), (2, 'b')]);
/// ```
pub fn order<I, C>(source: I, comparer: C) -> OrderedSequence<I::Item, Directed<C>>
where
    I: IntoIterator,
    C: Comparer<I::Item>,
{
    order_by_direction(source, comparer, Direction::Ascending)
}

/// Drains `source` and stably sorts it descending with `comparer`.
///
/// The comparer is never negated. The buffer is reversed, sorted ascending and
/// reversed again, so elements equal under `comparer` still keep their
/// original relative order.
///
/// # Examples
///
/// ```rust
/// use seqkit_ops::order_descending;
///
/// let rows = [(1, 'a'), (2, 'b'), (1, 'c')];
/// let sorted = order_descending(rows, |x: &(i32, char), y: &(i32, char)| x.0.cmp(&y.0));
///
/// assert_eq!(sorted.as_slice(), [(2, 'b'), (1, 'a'), (1, 'c')]);
/// ```
pub fn order_descending<I, C>(source: I, comparer: C) -> OrderedSequence<I::Item, Directed<C>>
where
    I: IntoIterator,
    C: Comparer<I::Item>,
{
    order_by_direction(source, comparer, Direction::Descending)
}

/// Drains `source` and stably sorts it in `direction` with `comparer`.
///
/// Useful when the direction is only known at runtime, e.g. parsed from a
/// query string with `"desc".parse::<Direction>()`.
pub fn order_by_direction<I, C>(
    source: I,
    comparer: C,
    direction: Direction,
) -> OrderedSequence<I::Item, Directed<C>>
where
    I: IntoIterator,
    C: Comparer<I::Item>,
{
    let mut items: Vec<I::Item> = source.into_iter().collect();

    match direction {
        Direction::Ascending => items.sort_by(|a, b| comparer.compare(a, b)),
        Direction::Descending => {
            items.reverse();
            items.sort_by(|a, b| comparer.compare(a, b));
            items.reverse();
        }
    }

    debug!(len = items.len(), direction = %direction, "order: buffered and sorted");

    OrderedSequence {
        items,
        comparer: ComparerExt::<I::Item>::directed(comparer, direction),
    }
}

/// Extension trait exposing the ordering functions as iterator methods.
pub trait OrderExt: Iterator + Sized {
    /// See [`order`].
    fn order<C>(self, comparer: C) -> OrderedSequence<Self::Item, Directed<C>>
    where
        C: Comparer<Self::Item>,
    {
        order(self, comparer)
    }

    /// See [`order_descending`].
    fn order_descending<C>(self, comparer: C) -> OrderedSequence<Self::Item, Directed<C>>
    where
        C: Comparer<Self::Item>,
    {
        order_descending(self, comparer)
    }

    /// See [`order_by_direction`].
    fn order_by_direction<C>(
        self,
        comparer: C,
        direction: Direction,
    ) -> OrderedSequence<Self::Item, Directed<C>>
    where
        C: Comparer<Self::Item>,
    {
        order_by_direction(self, comparer, direction)
    }
}

impl<I: Iterator> OrderExt for I {}

/// A fully realized, stably sorted sequence.
///
/// Created once by [`order`], [`order_descending`] or [`order_by_direction`]
/// and immutable afterwards. It is restartable: every call to [`iter`] starts
/// from the first element.
///
/// [`iter`]: OrderedSequence::iter
#[derive(Clone)]
pub struct OrderedSequence<T, C> {
    items: Vec<T>,
    comparer: C,
}

impl<T, C> OrderedSequence<T, C> {
    /// Iterates the sorted elements from the start.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the sequence has no elements.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The sorted elements as a slice.
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// The comparer this sequence is sorted by, direction included.
    pub const fn comparer(&self) -> &C {
        &self.comparer
    }

    /// Consumes the sequence, returning the sorted elements.
    pub fn into_vec(self) -> Vec<T> {
        self.items
    }
}

impl<T, C> OrderedSequence<T, C>
where
    C: Comparer<T>,
{
    /// Orders elements that are tied under the current comparer by `next`,
    /// ascending.
    ///
    /// Elements tied under both keep their original relative order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqkit_core::comparing;
    /// use seqkit_ops::order_descending;
    ///
    /// let people = [('c', 30), ('a', 25), ('b', 30)];
    /// let sorted = order_descending(people, comparing(|p: &(char, u32)| p.1))
    ///     .then_by(comparing(|p: &(char, u32)| p.0));
    ///
    /// assert_eq!(sorted.as_slice(), [('b', 30), ('c', 30), ('a', 25)]);
    /// ```
    pub fn then_by<N>(self, next: N) -> OrderedSequence<T, ThenBy<C, N>>
    where
        N: Comparer<T>,
    {
        let comparer = ComparerExt::<T>::then_by(self.comparer, next);
        let mut items = self.items;
        items.sort_by(|a, b| comparer.compare(a, b));

        OrderedSequence { items, comparer }
    }

    /// Orders elements that are tied under the current comparer by `next`,
    /// descending.
    pub fn then_by_descending<N>(self, next: N) -> OrderedSequence<T, ThenBy<C, Directed<N>>>
    where
        N: Comparer<T>,
    {
        self.then_by(ComparerExt::<T>::directed(next, Direction::Descending))
    }
}

impl<T: fmt::Debug, C> fmt::Debug for OrderedSequence<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.items).finish()
    }
}

impl<T, C> IntoIterator for OrderedSequence<T, C> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T, C> IntoIterator for &'a OrderedSequence<T, C> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
