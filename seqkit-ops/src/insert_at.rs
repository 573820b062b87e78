// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::fmt;

/// Extension trait providing the `insert_at` operator.
pub trait InsertAtExt: Iterator + Sized {
    /// Yields `item` immediately before the source element at position `index`.
    ///
    /// The insertion is tied to that element: if the source ends at or before
    /// `index`, `item` is never yielded.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqkit_ops::InsertAtExt;
    ///
    /// let inserted: Vec<_> = ["a", "c"].into_iter().insert_at(1, "b").collect();
    /// assert_eq!(inserted, ["a", "b", "c"]);
    ///
    /// let past_end: Vec<_> = ["a", "c"].into_iter().insert_at(2, "b").collect();
    /// assert_eq!(past_end, ["a", "c"]);
    /// ```
    fn insert_at(self, index: usize, item: Self::Item) -> InsertAt<Self> {
        InsertAt {
            iter: self,
            index,
            position: 0,
            item: Some(item),
            held: None,
        }
    }
}

impl<I: Iterator> InsertAtExt for I {}

/// Iterator returned by [`InsertAtExt::insert_at`].
#[derive(Clone)]
pub struct InsertAt<I: Iterator> {
    iter: I,
    index: usize,
    position: usize,
    item: Option<I::Item>,
    held: Option<I::Item>,
}

impl<I: Iterator> Iterator for InsertAt<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        if let Some(held) = self.held.take() {
            return Some(held);
        }

        let next = self.iter.next()?;
        let position = self.position;
        self.position += 1;

        if position == self.index {
            if let Some(item) = self.item.take() {
                self.held = Some(next);
                return Some(item);
            }
        }

        Some(next)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.iter.size_hint();
        let held = usize::from(self.held.is_some());
        let pending = usize::from(self.item.is_some());

        (
            lower.saturating_add(held),
            upper.and_then(|upper| upper.checked_add(held + pending)),
        )
    }
}

impl<I> fmt::Debug for InsertAt<I>
where
    I: Iterator + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InsertAt")
            .field("iter", &self.iter)
            .field("index", &self.index)
            .field("position", &self.position)
            .finish_non_exhaustive()
    }
}
