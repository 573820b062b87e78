// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Filter and transform in a single selector call.

use seqkit_core::Selection;
use std::fmt;

/// Extension trait providing the `select_where` operator.
pub trait SelectWhereExt: Iterator + Sized {
    /// Projects every element with `selector`, keeping only `Present` results.
    ///
    /// The selector decides and transforms in the same invocation, so the
    /// filtering decision can use whatever it computed for the result. Unlike
    /// `filter_map` over `Option`, the selector speaks [`Selection`], which
    /// keeps "nothing selected" apart from "selected the default value".
    ///
    /// # Behavior
    ///
    /// - Lazy, no buffering: one source element per selector call
    /// - Order of the kept results follows the source
    /// - `Selection::Present(R::default())` is emitted like any other value
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqkit_core::Selection;
    /// use seqkit_ops::SelectWhereExt;
    ///
    /// let doubled_evens: Vec<_> = [1, 2, 3, 4]
    ///     .into_iter()
    ///     .select_where(|x| {
    ///         if x % 2 == 0 {
    ///             Selection::Present(x * 2)
    ///         } else {
    ///             Selection::Empty
    ///         }
    ///     })
    ///     .collect();
    ///
    /// assert_eq!(doubled_evens, [4, 8]);
    /// ```
    fn select_where<R, F>(self, selector: F) -> SelectWhere<Self, F>
    where
        F: FnMut(Self::Item) -> Selection<R>,
    {
        SelectWhere {
            iter: self,
            selector,
        }
    }
}

impl<I: Iterator> SelectWhereExt for I {}

/// Iterator returned by [`SelectWhereExt::select_where`].
#[derive(Clone)]
pub struct SelectWhere<I, F> {
    iter: I,
    selector: F,
}

impl<I, R, F> Iterator for SelectWhere<I, F>
where
    I: Iterator,
    F: FnMut(I::Item) -> Selection<R>,
{
    type Item = R;

    fn next(&mut self) -> Option<R> {
        for item in self.iter.by_ref() {
            if let Selection::Present(value) = (self.selector)(item) {
                return Some(value);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.iter.size_hint().1)
    }
}

impl<I: fmt::Debug, F> fmt::Debug for SelectWhere<I, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectWhere")
            .field("iter", &self.iter)
            .finish_non_exhaustive()
    }
}
