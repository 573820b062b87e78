// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Lookups with fallbacks.

use seqkit_core::{Result, SeqError};

/// Extension trait providing lookups that fall back to a caller value.
pub trait LookupExt: Iterator + Sized {
    /// Returns the first element, or `value` when the source is empty.
    fn first_or(mut self, value: Self::Item) -> Self::Item {
        self.next().unwrap_or(value)
    }

    /// Returns the single element matching `predicate`.
    ///
    /// An empty source returns `value`. In a non-empty source exactly one
    /// element has to match:
    ///
    /// - no match fails with [`SeqError::NoMatch`]
    /// - a second match fails with [`SeqError::MultipleMatches`] without
    ///   pulling further
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqkit_core::SeqError;
    /// use seqkit_ops::LookupExt;
    ///
    /// assert_eq!(Vec::<i32>::new().into_iter().single_or(7, |x| *x > 1), Ok(7));
    /// assert_eq!([1, 2].into_iter().single_or(7, |x| *x > 1), Ok(2));
    /// assert_eq!([1].into_iter().single_or(7, |x| *x > 1), Err(SeqError::NoMatch));
    /// assert!([2, 3].into_iter().single_or(7, |x| *x > 1).is_err());
    /// ```
    fn single_or<P>(self, value: Self::Item, mut predicate: P) -> Result<Self::Item>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        let mut seen_any = false;
        let mut found = None;

        for item in self {
            seen_any = true;
            if !predicate(&item) {
                continue;
            }
            if found.is_some() {
                debug!("single_or: more than one element matched");
                return Err(SeqError::multiple_matches(2));
            }
            found = Some(item);
        }

        match found {
            Some(item) => Ok(item),
            None if !seen_any => Ok(value),
            None => {
                debug!("single_or: no element matched");
                Err(SeqError::NoMatch)
            }
        }
    }

    /// Projects each element with `selector` and returns the first projected
    /// value accepted by `predicate`.
    ///
    /// Stops pulling at the first accepted value.
    fn first_value_where<R, S, P>(self, selector: S, mut predicate: P) -> Option<R>
    where
        S: FnMut(Self::Item) -> R,
        P: FnMut(&R) -> bool,
    {
        self.map(selector).find(|value| predicate(value))
    }
}

impl<I: Iterator> LookupExt for I {}
