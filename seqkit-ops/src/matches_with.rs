// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

/// Extension trait providing pairwise sequence matching.
pub trait MatchesWithExt: Iterator + Sized {
    /// Whether `other` has the same length and `predicate` holds for every
    /// pair of elements at the same position.
    ///
    /// The two sides may have different element types. Stops at the first
    /// mismatch.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqkit_ops::MatchesWithExt;
    ///
    /// assert!([1, 2].into_iter().matches_with(["1", "2"], |n, s| n.to_string() == *s));
    /// assert!(![1, 2].into_iter().matches_with(["1"], |n, s| n.to_string() == *s));
    /// ```
    fn matches_with<J, P>(mut self, other: J, mut predicate: P) -> bool
    where
        J: IntoIterator,
        P: FnMut(&Self::Item, &J::Item) -> bool,
    {
        let mut other = other.into_iter();
        loop {
            match (self.next(), other.next()) {
                (None, None) => return true,
                (Some(left), Some(right)) if predicate(&left, &right) => {}
                _ => return false,
            }
        }
    }
}

impl<I: Iterator> MatchesWithExt for I {}
