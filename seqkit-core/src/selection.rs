// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use seqkit_error::{Result, SeqError};

/// The outcome of a selector that filters and transforms in one call.
///
/// `Empty` means "skip this element"; `Present(value)` means "emit `value`".
/// `Present(T::default())` is a real result and is never confused with
/// `Empty`.
///
/// # Examples
///
/// ```
/// use seqkit_core::Selection;
///
/// let halve = |n: i32| {
///     if n % 2 == 0 {
///         Selection::present(n / 2)
///     } else {
///         Selection::empty()
///     }
/// };
///
/// assert_eq!(halve(0), Selection::Present(0));
/// assert!(halve(3).is_empty());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Selection<T> {
    /// No value was selected
    Empty,
    /// A selected value, possibly the default of `T`
    Present(T),
}

impl<T> Default for Selection<T> {
    fn default() -> Self {
        Selection::Empty
    }
}

impl<T> Selection<T> {
    /// Wraps `value` as a present selection.
    pub const fn present(value: T) -> Self {
        Selection::Present(value)
    }

    /// The empty selection.
    pub const fn empty() -> Self {
        Selection::Empty
    }

    /// Returns `true` if this is `Empty`.
    pub const fn is_empty(&self) -> bool {
        matches!(self, Selection::Empty)
    }

    /// Returns `true` if this is `Present`.
    pub const fn is_present(&self) -> bool {
        matches!(self, Selection::Present(_))
    }

    /// Borrows the selected value, if any.
    pub const fn value(&self) -> Option<&T> {
        match self {
            Selection::Present(value) => Some(value),
            Selection::Empty => None,
        }
    }

    /// Converts into an `Option`, mapping `Empty` to `None`.
    pub fn into_option(self) -> Option<T> {
        match self {
            Selection::Present(value) => Some(value),
            Selection::Empty => None,
        }
    }

    /// Returns the selected value.
    ///
    /// # Errors
    /// Returns [`SeqError::EmptySelection`] if this is `Empty`.
    pub fn into_value(self) -> Result<T> {
        self.into_option().ok_or(SeqError::EmptySelection)
    }

    /// Returns the selected value or `fallback`.
    pub fn unwrap_or(self, fallback: T) -> T {
        self.into_option().unwrap_or(fallback)
    }

    /// Maps a `Selection<T>` to `Selection<U>`; `Empty` stays `Empty`.
    pub fn map<U, F>(self, f: F) -> Selection<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Selection::Present(value) => Selection::Present(f(value)),
            Selection::Empty => Selection::Empty,
        }
    }

    /// Keeps a present value only if `predicate` holds for it.
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Selection::Present(value) if predicate(&value) => Selection::Present(value),
            _ => Selection::Empty,
        }
    }
}

impl<T> From<Option<T>> for Selection<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Selection::Present(value),
            None => Selection::Empty,
        }
    }
}

impl<T> From<Selection<T>> for Option<T> {
    fn from(selection: Selection<T>) -> Self {
        selection.into_option()
    }
}
