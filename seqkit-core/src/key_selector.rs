// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

/// A pure function extracting a key from an element.
///
/// Implemented for every `Fn(&T) -> K`, so plain closures work wherever a key
/// selector is expected. The key type is an associated type so that comparers
/// built on a selector can name it without an extra type parameter.
///
/// Selectors must be deterministic and free of side effects; operators may call
/// them any number of times per element.
///
/// # Examples
///
/// ```
/// use seqkit_core::KeySelector;
///
/// let by_len = |s: &String| s.len();
/// assert_eq!(by_len.select(&"four".to_string()), 4);
/// ```
pub trait KeySelector<T: ?Sized> {
    /// The extracted key type
    type Key;

    /// Extracts the key of `item`.
    fn select(&self, item: &T) -> Self::Key;
}

impl<T, K, F> KeySelector<T> for F
where
    T: ?Sized,
    F: Fn(&T) -> K,
{
    type Key = K;

    fn select(&self, item: &T) -> K {
        self(item)
    }
}
