// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

/// Iterates `source` from the start twice and collects both passes.
///
/// Takes any copyable iterable, such as `&Vec<T>` or `&Closed<'_, S>`.
pub fn collect_twice<S>(source: S) -> (Vec<S::Item>, Vec<S::Item>)
where
    S: IntoIterator + Copy,
{
    let first = source.into_iter().collect();
    let second = source.into_iter().collect();
    (first, second)
}

/// Pairs every value with its original position.
pub fn tagged<T>(values: impl IntoIterator<Item = T>) -> Vec<(T, usize)> {
    values
        .into_iter()
        .enumerate()
        .map(|(index, value)| (value, index))
        .collect()
}
