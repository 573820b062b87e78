// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use parking_lot::Mutex;
use std::collections::VecDeque;
use std::fmt;

/// A source that yields its elements once, even when iterated through `&`.
///
/// Every `(&source).into_iter()` drains from the same queue, so a second
/// iteration after exhaustion yields nothing. This models single-pass
/// producers such as channel receivers.
pub struct SinglePass<T> {
    items: Mutex<VecDeque<T>>,
}

impl<T> SinglePass<T> {
    pub fn new(items: impl IntoIterator<Item = T>) -> Self {
        Self {
            items: Mutex::new(items.into_iter().collect()),
        }
    }

    /// Elements not yet drained.
    pub fn remaining(&self) -> usize {
        self.items.lock().len()
    }

    pub fn is_exhausted(&self) -> bool {
        self.items.lock().is_empty()
    }
}

impl<T> fmt::Debug for SinglePass<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SinglePass")
            .field("remaining", &self.remaining())
            .finish()
    }
}

/// Iterator draining a [`SinglePass`].
pub struct Drain<'a, T> {
    source: &'a SinglePass<T>,
}

impl<T> Iterator for Drain<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.source.items.lock().pop_front()
    }
}

impl<'a, T> IntoIterator for &'a SinglePass<T> {
    type Item = T;
    type IntoIter = Drain<'a, T>;

    fn into_iter(self) -> Drain<'a, T> {
        Drain { source: self }
    }
}
