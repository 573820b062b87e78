// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::cell::Cell;
use std::rc::Rc;

/// Shared view on how many times a [`CountingIter`] was pulled.
#[derive(Debug, Clone, Default)]
pub struct PullCounter(Rc<Cell<usize>>);

impl PullCounter {
    /// Calls to `next` so far, including the one that returned `None`.
    pub fn pulls(&self) -> usize {
        self.0.get()
    }

    fn bump(&self) {
        self.0.set(self.0.get() + 1);
    }
}

/// Iterator wrapper that records every `next` call on a [`PullCounter`].
///
/// Clones share the counter.
#[derive(Debug, Clone)]
pub struct CountingIter<I> {
    inner: I,
    counter: PullCounter,
}

impl<I: Iterator> Iterator for CountingIter<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        self.counter.bump();
        self.inner.next()
    }
}

/// Wraps `source` so that pulls can be observed through the returned counter.
pub fn counting<I: IntoIterator>(source: I) -> (CountingIter<I::IntoIter>, PullCounter) {
    let counter = PullCounter::default();
    let iter = CountingIter {
        inner: source.into_iter(),
        counter: counter.clone(),
    };
    (iter, counter)
}
