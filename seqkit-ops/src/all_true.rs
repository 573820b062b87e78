// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

/// Extension trait folding a sequence of flags.
pub trait AllTrueExt: Iterator<Item = bool> + Sized {
    /// Whether every flag is `true`. An empty sequence is `true`.
    fn all_true(mut self) -> bool {
        self.all(|flag| flag)
    }
}

impl<I: Iterator<Item = bool>> AllTrueExt for I {}
