// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

/// Extension trait providing conditional iteration.
pub trait ForEachWhileExt: Iterator + Sized {
    /// Calls `action` on each element until it returns `false`.
    ///
    /// The element for which `action` returned `false` is the last one pulled.
    fn for_each_while<F>(self, mut action: F)
    where
        F: FnMut(Self::Item) -> bool,
    {
        for item in self {
            if !action(item) {
                break;
            }
        }
    }
}

impl<I: Iterator> ForEachWhileExt for I {}
