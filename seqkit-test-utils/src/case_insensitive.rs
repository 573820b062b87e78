// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use seqkit_core::{default_hash, Comparer, EqualityComparer};
use std::cmp::Ordering;

/// ASCII case-insensitive equality and ordering for strings.
#[derive(Debug, Clone, Copy, Default)]
pub struct CaseInsensitive;

impl EqualityComparer<str> for CaseInsensitive {
    fn equals(&self, a: &str, b: &str) -> bool {
        a.eq_ignore_ascii_case(b)
    }

    fn hash(&self, value: &str) -> u64 {
        default_hash(&value.to_ascii_lowercase())
    }
}

impl EqualityComparer<String> for CaseInsensitive {
    fn equals(&self, a: &String, b: &String) -> bool {
        EqualityComparer::<str>::equals(self, a, b)
    }

    fn hash(&self, value: &String) -> u64 {
        EqualityComparer::<str>::hash(self, value)
    }
}

impl Comparer<str> for CaseInsensitive {
    fn compare(&self, a: &str, b: &str) -> Ordering {
        a.to_ascii_lowercase().cmp(&b.to_ascii_lowercase())
    }
}

impl Comparer<String> for CaseInsensitive {
    fn compare(&self, a: &String, b: &String) -> Ordering {
        Comparer::<str>::compare(self, a, b)
    }
}
