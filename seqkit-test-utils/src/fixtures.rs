// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Record types used as sequence elements in tests.

use std::fmt;

/// The usual subject for key-based de-duplication and ordering tests.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Person {
    pub name: String,
    pub age: u32,
}

impl Person {
    #[must_use]
    pub fn new(name: impl Into<String>, age: u32) -> Self {
        Self {
            name: name.into(),
            age,
        }
    }

    /// Key selector projecting the age.
    #[must_use]
    pub const fn age_key(person: &Self) -> u32 {
        person.age
    }

    /// Key selector projecting an owned copy of the name.
    #[must_use]
    pub fn name_key(person: &Self) -> String {
        person.name.clone()
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.age)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Animal {
    pub name: &'static str,
    pub legs: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Plant {
    pub species: &'static str,
    /// Centimetres.
    pub height: u32,
}
