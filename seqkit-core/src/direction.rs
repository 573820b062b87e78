// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use seqkit_error::SeqError;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    /// Smallest first.
    #[default]
    Ascending,
    /// Largest first.
    Descending,
}

impl Direction {
    /// Returns `true` if this is ascending order.
    #[must_use]
    pub const fn is_ascending(self) -> bool {
        matches!(self, Direction::Ascending)
    }

    /// Returns `true` if this is descending order.
    #[must_use]
    pub const fn is_descending(self) -> bool {
        matches!(self, Direction::Descending)
    }

    /// Applies this direction to an ordering: unchanged for ascending,
    /// reversed for descending.
    #[must_use]
    pub const fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Direction::Ascending => ordering,
            Direction::Descending => ordering.reverse(),
        }
    }

    /// Short display name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Direction::Ascending => "asc",
            Direction::Descending => "desc",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = SeqError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(Direction::Ascending),
            "desc" | "descending" => Ok(Direction::Descending),
            other => Err(SeqError::invalid_argument(
                "direction",
                format!("expected `asc` or `desc`, got `{other}`"),
            )),
        }
    }
}
