// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![allow(clippy::multiple_crate_versions)]
//! Error types for the seqkit sequence utilities
//!
//! Every failure in seqkit is immediate and local to the call that violated a
//! precondition: there is no I/O and therefore no transient failure mode.
//!
//! # Examples
//!
//! ```
//! use seqkit_error::{Result, SeqError};
//!
//! fn parse_limit(raw: &str) -> Result<usize> {
//!     raw.parse()
//!         .map_err(|_| SeqError::invalid_argument("limit", "not a number"))
//! }
//!
//! assert!(parse_limit("ten").is_err());
//! ```

/// Root error type for all seqkit operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SeqError {
    /// An argument was supplied but cannot be used
    ///
    /// Arguments that are merely absent cannot be expressed in the API; this
    /// variant covers values that are present but out of their domain.
    #[error("Invalid argument `{name}`: {reason}")]
    InvalidArgument {
        /// Name of the offending argument
        name: &'static str,
        /// Why the value was rejected
        reason: String,
    },

    /// The value of an empty `Selection` was requested
    #[error("Selection is empty")]
    EmptySelection,

    /// A single-result lookup over a non-empty sequence found no match
    #[error("No element matched the predicate")]
    NoMatch,

    /// A single-result lookup found more than one match
    ///
    /// The lookup stops at the second match, so `count` is a lower bound.
    #[error("Expected a single match, found at least {count}")]
    MultipleMatches {
        /// Matches observed before the lookup stopped
        count: usize,
    },
}

impl SeqError {
    /// Create an invalid argument error
    pub fn invalid_argument(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            name,
            reason: reason.into(),
        }
    }

    /// Create a multiple matches error
    #[must_use]
    pub const fn multiple_matches(count: usize) -> Self {
        Self::MultipleMatches { count }
    }

    /// Check if this error came from a single-result lookup
    ///
    /// Callers that treat "nothing found" and "ambiguous" alike can use this
    /// instead of matching both variants.
    #[must_use]
    pub const fn is_lookup_failure(&self) -> bool {
        matches!(self, Self::NoMatch | Self::MultipleMatches { .. })
    }
}

/// Specialized Result type for seqkit operations
///
/// This is a type alias for `std::result::Result<T, SeqError>`.
///
/// # Examples
///
/// ```
/// use seqkit_error::Result;
///
/// fn first_even(values: &[i32]) -> Result<i32> {
///     Ok(values.iter().copied().find(|v| v % 2 == 0).unwrap_or_default())
/// }
/// ```
pub type Result<T> = std::result::Result<T, SeqError>;
