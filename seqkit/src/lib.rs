// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! # seqkit
//!
//! Composable sequence utilities over plain Rust iterators.
//!
//! ## Overview
//!
//! seqkit adds a handful of operators that `std` leaves out, all driven by
//! pluggable comparison:
//!
//! - **De-duplication by key**: keep the first element for each projected key
//! - **Selection filters**: decide and transform in one call, telling "nothing"
//!   apart from "the default value"
//! - **Stable ordering**: ascending or descending by any comparer, ties keep
//!   their original order in both directions
//! - **Guards**: hand out a source as "iterate from the start" and nothing else
//!
//! ## Design Philosophy
//!
//! - **Operators are extension traits**: bring them in with the [`prelude`]
//! - **Comparison is a value**: [`EqualityComparer`] and [`Comparer`] are
//!   traits, closures implement [`Comparer`] directly
//! - **Lazy unless stated**: only ordering buffers its source
//!
//! ## Quick Start
//!
//! ```rust
//! use seqkit::prelude::*;
//!
//! #[derive(Debug, Clone, PartialEq)]
//! struct Order {
//!     customer: &'static str,
//!     total: u32,
//! }
//!
//! let orders = vec![
//!     Order { customer: "ann", total: 30 },
//!     Order { customer: "bob", total: 10 },
//!     Order { customer: "ann", total: 50 },
//!     Order { customer: "cy", total: 30 },
//! ];
//!
//! // First order of every customer, biggest first
//! let firsts = orders
//!     .into_iter()
//!     .distinct_by(|o| o.customer)
//!     .order_descending(comparing(|o: &Order| o.total));
//!
//! let customers: Vec<_> = firsts.iter().map(|o| o.customer).collect();
//! assert_eq!(customers, ["ann", "cy", "bob"]);
//! ```

// Re-export core types
pub use seqkit_core::{
    comparing, default_hash, equality_by, Comparer, ComparerExt, ComparerSet, DefaultEquality,
    Direction, EqualityComparer, KeyProjectionComparer, KeySelector, NaturalOrder, Result,
    SeqError, Selection,
};

// Re-export operators and the types they return
pub use seqkit_ops::{
    close, order, order_by_direction, order_descending, ByComparer, Closed, ClosedIter,
    DistinctBy, DistinctWith, Excludes, InsertAt, NativeEq, OrderedSequence, Restartable,
    SelectWhere, Without,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use seqkit_core::{
        comparing, Comparer, ComparerExt, DefaultEquality, Direction, EqualityComparer,
        KeyProjectionComparer, NaturalOrder, Selection,
    };
    pub use seqkit_ops::prelude::*;
    pub use seqkit_ops::{close, order, order_descending};
}
