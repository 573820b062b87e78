// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Prelude module re-exporting all operator traits.
//!
//! ```rust
//! use seqkit_ops::prelude::*;
//!
//! let sorted = [3, 1, 2, 3]
//!     .into_iter()
//!     .distinct_by(|x| *x)
//!     .order(|a: &i32, b: &i32| a.cmp(b));
//!
//! assert_eq!(sorted.as_slice(), [1, 2, 3]);
//! ```
//!
//! # Contents
//!
//! - [`DistinctByExt`] - First element per projected key
//! - [`DistinctWithExt`] - Whole-element de-duplication under a comparer
//! - [`SelectWhereExt`] - Filter and transform through [`Selection`](seqkit_core::Selection)
//! - [`OrderExt`] - Stable ascending/descending ordering
//! - [`CloseExt`] / [`ClosedIterExt`] - Sequence guards
//! - [`InsertAtExt`] - Positional insertion
//! - [`WithoutExt`] - Value exclusion
//! - [`LookupExt`] - First/single lookups with fallbacks
//! - [`ContainsExt`] - Comparer-aware containment
//! - [`MatchesWithExt`] - Pairwise sequence matching
//! - [`ForEachWhileExt`] - Conditional iteration
//! - [`AllTrueExt`] - Flag folding

pub use crate::all_true::AllTrueExt;
pub use crate::close::{CloseExt, ClosedIterExt};
pub use crate::contains::ContainsExt;
pub use crate::distinct_by::DistinctByExt;
pub use crate::distinct_with::DistinctWithExt;
pub use crate::for_each_while::ForEachWhileExt;
pub use crate::insert_at::InsertAtExt;
pub use crate::lookup::LookupExt;
pub use crate::matches_with::MatchesWithExt;
pub use crate::order::OrderExt;
pub use crate::select_where::SelectWhereExt;
pub use crate::without::WithoutExt;
