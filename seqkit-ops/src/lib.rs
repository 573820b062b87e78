// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Composable sequence operators over plain iterators.
//!
//! Every operator is an extension trait implemented for all iterators, so
//! operators chain like the ones in `std`. Comparison is pluggable through
//! the [`EqualityComparer`] and [`Comparer`] traits from `seqkit-core`.
//!
//! ## Operator Categories
//!
//! ### De-duplication
//!
//! - **[`distinct_by`](DistinctByExt::distinct_by)**: First element per projected key
//! - **[`distinct_with`](DistinctWithExt::distinct_with)**: First of each group of equal elements
//!
//! ### Filtering and Projection
//!
//! - **[`select_where`](SelectWhereExt::select_where)**: Decide and transform in one call
//! - **[`without`](WithoutExt::without)**: Skip a given value
//! - **[`insert_at`](InsertAtExt::insert_at)**: Splice one value in before a position
//!
//! ### Ordering
//!
//! - **[`order`]** / **[`order_descending`]**: Eager, stable sort by a comparer
//! - **[`then_by`](OrderedSequence::then_by)**: Break ties with a secondary comparer
//!
//! ### Guards
//!
//! - **[`close`]**: Expose a source as "iterate from the start" and nothing else
//! - **[`closed`](ClosedIterExt::closed)**: Hide an iterator's concrete type
//! - **[`restartable`](ClosedIterExt::restartable)**: Make a cloneable adapter iterable from the start
//!
//! ### Consumers
//!
//! - **[`first_or`](LookupExt::first_or)**, **[`single_or`](LookupExt::single_or)**,
//!   **[`first_value_where`](LookupExt::first_value_where)**
//! - **[`contains_with`](ContainsExt::contains_with)**, **[`contains_any`](ContainsExt::contains_any)**
//! - **[`matches_with`](MatchesWithExt::matches_with)**
//! - **[`for_each_while`](ForEachWhileExt::for_each_while)**
//! - **[`all_true`](AllTrueExt::all_true)**
//!
//! # Laziness
//!
//! Adapters pull one source element at a time and never look ahead further
//! than the element they are about to yield. Ordering is the exception: it
//! drains the source when the ordered sequence is created.
//!
//! # Feature Flags
//!
//! - `tracing`: emit `tracing` events from ordering, lookups and
//!   de-duplication. Off by default.
//!
//! [`EqualityComparer`]: seqkit_core::EqualityComparer
//! [`Comparer`]: seqkit_core::Comparer

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
#[macro_use]
mod logging;
pub mod all_true;
pub mod close;
pub mod contains;
pub mod distinct_by;
pub mod distinct_with;
pub mod for_each_while;
pub mod insert_at;
pub mod lookup;
pub mod matches_with;
pub mod order;
pub mod prelude;
pub mod select_where;
pub mod without;

pub use all_true::AllTrueExt;
pub use close::{close, CloseExt, Closed, ClosedIter, ClosedIterExt, Restartable};
pub use contains::ContainsExt;
pub use distinct_by::{DistinctBy, DistinctByExt};
pub use distinct_with::{DistinctWith, DistinctWithExt};
pub use for_each_while::ForEachWhileExt;
pub use insert_at::{InsertAt, InsertAtExt};
pub use lookup::LookupExt;
pub use matches_with::MatchesWithExt;
pub use order::{order, order_by_direction, order_descending, OrderExt, OrderedSequence};
pub use select_where::{SelectWhere, SelectWhereExt};
pub use without::{ByComparer, Excludes, NativeEq, Without, WithoutExt};
