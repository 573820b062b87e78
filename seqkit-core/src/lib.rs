// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
//! Core traits and types shared by every seqkit operator.
//!
//! - [`EqualityComparer`] - pluggable equality + hash
//! - [`Comparer`] - pluggable three-way comparison
//! - [`KeyProjectionComparer`] - equality defined by equality of extracted keys
//! - [`Selection`] - "no value" versus "a present value"
//! - [`Direction`] - ascending or descending ordering
//! - [`ComparerSet`] - a set whose membership is decided by an [`EqualityComparer`]
pub mod comparer;
pub mod comparer_set;
pub mod direction;
pub mod equality_comparer;
pub mod key_projection_comparer;
pub mod key_selector;
pub mod selection;

pub use self::comparer::{
    comparing, Comparer, ComparerExt, Directed, KeyComparer, NaturalOrder, Reversed, ThenBy,
};
pub use self::comparer_set::ComparerSet;
pub use self::direction::Direction;
pub use self::equality_comparer::{
    default_hash, equality_by, DefaultEquality, EqualityComparer, FnEquality,
};
pub use self::key_projection_comparer::KeyProjectionComparer;
pub use self::key_selector::KeySelector;
pub use self::selection::Selection;
pub use seqkit_error::{Result, SeqError};
