// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Test utilities and fixtures for the seqkit workspace.
//!
//! This crate provides fixture types, source sequences with observable
//! iteration behaviour, and assertion helpers. It is designed for use in
//! development and testing only, not for production code.
//!
//! # Key Types
//!
//! - [`SinglePass`] - a source that can be drained only once, even through `&`
//! - [`CountingIter`] / [`PullCounter`] - observe how many elements an operator pulled
//! - [`CaseInsensitive`] - an `EqualityComparer` fixture for strings
//! - [`TestData`] - enum fixture mixing people, animals and plants
//!
//! # Examples
//!
//! ```rust
//! use seqkit_test_utils::{counting, SinglePass};
//!
//! let source = SinglePass::new(vec![1, 2, 3]);
//! assert_eq!((&source).into_iter().count(), 3);
//! assert_eq!((&source).into_iter().count(), 0);
//!
//! let (mut iter, counter) = counting(0..10);
//! iter.next();
//! assert_eq!(counter.pulls(), 1);
//! ```

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
pub mod case_insensitive;
pub mod counting;
pub mod fixtures;
pub mod helpers;
pub mod random;
pub mod single_pass;
pub mod test_data;

pub use case_insensitive::CaseInsensitive;
pub use counting::{counting, CountingIter, PullCounter};
pub use fixtures::{Animal, Person, Plant};
pub use helpers::{collect_twice, tagged};
pub use single_pass::SinglePass;
pub use test_data::{DataVariant, TestData};
