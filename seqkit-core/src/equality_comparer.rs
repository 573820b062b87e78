// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Pluggable equality for operators that must decide element identity.

use std::collections::hash_map::DefaultHasher;
use std::hash::{BuildHasher, BuildHasherDefault, Hash};

/// Equality plus a hash consistent with it.
///
/// Operators that de-duplicate or test containment take an `EqualityComparer`
/// instead of relying on `PartialEq`, so callers can define identity per call
/// (case-insensitive strings, a single field of a struct, ...).
///
/// # Contract
///
/// - `equals` is reflexive, symmetric and transitive
/// - `equals(a, b)` implies `hash(a) == hash(b)`
///
/// Violating the contract does not panic; operators relying on the comparer
/// simply produce unspecified results.
///
/// # Examples
///
/// ```
/// use seqkit_core::{default_hash, EqualityComparer};
///
/// struct CaseInsensitive;
///
/// impl EqualityComparer<str> for CaseInsensitive {
///     fn equals(&self, a: &str, b: &str) -> bool {
///         a.eq_ignore_ascii_case(b)
///     }
///
///     fn hash(&self, value: &str) -> u64 {
///         default_hash(&value.to_ascii_lowercase())
///     }
/// }
///
/// assert!(CaseInsensitive.equals("Rust", "rUST"));
/// assert_eq!(CaseInsensitive.hash("Rust"), CaseInsensitive.hash("RUST"));
/// ```
pub trait EqualityComparer<T: ?Sized> {
    /// Returns `true` if `a` and `b` are considered the same element.
    fn equals(&self, a: &T, b: &T) -> bool;

    /// Returns a hash consistent with [`equals`](Self::equals).
    fn hash(&self, value: &T) -> u64;
}

impl<T, C> EqualityComparer<T> for &C
where
    T: ?Sized,
    C: EqualityComparer<T> + ?Sized,
{
    fn equals(&self, a: &T, b: &T) -> bool {
        (**self).equals(a, b)
    }

    fn hash(&self, value: &T) -> u64 {
        (**self).hash(value)
    }
}

/// Hashes `value` with a fixed-key hasher.
///
/// The result is stable for the lifetime of the process, which makes it a
/// convenient building block for custom [`EqualityComparer::hash`] impls.
pub fn default_hash<T: Hash + ?Sized>(value: &T) -> u64 {
    BuildHasherDefault::<DefaultHasher>::default().hash_one(value)
}

/// The native equality of a type.
///
/// Uses `Eq` and `Hash`, with a reference-identity check before calling `==`
/// so that comparing an element with itself never reaches a user `PartialEq`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DefaultEquality;

impl<T> EqualityComparer<T> for DefaultEquality
where
    T: Eq + Hash + ?Sized,
{
    fn equals(&self, a: &T, b: &T) -> bool {
        core::ptr::eq(a, b) || a == b
    }

    fn hash(&self, value: &T) -> u64 {
        default_hash(value)
    }
}

/// An [`EqualityComparer`] assembled from two closures.
///
/// Created by [`equality_by`].
#[derive(Clone, Copy)]
pub struct FnEquality<E, H> {
    equals: E,
    hash: H,
}

impl<E, H> std::fmt::Debug for FnEquality<E, H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnEquality").finish_non_exhaustive()
    }
}

impl<T, E, H> EqualityComparer<T> for FnEquality<E, H>
where
    T: ?Sized,
    E: Fn(&T, &T) -> bool,
    H: Fn(&T) -> u64,
{
    fn equals(&self, a: &T, b: &T) -> bool {
        (self.equals)(a, b)
    }

    fn hash(&self, value: &T) -> u64 {
        (self.hash)(value)
    }
}

/// Builds an [`EqualityComparer`] from an equality closure and a hash closure.
///
/// The two closures must honour the comparer contract: values reported equal
/// must hash identically.
///
/// # Examples
///
/// ```
/// use seqkit_core::{default_hash, equality_by, EqualityComparer};
///
/// let by_parity = equality_by(
///     |a: &i32, b: &i32| a % 2 == b % 2,
///     |v: &i32| default_hash(&(v % 2)),
/// );
///
/// assert!(by_parity.equals(&2, &40));
/// assert!(!by_parity.equals(&1, &40));
/// ```
pub fn equality_by<T, E, H>(equals: E, hash: H) -> FnEquality<E, H>
where
    T: ?Sized,
    E: Fn(&T, &T) -> bool,
    H: Fn(&T) -> u64,
{
    FnEquality { equals, hash }
}
