// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::helpers::tagged;

/// Deterministic pseudo-random keys in `0..key_space`, each tagged with its
/// original position so that stability can be checked after sorting.
pub fn keys_with_positions(seed: u64, len: usize, key_space: u32) -> Vec<(u32, usize)> {
    let mut rng = fastrand::Rng::with_seed(seed);
    tagged((0..len).map(|_| rng.u32(0..key_space)))
}

/// Deterministic pseudo-random values in `0..bound`.
pub fn values(seed: u64, len: usize, bound: u32) -> Vec<u32> {
    let mut rng = fastrand::Rng::with_seed(seed);
    (0..len).map(|_| rng.u32(0..bound)).collect()
}
