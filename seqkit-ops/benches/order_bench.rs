// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use criterion::{BenchmarkId, Criterion, Throughput};
use seqkit_core::{comparing, NaturalOrder};
use seqkit_ops::{order, order_descending};
use seqkit_test_utils::random;
use std::hint::black_box;

pub fn bench_order(c: &mut Criterion) {
    let sizes = [100usize, 1000usize, 10000];
    let key_spaces = [4u32, 64u32, 1_000_000u32];

    // Ascending, few to many ties
    let mut group = c.benchmark_group("order_ascending");

    for &size in &sizes {
        for &key_space in &key_spaces {
            let id = BenchmarkId::from_parameter(format!("m{size}_k{key_space}"));
            group.throughput(Throughput::Elements(size as u64));
            group.bench_with_input(id, &(size, key_space), |bencher, &(size, key_space)| {
                bencher.iter_with_setup(
                    || random::keys_with_positions(42, size, key_space),
                    |input| black_box(order(input, comparing(|e: &(u32, usize)| e.0))),
                );
            });
        }
    }

    group.finish();

    // Descending pays for two extra reversals
    let mut group = c.benchmark_group("order_descending");

    for &size in &sizes {
        for &key_space in &key_spaces {
            let id = BenchmarkId::from_parameter(format!("m{size}_k{key_space}"));
            group.throughput(Throughput::Elements(size as u64));
            group.bench_with_input(id, &(size, key_space), |bencher, &(size, key_space)| {
                bencher.iter_with_setup(
                    || random::keys_with_positions(42, size, key_space),
                    |input| black_box(order_descending(input, comparing(|e: &(u32, usize)| e.0))),
                );
            });
        }
    }

    group.finish();

    // Secondary ordering
    let mut group = c.benchmark_group("order_then_by");

    for &size in &sizes {
        let id = BenchmarkId::from_parameter(format!("m{size}"));
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(id, &size, |bencher, &size| {
            bencher.iter_with_setup(
                || random::values(7, size, 32),
                |input| {
                    black_box(
                        order(input, comparing(|v: &u32| v % 4)).then_by_descending(NaturalOrder),
                    )
                },
            );
        });
    }

    group.finish();
}
