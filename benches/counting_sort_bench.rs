//! Benchmark for the counting-sort pipeline
//!
//! Confirms the O(n + k) shape: runtime should grow linearly with input
//! length at a fixed value range.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;
use tallysort::core::sort;

fn pseudo_random_input(len: usize, max_value: u64) -> Vec<u64> {
    (0..len as u64).map(|i| (i * 7919) % (max_value + 1)).collect()
}

fn bench_counting_sort(c: &mut Criterion) {
    let mut group = c.benchmark_group("counting_sort");

    for size in [100usize, 1_000, 10_000, 100_000] {
        let input = pseudo_random_input(size, 1_023);
        group.bench_with_input(BenchmarkId::from_parameter(size), &input, |b, input| {
            b.iter(|| sort(black_box(input)).unwrap())
        });
    }

    group.finish();
}

criterion_group!(benches, bench_counting_sort);
criterion_main!(benches);
