//! Criterion benchmarks for the Gray walk.
//! Sizes: uniform binary (2^k) and mixed radices around 10^5 tuples.
//! Results: by default under target/criterion.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use iterkit::gray::{gray_product, GrayProduct};

fn bench_gray(c: &mut Criterion) {
    let mut group = c.benchmark_group("gray");
    for &k in &[8usize, 12, 16] {
        group.bench_with_input(BenchmarkId::new("binary_next_digits", k), &k, |b, &k| {
            b.iter(|| {
                let mut g = GrayProduct::from_sizes(vec![2; k]);
                let mut acc = 0usize;
                while let Some(d) = g.next_digits() {
                    acc = acc.wrapping_add(d[0]);
                }
                acc
            })
        });
    }
    let mixed = vec![7usize, 3, 11, 5, 2, 13];
    group.bench_function(BenchmarkId::new("mixed_collect", "7x3x11x5x2x13"), |b| {
        b.iter(|| GrayProduct::from_sizes(mixed.clone()).count())
    });
    let pools: Vec<Vec<u32>> = mixed.iter().map(|&n| (0..n as u32).collect()).collect();
    group.bench_function(BenchmarkId::new("pools", "7x3x11x5x2x13"), |b| {
        b.iter(|| gray_product(&pools).map(|v| *v[0]).sum::<u32>())
    });
    group.finish();
}

criterion_group!(benches, bench_gray);
criterion_main!(benches);
