use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Duration;

use succinct_bitvec::SuccinctBitVector;

fn c() -> Criterion {
    Criterion::default()
        .sample_size(10)
        .warm_up_time(Duration::from_secs(1))
}

const NS: [u64; 5] = [1 << 16, 1 << 17, 1 << 18, 1 << 19, 1 << 20];

fn dense_random(n: u64, seed: u64) -> SuccinctBitVector {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut sbv = SuccinctBitVector::construct();
    sbv.init(n).unwrap();
    for pos in 0..n {
        if rng.gen_bool(0.5) {
            sbv.set_bit(pos, 1).unwrap();
        }
    }
    sbv
}

fn build_benchmark(bench: &mut Criterion) {
    let mut group = bench.benchmark_group("build");
    for &n in NS.iter() {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter_batched(
                || dense_random(n, 1),
                |mut sbv| sbv.build().unwrap(),
                BatchSize::LargeInput,
            )
        });
    }
    group.finish();
}

fn rank_benchmark(bench: &mut Criterion) {
    let times = 1_000_000u64;
    let mut group = bench.benchmark_group("rank");
    for &n in NS.iter() {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            let mut sbv = dense_random(n, 2);
            sbv.build().unwrap();
            let mut rng = StdRng::seed_from_u64(3);
            b.iter(|| {
                for _ in 0..times {
                    let pos = rng.gen_range(0..n);
                    criterion::black_box(sbv.rank(pos, 1).unwrap());
                }
            })
        });
    }
    group.finish();
}

fn select_benchmark(bench: &mut Criterion) {
    let times = 1_000_000u64;
    let mut group = bench.benchmark_group("select");
    for &n in NS.iter() {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            let mut sbv = dense_random(n, 4);
            sbv.build().unwrap();
            let population = sbv.count_ones().unwrap();
            let mut rng = StdRng::seed_from_u64(5);
            b.iter(|| {
                for _ in 0..times {
                    let k = rng.gen_range(0..population);
                    criterion::black_box(sbv.select(k, 1).unwrap());
                }
            })
        });
    }
    group.finish();
}

criterion_group! {
    name = benches;
    config = c();
    targets = build_benchmark, rank_benchmark, select_benchmark
}
criterion_main!(benches);
