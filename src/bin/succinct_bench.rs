//! Throughput benchmark harness: fills a dictionary at density ~0.5, builds
//! it, then times `--nloop` rank queries and `--nloop` select queries with
//! uniformly random arguments, reporting the median of 11 trials.
//!
//! Not part of the library: this binary only consumes `SuccinctBitVector`'s
//! public API, gated behind the `cli` feature so the library itself never
//! depends on `clap`/`rand`/`anyhow`.

use anyhow::{ensure, Context, Result};
use clap::Parser;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::time::Instant;

use succinct_bitvec::SuccinctBitVector;

#[derive(Parser, Debug)]
#[command(about = "Rank/select throughput benchmark")]
struct Args {
    /// Total queries per measured phase.
    #[arg(long, default_value_t = 10_000_000, value_parser = clap::value_parser!(u64).range(1_000..=1_000_000_000))]
    nloop: u64,

    /// Bits in the vector.
    #[arg(long, default_value_t = 1_000_000, value_parser = clap::value_parser!(u64).range(1_000..=1_000_000_000))]
    bitsz: u64,
}

const TRIALS: usize = 11;

fn build_dense(bitsz: u64) -> Result<SuccinctBitVector> {
    let mut rng = ChaCha8Rng::seed_from_u64(0);
    let mut sbv = SuccinctBitVector::construct();
    sbv.init(bitsz).context("init() failed")?;
    for pos in 0..bitsz {
        if rng.gen_bool(0.5) {
            sbv.set_bit(pos, 1).context("set_bit() failed")?;
        }
    }
    sbv.build().context("build() failed")?;
    Ok(sbv)
}

fn median(mut samples: Vec<f64>) -> f64 {
    samples.sort_by(|a, b| a.partial_cmp(b).unwrap());
    samples[samples.len() / 2]
}

/// One trial of `nloop` rank queries, run entirely inside the timed region.
/// `positions` is pre-generated once per trial so the RNG itself is never
/// on the hot path being measured.
fn time_rank_trial(sbv: &SuccinctBitVector, positions: &[u64]) -> f64 {
    let start = Instant::now();
    for &pos in positions {
        criterion_black_box(sbv.rank(pos, 1).unwrap());
    }
    start.elapsed().as_secs_f64()
}

/// One trial of `nloop` select queries.
///
/// Indexes `work_queue` by the inner loop's own index. A prior benchmark
/// harness this one supersedes indexed its equivalent work queue by the
/// *outer* trial index inside the inner loop, so every inner iteration of a
/// given trial read the same element; fixed here.
fn time_select_trial(sbv: &SuccinctBitVector, work_queue: &[u64]) -> f64 {
    let start = Instant::now();
    for j in 0..work_queue.len() {
        criterion_black_box(sbv.select(work_queue[j], 1).unwrap());
    }
    start.elapsed().as_secs_f64()
}

/// Minimal `black_box`: prevents the optimizer from eliding the query
/// entirely, without pulling in a benchmarking crate for a one-line need.
fn criterion_black_box<T>(value: T) -> T {
    std::hint::black_box(value)
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    ensure!(args.nloop >= 1_000, "nloop must be >= 1000");
    ensure!(args.bitsz >= 1_000, "bitsz must be >= 1000");

    log::info!("building dictionary: bitsz={}", args.bitsz);
    let sbv = build_dense(args.bitsz)?;
    let population = sbv.count_ones().context("count_ones() failed")?;
    ensure!(population > 0, "dictionary has no one-bits, cannot benchmark select");

    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let mut rank_times = Vec::with_capacity(TRIALS);
    let mut select_times = Vec::with_capacity(TRIALS);

    for trial in 0..TRIALS {
        let positions: Vec<u64> = (0..args.nloop).map(|_| rng.gen_range(0..args.bitsz)).collect();
        let rank_elapsed = time_rank_trial(&sbv, &positions);
        rank_times.push(args.nloop as f64 / rank_elapsed);

        let ks: Vec<u64> = (0..args.nloop).map(|_| rng.gen_range(0..population)).collect();
        let select_elapsed = time_select_trial(&sbv, &ks);
        select_times.push(args.nloop as f64 / select_elapsed);

        log::debug!("trial {} done", trial);
    }

    println!("rank throughput (median over {} trials): {:.0} ops/s", TRIALS, median(rank_times));
    println!(
        "select throughput (median over {} trials): {:.0} ops/s",
        TRIALS,
        median(select_times)
    );

    Ok(())
}
