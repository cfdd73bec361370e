//! Criterion benchmarks for the divisor/step search.
//!
//! Run: cargo bench -p synthesis --bench search
//!
//! Results show:
//!   candidates/*      - cost of building the 8-entry candidate table
//!   search/*          - full model search including the port latch
//!   keypad_sweep      - 1 Hz sweep over the audio band, as typed from the keypad

#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,                     // criterion_group! macro generates undocumented items
)]

use std::hint::black_box;
use std::time::Duration;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use platform::MockToneGenerator;
use platform::config::DEFAULT_REFERENCE_HZ;
use synthesis::solver::candidates;
use synthesis::{FrequencySynthesisModel, MatchPolicy};

const TARGETS: [f64; 4] = [15.0, 1_000.0, 440_000.0, 8_000_000.0];

// ---------------------------------------------------------------------------
// Benchmarks
// ---------------------------------------------------------------------------

fn bench_candidates(c: &mut Criterion) {
    let mut group = c.benchmark_group("candidates");
    for target in TARGETS {
        group.bench_with_input(BenchmarkId::from_parameter(target), &target, |b, &t| {
            b.iter(|| candidates(black_box(DEFAULT_REFERENCE_HZ), black_box(t)));
        });
    }
    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");
    for policy in [MatchPolicy::WithinTolerance, MatchPolicy::BestApproximation] {
        let mut model = FrequencySynthesisModel::new(DEFAULT_REFERENCE_HZ, MockToneGenerator::new());
        group.bench_function(policy.as_str(), |b| {
            b.iter(|| {
                // Mock call log is bounded; keep it from saturating.
                model.port_mut().clear_calls();
                model.search_with_policy(black_box(1_000.0), policy)
            });
        });
    }
    group.finish();
}

fn bench_keypad_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("keypad_sweep");
    group.measurement_time(Duration::from_secs(10));
    group.bench_function("20Hz_to_20kHz", |b| {
        let mut model = FrequencySynthesisModel::new(DEFAULT_REFERENCE_HZ, MockToneGenerator::new());
        b.iter(|| {
            for hz in 20..20_000u32 {
                model.port_mut().clear_calls();
                black_box(model.search_best_frequency(f64::from(hz)));
            }
        });
    });
    group.finish();
}

criterion_group!(benches, bench_candidates, bench_search, bench_keypad_sweep);
criterion_main!(benches);
