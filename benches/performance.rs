// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Performance benchmarks for chordgen
//!
//! Run with: cargo bench
//!
//! These benchmarks measure:
//! - Progression generation at several lengths
//! - Roman-numeral analysis
//! - The full compose pipeline including retries
//! - MIDI encoding

use chordgen::analysis::analyze_progression;
use chordgen::export::{progression_to_midi, ExportSettings};
use chordgen::{compose, generate, GeneratorParams, Progression};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn sample_progression(bars: usize) -> Progression {
    let params = GeneratorParams {
        num_bars: bars,
        ..Default::default()
    };
    let mut rng = StdRng::seed_from_u64(1);
    loop {
        if let Ok(progression) = generate(&params, &mut rng) {
            return progression;
        }
    }
}

/// Benchmark raw generation (failed draws included)
fn bench_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");

    for bars in [4usize, 16, 64] {
        let params = GeneratorParams {
            num_bars: bars,
            ..Default::default()
        };
        group.bench_with_input(BenchmarkId::from_parameter(bars), &params, |b, params| {
            let mut rng = StdRng::seed_from_u64(42);
            b.iter(|| black_box(generate(black_box(params), &mut rng).ok()))
        });
    }

    group.finish();
}

/// Benchmark analysis of a fixed progression
fn bench_analysis(c: &mut Criterion) {
    let progression = sample_progression(16);
    c.bench_function("analyze_16_bars", |b| {
        b.iter(|| black_box(analyze_progression(black_box(&progression)).ok()))
    });
}

/// Benchmark the retrying compose pipeline
fn bench_compose(c: &mut Criterion) {
    let mut group = c.benchmark_group("compose");

    for randomness in [0.0, 50.0, 100.0] {
        let params = GeneratorParams::from_randomness(randomness);
        group.bench_with_input(
            BenchmarkId::from_parameter(randomness as u32),
            &params,
            |b, params| {
                let mut rng = StdRng::seed_from_u64(7);
                b.iter(|| black_box(compose(black_box(params), 64, &mut rng).ok()))
            },
        );
    }

    group.finish();
}

/// Benchmark MIDI encoding
fn bench_midi_export(c: &mut Criterion) {
    let progression = sample_progression(16);
    let settings = ExportSettings::default();
    c.bench_function("midi_16_bars", |b| {
        b.iter(|| black_box(progression_to_midi(black_box(progression.chords()), &settings)))
    });
}

criterion_group!(
    benches,
    bench_generation,
    bench_analysis,
    bench_compose,
    bench_midi_export
);
criterion_main!(benches);
