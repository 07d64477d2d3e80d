//! Benchmarks for tinta operations.
//!
//! Run with: `cargo bench -p tinta-bench`

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};

use tinta_color::{GradientRange, PigmentMixer, color_from_oklch, generate_gradient_stops, get_max_chroma};
use tinta_core::{DisplayColor, OklchColor};
use tinta_icc::{IccDisplayFilter, StandardProfile};
use tinta_lut::PigmentLookupTable;

/// Benchmark gamut boundary search and mapped conversion.
fn bench_gamut(c: &mut Criterion) {
    let mut group = c.benchmark_group("gamut");

    let hues: Vec<f64> = (0..360).map(f64::from).collect();
    group.throughput(Throughput::Elements(hues.len() as u64));

    group.bench_function("max_chroma", |b| {
        b.iter(|| hues.iter().map(|&h| get_max_chroma(black_box(0.7), h)).collect::<Vec<_>>())
    });

    group.bench_function("color_from_oklch_mapped", |b| {
        b.iter(|| {
            hues.iter()
                .map(|&h| color_from_oklch(black_box(0.7), 0.35, h, 1.0))
                .collect::<Vec<_>>()
        })
    });

    group.bench_function("color_from_oklch_in_gamut", |b| {
        b.iter(|| {
            hues.iter()
                .map(|&h| color_from_oklch(black_box(0.7), 0.02, h, 1.0))
                .collect::<Vec<_>>()
        })
    });

    group.finish();
}

/// Benchmark gradient stop generation.
fn bench_gradient(c: &mut Criterion) {
    let mut group = c.benchmark_group("gradient");

    let base = OklchColor::new(0.7, 0.3, 240.0);
    let ranges = [
        ("hue", GradientRange::hue(base)),
        ("lightness", GradientRange::lightness(base)),
    ];

    for steps in [16usize, 256, 4096] {
        group.throughput(Throughput::Elements(steps as u64));
        for (name, range) in &ranges {
            group.bench_with_input(BenchmarkId::new(*name, steps), &steps, |b, &n| {
                b.iter(|| generate_gradient_stops(black_box(range), n))
            });
        }
    }

    group.finish();
}

/// Benchmark pigment mixing on a synthetic table.
fn bench_mix(c: &mut Criterion) {
    let mut group = c.benchmark_group("mix");

    let table = PigmentLookupTable::from_fn(|r, g, b| [(r * 2) as u8, (g * 2) as u8, (b * 2) as u8]);
    let mixer = PigmentMixer::new(table.into());

    let a = DisplayColor::rgb(0, 33, 133);
    let b = DisplayColor::rgb(252, 211, 0);

    group.bench_function("mix_pigments", |bench| {
        bench.iter(|| mixer.mix_pigments(black_box(a), black_box(b), 0.5))
    });

    group.bench_function("mix_many_4", |bench| {
        let palette = [
            (a, 1.0),
            (b, 1.0),
            (DisplayColor::rgb(255, 39, 2), 0.5),
            (DisplayColor::WHITE, 0.25),
        ];
        bench.iter(|| mixer.mix_many(black_box(&palette)))
    });

    group.bench_function("rgb_to_latent", |bench| {
        bench.iter(|| mixer.rgb_to_latent(black_box([0.3, 0.6, 0.9])))
    });

    group.finish();
}

/// Benchmark the ICC soft-proof round trip.
fn bench_icc(c: &mut Criterion) {
    let mut group = c.benchmark_group("icc");

    let Ok(bytes) = StandardProfile::AdobeRgb.to_icc_bytes() else {
        return;
    };
    let mut filter = IccDisplayFilter::new();
    if !filter.initialize(&bytes) {
        return;
    }

    for size in [100usize, 10_000] {
        let colors: Vec<(f64, f64, f64)> = (0..size)
            .map(|i| {
                let t = i as f64 / size as f64;
                (100.0 * t, 200.0 * t - 100.0, 100.0 - 200.0 * t)
            })
            .collect();

        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("transform_lab", size), &colors, |b, v| {
            b.iter(|| v.iter().map(|&(l, a, bb)| filter.transform_lab(l, a, bb)).collect::<Vec<_>>())
        });

        group.bench_with_input(BenchmarkId::new("transform_lab_batch", size), &colors, |b, v| {
            b.iter(|| filter.transform_lab_batch(black_box(v)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_gamut, bench_gradient, bench_mix, bench_icc);
criterion_main!(benches);
