//! Benchmarks for line fitting across budgets and line shapes.
//!
//! Run with: cargo bench -p labelfit-text --bench fit_bench
//!
//! Workloads:
//! - **Prose**: space-separated words, the common case (word-mode breaks).
//! - **Unbroken**: one long token, the worst case (character fallback on
//!   every recursion level).
//! - **Cached**: prose re-fit through a measurement cache, simulating a
//!   host that re-wraps the same text on every layout pass.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use labelfit_core::TextStyle;
use labelfit_text::{CellMeasure, Fitter, MeasureCache, TextMeasure, fit_block};
use std::hint::black_box;

const SAMPLE_WORDS: &[&str] = &[
    "the", "quick", "brown", "fox", "jumps", "over", "lazy", "dog", "and", "then", "runs", "back",
    "to", "its", "den", "in", "forest", "while", "birds", "sing",
];

fn prose(word_count: usize) -> String {
    let mut text = String::new();
    for i in 0..word_count {
        if i > 0 {
            text.push(' ');
        }
        text.push_str(SAMPLE_WORDS[i % SAMPLE_WORDS.len()]);
    }
    text
}

fn unbroken(len: usize) -> String {
    "x".repeat(len)
}

fn bench_prose(c: &mut Criterion) {
    let measure = CellMeasure::unit();
    let style = TextStyle::default();
    let mut group = c.benchmark_group("fit/prose");

    for &word_count in &[50usize, 200, 500] {
        let text = prose(word_count);
        for &width in &[20.0f32, 60.0] {
            group.bench_with_input(
                BenchmarkId::new(format!("{word_count}_words"), width as usize),
                &text,
                |b, text| {
                    b.iter(|| {
                        fit_block(black_box(text.as_str()), width, |s| {
                            measure.measure(s, &style).width
                        })
                    });
                },
            );
        }
    }
    group.finish();
}

fn bench_unbroken(c: &mut Criterion) {
    let measure = CellMeasure::unit();
    let style = TextStyle::default();
    let mut group = c.benchmark_group("fit/unbroken");

    for &len in &[64usize, 512, 4096] {
        let text = unbroken(len);
        group.bench_with_input(BenchmarkId::from_parameter(len), &text, |b, text| {
            b.iter(|| {
                fit_block(black_box(text.as_str()), 16.0, |s| {
                    measure.measure(s, &style).width
                })
            });
        });
    }
    group.finish();
}

fn bench_cached_refit(c: &mut Criterion) {
    let style = TextStyle::default();
    let text = prose(200);
    let mut group = c.benchmark_group("fit/cached_refit");

    group.bench_function("uncached", |b| {
        let plain = CellMeasure::unit();
        let fitter = Fitter::new(&plain, style);
        b.iter(|| fitter.fit_block(black_box(text.as_str()), 40.0));
    });

    group.bench_function("cached", |b| {
        let cached = MeasureCache::new(CellMeasure::unit(), 4096);
        let fitter = Fitter::new(&cached, style);
        b.iter(|| fitter.fit_block(black_box(text.as_str()), 40.0));
    });

    group.finish();
}

criterion_group!(benches, bench_prose, bench_unbroken, bench_cached_refit);
criterion_main!(benches);
