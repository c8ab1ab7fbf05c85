//! Criterion benchmarks for the histogram pipeline on a large history.

use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use drawlab_core::chart::{colorize, BallKind, Histogram, RankedHistogram};
use drawlab_core::data::synthetic_history;
use drawlab_core::domain::GameConfig;

fn bench_pipeline(c: &mut Criterion) {
    let game = GameConfig::powerball();
    let end = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
    // ~30 years of twice-weekly draws.
    let history = synthetic_history(&game, 3000, end, 42);
    let start = history.first_date().unwrap();

    c.bench_function("histogram_build_3000_draws", |b| {
        b.iter(|| {
            Histogram::build(
                black_box(&history),
                game.main_domain,
                BallKind::Main,
                start,
                end,
            )
        })
    });

    let histogram = Histogram::build(&history, game.main_domain, BallKind::Main, start, end);

    c.bench_function("rank_69_bins", |b| {
        b.iter(|| RankedHistogram::rank(black_box(&histogram)))
    });

    c.bench_function("colorize_69_bins", |b| {
        b.iter(|| colorize(black_box(histogram.counts())))
    });
}

criterion_group!(benches, bench_pipeline);
criterion_main!(benches);
