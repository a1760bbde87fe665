//! Criterion benchmarks for the calendar stepping engine.
//!
//! Measures single-step advancement for every repeat pattern and the
//! skip-probing path across months missing a 5th weekday occurrence.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use ledger_core::types::{Date, RepeatType};

fn ymd(year: i32, month: u32, day: u32) -> Date {
    Date::from_ymd(year, month, day).unwrap()
}

/// Benchmark a single advance per pattern from a month-end anchor.
fn bench_advance(c: &mut Criterion) {
    let mut group = c.benchmark_group("advance");
    let anchor = ymd(2024, 1, 31);

    for repeat in RepeatType::ALL {
        group.bench_with_input(
            BenchmarkId::from_parameter(repeat.name()),
            &repeat,
            |b, repeat| {
                b.iter(|| repeat.advance(black_box(anchor), black_box(12)));
            },
        );
    }
    group.finish();
}

/// Benchmark skip probing from a 5th-weekday anchor, where the first
/// targets fail and the probe loop has to work.
fn bench_advance_skipping(c: &mut Criterion) {
    // Oct 29 2024 is a 5th Tuesday; the next month with one is December.
    let fifth_tuesday = ymd(2024, 10, 29);
    c.bench_function("advance_skipping_fifth_weekday", |b| {
        b.iter(|| {
            RepeatType::Weekday
                .advance_skipping(black_box(fifth_tuesday), black_box(1))
                .unwrap()
        })
    });

    let month_end = ymd(2024, 1, 31);
    c.bench_function("advance_skipping_passthrough", |b| {
        b.iter(|| {
            RepeatType::Monthly
                .advance_skipping(black_box(month_end), black_box(1))
                .unwrap()
        })
    });
}

criterion_group!(benches, bench_advance, bench_advance_skipping);
criterion_main!(benches);
