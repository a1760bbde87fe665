//! Benchmarks for schedule spawn generation and mutation.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ledger_core::types::{Date, RepeatType};
use ledger_models::schedules::Schedule;
use ledger_models::transactions::Transaction;

fn ymd(year: i32, month: u32, day: u32) -> Date {
    Date::from_ymd(year, month, day).unwrap()
}

fn bench_spawn_generation(c: &mut Criterion) {
    let daily = Schedule::new(
        Transaction::new(ymd(2024, 1, 1), "Coffee", -3.5),
        RepeatType::Daily,
        1,
    )
    .unwrap();
    c.bench_function("spawns_daily_one_year", |b| {
        b.iter(|| black_box(&daily).spawns(ymd(2024, 12, 31)))
    });

    let monthly = Schedule::new(
        Transaction::new(ymd(2024, 1, 31), "Rent", -1200.0),
        RepeatType::Monthly,
        1,
    )
    .unwrap();
    c.bench_function("spawns_monthly_ten_years", |b| {
        b.iter(|| black_box(&monthly).spawns(ymd(2033, 12, 31)))
    });

    let mut edited = monthly.clone();
    for round in [3, 7, 11, 15] {
        let date = RepeatType::Monthly.advance(ymd(2024, 1, 31), round).unwrap();
        edited.delete_at(date).unwrap();
    }
    for round in [5, 13] {
        let date = RepeatType::Monthly.advance(ymd(2024, 1, 31), round).unwrap();
        let shifted = date.checked_add_days(2).unwrap();
        edited
            .add_global_change(date, Transaction::new(shifted, "Rent", -1300.0))
            .unwrap();
    }
    c.bench_function("spawns_monthly_ten_years_with_exceptions", |b| {
        b.iter(|| black_box(&edited).spawns(ymd(2033, 12, 31)))
    });
}

fn bench_mutation(c: &mut Criterion) {
    let base = Schedule::new(
        Transaction::new(ymd(2024, 1, 31), "Rent", -1200.0),
        RepeatType::Monthly,
        1,
    )
    .unwrap();
    c.bench_function("delete_at_with_compaction", |b| {
        b.iter(|| {
            let mut schedule = base.clone();
            for round in 0..24 {
                let date = RepeatType::Monthly.advance(ymd(2024, 1, 31), round).unwrap();
                schedule.delete_at(black_box(date)).unwrap();
            }
            schedule
        })
    });
}

criterion_group!(benches, bench_spawn_generation, bench_mutation);
criterion_main!(benches);
