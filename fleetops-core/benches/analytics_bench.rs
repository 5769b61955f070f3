//! Criterion benchmarks for the analytics hot paths.
//!
//! Benchmarks:
//! 1. Trend analysis over long fuel-log histories
//! 2. Aggregate statistics
//! 3. Mission completion against a large working set

use chrono::{Duration, TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use fleetops_core::{
    ActiveMissions, EfficiencySample, Mission, MissionId, MissionStatus, SummaryStats,
    TrendClassifier,
};

// ── Helpers ──────────────────────────────────────────────────────────

fn make_samples(n: usize) -> Vec<EfficiencySample> {
    let base = Utc.with_ymd_and_hms(2020, 1, 2, 8, 0, 0).unwrap();
    (0..n)
        .map(|i| {
            let value = 25.0 + (i as f64 * 0.1).sin() * 4.0;
            EfficiencySample::new(base + Duration::days(i as i64), value)
        })
        .collect()
}

fn make_missions(n: usize) -> Vec<Mission> {
    let base = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    (0..n)
        .map(|i| Mission {
            id: MissionId::new(format!("m-{i}")),
            vehicle_id: None,
            destination: "Bench".into(),
            offer_amount: 100.0,
            estimated_miles: 40.0,
            estimated_profit: 55.0,
            created_at: base - Duration::minutes(i as i64),
            status: MissionStatus::Active,
            actual_miles: None,
            completed_at: None,
        })
        .collect()
}

// ── Benchmarks ───────────────────────────────────────────────────────

fn bench_trend(c: &mut Criterion) {
    let classifier = TrendClassifier::default();
    let mut group = c.benchmark_group("trend_analyze");
    for n in [10, 1_000, 100_000] {
        let samples = make_samples(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &samples, |b, s| {
            b.iter(|| classifier.analyze(black_box(s)))
        });
    }
    group.finish();
}

fn bench_stats(c: &mut Criterion) {
    let values: Vec<f64> = make_samples(100_000).iter().map(|s| s.value).collect();
    c.bench_function("summary_stats_100k", |b| {
        b.iter(|| SummaryStats::compute(black_box(&values)))
    });
}

fn bench_complete(c: &mut Criterion) {
    let snapshot = make_missions(1_000);
    let now = Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap();
    let target = MissionId::new("m-999");
    c.bench_function("complete_last_of_1000", |b| {
        b.iter_batched(
            || ActiveMissions::new(snapshot.clone()),
            |mut set| set.complete(black_box(&target), 42.0, now),
            criterion::BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, bench_trend, bench_stats, bench_complete);
criterion_main!(benches);
