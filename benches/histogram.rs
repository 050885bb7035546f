//! Criterion benchmarks for the hourly histogram remap
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use statboard::domain::{fill_hours_data, HourHistogram};

fn bench_fill_hours_data(c: &mut Criterion) {
    let full_day = HourHistogram {
        hours: (0..24).collect(),
        count_messages: (0..24).map(|h| h * 37 + 5).collect(),
    };
    let sparse = HourHistogram {
        hours: vec![3, 9, 14, 22],
        count_messages: vec![12, 90, 41, 7],
    };

    let mut group = c.benchmark_group("fill_hours_data");

    for offset_minutes in [0i64, 480, -330] {
        group.bench_function(BenchmarkId::new("full_day", offset_minutes), |b| {
            b.iter(|| black_box(fill_hours_data(black_box(&full_day), offset_minutes)))
        });
        group.bench_function(BenchmarkId::new("sparse", offset_minutes), |b| {
            b.iter(|| black_box(fill_hours_data(black_box(&sparse), offset_minutes)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_fill_hours_data);
criterion_main!(benches);
