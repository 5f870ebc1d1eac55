//! Benchmark of the full gold feature pipeline.

use chrono::{NaiveDate, NaiveDateTime, TimeDelta};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use meteo_features::core::TimeFrame;
use meteo_features::pipeline::GoldPipeline;

fn hourly_frame(n: usize, with_gaps: bool) -> TimeFrame {
    let base = NaiveDate::from_ymd_opt(2024, 1, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();
    let timestamps: Vec<NaiveDateTime> =
        (0..n).map(|i| base + TimeDelta::hours(i as i64)).collect();

    let mut temperature: Vec<f64> = (0..n)
        .map(|i| {
            let daily = (2.0 * std::f64::consts::PI * (i % 24) as f64 / 24.0).sin();
            5.0 + 8.0 * daily
        })
        .collect();
    if with_gaps {
        // A short gap and a day-long gap per week of data.
        let mut i = 100;
        while i + 30 < n {
            for v in temperature.iter_mut().skip(i).take(4) {
                *v = f64::NAN;
            }
            for v in temperature.iter_mut().skip(i + 50).take(12) {
                *v = f64::NAN;
            }
            i += 24 * 7;
        }
    }

    let radiation: Vec<f64> = (0..n).map(|i| ((i % 24) as f64 - 12.0).abs() * 40.0).collect();
    TimeFrame::from_columns(
        timestamps,
        vec![
            ("temperature_2m".to_string(), temperature),
            ("shortwave_radiation".to_string(), radiation),
            ("cloud_cover".to_string(), vec![50.0; n]),
            ("precipitation".to_string(), vec![0.0; n]),
        ],
    )
    .unwrap()
}

fn bench_pipeline(c: &mut Criterion) {
    let pipeline = GoldPipeline::default();
    let mut group = c.benchmark_group("gold_pipeline");

    for &hours in &[24 * 30, 24 * 365] {
        let clean = hourly_frame(hours, false);
        group.bench_with_input(BenchmarkId::new("clean", hours), &clean, |b, frame| {
            b.iter(|| pipeline.run(black_box(frame.clone())).unwrap());
        });

        let gappy = hourly_frame(hours, true);
        group.bench_with_input(BenchmarkId::new("with_gaps", hours), &gappy, |b, frame| {
            b.iter(|| pipeline.run(black_box(frame.clone())).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_pipeline);
criterion_main!(benches);
