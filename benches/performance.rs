//! Performance benchmarks for the UDP trace analyzer
//!
//! These benchmarks measure the metric kernels and the directional split
//! on synthetic captures of realistic sizes.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use udp_trace_analyzer::{
    config::Endpoints,
    stats::{delay_series_ms, jitter_series_ms, TraceMetrics},
    trace::{split_directions, Trace, TraceRecord},
};

/// Synthetic monotonic time series at a nominal 4 ms period
fn sample_times(count: usize, offset: f64) -> Vec<f64> {
    (0..count)
        .map(|i| i as f64 * 0.004 + offset + (i % 7) as f64 * 0.0001)
        .collect()
}

/// Synthetic bidirectional capture alternating status and command frames
fn sample_trace(pairs: usize) -> Trace {
    let mut records = Vec::with_capacity(pairs * 2);
    for i in 0..pairs {
        let t = i as f64 * 0.004;
        records.push(TraceRecord {
            time: t,
            source: "192.168.38.1".to_string(),
            destination: "192.168.38.11".to_string(),
        });
        records.push(TraceRecord {
            time: t + 0.0002,
            source: "192.168.38.11".to_string(),
            destination: "192.168.38.1".to_string(),
        });
    }

    Trace {
        name: "bench".to_string(),
        records,
    }
}

fn bench_jitter(c: &mut Criterion) {
    let mut group = c.benchmark_group("jitter_series_ms");
    for size in [1_000, 10_000, 100_000] {
        let times = sample_times(size, 0.0);
        group.bench_with_input(BenchmarkId::from_parameter(size), &times, |b, times| {
            b.iter(|| jitter_series_ms(black_box(times)))
        });
    }
    group.finish();
}

fn bench_delay(c: &mut Criterion) {
    let mut group = c.benchmark_group("delay_series_ms");
    for size in [1_000, 10_000, 100_000] {
        let status = sample_times(size, 0.0);
        let command = sample_times(size, 0.0002);
        group.bench_with_input(
            BenchmarkId::from_parameter(size),
            &(status, command),
            |b, (status, command)| b.iter(|| delay_series_ms(black_box(status), black_box(command))),
        );
    }
    group.finish();
}

fn bench_metrics(c: &mut Criterion) {
    let status = sample_times(50_000, 0.0);
    let command = sample_times(45_000, 0.0002);

    c.bench_function("trace_metrics_compute", |b| {
        b.iter(|| TraceMetrics::compute(black_box(&status), black_box(&command)))
    });
}

fn bench_split(c: &mut Criterion) {
    let trace = sample_trace(25_000);
    let endpoints = Endpoints::default();

    c.bench_function("split_directions_50k", |b| {
        b.iter(|| split_directions(black_box(&trace), black_box(&endpoints)))
    });
}

criterion_group!(benches, bench_jitter, bench_delay, bench_metrics, bench_split);
criterion_main!(benches);
