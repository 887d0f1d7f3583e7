//! Engine construction and query benchmarks.
//!
//! Run with: `cargo bench --package footprint-bench`

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use footprint_bench::{PageShape, synthetic_log};
use footprint_lib::{EngineConfig, FootprintEngine, OneByte, ResourceCategory};
use std::hint::black_box;

const SIZES: &[usize] = &[50, 500, 5_000];

fn construction_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("construct");

    for &size in SIZES {
        let log = synthetic_log(PageShape::new(size));
        group.throughput(Throughput::Elements(size as u64 + 1));

        group.bench_with_input(BenchmarkId::new("default", size), &log, |b, log| {
            b.iter(|| FootprintEngine::new(black_box(log)));
        });

        let config = EngineConfig::new()
            .with_origin("https://example.com")
            .with_ignore(r"^https://cdn\.example\.net/")
            .with_ignore(r"\.mp4$");
        group.bench_with_input(BenchmarkId::new("ignore", size), &log, |b, log| {
            b.iter(|| {
                FootprintEngine::with_config(black_box(log), config.clone(), OneByte::default())
            });
        });
    }

    group.finish();
}

fn query_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("query");

    for &size in SIZES {
        let log = synthetic_log(PageShape::new(size));
        let engine = FootprintEngine::new(&log);
        group.throughput(Throughput::Elements(size as u64 + 1));

        group.bench_with_input(BenchmarkId::new("total_co2", size), &engine, |b, engine| {
            b.iter(|| black_box(engine.resources().total_co2()));
        });

        group.bench_with_input(BenchmarkId::new("by_category", size), &engine, |b, engine| {
            b.iter(|| black_box(engine.by_category(ResourceCategory::Js).total_bytes()));
        });

        group.bench_with_input(BenchmarkId::new("summary", size), &engine, |b, engine| {
            b.iter(|| black_box(engine.summary()));
        });
    }

    group.finish();
}

criterion_group!(benches, construction_benchmark, query_benchmark);
criterion_main!(benches);
