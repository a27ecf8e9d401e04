//! Criterion benchmarks for tinted_logger

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use std::io;
use tinted_logger::core::render::{render_line, MAX_LINE_LEN, MAX_MESSAGE_LEN};
use tinted_logger::prelude::*;
use tinted_logger::info;

fn pinned() -> FixedClock {
    FixedClock(Timestamp::new(12, 34, 56).expect("valid timestamp"))
}

// ============================================================================
// Logger Creation Benchmarks
// ============================================================================

fn bench_logger_creation(c: &mut Criterion) {
    let mut group = c.benchmark_group("logger_creation");
    group.throughput(Throughput::Elements(1));

    group.bench_function("default_style", |b| {
        b.iter(|| {
            let logger = Logger::new(Sink::owned(io::sink()), "bench", StyleRegistry::default());
            black_box(logger)
        });
    });

    group.bench_function("builder", |b| {
        b.iter(|| {
            let logger = Logger::builder()
                .title(black_box("bench"))
                .sink(Sink::owned(io::sink()))
                .color(true)
                .build();
            black_box(logger)
        });
    });

    group.finish();
}

// ============================================================================
// Rendering Benchmarks
// ============================================================================

fn bench_render_line(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_line");
    group.throughput(Throughput::Elements(1));

    let style = StyleRegistry::default();
    let ts = Timestamp::new(1, 2, 3).expect("valid timestamp");
    let mut out: Vec<u8> = Vec::with_capacity(MAX_LINE_LEN);

    for (name, colored) in [("plain", false), ("colored", true)] {
        group.bench_function(name, |b| {
            b.iter(|| {
                out.clear();
                render_line(
                    &mut out,
                    style.get(LogLevel::Warning),
                    "bench",
                    ts,
                    format_args!("request {} took {}ms", black_box(42), black_box(17)),
                    colored,
                )
            });
        });
    }

    group.finish();
}

// ============================================================================
// Logging Performance Benchmarks
// ============================================================================

fn bench_logging(c: &mut Criterion) {
    let mut group = c.benchmark_group("logging");
    group.throughput(Throughput::Elements(1));

    let mut logger = Logger::builder()
        .title("bench")
        .sink(Sink::owned(io::sink()))
        .time_source(pinned())
        .build()
        .expect("logger builds");

    group.bench_function("info", |b| {
        b.iter(|| logger.info(black_box("Info message")));
    });

    group.bench_function("fatal", |b| {
        b.iter(|| logger.fatal(black_box("Fatal message")));
    });

    group.bench_function("formatted", |b| {
        b.iter(|| info!(logger, "User {} logged in from {}", black_box(12345), black_box("10.0.0.1")));
    });

    let oversized = "x".repeat(MAX_MESSAGE_LEN * 8);
    group.bench_function("truncating", |b| {
        b.iter(|| logger.error(black_box(&oversized)));
    });

    group.finish();
}

fn bench_colored_logging(c: &mut Criterion) {
    let mut group = c.benchmark_group("colored_logging");
    group.throughput(Throughput::Elements(1));

    let mut logger = Logger::builder()
        .title("bench")
        .sink(Sink::owned(io::sink()))
        .color(true)
        .time_source(pinned())
        .build()
        .expect("logger builds");

    group.bench_function("warning", |b| {
        b.iter(|| logger.warning(black_box("Colored warning")));
    });

    group.finish();
}

// ============================================================================
// Shared Logger Benchmarks
// ============================================================================

fn bench_sync_logger(c: &mut Criterion) {
    let mut group = c.benchmark_group("sync_logger");
    group.throughput(Throughput::Elements(1));

    let logger = SyncLogger::new(
        Logger::builder()
            .sink(Sink::owned(io::sink()))
            .time_source(pinned())
            .build()
            .expect("logger builds"),
    );

    group.bench_function("uncontended", |b| {
        b.iter(|| logger.info(black_box("Shared message")));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_logger_creation,
    bench_render_line,
    bench_logging,
    bench_colored_logging,
    bench_sync_logger,
);
criterion_main!(benches);
