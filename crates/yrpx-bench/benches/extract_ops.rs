//! Criterion micro-benchmarks for replay extraction and cursor reads.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use yrpx_bench::{reference_profile, replay_payload, REFERENCE_SIZE};
use yrpx_replay::CursorBuffer;
use yrpx_test_utils::{consumed_extractor, sample_stream};

/// Benchmark: copy out 48 KiB of unread data.
fn bench_extract_reference(c: &mut Criterion) {
    let extractor = reference_profile(42);

    c.bench_function("extract_reference_48k", |b| {
        b.iter(|| {
            let data = extractor.get_replay_data();
            black_box(&data);
        });
    });
}

/// Benchmark: extraction from a drained buffer (no allocation).
fn bench_extract_exhausted(c: &mut Criterion) {
    let extractor = consumed_extractor(&replay_payload(1024, 1));

    c.bench_function("extract_exhausted", |b| {
        b.iter(|| black_box(extractor.get_replay_data()));
    });
}

/// Benchmark: walk the whole reference stream with u32 reads.
fn bench_read_u32_stream(c: &mut Criterion) {
    let bytes = replay_payload(REFERENCE_SIZE, 3);

    c.bench_function("read_u32_stream_64k", |b| {
        b.iter(|| {
            let mut buf = CursorBuffer::new(bytes.as_slice());
            let mut acc = 0u32;
            while let Ok(v) = buf.read_u32_le() {
                acc = acc.wrapping_add(v);
            }
            black_box(acc);
        });
    });
}

/// Benchmark: decode the sample header (two names, four params).
fn bench_read_sample_header(c: &mut Criterion) {
    let (stream, _) = sample_stream();

    c.bench_function("read_sample_header", |b| {
        b.iter(|| {
            let mut buf = CursorBuffer::new(stream.as_slice());
            let home = buf.read_name().unwrap();
            let away = buf.read_name().unwrap();
            let lp = buf.read_u32_le().unwrap();
            black_box((home, away, lp));
        });
    });
}

criterion_group!(
    benches,
    bench_extract_reference,
    bench_extract_exhausted,
    bench_read_u32_stream,
    bench_read_sample_header
);
criterion_main!(benches);
