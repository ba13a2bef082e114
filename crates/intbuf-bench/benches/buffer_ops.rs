//! Criterion micro-benchmarks for buffer write, growth, scan, and copy-out
//! operations.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use intbuf::IntBuffer;
use intbuf_bench::{dense_buffer, grown_buffer};

/// Benchmark: in-place overwrite of an in-range slot (no reallocation).
fn bench_set_in_place(c: &mut Criterion) {
    c.bench_function("set_in_place", |b| {
        let mut buf = grown_buffer(1024);
        let mut v = 0i32;
        b.iter(|| {
            v = v.wrapping_add(1);
            buf.set(black_box(512), black_box(v));
        });
    });
}

/// Benchmark: a single growth-triggering write on a fresh default buffer.
///
/// Measures the full reallocate-copy-zero-fill path for a 10K-slot jump.
fn bench_growth_10k(c: &mut Criterion) {
    c.bench_function("growth_10k", |b| {
        b.iter(|| {
            let mut buf = IntBuffer::new();
            buf.set(black_box(5_000), 7);
            black_box(buf.len());
        });
    });
}

/// Benchmark: worst-case membership scan — probe value absent from a
/// fully written 10K-slot buffer.
fn bench_contains_miss_10k(c: &mut Criterion) {
    c.bench_function("contains_miss_10k", |b| {
        let buf = dense_buffer(10_000);
        b.iter(|| black_box(buf.contains(black_box(-1))));
    });
}

/// Benchmark: copy-out of a 10K-slot buffer.
fn bench_to_vec_10k(c: &mut Criterion) {
    c.bench_function("to_vec_10k", |b| {
        let buf = dense_buffer(10_000);
        b.iter(|| black_box(buf.to_vec()));
    });
}

criterion_group!(
    benches,
    bench_set_in_place,
    bench_growth_10k,
    bench_contains_miss_10k,
    bench_to_vec_10k
);
criterion_main!(benches);
