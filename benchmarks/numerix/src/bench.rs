//! numerix benchmarks using Criterion.
//!
//! Each group times the native implementation against the recursive
//! baseline in `numerix_benchmarks` on the same inputs.
//!
//! Run with `cargo bench -p numerix-benchmarks`.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use numerix::prelude::*;
use numerix_benchmarks::{
    reference_calculate_discriminant, reference_cfactorial_sum, reference_ifactorial_sum,
};
use std::hint::black_box;

/// Coefficients of x^2 - 3x + 1.
const A: f64 = 1.0;
const B: f64 = -3.0;
const C: f64 = 1.0;

// ============================================================================
// Data Generation
// ============================================================================

/// Digits 1..=9 repeated to `len` characters.
fn digit_string(len: usize) -> String {
    (0..len).map(|i| (b'1' + (i % 9) as u8) as char).collect()
}

/// Integers 1..=20 repeated to `len` values.
fn int_values(len: usize) -> Vec<u64> {
    (0..len).map(|i| (i % 20) as u64 + 1).collect()
}

// ============================================================================
// Benchmarks
// ============================================================================

fn bench_discriminant(c: &mut Criterion) {
    let mut group = c.benchmark_group("discriminant");

    group.bench_function("native", |b| {
        b.iter(|| calculate_discriminant(black_box(A), black_box(B), black_box(C)))
    });
    group.bench_function("reference", |b| {
        b.iter(|| reference_calculate_discriminant(black_box(A), black_box(B), black_box(C)))
    });

    group.finish();
}

fn bench_cfactorial_sum(c: &mut Criterion) {
    let mut group = c.benchmark_group("cfactorial_sum");

    for len in [5usize, 64, 1024] {
        let digits = digit_string(len);
        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(BenchmarkId::new("native", len), &digits, |b, d| {
            b.iter(|| cfactorial_sum(black_box(d)))
        });
        group.bench_with_input(BenchmarkId::new("reference", len), &digits, |b, d| {
            b.iter(|| reference_cfactorial_sum(black_box(d)))
        });
    }

    group.finish();
}

fn bench_ifactorial_sum(c: &mut Criterion) {
    let mut group = c.benchmark_group("ifactorial_sum");

    // 1! + 2! + ... + 20! still fits in u64.
    for len in [5usize, 20] {
        let values = int_values(len);
        let signed: Vec<i64> = values.iter().map(|&v| v as i64).collect();
        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(BenchmarkId::new("native", len), &signed, |b, v| {
            b.iter(|| ifactorial_sum(black_box(v)))
        });
        group.bench_with_input(BenchmarkId::new("reference", len), &values, |b, v| {
            b.iter(|| reference_ifactorial_sum(black_box(v)))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_discriminant,
    bench_cfactorial_sum,
    bench_ifactorial_sum
);
criterion_main!(benches);
