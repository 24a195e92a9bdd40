#[macro_use]
extern crate criterion;
use criterion::{Criterion, SamplingMode};
use num_bigint::BigUint;
use primal_check::miller_rabin;
use spsp_search::{is_prime, is_strong_probable_prime, scan, scan_with, NoopReporter, ScanConfig};

pub fn bench_sprp(c: &mut Criterion) {
    const N0: u64 = 1_000_000;
    const STEP: usize = 101;
    const N1: u64 = 8_000_000_001; // larger than u32
    const N2: u64 = N1 + N0;

    let numbers = || (3..N0).step_by(STEP).chain((N1..N2).step_by(STEP));

    let mut group = c.benchmark_group("sprp base 2");
    group.bench_function("u64", |b| {
        b.iter(|| {
            numbers()
                .filter(|n| is_strong_probable_prime(n, &2))
                .count()
        })
    });
    group.bench_function("BigUint", |b| {
        b.iter(|| {
            let two = BigUint::from(2u8);
            numbers()
                .map(BigUint::from)
                .filter(|n| is_strong_probable_prime(n, &two))
                .count()
        })
    });
    group.finish();
}

pub fn bench_is_prime(c: &mut Criterion) {
    const N0: u64 = 1_000_000;
    const STEP: usize = 101;
    const N1: u64 = 8_000_000_001;
    const N2: u64 = N1 + N0;

    let numbers = || (3..N0).step_by(STEP).chain((N1..N2).step_by(STEP));

    let mut group = c.benchmark_group("is_prime (u64)");
    group.bench_function("miller test (this crate)", |b| {
        b.iter(|| numbers().filter(|n| is_prime(n, None)).count())
    });
    group.bench_function("primal-check", |b| {
        b.iter(|| numbers().filter(|&n| miller_rabin(n)).count())
    });
    group.finish();
}

pub fn bench_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("scan");
    group.sample_size(10).sampling_mode(SamplingMode::Flat);

    group.bench_function("base 2 below 100000", |b| b.iter(|| scan(2u64, 100_000)));
    group.bench_function("base 2 below 100000 (BigUint)", |b| {
        let config = ScanConfig::new(BigUint::from(2u8), BigUint::from(100_000u32), 10_000)
            .unwrap();
        b.iter(|| scan_with(&config, &mut NoopReporter))
    });
    group.finish();
}

criterion_group!(benches, bench_sprp, bench_is_prime, bench_scan);
criterion_main!(benches);
