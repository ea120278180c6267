//! Primality test benchmarks.
//!
//! Run with: cargo bench -p kexaudit-bignum

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use kexaudit_bignum::{trial_division_precheck, BigUint, PrimalityEngine, WitnessRng};

fn bench_primality(c: &mut Criterion) {
    let mut group = c.benchmark_group("primality");
    group.sample_size(10);

    // 2^bits - 1 - k for a small k is cheap to build and usually composite,
    // so the first Miller-Rabin round dominates.
    for bits in [1024u32, 2048, 3072] {
        let n = (BigUint::from(1u32) << bits) - 159u32;

        group.bench_with_input(BenchmarkId::new("precheck", bits), &n, |b, n| {
            b.iter(|| trial_division_precheck(n));
        });

        group.bench_with_input(BenchmarkId::new("is_prime", bits), &n, |b, n| {
            let mut engine = PrimalityEngine::new(0, WitnessRng::seeded(1));
            b.iter(|| engine.is_prime(bits, n));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_primality);
criterion_main!(benches);
