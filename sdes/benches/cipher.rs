//! Benchmarks for the cipher engine.
//!
//! Measures engine initialization (prime table and S-box parsing), text
//! encryption and decryption throughput per chaining mode, and how the
//! round count scales per-block cost.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use sdes::{Mode, Sdes};

/// Paragraph used consistently across all throughput benchmarks.
const BENCH_MESSAGE: &str = "the magic words are squeamish ossifrage\n\
    a short paragraph of mixed Case text with digits 0123456789\n\
    carried through every chaining mode the engine offers";

const MODES: [Mode; 3] = [Mode::Ecb, Mode::Cbc, Mode::Ofb];

/// Benchmarks `Sdes::new()` initialization time.
///
/// Covers parsing the bundled prime table and both default S-boxes.
fn bench_engine_init(c: &mut Criterion) {
    c.bench_function("engine_init", |b| {
        b.iter(|| {
            black_box(Sdes::new().unwrap());
        });
    });
}

/// Benchmarks encryption throughput for each chaining mode.
fn bench_encrypt(c: &mut Criterion) {
    let sdes = Sdes::new().unwrap();

    let mut group = c.benchmark_group("encrypt_paragraph");
    group.throughput(Throughput::Bytes(BENCH_MESSAGE.len() as u64));

    for mode in MODES {
        group.bench_with_input(BenchmarkId::from_parameter(mode), &mode, |b, &mode| {
            b.iter(|| sdes.encrypt(black_box(BENCH_MESSAGE), mode).unwrap());
        });
    }

    group.finish();
}

/// Benchmarks decryption throughput for each chaining mode.
fn bench_decrypt(c: &mut Criterion) {
    let sdes = Sdes::new().unwrap();

    let mut group = c.benchmark_group("decrypt_paragraph");
    group.throughput(Throughput::Bytes(BENCH_MESSAGE.len() as u64));

    for mode in MODES {
        let ciphertext = sdes.encrypt(BENCH_MESSAGE, mode).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(mode), &mode, |b, &mode| {
            b.iter(|| sdes.decrypt(black_box(&ciphertext), mode).unwrap());
        });
    }

    group.finish();
}

/// Benchmarks ECB encryption across different round counts.
///
/// Shows how the Feistel round count scales per-message cost.
fn bench_round_scaling(c: &mut Criterion) {
    let round_counts: &[usize] = &[2, 4, 8];

    let mut group = c.benchmark_group("encrypt_round_scaling");
    group.throughput(Throughput::Bytes(BENCH_MESSAGE.len() as u64));

    for &rounds in round_counts {
        let mut sdes = Sdes::new().unwrap();
        sdes.config_mut().set_rounds(rounds).unwrap();

        group.bench_with_input(BenchmarkId::from_parameter(rounds), &rounds, |b, _| {
            b.iter(|| sdes.encrypt(black_box(BENCH_MESSAGE), Mode::Ecb).unwrap());
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_engine_init,
    bench_encrypt,
    bench_decrypt,
    bench_round_scaling,
);
criterion_main!(benches);
