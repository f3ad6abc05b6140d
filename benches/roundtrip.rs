//! benches/roundtrip.rs
//! Throughput of the single-shot path with a raw key (no PBKDF2 stretch).

use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use sealcrypt_rs::{decrypt, encrypt, Key};
use std::hint::black_box;

fn bench_roundtrip(c: &mut Criterion) {
    let key = Key::random().expect("OS RNG");
    let plaintext = vec![0x41u8; 1 << 20];

    let mut group = c.benchmark_group("roundtrip");
    group.throughput(Throughput::Bytes(plaintext.len() as u64));

    group.bench_function("encrypt_1mib", |b| {
        b.iter(|| encrypt(black_box(&plaintext), &key, true).unwrap())
    });

    let ciphertext = encrypt(&plaintext, &key, true).unwrap();
    group.bench_function("decrypt_1mib", |b| {
        b.iter(|| decrypt(black_box(&ciphertext), &key, true).unwrap())
    });

    group.finish();
}

criterion_group!(benches, bench_roundtrip);
criterion_main!(benches);
