use criterion::{criterion_group, criterion_main, Criterion};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

use camellia_core::{derive_subkeys, encrypt_block, CamelliaKey};
use camellia_modes::{encrypt_cbc, encrypt_ecb};

fn bench_schedule(c: &mut Criterion) {
    let mut group = c.benchmark_group("schedule");
    group.bench_function("derive_subkeys_128", |b| {
        b.iter(|| derive_subkeys(&CamelliaKey::from([1u8; 16])));
    });
    group.bench_function("derive_subkeys_256", |b| {
        b.iter(|| derive_subkeys(&CamelliaKey::from([1u8; 32])));
    });
    group.finish();
}

fn bench_transform(c: &mut Criterion) {
    let subkeys = derive_subkeys(&CamelliaKey::from([2u8; 16]));
    let mut rng = ChaCha20Rng::from_seed([3u8; 32]);
    let mut block = [0u8; 16];
    rng.fill_bytes(&mut block);

    let mut group = c.benchmark_group("transform");
    group.bench_function("encrypt_block", |b| {
        b.iter(|| encrypt_block(&block, &subkeys));
    });
    group.finish();
}

fn bench_modes(c: &mut Criterion) {
    let subkeys = derive_subkeys(&CamelliaKey::from([4u8; 32]));
    let mut rng = ChaCha20Rng::from_seed([5u8; 32]);
    let mut data = vec![0u8; 16 * 1024];
    rng.fill_bytes(&mut data);

    let mut group = c.benchmark_group("modes");
    group.sample_size(50);
    group.bench_function("encrypt_ecb_16k", |b| {
        b.iter(|| {
            let mut buffer = data.clone();
            encrypt_ecb(&subkeys, &mut buffer).unwrap();
        });
    });
    group.bench_function("encrypt_cbc_16k", |b| {
        b.iter(|| {
            let mut buffer = data.clone();
            let mut iv = [0u8; 16];
            encrypt_cbc(&subkeys, &mut buffer, &mut iv).unwrap();
        });
    });
    group.finish();
}

criterion_group!(benches, bench_schedule, bench_transform, bench_modes);
criterion_main!(benches);
