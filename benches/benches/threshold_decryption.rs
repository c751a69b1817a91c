use ark_secp256r1::{Config, Fr};
use ark_std::{
    rand::{rngs::StdRng, SeedableRng},
    UniformRand,
};
use benches::{decrypt_broadcasts, setup_parties, DECRYPT_CTX, KEYGEN_CTX, PARTY_COUNTS};
use blake2::Blake2b512;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use threshold_elgamal::{ciphertext::Ciphertext, encoding::MessageEncoder, keys::JointPublicKey};

fn encoding(c: &mut Criterion) {
    let encoder = MessageEncoder::default();
    c.bench_function("Encode integer", |b| {
        b.iter(|| encoder.encode::<Config>(black_box(123456789)).unwrap())
    });
    let m = encoder.encode::<Config>(123456789).unwrap();
    c.bench_function("Decode integer", |b| {
        b.iter(|| encoder.decode::<Config>(black_box(&m)).unwrap())
    });
}

fn key_aggregation(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0u64);
    let mut group = c.benchmark_group("Verify broadcasts and combine public keys");
    for n in PARTY_COUNTS {
        let (_, broadcasts, _) = setup_parties(&mut rng, n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &broadcasts, |b, broadcasts| {
            b.iter(|| {
                JointPublicKey::combine_verified::<Blake2b512>(black_box(broadcasts), KEYGEN_CTX)
                    .unwrap()
            })
        });
    }
    group.finish();
}

fn encryption(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0u64);
    let (_, _, joint) = setup_parties(&mut rng, 2);
    let m = MessageEncoder::default().encode::<Config>(42).unwrap();
    let (ciphertext, _) = joint.encrypt_random(&mut rng, &m);

    c.bench_function("Encrypt", |b| {
        b.iter(|| joint.encrypt_random(&mut rng, black_box(&m)))
    });
    c.bench_function("Re-randomize", |b| {
        b.iter(|| joint.re_randomize_random(&mut rng, black_box(&ciphertext)))
    });

    let mut group = c.benchmark_group("Weighted combination");
    for n in [4, 16, 64] {
        let ciphertexts = (0..n)
            .map(|_| joint.encrypt_random(&mut rng, &m).0)
            .collect::<Vec<_>>();
        let scalars = (0..n).map(|_| Fr::rand(&mut rng)).collect::<Vec<_>>();
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            b.iter(|| {
                Ciphertext::weighted_combine_slices(black_box(&ciphertexts), black_box(&scalars))
                    .unwrap()
            })
        });
    }
    group.finish();
}

fn decryption(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0u64);
    let m = MessageEncoder::default().encode::<Config>(42).unwrap();

    let (secret_keys, _, joint) = setup_parties(&mut rng, 1);
    let (ciphertext, _) = joint.encrypt_random(&mut rng, &m);
    c.bench_function("Create decryption share", |b| {
        b.iter(|| {
            secret_keys[0]
                .decrypt_share::<_, Blake2b512, _>(&mut rng, black_box(&ciphertext), DECRYPT_CTX)
                .unwrap()
        })
    });

    let mut group = c.benchmark_group("Verifiable decryption");
    for n in PARTY_COUNTS {
        let (secret_keys, broadcasts, joint) = setup_parties(&mut rng, n);
        let (ciphertext, _) = joint.encrypt_random(&mut rng, &m);
        let decrypts = decrypt_broadcasts(&secret_keys, &broadcasts, &ciphertext);
        group.bench_with_input(BenchmarkId::from_parameter(n), &decrypts, |b, decrypts| {
            b.iter(|| {
                ciphertext
                    .verifiable_decrypt::<Blake2b512>(black_box(decrypts), DECRYPT_CTX)
                    .unwrap()
            })
        });
    }
    group.finish();
}

criterion_group!(benches, encoding, key_aggregation, encryption, decryption);
criterion_main!(benches);
