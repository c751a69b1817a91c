use ark_ec::{AffineRepr, CurveGroup};
use ark_secp256r1::{Affine, Fr, Projective};
use ark_std::{
    rand::{rngs::StdRng, SeedableRng},
    UniformRand,
};
use blake2::Blake2b512;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use sigma_proofs::{
    DiscreteLogEqualityProof, DiscreteLogEqualityStatement, DiscreteLogProof, DiscreteLogStatement,
};

fn discrete_log(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0u64);
    let base = Affine::generator();
    let witness = Fr::rand(&mut rng);
    let statement = DiscreteLogStatement::new(base, (base * witness).into_affine());

    c.bench_function("Generate discrete log proof", |b| {
        b.iter(|| {
            DiscreteLogProof::new::<_, Blake2b512>(
                &mut rng,
                black_box(witness),
                black_box(&statement),
                b"bench",
            )
            .unwrap()
        })
    });

    let proof =
        DiscreteLogProof::new::<_, Blake2b512>(&mut rng, witness, &statement, b"bench").unwrap();
    c.bench_function("Verify discrete log proof", |b| {
        b.iter(|| {
            proof
                .verify::<Blake2b512>(black_box(&statement), b"bench")
                .unwrap()
        })
    });
}

fn discrete_log_equality(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0u64);
    let base1 = Affine::generator();
    let base2 = Projective::rand(&mut rng).into_affine();
    let witness = Fr::rand(&mut rng);
    let statement = DiscreteLogEqualityStatement::new(
        base1,
        (base1 * witness).into_affine(),
        base2,
        (base2 * witness).into_affine(),
    );

    c.bench_function("Generate discrete log equality proof", |b| {
        b.iter(|| {
            DiscreteLogEqualityProof::new::<_, Blake2b512>(
                &mut rng,
                black_box(witness),
                black_box(&statement),
                b"bench",
            )
            .unwrap()
        })
    });

    let proof =
        DiscreteLogEqualityProof::new::<_, Blake2b512>(&mut rng, witness, &statement, b"bench")
            .unwrap();
    c.bench_function("Verify discrete log equality proof", |b| {
        b.iter(|| {
            proof
                .verify::<Blake2b512>(black_box(&statement), b"bench")
                .unwrap()
        })
    });
}

criterion_group!(benches, discrete_log, discrete_log_equality);
criterion_main!(benches);
