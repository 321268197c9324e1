use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use dvss_core::{
    field::PrimeField,
    solvency::{prove_solvency, verify_batch, verify_proof, SolvencyProof},
};
use num_bigint::BigUint;

fn scenario_field() -> PrimeField {
    // 2^127 - 1, the reference deployment's prime
    let p: BigUint = "170141183460469231731687303715884105727".parse().unwrap();
    PrimeField::new(p).unwrap()
}

fn bench_prove_and_verify(c: &mut Criterion) {
    let field = scenario_field();
    let amount = BigUint::from(987654321u64);
    let mut rng = rand::thread_rng();

    c.bench_function("prove_solvency", |b| {
        b.iter(|| prove_solvency(&field, &amount, &amount, &mut rng).unwrap())
    });

    let proof = prove_solvency(&field, &amount, &amount, &mut rng).unwrap();
    c.bench_function("verify_proof", |b| {
        b.iter(|| verify_proof(&field, &proof).unwrap())
    });
}

fn bench_verify_batch(c: &mut Criterion) {
    let field = scenario_field();
    let amount = BigUint::from(987654321u64);
    let mut rng = rand::thread_rng();
    let mut group = c.benchmark_group("verify_batch");

    for size in 3..=10 {
        let count = 1 << size;
        let proofs: Vec<SolvencyProof> = (0..count)
            .map(|_| prove_solvency(&field, &amount, &amount, &mut rng).unwrap())
            .collect();

        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, _| {
            b.iter(|| verify_batch(&field, &proofs).unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_prove_and_verify, bench_verify_batch);
criterion_main!(benches);
