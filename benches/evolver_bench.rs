//! Criterion benchmarks for the genespace evolver.
//!
//! Uses synthetic fitness landscapes (gene-sum maximization and the
//! six-hump camelback function) to measure pure engine overhead
//! independent of any domain scoring.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use genespace::{
    Evolver, EvolverConfig, FitnessError, GeneSpace, GeneSpec, Replacement,
};

fn gene_sum(chromosome: &[f64]) -> Result<f64, FitnessError> {
    Ok(chromosome.iter().sum())
}

/// Six-hump camelback, negated so higher is better. Two global optima at
/// (±0.0898, ∓0.7126) with value ≈ 1.0316.
fn camelback(chromosome: &[f64]) -> Result<f64, FitnessError> {
    let (x, y) = (chromosome[0], chromosome[1]);
    let value = (4.0 - 2.1 * x.powi(2) + x.powi(4) / 3.0) * x.powi(2)
        + x * y
        + (-4.0 + 4.0 * y.powi(2)) * y.powi(2);
    Ok(-value)
}

fn sum_space(genes: usize) -> GeneSpace {
    GeneSpace::new((0..genes).map(|_| GeneSpec::integer(-10, 10)).collect())
}

fn bench_gene_sum(c: &mut Criterion) {
    let mut group = c.benchmark_group("evolver/gene_sum");

    for genes in [8, 32] {
        group.bench_with_input(BenchmarkId::from_parameter(genes), &genes, |b, &genes| {
            b.iter(|| {
                let config = EvolverConfig::new(sum_space(genes))
                    .with_population_size(50)
                    .with_num_parents(10)
                    .with_generations(30)
                    .with_seed(42);
                let mut evolver = Evolver::new(config, gene_sum).unwrap();
                black_box(evolver.run().unwrap())
            });
        });
    }
    group.finish();
}

fn bench_camelback(c: &mut Criterion) {
    let space = GeneSpace::new(vec![GeneSpec::real(-3.0, 3.0), GeneSpec::real(-2.0, 2.0)]);

    let mut group = c.benchmark_group("evolver/camelback");
    for replacement in [
        Replacement::BothParents,
        Replacement::WeakParent { accept_ties: false },
    ] {
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{replacement:?}")),
            &replacement,
            |b, &replacement| {
                b.iter(|| {
                    let config = EvolverConfig::new(space.clone())
                        .with_population_size(50)
                        .with_num_parents(10)
                        .with_generations(50)
                        .with_replacement(replacement)
                        .with_seed(42);
                    let mut evolver = Evolver::new(config, camelback).unwrap();
                    black_box(evolver.run().unwrap())
                });
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_gene_sum, bench_camelback);
criterion_main!(benches);
