//! Bounded per-gene mutation.
//!
//! Each gene position decides independently whether to mutate, then
//! perturbs by a small delta, redrawing until the result lands back in
//! the gene's legal range. Mutation never calls the fitness function and
//! never shares state with its input chromosome.

use crate::gene::{GeneKind, GeneSpace};
use crate::random::RandomSource;

/// Returns a mutated copy of `chromosome`.
///
/// Trigger polarity, fixed crate-wide: a gene mutates when its unit draw
/// is **strictly below** `mutation_rate`, so rate 0.0 never mutates and
/// rate 1.0 always does.
///
/// One unit draw is taken per gene position regardless of outcome, so the
/// shape of the random stream does not depend on the rate. Selected
/// integer genes retry `value + uniform_int(-1, 1)` and real genes retry
/// `value + uniform_real(-1, 1)` until the candidate is in range; the
/// retry base is always the original value. Degenerate ranges
/// (`min == max`) skip resampling entirely — the only legal value
/// already holds.
///
/// Termination is guaranteed: integer deltas include 0, and for a real
/// range with `min < max` each draw lands in range with positive
/// probability.
pub fn mutate(
    chromosome: &[f64],
    gene_space: &GeneSpace,
    mutation_rate: f64,
    rng: &mut RandomSource,
) -> Vec<f64> {
    chromosome
        .iter()
        .zip(gene_space.specs())
        .map(|(&value, spec)| {
            if rng.unit() >= mutation_rate {
                return value;
            }
            if spec.is_degenerate() {
                return value;
            }
            loop {
                let candidate = match spec.kind {
                    GeneKind::Integer => value + rng.uniform_int(-1, 1) as f64,
                    GeneKind::Real => value + rng.uniform_real(-1.0, 1.0),
                };
                if spec.contains(candidate) {
                    return candidate;
                }
            }
        })
        .collect()
}
