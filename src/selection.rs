//! Parent selection.
//!
//! Selection reads the population and returns parent slots; it never
//! mutates anything. Higher fitness always means a better individual.
//!
//! # References
//!
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"
//! - Goldberg & Deb (1991), "A Comparative Analysis of Selection Schemes
//!   Used in Genetic Algorithms"

use crate::individual::Individual;
use crate::random::RandomSource;

/// Tournament samples never shrink below this, regardless of how small
/// `sample_fraction × population` gets — a round must yield two parents.
pub const MIN_TOURNAMENT_SAMPLE: usize = 2;

/// Strategy for choosing parents from the population.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Selection {
    /// Tournament selection: each round draws a sample (with replacement)
    /// sized as a fraction of the current population, ranks it by fitness
    /// descending, and takes the top two as that round's parent pair.
    ///
    /// Larger fractions mean stronger selection pressure. The sample is
    /// clamped to [`MIN_TOURNAMENT_SAMPLE`].
    ///
    /// # Complexity
    /// O(k log k) per round for the sample sort
    Tournament {
        /// Fraction of the population entered per tournament, in `(0, 1]`.
        sample_fraction: f64,
    },
}

impl Default for Selection {
    fn default() -> Self {
        Selection::Tournament {
            sample_fraction: 0.2,
        }
    }
}

impl Selection {
    /// Tournament entrants for a population of `population_len`.
    ///
    /// Recomputed per call so the sample scales when append-mode
    /// replacement grows the population mid-run.
    pub fn sample_size(&self, population_len: usize) -> usize {
        match self {
            Selection::Tournament { sample_fraction } => {
                let scaled = (population_len as f64 * sample_fraction).round() as usize;
                scaled.max(MIN_TOURNAMENT_SAMPLE)
            }
        }
    }

    /// Selects `num_parents` parent slots, two per tournament round, each
    /// round's pair ordered best-first.
    ///
    /// `num_parents` must be even and the population must hold at least
    /// two individuals; both are enforced by
    /// [`EvolverConfig::validate`](crate::EvolverConfig::validate).
    ///
    /// # Panics
    /// Panics if `population` is empty.
    pub fn select_parents(
        &self,
        population: &[Individual],
        num_parents: usize,
        rng: &mut RandomSource,
    ) -> Vec<usize> {
        assert!(
            !population.is_empty(),
            "cannot select from empty population"
        );

        match self {
            Selection::Tournament { .. } => {
                let sample_size = self.sample_size(population.len());
                let mut parents = Vec::with_capacity(num_parents);
                for _ in 0..num_parents / 2 {
                    let (first, second) = tournament(population, sample_size, rng);
                    parents.push(first);
                    parents.push(second);
                }
                parents
            }
        }
    }
}

/// One tournament round: sample `k` slots with replacement, rank the
/// sample by fitness descending, return the top two slots.
fn tournament(
    population: &[Individual],
    k: usize,
    rng: &mut RandomSource,
) -> (usize, usize) {
    let mut entrants: Vec<usize> = (0..k).map(|_| rng.index(population.len())).collect();
    entrants.sort_by(|&a, &b| {
        population[b]
            .fitness
            .partial_cmp(&population[a].fitness)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    (entrants[0], entrants[1])
}
