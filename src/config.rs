//! Evolver configuration.
//!
//! [`EvolverConfig`] holds every parameter of a run. All parameters are
//! fixed once the evolver is constructed; nothing self-tunes mid-run.

use crate::crossover::Crossover;
use crate::error::{EvolveError, Result};
use crate::gene::GeneSpace;
use crate::replacement::Replacement;
use crate::selection::Selection;

/// Configuration for one evolutionary run.
///
/// # Builder Pattern
///
/// ```
/// use genespace::{Crossover, EvolverConfig, GeneSpace, GeneSpec, Replacement};
///
/// let space = GeneSpace::new(vec![
///     GeneSpec::integer(0, 1),
///     GeneSpec::real(10.5, 75.5),
/// ]);
/// let config = EvolverConfig::new(space)
///     .with_population_size(20)
///     .with_num_parents(4)
///     .with_mutation_rate(0.25)
///     .with_generations(50)
///     .with_crossover(Crossover::TwoPoint)
///     .with_replacement(Replacement::WeakParent { accept_ties: false })
///     .with_seed(42);
///
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct EvolverConfig {
    /// The search space; its length is the chromosome length.
    pub gene_space: GeneSpace,

    /// Individuals in the population. At least 2.
    ///
    /// Under [`Replacement::Append`] this is only the initial size.
    pub population_size: usize,

    /// Parents selected per generation. Even, at least 2, and at most
    /// `population_size`. Each adjacent pair produces two children.
    pub num_parents: usize,

    /// Per-gene mutation probability in `[0, 1]`. A gene mutates when its
    /// unit draw is strictly below this rate.
    pub mutation_rate: f64,

    /// Number of generations to run. At least 1.
    pub generations: usize,

    /// Parent selection strategy.
    pub selection: Selection,

    /// Recombination strategy. Continuous variants require a single-gene
    /// space.
    pub crossover: Crossover,

    /// How children merge back into the population.
    pub replacement: Replacement,

    /// Whether to re-evaluate the population in parallel using rayon.
    ///
    /// Evaluation results are gathered in positional order, so enabling
    /// this does not change any observable result.
    pub parallel: bool,

    /// Random seed for reproducibility. `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl EvolverConfig {
    /// A configuration over `gene_space` with default hyperparameters.
    pub fn new(gene_space: GeneSpace) -> Self {
        Self {
            gene_space,
            population_size: 100,
            num_parents: 20,
            mutation_rate: 0.25,
            generations: 100,
            selection: Selection::default(),
            crossover: Crossover::SinglePoint,
            replacement: Replacement::default(),
            parallel: false,
            seed: None,
        }
    }

    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the number of parents selected per generation.
    pub fn with_num_parents(mut self, n: usize) -> Self {
        self.num_parents = n;
        self
    }

    /// Sets the per-gene mutation rate, clamped to `[0, 1]`.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the number of generations.
    pub fn with_generations(mut self, n: usize) -> Self {
        self.generations = n;
        self
    }

    /// Sets the selection strategy.
    pub fn with_selection(mut self, selection: Selection) -> Self {
        self.selection = selection;
        self
    }

    /// Sets the crossover strategy.
    pub fn with_crossover(mut self, crossover: Crossover) -> Self {
        self.crossover = crossover;
        self
    }

    /// Sets the replacement policy.
    pub fn with_replacement(mut self, replacement: Replacement) -> Self {
        self.replacement = replacement;
        self
    }

    /// Enables or disables parallel population re-evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the random seed for deterministic replay.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Convenience builder for the tournament sample fraction.
    pub fn with_tournament_fraction(self, sample_fraction: f64) -> Self {
        self.with_selection(Selection::Tournament { sample_fraction })
    }

    /// Validates the configuration.
    ///
    /// Every rule is checked here, eagerly — a validated configuration
    /// cannot fail for configuration reasons mid-run.
    pub fn validate(&self) -> Result<()> {
        self.gene_space.validate()?;

        if self.population_size < 2 {
            return Err(EvolveError::Configuration(
                "population_size must be at least 2".into(),
            ));
        }
        if self.num_parents < 2 || self.num_parents % 2 != 0 {
            return Err(EvolveError::Configuration(
                "num_parents must be a positive even number".into(),
            ));
        }
        if self.num_parents > self.population_size {
            return Err(EvolveError::Configuration(format!(
                "num_parents ({}) must not exceed population_size ({})",
                self.num_parents, self.population_size
            )));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(EvolveError::Configuration(
                "mutation_rate must lie in [0, 1]".into(),
            ));
        }
        if self.generations == 0 {
            return Err(EvolveError::Configuration(
                "generations must be at least 1".into(),
            ));
        }

        let Selection::Tournament { sample_fraction } = self.selection;
        if !(sample_fraction > 0.0 && sample_fraction <= 1.0) {
            return Err(EvolveError::Configuration(
                "tournament sample_fraction must lie in (0, 1]".into(),
            ));
        }

        if self.crossover.requires_scalar() && self.gene_space.len() != 1 {
            return Err(EvolveError::Configuration(format!(
                "continuous crossover requires a single-gene space, got {} genes",
                self.gene_space.len()
            )));
        }

        Ok(())
    }
}
