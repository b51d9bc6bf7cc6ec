//! The generational control loop.
//!
//! [`Evolver`] owns one run: the population, the random source, and the
//! generation trace. Each generation performs, strictly in order:
//! selection → crossover → mutation → child evaluation → replacement →
//! full-population re-evaluation → trace record. Every individual is
//! re-scored every generation, including those untouched this round —
//! simple but correct, and the re-evaluation step is the one phase that
//! may run in parallel (results are gathered positionally, so the
//! observable outcome is identical).

use crate::config::EvolverConfig;
use crate::error::{EvolveError, Result};
use crate::fitness::FitnessFunction;
use crate::individual::{Individual, Offspring};
use crate::mutation;
use crate::random::RandomSource;
use rayon::prelude::*;

/// Progress callback invoked after each generation completes.
pub type ProgressHook = Box<dyn Fn(&GenerationRecord) + Send>;

/// Lifecycle of an [`Evolver`]. `run()` moves `Initialized → Running →
/// Complete` exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Initialized,
    Running,
    Complete,
}

/// One entry of the per-generation fitness trace.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GenerationRecord {
    /// Generation index, numbered from 1.
    pub generation: usize,
    /// Maximum fitness in the population after this generation.
    pub best_fitness: f64,
}

/// Result of a completed run.
#[derive(Debug, Clone)]
pub struct RunResult {
    /// The fittest individual (first element of `population`).
    pub best: Individual,
    /// Final population, sorted descending by fitness; ties keep their
    /// pre-sort slot order.
    pub population: Vec<Individual>,
    /// Best fitness per generation, for external reporting.
    pub trace: Vec<GenerationRecord>,
}

/// Executes the evolutionary loop over a caller-supplied fitness function.
///
/// The population is owned exclusively by this instance; independent runs
/// in one process never share state.
///
/// # Examples
///
/// ```
/// use genespace::{Evolver, EvolverConfig, FitnessError, GeneSpace, GeneSpec};
///
/// fn gene_sum(chromosome: &[f64]) -> Result<f64, FitnessError> {
///     Ok(chromosome.iter().sum())
/// }
///
/// let space = GeneSpace::new(vec![GeneSpec::integer(0, 1), GeneSpec::real(0.0, 1.0)]);
/// let config = EvolverConfig::new(space)
///     .with_population_size(10)
///     .with_num_parents(2)
///     .with_generations(5)
///     .with_seed(7);
///
/// let mut evolver = Evolver::new(config, gene_sum)?;
/// let result = evolver.run()?;
///
/// assert_eq!(result.trace.len(), 5);
/// assert!(result.population.iter().all(|ind| result.best.fitness >= ind.fitness));
/// # Ok::<(), genespace::EvolveError>(())
/// ```
pub struct Evolver<F: FitnessFunction> {
    config: EvolverConfig,
    fitness: F,
    population: Vec<Individual>,
    rng: RandomSource,
    state: RunState,
    trace: Vec<GenerationRecord>,
    next_id: u64,
    progress_hook: Option<ProgressHook>,
}

impl<F: FitnessFunction> Evolver<F> {
    /// Validates `config`, initializes the population, and evaluates it.
    ///
    /// Configuration problems surface here as
    /// [`EvolveError::Configuration`] / [`EvolveError::GeneRange`] —
    /// never mid-run. A fitness failure on the initial population is
    /// reported as generation 0.
    pub fn new(config: EvolverConfig, fitness: F) -> Result<Self> {
        config.validate()?;

        let mut rng = match config.seed {
            Some(seed) => RandomSource::from_seed(seed),
            None => RandomSource::from_entropy(),
        };

        let population: Vec<Individual> = (0..config.population_size)
            .map(|slot| Individual::unevaluated(slot as u64, config.gene_space.sample(&mut rng)))
            .collect();

        let mut evolver = Self {
            next_id: population.len() as u64,
            population,
            config,
            fitness,
            rng,
            state: RunState::Initialized,
            trace: Vec::new(),
            progress_hook: None,
        };
        evolver.evaluate_population(0)?;
        Ok(evolver)
    }

    /// Attaches a callback invoked with each generation's trace record.
    ///
    /// The core makes no assumption about what, if anything, is attached.
    pub fn set_progress_hook(&mut self, hook: impl Fn(&GenerationRecord) + Send + 'static) {
        self.progress_hook = Some(Box::new(hook));
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    /// Current population, in slot order until `run()` sorts it.
    pub fn population(&self) -> &[Individual] {
        &self.population
    }

    /// Per-generation trace recorded so far.
    pub fn trace(&self) -> &[GenerationRecord] {
        &self.trace
    }

    /// Runs all configured generations and returns the sorted result.
    ///
    /// May be called once per instance; later calls return
    /// [`EvolveError::AlreadyRun`]. A fitness-function failure aborts the
    /// run immediately — no generation is retried.
    pub fn run(&mut self) -> Result<RunResult> {
        if self.state != RunState::Initialized {
            return Err(EvolveError::AlreadyRun);
        }
        self.state = RunState::Running;

        for generation in 1..=self.config.generations {
            self.step(generation)?;
        }

        // Stable sort: equal fitness keeps original slot order.
        self.population.sort_by(|a, b| {
            b.fitness
                .partial_cmp(&a.fitness)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        self.state = RunState::Complete;

        Ok(RunResult {
            best: self.population[0].clone(),
            population: self.population.clone(),
            trace: self.trace.clone(),
        })
    }

    /// One full generation.
    fn step(&mut self, generation: usize) -> Result<()> {
        // Selection: parent slots, paired adjacently.
        let parent_slots =
            self.config
                .selection
                .select_parents(&self.population, self.config.num_parents, &mut self.rng);

        // Crossover: each adjacent pair yields two children, each child
        // carrying the slot of the parent it pairs back to.
        let mut offspring = Vec::with_capacity(parent_slots.len());
        for pair in parent_slots.chunks_exact(2) {
            let (slot_a, slot_b) = (pair[0], pair[1]);
            let (genes_a, genes_b) = self.config.crossover.recombine(
                &self.population[slot_a].chromosome,
                &self.population[slot_b].chromosome,
                &mut self.rng,
            );
            offspring.push(Offspring {
                source_slot: slot_a,
                individual: Individual::unevaluated(self.allocate_id(), genes_a),
            });
            offspring.push(Offspring {
                source_slot: slot_b,
                individual: Individual::unevaluated(self.allocate_id(), genes_b),
            });
        }

        // Mutation, then one evaluation per child so replacement compares
        // fresh values.
        for child in &mut offspring {
            let mutated = mutation::mutate(
                &child.individual.chromosome,
                &self.config.gene_space,
                self.config.mutation_rate,
                &mut self.rng,
            );
            child.individual.chromosome = mutated;
        }
        for child in &mut offspring {
            child.individual.fitness = self
                .fitness
                .evaluate(&child.individual.chromosome)
                .map_err(|source| {
                    EvolveError::fitness_evaluation(
                        generation,
                        &child.individual.chromosome,
                        source,
                    )
                })?;
        }

        self.config
            .replacement
            .apply(&mut self.population, offspring, &mut self.rng);

        // Re-score everyone, replaced or not.
        self.evaluate_population(generation)?;

        let best_fitness = self
            .population
            .iter()
            .map(|ind| ind.fitness)
            .fold(f64::NEG_INFINITY, f64::max);
        let record = GenerationRecord {
            generation,
            best_fitness,
        };
        log::debug!(
            "generation {}: best fitness {} (population {})",
            record.generation,
            record.best_fitness,
            self.population.len()
        );
        if let Some(hook) = &self.progress_hook {
            hook(&record);
        }
        self.trace.push(record);
        Ok(())
    }

    /// Re-evaluates every individual, serially or via rayon. Scores are
    /// written back in positional order either way.
    fn evaluate_population(&mut self, generation: usize) -> Result<()> {
        let Self {
            config,
            fitness,
            population,
            ..
        } = self;

        if config.parallel {
            let scores = population
                .par_iter()
                .map(|ind| {
                    fitness.evaluate(&ind.chromosome).map_err(|source| {
                        EvolveError::fitness_evaluation(generation, &ind.chromosome, source)
                    })
                })
                .collect::<Result<Vec<f64>>>()?;
            for (ind, score) in population.iter_mut().zip(scores) {
                ind.fitness = score;
            }
        } else {
            for ind in population.iter_mut() {
                ind.fitness = fitness.evaluate(&ind.chromosome).map_err(|source| {
                    EvolveError::fitness_evaluation(generation, &ind.chromosome, source)
                })?;
            }
        }
        Ok(())
    }

    fn allocate_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

// ============================================================================
// Tests
// ============================================================================
