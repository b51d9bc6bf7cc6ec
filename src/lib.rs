//! Generic evolutionary optimizer over bounded gene spaces.
//!
//! Given a search space — an ordered sequence of integer/real gene specs,
//! each with an inclusive legal range — and a caller-supplied scoring
//! function, the [`Evolver`] evolves a population of candidate solutions
//! over discrete generations toward **higher** scores.
//!
//! The evolutionary mechanics are generic and pluggable:
//!
//! - **Selection**: tournament over a fraction-sized sample ([`Selection`])
//! - **Crossover**: index single/two-point splices, plus continuous
//!   variants for scalar spaces ([`Crossover`])
//! - **Mutation**: bounded per-gene perturbation that can never leave a
//!   gene's legal range ([`mutation`])
//! - **Replacement**: overwrite-both-parents, overwrite-random-slot,
//!   elitist weak-parent, or append-only ([`Replacement`])
//!
//! Scoring stays outside the core: the [`FitnessFunction`] boundary takes
//! a chromosome and returns a score, nothing more. Coverage evaluators,
//! propagation models, plotting — all of that lives with the caller.
//!
//! # Reproducibility
//!
//! Every stochastic step draws from one seedable [`RandomSource`] per
//! run. Two runs with the same seed, configuration, and fitness function
//! produce identical populations and traces at every generation.
//!
//! # Example
//!
//! ```
//! use genespace::{Evolver, EvolverConfig, FitnessError, GeneSpace, GeneSpec};
//!
//! fn gene_sum(chromosome: &[f64]) -> Result<f64, FitnessError> {
//!     Ok(chromosome.iter().sum())
//! }
//!
//! let space = GeneSpace::new(vec![
//!     GeneSpec::integer(0, 1),
//!     GeneSpec::integer(-5, 10),
//!     GeneSpec::real(10.5, 75.5),
//! ]);
//! let config = EvolverConfig::new(space)
//!     .with_population_size(10)
//!     .with_num_parents(2)
//!     .with_mutation_rate(0.25)
//!     .with_generations(10)
//!     .with_seed(42);
//!
//! let mut evolver = Evolver::new(config, gene_sum)?;
//! let result = evolver.run()?;
//! println!("best: {:?}", result.best);
//! # Ok::<(), genespace::EvolveError>(())
//! ```
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and
//!   Machine Learning*
//! - De Jong (2006), *Evolutionary Computation: A Unified Approach*

pub mod config;
pub mod crossover;
pub mod error;
pub mod evolver;
pub mod fitness;
pub mod gene;
pub mod individual;
pub mod mutation;
pub mod random;
pub mod replacement;
pub mod selection;

pub use config::EvolverConfig;
pub use crossover::Crossover;
pub use error::{EvolveError, FitnessError, Result};
pub use evolver::{Evolver, GenerationRecord, ProgressHook, RunResult, RunState};
pub use fitness::FitnessFunction;
pub use gene::{GeneKind, GeneSpace, GeneSpec};
pub use individual::{Individual, Offspring};
pub use random::RandomSource;
pub use replacement::Replacement;
pub use selection::Selection;
