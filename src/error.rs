//! Error types for the evolutionary optimizer.
//!
//! All configuration problems are reported eagerly — before the first
//! generation runs — as [`EvolveError::Configuration`] or
//! [`EvolveError::GeneRange`]. The only mid-run failure mode is a caller's
//! fitness function returning an error, which aborts the run immediately
//! with [`EvolveError::FitnessEvaluation`].

use thiserror::Error;

/// Boxed error returned by a caller-supplied fitness function.
pub type FitnessError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors produced by the optimizer.
#[derive(Debug, Error)]
pub enum EvolveError {
    /// Invalid configuration, detected at construction time.
    #[error("invalid configuration: {0}")]
    Configuration(String),

    /// A gene spec with an inverted range, detected at construction time.
    #[error("gene {index} has an inverted range: min {min} > max {max}")]
    GeneRange { index: usize, min: f64, max: f64 },

    /// The external fitness function failed. Not retried; the run aborts.
    ///
    /// Carries the generation index (0 = initial population) and the
    /// offending chromosome for diagnosis.
    #[error("fitness evaluation failed at generation {generation} for chromosome {chromosome:?}: {source}")]
    FitnessEvaluation {
        generation: usize,
        chromosome: Vec<f64>,
        #[source]
        source: FitnessError,
    },

    /// `run()` was called on an evolver that has already run.
    #[error("run() may only be called once per Evolver instance")]
    AlreadyRun,
}

impl EvolveError {
    pub(crate) fn fitness_evaluation(
        generation: usize,
        chromosome: &[f64],
        source: FitnessError,
    ) -> Self {
        EvolveError::FitnessEvaluation {
            generation,
            chromosome: chromosome.to_vec(),
            source,
        }
    }
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, EvolveError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fitness_error_carries_context() {
        let err = EvolveError::fitness_evaluation(3, &[1.0, 2.0], "boom".into());
        let msg = err.to_string();
        assert!(msg.contains("generation 3"), "message was: {msg}");
        assert!(msg.contains("[1.0, 2.0]"), "message was: {msg}");
    }

    #[test]
    fn test_gene_range_display() {
        let err = EvolveError::GeneRange {
            index: 1,
            min: 5.0,
            max: 2.0,
        };
        assert_eq!(
            err.to_string(),
            "gene 1 has an inverted range: min 5 > max 2"
        );
    }
}
