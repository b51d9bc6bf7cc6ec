//! The fitness-function boundary.
//!
//! Scoring is a black-box collaborator: the evolver calls it, it never
//! participates in the evolutionary mechanics. Failures are a caller
//! contract violation and abort the run (see
//! [`EvolveError::FitnessEvaluation`](crate::EvolveError::FitnessEvaluation)).

use crate::error::FitnessError;

/// A caller-supplied scoring function over chromosomes.
///
/// Higher scores are better. Must be `Send + Sync` because the evolver
/// may re-evaluate the population in parallel.
///
/// Implemented for any matching closure or fn, so most callers never
/// implement it by hand:
///
/// ```
/// use genespace::{FitnessError, FitnessFunction};
///
/// fn gene_sum(chromosome: &[f64]) -> Result<f64, FitnessError> {
///     Ok(chromosome.iter().sum())
/// }
///
/// assert_eq!(gene_sum.evaluate(&[1.0, 2.0]).unwrap(), 3.0);
/// ```
pub trait FitnessFunction: Send + Sync {
    /// Scores one chromosome. Errors propagate out of the run untouched.
    fn evaluate(&self, chromosome: &[f64]) -> std::result::Result<f64, FitnessError>;
}

impl<F> FitnessFunction for F
where
    F: Fn(&[f64]) -> std::result::Result<f64, FitnessError> + Send + Sync,
{
    fn evaluate(&self, chromosome: &[f64]) -> std::result::Result<f64, FitnessError> {
        self(chromosome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closure_implements_fitness_function() {
        let f = |chromosome: &[f64]| -> std::result::Result<f64, FitnessError> {
            Ok(-chromosome[0].abs())
        };
        assert_eq!(f.evaluate(&[-3.0]).unwrap(), -3.0);
    }

    #[test]
    fn test_errors_pass_through() {
        let f = |_: &[f64]| -> std::result::Result<f64, FitnessError> {
            Err("scoring model not loaded".into())
        };
        let err = f.evaluate(&[0.0]).unwrap_err();
        assert_eq!(err.to_string(), "scoring model not loaded");
    }
}
