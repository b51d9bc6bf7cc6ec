//! Gene specs and gene spaces.
//!
//! A [`GeneSpec`] describes one chromosome position: integer or real,
//! with an inclusive `[min, max]` range. A [`GeneSpace`] is an ordered
//! sequence of specs; its length defines the chromosome length for a run.
//!
//! Both are plain data and immutable once a run starts. Genes are stored
//! as `f64` throughout; integer genes hold whole-numbered values.

use crate::error::{EvolveError, Result};
use crate::random::RandomSource;

/// The type of a single gene position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GeneKind {
    /// Whole-numbered values, sampled and perturbed in integer steps.
    Integer,
    /// Continuous values.
    Real,
}

/// Type and inclusive legal range of one chromosome position.
///
/// # Examples
///
/// ```
/// use genespace::GeneSpec;
///
/// let bit = GeneSpec::integer(0, 1);
/// assert!(bit.contains(1.0));
/// assert!(!bit.contains(2.0));
///
/// let level = GeneSpec::real(10.5, 75.5);
/// assert!(level.contains(10.5));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeneSpec {
    pub kind: GeneKind,
    pub min: f64,
    pub max: f64,
}

impl GeneSpec {
    /// An integer gene over the inclusive range `[min, max]`.
    pub fn integer(min: i64, max: i64) -> Self {
        Self {
            kind: GeneKind::Integer,
            min: min as f64,
            max: max as f64,
        }
    }

    /// A real gene over the inclusive range `[min, max]`.
    pub fn real(min: f64, max: f64) -> Self {
        Self {
            kind: GeneKind::Real,
            min,
            max,
        }
    }

    /// Whether `value` lies within the legal range.
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Whether the range admits exactly one value (`min == max`).
    ///
    /// Degenerate specs are skipped by mutation: the only legal value
    /// already holds, and resampling would never terminate.
    pub fn is_degenerate(&self) -> bool {
        self.min == self.max
    }

    /// Draws one value uniformly from the legal range.
    pub fn sample(&self, rng: &mut RandomSource) -> f64 {
        match self.kind {
            GeneKind::Integer => rng.uniform_int(self.min as i64, self.max as i64) as f64,
            GeneKind::Real => rng.uniform_real(self.min, self.max),
        }
    }
}

/// Ordered sequence of gene specs defining the search space.
///
/// # Examples
///
/// ```
/// use genespace::{GeneSpace, GeneSpec};
///
/// let space = GeneSpace::new(vec![
///     GeneSpec::integer(0, 1),
///     GeneSpec::integer(-5, 10),
///     GeneSpec::real(10.5, 75.5),
/// ]);
/// assert_eq!(space.len(), 3);
/// assert!(space.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeneSpace {
    specs: Vec<GeneSpec>,
}

impl GeneSpace {
    pub fn new(specs: Vec<GeneSpec>) -> Self {
        Self { specs }
    }

    /// Chromosome length for this space.
    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    pub fn specs(&self) -> &[GeneSpec] {
        &self.specs
    }

    /// Checks that the space is non-empty and every range is well-formed.
    pub fn validate(&self) -> Result<()> {
        if self.specs.is_empty() {
            return Err(EvolveError::Configuration(
                "gene space must contain at least one gene spec".into(),
            ));
        }
        for (index, spec) in self.specs.iter().enumerate() {
            if spec.min > spec.max {
                return Err(EvolveError::GeneRange {
                    index,
                    min: spec.min,
                    max: spec.max,
                });
            }
        }
        Ok(())
    }

    /// Samples a full chromosome, one uniform draw per gene.
    pub fn sample(&self, rng: &mut RandomSource) -> Vec<f64> {
        self.specs.iter().map(|spec| spec.sample(rng)).collect()
    }

    /// Whether every gene of `chromosome` lies within its spec's range.
    pub fn contains(&self, chromosome: &[f64]) -> bool {
        chromosome.len() == self.specs.len()
            && chromosome
                .iter()
                .zip(&self.specs)
                .all(|(&value, spec)| spec.contains(value))
    }
}
