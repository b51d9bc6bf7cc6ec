//! Candidate solutions.

/// One candidate solution: an opaque identity, a chromosome, and the
/// fitness from its most recent evaluation.
///
/// `fitness` is a cache of the external scoring function's last result,
/// never authoritative input. Higher is better throughout the crate.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Individual {
    /// Unique within one run. Survives replacement-by-slot: slots are
    /// positional, ids are identities.
    pub id: u64,
    /// Ordered gene values; length equals the gene space's length.
    pub chromosome: Vec<f64>,
    /// Most recent evaluation result.
    pub fitness: f64,
}

impl Individual {
    /// A not-yet-evaluated individual. The placeholder fitness is the
    /// worst possible value so it can never masquerade as a real score.
    pub fn unevaluated(id: u64, chromosome: Vec<f64>) -> Self {
        Self {
            id,
            chromosome,
            fitness: f64::NEG_INFINITY,
        }
    }
}

/// A child produced by crossover, tagged with the population slot of the
/// parent it was paired from. Replacement policies key on this slot.
#[derive(Debug, Clone)]
pub struct Offspring {
    pub source_slot: usize,
    pub individual: Individual,
}
