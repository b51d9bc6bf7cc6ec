//! Crossover strategies.
//!
//! Pure functions from two parent chromosomes to two child chromosomes,
//! invoked once per adjacent pair in the parent list.
//!
//! The index-based variants splice verbatim gene copies, so children
//! satisfy every gene range whenever the parents do — no post-crossover
//! clamping or validation exists anywhere in the crate. The continuous
//! variants apply only to single-gene spaces and stay in range by
//! convexity: every produced value lies between two in-range values.
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Eshelman & Schaffer (1993), "Real-Coded Genetic Algorithms and
//!   Interval-Schemata"

use crate::random::RandomSource;

/// Strategy for recombining two parents into two children.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Crossover {
    /// One cut index `k` uniform over `[0, len]`; children swap suffixes.
    SinglePoint,
    /// Two ordered cut indices `k1 <= k2`; children swap the middle
    /// segment.
    TwoPoint,
    /// Single-gene spaces only: one value drawn uniformly between the
    /// parents' values; both children receive it.
    ContinuousSinglePoint,
    /// Single-gene spaces only: two ordered draws within the parents'
    /// range; each child is the midpoint of one parent and one draw.
    ContinuousTwoPoint,
}

impl Crossover {
    /// Whether this strategy operates on a single continuous scalar
    /// rather than an indexed vector. Enforced against the gene space by
    /// [`EvolverConfig::validate`](crate::EvolverConfig::validate).
    pub fn requires_scalar(&self) -> bool {
        matches!(
            self,
            Crossover::ContinuousSinglePoint | Crossover::ContinuousTwoPoint
        )
    }

    /// Produces two children from two parents.
    ///
    /// # Panics
    /// Panics if the parents have different lengths, or if a continuous
    /// variant is handed a non-scalar chromosome. Both are ruled out by
    /// configuration validation before a run starts.
    pub fn recombine(
        &self,
        parent1: &[f64],
        parent2: &[f64],
        rng: &mut RandomSource,
    ) -> (Vec<f64>, Vec<f64>) {
        assert_eq!(
            parent1.len(),
            parent2.len(),
            "parents must have equal length"
        );

        match self {
            Crossover::SinglePoint => single_point(parent1, parent2, rng),
            Crossover::TwoPoint => two_point(parent1, parent2, rng),
            Crossover::ContinuousSinglePoint => {
                let (a, b) = continuous_single_point(scalar(parent1), scalar(parent2), rng);
                (vec![a], vec![b])
            }
            Crossover::ContinuousTwoPoint => {
                let (a, b) = continuous_two_point(scalar(parent1), scalar(parent2), rng);
                (vec![a], vec![b])
            }
        }
    }
}

fn scalar(chromosome: &[f64]) -> f64 {
    assert_eq!(
        chromosome.len(),
        1,
        "continuous crossover requires a single-gene chromosome"
    );
    chromosome[0]
}

/// Single cut at `k` in `[0, len]`: `child1 = p1[..k] ++ p2[k..]`,
/// `child2 = p2[..k] ++ p1[k..]`.
fn single_point(
    parent1: &[f64],
    parent2: &[f64],
    rng: &mut RandomSource,
) -> (Vec<f64>, Vec<f64>) {
    let len = parent1.len();
    let k = rng.uniform_int(0, len as i64) as usize;

    let child1 = [&parent1[..k], &parent2[k..]].concat();
    let child2 = [&parent2[..k], &parent1[k..]].concat();
    (child1, child2)
}

/// Two ordered cuts `k1 <= k2` in `[0, len]`; the middle segment swaps.
fn two_point(parent1: &[f64], parent2: &[f64], rng: &mut RandomSource) -> (Vec<f64>, Vec<f64>) {
    let len = parent1.len();
    let k1 = rng.uniform_int(0, len as i64) as usize;
    let k2 = rng.uniform_int(k1 as i64, len as i64) as usize;

    let child1 = [&parent1[..k1], &parent2[k1..k2], &parent1[k2..]].concat();
    let child2 = [&parent2[..k1], &parent1[k1..k2], &parent2[k2..]].concat();
    (child1, child2)
}

/// One draw uniform between the parents' values; both children take it.
fn continuous_single_point(parent1: f64, parent2: f64, rng: &mut RandomSource) -> (f64, f64) {
    let lo = parent1.min(parent2);
    let hi = parent1.max(parent2);
    let point = rng.uniform_real(lo, hi);
    (point, point)
}

/// Two ordered draws within the parents' range; each child averages one
/// parent with one draw.
fn continuous_two_point(parent1: f64, parent2: f64, rng: &mut RandomSource) -> (f64, f64) {
    let lo = parent1.min(parent2);
    let hi = parent1.max(parent2);
    let point1 = rng.uniform_real(lo, hi);
    let point2 = rng.uniform_real(point1, hi);

    let child1 = (parent1 + point2) / 2.0;
    let child2 = (parent2 + point1) / 2.0;
    (child1, child2)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Every child gene is a verbatim copy of one parent's gene at the
    /// same index, and the two children complement each other.
    fn assert_splice(parent1: &[f64], parent2: &[f64], child1: &[f64], child2: &[f64]) {
        assert_eq!(child1.len(), parent1.len());
        assert_eq!(child2.len(), parent1.len());
        for i in 0..parent1.len() {
            let from_p1 = child1[i] == parent1[i] && child2[i] == parent2[i];
            let from_p2 = child1[i] == parent2[i] && child2[i] == parent1[i];
            assert!(
                from_p1 || from_p2,
                "gene {i} is not a verbatim parent copy: {} / {}",
                child1[i],
                child2[i]
            );
        }
    }

    #[test]
    fn test_single_point_is_a_splice() {
        let mut rng = RandomSource::from_seed(42);
        let p1: Vec<f64> = (0..8).map(|i| i as f64).collect();
        let p2: Vec<f64> = (0..8).map(|i| (i + 100) as f64).collect();

        for _ in 0..100 {
            let (c1, c2) = Crossover::SinglePoint.recombine(&p1, &p2, &mut rng);
            assert_splice(&p1, &p2, &c1, &c2);
            // A single cut means one prefix from each parent.
            let cut = c1.iter().zip(&p1).take_while(|(c, p)| c == p).count();
            assert_eq!(&c1[cut..], &p2[cut..]);
            assert_eq!(&c2[..cut], &p2[..cut]);
        }
    }

    #[test]
    fn test_two_point_is_a_splice() {
        let mut rng = RandomSource::from_seed(42);
        let p1: Vec<f64> = (0..8).map(|i| i as f64).collect();
        let p2: Vec<f64> = (0..8).map(|i| (i + 100) as f64).collect();

        for _ in 0..100 {
            let (c1, c2) = Crossover::TwoPoint.recombine(&p1, &p2, &mut rng);
            assert_splice(&p1, &p2, &c1, &c2);
            // Outside the swapped segment, child1 matches parent1.
            assert!(c1[0] == p1[0] || c1[0] == p2[0]);
        }
    }

    #[test]
    fn test_identical_parents_reproduce_themselves() {
        let mut rng = RandomSource::from_seed(42);
        let p = vec![1.0, 2.0, 3.0];

        for strategy in [Crossover::SinglePoint, Crossover::TwoPoint] {
            let (c1, c2) = strategy.recombine(&p, &p, &mut rng);
            assert_eq!(c1, p);
            assert_eq!(c2, p);
        }
    }

    #[test]
    fn test_continuous_single_point_children_share_one_value() {
        let mut rng = RandomSource::from_seed(42);

        for _ in 0..100 {
            let (c1, c2) =
                Crossover::ContinuousSinglePoint.recombine(&[2.0], &[8.0], &mut rng);
            assert_eq!(c1, c2);
            assert!((2.0..=8.0).contains(&c1[0]), "outside parent range: {c1:?}");
        }
    }

    #[test]
    fn test_continuous_two_point_children_stay_between_parents() {
        let mut rng = RandomSource::from_seed(42);

        for _ in 0..100 {
            let (c1, c2) = Crossover::ContinuousTwoPoint.recombine(&[2.0], &[8.0], &mut rng);
            assert!((2.0..=8.0).contains(&c1[0]), "child1 escaped: {c1:?}");
            assert!((2.0..=8.0).contains(&c2[0]), "child2 escaped: {c2:?}");
        }
    }

    #[test]
    fn test_requires_scalar() {
        assert!(!Crossover::SinglePoint.requires_scalar());
        assert!(!Crossover::TwoPoint.requires_scalar());
        assert!(Crossover::ContinuousSinglePoint.requires_scalar());
        assert!(Crossover::ContinuousTwoPoint.requires_scalar());
    }

    #[test]
    #[should_panic(expected = "single-gene chromosome")]
    fn test_continuous_rejects_vector_chromosomes() {
        let mut rng = RandomSource::from_seed(42);
        Crossover::ContinuousSinglePoint.recombine(&[1.0, 2.0], &[3.0, 4.0], &mut rng);
    }
}
