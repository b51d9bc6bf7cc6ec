//! Replacement policies.
//!
//! Invoked once per generation with the population and the generation's
//! offspring. Policies compare only fitness values already recorded on
//! the individuals — replacement never calls the fitness function; the
//! evolver evaluates children before replacement and re-evaluates the
//! whole population afterwards, so no stale values are ever compared.

use crate::individual::{Individual, Offspring};
use crate::random::RandomSource;

/// How a generation's children merge back into the population.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Replacement {
    /// Every child unconditionally overwrites its source parent's slot.
    BothParents,
    /// Every child overwrites an independently drawn uniform-random slot;
    /// unrelated individuals may be overwritten, and two children may
    /// land on the same slot.
    Random,
    /// Elitist: a child overwrites its source parent's slot only if it
    /// scores better. `accept_ties` switches the comparison from strict
    /// `>` (the default) to `>=`.
    WeakParent { accept_ties: bool },
    /// Children are appended; nobody is removed. The population grows by
    /// the number of children every generation — callers choosing this
    /// must budget for the growth.
    Append,
}

impl Default for Replacement {
    fn default() -> Self {
        Replacement::BothParents
    }
}

impl Replacement {
    /// Merges `offspring` into `population` in offspring order.
    pub fn apply(
        &self,
        population: &mut Vec<Individual>,
        offspring: Vec<Offspring>,
        rng: &mut RandomSource,
    ) {
        match self {
            Replacement::BothParents => {
                for child in offspring {
                    population[child.source_slot] = child.individual;
                }
            }
            Replacement::Random => {
                for child in offspring {
                    let slot = rng.index(population.len());
                    population[slot] = child.individual;
                }
            }
            Replacement::WeakParent { accept_ties } => {
                for child in offspring {
                    let incumbent = population[child.source_slot].fitness;
                    let wins = if *accept_ties {
                        child.individual.fitness >= incumbent
                    } else {
                        child.individual.fitness > incumbent
                    };
                    if wins {
                        population[child.source_slot] = child.individual;
                    }
                }
            }
            Replacement::Append => {
                population.extend(offspring.into_iter().map(|child| child.individual));
            }
        }
    }

    /// Whether this policy keeps the population size constant.
    pub fn preserves_size(&self) -> bool {
        !matches!(self, Replacement::Append)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn population(fitnesses: &[f64]) -> Vec<Individual> {
        fitnesses
            .iter()
            .enumerate()
            .map(|(i, &f)| {
                let mut ind = Individual::unevaluated(i as u64, vec![i as f64]);
                ind.fitness = f;
                ind
            })
            .collect()
    }

    fn child(source_slot: usize, id: u64, fitness: f64) -> Offspring {
        let mut individual = Individual::unevaluated(id, vec![id as f64]);
        individual.fitness = fitness;
        Offspring {
            source_slot,
            individual,
        }
    }

    #[test]
    fn test_both_parents_overwrites_source_slots() {
        let mut pop = population(&[1.0, 2.0, 3.0, 4.0]);
        let mut rng = RandomSource::from_seed(42);

        Replacement::BothParents.apply(
            &mut pop,
            vec![child(1, 100, 0.5), child(3, 101, 0.1)],
            &mut rng,
        );

        assert_eq!(pop.len(), 4);
        assert_eq!(pop[1].id, 100);
        assert_eq!(pop[3].id, 101);
        assert_eq!(pop[0].id, 0);
        assert_eq!(pop[2].id, 2);
    }

    #[test]
    fn test_random_keeps_size_and_places_all_children() {
        let mut pop = population(&[1.0, 2.0, 3.0, 4.0, 5.0]);
        let mut rng = RandomSource::from_seed(42);

        Replacement::Random.apply(&mut pop, vec![child(0, 100, 9.0)], &mut rng);

        assert_eq!(pop.len(), 5);
        assert_eq!(pop.iter().filter(|ind| ind.id == 100).count(), 1);
    }

    #[test]
    fn test_weak_parent_strict_rejects_equal_fitness() {
        let mut pop = population(&[1.0, 2.0]);
        let mut rng = RandomSource::from_seed(42);

        Replacement::WeakParent { accept_ties: false }.apply(
            &mut pop,
            vec![child(0, 100, 1.0), child(1, 101, 2.5)],
            &mut rng,
        );

        assert_eq!(pop[0].id, 0, "tie must not replace under strict compare");
        assert_eq!(pop[1].id, 101, "fitter child must replace its parent");
    }

    #[test]
    fn test_weak_parent_accept_ties_replaces_on_equal_fitness() {
        let mut pop = population(&[1.0, 2.0]);
        let mut rng = RandomSource::from_seed(42);

        Replacement::WeakParent { accept_ties: true }.apply(
            &mut pop,
            vec![child(0, 100, 1.0), child(1, 101, 1.5)],
            &mut rng,
        );

        assert_eq!(pop[0].id, 100, "tie must replace when accept_ties is set");
        assert_eq!(pop[1].id, 1, "weaker child must never replace");
    }

    #[test]
    fn test_append_grows_population_without_removal() {
        let mut pop = population(&[1.0, 2.0, 3.0]);
        let mut rng = RandomSource::from_seed(42);

        Replacement::Append.apply(
            &mut pop,
            vec![child(0, 100, 0.0), child(1, 101, 0.0)],
            &mut rng,
        );

        assert_eq!(pop.len(), 5);
        assert_eq!(pop[3].id, 100);
        assert_eq!(pop[4].id, 101);
        assert!(pop[..3].iter().zip(0u64..).all(|(ind, id)| ind.id == id));
    }

    #[test]
    fn test_preserves_size() {
        assert!(Replacement::BothParents.preserves_size());
        assert!(Replacement::Random.preserves_size());
        assert!(Replacement::WeakParent { accept_ties: false }.preserves_size());
        assert!(!Replacement::Append.preserves_size());
    }
}
