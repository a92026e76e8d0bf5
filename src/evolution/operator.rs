#[cfg(test)]
#[path = "../../tests/unit/evolution/operator_test.rs"]
mod operator_test;

use super::{EvaluationStrategy, EvolutionError, EvolutionResult};
use crate::population::{EvaluatedCandidate, RankedPopulation};
use crate::utils::RandomGen;
use std::sync::Arc;

/// Produces the next generation from the current ranked one.
///
/// The returned population is raw (possibly unsorted) and must have exactly the size of
/// the source population. The top `elite_count` individuals must be carried forward
/// unchanged together with their fitness, without re-evaluation. All randomness must come
/// from the supplied RNG so that seeded runs stay reproducible.
pub trait EvolutionOperator: Send + Sync {
    /// A type of a candidate solution.
    type Candidate;

    /// Returns a raw population for the next generation.
    fn next_generation(
        &self,
        population: &RankedPopulation<Self::Candidate>,
        elite_count: usize,
        rng: &mut RandomGen,
    ) -> EvolutionResult<Vec<EvaluatedCandidate<Self::Candidate>>>;
}

/// Picks breeding candidates from a ranked population.
pub trait SelectionStrategy: Send + Sync {
    /// A type of a candidate solution.
    type Candidate;

    /// Returns exactly `selection_size` candidates chosen for breeding. The population
    /// carries its fitness polarity, so implementations can honor it.
    fn select(
        &self,
        population: &RankedPopulation<Self::Candidate>,
        selection_size: usize,
        rng: &mut RandomGen,
    ) -> Vec<Self::Candidate>;
}

/// Transforms a pool of selected candidates, e.g. with crossover and mutation.
pub trait VariationOperator: Send + Sync {
    /// A type of a candidate solution.
    type Candidate;

    /// Applies the transformation returning as many candidates as it received.
    fn apply(&self, selected: Vec<Self::Candidate>, rng: &mut RandomGen) -> Vec<Self::Candidate>;
}

/// A generational replacement scheme: the fittest `elite_count` individuals survive
/// unchanged, while the rest of the next generation is bred from selected parents and
/// evaluated from scratch.
pub struct GenerationalReplacement<T> {
    selection: Arc<dyn SelectionStrategy<Candidate = T>>,
    variation: Arc<dyn VariationOperator<Candidate = T>>,
    strategy: Arc<dyn EvaluationStrategy<Candidate = T>>,
}

impl<T> GenerationalReplacement<T> {
    /// Creates a new instance of `GenerationalReplacement`.
    pub fn new(
        selection: Arc<dyn SelectionStrategy<Candidate = T>>,
        variation: Arc<dyn VariationOperator<Candidate = T>>,
        strategy: Arc<dyn EvaluationStrategy<Candidate = T>>,
    ) -> Self {
        Self { selection, variation, strategy }
    }
}

impl<T> EvolutionOperator for GenerationalReplacement<T>
where
    T: Clone + Send + Sync,
{
    type Candidate = T;

    fn next_generation(
        &self,
        population: &RankedPopulation<T>,
        elite_count: usize,
        rng: &mut RandomGen,
    ) -> EvolutionResult<Vec<EvaluatedCandidate<T>>> {
        if elite_count >= population.len() {
            return Err(EvolutionError::ContractViolation(format!(
                "elite count {elite_count} must be less than population size {}",
                population.len()
            )));
        }

        let breeding_size = population.len() - elite_count;
        let parents = self.selection.select(population, breeding_size, rng);
        let offspring = self.variation.apply(parents, rng);

        if offspring.len() != breeding_size {
            return Err(EvolutionError::ContractViolation(format!(
                "variation produced {} candidates instead of {breeding_size}",
                offspring.len()
            )));
        }

        let mut next_generation = self.strategy.evaluate_population(offspring)?;
        next_generation.extend(population.iter().take(elite_count).cloned());

        Ok(next_generation)
    }
}
