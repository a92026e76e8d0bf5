#[cfg(test)]
#[path = "../../tests/unit/population/ranked_test.rs"]
mod ranked_test;

use crate::utils::compare_floats;

/// A candidate solution paired with its fitness score. Immutable after construction.
#[derive(Clone, Debug, PartialEq)]
pub struct EvaluatedCandidate<T> {
    candidate: T,
    fitness: f64,
}

impl<T> EvaluatedCandidate<T> {
    /// Creates a new instance of `EvaluatedCandidate`.
    pub fn new(candidate: T, fitness: f64) -> Self {
        Self { candidate, fitness }
    }

    /// Returns the candidate solution.
    pub fn candidate(&self) -> &T {
        &self.candidate
    }

    /// Returns the fitness score.
    pub fn fitness(&self) -> f64 {
        self.fitness
    }

    /// Consumes the pair and returns the candidate solution.
    pub fn into_candidate(self) -> T {
        self.candidate
    }
}

/// A population with every member scored, ordered so that the fittest individual under
/// the fitness polarity comes first.
#[derive(Clone, Debug)]
pub struct RankedPopulation<T> {
    individuals: Vec<EvaluatedCandidate<T>>,
    natural: bool,
}

impl<T> RankedPopulation<T> {
    /// Creates a new instance of `RankedPopulation` sorting given individuals by fitness:
    /// descending when fitness is natural (higher is better), ascending otherwise.
    /// The sort is stable, so equally fit individuals keep their prior order.
    pub fn from_evaluated(mut individuals: Vec<EvaluatedCandidate<T>>, natural: bool) -> Self {
        if natural {
            individuals.sort_by(|a, b| compare_floats(b.fitness, a.fitness));
        } else {
            individuals.sort_by(|a, b| compare_floats(a.fitness, b.fitness));
        }

        Self { individuals, natural }
    }

    /// Returns the fittest individual.
    pub fn best(&self) -> Option<&EvaluatedCandidate<T>> {
        self.individuals.first()
    }

    /// Returns true if higher fitness means fitter candidate.
    pub fn is_natural(&self) -> bool {
        self.natural
    }

    /// Returns amount of individuals.
    pub fn len(&self) -> usize {
        self.individuals.len()
    }

    /// Returns true if the population has no individuals.
    pub fn is_empty(&self) -> bool {
        self.individuals.is_empty()
    }

    /// Returns individuals in rank order, fittest first.
    pub fn as_slice(&self) -> &[EvaluatedCandidate<T>] {
        self.individuals.as_slice()
    }

    /// Iterates over individuals in rank order.
    pub fn iter(&self) -> std::slice::Iter<'_, EvaluatedCandidate<T>> {
        self.individuals.iter()
    }

    /// Consumes the population and returns the fittest individual.
    pub fn into_best(self) -> Option<EvaluatedCandidate<T>> {
        self.individuals.into_iter().next()
    }
}
