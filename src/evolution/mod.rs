//! Contains the evolution engine together with the plug-in abstractions it drives.

#[cfg(test)]
#[path = "../../tests/unit/evolution/factory_test.rs"]
mod factory_test;

mod engine;
pub use self::engine::*;

mod evaluator;
pub use self::evaluator::*;

mod observer;
pub use self::observer::*;

mod operator;
pub use self::operator::*;

mod strategy;
pub use self::strategy::*;

use crate::utils::{GenericError, RandomGen};
use thiserror::Error;

/// Specifies failure modes of an evolution run.
#[derive(Debug, Error)]
pub enum EvolutionError {
    /// Engine inputs are malformed. Raised before the generation loop starts, leaving any
    /// terminal state from a previous run untouched.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A fitness evaluation failed. Carries the first error in population order; outcomes
    /// of the remaining evaluations are discarded.
    #[error("fitness evaluation failed: {0}")]
    EvaluationFailed(GenericError),

    /// A plug-in broke its contract, e.g. produced a population of a wrong size, a non
    /// finite fitness or flipped the fitness polarity in the middle of a run.
    #[error("contract violation: {0}")]
    ContractViolation(String),

    /// Satisfied termination conditions were requested before any run has completed.
    #[error("evolution has not terminated")]
    NotTerminated,
}

/// A type alias for a result with `EvolutionError`.
pub type EvolutionResult<T> = Result<T, EvolutionError>;

/// Creates whole initial populations.
///
/// The returned population must contain exactly `population_size` candidates, include
/// every seed candidate verbatim and generate the remainder from the supplied RNG only.
/// Callers must not pass more seed candidates than the population size.
pub trait CandidateFactory: Send + Sync {
    /// A type of a candidate solution.
    type Candidate;

    /// Creates an initial population of exactly `population_size` candidates honoring
    /// given seed candidates.
    fn generate_initial_population(
        &self,
        population_size: usize,
        seed_candidates: Vec<Self::Candidate>,
        rng: &mut RandomGen,
    ) -> Vec<Self::Candidate>;
}

/// Creates single random candidates.
///
/// Any implementation gets `CandidateFactory` for free: seed candidates are placed first
/// and the remainder of the population is generated one candidate at a time.
pub trait CandidateGenerator: Send + Sync {
    /// A type of a candidate solution.
    type Candidate;

    /// Creates a single random candidate.
    fn generate_candidate(&self, rng: &mut RandomGen) -> Self::Candidate;
}

impl<G> CandidateFactory for G
where
    G: CandidateGenerator,
{
    type Candidate = G::Candidate;

    fn generate_initial_population(
        &self,
        population_size: usize,
        seed_candidates: Vec<Self::Candidate>,
        rng: &mut RandomGen,
    ) -> Vec<Self::Candidate> {
        let mut population = seed_candidates;
        population.reserve(population_size.saturating_sub(population.len()));

        while population.len() < population_size {
            population.push(self.generate_candidate(rng));
        }

        population
    }
}
