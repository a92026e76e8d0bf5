#[cfg(test)]
#[path = "../../tests/unit/evolution/evaluator_test.rs"]
mod evaluator_test;

use crate::utils::GenericResult;
use rustc_hash::FxHashMap;
use std::hash::Hash;
use std::sync::Mutex;

/// Calculates the fitness score of a candidate solution.
///
/// The score must be finite and, when the evaluator is natural, non negative. The
/// polarity returned by `is_natural` must stay constant for the lifetime of the
/// evaluator. Evaluation must be deterministic in its inputs: reproducibility of seeded
/// runs relies on evaluators not drawing any randomness of their own.
pub trait FitnessEvaluator: Send + Sync {
    /// A type of a candidate solution.
    type Candidate;

    /// Returns the fitness score of the candidate. The population view contains the whole
    /// population being evaluated so that the score can be made relative to siblings.
    fn get_fitness(&self, candidate: &Self::Candidate, population: &[Self::Candidate]) -> GenericResult<f64>;

    /// Returns true if higher fitness means fitter candidate.
    fn is_natural(&self) -> bool;
}

/// A decorator which memoizes fitness scores of structurally equal candidates.
///
/// Use it only with evaluators whose score does not depend on the population view. The
/// cache is unbounded and grows for the lifetime of the evaluator.
pub struct CachingFitnessEvaluator<E>
where
    E: FitnessEvaluator,
{
    inner: E,
    cache: Mutex<FxHashMap<E::Candidate, f64>>,
}

impl<E> CachingFitnessEvaluator<E>
where
    E: FitnessEvaluator,
    E::Candidate: Clone + Eq + Hash,
{
    /// Creates a new instance of `CachingFitnessEvaluator` wrapping the given evaluator.
    pub fn new(inner: E) -> Self {
        Self { inner, cache: Mutex::new(FxHashMap::default()) }
    }
}

impl<E> FitnessEvaluator for CachingFitnessEvaluator<E>
where
    E: FitnessEvaluator,
    E::Candidate: Clone + Eq + Hash + Send + Sync,
{
    type Candidate = E::Candidate;

    fn get_fitness(&self, candidate: &Self::Candidate, population: &[Self::Candidate]) -> GenericResult<f64> {
        if let Some(fitness) = self.cache.lock().expect("cannot lock fitness cache").get(candidate) {
            return Ok(*fitness);
        }

        // NOTE the lock is not held during evaluation, so concurrent misses of the same
        // candidate may compute its score more than once
        let fitness = self.inner.get_fitness(candidate, population)?;
        self.cache.lock().expect("cannot lock fitness cache").insert(candidate.clone(), fitness);

        Ok(fitness)
    }

    fn is_natural(&self) -> bool {
        self.inner.is_natural()
    }
}
