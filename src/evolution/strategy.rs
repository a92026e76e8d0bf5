#[cfg(test)]
#[path = "../../tests/unit/evolution/strategy_test.rs"]
mod strategy_test;

use super::{EvolutionError, EvolutionResult, FitnessEvaluator};
use crate::population::EvaluatedCandidate;
use crate::utils::{ThreadPool, parallel_collect, shared_thread_pool};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Scores whole populations.
pub trait EvaluationStrategy: Send + Sync {
    /// A type of a candidate solution.
    type Candidate;

    /// Assigns a fitness score to every member of the population. The result keeps the
    /// submission order regardless of how the evaluations are scheduled, so the ranked
    /// population downstream is a pure function of the input for deterministic evaluators.
    fn evaluate_population(
        &self,
        population: Vec<Self::Candidate>,
    ) -> EvolutionResult<Vec<EvaluatedCandidate<Self::Candidate>>>;

    /// Returns true if higher fitness means fitter candidate. The polarity comes from the
    /// underlying fitness evaluator.
    fn is_natural(&self) -> bool;

    /// Forces all evaluations onto the calling thread when set. Off by default.
    fn set_single_threaded(&self, single_threaded: bool);
}

/// An evaluation strategy which scores candidates one by one: sequentially on the calling
/// thread, or fanned out to a thread pool with one task per candidate. A sequential run
/// stops scoring at the first failed candidate, while a parallel run completes the batch
/// and reports the first failure in submission order.
pub struct PerCandidateEvaluation<T> {
    evaluator: Arc<dyn FitnessEvaluator<Candidate = T>>,
    thread_pool: Arc<ThreadPool>,
    single_threaded: AtomicBool,
}

impl<T> PerCandidateEvaluation<T> {
    /// Creates a new instance of `PerCandidateEvaluation` backed by the process wide
    /// shared thread pool.
    pub fn new(evaluator: Arc<dyn FitnessEvaluator<Candidate = T>>) -> Self {
        Self::new_with_thread_pool(evaluator, shared_thread_pool())
    }

    /// Creates a new instance of `PerCandidateEvaluation` backed by the given thread pool.
    pub fn new_with_thread_pool(
        evaluator: Arc<dyn FitnessEvaluator<Candidate = T>>,
        thread_pool: Arc<ThreadPool>,
    ) -> Self {
        Self { evaluator, thread_pool, single_threaded: AtomicBool::new(false) }
    }
}

impl<T> EvaluationStrategy for PerCandidateEvaluation<T>
where
    T: Send + Sync,
{
    type Candidate = T;

    fn evaluate_population(&self, population: Vec<T>) -> EvolutionResult<Vec<EvaluatedCandidate<T>>> {
        let natural = self.evaluator.is_natural();

        let scores: EvolutionResult<Vec<f64>> = if self.single_threaded.load(Ordering::Relaxed) {
            population
                .iter()
                .map(|candidate| {
                    self.evaluator.get_fitness(candidate, &population).map_err(EvolutionError::EvaluationFailed)
                })
                .collect()
        } else {
            self.thread_pool
                .execute(|| {
                    parallel_collect(&population, |candidate| self.evaluator.get_fitness(candidate, &population))
                })
                .into_iter()
                .map(|score| score.map_err(EvolutionError::EvaluationFailed))
                .collect()
        };

        population
            .into_iter()
            .zip(scores?)
            .map(|(candidate, fitness)| {
                validate_fitness(fitness, natural)?;

                Ok(EvaluatedCandidate::new(candidate, fitness))
            })
            .collect()
    }

    fn is_natural(&self) -> bool {
        self.evaluator.is_natural()
    }

    fn set_single_threaded(&self, single_threaded: bool) {
        self.single_threaded.store(single_threaded, Ordering::Relaxed);
    }
}

fn validate_fitness(fitness: f64, natural: bool) -> EvolutionResult<()> {
    if !fitness.is_finite() {
        return Err(EvolutionError::ContractViolation(format!("non finite fitness: {fitness}")));
    }

    if natural && fitness < 0. {
        return Err(EvolutionError::ContractViolation(format!("negative fitness with natural polarity: {fitness}")));
    }

    Ok(())
}
