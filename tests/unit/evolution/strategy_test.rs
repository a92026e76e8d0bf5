use super::*;
use crate::helpers::example::IdentityEvaluator;
use crate::utils::GenericResult;
use std::collections::HashSet;
use std::sync::Mutex;
use std::sync::atomic::AtomicUsize;
use std::thread::{self, ThreadId};

struct ThreadRecordingEvaluator {
    threads: Mutex<HashSet<ThreadId>>,
}

impl FitnessEvaluator for ThreadRecordingEvaluator {
    type Candidate = f64;

    fn get_fitness(&self, candidate: &f64, _: &[f64]) -> GenericResult<f64> {
        self.threads.lock().unwrap().insert(thread::current().id());
        Ok(*candidate)
    }

    fn is_natural(&self) -> bool {
        true
    }
}

#[derive(Default)]
struct SignAwareEvaluator {
    calls: AtomicUsize,
}

impl FitnessEvaluator for SignAwareEvaluator {
    type Candidate = f64;

    fn get_fitness(&self, candidate: &f64, _: &[f64]) -> GenericResult<f64> {
        self.calls.fetch_add(1, Ordering::Relaxed);
        if *candidate < 0. { Err(format!("cannot evaluate {candidate}").into()) } else { Ok(*candidate) }
    }

    fn is_natural(&self) -> bool {
        false
    }
}

struct RelativeEvaluator;

impl FitnessEvaluator for RelativeEvaluator {
    type Candidate = f64;

    fn get_fitness(&self, candidate: &f64, population: &[f64]) -> GenericResult<f64> {
        let total: f64 = population.iter().sum();
        Ok(*candidate / total)
    }

    fn is_natural(&self) -> bool {
        true
    }
}

#[test]
fn can_keep_submission_order_in_parallel_mode() {
    let strategy = PerCandidateEvaluation::new(Arc::new(IdentityEvaluator::new(true)));
    let population = (0..256).map(|value| value as f64).collect::<Vec<_>>();

    let individuals = strategy.evaluate_population(population.clone()).unwrap();

    assert_eq!(individuals.len(), population.len());
    individuals.iter().zip(population).for_each(|(individual, candidate)| {
        assert_eq!(*individual.candidate(), candidate);
        assert_eq!(individual.fitness(), candidate);
    });
}

#[test]
fn can_evaluate_on_calling_thread_when_single_threaded() {
    let evaluator = Arc::new(ThreadRecordingEvaluator { threads: Mutex::new(HashSet::new()) });
    let strategy = PerCandidateEvaluation::new(evaluator.clone());
    strategy.set_single_threaded(true);

    strategy.evaluate_population((0..64).map(|value| value as f64).collect()).unwrap();

    let threads = evaluator.threads.lock().unwrap();
    assert_eq!(threads.len(), 1);
    assert!(threads.contains(&thread::current().id()));
}

#[test]
fn can_use_dedicated_thread_pool() {
    let strategy = PerCandidateEvaluation::new_with_thread_pool(
        Arc::new(IdentityEvaluator::new(true)),
        Arc::new(ThreadPool::new(2)),
    );

    let individuals = strategy.evaluate_population(vec![1., 2., 3.]).unwrap();

    assert_eq!(individuals.iter().map(|individual| individual.fitness()).collect::<Vec<_>>(), vec![1., 2., 3.]);
}

#[test]
fn can_report_first_error_in_submission_order() {
    let strategy = PerCandidateEvaluation::new(Arc::new(SignAwareEvaluator::default()));

    let result = strategy.evaluate_population(vec![1., -2., 3., -4.]);

    match result {
        Err(EvolutionError::EvaluationFailed(error)) => assert_eq!(error.to_string(), "cannot evaluate -2"),
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn can_stop_sequential_evaluation_at_first_failure() {
    let evaluator = Arc::new(SignAwareEvaluator::default());
    let strategy = PerCandidateEvaluation::new(evaluator.clone());
    strategy.set_single_threaded(true);

    let result = strategy.evaluate_population(vec![1., -2., 3., 4.]);

    assert!(matches!(result, Err(EvolutionError::EvaluationFailed(_))));
    assert_eq!(evaluator.calls.load(Ordering::Relaxed), 2);
}

#[test]
fn can_expose_whole_population_to_evaluator() {
    let strategy = PerCandidateEvaluation::new(Arc::new(RelativeEvaluator));

    let individuals = strategy.evaluate_population(vec![2., 3., 5.]).unwrap();

    assert_eq!(individuals.iter().map(|individual| individual.fitness()).collect::<Vec<_>>(), vec![0.2, 0.3, 0.5]);
}

#[test]
fn can_delegate_polarity_to_evaluator() {
    assert!(PerCandidateEvaluation::new(Arc::new(IdentityEvaluator::new(true))).is_natural());
    assert!(!PerCandidateEvaluation::new(Arc::new(IdentityEvaluator::new(false))).is_natural());
}

parameterized_test! {can_reject_invalid_fitness, (fitness, natural), {
    can_reject_invalid_fitness_impl(fitness, natural);
}}

can_reject_invalid_fitness! {
    case_01: (f64::NAN, false),
    case_02: (f64::INFINITY, false),
    case_03: (f64::NEG_INFINITY, true),
    case_04: (-1., true),
}

fn can_reject_invalid_fitness_impl(fitness: f64, natural: bool) {
    let result = validate_fitness(fitness, natural);

    assert!(matches!(result, Err(EvolutionError::ContractViolation(_))));
}

#[test]
fn can_accept_negative_fitness_under_non_natural_polarity() {
    assert!(validate_fitness(-1., false).is_ok());
}
