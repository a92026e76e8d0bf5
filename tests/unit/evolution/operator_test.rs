use super::*;
use crate::evolution::PerCandidateEvaluation;
use crate::helpers::example::{CountingEvaluator, create_scalar_strategy, create_test_rng};

struct BestSelection;

impl SelectionStrategy for BestSelection {
    type Candidate = f64;

    fn select(&self, population: &RankedPopulation<f64>, selection_size: usize, _: &mut RandomGen) -> Vec<f64> {
        (0..selection_size).map(|_| *population.as_slice()[0].candidate()).collect()
    }
}

struct IncrementVariation;

impl VariationOperator for IncrementVariation {
    type Candidate = f64;

    fn apply(&self, selected: Vec<f64>, _: &mut RandomGen) -> Vec<f64> {
        selected.into_iter().map(|candidate| candidate + 1.).collect()
    }
}

struct MisbehavingVariation;

impl VariationOperator for MisbehavingVariation {
    type Candidate = f64;

    fn apply(&self, mut selected: Vec<f64>, _: &mut RandomGen) -> Vec<f64> {
        selected.pop();
        selected
    }
}

fn create_population(values: &[f64], natural: bool) -> RankedPopulation<f64> {
    let individuals = values.iter().map(|&value| EvaluatedCandidate::new(value, value)).collect();
    RankedPopulation::from_evaluated(individuals, natural)
}

#[test]
fn can_carry_elites_without_reevaluation() {
    let evaluator = Arc::new(CountingEvaluator::new(true));
    let strategy = PerCandidateEvaluation::new(evaluator.clone());
    strategy.set_single_threaded(true);
    let operator =
        GenerationalReplacement::new(Arc::new(BestSelection), Arc::new(IncrementVariation), Arc::new(strategy));

    let next = operator
        .next_generation(&create_population(&[10., 8., 6., 4.], true), 2, &mut create_test_rng())
        .unwrap();

    assert_eq!(evaluator.call_count(), 2);
    assert_eq!(next.iter().map(|individual| *individual.candidate()).collect::<Vec<_>>(), vec![11., 11., 10., 8.]);
    assert_eq!(next.iter().map(|individual| individual.fitness()).collect::<Vec<_>>(), vec![11., 11., 10., 8.]);
}

#[test]
fn can_breed_whole_population_without_elitism() {
    let operator = GenerationalReplacement::new(
        Arc::new(BestSelection),
        Arc::new(IncrementVariation),
        create_scalar_strategy(true),
    );

    let next = operator.next_generation(&create_population(&[3., 2., 1.], true), 0, &mut create_test_rng()).unwrap();

    assert_eq!(next.iter().map(|individual| *individual.candidate()).collect::<Vec<_>>(), vec![4., 4., 4.]);
}

#[test]
fn can_reject_wrong_offspring_count() {
    let operator = GenerationalReplacement::new(
        Arc::new(BestSelection),
        Arc::new(MisbehavingVariation),
        create_scalar_strategy(true),
    );

    let result = operator.next_generation(&create_population(&[3., 2., 1.], true), 1, &mut create_test_rng());

    assert!(matches!(result, Err(EvolutionError::ContractViolation(_))));
}

#[test]
fn can_reject_elite_count_covering_whole_population() {
    let operator = GenerationalReplacement::new(
        Arc::new(BestSelection),
        Arc::new(IncrementVariation),
        create_scalar_strategy(true),
    );

    let result = operator.next_generation(&create_population(&[1., 2.], true), 2, &mut create_test_rng());

    assert!(matches!(result, Err(EvolutionError::ContractViolation(_))));
}
