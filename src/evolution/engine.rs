#[cfg(test)]
#[path = "../../tests/unit/evolution/engine_test.rs"]
mod engine_test;

use super::{
    CandidateFactory, EvaluationStrategy, EvolutionError, EvolutionObserver, EvolutionOperator,
    EvolutionResult, FitnessEvaluator, ObserverSet, PerCandidateEvaluation,
};
use crate::population::{EvaluatedCandidate, PopulationSnapshot, RankedPopulation};
use crate::termination::TerminationCondition;
use crate::utils::{Environment, GenericResult, Timer};
use std::sync::Arc;

/// A generation based evolution engine.
///
/// A run starts from an initial population created by the candidate factory, then repeats
/// evaluate, rank, notify observers and breed until a termination condition is satisfied
/// or the environment quota is reached. Observers see every generation exactly once,
/// including generation zero. The ranked population of the final generation is returned,
/// and `satisfied_termination_conditions` reports why the run stopped.
pub struct EvolutionEngine<T> {
    factory: Arc<dyn CandidateFactory<Candidate = T>>,
    strategy: Arc<dyn EvaluationStrategy<Candidate = T>>,
    operator: Arc<dyn EvolutionOperator<Candidate = T>>,
    observers: ObserverSet<T>,
    environment: Arc<Environment>,
    satisfied_conditions: Option<Vec<Arc<dyn TerminationCondition<T>>>>,
}

impl<T> EvolutionEngine<T>
where
    T: Clone + Send + Sync + 'static,
{
    /// Creates a new instance of `EvolutionEngine`.
    pub fn new(
        factory: Arc<dyn CandidateFactory<Candidate = T>>,
        strategy: Arc<dyn EvaluationStrategy<Candidate = T>>,
        operator: Arc<dyn EvolutionOperator<Candidate = T>>,
        environment: Arc<Environment>,
    ) -> Self {
        Self {
            factory,
            strategy,
            operator,
            observers: ObserverSet::default(),
            environment,
            satisfied_conditions: None,
        }
    }

    /// Registers an observer. Adding the same instance twice has no effect.
    pub fn add_observer(&self, observer: Arc<dyn EvolutionObserver<T>>) {
        self.observers.add(observer);
    }

    /// Unregisters a previously added observer.
    pub fn remove_observer(&self, observer: &Arc<dyn EvolutionObserver<T>>) {
        self.observers.remove(observer);
    }

    /// Runs the evolution and returns the fittest candidate of the final generation.
    pub fn evolve_best(
        &mut self,
        population_size: usize,
        elite_count: usize,
        seed_candidates: Vec<T>,
        conditions: &[Arc<dyn TerminationCondition<T>>],
    ) -> EvolutionResult<T> {
        let population =
            self.evolve_population(population_size, elite_count, seed_candidates, conditions)?;

        population
            .into_best()
            .map(EvaluatedCandidate::into_candidate)
            .ok_or_else(|| EvolutionError::ContractViolation("empty terminal population".to_string()))
    }

    /// Runs the evolution and returns the ranked population of the final generation.
    ///
    /// Seed candidates are included in the initial population verbatim. The supplied
    /// conditions are checked once per generation in the given order; the run stops as
    /// soon as at least one of them is satisfied or the environment quota is reached.
    pub fn evolve_population(
        &mut self,
        population_size: usize,
        elite_count: usize,
        seed_candidates: Vec<T>,
        conditions: &[Arc<dyn TerminationCondition<T>>],
    ) -> EvolutionResult<RankedPopulation<T>> {
        validate_arguments(population_size, elite_count, seed_candidates.len(), conditions.len())?;

        self.satisfied_conditions = None;

        let natural = self.strategy.is_natural();
        let start_time = Timer::start();
        let mut rng = self.environment.random.get_rng();

        let candidates =
            self.factory.generate_initial_population(population_size, seed_candidates, &mut rng);
        let individuals = self.strategy.evaluate_population(candidates)?;

        let mut generation = 0;
        let mut population = self.rank(individuals, natural, population_size)?;
        let mut snapshot = self.notify(&population, elite_count, generation, &start_time)?;

        loop {
            if let Some(satisfied) = self.find_satisfied_conditions(&snapshot, conditions) {
                self.satisfied_conditions = Some(satisfied);
                return Ok(population);
            }

            generation += 1;

            let individuals = self.operator.next_generation(&population, elite_count, &mut rng)?;
            population = self.rank(individuals, natural, population_size)?;
            snapshot = self.notify(&population, elite_count, generation, &start_time)?;
        }
    }

    /// Returns the termination conditions satisfied at the end of the most recent run, in
    /// the order they were supplied. The list is empty when the run was cut short by the
    /// environment quota. Returns an error if no run has completed yet.
    pub fn satisfied_termination_conditions(
        &self,
    ) -> EvolutionResult<Vec<Arc<dyn TerminationCondition<T>>>> {
        self.satisfied_conditions.clone().ok_or(EvolutionError::NotTerminated)
    }

    fn rank(
        &self,
        individuals: Vec<EvaluatedCandidate<T>>,
        natural: bool,
        population_size: usize,
    ) -> EvolutionResult<RankedPopulation<T>> {
        if individuals.len() != population_size {
            return Err(EvolutionError::ContractViolation(format!(
                "population of size {} does not match the configured size {population_size}",
                individuals.len()
            )));
        }

        if self.strategy.is_natural() != natural {
            return Err(EvolutionError::ContractViolation(
                "fitness polarity changed in the middle of a run".to_string(),
            ));
        }

        Ok(RankedPopulation::from_evaluated(individuals, natural))
    }

    fn notify(
        &self,
        population: &RankedPopulation<T>,
        elite_count: usize,
        generation: usize,
        start_time: &Timer,
    ) -> EvolutionResult<PopulationSnapshot<T>> {
        let snapshot =
            PopulationSnapshot::from_population(population, elite_count, generation, start_time)
                .ok_or_else(|| EvolutionError::ContractViolation("empty population".to_string()))?;

        self.observers.notify(&snapshot);

        Ok(snapshot)
    }

    fn find_satisfied_conditions(
        &self,
        snapshot: &PopulationSnapshot<T>,
        conditions: &[Arc<dyn TerminationCondition<T>>],
    ) -> Option<Vec<Arc<dyn TerminationCondition<T>>>> {
        if self.environment.quota.as_ref().map_or(false, |quota| quota.is_reached()) {
            return Some(Vec::new());
        }

        // NOTE every condition is consulted every generation as stateful conditions track
        // fitness history inside their should_terminate
        let mut satisfied: Vec<Arc<dyn TerminationCondition<T>>> = Vec::new();
        for condition in conditions {
            if condition.should_terminate(snapshot)
                && !satisfied.iter().any(|known| Arc::ptr_eq(known, condition))
            {
                satisfied.push(condition.clone());
            }
        }

        if satisfied.is_empty() { None } else { Some(satisfied) }
    }
}

fn validate_arguments(
    population_size: usize,
    elite_count: usize,
    seed_count: usize,
    condition_count: usize,
) -> EvolutionResult<()> {
    if population_size == 0 {
        return Err(EvolutionError::InvalidArgument("population size must be positive".to_string()));
    }

    if elite_count >= population_size {
        return Err(EvolutionError::InvalidArgument(format!(
            "elite count {elite_count} must be less than population size {population_size}"
        )));
    }

    if seed_count > population_size {
        return Err(EvolutionError::InvalidArgument(format!(
            "seed candidates {seed_count} exceed population size {population_size}"
        )));
    }

    if condition_count == 0 {
        return Err(EvolutionError::InvalidArgument(
            "at least one termination condition is required".to_string(),
        ));
    }

    Ok(())
}

/// Provides a way to build an evolution engine.
pub struct EvolutionEngineBuilder<T> {
    factory: Option<Arc<dyn CandidateFactory<Candidate = T>>>,
    evaluator: Option<Arc<dyn FitnessEvaluator<Candidate = T>>>,
    strategy: Option<Arc<dyn EvaluationStrategy<Candidate = T>>>,
    operator: Option<Arc<dyn EvolutionOperator<Candidate = T>>>,
    observers: Vec<Arc<dyn EvolutionObserver<T>>>,
    environment: Option<Arc<Environment>>,
}

impl<T> Default for EvolutionEngineBuilder<T> {
    fn default() -> Self {
        Self {
            factory: None,
            evaluator: None,
            strategy: None,
            operator: None,
            observers: Vec::new(),
            environment: None,
        }
    }
}

impl<T> EvolutionEngineBuilder<T>
where
    T: Clone + Send + Sync + 'static,
{
    /// Sets the candidate factory. Required.
    pub fn with_factory(mut self, factory: Arc<dyn CandidateFactory<Candidate = T>>) -> Self {
        self.factory = Some(factory);
        self
    }

    /// Sets the fitness evaluator to be wrapped into the default per candidate evaluation
    /// strategy. Ignored when a custom strategy is set.
    pub fn with_evaluator(mut self, evaluator: Arc<dyn FitnessEvaluator<Candidate = T>>) -> Self {
        self.evaluator = Some(evaluator);
        self
    }

    /// Sets a custom evaluation strategy.
    pub fn with_strategy(mut self, strategy: Arc<dyn EvaluationStrategy<Candidate = T>>) -> Self {
        self.strategy = Some(strategy);
        self
    }

    /// Sets the evolution operator. Required.
    pub fn with_operator(mut self, operator: Arc<dyn EvolutionOperator<Candidate = T>>) -> Self {
        self.operator = Some(operator);
        self
    }

    /// Registers an observer on the built engine.
    pub fn with_observer(mut self, observer: Arc<dyn EvolutionObserver<T>>) -> Self {
        self.observers.push(observer);
        self
    }

    /// Sets the environment. A default environment is used when not set.
    pub fn with_environment(mut self, environment: Arc<Environment>) -> Self {
        self.environment = Some(environment);
        self
    }

    /// Builds an evolution engine.
    pub fn build(self) -> GenericResult<EvolutionEngine<T>> {
        let environment = self.environment.unwrap_or_default();

        let factory = self.factory.ok_or("a candidate factory is required")?;
        let operator = self.operator.ok_or("an evolution operator is required")?;

        let strategy: Arc<dyn EvaluationStrategy<Candidate = T>> =
            match (self.strategy, self.evaluator) {
                (Some(strategy), evaluator) => {
                    if evaluator.is_some() {
                        (environment.logger)(
                            "configured to use a custom evaluation strategy, the evaluator is ignored",
                        );
                    }
                    strategy
                }
                (None, Some(evaluator)) => Arc::new(PerCandidateEvaluation::new(evaluator)),
                (None, None) => {
                    return Err("either a fitness evaluator or an evaluation strategy is required".into());
                }
            };

        let engine = EvolutionEngine::new(factory, strategy, operator, environment);
        self.observers.into_iter().for_each(|observer| engine.add_observer(observer));

        Ok(engine)
    }
}
