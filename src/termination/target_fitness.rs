#[cfg(test)]
#[path = "../../tests/unit/termination/target_fitness_test.rs"]
mod target_fitness_test;

use super::*;

/// A termination condition which stops evolution once the best fitness reaches a target
/// value under the stated fitness polarity: at least the target when fitness is natural,
/// at most the target otherwise.
pub struct TargetFitness {
    target: f64,
    natural: bool,
}

impl TargetFitness {
    /// Creates a new instance of `TargetFitness` for the given target value and polarity.
    pub fn new(target: f64, natural: bool) -> Self {
        Self { target, natural }
    }
}

impl<T> TerminationCondition<T> for TargetFitness {
    fn should_terminate(&self, snapshot: &PopulationSnapshot<T>) -> bool {
        if self.natural { snapshot.best_fitness() >= self.target } else { snapshot.best_fitness() <= self.target }
    }
}
