#[cfg(test)]
#[path = "../../tests/unit/termination/stagnation_test.rs"]
mod stagnation_test;

use super::*;
use std::sync::Mutex;

/// A termination condition which stops evolution when the observed fitness has not
/// improved for a fixed amount of consecutive generations.
///
/// The condition updates its reference fitness on every call, so it relies on being
/// consulted exactly once per generation. Use a fresh instance for each run.
pub struct Stagnation {
    generation_limit: usize,
    natural: bool,
    uses_mean: bool,
    tracker: Mutex<FitnessTracker>,
}

struct FitnessTracker {
    best_fitness: f64,
    fittest_generation: usize,
}

impl Stagnation {
    /// Creates a new instance of `Stagnation` which tracks the best fitness of the
    /// population under the given polarity. The generation limit must be positive.
    pub fn new(generation_limit: usize, natural: bool) -> Self {
        Self::new_with_mean(generation_limit, natural, false)
    }

    /// Creates a new instance of `Stagnation` which tracks the mean fitness of the whole
    /// population instead of the best one when `uses_mean` is set.
    pub fn new_with_mean(generation_limit: usize, natural: bool, uses_mean: bool) -> Self {
        assert_ne!(generation_limit, 0);
        Self {
            generation_limit,
            natural,
            uses_mean,
            tracker: Mutex::new(FitnessTracker {
                best_fitness: if natural { f64::NEG_INFINITY } else { f64::INFINITY },
                fittest_generation: 0,
            }),
        }
    }

    fn has_improved(&self, current: f64, best: f64) -> bool {
        if self.natural { current > best } else { current < best }
    }
}

impl<T> TerminationCondition<T> for Stagnation {
    fn should_terminate(&self, snapshot: &PopulationSnapshot<T>) -> bool {
        let fitness = if self.uses_mean { snapshot.mean_fitness() } else { snapshot.best_fitness() };
        let mut tracker = self.tracker.lock().expect("cannot lock fitness tracker");

        if self.has_improved(fitness, tracker.best_fitness) {
            tracker.best_fitness = fitness;
            tracker.fittest_generation = snapshot.generation();
        }

        snapshot.generation().saturating_sub(tracker.fittest_generation) >= self.generation_limit
    }
}
