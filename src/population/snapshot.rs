#[cfg(test)]
#[path = "../../tests/unit/population/snapshot_test.rs"]
mod snapshot_test;

use super::RankedPopulation;
use crate::utils::{Timer, get_mean, get_stdev};
use std::time::Duration;

/// An immutable summary of a ranked population at one generation. Snapshots are handed
/// to observers and termination conditions; they carry aggregate statistics only, plus
/// a copy of the best candidate.
#[derive(Clone, Debug)]
pub struct PopulationSnapshot<T> {
    best_candidate: T,
    best_fitness: f64,
    mean_fitness: f64,
    fitness_stdev: f64,
    population_size: usize,
    elite_count: usize,
    natural: bool,
    generation: usize,
    start_time: Timer,
    elapsed: Duration,
}

impl<T: Clone> PopulationSnapshot<T> {
    /// Builds a snapshot of the given population taken at the given generation.
    /// Returns `None` for an empty population.
    pub fn from_population(
        population: &RankedPopulation<T>,
        elite_count: usize,
        generation: usize,
        start_time: &Timer,
    ) -> Option<Self> {
        let best = population.best()?;
        let fitness_values = population.iter().map(|individual| individual.fitness()).collect::<Vec<_>>();

        Some(Self {
            best_candidate: best.candidate().clone(),
            best_fitness: best.fitness(),
            mean_fitness: get_mean(&fitness_values),
            fitness_stdev: get_stdev(&fitness_values),
            population_size: population.len(),
            elite_count,
            natural: population.is_natural(),
            generation,
            start_time: start_time.clone(),
            elapsed: start_time.elapsed(),
        })
    }
}

impl<T> PopulationSnapshot<T> {
    /// Returns the fittest candidate of the population.
    pub fn best_candidate(&self) -> &T {
        &self.best_candidate
    }

    /// Returns the fitness of the fittest candidate.
    pub fn best_fitness(&self) -> f64 {
        self.best_fitness
    }

    /// Returns the arithmetic mean of all fitness values.
    pub fn mean_fitness(&self) -> f64 {
        self.mean_fitness
    }

    /// Returns the population standard deviation of all fitness values.
    pub fn fitness_stdev(&self) -> f64 {
        self.fitness_stdev
    }

    /// Returns amount of individuals in the population.
    pub fn population_size(&self) -> usize {
        self.population_size
    }

    /// Returns amount of the fittest individuals carried to the next generation unchanged.
    pub fn elite_count(&self) -> usize {
        self.elite_count
    }

    /// Returns true if higher fitness means fitter candidate.
    pub fn is_natural(&self) -> bool {
        self.natural
    }

    /// Returns a zero based generation index. The initial population has index 0.
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// Returns the timer started at the beginning of the run.
    pub fn start_time(&self) -> &Timer {
        &self.start_time
    }

    /// Returns wall-clock time elapsed since the run started up to the snapshot creation.
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }
}
