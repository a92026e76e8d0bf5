#[cfg(test)]
#[path = "../../tests/unit/evolution/observer_test.rs"]
mod observer_test;

use crate::population::PopulationSnapshot;
use crate::utils::InfoLogger;
use std::sync::{Arc, RwLock};

/// Receives a population snapshot once per generation, including generation zero.
///
/// Callbacks run on the thread which drives the evolution, so long running work here
/// slows the whole run down.
pub trait EvolutionObserver<T>: Send + Sync {
    /// Called after a generation is evaluated and ranked.
    fn population_update(&self, snapshot: &PopulationSnapshot<T>);
}

/// A registry of observers with copy on write semantics: mutation while a notification
/// round is in flight does not affect that round.
pub(crate) struct ObserverSet<T> {
    observers: RwLock<Arc<Vec<Arc<dyn EvolutionObserver<T>>>>>,
}

impl<T> Default for ObserverSet<T> {
    fn default() -> Self {
        Self { observers: RwLock::new(Arc::new(Vec::new())) }
    }
}

impl<T> ObserverSet<T> {
    /// Adds an observer unless the very same instance is already registered.
    pub fn add(&self, observer: Arc<dyn EvolutionObserver<T>>) {
        let mut guard = self.observers.write().expect("cannot lock observers");
        if guard.iter().any(|known| Arc::ptr_eq(known, &observer)) {
            return;
        }

        let mut observers = guard.as_ref().clone();
        observers.push(observer);
        *guard = Arc::new(observers);
    }

    /// Removes a previously added observer, comparing by instance identity.
    pub fn remove(&self, observer: &Arc<dyn EvolutionObserver<T>>) {
        let mut guard = self.observers.write().expect("cannot lock observers");
        let observers =
            guard.iter().filter(|known| !Arc::ptr_eq(known, observer)).cloned().collect::<Vec<_>>();
        *guard = Arc::new(observers);
    }

    /// Notifies the observers registered at the moment of the call.
    pub fn notify(&self, snapshot: &PopulationSnapshot<T>) {
        let observers = self.observers.read().expect("cannot lock observers").clone();
        observers.iter().for_each(|observer| observer.population_update(snapshot));
    }
}

/// An observer which writes a one line progress report to the injected logger.
pub struct EvolutionLogger {
    logger: InfoLogger,
    log_every: usize,
}

impl EvolutionLogger {
    /// Creates a new instance of `EvolutionLogger` reporting every generation.
    pub fn new(logger: InfoLogger) -> Self {
        Self::new_with_frequency(logger, 1)
    }

    /// Creates a new instance of `EvolutionLogger` reporting every `log_every` generations.
    pub fn new_with_frequency(logger: InfoLogger, log_every: usize) -> Self {
        assert_ne!(log_every, 0);
        Self { logger, log_every }
    }
}

impl<T> EvolutionObserver<T> for EvolutionLogger {
    fn population_update(&self, snapshot: &PopulationSnapshot<T>) {
        if snapshot.generation() % self.log_every == 0 {
            (self.logger)(&format!(
                "[{}s] generation {}: best={:.7}, mean={:.7}, stdev={:.7}",
                snapshot.start_time().elapsed_secs(),
                snapshot.generation(),
                snapshot.best_fitness(),
                snapshot.mean_fitness(),
                snapshot.fitness_stdev()
            ));
        }
    }
}
