//! The termination module contains criteria which define when the evolution should stop.

use crate::population::PopulationSnapshot;

mod elapsed_time;
pub use self::elapsed_time::ElapsedTime;

mod generation_count;
pub use self::generation_count::GenerationCount;

mod stagnation;
pub use self::stagnation::Stagnation;

mod target_fitness;
pub use self::target_fitness::TargetFitness;

mod user_abort;
pub use self::user_abort::UserAbort;

/// A predicate consulted by the engine once per generation, after the population snapshot
/// is built and observers are notified. Implementations should behave as pure functions
/// of the snapshot. The engine reports every satisfied condition in the order the
/// conditions were supplied.
pub trait TerminationCondition<T>: Send + Sync {
    /// Returns true if the evolution should stop given the latest population snapshot.
    fn should_terminate(&self, snapshot: &PopulationSnapshot<T>) -> bool;
}
