#[cfg(test)]
#[path = "../../tests/unit/termination/elapsed_time_test.rs"]
mod elapsed_time_test;

use super::*;
use std::time::Duration;

/// A termination condition which stops evolution after a fixed wall-clock duration,
/// measured from the start of the run.
pub struct ElapsedTime {
    max_duration: Duration,
}

impl ElapsedTime {
    /// Creates a new instance of `ElapsedTime` with a non zero duration.
    pub fn new(max_duration: Duration) -> Self {
        assert!(!max_duration.is_zero());
        Self { max_duration }
    }
}

impl<T> TerminationCondition<T> for ElapsedTime {
    fn should_terminate(&self, snapshot: &PopulationSnapshot<T>) -> bool {
        snapshot.elapsed() >= self.max_duration
    }
}
