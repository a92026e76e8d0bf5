#[cfg(test)]
#[path = "../../tests/unit/termination/generation_count_test.rs"]
mod generation_count_test;

use super::*;

/// A termination condition which stops evolution once a fixed amount of generations has
/// been processed. The initial population counts as generation zero, so a limit of one
/// stops right after the initial population is evaluated.
pub struct GenerationCount {
    limit: usize,
}

impl GenerationCount {
    /// Creates a new instance of `GenerationCount` with a positive generation limit.
    pub fn new(limit: usize) -> Self {
        assert_ne!(limit, 0);
        Self { limit }
    }
}

impl<T> TerminationCondition<T> for GenerationCount {
    fn should_terminate(&self, snapshot: &PopulationSnapshot<T>) -> bool {
        snapshot.generation() + 1 >= self.limit
    }
}
