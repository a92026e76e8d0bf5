#[cfg(test)]
#[path = "../../tests/unit/termination/user_abort_test.rs"]
mod user_abort_test;

use super::*;
use std::sync::atomic::{AtomicBool, Ordering};

/// A termination condition which lets external code stop evolution between generations.
/// Unlike a quota driven interruption, an abort terminates the run cleanly and gets
/// reported as a satisfied condition.
#[derive(Default)]
pub struct UserAbort {
    aborted: AtomicBool,
}

impl UserAbort {
    /// Creates a new instance of `UserAbort` in a non aborted state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes the condition fire at the next generation check.
    pub fn abort(&self) {
        self.aborted.store(true, Ordering::Relaxed);
    }

    /// Returns true if `abort` has been called.
    pub fn is_aborted(&self) -> bool {
        self.aborted.load(Ordering::Relaxed)
    }

    /// Clears the aborted state so the condition can be used for another run.
    pub fn reset(&self) {
        self.aborted.store(false, Ordering::Relaxed);
    }
}

impl<T> TerminationCondition<T> for UserAbort {
    fn should_terminate(&self, _snapshot: &PopulationSnapshot<T>) -> bool {
        self.is_aborted()
    }
}
