use std::time::{Duration, Instant};

/// Implements a wall-clock timer used to track run start time and elapsed time.
#[derive(Clone, Debug)]
pub struct Timer {
    start: Instant,
}

impl Timer {
    /// Starts a new timer.
    pub fn start() -> Self {
        Self { start: Instant::now() }
    }

    /// Returns elapsed time as duration.
    pub fn elapsed(&self) -> Duration {
        Instant::now() - self.start
    }

    /// Returns elapsed time in seconds.
    pub fn elapsed_secs(&self) -> u64 {
        self.elapsed().as_secs()
    }
}
