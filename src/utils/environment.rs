use crate::utils::{DefaultRandom, Random};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// A type which provides the way to log messages.
pub type InfoLogger = Arc<dyn Fn(&str) + Send + Sync>;

/// Specifies a computational quota for the evolution run. The main purpose is to allow
/// to stop the generation loop in reaction to external events such as user cancellation.
pub trait Quota: Send + Sync {
    /// Returns true when computation should be stopped.
    fn is_reached(&self) -> bool;
}

/// A quota which is reached once it gets signalled from another place, e.g. a signal
/// handler or an observer.
#[derive(Default)]
pub struct SignalQuota {
    signalled: AtomicBool,
}

impl SignalQuota {
    /// Creates a new instance of `SignalQuota` in a non signalled state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Signals the quota: the next poll reports it as reached.
    pub fn signal(&self) {
        self.signalled.store(true, Ordering::Relaxed);
    }
}

impl Quota for SignalQuota {
    fn is_reached(&self) -> bool {
        self.signalled.load(Ordering::Relaxed)
    }
}

/// Keeps track of environment specific information which influences algorithm behavior.
pub struct Environment {
    /// A source of random generators.
    pub random: Arc<dyn Random>,
    /// An optional quota polled once per generation.
    pub quota: Option<Arc<dyn Quota>>,
    /// A logger for progress messages.
    pub logger: InfoLogger,
}

impl Environment {
    /// Creates a new instance of `Environment`.
    pub fn new(random: Arc<dyn Random>, quota: Option<Arc<dyn Quota>>, logger: InfoLogger) -> Self {
        Self { random, quota, logger }
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new(Arc::new(DefaultRandom::default()), None, Arc::new(|msg| println!("{msg}")))
    }
}
