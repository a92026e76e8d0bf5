#[cfg(test)]
#[path = "../../tests/unit/utils/parallel_test.rs"]
mod parallel_test;

use lazy_static::lazy_static;
use rayon::prelude::*;
use rayon::{ThreadPool as RayonThreadPool, ThreadPoolBuilder};
use std::sync::Arc;

/// Represents a thread pool wrapper.
pub struct ThreadPool {
    inner: RayonThreadPool,
}

impl ThreadPool {
    /// Creates a new instance of `ThreadPool` with amount of threads specified.
    pub fn new(num_threads: usize) -> Self {
        Self {
            inner: ThreadPoolBuilder::new().num_threads(num_threads).build().expect("cannot build a thread pool"),
        }
    }

    /// Executes given operation on thread pool.
    pub fn execute<OP, R>(&self, op: OP) -> R
    where
        OP: FnOnce() -> R + Send,
        R: Send,
    {
        self.inner.install(op)
    }
}

/// Maps collection and collects results into vector in parallel, keeping index order.
pub fn parallel_collect<T, F, R>(source: &[T], map_op: F) -> Vec<R>
where
    T: Send + Sync,
    F: Fn(&T) -> R + Sync + Send,
    R: Send,
{
    source.par_iter().map(map_op).collect()
}

/// Returns amount of logical CPUs.
pub fn get_cpus() -> usize {
    num_cpus::get()
}

lazy_static! {
    static ref SHARED_THREAD_POOL: Arc<ThreadPool> = Arc::new(ThreadPool::new(get_cpus()));
}

/// Returns a process wide thread pool sized to the amount of logical CPUs.
/// The pool is created lazily on first use and lives for the rest of the process.
pub fn shared_thread_pool() -> Arc<ThreadPool> {
    SHARED_THREAD_POOL.clone()
}
