//! Configuration for parallel search execution.

use crate::search::error::SearchError;
use std::time::Duration;

/// Configuration for parallel search execution.
#[derive(Debug, Clone)]
pub struct ParallelConfig {
    /// Upper bound on concurrently running worker threads.
    pub max_workers: usize,
    /// Stop once this many solutions are recorded (None = all).
    pub max_solutions: Option<usize>,
    /// How long one blocking wait on a queue lasts before the waiter
    /// re-checks the stop flag (workers) or worker liveness (coordinator).
    pub dequeue_timeout: Duration,
}

impl Default for ParallelConfig {
    fn default() -> Self {
        Self {
            max_workers: num_cpus::get(),
            max_solutions: None,
            dequeue_timeout: Duration::from_secs(1),
        }
    }
}

impl ParallelConfig {
    /// Set the worker cap. Clamped to at least one worker.
    pub fn with_workers(mut self, max_workers: usize) -> Self {
        self.max_workers = max_workers.max(1);
        self
    }

    /// Set the worker cap from an Option, keeping the default on None.
    pub fn with_workers_option(self, max_workers: Option<usize>) -> Self {
        match max_workers {
            Some(n) => self.with_workers(n),
            None => self,
        }
    }

    pub fn with_max_solutions(mut self, count: usize) -> Self {
        self.max_solutions = Some(count);
        self
    }

    pub fn with_max_solutions_option(mut self, count: Option<usize>) -> Self {
        self.max_solutions = count;
        self
    }

    pub fn with_dequeue_timeout(mut self, timeout: Duration) -> Self {
        self.dequeue_timeout = timeout;
        self
    }

    pub fn validate(&self) -> Result<(), SearchError> {
        if self.max_workers == 0 {
            return Err(SearchError::invalid("max_workers", "must be at least 1"));
        }
        if self.max_solutions == Some(0) {
            return Err(SearchError::invalid("max_solutions", "must be at least 1"));
        }
        if self.dequeue_timeout.is_zero() {
            return Err(SearchError::invalid("dequeue_timeout", "must be non-zero"));
        }
        Ok(())
    }
}
