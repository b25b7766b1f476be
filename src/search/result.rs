//! Search result types and statistics

use crate::search::config::Algorithm;
use std::collections::HashSet;
use std::time::Duration;

/// Result of a search operation
#[derive(Debug, Clone)]
pub struct SearchResult<S> {
    /// Every solution state found
    pub solutions: HashSet<S>,
    /// Statistics from the search
    pub statistics: SearchStatistics,
}

impl<S> SearchResult<S> {
    pub fn new(solutions: HashSet<S>, statistics: SearchStatistics) -> Self {
        Self {
            solutions,
            statistics,
        }
    }

    /// Drop the statistics and keep the solution set
    pub fn into_solutions(self) -> HashSet<S> {
        self.solutions
    }

    pub fn len(&self) -> usize {
        self.solutions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.solutions.is_empty()
    }
}

/// Statistics from a search operation. Observability only.
#[derive(Debug, Clone, Default)]
pub struct SearchStatistics {
    /// Strategy used for the search
    pub algorithm: Algorithm,
    /// Total time spent searching
    pub elapsed_time: Duration,
    /// Number of `expand` calls
    pub expansions: u64,
    /// Size of the footprint set when the search ended
    pub footprints: usize,
    /// Largest backlog observed
    pub peak_backlog: usize,
    /// Worker threads started (parallel only)
    pub workers_spawned: usize,
    /// Whether a solution-count ceiling cut the search short
    pub early_terminated: bool,
}

impl SearchStatistics {
    pub fn new(algorithm: Algorithm) -> Self {
        Self {
            algorithm,
            ..Default::default()
        }
    }

    pub(crate) fn observe_backlog(&mut self, size: usize) {
        self.peak_backlog = self.peak_backlog.max(size);
    }

    /// Get expansions per second
    pub fn throughput(&self) -> f64 {
        let secs = self.elapsed_time.as_secs_f64();
        if secs == 0.0 {
            0.0
        } else {
            self.expansions as f64 / secs
        }
    }

    /// Format statistics as a human-readable string
    pub fn format_summary(&self) -> String {
        let mut s = String::new();
        s.push_str(&format!("Algorithm: {}\n", self.algorithm));
        s.push_str(&format!("Time: {:.2?}\n", self.elapsed_time));
        s.push_str(&format!("Expansions: {}\n", self.expansions));
        s.push_str(&format!(
            "Throughput: {:.0} expansions/sec\n",
            self.throughput()
        ));

        if self.algorithm != Algorithm::Recursive {
            s.push_str(&format!("Footprints: {}\n", self.footprints));
            s.push_str(&format!("Peak backlog: {}\n", self.peak_backlog));
        }

        if self.algorithm == Algorithm::Parallel {
            s.push_str(&format!("Workers spawned: {}\n", self.workers_spawned));
        }

        if self.early_terminated {
            s.push_str("Stopped early: solution limit reached\n");
        }

        s
    }
}
