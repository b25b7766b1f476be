//! Search strategies over implicit state graphs
//!
//! Every strategy works against the [`Backtrackable`] contract:
//! - Recursive: exhaustive recursion, no deduplication, a trusted baseline
//! - Iterative: explicit DFS/BFS backlog with footprints, optional depth and
//!   solution-count ceilings
//! - Parallel: a coordinator thread classifying successors produced by a
//!   capped, on-demand pool of expansion workers

pub mod config;
pub mod error;
pub mod iterative;
pub mod parallel;
pub mod recursive;
pub mod result;
pub mod state;

pub use config::{Algorithm, IterativeConfig, SearchConfig, TraversalOrder};
pub use error::SearchError;
pub use iterative::iterative_search;
pub use parallel::{ParallelConfig, parallel_search};
pub use recursive::recursive_search;
pub use result::{SearchResult, SearchStatistics};
pub use state::{Backtrackable, SearchNode};

use std::collections::HashSet;
use std::time::Instant;
use tracing::debug;

/// Run the strategy selected by `config.algorithm`.
///
/// The recursive strategy has no options; it is run once per initial state
/// and the results are merged.
pub fn search<S, I>(states: I, config: &SearchConfig) -> Result<SearchResult<S>, SearchError>
where
    S: Backtrackable,
    I: IntoIterator<Item = S>,
{
    match config.algorithm {
        Algorithm::Recursive => {
            let start_time = Instant::now();
            let mut statistics = SearchStatistics::new(Algorithm::Recursive);
            let mut solutions = HashSet::new();

            debug!("starting recursive search");
            for state in states {
                recursive::collect(&state, &mut solutions, &mut statistics.expansions);
            }
            statistics.elapsed_time = start_time.elapsed();
            debug!(solutions = solutions.len(), "recursive search finished");

            Ok(SearchResult::new(solutions, statistics))
        }
        Algorithm::Iterative => iterative_search(states, &config.iterative),
        Algorithm::Parallel => parallel_search(states, &config.parallel),
    }
}
