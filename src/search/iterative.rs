//! Single-threaded traversal with an explicit backlog
//!
//! The backlog is a `VecDeque` drained from the back. Depth-first pushes
//! children to the back (LIFO); breadth-first pushes them to the front, which
//! makes the same pop a FIFO. Popped states are recorded in the footprint set
//! once their successors have been classified, and a footprinted state is
//! never admitted to the backlog or expanded again within one call.
//!
//! Successors that are solutions go into the solution set and are never
//! expanded. Initial states are only expanded, not classified.

use crate::search::config::{Algorithm, IterativeConfig, TraversalOrder};
use crate::search::error::SearchError;
use crate::search::result::{SearchResult, SearchStatistics};
use crate::search::state::{Backtrackable, SearchNode};
use std::collections::{HashSet, VecDeque};
use std::time::Instant;
use tracing::{debug, trace};

/// Search everything reachable from `states` for solutions.
///
/// Returns early, with exactly `max_solutions` solutions, once that ceiling
/// is reached. Which solutions make the cut depends on the traversal order.
pub fn iterative_search<S, I>(
    states: I,
    config: &IterativeConfig,
) -> Result<SearchResult<S>, SearchError>
where
    S: Backtrackable,
    I: IntoIterator<Item = S>,
{
    config.validate()?;

    let start_time = Instant::now();
    let mut statistics = SearchStatistics::new(Algorithm::Iterative);

    let mut backlog: VecDeque<SearchNode<S>> = states.into_iter().map(SearchNode::root).collect();
    let mut footprints: HashSet<S> = HashSet::new();
    let mut solutions: HashSet<S> = HashSet::new();

    debug!(
        order = %config.order,
        initial = backlog.len(),
        max_depth = ?config.max_depth,
        max_solutions = ?config.max_solutions,
        "starting iterative search"
    );

    while let Some(current) = backlog.pop_back() {
        statistics.observe_backlog(backlog.len() + 1);
        trace!(
            backlog = backlog.len() + 1,
            footprints = footprints.len(),
            "iterative search progress"
        );

        // Children of a node at the ceiling would exceed it
        if config.max_depth.is_some_and(|max| current.depth >= max) {
            continue;
        }

        // Admitted twice before either copy was expanded
        if footprints.contains(&current.state) {
            continue;
        }

        statistics.expansions += 1;
        for next in current.state.expand() {
            if next.is_solution() {
                if solutions.insert(next) && reached(config.max_solutions, solutions.len()) {
                    statistics.footprints = footprints.len();
                    statistics.early_terminated = true;
                    statistics.elapsed_time = start_time.elapsed();
                    debug!(solutions = solutions.len(), "solution limit reached");
                    return Ok(SearchResult::new(solutions, statistics));
                }
            } else if !footprints.contains(&next) {
                let child = current.child(next);
                match config.order {
                    TraversalOrder::DepthFirst => backlog.push_back(child),
                    TraversalOrder::BreadthFirst => backlog.push_front(child),
                }
            }
        }

        footprints.insert(current.state);
    }

    statistics.footprints = footprints.len();
    statistics.elapsed_time = start_time.elapsed();
    debug!(
        solutions = solutions.len(),
        expansions = statistics.expansions,
        "iterative search finished"
    );

    Ok(SearchResult::new(solutions, statistics))
}

fn reached(limit: Option<usize>, found: usize) -> bool {
    limit.is_some_and(|max| found >= max)
}
