//! Plain recursive exhaustive search
//!
//! No footprints, no depth bound and no solution ceiling: every path is
//! followed until it reaches a solution or a state without successors. A
//! cycle never terminates and very deep graphs exhaust the call stack, so
//! this is a baseline for validating the other strategies on small problems.

use crate::search::state::Backtrackable;
use std::collections::HashSet;

/// Return every solution reachable from `state`.
///
/// A solution state is returned as-is and not expanded further.
pub fn recursive_search<S: Backtrackable>(state: &S) -> HashSet<S> {
    let mut solutions = HashSet::new();
    let mut expansions = 0;
    collect(state, &mut solutions, &mut expansions);
    solutions
}

/// Recursive step shared with the dispatcher, which also wants the
/// expansion count.
pub(crate) fn collect<S: Backtrackable>(
    state: &S,
    solutions: &mut HashSet<S>,
    expansions: &mut u64,
) {
    if state.is_solution() {
        solutions.insert(state.clone());
        return;
    }

    *expansions += 1;
    for next in state.expand() {
        collect(&next, solutions, expansions);
    }
}
