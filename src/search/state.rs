//! The state contract every searchable value implements

use std::hash::Hash;

/// A configuration in an implicit state graph.
///
/// `Eq` and `Hash` are used only to deduplicate states (footprints and
/// solution sets), never to order them. `expand` must depend on the state's
/// own data only; returning the state itself is allowed, the search engines
/// guard against re-expanding it.
pub trait Backtrackable: Clone + Eq + Hash + Send + 'static {
    /// States reachable in one step. May be empty.
    fn expand(&self) -> Vec<Self>;

    /// Whether this state satisfies the goal predicate.
    fn is_solution(&self) -> bool;
}

/// A scheduling record: a state plus its distance from an initial state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchNode<S> {
    pub depth: usize,
    pub state: S,
}

impl<S> SearchNode<S> {
    /// A node for an initial state (depth 0).
    pub fn root(state: S) -> Self {
        Self { depth: 0, state }
    }

    /// A node one expansion step below `self`.
    pub fn child(&self, state: S) -> Self {
        Self {
            depth: self.depth + 1,
            state,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_depths() {
        let root = SearchNode::root("A");
        assert_eq!(root.depth, 0);

        let child = root.child("B");
        assert_eq!(child.depth, 1);
        assert_eq!(child.state, "B");
        assert_eq!(child.child("C").depth, 2);
    }
}
