//! Search over an explicit, named adjacency list
//!
//! Useful for small hand-written graphs. Every `expand` call is logged in
//! order, so callers can check how often and in which order a search visits
//! states.

use crate::search::Backtrackable;
use std::collections::{HashMap, HashSet};
use std::hash::{Hash, Hasher};
use std::sync::{Arc, Mutex, MutexGuard};

#[derive(Debug)]
struct GraphInner {
    edges: HashMap<String, Vec<String>>,
    solutions: HashSet<String>,
    expansions: Mutex<Vec<String>>,
}

impl GraphInner {
    fn expansions(&self) -> MutexGuard<'_, Vec<String>> {
        // The log stays meaningful even if a panicking expansion poisoned the lock
        self.expansions
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// An immutable adjacency list with a set of solution nodes.
#[derive(Debug, Clone)]
pub struct Graph {
    inner: Arc<GraphInner>,
}

/// Builder for [`Graph`].
#[derive(Debug, Default)]
pub struct GraphBuilder {
    edges: HashMap<String, Vec<String>>,
    solutions: HashSet<String>,
}

impl GraphBuilder {
    /// Add successors of `from`. Repeated calls append.
    pub fn edge<I, T>(mut self, from: &str, to: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.edges
            .entry(from.to_string())
            .or_default()
            .extend(to.into_iter().map(Into::into));
        self
    }

    /// Mark `node` as satisfying the goal predicate.
    pub fn solution(mut self, node: &str) -> Self {
        self.solutions.insert(node.to_string());
        self
    }

    pub fn build(self) -> Graph {
        Graph {
            inner: Arc::new(GraphInner {
                edges: self.edges,
                solutions: self.solutions,
                expansions: Mutex::new(Vec::new()),
            }),
        }
    }
}

impl Graph {
    pub fn builder() -> GraphBuilder {
        GraphBuilder::default()
    }

    /// The state for `node`. Nodes without edges are valid dead ends.
    pub fn state(&self, node: &str) -> GraphState {
        GraphState {
            graph: Arc::clone(&self.inner),
            node: node.to_string(),
        }
    }

    /// How many times `node` has been expanded.
    pub fn expansions(&self, node: &str) -> usize {
        self.inner
            .expansions()
            .iter()
            .filter(|name| name.as_str() == node)
            .count()
    }

    /// Expansions across all nodes.
    pub fn total_expansions(&self) -> usize {
        self.inner.expansions().len()
    }

    /// Node names in the order they were expanded.
    pub fn expansion_order(&self) -> Vec<String> {
        self.inner.expansions().clone()
    }

    pub fn reset_expansions(&self) {
        self.inner.expansions().clear();
    }

    /// Sorted node names, for comparing solution sets.
    pub fn names<'a, I>(states: I) -> Vec<String>
    where
        I: IntoIterator<Item = &'a GraphState>,
    {
        let mut names: Vec<String> = states.into_iter().map(|s| s.node.clone()).collect();
        names.sort();
        names
    }
}

/// One node of a [`Graph`]. Identity is the node name.
#[derive(Clone)]
pub struct GraphState {
    graph: Arc<GraphInner>,
    node: String,
}

impl GraphState {
    pub fn name(&self) -> &str {
        &self.node
    }
}

impl std::fmt::Debug for GraphState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "GraphState({})", self.node)
    }
}

impl PartialEq for GraphState {
    fn eq(&self, other: &Self) -> bool {
        self.node == other.node
    }
}

impl Eq for GraphState {}

impl Hash for GraphState {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.node.hash(state);
    }
}

impl Backtrackable for GraphState {
    fn expand(&self) -> Vec<Self> {
        self.graph.expansions().push(self.node.clone());

        self.graph
            .edges
            .get(&self.node)
            .map(|next| {
                next.iter()
                    .map(|node| GraphState {
                        graph: Arc::clone(&self.graph),
                        node: node.clone(),
                    })
                    .collect()
            })
            .unwrap_or_default()
    }

    fn is_solution(&self) -> bool {
        self.graph.solutions.contains(&self.node)
    }
}
