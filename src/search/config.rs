//! Configuration types for search strategies

use crate::search::error::SearchError;
use crate::search::parallel::ParallelConfig;

/// Search strategy selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Algorithm {
    /// Plain exhaustive recursion, no deduplication
    Recursive,
    /// Single-threaded traversal with footprints and optional ceilings
    #[default]
    Iterative,
    /// Coordinator plus a pool of expansion workers
    Parallel,
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Algorithm::Recursive => write!(f, "recursive"),
            Algorithm::Iterative => write!(f, "iterative"),
            Algorithm::Parallel => write!(f, "parallel"),
        }
    }
}

impl std::str::FromStr for Algorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "recursive" | "rec" => Ok(Algorithm::Recursive),
            "iterative" | "iter" => Ok(Algorithm::Iterative),
            "parallel" | "par" => Ok(Algorithm::Parallel),
            _ => Err(format!(
                "Unknown algorithm: '{}'. Valid options: recursive, iterative, parallel",
                s
            )),
        }
    }
}

/// Order in which the iterative strategy drains its backlog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TraversalOrder {
    /// Most recently discovered node first (LIFO)
    #[default]
    DepthFirst,
    /// All nodes of one depth before any node of the next (FIFO)
    BreadthFirst,
}

impl std::fmt::Display for TraversalOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TraversalOrder::DepthFirst => write!(f, "depth-first"),
            TraversalOrder::BreadthFirst => write!(f, "breadth-first"),
        }
    }
}

impl std::str::FromStr for TraversalOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "dfs" | "depth-first" | "depth" => Ok(TraversalOrder::DepthFirst),
            "bfs" | "breadth-first" | "breadth" => Ok(TraversalOrder::BreadthFirst),
            _ => Err(format!(
                "Unknown traversal order: '{}'. Valid options: dfs, bfs",
                s
            )),
        }
    }
}

/// Configuration for the iterative strategy
#[derive(Debug, Clone, Default)]
pub struct IterativeConfig {
    /// DFS or BFS
    pub order: TraversalOrder,
    /// Nodes at this depth are not expanded (None = unbounded).
    /// `Some(0)` expands nothing.
    pub max_depth: Option<usize>,
    /// Stop as soon as this many solutions are recorded (None = all)
    pub max_solutions: Option<usize>,
}

impl IterativeConfig {
    pub fn with_order(mut self, order: TraversalOrder) -> Self {
        self.order = order;
        self
    }

    pub fn depth_first(self) -> Self {
        self.with_order(TraversalOrder::DepthFirst)
    }

    pub fn breadth_first(self) -> Self {
        self.with_order(TraversalOrder::BreadthFirst)
    }

    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }

    pub fn with_max_depth_option(mut self, depth: Option<usize>) -> Self {
        self.max_depth = depth;
        self
    }

    pub fn with_max_solutions(mut self, count: usize) -> Self {
        self.max_solutions = Some(count);
        self
    }

    pub fn with_max_solutions_option(mut self, count: Option<usize>) -> Self {
        self.max_solutions = count;
        self
    }

    pub fn validate(&self) -> Result<(), SearchError> {
        if self.max_solutions == Some(0) {
            return Err(SearchError::invalid("max_solutions", "must be at least 1"));
        }
        Ok(())
    }
}

/// Top-level configuration used by [`crate::search::search`]
#[derive(Debug, Clone, Default)]
pub struct SearchConfig {
    /// Strategy to run
    pub algorithm: Algorithm,
    /// Iterative-specific configuration
    pub iterative: IterativeConfig,
    /// Parallel-specific configuration
    pub parallel: ParallelConfig,
}

impl SearchConfig {
    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    pub fn with_iterative(mut self, iterative: IterativeConfig) -> Self {
        self.iterative = iterative;
        self
    }

    pub fn with_parallel(mut self, parallel: ParallelConfig) -> Self {
        self.parallel = parallel;
        self
    }
}
