use backtracker::problems::{Graph, GraphState, NQueens};
use backtracker::search::{
    Backtrackable, IterativeConfig, ParallelConfig, iterative_search, parallel_search,
    recursive_search,
};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::collections::{HashMap, HashSet, VecDeque};
use std::time::Duration;

fn parallel_config() -> ParallelConfig {
    ParallelConfig::default()
        .with_workers(4)
        .with_dequeue_timeout(Duration::from_millis(20))
}

/// A random DAG: edges only go from lower to higher node ids, so every
/// strategy (including plain recursion) terminates.
fn random_dag(seed: u64, nodes: usize) -> Graph {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut builder = Graph::builder();

    for from in 0..nodes {
        let mut successors = Vec::new();
        for to in (from + 1)..nodes {
            if rng.random_bool(0.15) {
                successors.push(to.to_string());
            }
        }
        builder = builder.edge(&from.to_string(), successors);

        if from > 0 && rng.random_bool(0.2) {
            builder = builder.solution(&from.to_string());
        }
    }

    builder.build()
}

/// Shortest distance from `start` to every node, following only
/// non-solution nodes (solutions are never expanded).
fn distances(start: &GraphState) -> HashMap<String, usize> {
    let mut dist = HashMap::new();
    let mut queue = VecDeque::new();
    dist.insert(start.name().to_string(), 0);
    queue.push_back(start.clone());

    while let Some(state) = queue.pop_front() {
        let d = dist[state.name()];
        for next in state.expand() {
            if dist.contains_key(next.name()) {
                continue;
            }
            dist.insert(next.name().to_string(), d + 1);
            if !next.is_solution() {
                queue.push_back(next);
            }
        }
    }
    dist
}

#[test]
fn test_concrete_scenario() {
    let graph = Graph::builder()
        .edge("A", ["B", "C"])
        .edge("B", ["D"])
        .solution("C")
        .solution("D")
        .build();
    let a = graph.state("A");

    assert_eq!(Graph::names(&recursive_search(&a)), vec!["C", "D"]);

    let dfs = iterative_search([a.clone()], &IterativeConfig::default().depth_first()).unwrap();
    assert_eq!(Graph::names(&dfs.solutions), vec!["C", "D"]);

    let bfs = iterative_search([a.clone()], &IterativeConfig::default().breadth_first()).unwrap();
    assert_eq!(Graph::names(&bfs.solutions), vec!["C", "D"]);

    let par = parallel_search([a], &parallel_config()).unwrap();
    assert_eq!(Graph::names(&par.solutions), vec!["C", "D"]);
}

#[test]
fn test_strategies_agree_on_random_dags() {
    for seed in 0..20 {
        let graph = random_dag(seed, 30);
        let root = graph.state("0");

        let expected = Graph::names(&recursive_search(&root));

        let dfs = iterative_search([root.clone()], &IterativeConfig::default().depth_first())
            .unwrap();
        let bfs = iterative_search([root.clone()], &IterativeConfig::default().breadth_first())
            .unwrap();
        let par = parallel_search([root], &parallel_config()).unwrap();

        assert_eq!(Graph::names(&dfs.solutions), expected, "dfs, seed {}", seed);
        assert_eq!(Graph::names(&bfs.solutions), expected, "bfs, seed {}", seed);
        assert_eq!(Graph::names(&par.solutions), expected, "parallel, seed {}", seed);
    }
}

#[test]
fn test_each_state_expanded_at_most_once() {
    for seed in 0..10 {
        let graph = random_dag(seed, 25);
        let root = graph.state("0");

        for config in [
            IterativeConfig::default().depth_first(),
            IterativeConfig::default().breadth_first(),
        ] {
            graph.reset_expansions();
            iterative_search([root.clone()], &config).unwrap();
            for node in 0..25 {
                assert!(
                    graph.expansions(&node.to_string()) <= 1,
                    "{} expanded node {} twice (seed {})",
                    config.order,
                    node,
                    seed
                );
            }
        }

        graph.reset_expansions();
        parallel_search([root], &parallel_config()).unwrap();
        for node in 0..25 {
            assert!(graph.expansions(&node.to_string()) <= 1);
        }
    }
}

#[test]
fn test_depth_ceiling_bounds_solutions() {
    for seed in 0..10 {
        let graph = random_dag(seed, 30);
        let root = graph.state("0");
        let dist = distances(&root);

        for max_depth in 0..4 {
            let config = IterativeConfig::default()
                .breadth_first()
                .with_max_depth(max_depth);
            let result = iterative_search([root.clone()], &config).unwrap();
            for solution in &result.solutions {
                assert!(dist[solution.name()] <= max_depth);
            }
        }
    }
}

#[test]
fn test_max_depth_zero_on_non_solution() {
    let config = IterativeConfig::default().with_max_depth(0);
    let result = iterative_search([NQueens::new(4)], &config).unwrap();
    assert!(result.is_empty());
}

#[test]
fn test_solution_ceiling_returns_exactly_k() {
    for k in [1, 7, 50] {
        for config in [
            IterativeConfig::default().depth_first(),
            IterativeConfig::default().breadth_first(),
        ] {
            let result = iterative_search([NQueens::new(8)], &config.with_max_solutions(k)).unwrap();
            assert_eq!(result.len(), k);
            assert!(result.solutions.iter().all(|s| s.is_solution()));
        }
    }
}

#[test]
fn test_reruns_are_idempotent() {
    let first = parallel_search([NQueens::new(6)], &parallel_config())
        .unwrap()
        .into_solutions();
    let second = parallel_search([NQueens::new(6)], &parallel_config())
        .unwrap()
        .into_solutions();
    assert_eq!(first, second);

    let iterative: HashSet<NQueens> = iterative_search([NQueens::new(6)], &IterativeConfig::default())
        .unwrap()
        .into_solutions();
    assert_eq!(first, iterative);
}

#[test]
fn test_nqueens_counts() {
    let expected = [(4, 2), (5, 10), (6, 4), (7, 40), (8, 92)];
    for (size, count) in expected {
        let result = iterative_search([NQueens::new(size)], &IterativeConfig::default()).unwrap();
        assert_eq!(result.len(), count, "{}-queens", size);
    }
}

#[test]
fn test_partial_boards_as_initial_states() {
    // Every 6-queens solution starts in column 1, 2, 3 or 4
    let starts: Vec<NQueens> = (0..6)
        .filter_map(|col| NQueens::with_queens(6, &[col]))
        .collect();

    let result = parallel_search(starts, &parallel_config()).unwrap();
    assert_eq!(result.len(), 4);
}
