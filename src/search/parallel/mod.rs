//! Parallel search: one coordinator thread plus a pool of expansion workers.
//!
//! # Architecture
//!
//! The parallel search system consists of:
//! - A **coordinator** that owns footprints, solutions and all counters, and
//!   classifies every successor the workers produce
//! - Up to `max_workers` **workers**, spawned on demand, that only expand
//! - A **channel system**: a backlog queue of nodes to expand and a results
//!   queue of worker messages
//! - A **shared stop flag** so workers can quit without another message
//!
//! # Example
//!
//! ```
//! use backtracker::problems::NQueens;
//! use backtracker::search::parallel::{ParallelConfig, parallel_search};
//!
//! let config = ParallelConfig::default().with_workers(4);
//! let result = parallel_search([NQueens::new(6)], &config).unwrap();
//! assert_eq!(result.solutions.len(), 4);
//! ```

pub mod channel;
pub mod config;
pub mod coordinator;

pub use config::ParallelConfig;
pub use coordinator::parallel_search;
