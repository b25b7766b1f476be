//! Backtracking search over implicit state graphs.
//!
//! Implement [`search::Backtrackable`] for a problem's state type, then run
//! one of the strategies in [`search`]:
//!
//! ```
//! use backtracker::problems::NQueens;
//! use backtracker::search::{IterativeConfig, iterative_search};
//!
//! let result = iterative_search([NQueens::new(8)], &IterativeConfig::default()).unwrap();
//! assert_eq!(result.solutions.len(), 92);
//! ```

pub mod problems;
pub mod search;
