//! Ready-made problems implementing [`crate::search::Backtrackable`]

pub mod graph;
pub mod nqueens;

pub use graph::{Graph, GraphBuilder, GraphState};
pub use nqueens::NQueens;
