//! The N-Queens puzzle
//!
//! Queens are placed one row at a time; a state holds the column of the
//! queen in each filled row. Successors place a queen in the next row on
//! every column not attacked by an earlier queen.

use crate::search::Backtrackable;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NQueens {
    size: usize,
    queens: Vec<usize>,
}

impl NQueens {
    /// An empty `size` x `size` board.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            queens: Vec::new(),
        }
    }

    /// A board with queens at `queens[row]` for the first rows.
    /// Returns `None` if any placement is off the board or attacked.
    pub fn with_queens(size: usize, queens: &[usize]) -> Option<Self> {
        let mut board = Self::new(size);
        for &col in queens {
            if board.queens.len() >= size || col >= size || !board.is_safe(col) {
                return None;
            }
            board.queens.push(col);
        }
        Some(board)
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Column of the queen in each filled row
    pub fn queens(&self) -> &[usize] {
        &self.queens
    }

    /// Whether a queen in the next row at `col` is safe from every placed queen.
    fn is_safe(&self, col: usize) -> bool {
        let row = self.queens.len();
        self.queens
            .iter()
            .enumerate()
            .all(|(r, &c)| c != col && row - r != c.abs_diff(col))
    }

    /// Render the board with `Q` for queens and `.` for empty squares.
    pub fn render(&self) -> String {
        let mut s = String::with_capacity(self.size * (self.size + 1));
        for row in 0..self.size {
            for col in 0..self.size {
                let queen = self.queens.get(row) == Some(&col);
                s.push(if queen { 'Q' } else { '.' });
            }
            s.push('\n');
        }
        s
    }
}

impl Backtrackable for NQueens {
    fn expand(&self) -> Vec<Self> {
        if self.queens.len() >= self.size {
            return Vec::new();
        }

        (0..self.size)
            .filter(|&col| self.is_safe(col))
            .map(|col| {
                let mut queens = self.queens.clone();
                queens.push(col);
                Self {
                    size: self.size,
                    queens,
                }
            })
            .collect()
    }

    fn is_solution(&self) -> bool {
        self.size > 0 && self.queens.len() == self.size
    }
}
