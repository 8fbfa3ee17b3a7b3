#![warn(missing_docs)]
//! A backtracking sudoku solver.
//!
//! ## Overview
//!
//! The board is modelled the way a person works a puzzle: 81 cells, each
//! belonging to three groups (its row, its column and its 3×3 block),
//! with every cell able to tell which digits its groups still allow.
//! Solving alternates between assigning *naked singles* (cells with
//! exactly one candidate left) and, when no single remains, guessing on
//! the cell with the fewest candidates. Guesses are backtracked through
//! full-grid string snapshots rather than incremental undo.
//!
//! ## Example
//!
//! ```
//! use nonet::Grid;
//!
//! let puzzle = "\
//! 53..7....
//! 6..195...
//! .98....6.
//! 8...6...3
//! 4..8.3..1
//! 7...2...6
//! .6....28.
//! ...419..5
//! ....8..79";
//!
//! let mut grid = Grid::new();
//! grid.parse(puzzle)?.solve()?;
//! assert_eq!(
//!     grid.number_string(),
//!     "534678912672195348198342567859761423426853791713924856961537284287419635345286179",
//! );
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod board;
mod consts;
mod digit_set;
mod errors;
mod grid;
mod helper;
mod solver;

pub use crate::board::{Block, Cell, CellRef, Col, Digit, Group, GroupKind, GroupRef, Row};
pub use crate::digit_set::DigitSet;
pub use crate::errors::{NotEnoughCells, Unsolvable};
pub use crate::grid::Grid;
