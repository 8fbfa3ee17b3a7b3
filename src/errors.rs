#[cfg(doc)]
use crate::Grid;

/// Error for [`Grid::solve`]: the search space is exhausted and the grid
/// still contains a cell with no legal value.
#[derive(Debug, thiserror::Error)]
#[error("no solution found")]
pub struct Unsolvable;

/// Error for [`Grid::parse`]. Contains the number of cells found before
/// the input ran out.
#[derive(Debug, thiserror::Error)]
#[error("puzzle contains {0} cells instead of the required 81")]
pub struct NotEnoughCells(pub usize);
