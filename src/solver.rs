//! The solving loop: naked-single propagation plus depth-first search
//! with full-grid string snapshots as the backtracking mechanism.
//!
//! Every choice point is captured as the grid's `number_string` at the
//! moment the choice was made, so a single stack entry suffices to
//! reconstruct that state. Propagation is re-derived from scratch after
//! each restore; the exploration order this produces is part of the
//! observable behavior and not to be optimized into incremental undo.

use crate::board::{CellRef, Digit};
use crate::errors::Unsolvable;
use crate::grid::Grid;
use log::{debug, trace};

// A saved choice point: the serialized grid at the moment the choice was
// made, plus the candidate to force after restoring it.
struct Retry {
    snapshot: String,
    cell: CellRef,
    digit: Digit,
}

impl Grid {
    /// Solves the grid in place.
    ///
    /// Naked singles are assigned until none remain. When propagation
    /// stalls, the search branches on the unassigned cell with the
    /// fewest candidates, pushing one retry entry per candidate, and
    /// resumes from the most recently pushed entry. The retry stack is
    /// shared across the whole search, so deeper failures unwind to
    /// earlier choices on their own.
    ///
    /// On success every cell holds a value and every group contains each
    /// digit exactly once.
    ///
    /// # Errors
    /// Returns [`Unsolvable`] once the retry stack is exhausted while
    /// the grid is still stuck. The grid is left in the last state the
    /// search visited.
    pub fn solve(&mut self) -> Result<(), Unsolvable> {
        let mut retries: Vec<Retry> = Vec::new();
        loop {
            while self.solve_one_square() {}
            if self.is_solved() {
                return Ok(());
            }
            if self.is_stuck() {
                debug!("backtracking ({} retries left)", retries.len());
                self.guess(&mut retries)?;
            } else {
                let cell = self.branch_cell();
                for digit in self.cell(cell).available_numbers(self) {
                    retries.push(Retry {
                        snapshot: self.number_string(),
                        cell,
                        digit,
                    });
                }
                self.guess(&mut retries)?;
            }
        }
    }

    /// Assigns the first cell with exactly one candidate, scanning in
    /// row-major order, and short-circuits. Returns whether an
    /// assignment was made.
    ///
    /// Calling this repeatedly until it returns `false` is the
    /// propagation half of the solver; on its own it solves easy
    /// puzzles completely.
    pub fn solve_one_square(&mut self) -> bool {
        for cell in CellRef::all() {
            let candidates = self.cell(cell).available_numbers(self);
            if let Some(digit) = candidates.unique() {
                trace!("put {} at {}", digit, self.cell(cell));
                self.cell_mut(cell).set_value(digit);
                return true;
            }
        }
        false
    }

    // Restores the most recent choice point and forces its candidate.
    // An empty retry stack means the search space is exhausted.
    fn guess(&mut self, retries: &mut Vec<Retry>) -> Result<(), Unsolvable> {
        let Retry {
            snapshot,
            cell,
            digit,
        } = retries.pop().ok_or(Unsolvable)?;
        self.parse(&snapshot)
            .expect("snapshots always contain 81 cells");
        trace!("guessing {} at {}", digit, self.cell(cell));
        self.cell_mut(cell).set_value(digit);
        Ok(())
    }

    // Unassigned cell with the fewest candidates. `min_by_key` returns
    // the first minimum, so ties go to the earlier cell in row-major
    // order.
    fn branch_cell(&self) -> CellRef {
        CellRef::all()
            .filter(|&cell| self.cell(cell).value().is_none())
            .min_by_key(|&cell| self.cell(cell).available_numbers(self).len())
            .expect("an unsolved grid has unassigned cells")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Col, Row};

    #[test]
    fn solve_one_square_picks_the_first_naked_single() {
        // top row missing only its 9, bottom row missing only its 1
        let mut puzzle = String::from("12345678.");
        puzzle.push_str(&".".repeat(63));
        puzzle.push_str("9234567.8");

        let mut grid = Grid::new();
        grid.parse(&puzzle).unwrap();

        assert!(grid.solve_one_square());
        let first = grid.cell_at(Row::new(0), Col::new(8));
        assert_eq!(first.value(), Some(Digit::new(9)));

        assert!(grid.solve_one_square());
        let second = grid.cell_at(Row::new(8), Col::new(7));
        assert_eq!(second.value(), Some(Digit::new(1)));
    }

    #[test]
    fn solve_one_square_ignores_cells_with_multiple_candidates() {
        let mut grid = Grid::new();
        grid.parse(&".".repeat(81)).unwrap();
        assert!(!grid.solve_one_square());
    }
}
