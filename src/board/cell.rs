use crate::board::{Col, Digit, GroupRef, Row};
use crate::digit_set::DigitSet;
use crate::grid::Grid;
use std::fmt;

/// A single position on the board.
///
/// Cells are owned by the [`Grid`]; a cell keeps non-owning handles to
/// the three groups it belongs to and queries them to work out which
/// digits it could still take.
#[derive(Clone, Debug)]
pub struct Cell {
    row: Row,
    col: Col,
    value: Option<Digit>,
    // row group, column group, block group, in joining order
    groups: [GroupRef; 3],
    n_groups: u8,
}

impl Cell {
    pub(crate) fn new(row: Row, col: Col) -> Cell {
        Cell {
            row,
            col,
            value: None,
            groups: [GroupRef::new(0); 3],
            n_groups: 0,
        }
    }

    // Records membership in `group`. Called once per group during grid
    // construction, never afterwards.
    pub(crate) fn join(&mut self, group: GroupRef) {
        debug_assert!(self.n_groups < 3);
        self.groups[self.n_groups as usize] = group;
        self.n_groups += 1;
    }

    /// Returns the groups this cell belongs to: its row, column and
    /// block, in that order.
    pub fn groups(&self) -> &[GroupRef] {
        &self.groups[..self.n_groups as usize]
    }

    /// Returns the row this cell lies in.
    pub fn row(&self) -> Row {
        self.row
    }

    /// Returns the column this cell lies in.
    pub fn col(&self) -> Col {
        self.col
    }

    /// Returns the assigned digit, if any.
    pub fn value(&self) -> Option<Digit> {
        self.value
    }

    /// Assigns `digit` to this cell.
    ///
    /// The assignment is not checked against the current candidates. The
    /// solver only ever assigns digits it has just computed as available.
    pub fn set_value(&mut self, digit: Digit) {
        self.value = Some(digit);
    }

    /// Clears the assigned digit.
    pub fn clear_value(&mut self) {
        self.value = None;
    }

    /// Returns the digits this cell could still take: all digits minus
    /// those already used by its row, column and block.
    ///
    /// Returns the empty set for a cell that already holds a value. The
    /// result is recomputed on every call; group contents change
    /// constantly while solving.
    pub fn available_numbers(&self, grid: &Grid) -> DigitSet {
        if self.value.is_some() {
            return DigitSet::NONE;
        }
        let mut result = DigitSet::ALL;
        for &group in self.groups() {
            result -= grid.group(group).used_numbers(grid);
        }
        result
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "C{}{}", self.row.get(), self.col.get())
    }
}
