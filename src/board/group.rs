use crate::board::CellRef;
use crate::digit_set::DigitSet;
use crate::grid::Grid;

/// A constraint region of exactly nine cells: a row, a column or a 3×3
/// block. Each digit must appear exactly once per group in a solved
/// grid.
///
/// Groups hold non-owning handles to their member cells; the grid owns
/// both sides and wires the membership once at construction.
#[derive(Clone, Debug)]
pub struct Group {
    cells: [CellRef; 9],
    n_cells: u8,
}

impl Group {
    pub(crate) fn new() -> Group {
        Group {
            cells: [CellRef::new(0); 9],
            n_cells: 0,
        }
    }

    // Registers `cell` as a member. Called exactly once per (group, cell)
    // pair during grid construction.
    pub(crate) fn add_cell(&mut self, cell: CellRef) {
        debug_assert!(self.n_cells < 9);
        self.cells[self.n_cells as usize] = cell;
        self.n_cells += 1;
    }

    /// Returns the member cells, in the order they were added.
    pub fn cells(&self) -> &[CellRef] {
        &self.cells[..self.n_cells as usize]
    }

    /// Returns the set of digits already placed in this group.
    ///
    /// Recomputed on every call, like
    /// [`Cell::available_numbers`](crate::Cell::available_numbers).
    pub fn used_numbers(&self, grid: &Grid) -> DigitSet {
        let mut used = DigitSet::NONE;
        for &cell in self.cells() {
            if let Some(digit) = grid.cell(cell).value() {
                used.insert(digit);
            }
        }
        used
    }
}
