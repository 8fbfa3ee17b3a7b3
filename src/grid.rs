use crate::board::{Block, Cell, CellRef, Col, Digit, Group, GroupRef, Row};
use crate::errors::NotEnoughCells;
use crate::helper::{CellArray, GroupArray};
use std::fmt;
use std::str::FromStr;

/// The 9×9 board together with the solving engine operating on it.
///
/// A grid owns its 81 [`Cell`]s and 27 [`Group`]s; the two sides only
/// refer to each other through handles. [`parse`](Grid::parse) can be
/// called any number of times to load a new position into the same grid,
/// which is also how the solver restores earlier states while
/// backtracking.
#[derive(Clone, Debug)]
pub struct Grid {
    cells: CellArray<Cell>,
    groups: GroupArray<Group>,
}

impl Grid {
    /// Creates an empty grid with all group memberships wired up.
    pub fn new() -> Grid {
        let mut grid = Grid {
            cells: CellArray(std::array::from_fn(|idx| {
                let cell = CellRef::new(idx as u8);
                Cell::new(cell.row(), cell.col())
            })),
            groups: GroupArray(std::array::from_fn(|_| Group::new())),
        };
        grid.define_groups();
        grid
    }

    fn define_groups(&mut self) {
        for row in Row::all() {
            let members = Col::all().map(move |col| CellRef::from_coords(row, col));
            self.define_group(GroupRef::of_row(row), members);
        }
        for col in Col::all() {
            let members = Row::all().map(move |row| CellRef::from_coords(row, col));
            self.define_group(GroupRef::of_col(col), members);
        }
        for block in Block::all() {
            let base_row = block.get() / 3 * 3;
            let base_col = block.get() % 3 * 3;
            let members = (0..3).flat_map(move |row_offset| {
                (0..3).map(move |col_offset| {
                    CellRef::from_coords(
                        Row::new(base_row + row_offset),
                        Col::new(base_col + col_offset),
                    )
                })
            });
            self.define_group(GroupRef::of_block(block), members);
        }
    }

    // Mutual wiring: the group records the cell, the cell records the group.
    fn define_group(&mut self, group: GroupRef, members: impl IntoIterator<Item = CellRef>) {
        for cell in members {
            self.groups[group].add_cell(cell);
            self.cells[cell].join(group);
        }
    }

    /// Loads a puzzle into the grid, overwriting every cell.
    ///
    /// Line breaks are stripped first; every other character stands for
    /// one cell in row-major order. `1`-`9` assign a digit, any other
    /// character (`0`, `.`, `_`, space, …) leaves the cell empty.
    /// Characters past the 81st cell are ignored.
    ///
    /// # Errors
    /// Returns [`NotEnoughCells`] if the input runs out before 81 cells
    /// were read. The grid contents are unspecified afterwards.
    pub fn parse(&mut self, input: &str) -> Result<&mut Grid, NotEnoughCells> {
        let mut chars = input.chars().filter(|&ch| ch != '\n' && ch != '\r');
        for cell in CellRef::all() {
            let ch = match chars.next() {
                Some(ch) => ch,
                None => return Err(NotEnoughCells(cell.as_index())),
            };
            match Digit::from_char(ch) {
                Some(digit) => self.cells[cell].set_value(digit),
                None => self.cells[cell].clear_value(),
            }
        }
        Ok(self)
    }

    /// Serializes the grid as 81 characters in row-major order, one digit
    /// or `.` per cell.
    ///
    /// This is the canonical snapshot format: [`parse`](Grid::parse)
    /// accepts it back unchanged, and the solver captures backtracking
    /// states with it.
    pub fn number_string(&self) -> String {
        self.cells
            .iter()
            .map(|cell| cell.value().map_or('.', Digit::to_char))
            .collect()
    }

    /// Returns the cell behind a handle.
    pub fn cell(&self, cell: CellRef) -> &Cell {
        &self.cells[cell]
    }

    pub(crate) fn cell_mut(&mut self, cell: CellRef) -> &mut Cell {
        &mut self.cells[cell]
    }

    /// Returns the cell at `row`/`col`.
    pub fn cell_at(&self, row: Row, col: Col) -> &Cell {
        self.cell(CellRef::from_coords(row, col))
    }

    /// Returns the group behind a handle.
    pub fn group(&self, group: GroupRef) -> &Group {
        &self.groups[group]
    }

    /// Checks whether every cell has a value.
    ///
    /// Group consistency is not re-validated here; the solver never
    /// assigns a digit that one of the cell's groups already contains.
    pub fn is_solved(&self) -> bool {
        self.cells.iter().all(|cell| cell.value().is_some())
    }

    /// Checks whether some unassigned cell has no candidates left, i.e.
    /// the current state is a dead end.
    pub fn is_stuck(&self) -> bool {
        self.cells
            .iter()
            .any(|cell| cell.value().is_none() && cell.available_numbers(self).is_empty())
    }
}

impl Default for Grid {
    fn default() -> Grid {
        Grid::new()
    }
}

impl FromStr for Grid {
    type Err = NotEnoughCells;

    fn from_str(s: &str) -> Result<Grid, NotEnoughCells> {
        let mut grid = Grid::new();
        grid.parse(s)?;
        Ok(grid)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for cell in CellRef::all() {
            match (cell.row().get(), cell.col().get()) {
                (0, 0) => {}
                (3, 0) | (6, 0) => write!(f, "\n\n")?,
                (_, 0) => writeln!(f)?,
                (_, 3) | (_, 6) => write!(f, "  ")?,
                _ => write!(f, " ")?,
            }
            match self.cells[cell].value() {
                Some(digit) => write!(f, "{}", digit)?,
                None => write!(f, ".")?,
            }
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
mod serde_impls {
    use super::Grid;
    use serde::de::{Deserializer, Error, Unexpected, Visitor};
    use serde::{Deserialize, Serialize, Serializer};
    use std::fmt;

    impl Serialize for Grid {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.serialize_str(&self.number_string())
        }
    }

    impl<'de> Deserialize<'de> for Grid {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Grid, D::Error> {
            struct GridVisitor;

            impl<'de> Visitor<'de> for GridVisitor {
                type Value = Grid;

                fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                    f.write_str("a string of at least 81 cell characters")
                }

                fn visit_str<E: Error>(self, s: &str) -> Result<Grid, E> {
                    s.parse()
                        .map_err(|_| E::invalid_value(Unexpected::Str(s), &self))
                }
            }

            deserializer.deserialize_str(GridVisitor)
        }
    }
}
