//! Typed handles for cells and groups.
//!
//! Cells and groups refer to each other constantly during candidate
//! computation. The back-references are plain indices into the grid's
//! arrays, wrapped in newtypes so a cell handle can't be used where a
//! group handle is expected. The grid stays the sole owner of both.
#![allow(missing_docs)]

use crate::consts::{BLOCK_OFFSET, COL_OFFSET, ROW_OFFSET};

macro_rules! define_handles (
    ($( $(#[$attr:meta])* pub $name:ident : $limit:expr ),* $(,)*) => {
        $(
            $(#[$attr])*
            #[derive(Copy, Clone, Eq, PartialEq, PartialOrd, Ord, Debug, Hash)]
            pub struct $name(u8);

            impl $name {
                pub fn new(num: u8) -> Self {
                    debug_assert!(num < $limit);
                    $name(num)
                }

                pub fn new_checked(num: u8) -> Option<Self> {
                    if num < $limit {
                        Some($name(num))
                    } else {
                        None
                    }
                }

                pub fn get(self) -> u8 {
                    self.0
                }

                pub fn as_index(self) -> usize {
                    self.0 as _
                }

                pub fn all() -> impl Iterator<Item = Self> {
                    (0..$limit).map(Self::new)
                }
            }
        )*
    };
);

define_handles!(
    /// Handle of one of the 81 cells, counted row-major.
    pub CellRef: 81,
    /// Handle of one of the 27 groups: rows, then columns, then blocks.
    pub GroupRef: 27,
    /// A row index, topmost row is 0.
    pub Row: 9,
    /// A column index, leftmost column is 0.
    pub Col: 9,
    /// A block index, numbered left to right, top to bottom.
    pub Block: 9,
);

impl CellRef {
    /// Returns the handle of the cell at `row`/`col`.
    pub fn from_coords(row: Row, col: Col) -> Self {
        CellRef::new(row.get() * 9 + col.get())
    }

    /// Returns the row this cell lies in.
    pub fn row(self) -> Row {
        Row::new(self.0 / 9)
    }

    /// Returns the column this cell lies in.
    pub fn col(self) -> Col {
        Col::new(self.0 % 9)
    }

    /// Returns the block this cell lies in.
    pub fn block(self) -> Block {
        Block::new(self.row().get() / 3 * 3 + self.col().get() / 3)
    }
}

/// The kind of constraint region a group covers.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum GroupKind {
    Row(Row),
    Col(Col),
    Block(Block),
}

impl GroupRef {
    /// Returns the handle of the group covering `row`.
    pub fn of_row(row: Row) -> Self {
        GroupRef::new(ROW_OFFSET + row.get())
    }

    /// Returns the handle of the group covering `col`.
    pub fn of_col(col: Col) -> Self {
        GroupRef::new(COL_OFFSET + col.get())
    }

    /// Returns the handle of the group covering `block`.
    pub fn of_block(block: Block) -> Self {
        GroupRef::new(BLOCK_OFFSET + block.get())
    }

    /// Returns which kind of region this group covers.
    pub fn categorize(self) -> GroupKind {
        debug_assert!(self.0 < 27);
        match self.0 {
            0..=8 => GroupKind::Row(Row::new(self.0)),
            9..=17 => GroupKind::Col(Col::new(self.0 - COL_OFFSET)),
            _ => GroupKind::Block(Block::new(self.0 - BLOCK_OFFSET)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_coordinates() {
        let cell = CellRef::new(40);
        assert_eq!(cell.row(), Row::new(4));
        assert_eq!(cell.col(), Col::new(4));
        assert_eq!(cell.block(), Block::new(4));
        assert_eq!(CellRef::from_coords(Row::new(4), Col::new(4)), cell);
    }

    #[test]
    fn categorize_splits_groups_by_offset() {
        assert_eq!(GroupRef::new(0).categorize(), GroupKind::Row(Row::new(0)));
        assert_eq!(GroupRef::new(12).categorize(), GroupKind::Col(Col::new(3)));
        assert_eq!(GroupRef::new(26).categorize(), GroupKind::Block(Block::new(8)));
    }
}
