//! Types for cells, digits and groups on a sudoku board
mod cell;
mod digit;
mod group;
mod positions;

pub use self::{
    cell::Cell,
    digit::Digit,
    group::Group,
    positions::{Block, CellRef, Col, GroupKind, GroupRef, Row},
};
