// A collection of internal helper types
// like arrays that can only be indexed by the right handle structs

use crate::board::{CellRef, GroupRef};
use crate::consts::{N_CELLS, N_GROUPS};
use std::ops::{Deref, DerefMut, Index, IndexMut};

#[derive(Clone, Debug)]
/// Container with one slot for each cell.
pub(crate) struct CellArray<T>(pub [T; N_CELLS]);

impl<T> Deref for CellArray<T> {
    type Target = [T; N_CELLS];
    #[inline(always)]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T> DerefMut for CellArray<T> {
    #[inline(always)]
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<T> Index<CellRef> for CellArray<T> {
    type Output = T;

    #[inline(always)]
    fn index(&self, idx: CellRef) -> &Self::Output {
        &self.0[idx.as_index()]
    }
}

impl<T> IndexMut<CellRef> for CellArray<T> {
    #[inline(always)]
    fn index_mut(&mut self, idx: CellRef) -> &mut Self::Output {
        &mut self.0[idx.as_index()]
    }
}

///////////////////////////////
#[derive(Clone, Debug)]
/// Container with one slot for each group.
pub(crate) struct GroupArray<T>(pub [T; N_GROUPS]);

impl<T> Index<GroupRef> for GroupArray<T> {
    type Output = T;

    #[inline(always)]
    fn index(&self, idx: GroupRef) -> &Self::Output {
        &self.0[idx.as_index()]
    }
}

impl<T> IndexMut<GroupRef> for GroupArray<T> {
    #[inline(always)]
    fn index_mut(&mut self, idx: GroupRef) -> &mut Self::Output {
        &mut self.0[idx.as_index()]
    }
}
