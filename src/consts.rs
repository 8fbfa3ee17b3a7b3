// Board size constants, shared across modules
pub(crate) const N_CELLS: usize = 81;
pub(crate) const N_GROUPS: usize = 27;

// group numbering: rows, then columns, then blocks
pub(crate) const ROW_OFFSET: u8 = 0;
pub(crate) const COL_OFFSET: u8 = 9;
pub(crate) const BLOCK_OFFSET: u8 = 18;
