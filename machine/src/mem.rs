use std::cmp::max;

use crate::error::{Error, Result};

/// Convert an address to an index, rejecting negative addresses.
pub(crate) fn cast(addr: i64) -> Result<usize> {
    usize::try_from(addr).map_err(|_| Error::NegativeAddress { addr })
}

/// The memory of a computer.
///
/// Cells past the end of the loaded program read as zero. Writing past the
/// end extends the storage up to and including the written address.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Memory {
    cells: Vec<i64>,
}

impl Memory {
    pub(crate) fn new(program: Vec<i64>) -> Self {
        Self { cells: program }
    }

    /// The number of allocated cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Read the cell at the given address.
    pub fn get(&self, addr: i64) -> Result<i64> {
        Ok(self.fetch(cast(addr)?))
    }

    /// Mutable access to the cell at the given address, extending the
    /// storage if the address is past the end.
    pub fn get_mut(&mut self, addr: i64) -> Result<&mut i64> {
        let addr = cast(addr)?;
        self.cells.resize(max(self.cells.len(), addr + 1), 0);
        Ok(&mut self.cells[addr])
    }

    /// The allocated cells in address order.
    pub fn iter(&self) -> impl Iterator<Item = i64> + '_ {
        self.cells.iter().copied()
    }

    /// Read a cell by raw index, zero if unallocated.
    pub(crate) fn fetch(&self, ptr: usize) -> i64 {
        self.cells.get(ptr).copied().unwrap_or(0)
    }
}
