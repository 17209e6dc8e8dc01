/// A single board tile.
///
/// `neighbor_count` is a cache filled in by [`Grid::count_neighbors`] and read
/// by [`Grid::iterate`]. Only the grid writes it.
///
/// [`Grid::count_neighbors`]: crate::simulation::Grid::count_neighbors
/// [`Grid::iterate`]: crate::simulation::Grid::iterate
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Cell {
    pub(super) alive: bool,
    pub(super) neighbor_count: u8,
}

impl Cell {
    pub fn is_alive(&self) -> bool {
        self.alive
    }

    /// Live Moore neighbors as of the last neighbor-count pass
    pub fn neighbor_count(&self) -> u8 {
        self.neighbor_count
    }

    pub(super) fn toggle(&mut self) {
        self.alive = !self.alive;
    }

    /// Next state under B3/S23. Exactly two neighbors keeps the current state.
    pub(super) fn next_state(&self) -> bool {
        match self.neighbor_count {
            0 | 1 => false,
            2 => self.alive,
            3 => true,
            _ => false,
        }
    }
}

/// GPU-side tile, one per cell in row-major order.
///
/// Layout: 4 bytes, `alive` is 1 or 0. Storage buffer arrays of u32 need no
/// extra padding.
#[repr(C)]
#[derive(Clone, Copy, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct GpuTile {
    pub alive: u32,
}

impl From<&Cell> for GpuTile {
    fn from(cell: &Cell) -> Self {
        Self {
            alive: cell.alive as u32,
        }
    }
}
