use crate::simulation::cell::Cell;

/// Moore neighborhood offsets as (dx, dy)
const NEIGHBOR_OFFSETS: [(i32, i32); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, 1),
    (1, 1),
    (1, -1),
    (-1, -1),
];

/// Grid-space coordinate. `x` is the column, `y` is the row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

/// Square board of cells stored row-major. The size is fixed at construction.
pub struct Grid {
    size: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a `size` x `size` grid with every cell dead
    pub fn new(size: usize) -> Self {
        assert!(size > 0, "grid size must be at least 1");
        Self {
            size,
            cells: vec![Cell::default(); size * size],
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Cells in row-major order (row 0 first)
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// All positions in row-major order
    pub fn positions(&self) -> impl Iterator<Item = Position> {
        let size = self.size as i32;
        (0..size).flat_map(move |y| (0..size).map(move |x| Position::new(x, y)))
    }

    fn index(&self, pos: Position) -> Option<usize> {
        let size = self.size as i32;
        if (0..size).contains(&pos.x) && (0..size).contains(&pos.y) {
            Some(pos.y as usize * self.size + pos.x as usize)
        } else {
            None
        }
    }

    /// The cell at `pos`, or `None` outside the board
    pub fn get(&self, pos: Position) -> Option<&Cell> {
        self.index(pos).map(|i| &self.cells[i])
    }

    pub fn is_alive(&self, pos: Position) -> Option<bool> {
        self.get(pos).map(Cell::is_alive)
    }

    /// Flip the cell at `pos`. Returns false (and does nothing) outside the board.
    pub fn toggle(&mut self, pos: Position) -> bool {
        match self.index(pos) {
            Some(i) => {
                self.cells[i].toggle();
                true
            }
            None => false,
        }
    }

    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_alive()).count()
    }

    /// Refresh every cell's cached live-neighbor count.
    ///
    /// Neighbors off the board count as dead. Must run after this frame's
    /// toggles and before [`Grid::iterate`].
    pub fn count_neighbors(&mut self) {
        let counts: Vec<u8> = self
            .positions()
            .map(|pos| {
                NEIGHBOR_OFFSETS
                    .iter()
                    .filter(|&&(dx, dy)| self.is_alive(pos.offset(dx, dy)) == Some(true))
                    .count() as u8
            })
            .collect();

        for (cell, count) in self.cells.iter_mut().zip(counts) {
            cell.neighbor_count = count;
        }
    }

    /// Advance one generation using the counts cached by the last
    /// [`Grid::count_neighbors`] pass.
    ///
    /// Each cell reads only its own cached count, so the in-place update is
    /// independent of visiting order.
    pub fn iterate(&mut self) {
        for cell in &mut self.cells {
            cell.alive = cell.next_state();
        }
    }
}
