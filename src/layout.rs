use crate::config::{BOARD_ANCHOR_Y, TILE_PADDING, TILE_SIZE, VIEWPORT_WIDTH};
use crate::simulation::Position;

/// Pixel bounding box of one tile, origin at its top-left corner
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScreenRect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl ScreenRect {
    /// Inclusive on every edge, so border pixels belong to the tile
    pub fn contains(&self, px: f64, py: f64) -> bool {
        let (x, y) = (self.x as f64, self.y as f64);
        px >= x && px <= x + self.width as f64 && py >= y && py <= y + self.height as f64
    }
}

/// Maps grid positions to screen rectangles.
///
/// The board is centered horizontally in the viewport. Row 0 sits at
/// `anchor_y` and each following row is one tile pitch above the last.
#[derive(Clone, Copy, Debug)]
pub struct BoardLayout {
    pub grid_size: usize,
    pub viewport_width: i32,
    pub tile_size: i32,
    pub padding: i32,
    pub anchor_y: i32,
}

impl BoardLayout {
    /// Layout for a `grid_size` board using the configured tile geometry
    pub fn new(grid_size: usize) -> Self {
        Self {
            grid_size,
            viewport_width: VIEWPORT_WIDTH,
            tile_size: TILE_SIZE,
            padding: TILE_PADDING,
            anchor_y: BOARD_ANCHOR_Y,
        }
    }

    /// Distance between the origins of adjacent tiles
    pub fn pitch(&self) -> i32 {
        self.tile_size + self.padding
    }

    /// Width of the whole board, without trailing padding
    pub fn board_width(&self) -> i32 {
        self.grid_size as i32 * self.pitch() - self.padding
    }

    /// Left edge of column 0
    pub fn origin_x(&self) -> i32 {
        (self.viewport_width - self.board_width()).div_euclid(2)
    }

    pub fn rect(&self, pos: Position) -> ScreenRect {
        ScreenRect {
            x: self.origin_x() + pos.x * self.pitch(),
            y: self.anchor_y - pos.y * self.pitch(),
            width: self.tile_size,
            height: self.tile_size,
        }
    }

    /// First tile (row-major, row 0 first) whose rect contains the point
    pub fn hit_test(&self, px: f64, py: f64) -> Option<Position> {
        let size = self.grid_size as i32;
        (0..size)
            .flat_map(|y| (0..size).map(move |x| Position::new(x, y)))
            .find(|&pos| self.rect(pos).contains(px, py))
    }
}
