use winit::keyboard::KeyCode;

/// Board is GRID_SIZE x GRID_SIZE tiles
pub const GRID_SIZE: usize = 10;

/// Window dimensions (logical pixels)
pub const WINDOW_WIDTH: u32 = 500;
pub const WINDOW_HEIGHT: u32 = 700;

/// Width the board is centered in
pub const VIEWPORT_WIDTH: i32 = 500;

// ============================================
// Tile Layout
// ============================================

/// Side length of a tile in pixels
pub const TILE_SIZE: i32 = 40;

/// Gap between adjacent tiles
pub const TILE_PADDING: i32 = 5;

/// Top edge of row 0. Higher rows are stacked above it.
pub const BOARD_ANCHOR_Y: i32 = 435;

// ============================================
// Frame Pacing & Controls
// ============================================

pub const TARGET_FPS: u32 = 60;

/// Advances the simulation by one generation per press
pub const STEP_KEY: KeyCode = KeyCode::KeyW;

// ============================================
// Colors (sRGB)
// ============================================

pub const ALIVE_COLOR: [u8; 3] = [235, 216, 52];
pub const DEAD_COLOR: [u8; 3] = [66, 66, 66];
pub const BACKGROUND_COLOR: [u8; 3] = [31, 31, 31];
