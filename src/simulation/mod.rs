mod cell;
mod grid;

pub use cell::GpuTile;
pub use grid::{Grid, Position};
