mod buffers;
mod context;
mod render;

pub use buffers::{RenderParams, TileBuffers};
pub use context::GpuContext;
pub use render::BoardRenderer;
