use wgpu::{Buffer, BufferUsages, Device, Queue};

use crate::config::{ALIVE_COLOR, DEAD_COLOR};
use crate::layout::BoardLayout;
use crate::simulation::{GpuTile, Grid};

/// Tile state and layout parameters for the render shader
pub struct TileBuffers {
    /// One `GpuTile` per cell, row-major
    pub tiles_buffer: Buffer,
    /// Uniform buffer for render parameters
    pub params_buffer: Buffer,
    tile_count: usize,
}

/// Render parameters passed to the render shader (64 bytes, aligned to 16)
#[repr(C)]
#[derive(Clone, Copy, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct RenderParams {
    // Board geometry in logical pixels (16 bytes)
    pub grid_size: u32,
    pub origin_x: f32,
    pub anchor_y: f32,
    pub pitch: f32,

    // (16 bytes)
    pub tile_size: f32,
    pub scale_factor: f32,
    pub _padding: [f32; 2],

    // Colors as RGBA in the surface's color space (32 bytes)
    pub alive_color: [f32; 4],
    pub dead_color: [f32; 4],
}

impl RenderParams {
    pub fn new(layout: &BoardLayout, scale_factor: f64, srgb_surface: bool) -> Self {
        Self {
            grid_size: layout.grid_size as u32,
            origin_x: layout.origin_x() as f32,
            anchor_y: layout.anchor_y as f32,
            pitch: layout.pitch() as f32,
            tile_size: layout.tile_size as f32,
            scale_factor: scale_factor as f32,
            _padding: [0.0, 0.0],
            alive_color: surface_color(ALIVE_COLOR, srgb_surface),
            dead_color: surface_color(DEAD_COLOR, srgb_surface),
        }
    }
}

/// Convert an 8-bit sRGB color to what the shader should output.
///
/// sRGB surfaces encode on write, so they want linear values.
pub fn surface_color(rgb: [u8; 3], srgb_surface: bool) -> [f32; 4] {
    let channel = |c: u8| {
        let c = c as f32 / 255.0;
        if !srgb_surface {
            c
        } else if c <= 0.04045 {
            c / 12.92
        } else {
            ((c + 0.055) / 1.055).powf(2.4)
        }
    };
    [channel(rgb[0]), channel(rgb[1]), channel(rgb[2]), 1.0]
}

impl TileBuffers {
    /// Create buffers sized for a `grid_size` x `grid_size` board
    pub fn new(device: &Device, grid_size: usize) -> Self {
        let tile_count = grid_size * grid_size;
        let buffer_size = (tile_count * std::mem::size_of::<GpuTile>()) as u64;

        let tiles_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("tiles-buffer"),
            size: buffer_size,
            usage: BufferUsages::STORAGE | BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let params_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("render-params-buffer"),
            size: std::mem::size_of::<RenderParams>() as u64,
            usage: BufferUsages::UNIFORM | BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        Self {
            tiles_buffer,
            params_buffer,
            tile_count,
        }
    }

    /// Upload the current alive flags
    pub fn upload_tiles(&self, queue: &Queue, grid: &Grid) {
        assert_eq!(grid.size() * grid.size(), self.tile_count, "Grid size mismatch");
        let tiles: Vec<GpuTile> = grid.cells().iter().map(GpuTile::from).collect();
        queue.write_buffer(&self.tiles_buffer, 0, bytemuck::cast_slice(&tiles));
    }

    /// Update render parameters
    pub fn update_params(&self, queue: &Queue, params: &RenderParams) {
        queue.write_buffer(&self.params_buffer, 0, bytemuck::bytes_of(params));
    }
}
