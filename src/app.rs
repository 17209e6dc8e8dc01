use std::sync::Arc;
use std::time::{Duration, Instant};
use winit::application::ApplicationHandler;
use winit::event::{ElementState, MouseButton, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

use crate::config::{GRID_SIZE, STEP_KEY, TARGET_FPS, WINDOW_HEIGHT, WINDOW_WIDTH};
use crate::error::{AppError, Result};
use crate::game::Game;
use crate::gpu::{BoardRenderer, GpuContext, RenderParams, TileBuffers};
use crate::input::{InputMapper, RawInput};
use crate::layout::BoardLayout;

/// GPU objects created once the window exists
struct GpuState {
    gpu: GpuContext,
    buffers: TileBuffers,
    board: BoardRenderer,
}

/// Application state
pub struct App {
    window: Option<Arc<Window>>,
    renderer: Option<GpuState>,
    game: Game,
    layout: BoardLayout,
    mapper: InputMapper,
    input: RawInput,
    clock: FrameClock,
    fps_counter: FpsCounter,
    error: Option<AppError>,
}

impl App {
    pub fn new() -> Self {
        let layout = BoardLayout::new(GRID_SIZE);
        Self {
            window: None,
            renderer: None,
            game: Game::new(GRID_SIZE),
            layout,
            mapper: InputMapper::new(layout, STEP_KEY),
            input: RawInput::default(),
            clock: FrameClock::new(TARGET_FPS, Instant::now()),
            fps_counter: FpsCounter::new(),
            error: None,
        }
    }

    /// Consume the app after the event loop returns, surfacing any setup error
    pub fn finish(self) -> Result<()> {
        match self.error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    fn init(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        log::info!("Initializing Game of Life...");
        log::info!("Grid size: {}x{}", GRID_SIZE, GRID_SIZE);

        let window_attrs = Window::default_attributes()
            .with_title("Game of Life")
            .with_inner_size(winit::dpi::LogicalSize::new(WINDOW_WIDTH, WINDOW_HEIGHT))
            .with_resizable(false);

        let window = Arc::new(event_loop.create_window(window_attrs)?);

        log::info!("Creating GPU context...");
        let gpu = pollster::block_on(GpuContext::new(window.clone()))?;

        let buffers = TileBuffers::new(&gpu.device, GRID_SIZE);
        let board = BoardRenderer::new(&gpu.device, gpu.format(), &buffers);

        log::info!("Initialization complete!");
        log::info!("Controls:");
        log::info!("  Left click: Toggle tile");
        log::info!("  {:?}: Advance one generation", STEP_KEY);
        log::info!("  Escape: Quit");

        // Counts are valid before the first step
        self.game.tick(&[]);

        window.request_redraw();
        self.window = Some(window);
        self.renderer = Some(GpuState {
            gpu,
            buffers,
            board,
        });
        Ok(())
    }

    /// One simulation tick: sample input, then toggle/count/step
    fn tick(&mut self) {
        let commands = self.mapper.poll(&mut self.input);
        self.game.tick(&commands);
    }

    fn render(&mut self) {
        let (Some(window), Some(renderer)) = (&self.window, &self.renderer) else {
            return;
        };
        let gpu = &renderer.gpu;

        let params = RenderParams::new(&self.layout, window.scale_factor(), gpu.format().is_srgb());
        renderer.buffers.update_params(&gpu.queue, &params);
        renderer.buffers.upload_tiles(&gpu.queue, self.game.grid());

        let output = match gpu.surface.get_current_texture() {
            Ok(texture) => texture,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                gpu.reconfigure();
                return;
            }
            Err(e) => {
                log::error!("Surface error: {:?}", e);
                return;
            }
        };

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = gpu
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("frame-encoder"),
            });

        renderer.board.draw(&mut encoder, &view);

        gpu.queue.submit(std::iter::once(encoder.finish()));
        window.pre_present_notify();
        output.present();

        if let Some(fps) = self.fps_counter.tick() {
            window.set_title(&format!(
                "Game of Life - Generation {} - {} alive - {:.0} FPS",
                self.game.generation(),
                self.game.grid().live_count(),
                fps
            ));
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        if let Err(e) = self.init(event_loop) {
            log::error!("Initialization failed: {}", e);
            self.error = Some(e);
            event_loop.exit();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                log::info!("Close requested, exiting...");
                event_loop.exit();
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(key_code) = event.physical_key {
                    if key_code == KeyCode::Escape && event.state.is_pressed() {
                        log::info!("Escape pressed, exiting...");
                        event_loop.exit();
                    } else {
                        self.input.set_key(key_code, event.state.is_pressed());
                    }
                }
            }
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => {
                self.input.set_button(state == ElementState::Pressed);
            }
            WindowEvent::CursorMoved { position, .. } => {
                if let Some(window) = &self.window {
                    let logical = position.to_logical::<f64>(window.scale_factor());
                    self.input.set_cursor(Some((logical.x, logical.y)));
                }
            }
            WindowEvent::CursorLeft { .. } => {
                self.input.set_cursor(None);
            }
            WindowEvent::Resized(new_size) => {
                if let Some(renderer) = &mut self.renderer {
                    renderer.gpu.resize(new_size);
                }
            }
            WindowEvent::RedrawRequested => {
                self.render();
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            return;
        }

        if self.clock.due(Instant::now()) {
            self.tick();
            if let Some(window) = &self.window {
                window.request_redraw();
            }
        }

        event_loop.set_control_flow(ControlFlow::WaitUntil(self.clock.next_tick()));
    }
}

/// Fixed-rate tick schedule
struct FrameClock {
    period: Duration,
    next_tick: Instant,
}

impl FrameClock {
    fn new(fps: u32, start: Instant) -> Self {
        Self {
            period: Duration::from_secs(1) / fps.max(1),
            next_tick: start,
        }
    }

    /// True at most once per period. Missed ticks are dropped, not replayed.
    fn due(&mut self, now: Instant) -> bool {
        if now < self.next_tick {
            return false;
        }
        self.next_tick += self.period;
        if self.next_tick <= now {
            self.next_tick = now + self.period;
        }
        true
    }

    fn next_tick(&self) -> Instant {
        self.next_tick
    }
}

/// Simple FPS counter
struct FpsCounter {
    last_update: Instant,
    frame_count: u32,
}

impl FpsCounter {
    fn new() -> Self {
        Self {
            last_update: Instant::now(),
            frame_count: 0,
        }
    }

    /// Tick the counter, returns Some(fps) every second
    fn tick(&mut self) -> Option<f64> {
        self.frame_count += 1;
        let elapsed = self.last_update.elapsed();

        if elapsed.as_secs_f64() >= 1.0 {
            let fps = self.frame_count as f64 / elapsed.as_secs_f64();
            self.frame_count = 0;
            self.last_update = Instant::now();
            Some(fps)
        } else {
            None
        }
    }
}
