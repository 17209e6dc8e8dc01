mod app;
mod config;
mod error;
mod game;
mod gpu;
mod input;
mod layout;
mod simulation;

use winit::event_loop::EventLoop;

use crate::app::App;
use crate::error::Result;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let event_loop = EventLoop::new()?;
    let mut app = App::new();
    event_loop.run_app(&mut app)?;

    app.finish()
}
