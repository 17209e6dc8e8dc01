use crate::input::Command;
use crate::simulation::Grid;

/// Board state plus the generation counter, advanced once per frame.
pub struct Game {
    grid: Grid,
    generation: u64,
}

impl Game {
    pub fn new(size: usize) -> Self {
        Self {
            grid: Grid::new(size),
            generation: 0,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Run one frame: apply toggles, refresh neighbor counts, then step if asked.
    pub fn tick(&mut self, commands: &[Command]) {
        let mut step = false;
        let mut toggled = Vec::new();
        for command in commands {
            match *command {
                Command::Toggle(pos) => {
                    if self.grid.toggle(pos) {
                        toggled.push(pos);
                    }
                }
                Command::Step => step = true,
            }
        }

        self.grid.count_neighbors();

        for pos in toggled {
            if let Some(cell) = self.grid.get(pos) {
                log::debug!(
                    "Toggled tile ({}, {}) -> {} with {} live neighbors",
                    pos.x,
                    pos.y,
                    if cell.is_alive() { "alive" } else { "dead" },
                    cell.neighbor_count()
                );
            }
        }

        if step {
            self.grid.iterate();
            self.generation += 1;
            log::debug!(
                "Generation {}: {} live cells",
                self.generation,
                self.grid.live_count()
            );
        }
    }
}
