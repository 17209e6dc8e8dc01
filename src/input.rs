use std::collections::HashSet;

use winit::keyboard::KeyCode;

use crate::layout::BoardLayout;
use crate::simulation::Position;

/// What the frame loop should do this tick
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Flip one tile
    Toggle(Position),
    /// Advance the simulation by one generation
    Step,
}

/// One poll's view of a button or key
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InputSample {
    /// Held at the moment of the poll
    pub down: bool,
    /// Went from up to down at least once since the previous poll
    pub pressed: bool,
}

/// Fires once per press: on a recorded press, or on an up-to-down change
/// between polls.
#[derive(Debug, Default)]
pub struct EdgeTrigger {
    was_down: bool,
}

impl EdgeTrigger {
    pub fn update(&mut self, sample: InputSample) -> bool {
        let fired = sample.pressed || (sample.down && !self.was_down);
        self.was_down = sample.down;
        fired
    }
}

/// Raw device state accumulated from window events between ticks.
///
/// Presses are recorded as they happen, so a release and re-press that both
/// land between two polls still count as a new press.
#[derive(Debug, Default)]
pub struct RawInput {
    /// Cursor position in logical pixels, `None` when outside the window
    cursor: Option<(f64, f64)>,
    button_down: bool,
    button_pressed: bool,
    keys_down: HashSet<KeyCode>,
    keys_pressed: HashSet<KeyCode>,
}

impl RawInput {
    pub fn set_cursor(&mut self, cursor: Option<(f64, f64)>) {
        self.cursor = cursor;
    }

    pub fn set_button(&mut self, down: bool) {
        if down && !self.button_down {
            self.button_pressed = true;
        }
        self.button_down = down;
    }

    /// Key repeats while held are not presses
    pub fn set_key(&mut self, key: KeyCode, down: bool) {
        if !down {
            self.keys_down.remove(&key);
        } else if self.keys_down.insert(key) {
            self.keys_pressed.insert(key);
        }
    }

    fn take_button(&mut self) -> InputSample {
        InputSample {
            down: self.button_down,
            pressed: std::mem::take(&mut self.button_pressed),
        }
    }

    fn take_key(&mut self, key: KeyCode) -> InputSample {
        InputSample {
            down: self.keys_down.contains(&key),
            pressed: self.keys_pressed.remove(&key),
        }
    }
}

/// Turns sampled input into edge-triggered commands.
pub struct InputMapper {
    layout: BoardLayout,
    step_key: KeyCode,
    pointer: EdgeTrigger,
    step: EdgeTrigger,
}

impl InputMapper {
    pub fn new(layout: BoardLayout, step_key: KeyCode) -> Self {
        Self {
            layout,
            step_key,
            pointer: EdgeTrigger::default(),
            step: EdgeTrigger::default(),
        }
    }

    /// Sample `input` once and return this tick's commands, toggles first.
    ///
    /// A new press that lands on no tile is consumed without a command.
    pub fn poll(&mut self, input: &mut RawInput) -> Vec<Command> {
        let mut commands = Vec::new();

        if self.pointer.update(input.take_button()) {
            if let Some(pos) = input.cursor.and_then(|(x, y)| self.layout.hit_test(x, y)) {
                commands.push(Command::Toggle(pos));
            }
        }

        if self.step.update(input.take_key(self.step_key)) {
            commands.push(Command::Step);
        }

        commands
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mapper() -> InputMapper {
        InputMapper::new(BoardLayout::new(10), KeyCode::KeyW)
    }

    /// Center of tile (0, 0) in the default layout
    const TILE_00: (f64, f64) = (47.0, 455.0);

    #[test]
    fn test_edge_trigger() {
        let held = |down| InputSample { down, pressed: false };
        let mut edge = EdgeTrigger::default();
        assert!(!edge.update(held(false)));
        assert!(edge.update(held(true)));
        assert!(!edge.update(held(true)));
        assert!(!edge.update(held(false)));
        assert!(edge.update(held(true)));
    }

    #[test]
    fn test_edge_trigger_fires_on_recorded_press_while_held() {
        let mut edge = EdgeTrigger::default();
        assert!(edge.update(InputSample { down: true, pressed: true }));
        // Released and pressed again between polls
        assert!(edge.update(InputSample { down: true, pressed: true }));
        assert!(!edge.update(InputSample { down: true, pressed: false }));
        // Pressed and released between polls
        assert!(edge.update(InputSample { down: false, pressed: true }));
    }

    #[test]
    fn test_held_button_toggles_once() {
        let mut mapper = mapper();
        let mut input = RawInput::default();
        input.set_cursor(Some(TILE_00));
        input.set_button(true);

        assert_eq!(mapper.poll(&mut input), vec![Command::Toggle(Position::new(0, 0))]);
        assert!(mapper.poll(&mut input).is_empty());
        assert!(mapper.poll(&mut input).is_empty());

        input.set_button(false);
        assert!(mapper.poll(&mut input).is_empty());

        input.set_button(true);
        assert_eq!(mapper.poll(&mut input), vec![Command::Toggle(Position::new(0, 0))]);
    }

    #[test]
    fn test_click_between_polls_registers() {
        let mut mapper = mapper();
        let mut input = RawInput::default();
        input.set_cursor(Some(TILE_00));
        input.set_button(true);
        input.set_button(false);

        assert_eq!(mapper.poll(&mut input), vec![Command::Toggle(Position::new(0, 0))]);
        assert!(mapper.poll(&mut input).is_empty());

        // A second quick click registers again
        input.set_button(true);
        input.set_button(false);
        assert_eq!(mapper.poll(&mut input), vec![Command::Toggle(Position::new(0, 0))]);
    }

    #[test]
    fn test_button_repress_within_one_tick() {
        let mut mapper = mapper();
        let mut input = RawInput::default();
        input.set_cursor(Some(TILE_00));
        input.set_button(true);
        assert_eq!(mapper.poll(&mut input), vec![Command::Toggle(Position::new(0, 0))]);

        input.set_button(false);
        input.set_button(true);
        assert_eq!(mapper.poll(&mut input), vec![Command::Toggle(Position::new(0, 0))]);
        assert!(mapper.poll(&mut input).is_empty());
    }

    #[test]
    fn test_key_repress_within_one_tick() {
        let mut mapper = mapper();
        let mut input = RawInput::default();
        input.set_key(KeyCode::KeyW, true);
        assert_eq!(mapper.poll(&mut input), vec![Command::Step]);

        input.set_key(KeyCode::KeyW, false);
        input.set_key(KeyCode::KeyW, true);
        assert_eq!(mapper.poll(&mut input), vec![Command::Step]);
        assert!(mapper.poll(&mut input).is_empty());
    }

    #[test]
    fn test_key_repeat_is_not_a_press() {
        let mut mapper = mapper();
        let mut input = RawInput::default();
        input.set_key(KeyCode::KeyW, true);
        assert_eq!(mapper.poll(&mut input), vec![Command::Step]);

        input.set_key(KeyCode::KeyW, true);
        input.set_key(KeyCode::KeyW, true);
        assert!(mapper.poll(&mut input).is_empty());
    }

    #[test]
    fn test_press_off_board_does_nothing() {
        let mut mapper = mapper();
        let mut input = RawInput::default();
        input.set_cursor(Some((250.0, 650.0)));
        input.set_button(true);
        assert!(mapper.poll(&mut input).is_empty());

        // Dragging onto a tile while held does not toggle it
        input.set_cursor(Some(TILE_00));
        assert!(mapper.poll(&mut input).is_empty());
    }

    #[test]
    fn test_press_without_cursor_does_nothing() {
        let mut mapper = mapper();
        let mut input = RawInput::default();
        input.set_button(true);
        assert!(mapper.poll(&mut input).is_empty());
    }

    #[test]
    fn test_held_step_key_steps_once() {
        let mut mapper = mapper();
        let mut input = RawInput::default();
        input.set_key(KeyCode::KeyW, true);

        assert_eq!(mapper.poll(&mut input), vec![Command::Step]);
        for _ in 0..5 {
            assert!(mapper.poll(&mut input).is_empty());
        }

        input.set_key(KeyCode::KeyW, false);
        assert!(mapper.poll(&mut input).is_empty());

        input.set_key(KeyCode::KeyW, true);
        assert_eq!(mapper.poll(&mut input), vec![Command::Step]);
    }

    #[test]
    fn test_other_keys_do_not_step() {
        let mut mapper = mapper();
        let mut input = RawInput::default();
        input.set_key(KeyCode::KeyS, true);
        input.set_key(KeyCode::Space, true);
        assert!(mapper.poll(&mut input).is_empty());
    }

    #[test]
    fn test_toggle_comes_before_step() {
        let mut mapper = mapper();
        let mut input = RawInput::default();
        input.set_cursor(Some(TILE_00));
        input.set_key(KeyCode::KeyW, true);
        input.set_button(true);

        assert_eq!(
            mapper.poll(&mut input),
            vec![Command::Toggle(Position::new(0, 0)), Command::Step]
        );
    }
}
