use macroquad::input::KeyCode;

use crate::config::CELL_SIZE;
use crate::domain::{Cell, Grid};

/// Raw input, in pixel coordinates of the canvas
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    Quit,
    KeyDown(KeyCode),
    MouseDown { x: f32, y: f32 },
    MouseUp,
    MouseMotion { x: f32, y: f32 },
}

/// A command for the main loop, applied at most once per frame
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Intent {
    TogglePlay,
    Step,
    Clear,
    Reset,
    ToggleShow,
    ToggleGrid,
}

impl Intent {
    /// Every key with a binding, in the order same-frame presses are replayed
    pub const BOUND_KEYS: [KeyCode; 6] = [
        KeyCode::G,
        KeyCode::S,
        KeyCode::Space,
        KeyCode::P,
        KeyCode::C,
        KeyCode::R,
    ];

    /// Keyboard bindings
    pub fn from_key(key: KeyCode) -> Option<Self> {
        match key {
            KeyCode::G => Some(Intent::ToggleGrid),
            KeyCode::S => Some(Intent::ToggleShow),
            KeyCode::Space => Some(Intent::TogglePlay),
            KeyCode::P => Some(Intent::Step),
            KeyCode::C => Some(Intent::Clear),
            KeyCode::R => Some(Intent::Reset),
            _ => None,
        }
    }
}

/// Mouse painting state
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    /// A button is held; (x, y) is the last cell under the pointer and
    /// `paint` the value captured from the first cell touched.
    Dragging { x: usize, y: usize, paint: Cell },
}

/// Turns input events into one pending intent and applies drag painting
/// straight to the grid.
#[derive(Debug, Default)]
pub struct InputController {
    pending: Option<Intent>,
    drag: DragState,
}

impl InputController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one event. Returns `false` once the user asked to quit.
    ///
    /// Mouse edits are ignored while the simulation is playing; a release
    /// always ends the drag.
    pub fn handle(&mut self, event: InputEvent, grid: &mut Grid, playing: bool) -> bool {
        match event {
            InputEvent::Quit => return false,
            InputEvent::KeyDown(key) => {
                // Later intents overwrite earlier ones within a poll cycle
                if let Some(intent) = Intent::from_key(key) {
                    self.pending = Some(intent);
                }
            }
            InputEvent::MouseUp => self.drag = DragState::Idle,
            InputEvent::MouseDown { .. } | InputEvent::MouseMotion { .. } if playing => {}
            InputEvent::MouseDown { x, y } => self.press(grid, x, y),
            InputEvent::MouseMotion { x, y } => self.motion(grid, x, y),
        }
        true
    }

    /// Take the pending intent, leaving none
    pub fn take_intent(&mut self) -> Option<Intent> {
        self.pending.take()
    }

    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    /// Pixel to grid cell by integer division with the cell size
    pub fn pixel_to_cell(grid: &Grid, px: f32, py: f32) -> Option<(usize, usize)> {
        let size = CELL_SIZE as f32;
        let (gx, gy) = ((px / size).floor() as i64, (py / size).floor() as i64);
        grid.in_bounds(gx, gy).then_some((gx as usize, gy as usize))
    }

    fn press(&mut self, grid: &mut Grid, px: f32, py: f32) {
        self.drag = match Self::pixel_to_cell(grid, px, py) {
            Some((x, y)) => match grid.toggle(x, y) {
                Some(paint) => DragState::Dragging { x, y, paint },
                None => DragState::Idle,
            },
            None => DragState::Idle,
        };
    }

    fn motion(&mut self, grid: &mut Grid, px: f32, py: f32) {
        let DragState::Dragging { x: last_x, y: last_y, paint } = self.drag else {
            return;
        };

        let Some((x, y)) = Self::pixel_to_cell(grid, px, py) else {
            self.drag = DragState::Idle;
            return;
        };

        if (x, y) != (last_x, last_y) {
            // Paint, don't toggle: cells already matching stay untouched
            grid.set_alive(x, y, paint.is_alive());
            self.drag = DragState::Dragging { x, y, paint };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid() -> Grid {
        Grid::new(80, 80)
    }

    /// Pixel center of a cell
    fn at(x: usize, y: usize) -> (f32, f32) {
        let size = CELL_SIZE as f32;
        (x as f32 * size + size / 2.0, y as f32 * size + size / 2.0)
    }

    fn down(x: usize, y: usize) -> InputEvent {
        let (px, py) = at(x, y);
        InputEvent::MouseDown { x: px, y: py }
    }

    fn motion(x: usize, y: usize) -> InputEvent {
        let (px, py) = at(x, y);
        InputEvent::MouseMotion { x: px, y: py }
    }

    #[test]
    fn test_key_bindings() {
        assert_eq!(Intent::from_key(KeyCode::G), Some(Intent::ToggleGrid));
        assert_eq!(Intent::from_key(KeyCode::S), Some(Intent::ToggleShow));
        assert_eq!(Intent::from_key(KeyCode::Space), Some(Intent::TogglePlay));
        assert_eq!(Intent::from_key(KeyCode::P), Some(Intent::Step));
        assert_eq!(Intent::from_key(KeyCode::C), Some(Intent::Clear));
        assert_eq!(Intent::from_key(KeyCode::R), Some(Intent::Reset));
        assert_eq!(Intent::from_key(KeyCode::X), None);
    }

    #[test]
    fn test_latest_intent_wins() {
        let mut grid = grid();
        let mut input = InputController::new();

        input.handle(InputEvent::KeyDown(KeyCode::P), &mut grid, false);
        input.handle(InputEvent::KeyDown(KeyCode::C), &mut grid, false);
        input.handle(InputEvent::KeyDown(KeyCode::X), &mut grid, false);

        assert_eq!(input.take_intent(), Some(Intent::Clear));
        assert_eq!(input.take_intent(), None);
    }

    #[test]
    fn test_quit() {
        let mut grid = grid();
        let mut input = InputController::new();

        assert!(input.handle(InputEvent::KeyDown(KeyCode::R), &mut grid, false));
        assert!(!input.handle(InputEvent::Quit, &mut grid, false));
    }

    #[test]
    fn test_pixel_to_cell() {
        let grid = grid();

        assert_eq!(InputController::pixel_to_cell(&grid, 0.0, 0.0), Some((0, 0)));
        assert_eq!(InputController::pixel_to_cell(&grid, 9.9, 19.0), Some((0, 1)));
        assert_eq!(InputController::pixel_to_cell(&grid, 799.0, 799.0), Some((79, 79)));
        assert_eq!(InputController::pixel_to_cell(&grid, 800.0, 10.0), None);
        assert_eq!(InputController::pixel_to_cell(&grid, -1.0, 10.0), None);
    }

    #[test]
    fn test_press_toggles_and_starts_drag() {
        let mut grid = grid();
        let mut input = InputController::new();

        input.handle(down(5, 6), &mut grid, false);

        assert!(grid.is_alive(5, 6));
        assert!(grid.is_dirty(5, 6));
        assert_eq!(
            input.drag_state(),
            DragState::Dragging { x: 5, y: 6, paint: Cell::Alive }
        );
    }

    #[test]
    fn test_press_on_live_cell_erases() {
        let mut grid = grid();
        grid.set_alive(5, 6, true);
        let mut input = InputController::new();

        input.handle(down(5, 6), &mut grid, false);

        assert!(!grid.is_alive(5, 6));
        assert_eq!(
            input.drag_state(),
            DragState::Dragging { x: 5, y: 6, paint: Cell::Dead }
        );
    }

    #[test]
    fn test_press_outside_grid_stays_idle() {
        let mut grid = grid();
        let mut input = InputController::new();

        input.handle(InputEvent::MouseDown { x: 400.0, y: 805.0 }, &mut grid, false);

        assert_eq!(input.drag_state(), DragState::Idle);
        assert_eq!(grid.dirty_count(), 0);
    }

    #[test]
    fn test_drag_paints_dead_cell() {
        let mut grid = grid();
        let mut input = InputController::new();

        input.handle(down(10, 10), &mut grid, false);
        input.handle(motion(11, 10), &mut grid, false);

        assert!(grid.is_alive(10, 10));
        assert!(grid.is_alive(11, 10));
        assert_eq!(
            input.drag_state(),
            DragState::Dragging { x: 11, y: 10, paint: Cell::Alive }
        );
    }

    #[test]
    fn test_drag_does_not_toggle_matching_cell() {
        let mut grid = grid();
        grid.set_alive(11, 10, true);
        grid.take_dirty();
        let mut input = InputController::new();

        input.handle(down(10, 10), &mut grid, false);
        input.handle(motion(11, 10), &mut grid, false);

        assert!(grid.is_alive(11, 10));
        assert!(!grid.is_dirty(11, 10));
    }

    #[test]
    fn test_motion_within_same_cell_is_noop() {
        let mut grid = grid();
        let mut input = InputController::new();

        input.handle(down(3, 3), &mut grid, false);
        input.handle(InputEvent::MouseMotion { x: 31.0, y: 31.0 }, &mut grid, false);
        input.handle(InputEvent::MouseMotion { x: 38.0, y: 38.0 }, &mut grid, false);

        // Still alive: the pressed cell is never re-toggled by motion
        assert!(grid.is_alive(3, 3));
        assert_eq!(grid.population(), 1);
    }

    #[test]
    fn test_motion_without_press_is_ignored() {
        let mut grid = grid();
        let mut input = InputController::new();

        input.handle(motion(4, 4), &mut grid, false);

        assert_eq!(grid.population(), 0);
        assert_eq!(input.drag_state(), DragState::Idle);
    }

    #[test]
    fn test_release_ends_drag() {
        let mut grid = grid();
        let mut input = InputController::new();

        input.handle(down(1, 1), &mut grid, false);
        input.handle(InputEvent::MouseUp, &mut grid, false);
        input.handle(motion(2, 1), &mut grid, false);

        assert_eq!(input.drag_state(), DragState::Idle);
        assert!(!grid.is_alive(2, 1));
    }

    #[test]
    fn test_leaving_grid_ends_drag() {
        let mut grid = grid();
        let mut input = InputController::new();

        input.handle(down(79, 40), &mut grid, false);
        input.handle(InputEvent::MouseMotion { x: 805.0, y: 405.0 }, &mut grid, false);
        assert_eq!(input.drag_state(), DragState::Idle);

        input.handle(motion(78, 40), &mut grid, false);
        assert!(!grid.is_alive(78, 40));
    }

    #[test]
    fn test_mouse_ignored_while_playing() {
        let mut grid = grid();
        let mut input = InputController::new();

        input.handle(down(7, 7), &mut grid, true);

        assert!(!grid.is_alive(7, 7));
        assert_eq!(input.drag_state(), DragState::Idle);
    }
}
