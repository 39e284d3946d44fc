use macroquad::prelude::*;

use crate::application::GameState;
use crate::config::{CANVAS_HEIGHT, CANVAS_WIDTH, CELL_SIZE, STATUS_BAR_HEIGHT};
use crate::domain::{Cell, Grid};

/// View toggles that decide what gets drawn
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ViewFlags {
    pub show: bool,
    pub grid_lines: bool,
}

/// What to draw this frame
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FramePlan {
    pub grid_lines: bool,
    /// Cells whose block must be repainted, with their new value
    pub cells: Vec<(usize, usize, Cell)>,
}

/// RenderScheduler decides per frame which cells to repaint.
/// It drains the grid's dirty flags only when the frame is actually shown,
/// so hidden frames accumulate work for the next visible one.
#[derive(Debug, Default)]
pub struct RenderScheduler {
    presented_grid_lines: bool,
}

impl RenderScheduler {
    pub fn new(grid_lines: bool) -> Self {
        Self { presented_grid_lines: grid_lines }
    }

    /// Plan the next frame; `None` keeps the last presented frame on screen
    pub fn plan(&mut self, grid: &mut Grid, view: ViewFlags) -> Option<FramePlan> {
        if !view.show {
            return None;
        }
        self.presented_grid_lines = view.grid_lines;
        Some(FramePlan {
            grid_lines: view.grid_lines,
            cells: grid.take_dirty(),
        })
    }

    /// Whether the overlay was on in the last presented frame
    pub fn presented_grid_lines(&self) -> bool {
        self.presented_grid_lines
    }
}

const ALIVE_COLOR: Color = WHITE;
const DEAD_COLOR: Color = BLACK;
/// #2222227f
const GRID_LINE_COLOR: Color = Color::new(0.133, 0.133, 0.133, 0.498);

/// Off-screen surface holding the painted cells between frames.
/// Only dirty cells are ever repainted onto it.
pub struct Canvas {
    target: RenderTarget,
    camera: Camera2D,
}

impl Canvas {
    /// Allocate the render target and fill it black
    pub fn new() -> Self {
        let (w, h) = (CANVAS_WIDTH as f32, CANVAS_HEIGHT as f32);
        let target = render_target(CANVAS_WIDTH as u32, CANVAS_HEIGHT as u32);
        target.texture.set_filter(FilterMode::Nearest);

        let camera = Camera2D {
            zoom: vec2(2.0 / w, 2.0 / h),
            target: vec2(w / 2.0, h / 2.0),
            render_target: Some(target.clone()),
            ..Default::default()
        };

        set_camera(&camera);
        clear_background(DEAD_COLOR);
        set_default_camera();

        Self { target, camera }
    }

    /// Paint cell blocks onto the persistent surface
    pub fn paint(&self, cells: &[(usize, usize, Cell)]) {
        if cells.is_empty() {
            return;
        }
        let size = CELL_SIZE as f32;

        set_camera(&self.camera);
        for &(x, y, cell) in cells {
            let color = if cell.is_alive() { ALIVE_COLOR } else { DEAD_COLOR };
            draw_rectangle(x as f32 * size, y as f32 * size, size, size, color);
        }
        set_default_camera();
    }

    /// Blit the surface to the screen, overlay on top
    pub fn present(&self, grid_lines: bool) {
        let (w, h) = (CANVAS_WIDTH as f32, CANVAS_HEIGHT as f32);
        draw_texture_ex(
            &self.target.texture,
            0.0,
            0.0,
            WHITE,
            DrawTextureParams {
                dest_size: Some(vec2(w, h)),
                ..Default::default()
            },
        );
        if grid_lines {
            draw_grid_lines();
        }
    }
}

/// Fixed overlay: one line every cell, both directions
fn draw_grid_lines() {
    let (w, h) = (CANVAS_WIDTH as f32, CANVAS_HEIGHT as f32);

    for x in (0..CANVAS_WIDTH).step_by(CELL_SIZE) {
        let x = x as f32 + 0.5;
        draw_line(x, 0.0, x, h, 1.0, GRID_LINE_COLOR);
    }
    for y in (0..CANVAS_HEIGHT).step_by(CELL_SIZE) {
        let y = y as f32 + 0.5;
        draw_line(0.0, y, w, y, 1.0, GRID_LINE_COLOR);
    }
}

/// Run one frame of drawing: repaint what the scheduler planned and present
pub fn draw_frame(canvas: &Canvas, scheduler: &mut RenderScheduler, state: &mut GameState) {
    let view = state.view();
    match scheduler.plan(&mut state.grid, view) {
        Some(plan) => {
            canvas.paint(&plan.cells);
            canvas.present(plan.grid_lines);
        }
        None => canvas.present(scheduler.presented_grid_lines()),
    }
    draw_status_bar(state);
}

/// Title, generation and population under the canvas
pub fn draw_status_bar(state: &GameState) {
    let top = CANVAS_HEIGHT as f32;
    draw_rectangle(
        0.0,
        top,
        CANVAS_WIDTH as f32,
        STATUS_BAR_HEIGHT as f32,
        Color::from_rgba(30, 30, 30, 255),
    );

    let status = format!(
        "{}  |  Generation: {}  |  Cells: {}",
        state.title(),
        state.grid.steps(),
        state.grid.population()
    );
    draw_text(&status, 6.0, top + 15.0, 18.0, Color::from_rgba(180, 180, 180, 255));
}
