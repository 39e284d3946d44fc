use crate::config::{Config, GRID_HEIGHT, GRID_WIDTH, WINDOW_TITLE};
use crate::domain::{Generation, Grid, Simulation};
use crate::input::{InputController, InputEvent, Intent};
use crate::rendering::ViewFlags;

/// What happened during one frame
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameReport {
    pub intent: Option<Intent>,
    pub generation: Option<Generation>,
    /// Playback stopped because the board stopped changing
    pub reached_stable: bool,
}

/// GameState orchestrates the simulation.
/// This is the application layer that coordinates domain logic; it is an
/// ordinary value, so the whole loop can run without a window.
pub struct GameState {
    pub grid: Grid,
    pub simulation: Simulation,
    /// Advance one generation every frame
    pub playing: bool,
    /// Render at all
    pub show: bool,
    /// Draw the grid-line overlay
    pub grid_lines: bool,
}

impl GameState {
    /// Create new game state: empty board, paused, everything visible
    pub fn new(config: &Config) -> Self {
        Self {
            grid: Grid::new(GRID_WIDTH, GRID_HEIGHT),
            simulation: Simulation::conway(config.redraw),
            playing: false,
            show: true,
            grid_lines: true,
        }
    }

    /// Window title for the current play state
    pub fn title(&self) -> String {
        if self.playing {
            WINDOW_TITLE.to_owned()
        } else {
            format!("{} (Paused)", WINDOW_TITLE)
        }
    }

    pub fn view(&self) -> ViewFlags {
        ViewFlags {
            show: self.show,
            grid_lines: self.grid_lines,
        }
    }

    /// Drain this frame's events, then apply the resulting intent.
    /// Returns `None` when a quit event arrived.
    pub fn frame(
        &mut self,
        input: &mut InputController,
        events: impl IntoIterator<Item = InputEvent>,
    ) -> Option<FrameReport> {
        for event in events {
            if !input.handle(event, &mut self.grid, self.playing) {
                return None;
            }
        }
        Some(self.apply(input.take_intent()))
    }

    /// Apply at most one intent, then run the simulation if playing.
    ///
    /// View and play toggles work in any mode. Step, clear and reset only
    /// act while paused and are dropped otherwise.
    pub fn apply(&mut self, intent: Option<Intent>) -> FrameReport {
        let mut report = FrameReport {
            intent,
            ..Default::default()
        };

        match intent {
            Some(Intent::TogglePlay) => self.set_playing(!self.playing),
            Some(Intent::ToggleShow) => self.show = !self.show,
            Some(Intent::ToggleGrid) => self.grid_lines = !self.grid_lines,
            _ => {}
        }
        if let Some(intent) = intent {
            log::debug!("Applied {:?} (playing: {})", intent, self.playing);
        }

        if self.playing {
            let generation = self.simulation.advance_generation(&mut self.grid);
            if generation.stable {
                log::info!("Reached stable point after {} steps!", generation.steps);
                self.set_playing(false);
                report.reached_stable = true;
            }
            report.generation = Some(generation);
            return report;
        }

        match intent {
            Some(Intent::Step) => {
                report.generation = Some(self.simulation.advance_generation(&mut self.grid));
            }
            Some(Intent::Clear) => {
                self.grid.clear_all();
                log::debug!("Board cleared");
            }
            Some(Intent::Reset) => {
                self.grid.seed_pattern();
                log::debug!("Board reset to seed pattern");
            }
            _ => {}
        }
        report
    }

    fn set_playing(&mut self, playing: bool) {
        self.playing = playing;
        log::info!("{}", self.title());
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}
