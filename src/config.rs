//! Board geometry, window setup and the few runtime knobs read from the
//! environment.

use std::time::Duration;

use macroquad::window::Conf;
use thiserror::Error;

use crate::domain::RedrawPolicy;

pub const GRID_WIDTH: usize = 80;
pub const GRID_HEIGHT: usize = 80;
/// Pixel size of one cell block
pub const CELL_SIZE: usize = 10;
pub const CANVAS_WIDTH: usize = GRID_WIDTH * CELL_SIZE;
pub const CANVAS_HEIGHT: usize = GRID_HEIGHT * CELL_SIZE;
/// Status strip drawn under the canvas
pub const STATUS_BAR_HEIGHT: usize = 20;

pub const WINDOW_TITLE: &str = "Game of Life";

pub const REDRAW_ENV: &str = "LIFE_REDRAW";
pub const FRAME_DELAY_ENV: &str = "LIFE_FRAME_DELAY_MS";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("LIFE_REDRAW must be `changed` or `full`, got `{0}`")]
    InvalidRedraw(String),
    #[error("LIFE_FRAME_DELAY_MS must be a whole number of milliseconds, got `{0}`")]
    InvalidFrameDelay(String),
}

/// Runtime configuration. Defaults reproduce the stock behavior: repaint
/// only changed cells and run uncapped.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct Config {
    pub redraw: RedrawPolicy,
    /// Sleep after each presented frame; `None` runs as fast as frames come
    pub frame_delay: Option<Duration>,
}

impl Config {
    /// Read overrides from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any key lookup (unset keys keep their defaults)
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(raw) = lookup(REDRAW_ENV) {
            config.redraw = match raw.trim().to_ascii_lowercase().as_str() {
                "changed" => RedrawPolicy::ChangedOnly,
                "full" => RedrawPolicy::FullGrid,
                _ => return Err(ConfigError::InvalidRedraw(raw)),
            };
        }

        if let Some(raw) = lookup(FRAME_DELAY_ENV) {
            let millis: u64 = raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidFrameDelay(raw.clone()))?;
            config.frame_delay = (millis > 0).then(|| Duration::from_millis(millis));
        }

        Ok(config)
    }

    /// Window setup for macroquad: fixed canvas plus the status strip
    pub fn window_conf() -> Conf {
        Conf {
            window_title: WINDOW_TITLE.to_owned(),
            window_width: CANVAS_WIDTH as i32,
            window_height: (CANVAS_HEIGHT + STATUS_BAR_HEIGHT) as i32,
            window_resizable: false,
            ..Default::default()
        }
    }
}
