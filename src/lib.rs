// Domain layer - Core business logic
pub mod domain;

// Application layer - Use cases and coordination
pub mod application;

// Infrastructure layer - rendering, input
pub mod rendering;
pub mod input;

pub mod config;

// Re-exports for convenience
pub use domain::{Cell, Grid, Pattern, presets, Simulation, RedrawPolicy};
pub use application::GameState;
pub use config::Config;
