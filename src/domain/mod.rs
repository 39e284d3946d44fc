mod cell;
mod grid;
mod rules;
mod simulation;
pub mod patterns;

pub use cell::Cell;
pub use grid::Grid;
pub use rules::{Rule, ConwayRule, default_rule};
pub use patterns::{Pattern, presets};
pub use simulation::{Simulation, Generation, RedrawPolicy};
