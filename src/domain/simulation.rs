//! Generation stepping over a bounded [`Grid`].
//!
//! Every generation is computed from the pre-update state into the grid's
//! scratch buffer and then committed in one swap, so all cells update
//! simultaneously.

use super::{Grid, Rule, rules::default_rule};

/// Which cells get flagged for redraw after a generation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum RedrawPolicy {
    /// Only cells whose state flipped
    #[default]
    ChangedOnly,
    /// Every cell, every generation (legacy full-board repaint)
    FullGrid,
}

impl RedrawPolicy {
    pub fn name(&self) -> &'static str {
        match self {
            RedrawPolicy::ChangedOnly => "changed",
            RedrawPolicy::FullGrid => "full",
        }
    }
}

/// Outcome of one generation
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Generation {
    /// Step counter after this generation
    pub steps: u64,
    /// Number of cells that flipped
    pub changed: usize,
    /// No cell flipped: the board reached a fixed point
    pub stable: bool,
}

/// Simulation drives a rule over the grid, one generation at a time.
pub struct Simulation {
    rule: Box<dyn Rule>,
    redraw: RedrawPolicy,
}

impl Simulation {
    pub fn new(rule: Box<dyn Rule>, redraw: RedrawPolicy) -> Self {
        Self { rule, redraw }
    }

    /// Conway's rule with the given redraw policy
    pub fn conway(redraw: RedrawPolicy) -> Self {
        Self::new(default_rule(), redraw)
    }

    pub fn rule_name(&self) -> &'static str {
        self.rule.name()
    }

    pub const fn redraw_policy(&self) -> RedrawPolicy {
        self.redraw
    }

    /// Count live cells in the Moore neighborhood of (x, y).
    /// Neighbors past the edge are skipped, so edge cells see at most 5
    /// candidates and corner cells at most 3.
    pub fn count_live_neighbors(grid: &Grid, x: usize, y: usize) -> u8 {
        let (x, y) = (x as i64, y as i64);

        (-1..=1)
            .flat_map(|dy| (-1..=1).map(move |dx| (dx, dy)))
            .filter(|&(dx, dy)| dx != 0 || dy != 0)
            .map(|(dx, dy)| (x + dx, y + dy))
            .filter(|&(nx, ny)| grid.in_bounds(nx, ny))
            .filter(|&(nx, ny)| grid.is_alive(nx as usize, ny as usize))
            .count() as u8
    }

    /// Compute the next generation and commit it to the grid
    pub fn advance_generation(&self, grid: &mut Grid) -> Generation {
        let (width, height) = grid.dimensions();

        for y in 0..height {
            for x in 0..width {
                let neighbors = Self::count_live_neighbors(grid, x, y);
                let current = grid.get(x, y).unwrap_or_default();
                grid.stage(x, y, self.rule.evolve(current, neighbors));
            }
        }

        let changed = grid.commit(self.redraw);
        Generation {
            steps: grid.steps(),
            changed,
            stable: grid.is_stable(),
        }
    }
}

impl Default for Simulation {
    fn default() -> Self {
        Self::conway(RedrawPolicy::default())
    }
}
