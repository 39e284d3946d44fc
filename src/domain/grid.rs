use super::{Cell, RedrawPolicy, patterns::presets};

/// Grid owns the double-buffered cell state of the board plus the dirty
/// flags the renderer drains every frame.
///
/// Cells live in a flat row-major layout (`y * width + x`). Neighbors past
/// the edges do not exist: the board is bounded, not toroidal.
#[derive(Clone, Debug)]
pub struct Grid {
    width: usize,
    height: usize,
    /// Authoritative live/dead state
    current: Vec<Cell>,
    /// Scratch buffer for the generation being computed
    next: Vec<Cell>,
    /// Cells whose on-screen block is stale
    changed: Vec<bool>,
    steps: u64,
    stable: bool,
}

impl Grid {
    /// Create a new grid with all cells initially dead
    pub fn new(width: usize, height: usize) -> Self {
        let len = width * height;
        Self {
            width,
            height,
            current: vec![Cell::Dead; len],
            next: vec![Cell::Dead; len],
            changed: vec![false; len],
            steps: 0,
            stable: false,
        }
    }

    /// Get grid dimensions
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Convert 2D coordinates to 1D index
    const fn get_index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    const fn contains(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    /// Signed bounds check, for neighbor offsets and pointer coordinates
    pub fn in_bounds(&self, x: i64, y: i64) -> bool {
        x >= 0 && y >= 0 && self.contains(x as usize, y as usize)
    }

    /// Get cell at position (with bounds checking)
    pub fn get(&self, x: usize, y: usize) -> Option<Cell> {
        self.contains(x, y)
            .then(|| self.current[self.get_index(x, y)])
    }

    /// Out-of-range cells read as dead
    pub fn is_alive(&self, x: usize, y: usize) -> bool {
        self.get(x, y).is_some_and(Cell::is_alive)
    }

    /// Set a cell, marking it dirty only when its value actually changes.
    /// Returns whether the cell changed.
    pub fn set_alive(&mut self, x: usize, y: usize, alive: bool) -> bool {
        if !self.contains(x, y) {
            return false;
        }
        let idx = self.get_index(x, y);
        let cell = Cell::from(alive);
        if self.current[idx] == cell {
            return false;
        }
        self.current[idx] = cell;
        self.changed[idx] = true;
        true
    }

    /// Flip a cell and return its new value
    pub fn toggle(&mut self, x: usize, y: usize) -> Option<Cell> {
        let flipped = self.get(x, y)?.toggle();
        self.set_alive(x, y, flipped.is_alive());
        Some(flipped)
    }

    /// Kill every cell and reset the generation counter
    pub fn clear_all(&mut self) {
        for (cell, dirty) in self.current.iter_mut().zip(self.changed.iter_mut()) {
            if cell.is_alive() {
                *dirty = true;
            }
            *cell = Cell::Dead;
        }
        self.steps = 0;
        self.stable = false;
    }

    /// Reset the board to the fixed seed glider in the bottom-right corner.
    /// Only cells whose value differs from the seeded board become dirty.
    pub fn seed_pattern(&mut self) {
        let seed = presets::seed();
        let (ox, oy) = presets::SEED_ORIGIN;

        for y in 0..self.height {
            for x in 0..self.width {
                let alive = x >= ox && y >= oy && seed.is_alive_at(x - ox, y - oy);
                self.set_alive(x, y, alive);
            }
        }
        self.steps = 0;
        self.stable = false;
    }

    /// Write the next-generation value of a cell into the scratch buffer.
    /// Nothing is visible until [`Grid::commit`].
    pub(super) fn stage(&mut self, x: usize, y: usize, cell: Cell) {
        let idx = self.get_index(x, y);
        self.next[idx] = cell;
    }

    /// Swap the scratch buffer in as the current generation.
    ///
    /// Marks dirty the cells that differ from the previous generation
    /// (or every cell under [`RedrawPolicy::FullGrid`]), updates the stable
    /// flag and bumps the step counter. Returns how many cells changed.
    pub(super) fn commit(&mut self, policy: RedrawPolicy) -> usize {
        std::mem::swap(&mut self.current, &mut self.next);

        let mut changed = 0;
        for ((new, old), dirty) in self
            .current
            .iter()
            .zip(self.next.iter())
            .zip(self.changed.iter_mut())
        {
            let differs = new != old;
            if differs {
                changed += 1;
            }
            if differs || policy == RedrawPolicy::FullGrid {
                *dirty = true;
            }
        }

        self.stable = changed == 0;
        self.steps += 1;
        changed
    }

    /// Generations computed since the last clear/reset
    pub const fn steps(&self) -> u64 {
        self.steps
    }

    /// True when the last generation changed nothing
    pub const fn is_stable(&self) -> bool {
        self.stable
    }

    /// Count alive cells
    pub fn population(&self) -> usize {
        self.current.iter().filter(|cell| cell.is_alive()).count()
    }

    pub fn is_dirty(&self, x: usize, y: usize) -> bool {
        self.contains(x, y) && self.changed[self.get_index(x, y)]
    }

    pub fn dirty_count(&self) -> usize {
        self.changed.iter().filter(|&&dirty| dirty).count()
    }

    /// Drain the dirty set: returns every dirty cell (row-major) with its
    /// current value and clears the flags.
    pub fn take_dirty(&mut self) -> Vec<(usize, usize, Cell)> {
        let width = self.width;
        self.changed
            .iter_mut()
            .enumerate()
            .filter(|(_, dirty)| **dirty)
            .map(|(idx, dirty)| {
                *dirty = false;
                (idx % width, idx / width, self.current[idx])
            })
            .collect()
    }

    /// Iterate over all cells with their positions
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        let width = self.width;
        self.current
            .iter()
            .enumerate()
            .map(move |(idx, &cell)| (idx % width, idx / width, cell))
    }
}
