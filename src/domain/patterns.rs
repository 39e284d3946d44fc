use super::Grid;

/// Represents a pattern that can be placed on the grid
#[derive(Clone, Debug)]
pub struct Pattern {
    pub name: &'static str,
    pub width: usize,
    pub height: usize,
    pub cells: Vec<(usize, usize)>,  // Relative coordinates of alive cells
}

impl Pattern {
    /// Create a new pattern from alive cell coordinates
    pub fn new(name: &'static str, cells: Vec<(usize, usize)>) -> Self {
        let width = cells.iter().map(|(x, _)| *x).max().unwrap_or(0) + 1;
        let height = cells.iter().map(|(_, y)| *y).max().unwrap_or(0) + 1;
        Self { name, width, height, cells }
    }

    /// Whether the cell at pattern-relative (x, y) is alive
    pub fn is_alive_at(&self, x: usize, y: usize) -> bool {
        self.cells.contains(&(x, y))
    }

    /// Place pattern on grid at specified position.
    /// Cells falling off the board are dropped.
    pub fn place_on(&self, grid: &mut Grid, x: usize, y: usize) {
        for (dx, dy) in &self.cells {
            grid.set_alive(x + dx, y + dy, true);
        }
    }
}

/// Patterns used by the board
pub mod presets {
    use super::*;

    /// Top-left corner where [`seed`] is placed on reset
    pub const SEED_ORIGIN: (usize, usize) = (76, 76);

    /// The reset pattern: a glider heading for the bottom-right corner
    pub fn seed() -> Pattern {
        Pattern::new(
            "Seed",
            vec![
                            (2, 0),
                (0, 1),     (2, 1),
                    (1, 2), (2, 2),
            ]
        )
    }

    /// Blinker - period 2 oscillator
    pub fn blinker() -> Pattern {
        Pattern::new(
            "Blinker",
            vec![
                (0, 1), (1, 1), (2, 1),
            ]
        )
    }

    /// Block - simple still life
    pub fn block() -> Pattern {
        Pattern::new(
            "Block",
            vec![
                (0, 0), (1, 0),
                (0, 1), (1, 1),
            ]
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_bounds() {
        let seed = presets::seed();
        assert_eq!((seed.width, seed.height), (3, 3));
        assert_eq!(seed.cells.len(), 5);

        let blinker = presets::blinker();
        assert_eq!((blinker.width, blinker.height), (3, 2));
    }

    #[test]
    fn test_place_on_clips_at_edges() {
        let mut grid = Grid::new(10, 10);
        presets::block().place_on(&mut grid, 9, 9);

        assert_eq!(grid.population(), 1);
        assert!(grid.is_alive(9, 9));
    }

    #[test]
    fn test_is_alive_at() {
        let seed = presets::seed();
        assert!(seed.is_alive_at(2, 0));
        assert!(seed.is_alive_at(0, 1));
        assert!(!seed.is_alive_at(0, 0));
        assert!(!seed.is_alive_at(5, 5));
    }

    #[test]
    fn test_place_seed() {
        let mut grid = Grid::new(10, 10);
        presets::seed().place_on(&mut grid, 2, 3);

        assert_eq!(grid.population(), 5);
        assert!(grid.is_alive(4, 3));
        assert!(grid.is_alive(2, 4));
        assert!(grid.is_alive(3, 5));
        assert_eq!(grid.dirty_count(), 5);
    }
}
