use super::{AutomatonError, Grid, Result};

/// Represents a pattern that can be placed on the grid
#[derive(Clone, Debug)]
pub struct Pattern {
    pub name: &'static str,
    pub description: &'static str,
    pub width: usize,
    pub height: usize,
    pub cells: Vec<(usize, usize)>, // Relative (x, y) offsets of alive cells
}

impl Pattern {
    /// Create a new pattern from alive cell offsets
    pub fn new(name: &'static str, description: &'static str, cells: Vec<(usize, usize)>) -> Self {
        let width = cells.iter().map(|(x, _)| *x).max().unwrap_or(0) + 1;
        let height = cells.iter().map(|(_, y)| *y).max().unwrap_or(0) + 1;
        Self { name, description, width, height, cells }
    }

    /// Whether the whole pattern fits when its origin is at (x, y)
    pub fn fits(&self, grid_width: usize, grid_height: usize, x: usize, y: usize) -> bool {
        x.checked_add(self.width).is_some_and(|right| right <= grid_width)
            && y.checked_add(self.height).is_some_and(|bottom| bottom <= grid_height)
    }

    /// Mark the pattern's cells alive with its origin at (x, y).
    /// Placement is all-or-nothing: if any cell would land outside the
    /// grid nothing is written.
    pub fn place_on(&self, grid: &mut Grid, x: usize, y: usize) -> Result<()> {
        let (width, height) = grid.dimensions();
        if !self.fits(width, height, x, y) {
            return Err(AutomatonError::InsufficientSpace { x, y, pattern: self.name });
        }
        for &(dx, dy) in &self.cells {
            grid.set(x + dx, y + dy, true)?;
        }
        Ok(())
    }
}

/// Classic Game of Life patterns library
pub mod presets {
    use super::*;

    /// Glider - spaceship travelling one cell down-left every four generations
    ///
    /// ```text
    /// x . .
    /// x . x
    /// x x .
    /// ```
    pub fn glider() -> Pattern {
        Pattern::new(
            "Glider",
            "Moves diagonally (period 4)",
            vec![(0, 0), (0, 1), (0, 2), (1, 2), (2, 1)],
        )
    }

    /// Blinker - period 2 oscillator
    pub fn blinker() -> Pattern {
        Pattern::new("Blinker", "Oscillator (period 2)", vec![(0, 0), (1, 0), (2, 0)])
    }

    /// Block - simple still life
    pub fn block() -> Pattern {
        Pattern::new("Block", "Still life", vec![(0, 0), (1, 0), (0, 1), (1, 1)])
    }

    /// Toad - period 2 oscillator
    pub fn toad() -> Pattern {
        Pattern::new(
            "Toad",
            "Oscillator (period 2)",
            vec![
                (1, 0), (2, 0), (3, 0),
                (0, 1), (1, 1), (2, 1),
            ],
        )
    }

    /// Beacon - period 2 oscillator
    pub fn beacon() -> Pattern {
        Pattern::new(
            "Beacon",
            "Oscillator (period 2)",
            vec![
                (0, 0), (1, 0),
                (0, 1),
                (3, 2),
                (2, 3), (3, 3),
            ],
        )
    }

    /// Get all available patterns
    pub fn all_patterns() -> Vec<Pattern> {
        vec![glider(), blinker(), block(), toad(), beacon()]
    }

    /// Look up a preset by name, ignoring case
    pub fn by_name(name: &str) -> Option<Pattern> {
        all_patterns()
            .into_iter()
            .find(|p| p.name.eq_ignore_ascii_case(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_extent() {
        let glider = presets::glider();
        assert_eq!((glider.width, glider.height), (3, 3));
        assert_eq!(glider.cells.len(), 5);
        let blinker = presets::blinker();
        assert_eq!((blinker.width, blinker.height), (3, 1));
    }

    #[test]
    fn test_place_marks_offsets_alive() {
        let mut grid = Grid::new(6, 6).unwrap();
        presets::glider().place_on(&mut grid, 2, 1).unwrap();
        let mut alive: Vec<_> = grid.view().alive_cells().collect();
        alive.sort();
        assert_eq!(alive, vec![(2, 1), (2, 2), (2, 3), (3, 3), (4, 2)]);
    }

    #[test]
    fn test_place_flush_against_edge() {
        let mut grid = Grid::new(5, 5).unwrap();
        assert!(presets::glider().place_on(&mut grid, 2, 2).is_ok());
        assert_eq!(grid.population(), 5);
    }

    #[test]
    fn test_place_outside_is_no_op() {
        let mut grid = Grid::new(5, 5).unwrap();
        grid.set(4, 4, true).unwrap();
        let err = presets::glider().place_on(&mut grid, 3, 0).unwrap_err();
        assert_eq!(err, AutomatonError::InsufficientSpace { x: 3, y: 0, pattern: "Glider" });
        assert!(presets::beacon().place_on(&mut grid, 0, 2).is_err());
        assert!(presets::block().place_on(&mut grid, usize::MAX, 0).is_err());
        assert_eq!(grid.view().alive_cells().collect::<Vec<_>>(), vec![(4, 4)]);
    }

    #[test]
    fn test_by_name() {
        assert_eq!(presets::by_name("glider").map(|p| p.cells.len()), Some(5));
        assert_eq!(presets::by_name("TOAD").map(|p| p.name), Some("Toad"));
        assert!(presets::by_name("unknown").is_none());
    }
}
