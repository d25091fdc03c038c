use std::fmt;

use super::{AutomatonError, Result};

/// Grid holds the cell states of the automaton in two same-shaped buffers.
/// The `current` buffer is the settled generation; `next` is only written
/// while a step is in progress and becomes current on `swap`.
#[derive(Clone, Debug)]
pub struct Grid {
    width: usize,
    height: usize,
    current: Vec<bool>,
    next: Vec<bool>,
}

impl Grid {
    /// Create a new grid with all cells dead
    pub fn new(width: usize, height: usize) -> Result<Self> {
        let cells = width
            .checked_mul(height)
            .filter(|&cells| cells > 0 && cells <= isize::MAX as usize)
            .ok_or(AutomatonError::InvalidDimension { width, height })?;
        Ok(Self {
            width,
            height,
            current: vec![false; cells],
            next: vec![false; cells],
        })
    }

    pub const fn width(&self) -> usize {
        self.width
    }

    pub const fn height(&self) -> usize {
        self.height
    }

    /// Get grid dimensions
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Read-only view of the current generation
    pub fn view(&self) -> GridView<'_> {
        GridView {
            width: self.width,
            height: self.height,
            cells: &self.current,
        }
    }

    /// Get cell at position in the current generation
    pub fn get(&self, x: usize, y: usize) -> Result<bool> {
        self.view().get(x, y)
    }

    /// Set cell at position in the current generation.
    /// Only meant for seeding and user edits between steps.
    pub fn set(&mut self, x: usize, y: usize, alive: bool) -> Result<()> {
        let idx = self.index(x, y)?;
        self.current[idx] = alive;
        Ok(())
    }

    /// Exchange the current and next buffers without copying cells
    pub fn swap(&mut self) {
        std::mem::swap(&mut self.current, &mut self.next);
    }

    /// Kill every cell of the current generation
    pub fn clear(&mut self) {
        self.current.fill(false);
    }

    /// Overwrite the current generation in row-major order
    pub fn fill_with(&mut self, mut state: impl FnMut(usize, usize) -> bool) {
        let width = self.width;
        for (idx, cell) in self.current.iter_mut().enumerate() {
            *cell = state(idx % width, idx / width);
        }
    }

    pub fn population(&self) -> usize {
        self.view().population()
    }

    /// Split the grid into the settled generation and the buffer the
    /// next generation is written into. Call `swap` once the buffer is full.
    pub(crate) fn staging(&mut self) -> (GridView<'_>, &mut [bool]) {
        let view = GridView {
            width: self.width,
            height: self.height,
            cells: &self.current,
        };
        (view, &mut self.next)
    }

    fn index(&self, x: usize, y: usize) -> Result<usize> {
        self.view().index(x, y)
    }
}

/// Borrowed, immutable snapshot of one generation.
/// Rules evaluate against this so they can never observe a partially
/// written next generation.
#[derive(Clone, Copy)]
pub struct GridView<'a> {
    width: usize,
    height: usize,
    cells: &'a [bool],
}

impl<'a> GridView<'a> {
    pub const fn width(&self) -> usize {
        self.width
    }

    pub const fn height(&self) -> usize {
        self.height
    }

    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Get cell at position (with bounds checking)
    pub fn get(&self, x: usize, y: usize) -> Result<bool> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Open-boundary read: coordinates beyond any edge are dead, never wrapped
    #[inline]
    pub fn is_alive(&self, x: isize, y: isize) -> bool {
        if x < 0 || y < 0 {
            return false;
        }
        let (x, y) = (x as usize, y as usize);
        x < self.width && y < self.height && self.cells[y * self.width + x]
    }

    /// One row of cells, left to right
    pub fn row(&self, y: usize) -> Option<&'a [bool]> {
        let cells = self.cells;
        (y < self.height).then(|| &cells[y * self.width..(y + 1) * self.width])
    }

    /// Iterate over all cells with their positions, row-major
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, bool)> + 'a {
        let (width, cells) = (self.width, self.cells);
        cells
            .iter()
            .enumerate()
            .map(move |(idx, &alive)| (idx % width, idx / width, alive))
    }

    /// Positions of the living cells, row-major
    pub fn alive_cells(&self) -> impl Iterator<Item = (usize, usize)> + 'a {
        self.iter_cells()
            .filter_map(|(x, y, alive)| alive.then_some((x, y)))
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    fn index(&self, x: usize, y: usize) -> Result<usize> {
        if x < self.width && y < self.height {
            Ok(y * self.width + x)
        } else {
            Err(AutomatonError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            })
        }
    }
}

impl fmt::Display for GridView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.width) {
            let line: String = row.iter().map(|&alive| if alive { '#' } else { '.' }).collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_is_dead() {
        let grid = Grid::new(4, 3).unwrap();
        assert_eq!(grid.dimensions(), (4, 3));
        assert_eq!(grid.population(), 0);
        assert!(grid.view().iter_cells().all(|(_, _, alive)| !alive));
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        assert_eq!(
            Grid::new(0, 5).unwrap_err(),
            AutomatonError::InvalidDimension { width: 0, height: 5 }
        );
        assert!(matches!(
            Grid::new(5, 0),
            Err(AutomatonError::InvalidDimension { .. })
        ));
    }

    #[test]
    fn test_overflowing_dimensions_rejected() {
        assert_eq!(
            Grid::new(usize::MAX / 2 + 1, 2).unwrap_err(),
            AutomatonError::InvalidDimension { width: usize::MAX / 2 + 1, height: 2 }
        );
        assert!(matches!(
            Grid::new(usize::MAX, usize::MAX),
            Err(AutomatonError::InvalidDimension { .. })
        ));
        // Fits in usize but not in an allocation
        assert!(Grid::new(usize::MAX / 2, 2).is_err());
    }

    #[test]
    fn test_set_then_get_every_cell() {
        let mut grid = Grid::new(5, 4).unwrap();
        for y in 0..4 {
            for x in 0..5 {
                grid.set(x, y, true).unwrap();
                assert!(grid.get(x, y).unwrap());
            }
        }
        assert_eq!(grid.population(), 20);
    }

    #[test]
    fn test_out_of_bounds_access() {
        let mut grid = Grid::new(3, 2).unwrap();
        let expected = AutomatonError::OutOfBounds { x: 3, y: 0, width: 3, height: 2 };
        assert_eq!(grid.get(3, 0).unwrap_err(), expected);
        assert_eq!(grid.set(3, 0, true).unwrap_err(), expected);
        assert!(grid.get(0, 2).is_err());
        assert!(grid.set(7, 9, false).is_err());
        // Failed writes leave the grid untouched
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn test_swap_exchanges_buffers() {
        let mut grid = Grid::new(2, 2).unwrap();
        grid.set(0, 0, true).unwrap();
        {
            let (view, next) = grid.staging();
            assert!(view.get(0, 0).unwrap());
            next[3] = true;
        }
        grid.swap();
        assert!(!grid.get(0, 0).unwrap());
        assert!(grid.get(1, 1).unwrap());
        grid.swap();
        assert!(grid.get(0, 0).unwrap());
    }

    #[test]
    fn test_is_alive_treats_off_grid_as_dead() {
        let mut grid = Grid::new(3, 3).unwrap();
        grid.fill_with(|_, _| true);
        let view = grid.view();
        assert!(view.is_alive(0, 0));
        assert!(view.is_alive(2, 2));
        assert!(!view.is_alive(-1, 0));
        assert!(!view.is_alive(0, -1));
        assert!(!view.is_alive(3, 1));
        assert!(!view.is_alive(1, 3));
    }

    #[test]
    fn test_rows_and_alive_cells() {
        let mut grid = Grid::new(3, 2).unwrap();
        grid.set(1, 0, true).unwrap();
        grid.set(2, 1, true).unwrap();
        let view = grid.view();
        assert_eq!(view.row(0), Some(&[false, true, false][..]));
        assert_eq!(view.row(2), None);
        assert_eq!(view.alive_cells().collect::<Vec<_>>(), vec![(1, 0), (2, 1)]);
        assert_eq!(view.to_string(), ".#.\n..#\n");
    }

    #[test]
    fn test_clear() {
        let mut grid = Grid::new(4, 4).unwrap();
        grid.fill_with(|x, y| (x + y) % 2 == 0);
        assert_eq!(grid.population(), 8);
        grid.clear();
        assert_eq!(grid.population(), 0);
    }
}
