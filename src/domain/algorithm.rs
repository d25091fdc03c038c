//! Algorithm enum for selecting how a generation is evaluated.
//!
//! Both strategies read only the settled generation and write only the
//! staging buffer, so they produce identical results. They differ in how
//! the per-cell work is scheduled.

use rayon::prelude::*;

use super::{GridView, Rule};

/// Available evolution strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Algorithm {
    /// Cell by cell in row-major order on the calling thread
    #[default]
    Serial,
    /// Rows of the next buffer split across the rayon thread pool
    ParallelRows,
}

impl Algorithm {
    /// The other strategy
    pub fn toggled(self) -> Algorithm {
        match self {
            Algorithm::Serial => Algorithm::ParallelRows,
            Algorithm::ParallelRows => Algorithm::Serial,
        }
    }

    /// Display name for diagnostics
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Serial => "Serial",
            Algorithm::ParallelRows => "Parallel",
        }
    }

    /// Evaluate `rule` for every cell of `current`, writing results into `next`.
    /// `next` must have the same shape as `current`.
    pub fn evolve_into(self, rule: &dyn Rule, current: GridView<'_>, next: &mut [bool]) {
        let width = current.width();
        debug_assert_eq!(next.len(), width * current.height());

        match self {
            Algorithm::Serial => {
                for (idx, cell) in next.iter_mut().enumerate() {
                    *cell = rule.evaluate(&current, idx % width, idx / width);
                }
            }
            Algorithm::ParallelRows => {
                next.par_chunks_mut(width)
                    .enumerate()
                    .for_each(|(y, row)| {
                        for (x, cell) in row.iter_mut().enumerate() {
                            *cell = rule.evaluate(&current, x, y);
                        }
                    });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{GameOfLifeRule, Grid};

    #[test]
    fn test_default_is_serial() {
        assert_eq!(Algorithm::default(), Algorithm::Serial);
    }

    #[test]
    fn test_toggled_round_trips() {
        assert_eq!(Algorithm::Serial.toggled(), Algorithm::ParallelRows);
        assert_eq!(Algorithm::ParallelRows.toggled(), Algorithm::Serial);
    }

    #[test]
    fn test_names_are_unique() {
        assert_ne!(Algorithm::Serial.name(), Algorithm::ParallelRows.name());
    }

    #[test]
    fn test_strategies_agree() {
        let mut grid = Grid::new(37, 23).unwrap();
        grid.fill_with(|x, y| (x * 7 + y * 13) % 5 < 2);

        let mut serial = vec![false; 37 * 23];
        let mut parallel = vec![true; 37 * 23];
        Algorithm::Serial.evolve_into(&GameOfLifeRule, grid.view(), &mut serial);
        Algorithm::ParallelRows.evolve_into(&GameOfLifeRule, grid.view(), &mut parallel);
        assert_eq!(serial, parallel);
    }
}
