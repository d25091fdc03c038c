use super::GridView;

/// Trait for cellular automaton transition rules.
/// A rule only reads the generation it is given, so it can be evaluated
/// for disjoint cells from several threads at once.
pub trait Rule: Send + Sync {
    /// Name of the rule
    fn name(&self) -> &'static str;

    /// Next state of the cell at (x, y), computed from the settled generation
    fn evaluate(&self, grid: &GridView<'_>, x: usize, y: usize) -> bool;
}

/// Count living cells in the Moore neighborhood of (x, y).
/// Neighbors beyond the grid edge are dead; the grid does not wrap.
pub fn count_alive_neighbors(grid: &GridView<'_>, x: usize, y: usize) -> u8 {
    let (x, y) = (x as isize, y as isize);
    (-1..=1)
        .flat_map(|dy| (-1..=1).map(move |dx| (dx, dy)))
        .filter(|&(dx, dy)| dx != 0 || dy != 0)
        .filter(|&(dx, dy)| grid.is_alive(x + dx, y + dy))
        .count() as u8
}

fn current_and_neighbors(grid: &GridView<'_>, x: usize, y: usize) -> (bool, u8) {
    (
        grid.is_alive(x as isize, y as isize),
        count_alive_neighbors(grid, x, y),
    )
}

/// Conway's Game of Life (B3/S23)
#[derive(Clone, Copy, Debug, Default)]
pub struct GameOfLifeRule;

impl Rule for GameOfLifeRule {
    fn name(&self) -> &'static str {
        "Conway"
    }

    fn evaluate(&self, grid: &GridView<'_>, x: usize, y: usize) -> bool {
        matches!(current_and_neighbors(grid, x, y), (true, 2 | 3) | (false, 3))
    }
}

/// HighLife (B36/S23)
/// Like Conway's Life but cells with 6 neighbors are born
#[derive(Clone, Copy, Debug, Default)]
pub struct HighLifeRule;

impl Rule for HighLifeRule {
    fn name(&self) -> &'static str {
        "HighLife"
    }

    fn evaluate(&self, grid: &GridView<'_>, x: usize, y: usize) -> bool {
        matches!(current_and_neighbors(grid, x, y), (true, 2 | 3) | (false, 3 | 6))
    }
}

/// Seeds (B2/S)
/// Every living cell dies each generation
#[derive(Clone, Copy, Debug, Default)]
pub struct SeedsRule;

impl Rule for SeedsRule {
    fn name(&self) -> &'static str {
        "Seeds"
    }

    fn evaluate(&self, grid: &GridView<'_>, x: usize, y: usize) -> bool {
        matches!(current_and_neighbors(grid, x, y), (false, 2))
    }
}

/// Day & Night (B3678/S34678)
#[derive(Clone, Copy, Debug, Default)]
pub struct DayAndNightRule;

impl Rule for DayAndNightRule {
    fn name(&self) -> &'static str {
        "Day&Night"
    }

    fn evaluate(&self, grid: &GridView<'_>, x: usize, y: usize) -> bool {
        matches!(
            current_and_neighbors(grid, x, y),
            (true, 3 | 4 | 6 | 7 | 8) | (false, 3 | 6 | 7 | 8)
        )
    }
}

/// Get all available rules
pub fn all_rules() -> Vec<Box<dyn Rule>> {
    vec![
        Box::new(GameOfLifeRule),
        Box::new(HighLifeRule),
        Box::new(SeedsRule),
        Box::new(DayAndNightRule),
    ]
}

/// Get default rule (Conway's Life)
pub fn default_rule() -> Box<dyn Rule> {
    Box::new(GameOfLifeRule)
}
