use log::{debug, info, trace};
use rand::{Rng, SeedableRng, rngs::StdRng};

use super::{Algorithm, Grid, GridView, Pattern, Result, Rule, presets};

/// Automaton owns one double-buffered grid and the rule that advances it.
/// Each `step` evaluates the rule against the settled generation only, so
/// every cell updates simultaneously.
pub struct Automaton {
    grid: Grid,
    rule: Box<dyn Rule>,
    algorithm: Algorithm,
}

impl Automaton {
    /// Create an automaton with an all-dead grid of the given size
    pub fn new(width: usize, height: usize, rule: Box<dyn Rule>) -> Result<Self> {
        let grid = Grid::new(width, height)?;
        info!("created {}x{} automaton with rule {}", width, height, rule.name());
        Ok(Self {
            grid,
            rule,
            algorithm: Algorithm::default(),
        })
    }

    pub const fn dimensions(&self) -> (usize, usize) {
        self.grid.dimensions()
    }

    /// Advance exactly one generation
    pub fn step(&mut self) {
        let (current, next) = self.grid.staging();
        self.algorithm.evolve_into(self.rule.as_ref(), current, next);
        self.grid.swap();
        trace!("stepped, population {}", self.grid.population());
    }

    /// The settled generation, for rendering and inspection
    pub fn current_state(&self) -> GridView<'_> {
        self.grid.view()
    }

    /// Mark one cell alive in the settled generation
    pub fn set_alive(&mut self, x: usize, y: usize) -> Result<()> {
        self.grid.set(x, y, true)
    }

    /// Set one cell of the settled generation, alive or dead
    pub fn set_cell(&mut self, x: usize, y: usize, alive: bool) -> Result<()> {
        self.grid.set(x, y, alive)
    }

    /// Place a glider with its origin at (x, y)
    pub fn place_glider(&mut self, x: usize, y: usize) -> Result<()> {
        self.place_pattern(&presets::glider(), x, y)
    }

    /// Place any pattern; the grid is left unchanged if it does not fit
    pub fn place_pattern(&mut self, pattern: &Pattern, x: usize, y: usize) -> Result<()> {
        pattern.place_on(&mut self.grid, x, y).inspect_err(|err| {
            debug!("rejected placement: {err}");
        })
    }

    /// Reinitialize every cell from a seeded PRNG, each alive with
    /// probability 0.5. The same seed always yields the same grid.
    pub fn seed(&mut self, seed: u64) {
        let mut rng = StdRng::seed_from_u64(seed);
        self.grid.fill_with(|_, _| rng.random_bool(0.5));
        debug!("seeded with {seed}, population {}", self.grid.population());
    }

    /// Kill every cell
    pub fn clear(&mut self) {
        self.grid.clear();
    }

    /// Replace the rule; the grid is kept as is
    pub fn set_rule(&mut self, rule: Box<dyn Rule>) {
        info!("rule changed from {} to {}", self.rule.name(), rule.name());
        self.rule = rule;
    }

    /// Name of the active rule
    pub fn rule_name(&self) -> &'static str {
        self.rule.name()
    }

    /// Choose how later steps schedule the per-cell work
    pub fn set_algorithm(&mut self, algorithm: Algorithm) {
        info!("algorithm changed to {}", algorithm.name());
        self.algorithm = algorithm;
    }

    pub const fn algorithm(&self) -> Algorithm {
        self.algorithm
    }
}
