use log::{debug, info};

use super::Config;
use crate::domain::{Automaton, Pattern, Result, all_rules, default_rule, presets};

/// Simulation drives the automaton at a fixed logical rate.
/// The generation counter lives here, not in the automaton: only the
/// on-screen diagnostics need it.
pub struct Simulation {
    pub automaton: Automaton,
    pub is_running: bool,
    pub generation: u64,
    pub update_timer: f32,
    pub ticks_per_second: f32,
    pub last_step_time_ms: f32, // Evolution performance metric
    pub seed: u64,
    /// Index into `all_rules()` of the active rule; the default rule is first
    pub rule_index: usize,
    /// Patterns a click can place; never empty
    pub patterns: Vec<Pattern>,
    pub pattern_index: usize,
}

impl Simulation {
    /// Build a seeded automaton sized from the config; starts running
    pub fn new(config: &Config) -> Result<Self> {
        let (width, height) = config.grid_dimensions();
        let mut automaton = Automaton::new(width, height, default_rule())?;
        automaton.seed(config.seed);

        let patterns = presets::all_patterns();
        let pattern_index = patterns
            .iter()
            .position(|p| p.name == config.click_pattern)
            .unwrap_or(0);
        info!(
            "simulation ready: {}x{} cells, seed {}, {} ticks/s",
            width, height, config.seed, config.ticks_per_second
        );

        Ok(Self {
            automaton,
            is_running: true,
            generation: 0,
            update_timer: 0.0,
            ticks_per_second: config.ticks_per_second,
            last_step_time_ms: 0.0,
            seed: config.seed,
            rule_index: 0,
            patterns,
            pattern_index,
        })
    }

    /// Set running state (builder pattern)
    pub fn with_running(mut self, running: bool) -> Self {
        self.is_running = running;
        self
    }

    /// Toggle play/pause state
    pub fn toggle_running(mut self) -> Self {
        self.is_running = !self.is_running;
        self
    }

    /// Advance one generation regardless of the timer
    pub fn step_once(mut self) -> Self {
        let start = std::time::Instant::now();
        self.automaton.step();
        self.last_step_time_ms = start.elapsed().as_secs_f32() * 1000.0;
        self.generation += 1;
        self
    }

    /// Clear grid and reset generation counter
    pub fn clear(mut self) -> Self {
        self.automaton.clear();
        self.generation = 0;
        self
    }

    /// Reseed grid and reset generation counter
    pub fn reseed(mut self, seed: u64) -> Self {
        self.automaton.seed(seed);
        self.seed = seed;
        self.generation = 0;
        self
    }

    /// Reseed with the seed after the current one
    pub fn reseed_next(self) -> Self {
        let seed = self.seed.wrapping_add(1);
        self.reseed(seed)
    }

    /// Adjust simulation speed
    pub fn adjust_speed(mut self, delta: f32) -> Self {
        self.ticks_per_second = (self.ticks_per_second + delta).clamp(1.0, 60.0);
        self
    }

    /// Switch to the next rule in `all_rules()`, keeping the cells
    pub fn next_rule(mut self) -> Self {
        let rules = all_rules();
        self.rule_index = (self.rule_index + 1) % rules.len();
        if let Some(rule) = rules.into_iter().nth(self.rule_index) {
            self.automaton.set_rule(rule);
        }
        self
    }

    /// Swap between serial and parallel stepping
    pub fn toggle_algorithm(mut self) -> Self {
        let algorithm = self.automaton.algorithm().toggled();
        self.automaton.set_algorithm(algorithm);
        self
    }

    /// Select the next pattern for click placement
    pub fn next_pattern(mut self) -> Self {
        self.pattern_index = (self.pattern_index + 1) % self.patterns.len();
        self
    }

    pub fn selected_pattern(&self) -> &Pattern {
        &self.patterns[self.pattern_index]
    }

    /// Place the selected pattern at a grid cell picked by the user.
    /// A pattern that would not fit is ignored.
    pub fn place_pattern(&mut self, x: usize, y: usize) {
        let pattern = &self.patterns[self.pattern_index];
        if let Err(err) = self.automaton.place_pattern(pattern, x, y) {
            debug!("click ignored: {err}");
        }
    }

    /// Kill one cell picked by the user
    pub fn erase_cell(&mut self, x: usize, y: usize) {
        if let Err(err) = self.automaton.set_cell(x, y, false) {
            debug!("erase ignored: {err}");
        }
    }

    /// Update simulation by one frame.
    /// Steps at most once per call, when a full interval has elapsed.
    pub fn tick(mut self, delta_time: f32) -> Self {
        if !self.is_running {
            return self;
        }

        self.update_timer += delta_time;
        let update_interval = 1.0 / self.ticks_per_second;

        if self.update_timer >= update_interval {
            self = self.step_once();
            self.update_timer = 0.0;
        }

        self
    }
}
