use std::str::FromStr;

use log::warn;

use crate::domain::presets;

/// Settings for the windowed driver. The automaton itself reads none of
/// these; they only decide how big a grid to build and how fast to step it.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub window_title: String,
    pub screen_width: u32,
    pub screen_height: u32,
    /// Side of one cell in pixels
    pub cell_size: u32,
    pub ticks_per_second: f32,
    pub seed: u64,
    /// Preset placed by a left click
    pub click_pattern: &'static str,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            window_title: "Cellular Automaton".to_owned(),
            screen_width: 1024,
            screen_height: 1024,
            cell_size: 8,
            ticks_per_second: 8.0,
            seed: 4,
            click_pattern: "Glider",
        }
    }
}

impl Config {
    /// Defaults overridden by `LIFE_SEED`, `LIFE_TPS`, `LIFE_CELL_SIZE`,
    /// `LIFE_SCREEN_SIZE` (`N` or `WxH`) and `LIFE_PATTERN` (a preset name)
    pub fn from_env() -> Self {
        Self::default().with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from any key/value source. Values that fail to
    /// parse are logged and the previous setting is kept.
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(seed) = parse_var(&lookup, "LIFE_SEED") {
            self.seed = seed;
        }
        if let Some(tps) = parse_var::<f32>(&lookup, "LIFE_TPS") {
            if tps > 0.0 {
                self.ticks_per_second = tps;
            } else {
                warn!("ignoring LIFE_TPS={tps}: must be positive");
            }
        }
        if let Some(size) = parse_var::<u32>(&lookup, "LIFE_CELL_SIZE") {
            if size > 0 {
                self.cell_size = size;
            } else {
                warn!("ignoring LIFE_CELL_SIZE=0");
            }
        }
        if let Some(raw) = lookup("LIFE_SCREEN_SIZE") {
            match parse_screen_size(&raw) {
                Some((w, h)) => {
                    self.screen_width = w;
                    self.screen_height = h;
                }
                None => warn!("ignoring LIFE_SCREEN_SIZE={raw:?}: expected N or WxH"),
            }
        }
        if let Some(raw) = lookup("LIFE_PATTERN") {
            match presets::by_name(raw.trim()) {
                Some(pattern) => self.click_pattern = pattern.name,
                None => warn!("ignoring LIFE_PATTERN={raw:?}: unknown pattern"),
            }
        }
        self
    }

    /// Grid size that fills the screen at the configured cell size
    pub fn grid_dimensions(&self) -> (usize, usize) {
        let cell = self.cell_size.max(1);
        (
            (self.screen_width / cell) as usize,
            (self.screen_height / cell) as usize,
        )
    }
}

fn parse_var<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
    let raw = lookup(key)?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!("ignoring {key}={raw:?}: not a valid value");
            None
        }
    }
}

fn parse_screen_size(raw: &str) -> Option<(u32, u32)> {
    let raw = raw.trim();
    let (w, h) = match raw.split_once(['x', 'X']) {
        Some((w, h)) => (w.trim().parse().ok()?, h.trim().parse().ok()?),
        None => {
            let side = raw.parse().ok()?;
            (side, side)
        }
    };
    (w > 0 && h > 0).then_some((w, h))
}
