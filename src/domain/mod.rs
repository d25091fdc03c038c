mod error;
mod grid;
mod rules;
mod patterns;
mod algorithm;
mod automaton;

pub use error::{AutomatonError, Result};
pub use grid::{Grid, GridView};
pub use rules::{
    Rule, GameOfLifeRule, HighLifeRule, SeedsRule, DayAndNightRule,
    all_rules, count_alive_neighbors, default_rule,
};
pub use patterns::{Pattern, presets};
pub use algorithm::Algorithm;
pub use automaton::Automaton;
