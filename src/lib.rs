// Domain layer - Grid, rules and the stepping engine
pub mod domain;

// Application layer - Configuration and the fixed-rate driver
pub mod application;

// Infrastructure layer - rendering, input
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{
    Algorithm, Automaton, AutomatonError, GameOfLifeRule, Grid, GridView, Pattern, Rule, presets,
};
pub use application::{Config, Simulation};
