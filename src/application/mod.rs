mod config;
mod simulation;

pub use config::Config;
pub use simulation::Simulation;
