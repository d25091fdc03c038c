use macroquad::prelude::*;

use crate::application::Simulation;
use crate::domain::GridView;

/// Draw every cell of a generation as a `cell_size` square
pub fn draw_grid(grid: &GridView<'_>, cell_size: f32) {
    let alive_color = BLACK;
    let dead_color = Color::from_rgba(255, 255, 255, 127); // Translucent white

    for (x, y, alive) in grid.iter_cells() {
        let color = if alive { alive_color } else { dead_color };
        draw_rectangle(
            x as f32 * cell_size,
            y as f32 * cell_size,
            cell_size,
            cell_size,
            color,
        );
    }
}

/// Diagnostics overlay in the top-left corner
pub fn draw_stats(sim: &Simulation) {
    let state = if sim.is_running { "running" } else { "paused" };
    let lines = [
        format!("FPS: {}  TPS: {:.0}  gen: {}", get_fps(), sim.ticks_per_second, sim.generation),
        format!(
            "pop: {}  step: {:.2}ms  {}  seed: {}",
            sim.automaton.current_state().population(),
            sim.last_step_time_ms,
            state,
            sim.seed
        ),
        format!(
            "rule: {}  algo: {}  click: {}",
            sim.automaton.rule_name(),
            sim.automaton.algorithm().name(),
            sim.selected_pattern().name
        ),
    ];

    draw_rectangle(0.0, 0.0, 360.0, 62.0, Color::from_rgba(0, 0, 0, 160));
    for (i, line) in lines.iter().enumerate() {
        draw_text(line, 6.0, 18.0 + i as f32 * 18.0, 18.0, WHITE);
    }
}
