use macroquad::prelude::*;
use log::{error, info};
use life_automaton::{Config, Simulation, input, rendering};

fn window_conf() -> Conf {
    let config = Config::from_env();
    Conf {
        window_title: config.window_title.clone(),
        window_width: config.screen_width as i32,
        window_height: config.screen_height as i32,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::init();

    let config = Config::from_env();
    info!("starting with {config:?}");

    let mut sim = match Simulation::new(&config) {
        Ok(sim) => sim,
        Err(err) => {
            error!("cannot build automaton: {err}");
            return;
        }
    };
    let cell_size = config.cell_size as f32;

    loop {
        input::handle_mouse_click(&mut sim, cell_size);
        sim = input::process_keyboard_input(sim);

        // Update game state
        sim = sim.tick(get_frame_time());

        clear_background(BLACK);
        rendering::draw_grid(&sim.automaton.current_state(), cell_size);
        rendering::draw_stats(&sim);

        next_frame().await;
    }
}
