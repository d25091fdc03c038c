use macroquad::prelude::*;
use log::debug;

use crate::application::Simulation;

/// Convert a pointer position in pixels to the grid cell under it.
/// Positions left of or above the grid map to nothing.
pub fn cell_at_pixel(pixel_x: f32, pixel_y: f32, cell_size: f32) -> Option<(usize, usize)> {
    if pixel_x < 0.0 || pixel_y < 0.0 || cell_size <= 0.0 {
        return None;
    }
    Some(((pixel_x / cell_size) as usize, (pixel_y / cell_size) as usize))
}

/// Left release drops the selected pattern, right button erases cells
pub fn handle_mouse_click(sim: &mut Simulation, cell_size: f32) {
    let place = is_mouse_button_released(MouseButton::Left);
    let erase = is_mouse_button_down(MouseButton::Right);
    if !place && !erase {
        return;
    }

    let (mouse_x, mouse_y) = mouse_position();
    match cell_at_pixel(mouse_x, mouse_y, cell_size) {
        Some((x, y)) if place => sim.place_pattern(x, y),
        Some((x, y)) => sim.erase_cell(x, y),
        None => debug!("click outside grid at ({mouse_x}, {mouse_y})"),
    }
}

/// Process keyboard input functionally
pub fn process_keyboard_input(sim: Simulation) -> Simulation {
    type KeyAction = (KeyCode, fn(Simulation) -> Simulation);

    let actions: [KeyAction; 9] = [
        (KeyCode::Space, Simulation::toggle_running),
        (KeyCode::N, Simulation::step_once),
        (KeyCode::C, Simulation::clear),
        (KeyCode::R, Simulation::reseed_next),
        (KeyCode::Tab, Simulation::next_rule),
        (KeyCode::A, Simulation::toggle_algorithm),
        (KeyCode::P, Simulation::next_pattern),
        (KeyCode::Up, |s| s.adjust_speed(1.0)),
        (KeyCode::Down, |s| s.adjust_speed(-1.0)),
    ];

    actions.iter().fold(sim, |s, (key, action)| {
        if is_key_pressed(*key) { action(s) } else { s }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_at_pixel() {
        assert_eq!(cell_at_pixel(0.0, 0.0, 8.0), Some((0, 0)));
        assert_eq!(cell_at_pixel(7.9, 8.0, 8.0), Some((0, 1)));
        assert_eq!(cell_at_pixel(1023.0, 17.5, 8.0), Some((127, 2)));
    }

    #[test]
    fn test_cell_at_pixel_rejects_negative() {
        assert_eq!(cell_at_pixel(-1.0, 5.0, 8.0), None);
        assert_eq!(cell_at_pixel(5.0, -0.5, 8.0), None);
        assert_eq!(cell_at_pixel(5.0, 5.0, 0.0), None);
    }
}
