use macroquad::prelude::*;

#[derive(Clone, Copy, Debug)]
pub struct InputModel {
    pub left_movement_down: bool,
    pub right_movement_down: bool,
    pub confirmation_detected: bool,
    pub fullscreen_toggle_requested: bool,
}

impl InputModel {
    pub fn capture() -> Self {
        let left_movement_down = is_key_down(KeyCode::A) || is_key_down(KeyCode::Left);
        let right_movement_down = is_key_down(KeyCode::D) || is_key_down(KeyCode::Right);
        let confirmation_detected = is_key_pressed(KeyCode::Space);
        let fullscreen_toggle_requested = is_key_pressed(KeyCode::F11);

        Self {
            left_movement_down,
            right_movement_down,
            confirmation_detected,
            fullscreen_toggle_requested,
        }
    }
}
