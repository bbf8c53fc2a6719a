use macroquad::prelude::*;

use crate::game::{PLAYFIELD_HEIGHT, PLAYFIELD_WIDTH};
use crate::GameState;

const ANNOUNCE_FONT_SIZE: u16 = 50;
const SCORE_FONT_SIZE: u16 = 35;
const HINT_FONT_SIZE: u16 = 25;
const FONT_SCALE: f32 = 1.0;

static GAMEOVER_TEXT: &'static str = "GAME OVER";
static RESTART_HINT: &'static str = "Press SPACE to Play Again";

/// Draws the state-dependent overlays. Expects the playfield camera
/// to be active already.
pub struct Ui;

impl Ui {
    pub fn new() -> Self {
        Self
    }

    pub fn draw(&self, state: GameState, final_score: u32) {
        match state {
            GameState::GameOver => self.draw_game_over(final_score),
            GameState::Active => (),
        }
    }

    fn draw_game_over(&self, final_score: u32) {
        draw_rectangle(
            0.0,
            0.0,
            PLAYFIELD_WIDTH,
            PLAYFIELD_HEIGHT,
            Color::from_rgba(0, 0, 0, 180),
        );

        self.draw_centered_line(GAMEOVER_TEXT, -20.0, ANNOUNCE_FONT_SIZE);
        self.draw_centered_line(&format!("Final Score: {final_score}"), 30.0, SCORE_FONT_SIZE);
        self.draw_centered_line(RESTART_HINT, 80.0, HINT_FONT_SIZE);
    }

    fn draw_centered_line(&self, text: &str, y_off: f32, font_size: u16) {
        let center = get_text_center(text, None, font_size, FONT_SCALE, 0.0);
        draw_text_ex(
            text,
            PLAYFIELD_WIDTH / 2.0 - center.x,
            PLAYFIELD_HEIGHT / 2.0 + y_off,
            TextParams {
                font: None,
                font_size,
                color: WHITE,
                font_scale: FONT_SCALE,
                ..Default::default()
            },
        );
    }
}
