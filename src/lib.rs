pub mod game;
pub mod gamecfg;
pub mod input;
pub mod render;
pub mod sound_director;
pub mod ui;

pub mod sys;

/// Game logic advances 50 times per second.
pub const GAME_TICKRATE: f32 = 1.0 / 50.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameState {
    Active,
    GameOver,
}
