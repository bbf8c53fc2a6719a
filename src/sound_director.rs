use macroquad::audio::{load_sound, play_sound_once, Sound};
use macroquad::prelude::*;

use crate::game::{Game, GameEvent};

static COLLECT_FILE: &'static str = "assets/collect.wav";
static WRONG_FILE: &'static str = "assets/wrong.wav";
static GAMEOVER_FILE: &'static str = "assets/gameover.wav";

/// Turns game events into sounds. Any sound that failed to load
/// at startup makes its events silent for the whole session.
pub struct SoundDirector {
    collect: Option<Sound>,
    wrong: Option<Sound>,
    game_over: Option<Sound>,
}

impl SoundDirector {
    pub async fn new() -> Self {
        Self {
            collect: try_sound(COLLECT_FILE).await,
            wrong: try_sound(WRONG_FILE).await,
            game_over: try_sound(GAMEOVER_FILE).await,
        }
    }

    pub fn run(&self, game: &mut Game) {
        for event in game.take_events() {
            let sound = match event {
                GameEvent::Collected => &self.collect,
                GameEvent::LifeLost => &self.wrong,
                GameEvent::GameOver => &self.game_over,
            };
            if let Some(sound) = sound {
                play_sound_once(sound);
            }
        }
    }
}

async fn try_sound(path: &str) -> Option<Sound> {
    match load_sound(path).await {
        Ok(sound) => Some(sound),
        Err(err) => {
            warn!("Sound {path:?} unavailable, staying silent: {err}");
            None
        }
    }
}
