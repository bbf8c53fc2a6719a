use macroquad::prelude::*;

pub const GAME_CFG_PATH: &str = "assets/game.ron";

#[derive(Debug, Clone, Copy, Default, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct GameCfg {
    pub spawn: Spawn,
    pub catcher: Catcher,
    pub item: FallingItem,
    pub scoring: Scoring,
}

#[derive(Debug, Clone, Copy, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct Spawn {
    /// One item gets spawned every this many ticks.
    pub interval_ticks: u32,
    pub speed_min: f32,
    pub speed_max: f32,
}

#[derive(Debug, Clone, Copy, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct Catcher {
    pub width: f32,
    pub height: f32,
    /// Horizontal movement per tick while a direction key is held.
    pub speed: f32,
}

#[derive(Debug, Clone, Copy, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct FallingItem {
    pub size: f32,
}

#[derive(Debug, Clone, Copy, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct Scoring {
    pub catch_points: u32,
    pub starting_lives: i32,
}

impl Default for Spawn {
    fn default() -> Self {
        Self {
            interval_ticks: 50,
            speed_min: 2.0,
            speed_max: 5.0,
        }
    }
}

impl Default for Catcher {
    fn default() -> Self {
        Self {
            width: 100.0,
            height: 120.0,
            speed: 12.0,
        }
    }
}

impl Default for FallingItem {
    fn default() -> Self {
        Self { size: 50.0 }
    }
}

impl Default for Scoring {
    fn default() -> Self {
        Self {
            catch_points: 10,
            starting_lives: 3,
        }
    }
}

impl GameCfg {
    /// Load the tunables, falling back to the defaults when the file
    /// is absent or does not parse. Never fatal.
    pub async fn load() -> Self {
        let text = match load_string(GAME_CFG_PATH).await {
            Ok(text) => text,
            Err(err) => {
                warn!("Game config {GAME_CFG_PATH:?} unavailable, using defaults: {err}");
                return Self::default();
            }
        };

        match ron::from_str(&text) {
            Ok(cfg) => cfg,
            Err(err) => {
                warn!("Game config {GAME_CFG_PATH:?} failed to parse, using defaults: {err}");
                Self::default()
            }
        }
    }
}
