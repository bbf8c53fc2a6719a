use macroquad::prelude::*;
use macroquad::rand::gen_range;

use crate::gamecfg::GameCfg;

pub const PLAYFIELD_WIDTH: f32 = 800.0;
pub const PLAYFIELD_HEIGHT: f32 = 600.0;

/// What an item does to the session when caught.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ItemKind {
    Beneficial,
    Harmful,
}

/// A falling item. `sprite` is a random pick made at spawn time;
/// the renderer maps it into whatever textures actually loaded.
#[derive(Clone, Copy, Debug)]
pub struct Item {
    pub pos: Vec2,
    pub kind: ItemKind,
    pub speed: f32,
    pub sprite: u8,
}

/// Events the tick produces for the sound director.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameEvent {
    Collected,
    LifeLost,
    GameOver,
}

pub struct Game {
    cfg: GameCfg,
    pub score: u32,
    pub lives: i32,
    pub over: bool,
    pub catcher_x: f32,
    pub items: Vec<Item>,
    spawn_counter: u32,
    events: Vec<GameEvent>,
}

impl Game {
    pub fn new(cfg: GameCfg) -> Self {
        Self {
            score: 0,
            lives: cfg.scoring.starting_lives,
            over: false,
            catcher_x: (PLAYFIELD_WIDTH - cfg.catcher.width) / 2.0,
            items: Vec::new(),
            spawn_counter: 0,
            events: Vec::new(),
            cfg,
        }
    }

    pub fn cfg(&self) -> &GameCfg {
        &self.cfg
    }

    /// Restore the starting state and resume ticking.
    pub fn reset(&mut self) {
        self.score = 0;
        self.lives = self.cfg.scoring.starting_lives;
        self.over = false;
        self.catcher_x = (PLAYFIELD_WIDTH - self.cfg.catcher.width) / 2.0;
        self.items.clear();
        self.spawn_counter = 0;
    }

    /// Shift the catcher by `dir` (-1, 0 or 1) steps, clamped to the playfield.
    pub fn move_catcher(&mut self, dir: f32) {
        self.catcher_x = (self.catcher_x + dir * self.cfg.catcher.speed)
            .clamp(0.0, PLAYFIELD_WIDTH - self.cfg.catcher.width);
    }

    /// One fixed-rate step: spawn, fall, catch, cull.
    ///
    /// The catch check runs before the off-screen check. An item that
    /// reaches the catcher on the same step it would leave the playfield
    /// counts as caught.
    pub fn tick(&mut self) {
        if self.over {
            return;
        }

        self.spawn_counter += 1;
        if self.spawn_counter >= self.cfg.spawn.interval_ticks {
            self.spawn_counter = 0;
            self.spawn_item();
        }

        let item_size = self.cfg.item.size;
        let catch_band = PLAYFIELD_HEIGHT - self.cfg.catcher.height;
        let catcher_left = self.catcher_x;
        let catcher_right = self.catcher_x + self.cfg.catcher.width;

        // Rebuild the item list instead of removing mid-iteration.
        let mut kept = Vec::with_capacity(self.items.len());
        for mut item in std::mem::take(&mut self.items) {
            item.pos.y += item.speed;

            let caught = item.pos.y + item_size >= catch_band
                && item.pos.x + item_size >= catcher_left
                && item.pos.x <= catcher_right;
            if caught {
                self.collect(item.kind);
                continue;
            }

            if item.pos.y > PLAYFIELD_HEIGHT {
                continue;
            }

            kept.push(item);
        }
        self.items = kept;
    }

    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    fn spawn_item(&mut self) {
        let kind = if gen_range::<i32>(0, 2) == 0 {
            ItemKind::Beneficial
        } else {
            ItemKind::Harmful
        };
        self.items.push(Item {
            pos: vec2(
                gen_range(0.0, PLAYFIELD_WIDTH - self.cfg.item.size),
                0.0,
            ),
            kind,
            speed: gen_range(self.cfg.spawn.speed_min, self.cfg.spawn.speed_max),
            sprite: gen_range::<u32>(0, 256) as u8,
        });
    }

    fn collect(&mut self, kind: ItemKind) {
        match kind {
            ItemKind::Beneficial => {
                self.score += self.cfg.scoring.catch_points;
                self.events.push(GameEvent::Collected);
            }
            ItemKind::Harmful => {
                self.lives = (self.lives - 1).max(0);
                self.events.push(GameEvent::LifeLost);
                if self.lives == 0 {
                    self.over = true;
                    self.events.push(GameEvent::GameOver);
                }
            }
        }
    }
}
