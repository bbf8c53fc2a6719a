use macroquad::prelude::*;

use crate::game::{Game, Item, ItemKind, PLAYFIELD_HEIGHT, PLAYFIELD_WIDTH};

pub const BACKGROUND_COLOR: Color = Color::from_rgba(230, 230, 255, 255);
pub const BENEFICIAL_COLOR: Color = GREEN;
pub const HARMFUL_COLOR: Color = RED;
pub const CATCHER_COLOR: Color = BLUE;

const SCORE_FONT_SIZE: f32 = 24.0;
const LIFE_ICON_RADIUS: f32 = 12.5;
const LIFE_ICON_STRIDE: f32 = 40.0;
const LIFE_ICON_TOP: f32 = 15.0;

static BACKGROUND_FILE: &'static str = "assets/background.png";
static CATCHER_FILE: &'static str = "assets/dustbin.png";

static BENEFICIAL_FILES: &'static [&'static str] = &[
    "assets/apple.png",
    "assets/banana.png",
    "assets/carrot.png",
    "assets/tomato.png",
    "assets/broccoli.png",
];

static HARMFUL_FILES: &'static [&'static str] = &[
    "assets/trash.png",
    "assets/plastic.png",
    "assets/cigarette.png",
    "assets/battery.png",
];

/// All the visuals. Every texture is optional: when a file fails
/// to load at startup the drawing falls back to flat shapes.
pub struct Render {
    background: Option<Texture2D>,
    catcher: Option<Texture2D>,
    beneficial: Vec<Texture2D>,
    harmful: Vec<Texture2D>,
}

impl Render {
    pub async fn new() -> Self {
        let background = try_texture(BACKGROUND_FILE).await;
        let catcher = try_texture(CATCHER_FILE).await;

        let mut beneficial = Vec::new();
        for path in BENEFICIAL_FILES {
            beneficial.extend(try_texture(path).await);
        }

        let mut harmful = Vec::new();
        for path in HARMFUL_FILES {
            harmful.extend(try_texture(path).await);
        }

        info!(
            "Loaded {}/{} item textures",
            beneficial.len() + harmful.len(),
            BENEFICIAL_FILES.len() + HARMFUL_FILES.len(),
        );

        Self {
            background,
            catcher,
            beneficial,
            harmful,
        }
    }

    pub fn draw(&self, game: &Game) {
        set_camera(&self.playfield_camera());

        self.draw_background();
        self.draw_items(game);
        self.draw_catcher(game);
        self.draw_stats(game);
    }

    pub fn playfield_camera(&self) -> Camera2D {
        let mut cam = Camera2D::from_display_rect(Rect {
            x: 0.0,
            y: 0.0,
            w: PLAYFIELD_WIDTH,
            h: PLAYFIELD_HEIGHT,
        });
        cam.zoom.y *= -1.0;

        cam
    }

    fn draw_background(&self) {
        clear_background(BACKGROUND_COLOR);

        let Some(background) = &self.background else {
            return;
        };
        draw_texture_ex(
            background,
            0.0,
            0.0,
            WHITE,
            DrawTextureParams {
                dest_size: Some(vec2(PLAYFIELD_WIDTH, PLAYFIELD_HEIGHT)),
                ..Default::default()
            },
        );
    }

    fn draw_items(&self, game: &Game) {
        let size = game.cfg().item.size;
        for item in &game.items {
            self.draw_item(item, size);
        }
    }

    fn draw_item(&self, item: &Item, size: f32) {
        let (textures, fallback) = match item.kind {
            ItemKind::Beneficial => (&self.beneficial, BENEFICIAL_COLOR),
            ItemKind::Harmful => (&self.harmful, HARMFUL_COLOR),
        };

        if textures.is_empty() {
            draw_circle(
                item.pos.x + size / 2.0,
                item.pos.y + size / 2.0,
                size / 2.0,
                fallback,
            );
            return;
        }

        let texture = &textures[item.sprite as usize % textures.len()];
        draw_texture_ex(
            texture,
            item.pos.x,
            item.pos.y,
            WHITE,
            DrawTextureParams {
                dest_size: Some(vec2(size, size)),
                ..Default::default()
            },
        );
    }

    fn draw_catcher(&self, game: &Game) {
        let width = game.cfg().catcher.width;
        let height = game.cfg().catcher.height;
        let y = PLAYFIELD_HEIGHT - height;

        match &self.catcher {
            Some(texture) => draw_texture_ex(
                texture,
                game.catcher_x,
                y,
                WHITE,
                DrawTextureParams {
                    dest_size: Some(vec2(width, height)),
                    ..Default::default()
                },
            ),
            None => draw_rectangle(game.catcher_x, y, width, height, CATCHER_COLOR),
        }
    }

    fn draw_stats(&self, game: &Game) {
        draw_text(
            &format!("Score: {}", game.score),
            20.0,
            30.0,
            SCORE_FONT_SIZE,
            BLACK,
        );

        for i in 0..game.lives {
            let x = PLAYFIELD_WIDTH - LIFE_ICON_STRIDE * (i + 1) as f32 + LIFE_ICON_RADIUS;
            let y = LIFE_ICON_TOP + LIFE_ICON_RADIUS;
            draw_circle(x, y, LIFE_ICON_RADIUS, HARMFUL_COLOR);
            draw_circle_lines(x, y, LIFE_ICON_RADIUS, 1.0, BLACK);
        }
    }
}

async fn try_texture(path: &str) -> Option<Texture2D> {
    match load_texture(path).await {
        Ok(texture) => Some(texture),
        Err(err) => {
            warn!("Texture {path:?} unavailable, using shape fallback: {err}");
            None
        }
    }
}
