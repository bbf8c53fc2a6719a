use log::{set_max_level, STATIC_MAX_LEVEL};
use macroquad::prelude::*;
use macroquad::miniquad::window::set_window_size;

use quad_catch::game::{Game, PLAYFIELD_HEIGHT, PLAYFIELD_WIDTH};
use quad_catch::gamecfg::GameCfg;
use quad_catch::input::InputModel;
use quad_catch::render::Render;
use quad_catch::sound_director::SoundDirector;
use quad_catch::ui::Ui;
use quad_catch::{sys, GameState, GAME_TICKRATE};

fn window_conf() -> Conf {
    Conf {
        window_title: "Dustbin Catcher".to_owned(),
        high_dpi: true,
        window_width: PLAYFIELD_WIDTH as i32,
        window_height: PLAYFIELD_HEIGHT as i32,
        fullscreen: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        sys::panic_screen(&format!("Driver panicked:\n{}", info));
        hook(info);
    }));

    if let Err(e) = run().await {
        sys::panic_screen(&format!("Driver exitted with error:\n{:?}", e));
    }
}

async fn run() -> anyhow::Result<()> {
    set_max_level(STATIC_MAX_LEVEL);
    set_default_filter_mode(FilterMode::Nearest);

    let cfg = GameCfg::load().await;
    info!("Game config: {:?}", cfg);

    let mut game = Game::new(cfg);
    let render = Render::new().await;
    let sounder = SoundDirector::new().await;
    let ui = Ui::new();

    info!("Project version: {}", env!("CARGO_PKG_VERSION"));

    let mut state = GameState::Active;
    let mut fullscreen = window_conf().fullscreen;
    let mut accumulated_time = 0.0;

    // Save old size as leaving fullscreen will give window a different size
    // This value is our best bet as macroquad doesn't allow us to get window size
    let old_size = (window_conf().window_width, window_conf().window_height);

    build_textures_atlas();

    sys::done_loading();

    info!("Done loading");

    loop {
        let input = InputModel::capture();
        let real_dt = get_frame_time();
        let do_tick = update_ticking(&mut accumulated_time, real_dt);

        if input.fullscreen_toggle_requested {
            // NOTE: macroquad does not update window config when it goes fullscreen
            set_fullscreen(!fullscreen);

            if fullscreen {
                set_window_size(old_size.0 as u32, old_size.1 as u32);
            }

            fullscreen = !fullscreen;
        }

        match state {
            GameState::GameOver if input.confirmation_detected => {
                info!("Restarting the game");
                game.reset();
                state = GameState::Active;
            }
            GameState::Active if do_tick => {
                let mut dir = 0.0;
                if input.left_movement_down {
                    dir -= 1.0;
                }
                if input.right_movement_down {
                    dir += 1.0;
                }
                game.move_catcher(dir);

                game.tick();

                if game.over {
                    info!("Game over with score {}", game.score);
                    state = GameState::GameOver;
                }
            }
            _ => (),
        };

        render.draw(&game);
        ui.draw(state, game.score);
        sounder.run(&mut game);

        next_frame().await
    }
}

fn update_ticking(accumulated_time: &mut f32, real_dt: f32) -> bool {
    *accumulated_time += real_dt;
    if *accumulated_time >= 2.0 * GAME_TICKRATE {
        warn!(
            "LAG by {:.2}ms",
            (*accumulated_time - 2.0 * GAME_TICKRATE) * 1000.0
        );
        *accumulated_time = 0.0;
        false
    } else if *accumulated_time >= GAME_TICKRATE {
        *accumulated_time -= GAME_TICKRATE;
        true
    } else {
        false
    }
}
