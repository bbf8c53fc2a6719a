use macroquad::prelude::*;
use macroquad::rand::{gen_range, srand};

use quad_catch::game::{Game, Item, ItemKind, PLAYFIELD_WIDTH, PLAYFIELD_HEIGHT};
use quad_catch::gamecfg::GameCfg;

fn no_spawn_cfg() -> GameCfg {
    let mut cfg = GameCfg::default();
    cfg.spawn.interval_ticks = u32::MAX;
    cfg
}

fn far_item(game: &Game, y: f32, speed: f32) -> Item {
    // Far away from the catcher on the x axis, so it can never be caught
    let x = if game.catcher_x > PLAYFIELD_WIDTH / 2.0 {
        0.0
    } else {
        PLAYFIELD_WIDTH - game.cfg().item.size
    };
    Item {
        pos: vec2(x, y),
        kind: ItemKind::Harmful,
        speed,
        sprite: 0,
    }
}

#[test]
fn items_fall_by_their_speed() {
    let mut game = Game::new(no_spawn_cfg());
    game.items.push(far_item(&game, 0.0, 2.0));
    game.items.push(far_item(&game, 40.0, 5.0));

    game.tick();

    assert_eq!(game.items[0].pos.y, 2.0);
    assert_eq!(game.items[1].pos.y, 45.0);
}

#[test]
fn item_count_non_increasing_without_spawns() {
    srand(0xCA7C4);

    let mut game = Game::new(no_spawn_cfg());
    for _ in 0..32 {
        let y = gen_range(0.0, PLAYFIELD_HEIGHT);
        let speed = gen_range(2.0, 5.0);
        game.items.push(far_item(&game, y, speed));
    }

    let mut prev_count = game.items.len();
    for _ in 0..400 {
        game.tick();
        assert!(game.items.len() <= prev_count);
        prev_count = game.items.len();
    }

    // Long enough for everything to leave the playfield
    assert!(game.items.is_empty());
}

#[test]
fn bottom_exit_discards_without_scoring() {
    let mut game = Game::new(no_spawn_cfg());
    game.items.push(far_item(&game, PLAYFIELD_HEIGHT - 1.0, 2.0));

    game.tick();

    assert!(game.items.is_empty());
    assert_eq!(game.score, 0);
    assert_eq!(game.lives, 3);
    assert!(game.events().is_empty());
}

#[test]
fn catch_beats_bottom_exit() {
    let mut game = Game::new(no_spawn_cfg());
    // Fast enough to pass the bottom edge on the very tick it reaches
    // the catcher. The catch has to win.
    game.items.push(Item {
        pos: vec2(game.catcher_x, 0.0),
        kind: ItemKind::Beneficial,
        speed: PLAYFIELD_HEIGHT + 100.0,
        sprite: 0,
    });

    game.tick();

    assert!(game.items.is_empty());
    assert_eq!(game.score, 10);
}

#[test]
fn catcher_stays_within_the_playfield() {
    srand(0xD0B1);

    let mut game = Game::new(no_spawn_cfg());
    let max_x = PLAYFIELD_WIDTH - game.cfg().catcher.width;

    for _ in 0..200 {
        game.move_catcher(-1.0);
        assert!(game.catcher_x >= 0.0);
    }
    assert_eq!(game.catcher_x, 0.0);

    for _ in 0..200 {
        game.move_catcher(1.0);
        assert!(game.catcher_x <= max_x);
    }
    assert_eq!(game.catcher_x, max_x);

    for _ in 0..1000 {
        let dir = if gen_range::<i32>(0, 2) == 0 { -1.0 } else { 1.0 };
        game.move_catcher(dir);
        assert!(game.catcher_x >= 0.0 && game.catcher_x <= max_x);
    }
}

#[test]
fn spawned_items_start_at_the_top_within_bounds() {
    srand(0x5EED);

    let mut cfg = GameCfg::default();
    cfg.spawn.interval_ticks = 1;
    let mut game = Game::new(cfg);

    game.tick();

    assert_eq!(game.items.len(), 1);
    let item = game.items[0];
    // Spawned at y = 0, then advanced once in the same tick
    assert_eq!(item.pos.y, item.speed);
    assert!(item.pos.x >= 0.0);
    assert!(item.pos.x <= PLAYFIELD_WIDTH - game.cfg().item.size);
    assert!(item.speed >= game.cfg().spawn.speed_min);
    assert!(item.speed <= game.cfg().spawn.speed_max);
}

#[test]
fn spawns_follow_the_configured_interval() {
    srand(0x1F2E3D);

    let mut cfg = GameCfg::default();
    cfg.spawn.interval_ticks = 10;
    let mut game = Game::new(cfg);

    for _ in 0..9 {
        game.tick();
    }
    assert!(game.items.is_empty());

    game.tick();
    assert_eq!(game.items.len(), 1);

    for _ in 0..10 {
        game.tick();
    }
    assert_eq!(game.items.len(), 2);
}
