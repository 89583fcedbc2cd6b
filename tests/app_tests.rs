//! Headless tests for the Bevy wiring.
//!
//! These tests use [`MinimalPlugins`] with no window and no rendering, so they
//! run fast and deterministically in CI.  Most build the game from image-less
//! sprites and install it with `start_game`, the same way
//! `finish_loading_system` does once real images are in.  The asset tests add
//! the asset server and point it at a directory that does not exist.
//!
//! Covered scenarios:
//! 1. Default initial state is `Loading`.
//! 2. A running frame advances the simulation and moves the sprite entities.
//! 3. Holding the quit key exits the app successfully.
//! 4. Sprites keep the fixed z-order.
//! 5. A missing sprite image ends the app with a failure exit.
//! 6. Entering `Running` without a primary window is a failure exit.

use bevy::asset::LoadState;
use bevy::math::UVec2;
use bevy::prelude::*;
use bevy::state::app::StatesPlugin;
use lunar_defence::assets::{begin_sprite_loading, SpriteAssets};
use lunar_defence::bodies::{BodyKind, SpriteHandle};
use lunar_defence::config::GameConfig;
use lunar_defence::error::GameError;
use lunar_defence::game_loop::{GameLoop, LoopState, SpriteSet};
use lunar_defence::plugin::{
    add_frame_systems, require_primary_window, start_game, ActiveGame, AppState,
    LunarDefencePlugin,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Duration;

// ── Helpers ───────────────────────────────────────────────────────────────────

fn build_game() -> GameLoop {
    let sprites = SpriteSet {
        earth: SpriteHandle::with_radius(100.0),
        moon: SpriteHandle::with_radius(20.0),
        asteroid: SpriteHandle::with_radius(16.0),
        crosshair: SpriteHandle::with_radius(12.0),
    };
    let mut rng = StdRng::seed_from_u64(1);
    GameLoop::from_config(&GameConfig::default(), sprites, &mut rng)
}

fn install_game(mut commands: Commands) {
    start_game(&mut commands, build_game());
}

/// Headless app already in `Running`, with the game installed at startup.
fn running_app() -> App {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, StatesPlugin));
    app.init_resource::<ButtonInput<KeyCode>>();
    app.insert_state(AppState::Running);
    app.add_systems(Startup, install_game);
    add_frame_systems(&mut app);
    app
}

fn game(app: &App) -> &GameLoop {
    &app.world().resource::<ActiveGame>().0
}

fn sprite_transform(app: &mut App, wanted: BodyKind) -> Transform {
    let mut query = app.world_mut().query::<(&BodyKind, &Transform)>();
    query
        .iter(app.world())
        .find(|(kind, _)| **kind == wanted)
        .map(|(_, transform)| *transform)
        .expect("sprite entity exists")
}

/// World position of image pixel `(u, v)` on a top-left anchored sprite.
fn world_pixel(transform: &Transform, pixel: Vec2) -> Vec2 {
    transform
        .transform_point(Vec3::new(pixel.x, -pixel.y, 0.0))
        .truncate()
}

/// Headless app with a real asset server whose sprite directory is missing.
fn missing_sprites_app() -> App {
    let mut app = App::new();
    app.add_plugins((
        MinimalPlugins,
        StatesPlugin,
        AssetPlugin::default(),
        ImagePlugin::default(),
    ));
    app.insert_resource(GameConfig {
        sprite_dir: "no_such_sprite_dir".to_string(),
        ..Default::default()
    });
    app
}

/// Step `app` until `done` holds, letting the IO pool finish its loads.
fn update_until(app: &mut App, done: impl Fn(&mut App) -> bool) {
    for _ in 0..500 {
        app.update();
        if done(app) {
            return;
        }
        std::thread::sleep(Duration::from_millis(2));
    }
    panic!("condition not reached");
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[test]
fn default_state_is_loading() {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, StatesPlugin));
    app.init_state::<AppState>();
    app.update();
    let state = app.world().resource::<State<AppState>>();
    assert_eq!(*state.get(), AppState::Loading, "initial state must be Loading");
}

#[test]
fn running_frames_advance_simulation() {
    let mut app = running_app();
    for _ in 0..3 {
        app.update();
    }
    let game = game(&app);
    assert_eq!(game.simulation().tick, 3);
    assert!((game.simulation().rotation + 0.06).abs() < 1e-4);
    assert_eq!(game.bodies().asteroid.distance(), 197.0);
    assert_eq!(game.state(), LoopState::Running);
    assert!(app.should_exit().is_none());
}

#[test]
fn earth_sprite_sits_at_world_origin() {
    let mut app = running_app();
    app.update();
    let earth = sprite_transform(&mut app, BodyKind::Earth);
    // Earth's radius is 100, so its center pixel is (100, 100).
    assert!(world_pixel(&earth, Vec2::splat(100.0)).abs_diff_eq(Vec2::ZERO, 1e-3));
}

#[test]
fn sprites_are_layered_in_draw_order() {
    let mut app = running_app();
    app.update();
    for kind in BodyKind::ORDER {
        let transform = sprite_transform(&mut app, kind);
        assert_eq!(transform.translation.z, kind.layer() as f32);
    }
}

#[test]
fn crosshair_without_window_stays_at_top_left() {
    let mut app = running_app();
    app.update();
    let crosshair = sprite_transform(&mut app, BodyKind::Crosshair);
    let half = UVec2::new(1280, 960).as_vec2() / 2.0;
    assert!(world_pixel(&crosshair, Vec2::splat(12.0))
        .abs_diff_eq(Vec2::new(-half.x, half.y), 1e-3));
}

#[test]
fn quit_key_exits_successfully() {
    let mut app = running_app();
    app.update();

    app.world_mut()
        .resource_mut::<ButtonInput<KeyCode>>()
        .press(KeyCode::Escape);
    app.update();

    assert_eq!(app.should_exit(), Some(AppExit::Success));
    let game = game(&app);
    assert_eq!(game.state(), LoopState::Quit);
    assert_eq!(game.simulation().tick, 1, "no tick may run after quit");
}

#[test]
fn missing_sprite_exits_with_failure() {
    let mut app = missing_sprites_app();
    app.add_plugins(LunarDefencePlugin);
    app.finish();
    app.cleanup();

    update_until(&mut app, |app| app.should_exit().is_some());

    assert!(matches!(app.should_exit(), Some(AppExit::Error(_))));
    let state = app.world().resource::<State<AppState>>();
    assert_eq!(*state.get(), AppState::Loading, "game must never start");
    assert!(app.world().get_resource::<ActiveGame>().is_none());
}

#[test]
fn first_failure_names_the_earliest_sprite() {
    let mut app = missing_sprites_app();
    app.add_systems(Startup, begin_sprite_loading);
    app.finish();
    app.cleanup();

    update_until(&mut app, |app| {
        let sprites = app.world().resource::<SpriteAssets>();
        let server = app.world().resource::<AssetServer>();
        sprites.handles.iter().all(|(_, handle)| {
            matches!(server.get_load_state(handle.id()), Some(LoadState::Failed(_)))
        })
    });

    let sprites = app.world().resource::<SpriteAssets>();
    let server = app.world().resource::<AssetServer>();
    let err = sprites.first_failure(server).expect("every load failed");
    assert!(
        matches!(err, GameError::AssetLoad { name: "earth", .. }),
        "unexpected error: {err}"
    );
    assert!(err.app_exit().is_error());
}

#[test]
fn running_without_window_exits_with_failure() {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, StatesPlugin));
    app.insert_state(AppState::Running);
    app.add_systems(OnEnter(AppState::Running), require_primary_window);
    app.update();

    assert!(matches!(app.should_exit(), Some(AppExit::Error(_))));
}
