use bevy::prelude::*;
use bevy::window::{CursorOptions, WindowResolution};
use lunar_defence::config::load_game_config;
use lunar_defence::constants::{CONFIG_PATH, SEED_ENV_VAR};
use lunar_defence::plugin::{GameSeed, LunarDefencePlugin};
use std::env;

fn main() -> AppExit {
    // Window settings come from the config, so it is read before the app exists.
    let config = load_game_config(CONFIG_PATH);
    let seed = config.resolve_seed(env::var(SEED_ENV_VAR).ok().as_deref());

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: config.title.clone(),
                resolution: WindowResolution::new(config.window_width, config.window_height),
                ..Default::default()
            }),
            // The crosshair sprite stands in for the system cursor.
            primary_cursor_options: Some(CursorOptions {
                visible: false,
                ..Default::default()
            }),
            ..Default::default()
        }))
        .insert_resource(ClearColor(Color::BLACK))
        .insert_resource(config)
        .insert_resource(GameSeed(seed))
        .add_plugins(LunarDefencePlugin)
        .run()
}
