//! `LunarDefencePlugin` — wires the game loop into a Bevy app.
//!
//! ## States
//!
//! | State     | Description                                        |
//! |-----------|----------------------------------------------------|
//! | `Loading` | Initial; waiting for the four sprite images        |
//! | `Running` | Frame loop active (update, then draw sync)         |
//!
//! ## Systems
//!
//! | System                  | Schedule              | Purpose                          |
//! |-------------------------|-----------------------|----------------------------------|
//! | `setup_camera`          | `Startup`             | Fixed-resolution 2D camera       |
//! | `begin_sprite_loading`  | `Startup`             | Request sprite images            |
//! | `finish_loading_system` | `Update / Loading`    | Build the game once images exist |
//! | `require_primary_window`| `OnEnter(Running)`    | Exit if there is no window       |
//! | `game_update_system`    | `Update / Running`    | Sample input, advance one tick   |
//! | `draw_bodies_system`    | `Update / Running`    | Push placements to sprites       |

use crate::assets::{begin_sprite_loading, SpriteAssets};
use crate::bodies::BodyKind;
use crate::config::{clock_seed, GameConfig};
use crate::constants::QUIT_KEY;
use crate::error::GameError;
use crate::game_loop::{DrawList, FrameInput, GameLoop};
use crate::graphics::{apply_draw_list, setup_camera, spawn_body_sprites};
use crate::simulation::ClockStatus;
use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[derive(States, Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum AppState {
    #[default]
    Loading,
    Running,
}

/// Seed for the asteroid's approach angle.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSeed(pub u64);

/// The running game.  Present only in [`AppState::Running`].
#[derive(Resource)]
pub struct ActiveGame(pub GameLoop);

/// Latest cursor position inside the window, in game-area coordinates.
///
/// Kept when the cursor leaves the window so the crosshair stays put.
#[derive(Resource, Default, Debug, Clone, Copy)]
pub struct LastCursor(pub Vec2);

pub struct LunarDefencePlugin;

impl Plugin for LunarDefencePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<AppState>()
            .init_resource::<GameConfig>()
            .add_systems(Startup, (setup_camera, begin_sprite_loading))
            .add_systems(
                Update,
                finish_loading_system.run_if(in_state(AppState::Loading)),
            )
            .add_systems(OnEnter(AppState::Running), require_primary_window);
        add_frame_systems(app);
    }
}

/// Register the per-frame update and draw systems for [`AppState::Running`].
pub fn add_frame_systems(app: &mut App) {
    app.init_resource::<LastCursor>().add_systems(
        Update,
        (game_update_system, draw_bodies_system)
            .chain()
            .run_if(in_state(AppState::Running)),
    );
}

/// Log `err` and ask the app to exit with the matching status.
pub fn exit_with(err: &GameError, exit: &mut MessageWriter<AppExit>) {
    if err.is_player_quit() {
        info!("{err}");
    } else {
        error!("{err}");
    }
    exit.write(err.app_exit());
}

/// Install a freshly built game: sprite entities plus the [`ActiveGame`]
/// resource.
pub fn start_game(commands: &mut Commands, game: GameLoop) {
    spawn_body_sprites(commands, &game);
    commands.insert_resource(ActiveGame(game));
}

/// Poll sprite loading; build the game and enter `Running` once every image
/// is available.  Any failed image ends the app.
#[allow(clippy::too_many_arguments)]
pub fn finish_loading_system(
    mut commands: Commands,
    sprites: Res<SpriteAssets>,
    asset_server: Res<AssetServer>,
    images: Res<Assets<Image>>,
    config: Res<GameConfig>,
    seed: Option<Res<GameSeed>>,
    mut next_state: ResMut<NextState<AppState>>,
    mut exit: MessageWriter<AppExit>,
) {
    if let Some(err) = sprites.first_failure(&asset_server) {
        exit_with(&err, &mut exit);
        return;
    }
    let Some(sprite_set) = sprites.sprite_set(&images) else {
        return;
    };

    let seed = seed.map(|s| s.0).unwrap_or_else(clock_seed);
    let mut rng = StdRng::seed_from_u64(seed);
    let game = GameLoop::from_config(&config, sprite_set, &mut rng);
    let asteroid = &game.bodies().asteroid;
    info!(
        "Sprites loaded; asteroid inbound at angle {:.3} rad from distance {} (seed {})",
        asteroid.angle(),
        asteroid.distance(),
        seed
    );

    start_game(&mut commands, game);
    next_state.set(AppState::Running);
}

/// The game draws into and reads the cursor from the primary window; without
/// one there is nothing to run.
pub fn require_primary_window(
    windows: Query<(), With<PrimaryWindow>>,
    mut exit: MessageWriter<AppExit>,
) {
    if windows.single().is_err() {
        exit_with(
            &GameError::Backend {
                context: "no primary window",
            },
            &mut exit,
        );
    }
}

/// Sample input and advance the game by one tick.
pub fn game_update_system(
    mut game: ResMut<ActiveGame>,
    keys: Res<ButtonInput<KeyCode>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut last_cursor: ResMut<LastCursor>,
    mut arrival_logged: Local<bool>,
    mut exit: MessageWriter<AppExit>,
) {
    if let Ok(window) = windows.single() {
        if let Some(position) = window.cursor_position() {
            last_cursor.0 = game.0.window_to_game(position, window.size());
        }
    }

    let input = FrameInput {
        cursor: last_cursor.0,
        quit_pressed: keys.pressed(QUIT_KEY),
    };

    match game.0.update(&input) {
        Ok(ClockStatus::Frozen) if !*arrival_logged => {
            *arrival_logged = true;
            info!(
                "Asteroid reached Earth after {} ticks; holding the final frame",
                game.0.simulation().tick
            );
        }
        Ok(_) => {}
        Err(err) => exit_with(&err, &mut exit),
    }
}

/// Draw the bodies by moving their sprite entities.
pub fn draw_bodies_system(
    game: Res<ActiveGame>,
    mut sprites: Query<(&BodyKind, &mut Transform)>,
) {
    let mut frame = DrawList::default();
    game.0.draw(&mut frame);
    let size = game.0.layout(0.0, 0.0);
    apply_draw_list(&frame, size, &mut sprites);
}
