//! Centralised game constants.
//!
//! Values marked as configurable are mirrored by [`crate::config::GameConfig`]
//! and act as its compiled defaults; the rest define the look of the orbit and
//! are fixed.

use bevy::input::keyboard::KeyCode;

// ── Window ────────────────────────────────────────────────────────────────────

/// Title shown in the window decoration.
pub const WINDOW_TITLE: &str = "Lunar Defence";

/// Initial window width (logical pixels).  The game area is scaled to fit.
pub const WINDOW_WIDTH: u32 = 640;

/// Initial window height (logical pixels).
pub const WINDOW_HEIGHT: u32 = 480;

// ── Game area ─────────────────────────────────────────────────────────────────

/// Fixed logical width of the game area, independent of the window size.
pub const GAME_WIDTH: u32 = 1280;

/// Fixed logical height of the game area.
pub const GAME_HEIGHT: u32 = 960;

// ── Simulation ────────────────────────────────────────────────────────────────

/// Amount subtracted from the global rotation every tick (radians).
///
/// At 60 ticks/s Earth completes a turn in a little over five seconds.
pub const ROTATION_STEP: f32 = 0.02;

/// Amount subtracted from the asteroid distance every tick.
pub const DISTANCE_STEP: f32 = 1.0;

/// Initial asteroid distance as a multiple of Earth's radius.
pub const ASTEROID_START_FACTOR: f32 = 2.0;

/// The Moon turns at `rotation / MOON_ORBIT_DIVISOR`.
pub const MOON_ORBIT_DIVISOR: f32 = 3.0;

/// The asteroid spins at `rotation * ASTEROID_ROTATION_SPEED`.
pub const ASTEROID_ROTATION_SPEED: f32 = 3.0;

// ── Input ─────────────────────────────────────────────────────────────────────

/// Holding this key ends the run.
pub const QUIT_KEY: KeyCode = KeyCode::Escape;

// ── Assets ────────────────────────────────────────────────────────────────────

/// Directory under the asset root that holds the sprite images.
pub const SPRITE_DIR: &str = "sprites";

/// Runtime configuration file, relative to the working directory.
pub const CONFIG_PATH: &str = "assets/lunar_defence.toml";

/// Environment variable that overrides the configured RNG seed.
pub const SEED_ENV_VAR: &str = "LUNAR_DEFENCE_SEED";
