//! Runtime configuration loaded from `assets/lunar_defence.toml`.
//!
//! [`GameConfig`] is a Bevy [`Resource`] that mirrors the configurable values
//! in [`crate::constants`].  The binary reads the file with
//! [`load_game_config`] *before* building the app, because the window title
//! and size must be known when `WindowPlugin` is added.  Missing keys fall back
//! to the compile-time defaults, so a minimal TOML can override just the values
//! you care about:
//!
//! ```toml
//! rotation_step = 0.01
//! seed = 42
//! ```
//!
//! Keep `src/constants.rs` in sync: it remains the **authoritative default**
//! source used by `GameConfig::default()`.

use crate::constants::*;
use crate::error::{validate_finite, validate_positive, GameResult};
use bevy::prelude::*;
use serde::Deserialize;
use std::time::{SystemTime, UNIX_EPOCH};

#[derive(Resource, Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // ── Window ───────────────────────────────────────────────────────────────
    pub title: String,
    pub window_width: u32,
    pub window_height: u32,

    // ── Game area ────────────────────────────────────────────────────────────
    pub game_width: u32,
    pub game_height: u32,

    // ── Simulation ───────────────────────────────────────────────────────────
    pub rotation_step: f32,
    pub distance_step: f32,
    pub asteroid_start_factor: f32,
    /// Fixed RNG seed for the asteroid angle.  `None` seeds from the clock.
    pub seed: Option<u64>,

    // ── Assets ───────────────────────────────────────────────────────────────
    pub sprite_dir: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            title: WINDOW_TITLE.to_string(),
            window_width: WINDOW_WIDTH,
            window_height: WINDOW_HEIGHT,
            game_width: GAME_WIDTH,
            game_height: GAME_HEIGHT,
            rotation_step: ROTATION_STEP,
            distance_step: DISTANCE_STEP,
            asteroid_start_factor: ASTEROID_START_FACTOR,
            seed: None,
            sprite_dir: SPRITE_DIR.to_string(),
        }
    }
}

impl GameConfig {
    /// Parse a TOML document; absent keys keep their defaults.
    pub fn from_toml_str(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    /// Reject values the simulation cannot run with.
    pub fn validate(&self) -> GameResult<()> {
        validate_positive("window_width", self.window_width as f32)?;
        validate_positive("window_height", self.window_height as f32)?;
        validate_positive("game_width", self.game_width as f32)?;
        validate_positive("game_height", self.game_height as f32)?;
        validate_finite("rotation_step", self.rotation_step)?;
        // A zero step would leave the asteroid hanging forever.
        validate_positive("distance_step", self.distance_step)?;
        validate_positive("asteroid_start_factor", self.asteroid_start_factor)?;
        Ok(())
    }

    /// Logical game-area size.
    #[inline]
    pub fn game_size(&self) -> UVec2 {
        UVec2::new(self.game_width, self.game_height)
    }

    /// Midpoint of the game area; Earth sits here.
    pub fn game_center(&self) -> Vec2 {
        Vec2::new(
            (self.game_width / 2) as f32,
            (self.game_height / 2) as f32,
        )
    }

    /// Asset path of the sprite with logical name `name`.
    pub fn sprite_path(&self, name: &str) -> String {
        format!("{}/{}.png", self.sprite_dir, name)
    }

    /// Pick the RNG seed: a valid `env_override` wins, then the configured
    /// seed, then the wall clock.
    pub fn resolve_seed(&self, env_override: Option<&str>) -> u64 {
        if let Some(raw) = env_override {
            match raw.trim().parse::<u64>() {
                Ok(seed) => return seed,
                Err(e) => eprintln!("⚠ Ignoring {SEED_ENV_VAR}={raw:?}: {e}"),
            }
        }
        self.seed.unwrap_or_else(clock_seed)
    }
}

/// Seed derived from the current time.
pub fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default()
}

/// Read `path` and return the resulting configuration.
///
/// A missing file is not an error.  Parse errors and values rejected by
/// [`GameConfig::validate`] are printed to stderr and the defaults are used
/// instead.
pub fn load_game_config(path: &str) -> GameConfig {
    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(_) => {
            println!("ℹ No {path} found; using compiled defaults");
            return GameConfig::default();
        }
    };

    let loaded = match GameConfig::from_toml_str(&contents) {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("⚠ Failed to parse {path}: {e}; using defaults");
            return GameConfig::default();
        }
    };

    match loaded.validate() {
        Ok(()) => {
            println!("✓ Loaded game config from {path}");
            loaded
        }
        Err(e) => {
            eprintln!("⚠ Rejected {path}: {e}; using defaults");
            GameConfig::default()
        }
    }
}
