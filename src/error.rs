//! Game error types.
//!
//! There are only two ways a run ends: the player presses the quit key, or
//! something the game cannot live without (an image, the window) is missing.
//! Both travel as a [`GameError`] out of the frame update and are turned into
//! an [`AppExit`] by [`GameError::app_exit`].
//!
//! ## Usage
//!
//! ```rust
//! use lunar_defence::error::{GameError, GameResult};
//!
//! fn frame(quit_pressed: bool) -> GameResult<()> {
//!     if quit_pressed {
//!         return Err(GameError::PlayerQuit);
//!     }
//!     Ok(())
//! }
//!
//! assert!(frame(true).unwrap_err().is_player_quit());
//! ```

use bevy::app::AppExit;
use std::fmt;

/// Top-level error enum for Lunar Defence.
#[derive(Debug, Clone, PartialEq)]
pub enum GameError {
    /// The quit key was observed during a frame update.  Normal termination.
    PlayerQuit,

    /// A sprite image could not be loaded or decoded.
    AssetLoad {
        /// Logical sprite name (`moon`, `earth`, ...).
        name: &'static str,
        /// Loader message.
        reason: String,
    },

    /// The rendering backend or window is unusable.
    Backend {
        /// Human-readable description of what was missing.
        context: &'static str,
    },

    /// A configuration value is outside the range the simulation can use.
    UnsafeConstant {
        /// Name of the setting (for logging).
        name: &'static str,
        /// The value that was rejected.
        value: f32,
        /// Human-readable description of the safe range.
        safe_range: &'static str,
    },
}

impl GameError {
    /// `true` for the player-initiated quit, which is not a failure.
    #[inline]
    pub fn is_player_quit(&self) -> bool {
        matches!(self, GameError::PlayerQuit)
    }

    /// The process exit this error should produce.
    pub fn app_exit(&self) -> AppExit {
        if self.is_player_quit() {
            AppExit::Success
        } else {
            AppExit::error()
        }
    }
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::PlayerQuit => write!(f, "game quit by player"),
            GameError::AssetLoad { name, reason } => {
                write!(f, "failed to load sprite '{}': {}", name, reason)
            }
            GameError::Backend { context } => write!(f, "rendering backend error: {}", context),
            GameError::UnsafeConstant {
                name,
                value,
                safe_range,
            } => write!(
                f,
                "setting '{}' = {} is outside safe range {}",
                name, value, safe_range
            ),
        }
    }
}

impl std::error::Error for GameError {}

/// Convenience alias: a `Result` using `GameError` as the error type.
pub type GameResult<T> = Result<T, GameError>;

// ── Validation helpers ────────────────────────────────────────────────────────

/// Returns an error unless `value` is finite and strictly positive.
pub fn validate_positive(name: &'static str, value: f32) -> GameResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(GameError::UnsafeConstant {
            name,
            value,
            safe_range: "(0.0, ∞)",
        })
    }
}

/// Returns an error if `value` is NaN or infinite.
pub fn validate_finite(name: &'static str, value: f32) -> GameResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(GameError::UnsafeConstant {
            name,
            value,
            safe_range: "finite",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn player_quit_exits_successfully() {
        assert_eq!(GameError::PlayerQuit.app_exit(), AppExit::Success);
        assert!(GameError::PlayerQuit.is_player_quit());
    }

    #[test]
    fn asset_failure_exits_with_error() {
        let err = GameError::AssetLoad {
            name: "moon",
            reason: "file not found".into(),
        };
        assert!(!err.is_player_quit());
        assert!(err.app_exit().is_error());
        assert_eq!(
            err.to_string(),
            "failed to load sprite 'moon': file not found"
        );
    }

    #[test]
    fn backend_failure_exits_with_error() {
        let err = GameError::Backend {
            context: "no primary window",
        };
        assert!(err.app_exit().is_error());
    }

    #[test]
    fn player_quit_message_matches_sentinel() {
        assert_eq!(GameError::PlayerQuit.to_string(), "game quit by player");
    }

    #[test]
    fn validate_positive_rejects_zero_negative_and_nan() {
        assert!(validate_positive("distance_step", 1.0).is_ok());
        assert!(validate_positive("distance_step", 0.0).is_err());
        assert!(validate_positive("distance_step", -1.0).is_err());
        assert!(validate_positive("distance_step", f32::NAN).is_err());
    }

    #[test]
    fn validate_finite_accepts_negative() {
        assert!(validate_finite("rotation_step", -0.02).is_ok());
        assert!(validate_finite("rotation_step", f32::INFINITY).is_err());
    }
}
