//! Global simulation state and the clock that advances it.
//!
//! The only values that change over a run are the global rotation (owned by
//! [`SimulationState`]) and the asteroid's distance (owned by the asteroid,
//! stepped by [`SimulationClock`]).

use crate::bodies::Asteroid;
use crate::config::GameConfig;
use crate::constants::{DISTANCE_STEP, ROTATION_STEP};

/// Scalars shared by every body's update.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SimulationState {
    /// Global rotation in radians.  Starts at 0 and only ever decreases.
    pub rotation: f32,
    /// Number of ticks that actually advanced the simulation.
    pub tick: u64,
}

/// Outcome of [`SimulationClock::advance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockStatus {
    /// The clock moved forward by one tick.
    Advanced,
    /// The asteroid had already arrived; nothing changed.
    Frozen,
}

/// Per-tick step sizes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationClock {
    rotation_step: f32,
    distance_step: f32,
}

impl Default for SimulationClock {
    fn default() -> Self {
        Self::new(ROTATION_STEP, DISTANCE_STEP)
    }
}

impl SimulationClock {
    pub fn new(rotation_step: f32, distance_step: f32) -> Self {
        Self {
            rotation_step,
            distance_step,
        }
    }

    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(config.rotation_step, config.distance_step)
    }

    /// The asteroid has reached Earth; the simulation no longer advances.
    #[inline]
    pub fn is_terminal(asteroid: &Asteroid) -> bool {
        asteroid.distance() <= 0.0
    }

    /// Advance rotation and asteroid distance by one tick, unless terminal.
    pub fn advance(&self, state: &mut SimulationState, asteroid: &mut Asteroid) -> ClockStatus {
        if Self::is_terminal(asteroid) {
            return ClockStatus::Frozen;
        }
        state.rotation -= self.rotation_step;
        state.tick += 1;
        asteroid.approach(self.distance_step);
        ClockStatus::Advanced
    }
}
