//! The frame loop: update-then-draw over the four bodies.
//!
//! [`GameLoop`] knows nothing about windows or GPUs.  Each frame the host
//! samples a [`FrameInput`], calls [`GameLoop::update`], then hands a
//! [`Canvas`] to [`GameLoop::draw`].  The Bevy side of this lives in
//! [`crate::plugin`] and [`crate::graphics`].
//!
//! ## States
//!
//! | State     | Description                                         |
//! |-----------|-----------------------------------------------------|
//! | `Running` | Initial; the simulation advances until the asteroid arrives, then holds still |
//! | `Quit`    | Terminal; the quit key was pressed                  |

use crate::bodies::{
    Asteroid, BodyContext, BodyKind, CelestialBody, Crosshair, Earth, Moon, SpriteHandle,
};
use crate::config::GameConfig;
use crate::error::{GameError, GameResult};
use crate::simulation::{ClockStatus, SimulationClock, SimulationState};
use crate::transform2d::Transform2D;
use bevy::math::{UVec2, Vec2};
use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoopState {
    #[default]
    Running,
    Quit,
}

/// Input sampled once at the start of a frame.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameInput {
    /// Cursor position in game-area coordinates.
    pub cursor: Vec2,
    pub quit_pressed: bool,
}

/// Draw target.  One call per body per frame, bottom layer first.
pub trait Canvas {
    fn draw_image(&mut self, kind: BodyKind, sprite: &SpriteHandle, transform: &Transform2D);
}

/// A recorded [`Canvas::draw_image`] call.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawCall {
    pub kind: BodyKind,
    pub sprite: SpriteHandle,
    pub transform: Transform2D,
}

/// Canvas that records the frame's draw calls in order.
#[derive(Debug, Default, Clone)]
pub struct DrawList {
    pub calls: Vec<DrawCall>,
}

impl Canvas for DrawList {
    fn draw_image(&mut self, kind: BodyKind, sprite: &SpriteHandle, transform: &Transform2D) {
        self.calls.push(DrawCall {
            kind,
            sprite: sprite.clone(),
            transform: *transform,
        });
    }
}

/// The four loaded sprites, one per body.
#[derive(Debug, Clone)]
pub struct SpriteSet {
    pub earth: SpriteHandle,
    pub moon: SpriteHandle,
    pub asteroid: SpriteHandle,
    pub crosshair: SpriteHandle,
}

/// All bodies, iterated in one fixed order for both update and draw.
#[derive(Debug, Clone)]
pub struct Bodies {
    pub earth: Earth,
    pub moon: Moon,
    pub asteroid: Asteroid,
    pub crosshair: Crosshair,
}

impl Bodies {
    pub fn in_order(&self) -> [&dyn CelestialBody; 4] {
        [&self.earth, &self.moon, &self.asteroid, &self.crosshair]
    }

    pub fn in_order_mut(&mut self) -> [&mut dyn CelestialBody; 4] {
        [
            &mut self.earth,
            &mut self.moon,
            &mut self.asteroid,
            &mut self.crosshair,
        ]
    }
}

#[derive(Debug, Clone)]
pub struct GameLoop {
    size: UVec2,
    state: LoopState,
    sim: SimulationState,
    clock: SimulationClock,
    bodies: Bodies,
}

impl GameLoop {
    pub fn new(size: UVec2, clock: SimulationClock, bodies: Bodies) -> Self {
        Self {
            size,
            state: LoopState::Running,
            sim: SimulationState::default(),
            clock,
            bodies,
        }
    }

    /// Build every body from `config` and the loaded sprites.
    ///
    /// The asteroid starts `asteroid_start_factor` Earth radii out, on an
    /// approach angle drawn from `rng`.
    pub fn from_config<R: Rng>(
        config: &GameConfig,
        sprites: SpriteSet,
        rng: &mut R,
    ) -> Self {
        let start_distance = sprites.earth.radius * config.asteroid_start_factor;
        let bodies = Bodies {
            earth: Earth::new(sprites.earth, config.game_center()),
            moon: Moon::new(sprites.moon),
            asteroid: Asteroid::with_random_angle(sprites.asteroid, start_distance, rng),
            crosshair: Crosshair::new(sprites.crosshair),
        };
        Self::new(config.game_size(), SimulationClock::from_config(config), bodies)
    }

    #[inline]
    pub fn state(&self) -> LoopState {
        self.state
    }

    #[inline]
    pub fn simulation(&self) -> &SimulationState {
        &self.sim
    }

    #[inline]
    pub fn bodies(&self) -> &Bodies {
        &self.bodies
    }

    /// The asteroid has reached Earth and the picture is frozen.
    #[inline]
    pub fn is_frozen(&self) -> bool {
        SimulationClock::is_terminal(&self.bodies.asteroid)
    }

    /// Advance one frame.
    ///
    /// Returns `Err(GameError::PlayerQuit)` when the quit key is down (and on
    /// every later call); nothing is mutated in that case.  Once the asteroid
    /// has arrived this returns `Ok(ClockStatus::Frozen)` without touching any
    /// body.
    pub fn update(&mut self, input: &FrameInput) -> GameResult<ClockStatus> {
        if input.quit_pressed {
            self.state = LoopState::Quit;
        }
        if self.state == LoopState::Quit {
            return Err(GameError::PlayerQuit);
        }

        if self.clock.advance(&mut self.sim, &mut self.bodies.asteroid) == ClockStatus::Frozen {
            return Ok(ClockStatus::Frozen);
        }

        let ctx = BodyContext {
            state: &self.sim,
            earth: self.bodies.earth.anchor(),
            cursor: input.cursor,
        };
        for body in self.bodies.in_order_mut() {
            body.update(&ctx);
        }
        Ok(ClockStatus::Advanced)
    }

    /// Issue one draw call per body, Earth first and crosshair last.
    pub fn draw<C: Canvas + ?Sized>(&self, canvas: &mut C) {
        for body in self.bodies.in_order() {
            canvas.draw_image(body.kind(), body.sprite(), body.transform());
        }
    }

    /// Logical resolution.  Fixed; the outer window size is ignored.
    pub fn layout(&self, _outer_width: f32, _outer_height: f32) -> UVec2 {
        self.size
    }

    /// Map a cursor position in window coordinates onto the game area.
    pub fn window_to_game(&self, cursor: Vec2, window_size: Vec2) -> Vec2 {
        let logical = self.layout(window_size.x, window_size.y).as_vec2();
        if window_size.x <= 0.0 || window_size.y <= 0.0 {
            return cursor;
        }
        cursor * logical / window_size
    }
}
