//! The four sprites on screen and how each one is placed every tick.
//!
//! ## Sub-module layout
//!
//! | Module | Body | Placement depends on |
//! |--------|------|----------------------|
//! | [`earth`] | [`Earth`] | global rotation, fixed center |
//! | [`moon`] | [`Moon`] | global rotation / 3, Earth anchor |
//! | [`asteroid`] | [`Asteroid`] | global rotation × 3, own angle and distance, Earth anchor |
//! | [`crosshair`] | [`Crosshair`] | latest cursor sample |
//!
//! Every body owns its [`Transform2D`] exclusively.  Anything a body needs from
//! another body is handed over as plain data in [`BodyContext`].

pub mod asteroid;
pub mod crosshair;
pub mod earth;
pub mod moon;

pub use asteroid::Asteroid;
pub use crosshair::Crosshair;
pub use earth::Earth;
pub use moon::Moon;

use crate::simulation::SimulationState;
use crate::transform2d::Transform2D;
use bevy::prelude::*;

// ── Sprite ────────────────────────────────────────────────────────────────────

/// A loaded image and its pivot radius (half the image width).
#[derive(Debug, Clone, PartialEq)]
pub struct SpriteHandle {
    pub image: Handle<Image>,
    pub radius: f32,
}

impl SpriteHandle {
    pub fn new(image: Handle<Image>, radius: f32) -> Self {
        Self { image, radius }
    }

    /// Radius is half of `width`, the image's pixel width.
    pub fn from_width(image: Handle<Image>, width: u32) -> Self {
        Self::new(image, width as f32 / 2.0)
    }

    /// A sprite with no backing image, for headless use.
    pub fn with_radius(radius: f32) -> Self {
        Self::new(Handle::default(), radius)
    }
}

// ── Body identity ─────────────────────────────────────────────────────────────

/// Which body a sprite entity or draw call belongs to.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BodyKind {
    Earth,
    Moon,
    Asteroid,
    Crosshair,
}

impl BodyKind {
    /// Update and draw order; later entries are drawn on top.
    pub const ORDER: [BodyKind; 4] = [
        BodyKind::Earth,
        BodyKind::Moon,
        BodyKind::Asteroid,
        BodyKind::Crosshair,
    ];

    /// Logical image name used when loading the sprite.
    pub fn sprite_name(self) -> &'static str {
        match self {
            BodyKind::Earth => "earth",
            BodyKind::Moon => "moon",
            BodyKind::Asteroid => "asteroid",
            BodyKind::Crosshair => "crosshair",
        }
    }

    /// Position in [`BodyKind::ORDER`].
    pub fn layer(self) -> usize {
        match self {
            BodyKind::Earth => 0,
            BodyKind::Moon => 1,
            BodyKind::Asteroid => 2,
            BodyKind::Crosshair => 3,
        }
    }
}

// ── Update context ────────────────────────────────────────────────────────────

/// Earth's values that the Moon and the asteroid orbit around.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EarthAnchor {
    pub center: Vec2,
    pub radius: f32,
}

/// Everything a body may read while recomputing its transform.
#[derive(Debug, Clone, Copy)]
pub struct BodyContext<'a> {
    pub state: &'a SimulationState,
    pub earth: EarthAnchor,
    /// Latest cursor sample in game-area coordinates.
    pub cursor: Vec2,
}

/// Common surface of every body on screen.
pub trait CelestialBody {
    fn kind(&self) -> BodyKind;

    fn sprite(&self) -> &SpriteHandle;

    fn transform(&self) -> &Transform2D;

    /// Recompute the transform from scratch for this tick.
    fn update(&mut self, ctx: &BodyContext);
}
