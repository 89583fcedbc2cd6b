use super::{BodyContext, BodyKind, CelestialBody, SpriteHandle};
use crate::constants::ASTEROID_ROTATION_SPEED;
use crate::transform2d::Transform2D;
use rand::Rng;
use std::f32::consts::TAU;

/// The inbound asteroid.
///
/// It approaches Earth along a fixed direction (`angle`, chosen once) while
/// spinning in place three times faster than Earth turns.
#[derive(Debug, Clone)]
pub struct Asteroid {
    sprite: SpriteHandle,
    angle: f32,
    distance: f32,
    transform: Transform2D,
}

impl Asteroid {
    pub fn new(sprite: SpriteHandle, angle: f32, distance: f32) -> Self {
        Self {
            sprite,
            angle,
            distance,
            transform: Transform2D::default(),
        }
    }

    /// Approach angle drawn uniformly from `[0, 2π)`.
    pub fn with_random_angle<R: Rng>(
        sprite: SpriteHandle,
        distance: f32,
        rng: &mut R,
    ) -> Self {
        let angle = rng.gen_range(0.0..TAU);
        Self::new(sprite, angle, distance)
    }

    #[inline]
    pub fn angle(&self) -> f32 {
        self.angle
    }

    /// Remaining distance to impact.
    #[inline]
    pub fn distance(&self) -> f32 {
        self.distance
    }

    /// Move one step closer to Earth.
    #[inline]
    pub fn approach(&mut self, step: f32) {
        self.distance -= step;
    }

    #[inline]
    pub fn spin_angle(rotation: f32) -> f32 {
        rotation * ASTEROID_ROTATION_SPEED
    }

    /// Diagonal offset of the sprite from Earth's center before the approach
    /// rotation.
    #[inline]
    pub fn offset(&self, earth_radius: f32) -> f32 {
        -earth_radius + self.sprite.radius * 2.0 - self.distance
    }
}

impl CelestialBody for Asteroid {
    fn kind(&self) -> BodyKind {
        BodyKind::Asteroid
    }

    fn sprite(&self) -> &SpriteHandle {
        &self.sprite
    }

    fn transform(&self) -> &Transform2D {
        &self.transform
    }

    fn update(&mut self, ctx: &BodyContext) {
        let r = self.sprite.radius;
        let offset = self.offset(ctx.earth.radius);
        let center = ctx.earth.center;
        let t = &mut self.transform;
        t.reset();

        // Spin about the sprite's own center.
        t.translate(-r, -r);
        t.rotate(Self::spin_angle(ctx.state.rotation));

        // Shift back so the spun sprite sits where the unspun one did.  The
        // orbit offset below assumes this pivot.
        t.translate(r, r);

        t.translate(offset, offset);
        t.rotate(self.angle);
        t.translate(center.x, center.y);
    }
}
