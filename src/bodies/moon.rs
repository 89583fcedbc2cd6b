use super::{BodyContext, BodyKind, CelestialBody, SpriteHandle};
use crate::constants::MOON_ORBIT_DIVISOR;
use crate::transform2d::Transform2D;

/// The Moon circles Earth on a fixed diagonal offset at a third of Earth's
/// rotation rate.
#[derive(Debug, Clone)]
pub struct Moon {
    sprite: SpriteHandle,
    transform: Transform2D,
}

impl Moon {
    pub fn new(sprite: SpriteHandle) -> Self {
        Self {
            sprite,
            transform: Transform2D::default(),
        }
    }

    #[inline]
    pub fn orbit_angle(rotation: f32) -> f32 {
        rotation / MOON_ORBIT_DIVISOR
    }

    /// Offset of the sprite's top-left corner from Earth's center, on both
    /// axes, before the orbit rotation.
    #[inline]
    pub fn offset(&self, earth_radius: f32) -> f32 {
        -earth_radius - self.sprite.radius * 2.0
    }
}

impl CelestialBody for Moon {
    fn kind(&self) -> BodyKind {
        BodyKind::Moon
    }

    fn sprite(&self) -> &SpriteHandle {
        &self.sprite
    }

    fn transform(&self) -> &Transform2D {
        &self.transform
    }

    fn update(&mut self, ctx: &BodyContext) {
        let offset = self.offset(ctx.earth.radius);
        let center = ctx.earth.center;
        let t = &mut self.transform;
        t.reset();
        t.translate(offset, offset);
        t.rotate(Self::orbit_angle(ctx.state.rotation));
        t.translate(center.x, center.y);
    }
}
