use super::{BodyContext, BodyKind, CelestialBody, SpriteHandle};
use crate::transform2d::Transform2D;
use bevy::math::Vec2;

/// Target marker drawn in place of the hidden system cursor.
#[derive(Debug, Clone)]
pub struct Crosshair {
    sprite: SpriteHandle,
    transform: Transform2D,
}

impl Crosshair {
    pub fn new(sprite: SpriteHandle) -> Self {
        Self {
            sprite,
            transform: Transform2D::default(),
        }
    }

    /// Center the sprite on `cursor`.
    pub fn follow(&mut self, cursor: Vec2) {
        let r = self.sprite.radius;
        self.transform.reset();
        self.transform.translate(cursor.x - r, cursor.y - r);
    }
}

impl CelestialBody for Crosshair {
    fn kind(&self) -> BodyKind {
        BodyKind::Crosshair
    }

    fn sprite(&self) -> &SpriteHandle {
        &self.sprite
    }

    fn transform(&self) -> &Transform2D {
        &self.transform
    }

    fn update(&mut self, ctx: &BodyContext) {
        self.follow(ctx.cursor);
    }
}
