use super::{BodyContext, BodyKind, CelestialBody, EarthAnchor, SpriteHandle};
use crate::transform2d::Transform2D;
use bevy::prelude::*;

/// Earth spins in place at the center of the game area.
#[derive(Debug, Clone)]
pub struct Earth {
    sprite: SpriteHandle,
    center: Vec2,
    transform: Transform2D,
}

impl Earth {
    pub fn new(sprite: SpriteHandle, center: Vec2) -> Self {
        Self {
            sprite,
            center,
            transform: Transform2D::default(),
        }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.center
    }

    /// Plain-data view handed to the bodies that orbit Earth.
    pub fn anchor(&self) -> EarthAnchor {
        EarthAnchor {
            center: self.center,
            radius: self.sprite.radius,
        }
    }

    /// Earth turns at the raw global rate.
    #[inline]
    pub fn spin_angle(rotation: f32) -> f32 {
        rotation
    }
}

impl CelestialBody for Earth {
    fn kind(&self) -> BodyKind {
        BodyKind::Earth
    }

    fn sprite(&self) -> &SpriteHandle {
        &self.sprite
    }

    fn transform(&self) -> &Transform2D {
        &self.transform
    }

    fn update(&mut self, ctx: &BodyContext) {
        let r = self.sprite.radius;
        let t = &mut self.transform;
        t.reset();
        t.translate(-r, -r);
        t.rotate(Self::spin_angle(ctx.state.rotation));
        t.translate(self.center.x, self.center.y);
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::*;
    use crate::simulation::SimulationState;
    use std::f32::consts::PI;

    fn earth() -> Earth {
        Earth::new(SpriteHandle::with_radius(100.0), Vec2::new(640.0, 480.0))
    }

    #[test]
    fn image_center_sits_on_earth_center() {
        let mut earth = earth();
        for rotation in [0.0, -0.02, -1.3, -PI] {
            let state = SimulationState { rotation, tick: 0 };
            earth.update(&context(&state, Vec2::ZERO));
            assert_vec_close(
                earth.transform().apply(Vec2::splat(100.0)),
                Vec2::new(640.0, 480.0),
            );
        }
    }

    #[test]
    fn unrotated_top_left_corner() {
        let mut earth = earth();
        let state = SimulationState::default();
        earth.update(&context(&state, Vec2::ZERO));
        assert_vec_close(earth.transform().translation(), Vec2::new(540.0, 380.0));
    }

    #[test]
    fn half_turn_flips_top_left_to_bottom_right() {
        let mut earth = earth();
        let state = SimulationState {
            rotation: PI,
            tick: 0,
        };
        earth.update(&context(&state, Vec2::ZERO));
        assert_vec_close(earth.transform().translation(), Vec2::new(740.0, 580.0));
    }

    #[test]
    fn spins_at_global_rate() {
        let mut earth = earth();
        let state = SimulationState {
            rotation: -0.4,
            tick: 20,
        };
        earth.update(&context(&state, Vec2::ZERO));
        assert!((earth.transform().rotation() - -0.4).abs() < EPS);
    }

    #[test]
    fn anchor_exposes_center_and_radius() {
        let anchor = earth().anchor();
        assert_eq!(anchor.center, Vec2::new(640.0, 480.0));
        assert_eq!(anchor.radius, 100.0);
    }
}
