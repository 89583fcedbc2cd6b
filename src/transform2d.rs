//! Composable 2D affine transform in screen space.
//!
//! Screen space here is the logical game area: origin at the top-left corner,
//! `+x` to the right and `+y` down, one unit per image pixel.
//!
//! Every operation is applied *after* the ones already recorded, so the last
//! call is the outermost step in screen space:
//!
//! ```text
//! t.translate(a); t.rotate(θ); t.translate(b);   // p' = T(b) · R(θ) · T(a) · p
//! ```
//!
//! Composition is not commutative; callers must issue operations in exactly
//! the order their placement needs.  Non-finite inputs are not guarded and
//! propagate into the matrix.

use bevy::math::{Affine2, Vec2};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform2D {
    affine: Affine2,
}

impl Default for Transform2D {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform2D {
    pub const IDENTITY: Self = Self {
        affine: Affine2::IDENTITY,
    };

    /// Back to identity.
    #[inline]
    pub fn reset(&mut self) {
        self.affine = Affine2::IDENTITY;
    }

    /// Append a translation by `(dx, dy)`.
    #[inline]
    pub fn translate(&mut self, dx: f32, dy: f32) {
        self.affine = Affine2::from_translation(Vec2::new(dx, dy)) * self.affine;
    }

    /// Append a rotation by `theta` radians about the current origin.
    ///
    /// Uses the matrix `[cos −sin; sin cos]`; with `+y` pointing down a
    /// positive angle turns clockwise on screen.
    #[inline]
    pub fn rotate(&mut self, theta: f32) {
        self.affine = Affine2::from_angle(theta) * self.affine;
    }

    /// Map a point from the sprite's local image space to screen space.
    #[inline]
    pub fn apply(&self, point: Vec2) -> Vec2 {
        self.affine.transform_point2(point)
    }

    /// Screen position of the local origin (the image's top-left corner).
    #[inline]
    pub fn translation(&self) -> Vec2 {
        self.affine.translation
    }

    /// Net rotation of the transform, in `(-π, π]`.
    #[inline]
    pub fn rotation(&self) -> f32 {
        let x_axis = self.affine.matrix2.x_axis;
        x_axis.y.atan2(x_axis.x)
    }

    /// The underlying matrix.
    #[inline]
    pub fn affine(&self) -> Affine2 {
        self.affine
    }
}
