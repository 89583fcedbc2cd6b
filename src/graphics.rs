//! Camera setup and the Bevy side of drawing.
//!
//! The game computes placements in screen space (origin top-left, `+y` down,
//! see [`crate::transform2d`]).  Bevy's 2D world has its origin at the center
//! with `+y` up.  Sprites are anchored at their top-left pixel, so image pixel
//! `(u, v)` lands where the placement maps it whatever the image's aspect
//! ratio.  Every draw call is converted by [`screen_to_world`] before it lands
//! on the sprite entity.

use crate::bodies::BodyKind;
use crate::config::GameConfig;
use crate::game_loop::{DrawList, GameLoop};
use crate::transform2d::Transform2D;
use bevy::camera::ScalingMode;
use bevy::prelude::*;
use bevy::sprite::Anchor;

/// Spawn a 2D camera that always shows exactly the logical game area, however
/// large the window is.
pub fn setup_camera(mut commands: Commands, config: Res<GameConfig>) {
    commands.spawn((
        Camera2d,
        Projection::Orthographic(OrthographicProjection {
            scaling_mode: ScalingMode::Fixed {
                width: config.game_width as f32,
                height: config.game_height as f32,
            },
            ..OrthographicProjection::default_2d()
        }),
    ));
    info!(
        "Camera spawned ({}x{} logical)",
        config.game_width, config.game_height
    );
}

/// Convert a screen-space sprite placement into a Bevy world transform.
///
/// The translation is where the image's top-left pixel lands.  Flipping `y`
/// mirrors the rotation.  `layer` becomes the z coordinate so later draws sit
/// on top.
pub fn screen_to_world(placement: &Transform2D, game_size: UVec2, layer: usize) -> Transform {
    let origin = placement.apply(Vec2::ZERO);
    let half = game_size.as_vec2() / 2.0;
    Transform {
        translation: Vec3::new(origin.x - half.x, half.y - origin.y, layer as f32),
        rotation: Quat::from_rotation_z(-placement.rotation()),
        ..default()
    }
}

/// Copy this frame's draw calls onto the sprite entities.
pub fn apply_draw_list(
    frame: &DrawList,
    game_size: UVec2,
    sprites: &mut Query<(&BodyKind, &mut Transform)>,
) {
    for (layer, call) in frame.calls.iter().enumerate() {
        for (kind, mut transform) in sprites.iter_mut() {
            if *kind == call.kind {
                *transform = screen_to_world(&call.transform, game_size, layer);
            }
        }
    }
}

/// Spawn one sprite entity per body, in draw order.
pub fn spawn_body_sprites(commands: &mut Commands, game: &GameLoop) {
    for body in game.bodies().in_order() {
        commands.spawn((
            Sprite::from_image(body.sprite().image.clone()),
            Anchor::TOP_LEFT,
            Transform::default(),
            body.kind(),
        ));
    }
}
