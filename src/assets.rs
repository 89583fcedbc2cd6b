//! Sprite loading.
//!
//! The four images are requested from the [`AssetServer`] at startup by
//! logical name (`earth` → `sprites/earth.png`).  Loading is asynchronous, so
//! [`crate::plugin::finish_loading_system`] polls [`SpriteAssets`] every frame
//! until either all four are decoded or one of them has failed.  A failure is
//! fatal; there is no retry.

use crate::bodies::{BodyKind, SpriteHandle};
use crate::config::GameConfig;
use crate::error::GameError;
use crate::game_loop::SpriteSet;
use bevy::asset::LoadState;
use bevy::prelude::*;

/// Handles of the requested sprite images, in draw order.
#[derive(Resource, Debug, Clone)]
pub struct SpriteAssets {
    pub handles: Vec<(BodyKind, Handle<Image>)>,
}

impl SpriteAssets {
    fn handle(&self, kind: BodyKind) -> Option<&Handle<Image>> {
        self.handles
            .iter()
            .find(|(k, _)| *k == kind)
            .map(|(_, handle)| handle)
    }

    /// Resolve one body's sprite if its image is available.
    fn sprite(&self, kind: BodyKind, images: &Assets<Image>) -> Option<SpriteHandle> {
        let handle = self.handle(kind)?;
        let image = images.get(handle)?;
        Some(SpriteHandle::from_width(handle.clone(), image.width()))
    }

    /// All four sprites, once every image is decoded.
    pub fn sprite_set(&self, images: &Assets<Image>) -> Option<SpriteSet> {
        Some(SpriteSet {
            earth: self.sprite(BodyKind::Earth, images)?,
            moon: self.sprite(BodyKind::Moon, images)?,
            asteroid: self.sprite(BodyKind::Asteroid, images)?,
            crosshair: self.sprite(BodyKind::Crosshair, images)?,
        })
    }

    /// The first sprite whose load has failed, as a fatal error.
    pub fn first_failure(&self, asset_server: &AssetServer) -> Option<GameError> {
        self.handles.iter().find_map(|(kind, handle)| {
            match asset_server.get_load_state(handle.id()) {
                Some(LoadState::Failed(err)) => Some(GameError::AssetLoad {
                    name: kind.sprite_name(),
                    reason: err.to_string(),
                }),
                _ => None,
            }
        })
    }
}

/// Startup system: request every sprite image.
pub fn begin_sprite_loading(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    config: Res<GameConfig>,
) {
    let handles = BodyKind::ORDER
        .iter()
        .map(|&kind| {
            let path = config.sprite_path(kind.sprite_name());
            (kind, asset_server.load::<Image>(path))
        })
        .collect();
    commands.insert_resource(SpriteAssets { handles });
    info!("Loading sprites from {}/", config.sprite_dir);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loaded(images: &mut Assets<Image>) -> SpriteAssets {
        SpriteAssets {
            handles: BodyKind::ORDER
                .iter()
                .map(|&kind| (kind, images.add(Image::default())))
                .collect(),
        }
    }

    #[test]
    fn sprite_set_needs_every_image() {
        let mut images = Assets::<Image>::default();
        let mut assets = loaded(&mut images);
        assert!(assets.sprite_set(&images).is_some());

        assets.handles.retain(|(kind, _)| *kind != BodyKind::Moon);
        assert!(assets.sprite_set(&images).is_none());
    }

    #[test]
    fn radius_comes_from_image_width() {
        let mut images = Assets::<Image>::default();
        let assets = loaded(&mut images);
        let set = assets.sprite_set(&images).expect("all loaded");
        let width = Image::default().width() as f32;
        assert_eq!(set.earth.radius, width / 2.0);
        assert_eq!(set.crosshair.radius, width / 2.0);
    }

    #[test]
    fn pending_image_is_not_ready() {
        let images = Assets::<Image>::default();
        let assets = SpriteAssets {
            handles: BodyKind::ORDER
                .iter()
                .map(|&kind| (kind, Handle::default()))
                .collect(),
        };
        assert!(assets.sprite_set(&images).is_none());
    }
}
