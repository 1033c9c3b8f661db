use std::collections::HashMap;
use std::path::{Path, PathBuf};

use image::RgbaImage;
use log::debug;
use thiserror::Error;

use crate::graphics::{scale_sprite, tint_sprite};
use crate::parts::Part;

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("asset directory {0} does not exist")]
    MissingDir(PathBuf),
    #[error("failed to load texture {path}: {source}")]
    Load {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

/// The six base textures, loaded once at startup and never mutated.
pub struct PartSprites {
    body: RgbaImage,
    head: RgbaImage,
    left_arm: RgbaImage,
    right_arm: RgbaImage,
    left_leg: RgbaImage,
    right_leg: RgbaImage,
}

impl PartSprites {
    /// Loads all six part textures from `dir`. Any missing or undecodable
    /// texture is a startup failure.
    pub fn load(dir: &Path) -> Result<PartSprites, AssetError> {
        if !dir.is_dir() {
            return Err(AssetError::MissingDir(dir.to_path_buf()));
        }
        Ok(PartSprites {
            body: load_texture(dir, Part::Body)?,
            head: load_texture(dir, Part::Head)?,
            left_arm: load_texture(dir, Part::LeftArm)?,
            right_arm: load_texture(dir, Part::RightArm)?,
            left_leg: load_texture(dir, Part::LeftLeg)?,
            right_leg: load_texture(dir, Part::RightLeg)?,
        })
    }

    pub fn get(&self, part: Part) -> &RgbaImage {
        match part {
            Part::Body => &self.body,
            Part::Head => &self.head,
            Part::LeftArm => &self.left_arm,
            Part::RightArm => &self.right_arm,
            Part::LeftLeg => &self.left_leg,
            Part::RightLeg => &self.right_leg,
        }
    }

    #[cfg(test)]
    fn from_fill(width: u32, height: u32, rgba: [u8; 4]) -> PartSprites {
        let img = || RgbaImage::from_pixel(width, height, image::Rgba(rgba));
        PartSprites {
            body: img(),
            head: img(),
            left_arm: img(),
            right_arm: img(),
            left_leg: img(),
            right_leg: img(),
        }
    }
}

fn load_texture(dir: &Path, part: Part) -> Result<RgbaImage, AssetError> {
    let path = dir.join(part.file_name());
    let img = image::open(&path)
        .map_err(|source| AssetError::Load {
            path: path.clone(),
            source,
        })?
        .to_rgba8();
    debug!(
        "loaded {} ({}x{})",
        path.display(),
        img.width(),
        img.height()
    );
    Ok(img)
}

#[derive(PartialEq, Eq, Clone, Copy)]
struct CacheKey {
    size: (u32, u32),
    tint: Option<u32>,
}

struct CachedSprite {
    key: CacheKey,
    image: RgbaImage,
}

/// Per-part cache of the scaled (and optionally tinted) texture. Rescaling
/// and tinting only happen when the part's size or tint index changes, not
/// every frame. Rotation is not cached since the swing angle changes every
/// frame.
#[derive(Default)]
pub struct SpriteCache {
    entries: HashMap<Part, CachedSprite>,
}

impl SpriteCache {
    pub fn new() -> SpriteCache {
        SpriteCache::default()
    }

    /// Returns the scaled/tinted sprite for `part`, rebuilding it only when
    /// `size` or `tint` differ from the cached entry.
    pub fn get<'a>(
        &'a mut self,
        part: Part,
        base: &RgbaImage,
        size: (u32, u32),
        tint: Option<(u32, [u8; 3])>,
    ) -> &'a RgbaImage {
        let key = CacheKey {
            size,
            tint: tint.map(|(index, _)| index),
        };
        let entry = self
            .entries
            .entry(part)
            .or_insert_with(|| build_sprite(base, size, tint, key));
        if entry.key != key {
            *entry = build_sprite(base, size, tint, key);
        }
        &entry.image
    }
}

fn build_sprite(
    base: &RgbaImage,
    size: (u32, u32),
    tint: Option<(u32, [u8; 3])>,
    key: CacheKey,
) -> CachedSprite {
    let scaled = scale_sprite(base, size.0, size.1);
    let image = match tint {
        Some((_, color)) => tint_sprite(&scaled, color),
        None => scaled,
    };
    CachedSprite { key, image }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cache_rebuilds_only_on_size_or_tint_change() {
        let sprites = PartSprites::from_fill(16, 16, [100, 100, 100, 255]);
        let mut cache = SpriteCache::new();

        let first = cache.get(Part::Body, sprites.get(Part::Body), (8, 8), None);
        assert_eq!((first.width(), first.height()), (8, 8));
        let first_ptr = first.as_raw().as_ptr();

        // Same inputs: the cached buffer is reused, not rebuilt.
        let again = cache.get(Part::Body, sprites.get(Part::Body), (8, 8), None);
        assert_eq!(again.as_raw().as_ptr(), first_ptr);

        // Tint change invalidates the entry.
        let tinted = cache.get(
            Part::Body,
            sprites.get(Part::Body),
            (8, 8),
            Some((1, [50, 0, 0])),
        );
        assert_eq!(tinted.get_pixel(0, 0).0, [150, 100, 100, 255]);

        // Size change invalidates it again.
        let resized = cache.get(Part::Body, sprites.get(Part::Body), (4, 4), None);
        assert_eq!((resized.width(), resized.height()), (4, 4));
        assert_eq!(resized.get_pixel(0, 0).0, [100, 100, 100, 255]);
    }

    #[test]
    fn parts_cache_independently() {
        let sprites = PartSprites::from_fill(16, 16, [10, 10, 10, 255]);
        let mut cache = SpriteCache::new();
        cache.get(Part::Head, sprites.get(Part::Head), (5, 5), None);
        let leg = cache.get(Part::LeftLeg, sprites.get(Part::LeftLeg), (3, 9), None);
        assert_eq!((leg.width(), leg.height()), (3, 9));
    }

    #[test]
    fn missing_directory_is_a_load_error() {
        let err = PartSprites::load(Path::new("/nonexistent/robot-textures"))
            .err()
            .map(|e| e.to_string());
        assert!(err.is_some_and(|m| m.contains("does not exist")));
    }
}
