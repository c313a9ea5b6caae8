//! Tileset generation orchestration and caching
//!
//! One generator instance owns one loaded source image, its center box, the
//! fragment library cut from them, and the memoized tiles. Everything is
//! synchronous, in-memory pixel arithmetic; for concurrent jobs, use one
//! generator per job rather than sharing an instance.

use crate::compose::{compose_tile, merge_into_sheet, resolve_parts};
use crate::fragments::{CenterBox, FragmentLibrary, SourceImage};
use crate::io::error::Result;
use crate::pattern::{Neighborhood, canonical_neighborhoods};
use image::DynamicImage;
use std::collections::HashMap;
use std::path::Path;

/// Infers a complete autotile sheet from a two-sprite source image
///
/// Tiles are generated on first request and memoized by canonical pattern
/// key. Both caches are invalidated wholesale when the source image or the
/// center box changes, since every fragment changes with them.
pub struct TilesetGenerator {
    source: SourceImage,
    center: CenterBox,
    fragments: FragmentLibrary,
    tiles: HashMap<u8, DynamicImage>,
}

impl TilesetGenerator {
    /// Create a generator from a decoded source image and center box
    pub fn new(source: SourceImage, center: CenterBox) -> Self {
        let fragments = FragmentLibrary::build(&source, center);
        Self {
            source,
            center,
            fragments,
            tiles: HashMap::new(),
        }
    }

    /// Create a generator by decoding a source image file
    ///
    /// # Errors
    ///
    /// Returns [`crate::TilesetError::ImageLoad`] if the file cannot be
    /// decoded and [`crate::TilesetError::OddImageWidth`] if its width is
    /// odd.
    pub fn from_path<P: AsRef<Path>>(path: P, center: CenterBox) -> Result<Self> {
        Ok(Self::new(SourceImage::from_path(path)?, center))
    }

    /// Replace the source image, discarding all cached fragments and tiles
    pub fn load_image(&mut self, source: SourceImage) {
        self.source = source;
        self.fragments = FragmentLibrary::build(&self.source, self.center);
        self.tiles.clear();
    }

    /// Replace the center box, discarding all cached fragments and tiles
    pub fn set_center_box(&mut self, center: CenterBox) {
        self.center = center;
        self.fragments = FragmentLibrary::build(&self.source, center);
        self.tiles.clear();
    }

    /// The current center box
    pub const fn center_box(&self) -> CenterBox {
        self.center
    }

    /// The loaded source image
    pub const fn source(&self) -> &SourceImage {
        &self.source
    }

    /// Tile for one neighbor pattern, generated on first request
    ///
    /// Every tile measures exactly half the source width by the source
    /// height, regardless of the pattern.
    pub fn tile(&mut self, neighborhood: Neighborhood) -> DynamicImage {
        let source = &self.source;
        let fragments = &self.fragments;
        self.tiles
            .entry(neighborhood.bits())
            .or_insert_with(|| {
                let parts = resolve_parts(fragments, neighborhood);
                compose_tile(
                    &parts,
                    source.sprite_width(),
                    source.height(),
                    source.color(),
                )
            })
            .clone()
    }

    /// All 47 tiles in canonical enumeration order
    pub fn tile_list(&mut self) -> Vec<DynamicImage> {
        canonical_neighborhoods()
            .into_iter()
            .map(|neighborhood| self.tile(neighborhood))
            .collect()
    }

    /// Pack a tile sequence into the fixed 6x8 sheet
    pub fn merge_to_sheet(&self, tiles: &[DynamicImage]) -> DynamicImage {
        merge_into_sheet(
            tiles,
            self.source.sprite_width(),
            self.source.height(),
            self.source.color(),
        )
    }

    /// Generate the complete sheet for the current image and box
    pub fn sheet(&mut self) -> DynamicImage {
        let tiles = self.tile_list();
        self.merge_to_sheet(&tiles)
    }
}
