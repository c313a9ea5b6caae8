//! Source sprite pair and the center box that partitions it

use crate::io::error::{Result, TilesetError};
use image::{ColorType, DynamicImage, GenericImageView};
use std::path::Path;

/// User-chosen rectangle separating a sprite's shared middle region from its
/// edges and corners
///
/// Coordinates are pixels relative to a single sprite half, with `x1 <= x2`
/// and `y1 <= y2`. The box is copied by value into the generator; it does not
/// have to bisect the sprite evenly, so the fragments it produces may all
/// have different dimensions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CenterBox {
    /// Left edge of the box
    pub x1: u32,
    /// Top edge of the box
    pub y1: u32,
    /// Right edge of the box
    pub x2: u32,
    /// Bottom edge of the box
    pub y2: u32,
}

impl CenterBox {
    /// Create a center box from its corner coordinates
    pub const fn new(x1: u32, y1: u32, x2: u32, y2: u32) -> Self {
        Self { x1, y1, x2, y2 }
    }
}

/// Immutable two-sprite source image
///
/// The left half holds the convex (isolated corner) sprite, the right half
/// the concave (fully surrounded corner) sprite. The decoded pixel mode is
/// preserved through every crop, resize, and composite derived from it.
pub struct SourceImage {
    image: DynamicImage,
    width: u32,
    height: u32,
}

impl SourceImage {
    /// Wrap a decoded image as a source sprite pair
    ///
    /// # Errors
    ///
    /// Returns [`TilesetError::OddImageWidth`] if the width cannot split into
    /// two equal sprites.
    pub fn new(image: DynamicImage) -> Result<Self> {
        let (width, height) = image.dimensions();
        if width % 2 != 0 {
            return Err(TilesetError::OddImageWidth { width });
        }
        Ok(Self {
            image,
            width,
            height,
        })
    }

    /// Decode a source sprite pair from an image file
    ///
    /// # Errors
    ///
    /// Returns [`TilesetError::ImageLoad`] if the file cannot be decoded and
    /// [`TilesetError::OddImageWidth`] if its width is odd.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path_buf = path.as_ref().to_path_buf();
        let image = image::open(&path_buf).map_err(|e| TilesetError::ImageLoad {
            path: path_buf,
            source: e,
        })?;
        Self::new(image)
    }

    /// Decode a source sprite pair from in-memory image data
    ///
    /// # Errors
    ///
    /// Returns [`TilesetError::ImageLoad`] if the bytes cannot be decoded and
    /// [`TilesetError::OddImageWidth`] if the decoded width is odd.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let image = image::load_from_memory(bytes).map_err(|e| TilesetError::ImageLoad {
            path: std::path::PathBuf::from("<memory>"),
            source: e,
        })?;
        Self::new(image)
    }

    /// Full width of the two-sprite image in pixels
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Height of the image in pixels
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Width of a single sprite, half the image width
    pub const fn sprite_width(&self) -> u32 {
        self.width / 2
    }

    /// Pixel mode of the decoded image
    pub fn color(&self) -> ColorType {
        self.image.color()
    }

    /// Crop a rectangle out of the image, clamped to its bounds
    pub fn crop(&self, x: u32, y: u32, width: u32, height: u32) -> DynamicImage {
        self.image.crop_imm(x, y, width, height)
    }
}
