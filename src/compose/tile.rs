//! Assembly of nine resolved fragments into a single tile

use super::resolve::TileParts;
use image::{ColorType, DynamicImage, imageops};

/// Paste resolved fragments into one tile buffer of exactly the given size
///
/// Fragments are placed left to right, top to bottom. Horizontal offsets
/// accumulate from each pasted fragment's actual width and vertical offsets
/// from the middle-lane fragment's height per band, so unevenly split boxes
/// still line up: fragments sharing a band share a height and fragments
/// sharing a lane share a width. The buffer dimensions never depend on the
/// neighbor pattern.
pub fn compose_tile(parts: &TileParts, width: u32, height: u32, color: ColorType) -> DynamicImage {
    let mut tile = DynamicImage::new(width, height, color);
    let mut y_offset: i64 = 0;
    for [left, middle, right] in &parts.rows {
        let mut x_offset: i64 = 0;
        for fragment in [left, middle, right] {
            imageops::replace(&mut tile, fragment, x_offset, y_offset);
            x_offset += i64::from(fragment.width());
        }
        y_offset += i64::from(middle.height());
    }
    tile
}
