//! Packing generated tiles into the fixed-grid output sheet

use crate::io::configuration::{SHEET_COLUMNS, SHEET_ROWS};
use image::{ColorType, DynamicImage, imageops};

/// Merge tiles row-major into a 6x8 sheet of exact, fixed dimensions
///
/// The sheet measures `tile_width * 6` by `tile_height * 8` regardless of how
/// many tiles are supplied. Placement starts at the top-left cell and stops
/// as soon as the tile sequence runs out; remaining cells stay blank in the
/// image's native background. Consumers rely on this grid together with the
/// enumeration order to map a cell back to its neighbor pattern, so the
/// layout is a contract, not a convenience.
pub fn merge_into_sheet(
    tiles: &[DynamicImage],
    tile_width: u32,
    tile_height: u32,
    color: ColorType,
) -> DynamicImage {
    let mut sheet = DynamicImage::new(tile_width * SHEET_COLUMNS, tile_height * SHEET_ROWS, color);
    let cells =
        (0..SHEET_ROWS).flat_map(|row| (0..SHEET_COLUMNS).map(move |column| (column, row)));
    for (tile, (column, row)) in tiles.iter().zip(cells) {
        imageops::replace(
            &mut sheet,
            tile,
            i64::from(column * tile_width),
            i64::from(row * tile_height),
        );
    }
    sheet
}
