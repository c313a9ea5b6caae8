//! Generation constants and output settings

// Sheet layout is an external contract: consumers map grid cells back to
// neighbor patterns through it.
/// Columns in the packed tile sheet
pub const SHEET_COLUMNS: u32 = 6;
/// Rows in the packed tile sheet
pub const SHEET_ROWS: u32 = 8;

/// Resampling filter applied when a fragment is stretched to corner size
///
/// Nearest neighbor keeps pixel-art edges hard and is byte-for-byte
/// deterministic across platforms.
pub const RESIZE_FILTER: image::imageops::FilterType = image::imageops::FilterType::Nearest;

// Output settings
/// Suffix added to derived output filenames
pub const OUTPUT_SUFFIX: &str = "_tileset";
