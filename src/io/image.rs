//! Source loading and sheet export

use crate::fragments::SourceImage;
use crate::io::error::{Result, TilesetError};
use image::DynamicImage;
use std::path::Path;

/// Load and validate a two-sprite source image
///
/// # Errors
///
/// Returns an error if:
/// - The file at the given path cannot be opened or decoded
/// - The decoded width is odd and cannot split into two sprites
pub fn load_source_image(path: &Path) -> Result<SourceImage> {
    SourceImage::from_path(path)
}

/// Save a generated sheet as a PNG image
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be encoded or written to the given path
pub fn export_sheet_as_png(sheet: &DynamicImage, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| TilesetError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source: e,
            })?;
        }
    }

    sheet.save(output_path).map_err(|e| TilesetError::ImageExport {
        path: output_path.to_path_buf(),
        source: e,
    })?;

    Ok(())
}
