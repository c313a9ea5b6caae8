//! Error types for tileset inference and file handling

use std::fmt;
use std::path::PathBuf;

/// Main error type for all tileset operations
#[derive(Debug)]
pub enum TilesetError {
    /// Failed to decode a source image
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image decoding error
        source: image::ImageError,
    },

    /// Source image width cannot be split into two equal sprites
    OddImageWidth {
        /// The rejected width in pixels
        width: u32,
    },

    /// Neighbor flag sequence has the wrong length
    ///
    /// A neighborhood is described by exactly eight flags, one per compass
    /// position around the center tile.
    PatternLength {
        /// Number of flags actually provided
        actual: usize,
    },

    /// Center box coordinates are not a valid rectangle
    InvalidBox {
        /// Explanation of why the coordinates were rejected
        reason: String,
    },

    /// Failed to save a generated image to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Target path cannot be processed
    UnsupportedTarget {
        /// The rejected path
        path: PathBuf,
        /// Explanation of the rejection
        reason: &'static str,
    },
}

impl fmt::Display for TilesetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::OddImageWidth { width } => {
                write!(
                    f,
                    "Source width {width} is odd - the image must hold two equal-width sprites"
                )
            }
            Self::PatternLength { actual } => {
                write!(f, "Neighborhood needs exactly 8 flags, got {actual}")
            }
            Self::InvalidBox { reason } => {
                write!(f, "Invalid center box: {reason}")
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::UnsupportedTarget { path, reason } => {
                write!(f, "Cannot process '{}': {reason}", path.display())
            }
        }
    }
}

impl std::error::Error for TilesetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for tileset results
pub type Result<T> = std::result::Result<T, TilesetError>;

impl From<image::ImageError> for TilesetError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageLoad {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

impl From<std::io::Error> for TilesetError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_failing_path() {
        let err = TilesetError::UnsupportedTarget {
            path: PathBuf::from("notes.txt"),
            reason: "target must be a PNG image",
        };
        let message = err.to_string();
        assert!(message.contains("notes.txt"));
        assert!(message.contains("PNG"));
    }

    #[test]
    fn test_odd_width_message_carries_width() {
        let err = TilesetError::OddImageWidth { width: 129 };
        assert!(err.to_string().contains("129"));
    }
}
