//! Error types for tile discovery, composition and export

use std::fmt;
use std::path::PathBuf;

/// Main error type for all stitching operations
#[derive(Debug)]
pub enum StitchError {
    /// Tile filename does not carry the expected coordinate fields
    MalformedFilename {
        /// Path to the offending tile
        path: PathBuf,
        /// Description of the missing or non-numeric field
        reason: String,
    },

    /// Folder contains no files matching the tile pattern
    EmptyFolder {
        /// Folder that was scanned
        folder: PathBuf,
        /// Glob pattern used for the scan
        pattern: String,
    },

    /// Failed to open or decode a tile image
    TileLoad {
        /// Path to the tile
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// Decoded tile does not match the configured cell size
    TileSizeMismatch {
        /// Path to the tile
        path: PathBuf,
        /// Actual tile dimensions (width, height)
        actual: (u32, u32),
        /// Configured cell edge length
        expected: u32,
    },

    /// Two tiles claim the same grid cell while overlaps are rejected
    OverlappingTiles {
        /// Contested grid cell
        cell: (i32, i32),
        /// Tile that claimed the cell first
        first: PathBuf,
        /// Tile that claimed the cell second
        second: PathBuf,
    },

    /// Canvas dimensions do not fit in the raster size type
    CanvasTooLarge {
        /// Grid columns covered by the bounds
        columns: u64,
        /// Grid rows covered by the bounds
        rows: u64,
        /// Cell edge length in pixels
        scale: u32,
    },

    /// Failed to save the composite image
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

    /// Tile glob pattern could not be compiled or walked
    InvalidPattern {
        /// Pattern that failed
        pattern: String,
        /// Description of the failure
        reason: String,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },
}

impl fmt::Display for StitchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedFilename { path, reason } => {
                write!(
                    f,
                    "Cannot read grid coordinates from '{}': {reason}",
                    path.display()
                )
            }
            Self::EmptyFolder { folder, pattern } => {
                write!(
                    f,
                    "No tiles matching '{pattern}' found in '{}'",
                    folder.display()
                )
            }
            Self::TileLoad { path, source } => {
                write!(f, "Failed to load tile '{}': {source}", path.display())
            }
            Self::TileSizeMismatch {
                path,
                actual,
                expected,
            } => {
                write!(
                    f,
                    "Tile '{}' is {}x{} but cells are {expected}x{expected}",
                    path.display(),
                    actual.0,
                    actual.1
                )
            }
            Self::OverlappingTiles {
                cell,
                first,
                second,
            } => {
                write!(
                    f,
                    "Tiles '{}' and '{}' both claim cell ({}, {})",
                    first.display(),
                    second.display(),
                    cell.0,
                    cell.1
                )
            }
            Self::CanvasTooLarge {
                columns,
                rows,
                scale,
            } => {
                write!(
                    f,
                    "Canvas of {columns}x{rows} cells at {scale}px per cell exceeds the maximum image size"
                )
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export collage to '{}': {source}",
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
            Self::InvalidPattern { pattern, reason } => {
                write!(f, "Invalid tile pattern '{pattern}': {reason}")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
        }
    }
}

impl std::error::Error for StitchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::TileLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for stitching results
pub type Result<T> = std::result::Result<T, StitchError>;

impl From<image::ImageError> for StitchError {
    fn from(err: image::ImageError) -> Self {
        Self::TileLoad {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

impl From<std::io::Error> for StitchError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

impl From<glob::PatternError> for StitchError {
    fn from(err: glob::PatternError) -> Self {
        Self::InvalidPattern {
            pattern: String::from("<unknown>"),
            reason: err.to_string(),
        }
    }
}

impl From<glob::GlobError> for StitchError {
    fn from(err: glob::GlobError) -> Self {
        let path = err.path().to_path_buf();
        Self::FileSystem {
            path,
            operation: "scan directory",
            source: err.into_error(),
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> StitchError {
    StitchError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a malformed filename error
pub fn malformed_filename(path: impl Into<PathBuf>, reason: &impl ToString) -> StitchError {
    StitchError::MalformedFilename {
        path: path.into(),
        reason: reason.to_string(),
    }
}
