//! Tile decoding and collage export

use crate::io::error::{Result, StitchError};
use image::{ImageFormat, RgbImage};
use std::path::Path;

/// Decode a tile into an RGB raster
///
/// The file handle is released before returning.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or decoded
pub fn load_tile(path: &Path) -> Result<RgbImage> {
    let decoded = image::open(path).map_err(|e| StitchError::TileLoad {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(decoded.into_rgb8())
}

/// Write the collage as a PNG, creating the parent directory if needed
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be encoded or written
pub fn save_collage(canvas: &RgbImage, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| StitchError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source: e,
            })?;
        }
    }

    canvas
        .save_with_format(output_path, ImageFormat::Png)
        .map_err(|e| StitchError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    Ok(())
}
