//! Tile records and folder scanning

use crate::grid::coordinates::CoordinateRule;
use crate::io::error::{Result, StitchError, invalid_parameter};
use glob::{MatchOptions, Pattern};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// An image file placed at an integer grid cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    /// Path to the tile image
    pub path: PathBuf,
    /// Grid column
    pub x: i32,
    /// Grid row
    pub y: i32,
}

impl Tile {
    /// Create a tile at a known cell
    pub fn new(path: impl Into<PathBuf>, x: i32, y: i32) -> Self {
        Self {
            path: path.into(),
            x,
            y,
        }
    }

    /// Create a tile by reading its cell from the file name
    ///
    /// # Errors
    ///
    /// Returns an error if the file name does not carry coordinates under `rule`
    pub fn from_path(path: impl Into<PathBuf>, rule: CoordinateRule) -> Result<Self> {
        let path = path.into();
        let (x, y) = rule.parse(&path)?;
        Ok(Self { path, x, y })
    }

    /// Grid cell as `(x, y)`
    pub const fn cell(&self) -> (i32, i32) {
        (self.x, self.y)
    }
}

/// List the files in `folder` matching `pattern`, sorted by path
///
/// Subdirectories are not descended into. A file whose name equals `exclude`
/// is left out, which keeps a previously written collage out of its own input.
///
/// # Errors
///
/// Returns an error if:
/// - The folder path is not valid UTF-8
/// - The pattern cannot be compiled
/// - A directory entry cannot be read
pub fn discover_tile_paths(
    folder: &Path,
    pattern: &str,
    exclude: Option<&OsStr>,
) -> Result<Vec<PathBuf>> {
    let folder_str = folder
        .to_str()
        .ok_or_else(|| invalid_parameter("folder", &folder.display(), &"path is not valid UTF-8"))?;

    let full_pattern = PathBuf::from(Pattern::escape(folder_str)).join(pattern);
    let full_pattern = full_pattern.to_string_lossy();

    let options = MatchOptions {
        case_sensitive: true,
        require_literal_separator: true,
        require_literal_leading_dot: true,
    };

    let entries =
        glob::glob_with(&full_pattern, options).map_err(|e| StitchError::InvalidPattern {
            pattern: pattern.to_string(),
            reason: e.to_string(),
        })?;

    let mut paths = Vec::new();
    for entry in entries {
        let path = entry?;
        if !path.is_file() {
            continue;
        }
        if exclude.is_some() && path.file_name() == exclude {
            continue;
        }
        paths.push(path);
    }
    paths.sort();
    Ok(paths)
}

/// Discover and parse every tile in `folder`
///
/// # Errors
///
/// Returns an error if discovery fails or any file name is malformed
pub fn scan_tiles(
    folder: &Path,
    pattern: &str,
    rule: CoordinateRule,
    exclude: Option<&OsStr>,
) -> Result<Vec<Tile>> {
    discover_tile_paths(folder, pattern, exclude)?
        .into_iter()
        .map(|path| Tile::from_path(path, rule))
        .collect()
}
