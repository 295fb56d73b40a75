//! Per-folder collage pipeline
//!
//! Discover tiles, parse every coordinate, compute bounds, then decode and paste
//! tiles one at a time. All filenames are validated before the first tile is
//! decoded and nothing is written until every tile has been pasted.

use crate::collage::compositor::{Compositor, CompositorConfig};
use crate::grid::tiles::{discover_tile_paths, scan_tiles};
use crate::grid::{CoordinateRule, GridBounds, Tile};
use crate::io::configuration::TILE_PATTERN;
use crate::io::error::{Result, StitchError};
use crate::io::image::{load_tile, save_collage};
use image::RgbImage;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Finished canvas together with the layout it was built from
#[derive(Debug, Clone)]
pub struct Collage {
    /// Composite raster
    pub canvas: RgbImage,
    /// Grid extent covered by the canvas
    pub bounds: GridBounds,
    /// Number of tiles pasted
    pub tile_count: usize,
}

/// Summary of one written collage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollageReport {
    /// Folder the tiles were read from
    pub folder: PathBuf,
    /// Written collage file
    pub output: PathBuf,
    /// Grid extent covered by the canvas
    pub bounds: GridBounds,
    /// Number of tiles pasted
    pub tile_count: usize,
    /// Canvas width in pixels
    pub width: u32,
    /// Canvas height in pixels
    pub height: u32,
}

/// Builds one collage per tile folder
#[derive(Debug, Clone)]
pub struct CollageBuilder {
    rule: CoordinateRule,
    config: CompositorConfig,
    pattern: String,
    exclude: Option<OsString>,
}

impl Default for CollageBuilder {
    fn default() -> Self {
        Self::new(CoordinateRule::default(), CompositorConfig::default())
    }
}

impl CollageBuilder {
    /// Create a builder using the default tile pattern
    pub fn new(rule: CoordinateRule, config: CompositorConfig) -> Self {
        Self {
            rule,
            config,
            pattern: TILE_PATTERN.to_string(),
            exclude: None,
        }
    }

    /// Use a different glob pattern to select tiles
    #[must_use]
    pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = pattern.into();
        self
    }

    /// Never treat a file with this name as a tile
    #[must_use]
    pub fn excluding(mut self, file_name: impl Into<OsString>) -> Self {
        self.exclude = Some(file_name.into());
        self
    }

    /// Coordinate rule in effect
    pub const fn rule(&self) -> CoordinateRule {
        self.rule
    }

    /// Compositor configuration in effect
    pub const fn config(&self) -> &CompositorConfig {
        &self.config
    }

    /// Tile glob pattern in effect
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// List the tile files of a folder without parsing them
    ///
    /// # Errors
    ///
    /// Returns an error if the folder cannot be scanned
    pub fn tile_paths(&self, folder: &Path) -> Result<Vec<PathBuf>> {
        discover_tile_paths(folder, &self.pattern, self.exclude.as_deref())
    }

    /// Discover and parse the tiles of a folder
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The folder cannot be scanned
    /// - Any tile name is malformed
    /// - No tile matches the pattern
    pub fn scan(&self, folder: &Path) -> Result<Vec<Tile>> {
        let tiles = scan_tiles(folder, &self.pattern, self.rule, self.exclude.as_deref())?;
        if tiles.is_empty() {
            return Err(StitchError::EmptyFolder {
                folder: folder.to_path_buf(),
                pattern: self.pattern.clone(),
            });
        }
        Ok(tiles)
    }

    /// Build the collage for a folder in memory
    ///
    /// # Errors
    ///
    /// Returns an error if scanning, decoding or placement fails
    pub fn build(&self, folder: &Path) -> Result<Collage> {
        self.build_with_progress(folder, |_, _| {})
    }

    /// Build the collage for a folder, reporting `(pasted, total)` after each tile
    ///
    /// # Errors
    ///
    /// Returns an error if scanning, decoding or placement fails
    #[tracing::instrument(level = "debug", skip(self, on_tile))]
    pub fn build_with_progress<F>(&self, folder: &Path, mut on_tile: F) -> Result<Collage>
    where
        F: FnMut(usize, usize),
    {
        let tiles = self.scan(folder)?;
        let bounds = GridBounds::from_tiles(&tiles).ok_or_else(|| StitchError::EmptyFolder {
            folder: folder.to_path_buf(),
            pattern: self.pattern.clone(),
        })?;

        let mut compositor = Compositor::new(bounds, self.config)?;
        let (width, height) = compositor.canvas().dimensions();
        tracing::info!(
            folder = %folder.display(),
            tiles = tiles.len(),
            width,
            height,
            "compositing collage"
        );

        let total = tiles.len();
        on_tile(0, total);
        for tile in &tiles {
            tracing::debug!(tile = %tile.path.display(), x = tile.x, y = tile.y, "pasting tile");
            let image = load_tile(&tile.path)?;
            compositor.paste(tile, &image)?;
            on_tile(compositor.pasted(), total);
        }

        Ok(Collage {
            canvas: compositor.into_canvas(),
            bounds,
            tile_count: total,
        })
    }

    /// Build the collage for a folder and write it to `output`
    ///
    /// # Errors
    ///
    /// Returns an error if building fails or the file cannot be written
    pub fn build_to<F>(&self, folder: &Path, output: &Path, on_tile: F) -> Result<CollageReport>
    where
        F: FnMut(usize, usize),
    {
        let collage = self.build_with_progress(folder, on_tile)?;
        save_collage(&collage.canvas, output)?;

        let (width, height) = collage.canvas.dimensions();
        tracing::info!(output = %output.display(), width, height, "collage written");

        Ok(CollageReport {
            folder: folder.to_path_buf(),
            output: output.to_path_buf(),
            bounds: collage.bounds,
            tile_count: collage.tile_count,
            width,
            height,
        })
    }
}
