//! Canvas allocation and tile placement
//!
//! The canvas spans the inclusive grid bounds: `columns * scale` pixels wide and
//! `rows * scale` pixels high. A tile at `(x, y)` is copied to the pixel offset
//! `((x - min_x) * scale, (y - min_y) * scale)`, replacing whatever was there.

use crate::grid::{GridBounds, Tile};
use crate::io::configuration::DEFAULT_SCALE;
use crate::io::error::{Result, StitchError, invalid_parameter};
use image::RgbImage;
use image::imageops;
use std::collections::HashMap;
use std::path::PathBuf;

/// Resolution for two tiles that claim the same cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverlapPolicy {
    /// The tile pasted later replaces the earlier one
    #[default]
    LastWriteWins,
    /// A second claim on a cell is an error
    Reject,
}

/// Parameters controlling canvas layout and placement checks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompositorConfig {
    /// Pixel edge length of one grid cell
    pub scale: u32,
    /// Handling of tiles sharing a cell
    pub overlap: OverlapPolicy,
    /// Require every tile to be exactly `scale` x `scale`
    pub verify_tile_size: bool,
}

impl Default for CompositorConfig {
    fn default() -> Self {
        Self {
            scale: DEFAULT_SCALE,
            overlap: OverlapPolicy::default(),
            verify_tile_size: true,
        }
    }
}

impl CompositorConfig {
    /// Configuration with a custom cell size and default policies
    pub fn with_scale(scale: u32) -> Self {
        Self {
            scale,
            ..Self::default()
        }
    }

    /// Check the configuration before any canvas is allocated
    ///
    /// # Errors
    ///
    /// Returns an error if the scale is zero
    pub fn validate(&self) -> Result<()> {
        if self.scale == 0 {
            return Err(invalid_parameter(
                "scale",
                &self.scale,
                &"cell size must be at least one pixel",
            ));
        }
        Ok(())
    }
}

/// Canvas size in pixels for the given bounds and cell size
///
/// # Errors
///
/// Returns an error if either dimension does not fit in `u32`
pub fn canvas_dimensions(bounds: &GridBounds, scale: u32) -> Result<(u32, u32)> {
    let columns = bounds.columns();
    let rows = bounds.rows();
    let too_large = || StitchError::CanvasTooLarge {
        columns,
        rows,
        scale,
    };

    let width = columns
        .checked_mul(u64::from(scale))
        .and_then(|w| u32::try_from(w).ok())
        .ok_or_else(too_large)?;
    let height = rows
        .checked_mul(u64::from(scale))
        .and_then(|h| u32::try_from(h).ok())
        .ok_or_else(too_large)?;

    Ok((width, height))
}

/// Owns the canvas for one collage and pastes tiles into it
#[derive(Debug)]
pub struct Compositor {
    config: CompositorConfig,
    bounds: GridBounds,
    canvas: RgbImage,
    claimed: HashMap<(i32, i32), PathBuf>,
    pasted: usize,
}

impl Compositor {
    /// Allocate a blank canvas covering `bounds`
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the canvas is too large
    pub fn new(bounds: GridBounds, config: CompositorConfig) -> Result<Self> {
        config.validate()?;
        let (width, height) = canvas_dimensions(&bounds, config.scale)?;

        Ok(Self {
            config,
            bounds,
            canvas: RgbImage::new(width, height),
            claimed: HashMap::new(),
            pasted: 0,
        })
    }

    /// Pixel offset of a tile's top-left corner on the canvas
    ///
    /// # Errors
    ///
    /// Returns an error if the tile lies outside the canvas bounds
    pub fn placement(&self, tile: &Tile) -> Result<(u32, u32)> {
        let outside = || {
            invalid_parameter(
                "tile",
                &tile.path.display(),
                &format!("cell ({}, {}) lies outside the canvas bounds", tile.x, tile.y),
            )
        };

        let (column, row) = self.bounds.cell_offset(tile.x, tile.y).ok_or_else(outside)?;
        let scale = u64::from(self.config.scale);

        // Offsets are below the canvas size, which already fits in u32
        let x = u32::try_from(column * scale).ok().ok_or_else(outside)?;
        let y = u32::try_from(row * scale).ok().ok_or_else(outside)?;
        Ok((x, y))
    }

    /// Copy a decoded tile onto the canvas at its cell
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The tile size differs from the cell size while verification is on
    /// - The cell is already claimed and overlaps are rejected
    /// - The tile lies outside the canvas bounds
    pub fn paste(&mut self, tile: &Tile, image: &RgbImage) -> Result<()> {
        let scale = self.config.scale;
        if self.config.verify_tile_size && image.dimensions() != (scale, scale) {
            return Err(StitchError::TileSizeMismatch {
                path: tile.path.clone(),
                actual: image.dimensions(),
                expected: scale,
            });
        }

        let (x, y) = self.placement(tile)?;

        if let Some(previous) = self.claimed.insert(tile.cell(), tile.path.clone()) {
            if self.config.overlap == OverlapPolicy::Reject {
                return Err(StitchError::OverlappingTiles {
                    cell: tile.cell(),
                    first: previous,
                    second: tile.path.clone(),
                });
            }
            tracing::debug!(
                cell = ?tile.cell(),
                replaced = %previous.display(),
                by = %tile.path.display(),
                "tile overwrites an earlier tile"
            );
        }

        imageops::replace(&mut self.canvas, image, i64::from(x), i64::from(y));
        self.pasted += 1;
        Ok(())
    }

    /// Number of successful pastes so far
    pub const fn pasted(&self) -> usize {
        self.pasted
    }

    /// Current canvas contents
    pub const fn canvas(&self) -> &RgbImage {
        &self.canvas
    }

    /// Release the finished canvas
    pub fn into_canvas(self) -> RgbImage {
        self.canvas
    }
}
