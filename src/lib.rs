//! Stitch a folder of coordinate-named tile images into a single collage
//!
//! Each tile file name carries a grid coordinate as two dot-separated integer
//! fields. The tiles of a folder are placed on one canvas spanning the
//! inclusive bounding grid, one cell of `scale` x `scale` pixels per tile.

#![forbid(unsafe_code)]

/// Canvas composition and the per-folder build pipeline
pub mod collage;
/// Coordinate parsing, grid bounds and tile discovery
pub mod grid;
/// Input/output operations, configuration and error handling
pub mod io;

pub use io::error::{Result, StitchError};
