//! Grid coordinates, bounds and tile discovery
//!
//! This module contains the grid-related functionality including:
//! - Coordinate extraction from tile filenames
//! - Inclusive bounding grid computation
//! - Tile discovery inside a folder

/// Coordinate extraction rules for tile filenames
pub mod coordinates;
/// Inclusive grid bounds over a tile collection
pub mod bounds;
/// Tile records and folder scanning
pub mod tiles;

pub use bounds::GridBounds;
pub use coordinates::CoordinateRule;
pub use tiles::Tile;
