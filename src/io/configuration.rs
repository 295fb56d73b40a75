//! Stitching constants and runtime configuration defaults

// A tile covers one region: 32 chunks of 16 pixels along each edge
/// Chunks along one edge of a region tile
pub const CHUNKS_PER_REGION: u32 = 32;
/// Pixels along one edge of a chunk
pub const PIXELS_PER_CHUNK: u32 = 16;
/// Default pixel edge length of one grid cell
pub const DEFAULT_SCALE: u32 = CHUNKS_PER_REGION * PIXELS_PER_CHUNK;

/// Default root directory scanned in batch mode
pub const DEFAULT_ROOT: &str = "images";

/// Glob pattern selecting tile files inside a folder
pub const TILE_PATTERN: &str = "*.png";

/// Extension of every tile and of the produced collage
pub const OUTPUT_EXTENSION: &str = "png";

/// File name of the collage written in single-folder mode
pub const COLLAGE_FILE_NAME: &str = "collage.png";

/// Separator between filename fields
pub const FIELD_SEPARATOR: char = '.';

/// Default number of fields preceding the coordinates
pub const DEFAULT_COORDINATE_FIELD: usize = 1;

// Progress bar display settings
/// Threshold for switching to batch progress mode
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;
