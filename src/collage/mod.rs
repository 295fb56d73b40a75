//! Collage assembly
//!
//! The compositor owns the canvas and places tiles; the builder runs the
//! per-folder pipeline from discovery to the written file.

/// Per-folder discovery, composition and export
pub mod builder;
/// Canvas allocation and tile placement
pub mod compositor;

pub use builder::{Collage, CollageBuilder, CollageReport};
pub use compositor::{Compositor, CompositorConfig, OverlapPolicy};
