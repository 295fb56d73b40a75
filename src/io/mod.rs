//! Input/output, configuration and command-line handling
//!
//! This module contains the outer layer of the stitcher including:
//! - Command-line parsing and folder orchestration
//! - Tile decoding and collage export
//! - Error types, logging setup and progress display

/// Command-line arguments and batch or single folder processing
pub mod cli;
/// Default values and fixed names
pub mod configuration;
/// Error types and result alias
pub mod error;
/// Tile loading and collage saving
pub mod image;
/// Tracing subscriber setup
pub mod logging;
/// Progress bars for folder and tile counts
pub mod progress;
