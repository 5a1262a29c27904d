//! # tile-cutter
//!
//! Cuts a single raster image into a pyramid of fixed-size square tiles
//! compatible with slippy-map viewers such as Leaflet and Google Maps.
//!
//! The pipeline computes the zoom levels needed to cover the source image at
//! progressively halved resolutions, builds a padded square canvas per level,
//! resizes and centers the source onto it, and slices the canvas into tiles
//! written to `{target}/{zoom}/{x}/{y}.png`. Tile slicing for the zoom levels
//! runs concurrently.
//!
//! ## Architecture
//!
//! - [`geometry`] - Zoom-level bounds and tile counts
//! - [`canvas`] - Padding canvas and per-level compositing
//! - [`slicer`] - Tile cutting and PNG persistence
//! - [`pyramid`] - Orchestrator fanning out one worker per zoom level
//! - [`color`] - RGBA hex color parsing
//! - [`raster`] - Decode/encode/resize/crop/paste over the `image` crate
//! - [`progress`] - Progress sink shared by the workers
//! - [`config`] - CLI and configuration types
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::path::Path;
//! use tile_cutter::{color::parse_rgba_hex, PyramidGenerator};
//!
//! #[tokio::main]
//! async fn main() {
//!     let bars = parse_rgba_hex("#000000FF").unwrap();
//!     let generator = PyramidGenerator::new(256, "./tiles", bars);
//!     let summary = generator.generate(Path::new("./map.png")).await.unwrap();
//!     println!("wrote {} tiles", summary.tiles_written);
//! }
//! ```

pub mod canvas;
pub mod color;
pub mod config;
pub mod error;
pub mod geometry;
pub mod progress;
pub mod pyramid;
pub mod raster;
pub mod slicer;

// Re-export commonly used types
pub use color::parse_rgba_hex;
pub use config::{
    Config, DEFAULT_BARS_COLOR, DEFAULT_SOURCE_PATH, DEFAULT_TARGET_PATH, DEFAULT_TILE_SIZE,
};
pub use error::{ColorError, PyramidError};
pub use geometry::{canvas_side, scale_dimension, PyramidGeometry};
pub use progress::{LogProgress, NoopProgress, Progress};
pub use pyramid::{PyramidGenerator, PyramidSummary};
pub use slicer::tile_path;
