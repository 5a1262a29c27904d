//! Configuration for the tile-cutter CLI.
//!
//! All options can be given as command-line flags or environment variables
//! with the `TILE_CUTTER_` prefix:
//!
//! - `TILE_CUTTER_SOURCE` - Path to the source image (default: ./map.png)
//! - `TILE_CUTTER_TARGET` - Root directory for the tile tree (default: ./)
//! - `TILE_CUTTER_TILE_SIZE` - Tile edge length in pixels (default: 256)
//! - `TILE_CUTTER_BARS_COLOR` - RGBA hex color of the aspect-ratio bars
//!   (default: #000000FF)

use std::path::PathBuf;

use clap::Parser;
use image::Rgba;

use crate::color::parse_rgba_hex;
use crate::error::ColorError;

// =============================================================================
// Default Values
// =============================================================================

/// Default source image path.
pub const DEFAULT_SOURCE_PATH: &str = "./map.png";

/// Default target directory for the generated tile tree.
pub const DEFAULT_TARGET_PATH: &str = "./";

/// Default tile edge length in pixels.
pub const DEFAULT_TILE_SIZE: u32 = 256;

/// Default aspect-ratio bars color (opaque black).
pub const DEFAULT_BARS_COLOR: &str = "#000000FF";

// =============================================================================
// CLI Arguments
// =============================================================================

/// tile-cutter - Cut an image into a slippy-map tile pyramid.
///
/// Calculates the zoom levels needed to cover the source image and cuts it
/// into Leaflet/Google Maps compatible tiles under `{target}/{zoom}/{x}/{y}.png`.
#[derive(Parser, Debug, Clone)]
#[command(name = "tile-cutter")]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// Path to the source image.
    #[arg(long, default_value = DEFAULT_SOURCE_PATH, env = "TILE_CUTTER_SOURCE")]
    pub source_path: PathBuf,

    /// Root directory where the tile tree is written.
    #[arg(long, default_value = DEFAULT_TARGET_PATH, env = "TILE_CUTTER_TARGET")]
    pub target_path: PathBuf,

    /// Tile edge length in pixels.
    #[arg(long, default_value_t = DEFAULT_TILE_SIZE, env = "TILE_CUTTER_TILE_SIZE")]
    pub tile_size: u32,

    /// RGBA hex color of the aspect-ratio bars ("#RRGGBBAA").
    #[arg(long, default_value = DEFAULT_BARS_COLOR, env = "TILE_CUTTER_BARS_COLOR")]
    pub aspect_ratio_bars_color: String,

    /// Enable verbose logging (debug level).
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

impl Config {
    /// Validate the configuration and return an error message if invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.tile_size == 0 {
            return Err("tile_size must be greater than 0".to_string());
        }

        if let Err(e) = self.bars_color() {
            return Err(format!(
                "invalid aspect_ratio_bars_color '{}': {}",
                self.aspect_ratio_bars_color, e
            ));
        }

        Ok(())
    }

    /// Parse the configured aspect-ratio bars color.
    pub fn bars_color(&self) -> Result<Rgba<u8>, ColorError> {
        parse_rgba_hex(&self.aspect_ratio_bars_color)
    }
}

// =============================================================================
// Tests
// =============================================================================
