//! Tile slicing and persistence.
//!
//! Cuts a composited zoom-level canvas into a grid of fixed-size tiles and
//! writes each as a PNG to `{target}/{zoom}/{x}/{y}.png`. Column directories
//! are created on demand; creation is idempotent, and no two workers ever
//! share a `{target}/{zoom}` subtree.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};

use image::RgbaImage;
use tracing::debug;

use crate::error::PyramidError;
use crate::progress::Progress;
use crate::raster;

/// Path of the tile at `(zoom, x, y)` under the target root.
pub fn tile_path(target: &Path, zoom: u32, x: u32, y: u32) -> PathBuf {
    target
        .join(zoom.to_string())
        .join(x.to_string())
        .join(format!("{y}.png"))
}

/// Slice a composited canvas into tiles and write them to disk.
///
/// The grid is `(width / tile_size) x (height / tile_size)` with truncating
/// division: a trailing partial row or column of pixels is dropped, never
/// padded into an extra tile. Each written tile is reported to `progress`.
///
/// The cancel flag is checked between tile writes; once set, remaining tiles
/// for this level are skipped and the count written so far is returned.
///
/// # Errors
///
/// Directory creation or tile write failures abort this level immediately.
pub fn slice_level(
    canvas: &RgbaImage,
    tile_size: u32,
    zoom: u32,
    target: &Path,
    progress: &dyn Progress,
    cancel: &AtomicBool,
) -> Result<u64, PyramidError> {
    let num_x_tiles = canvas.width() / tile_size;
    let num_y_tiles = canvas.height() / tile_size;

    debug!(zoom, num_x_tiles, num_y_tiles, "slicing level");

    let mut written = 0u64;
    for y in 0..num_y_tiles {
        for x in 0..num_x_tiles {
            if cancel.load(Ordering::Relaxed) {
                return Ok(written);
            }

            let column_dir = target.join(zoom.to_string()).join(x.to_string());
            fs::create_dir_all(&column_dir).map_err(|e| PyramidError::CreateDir {
                path: column_dir.clone(),
                source: e,
            })?;

            let tile = raster::crop_square(canvas, x * tile_size, y * tile_size, tile_size);
            raster::save_png(&tile, &column_dir.join(format!("{y}.png")))?;

            progress.tile_written();
            written += 1;
        }
    }

    Ok(written)
}
