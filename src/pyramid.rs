//! Pyramid orchestrator.
//!
//! Drives the zoom-level loop: for each level, the canvas is built and the
//! source composited synchronously on the driver, then the slicing work is
//! dispatched as one blocking task. Canvas allocation is serialized;
//! tile encoding and disk I/O fan out across levels.
//!
//! ```text
//! driver                         workers (one per zoom level)
//!   │ composite level 0 ───────► slice + write 0/…
//!   │ composite level 1 ───────► slice + write 1/…
//!   │ …                          …
//!   └── join all ◄───────────────┘
//! ```
//!
//! Workers share the progress sink and a cancellation flag. The first worker
//! error raises the flag so siblings drain quickly, and is returned once all
//! workers have joined.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use image::{Rgba, RgbaImage};
use tokio::task::JoinSet;
use tracing::debug;

use crate::canvas;
use crate::error::PyramidError;
use crate::geometry::PyramidGeometry;
use crate::progress::{NoopProgress, Progress};
use crate::raster;
use crate::slicer;

/// Result of a completed pyramid run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PyramidSummary {
    /// Coarsest generated zoom level (always 0).
    pub min_zoom: u32,

    /// Finest generated zoom level.
    pub max_zoom: u32,

    /// Tile count implied by the geometry.
    pub total_tiles: u64,

    /// Tiles actually written to disk.
    pub tiles_written: u64,
}

/// Generates a complete tile pyramid from a source image.
///
/// # Example
///
/// ```ignore
/// use std::path::Path;
/// use tile_cutter::{color, PyramidGenerator};
///
/// let generator = PyramidGenerator::new(
///     256,
///     "./tiles",
///     color::parse_rgba_hex("#000000FF")?,
/// );
/// let summary = generator.generate(Path::new("./map.png")).await?;
/// println!("wrote {} tiles", summary.tiles_written);
/// ```
pub struct PyramidGenerator {
    tile_size: u32,
    target_root: PathBuf,
    bar_color: Rgba<u8>,
    progress: Arc<dyn Progress>,
}

impl PyramidGenerator {
    /// Create a generator with no progress reporting.
    pub fn new(tile_size: u32, target_root: impl Into<PathBuf>, bar_color: Rgba<u8>) -> Self {
        Self {
            tile_size,
            target_root: target_root.into(),
            bar_color,
            progress: Arc::new(NoopProgress),
        }
    }

    /// Attach a progress sink shared with all workers.
    pub fn with_progress(mut self, progress: Arc<dyn Progress>) -> Self {
        self.progress = progress;
        self
    }

    /// Load the source image from disk and generate its pyramid.
    pub async fn generate(&self, source_path: &Path) -> Result<PyramidSummary, PyramidError> {
        let source = raster::load_rgba(source_path)?;
        self.generate_image(source).await
    }

    /// Generate the pyramid for an already-decoded source image.
    ///
    /// Every run recomputes the full pyramid; existing tiles at colliding
    /// paths are overwritten. Already-written tiles are not rolled back on
    /// failure.
    pub async fn generate_image(&self, source: RgbaImage) -> Result<PyramidSummary, PyramidError> {
        let geometry = PyramidGeometry::compute(source.width(), source.height(), self.tile_size);
        self.progress.begin(geometry.total_tiles);

        let cancel = Arc::new(AtomicBool::new(false));
        let mut workers: JoinSet<Result<u64, PyramidError>> = JoinSet::new();

        for zoom in geometry.zoom_levels() {
            let scale = geometry.scale_for_zoom(zoom);
            debug!(zoom, scale, "compositing level");
            let composited =
                canvas::composite_level(&source, scale, zoom, self.tile_size, self.bar_color);

            let tile_size = self.tile_size;
            let target = self.target_root.clone();
            let progress = Arc::clone(&self.progress);
            let cancel = Arc::clone(&cancel);

            workers.spawn_blocking(move || {
                let result = slicer::slice_level(
                    &composited,
                    tile_size,
                    zoom,
                    &target,
                    progress.as_ref(),
                    &cancel,
                );
                if result.is_err() {
                    cancel.store(true, Ordering::Relaxed);
                }
                result
            });
        }

        let mut tiles_written = 0u64;
        let mut first_error: Option<PyramidError> = None;

        while let Some(joined) = workers.join_next().await {
            match joined {
                Ok(Ok(written)) => tiles_written += written,
                Ok(Err(e)) => {
                    first_error.get_or_insert(e);
                }
                Err(e) => {
                    cancel.store(true, Ordering::Relaxed);
                    first_error.get_or_insert(PyramidError::Worker { source: e });
                }
            }
        }

        if let Some(e) = first_error {
            return Err(e);
        }

        self.progress.finish();
        Ok(PyramidSummary {
            min_zoom: geometry.min_zoom,
            max_zoom: geometry.max_zoom,
            total_tiles: geometry.total_tiles,
            tiles_written,
        })
    }
}
