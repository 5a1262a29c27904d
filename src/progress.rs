//! Progress reporting for tile generation.
//!
//! The orchestrator and its workers report through a [`Progress`] sink passed
//! in explicitly, so there is no process-wide mutable counter. Workers call
//! [`Progress::tile_written`] once per persisted tile; implementations must
//! be safe to call from several workers at once.

use std::sync::atomic::{AtomicU64, Ordering};

use tracing::info;

/// Sink for tile-generation progress events.
pub trait Progress: Send + Sync {
    /// Called once before any tile is written, with the total tile count.
    fn begin(&self, total_tiles: u64);

    /// Called after each tile has been written to disk.
    fn tile_written(&self);

    /// Called once after all workers have completed successfully.
    fn finish(&self);
}

/// Progress sink that discards all events.
#[derive(Debug, Default)]
pub struct NoopProgress;

impl Progress for NoopProgress {
    fn begin(&self, _total_tiles: u64) {}
    fn tile_written(&self) {}
    fn finish(&self) {}
}

/// Progress sink logging percentage milestones via `tracing`.
///
/// Emits one info line whenever completion crosses a 10% boundary, keeping
/// log volume flat regardless of pyramid size.
#[derive(Debug, Default)]
pub struct LogProgress {
    total: AtomicU64,
    written: AtomicU64,
}

impl LogProgress {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of tiles reported written so far.
    pub fn written(&self) -> u64 {
        self.written.load(Ordering::Relaxed)
    }
}

impl Progress for LogProgress {
    fn begin(&self, total_tiles: u64) {
        self.total.store(total_tiles, Ordering::Relaxed);
        self.written.store(0, Ordering::Relaxed);
    }

    fn tile_written(&self) {
        let written = self.written.fetch_add(1, Ordering::Relaxed) + 1;
        let total = self.total.load(Ordering::Relaxed);
        if total == 0 {
            return;
        }

        let percent = written * 100 / total;
        let previous_percent = (written - 1) * 100 / total;
        if percent / 10 > previous_percent / 10 {
            info!("generated {}/{} tiles ({}%)", written, total, percent);
        }
    }

    fn finish(&self) {
        info!("all {} tiles written", self.written.load(Ordering::Relaxed));
    }
}
