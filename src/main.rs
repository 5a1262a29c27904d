//! tile-cutter - Cut an image into a slippy-map tile pyramid.
//!
//! This binary parses the CLI configuration and runs the pyramid pipeline.

use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tile_cutter::{
    config::Config,
    geometry::PyramidGeometry,
    progress::{LogProgress, Progress},
    pyramid::PyramidGenerator,
    raster,
};

#[tokio::main]
async fn main() -> ExitCode {
    let config = Config::parse();

    init_logging(config.verbose);

    if let Err(e) = config.validate() {
        error!("Configuration error: {}", e);
        return ExitCode::FAILURE;
    }

    run(config).await
}

async fn run(config: Config) -> ExitCode {
    // validate() already checked the color string
    let bars_color = match config.bars_color() {
        Ok(color) => color,
        Err(e) => {
            error!("Configuration error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let source = match raster::load_rgba(&config.source_path) {
        Ok(source) => source,
        Err(e) => {
            error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    let geometry = PyramidGeometry::compute(source.width(), source.height(), config.tile_size);

    info!("Start generating map tiles");
    info!("  Source image: {} ({}x{})", config.source_path.display(), source.width(), source.height());
    info!("  Target directory: {}", config.target_path.display());
    info!("  Minimum zoom level: {}", geometry.min_zoom);
    info!("  Maximum zoom level: {}", geometry.max_zoom);
    info!("  Map tiles to generate: {}", geometry.total_tiles);
    info!("  Aspect-ratio bars color: {}", config.aspect_ratio_bars_color);

    let progress: Arc<dyn Progress> = Arc::new(LogProgress::new());
    let generator = PyramidGenerator::new(config.tile_size, config.target_path, bars_color)
        .with_progress(progress);

    match generator.generate_image(source).await {
        Ok(summary) => {
            info!("Finished generating {} map tiles", summary.tiles_written);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

/// Initialize the tracing/logging subsystem.
fn init_logging(verbose: bool) {
    let env_filter = if verbose {
        "tile_cutter=debug"
    } else {
        "tile_cutter=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| env_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
