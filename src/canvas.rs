//! Canvas building and level compositing.
//!
//! Each zoom level gets a square padding canvas of side `tile_size * 2^zoom`
//! filled with the aspect-ratio bars color. The source image is halved once
//! per scale-factor step, resampled with a linear filter, and pasted centered
//! onto the canvas. Padding remains visible only in the margins around the
//! pasted region.

use image::{Rgba, RgbaImage};

use crate::geometry::{canvas_side, scale_dimension};
use crate::raster;

/// Allocate the padding canvas for a zoom level, uniformly filled.
pub fn build_canvas(zoom: u32, tile_size: u32, color: Rgba<u8>) -> RgbaImage {
    let side = canvas_side(zoom, tile_size);
    RgbaImage::from_pixel(side, side, color)
}

/// Produce the full composited image for one zoom level.
///
/// The source is scaled down by `scale` successive halvings, resized with a
/// bilinear filter, and centered on the level's canvas. The centering offset
/// is computed per axis: horizontal from the width difference, vertical from
/// the height difference, both floored.
pub fn composite_level(
    source: &RgbaImage,
    scale: u32,
    zoom: u32,
    tile_size: u32,
    color: Rgba<u8>,
) -> RgbaImage {
    let mut canvas = build_canvas(zoom, tile_size, color);

    let width = scale_dimension(source.width(), scale);
    let height = scale_dimension(source.height(), scale);

    // Extremely elongated sources can floor one axis to zero at coarse
    // levels; the level is then pure padding.
    if width == 0 || height == 0 {
        return canvas;
    }

    let resized = raster::resize_linear(source, width, height);
    let offset_x = (canvas.width() - width) / 2;
    let offset_y = (canvas.height() - height) / 2;
    raster::paste(&mut canvas, &resized, offset_x, offset_y);

    canvas
}
