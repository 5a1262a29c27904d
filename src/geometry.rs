//! Pyramid geometry calculations.
//!
//! Pure functions computing zoom-level bounds and tile counts from the source
//! image dimensions and the tile size. Zoom level 0 is the coarsest view (the
//! whole map in a single tile); each subsequent level doubles the canvas side
//! and quadruples the tile count.
//!
//! A zoom level pairs inversely with a *scale factor*: the number of
//! successive halvings applied to the source. Level 0 uses the largest scale,
//! the finest level uses scale 0 (the source at full resolution).

use std::ops::RangeInclusive;

/// Zoom-level bounds and total tile count for one source image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PyramidGeometry {
    /// Coarsest zoom level (always 0).
    pub min_zoom: u32,

    /// Finest zoom level: smallest `k` with `2^k >= ceil(max(w, h) / tile_size)`.
    pub max_zoom: u32,

    /// Tiles across all levels: `sum(4^i)` for `i` in `[0, max_zoom]`.
    pub total_tiles: u64,
}

impl PyramidGeometry {
    /// Compute the pyramid geometry for a source image.
    ///
    /// Dimensions and tile size must be positive; the caller validates them
    /// upstream. A source no larger than one tile yields a single-level,
    /// single-tile pyramid.
    pub fn compute(width: u32, height: u32, tile_size: u32) -> Self {
        let max_tile_dim = width.max(height).div_ceil(tile_size);

        let mut max_zoom = 0u32;
        let mut total_tiles = 1u64;
        while (1u32 << max_zoom) < max_tile_dim {
            max_zoom += 1;
            total_tiles += 1u64 << (2 * max_zoom);
        }

        Self {
            min_zoom: 0,
            max_zoom,
            total_tiles,
        }
    }

    /// The scale factor paired with a zoom level.
    ///
    /// Scale decreases as zoom increases: level `min_zoom` pairs with
    /// `max_zoom` halvings, level `max_zoom` with none.
    pub fn scale_for_zoom(&self, zoom: u32) -> u32 {
        self.max_zoom - (zoom - self.min_zoom)
    }

    /// All zoom levels of the pyramid, coarsest first.
    pub fn zoom_levels(&self) -> RangeInclusive<u32> {
        self.min_zoom..=self.max_zoom
    }
}

/// Side length in pixels of the square canvas at a zoom level.
pub fn canvas_side(zoom: u32, tile_size: u32) -> u32 {
    tile_size << zoom
}

/// Apply `scale` successive integer halvings to a dimension.
///
/// Each step floors, so for odd intermediate values the result can differ
/// from a single division by `2^scale` done in floating point. Tile
/// boundaries depend on this truncation order.
pub fn scale_dimension(dimension: u32, scale: u32) -> u32 {
    let mut scaled = dimension;
    for _ in 0..scale {
        scaled /= 2;
    }
    scaled
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_smaller_than_one_tile() {
        let geometry = PyramidGeometry::compute(100, 50, 256);
        assert_eq!(geometry.min_zoom, 0);
        assert_eq!(geometry.max_zoom, 0);
        assert_eq!(geometry.total_tiles, 1);
    }

    #[test]
    fn test_source_exactly_one_tile() {
        let geometry = PyramidGeometry::compute(256, 256, 256);
        assert_eq!(geometry.max_zoom, 0);
        assert_eq!(geometry.total_tiles, 1);
    }

    #[test]
    fn test_1000_square_at_256() {
        // max_tile_dim = ceil(1000 / 256) = 4, so max_zoom = 2
        let geometry = PyramidGeometry::compute(1000, 1000, 256);
        assert_eq!(geometry.min_zoom, 0);
        assert_eq!(geometry.max_zoom, 2);
        assert_eq!(geometry.total_tiles, 1 + 4 + 16);
    }

    #[test]
    fn test_512_square_at_256() {
        let geometry = PyramidGeometry::compute(512, 512, 256);
        assert_eq!(geometry.max_zoom, 1);
        assert_eq!(geometry.total_tiles, 5);
    }

    #[test]
    fn test_elongated_source_uses_longest_side() {
        // max dimension 2048 -> max_tile_dim 8 -> max_zoom 3
        let geometry = PyramidGeometry::compute(2048, 100, 256);
        assert_eq!(geometry.max_zoom, 3);
        assert_eq!(geometry.total_tiles, 1 + 4 + 16 + 64);
    }

    #[test]
    fn test_scale_for_zoom_is_inverse_pairing() {
        let geometry = PyramidGeometry::compute(1000, 1000, 256);
        assert_eq!(geometry.scale_for_zoom(0), 2);
        assert_eq!(geometry.scale_for_zoom(1), 1);
        assert_eq!(geometry.scale_for_zoom(2), 0);
    }

    #[test]
    fn test_zoom_levels_range() {
        let geometry = PyramidGeometry::compute(512, 512, 256);
        let levels: Vec<u32> = geometry.zoom_levels().collect();
        assert_eq!(levels, vec![0, 1]);
    }

    #[test]
    fn test_canvas_side() {
        assert_eq!(canvas_side(0, 256), 256);
        assert_eq!(canvas_side(1, 256), 512);
        assert_eq!(canvas_side(3, 256), 2048);
        assert_eq!(canvas_side(0, 128), 128);
    }

    #[test]
    fn test_canvas_side_covers_source() {
        for (w, h) in [(1, 1), (256, 256), (257, 100), (1000, 1000), (5000, 3000)] {
            let geometry = PyramidGeometry::compute(w, h, 256);
            let side = canvas_side(geometry.max_zoom, 256);
            assert!(side >= w.max(h), "side {} < max dim for {}x{}", side, w, h);
        }
    }

    #[test]
    fn test_scale_dimension_halves_with_floor() {
        assert_eq!(scale_dimension(1000, 0), 1000);
        assert_eq!(scale_dimension(1000, 1), 500);
        assert_eq!(scale_dimension(1000, 2), 250);
        assert_eq!(scale_dimension(1001, 1), 500);
        assert_eq!(scale_dimension(1001, 2), 250);
    }

    #[test]
    fn test_scale_dimension_matches_shift() {
        // Repeated floor-halving of an unsigned value is exactly a right shift.
        for dimension in [0u32, 1, 7, 255, 1000, 1001, 99_999] {
            for scale in 0..8 {
                assert_eq!(scale_dimension(dimension, scale), dimension >> scale);
            }
        }
    }
}
