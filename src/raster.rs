//! Raster operations over the `image` crate.
//!
//! Thin wrappers for the pixel-level operations the pipeline needs: decode
//! with EXIF orientation correction, PNG encode at maximum compression,
//! bilinear resize, crop, and paste. The core modules call these instead of
//! reaching into `image` directly.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use image::codecs::png::{CompressionType, FilterType as PngFilterType, PngEncoder};
use image::imageops::{self, FilterType};
use image::{DynamicImage, ImageDecoder, ImageReader, RgbaImage};

use crate::error::PyramidError;

/// Decode an image file into an RGBA pixel buffer.
///
/// EXIF orientation is applied so rotated camera output composes upright.
pub fn load_rgba(path: &Path) -> Result<RgbaImage, PyramidError> {
    let reader = ImageReader::open(path)
        .and_then(|r| r.with_guessed_format())
        .map_err(|e| PyramidError::SourceOpen {
            path: path.to_path_buf(),
            source: e,
        })?;

    let decode_error = |e| PyramidError::SourceDecode {
        path: path.to_path_buf(),
        source: e,
    };

    let mut decoder = reader.into_decoder().map_err(decode_error)?;
    let orientation = decoder.orientation().map_err(decode_error)?;
    let mut image = DynamicImage::from_decoder(decoder).map_err(decode_error)?;
    image.apply_orientation(orientation);

    Ok(image.into_rgba8())
}

/// Encode an RGBA buffer as a PNG file at maximum compression.
pub fn save_png(image: &RgbaImage, path: &Path) -> Result<(), PyramidError> {
    let file = File::create(path).map_err(|e| PyramidError::WriteTile {
        path: path.to_path_buf(),
        source: e,
    })?;

    let writer = BufWriter::new(file);
    let encoder = PngEncoder::new_with_quality(writer, CompressionType::Best, PngFilterType::Adaptive);

    image
        .write_with_encoder(encoder)
        .map_err(|e| PyramidError::EncodeTile {
            path: path.to_path_buf(),
            source: e,
        })
}

/// Resize a buffer to exact dimensions with a linear (bilinear) filter.
pub fn resize_linear(image: &RgbaImage, width: u32, height: u32) -> RgbaImage {
    imageops::resize(image, width, height, FilterType::Triangle)
}

/// Crop a square region of `size` pixels with its top-left corner at `(x, y)`.
pub fn crop_square(image: &RgbaImage, x: u32, y: u32, size: u32) -> RgbaImage {
    imageops::crop_imm(image, x, y, size, size).to_image()
}

/// Paste `src` onto `dst` with its top-left corner at `(x, y)`, replacing
/// the pixels underneath.
pub fn paste(dst: &mut RgbaImage, src: &RgbaImage, x: u32, y: u32) {
    imageops::replace(dst, src, i64::from(x), i64::from(y));
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    fn solid(width: u32, height: u32, color: Rgba<u8>) -> RgbaImage {
        RgbaImage::from_pixel(width, height, color)
    }

    #[test]
    fn test_resize_linear_exact_dimensions() {
        let image = solid(100, 60, Rgba([10, 20, 30, 255]));
        let resized = resize_linear(&image, 50, 30);
        assert_eq!(resized.dimensions(), (50, 30));
        // A uniform image stays uniform under bilinear resampling.
        assert_eq!(*resized.get_pixel(25, 15), Rgba([10, 20, 30, 255]));
    }

    #[test]
    fn test_crop_square() {
        let mut image = solid(64, 64, Rgba([0, 0, 0, 255]));
        image.put_pixel(40, 40, Rgba([255, 0, 0, 255]));

        let tile = crop_square(&image, 32, 32, 32);
        assert_eq!(tile.dimensions(), (32, 32));
        assert_eq!(*tile.get_pixel(8, 8), Rgba([255, 0, 0, 255]));
    }

    #[test]
    fn test_paste_replaces_pixels() {
        let mut dst = solid(32, 32, Rgba([0, 0, 0, 255]));
        let src = solid(8, 8, Rgba([0, 255, 0, 255]));

        paste(&mut dst, &src, 12, 12);

        assert_eq!(*dst.get_pixel(12, 12), Rgba([0, 255, 0, 255]));
        assert_eq!(*dst.get_pixel(19, 19), Rgba([0, 255, 0, 255]));
        assert_eq!(*dst.get_pixel(11, 12), Rgba([0, 0, 0, 255]));
        assert_eq!(*dst.get_pixel(20, 20), Rgba([0, 0, 0, 255]));
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tile.png");

        let image = solid(16, 16, Rgba([1, 2, 3, 255]));
        save_png(&image, &path).unwrap();

        let loaded = load_rgba(&path).unwrap();
        assert_eq!(loaded.dimensions(), (16, 16));
        assert_eq!(*loaded.get_pixel(0, 0), Rgba([1, 2, 3, 255]));
    }

    #[test]
    fn test_load_missing_file() {
        let result = load_rgba(Path::new("/nonexistent/map.png"));
        assert!(matches!(result, Err(PyramidError::SourceOpen { .. })));
    }

    #[test]
    fn test_load_invalid_data() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("not-an-image.png");
        std::fs::write(&path, b"definitely not a png").unwrap();

        let result = load_rgba(&path);
        assert!(matches!(result, Err(PyramidError::SourceDecode { .. })));
    }
}
