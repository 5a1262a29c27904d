use std::path::PathBuf;

use thiserror::Error;

/// Errors from parsing an RGBA hex color string
#[derive(Debug, Error)]
pub enum ColorError {
    /// Color string does not contain exactly 8 hex digits (RRGGBBAA)
    #[error("color must be 8 hex digits (RRGGBBAA), got {0}")]
    InvalidLength(usize),

    /// Color string has odd length or contains non-hex characters
    #[error("invalid hex color: {0}")]
    InvalidHex(#[from] hex::FromHexError),
}

/// Errors that can occur while generating a tile pyramid
#[derive(Debug, Error)]
pub enum PyramidError {
    /// Source image file could not be opened
    #[error("failed to open source image {path}: {source}")]
    SourceOpen {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Source image file could not be decoded
    #[error("failed to decode source image {path}: {source}")]
    SourceDecode {
        path: PathBuf,
        source: image::ImageError,
    },

    /// Tile directory could not be created
    #[error("failed to create tile directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Tile file could not be created
    #[error("failed to write tile {path}: {source}")]
    WriteTile {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Tile could not be encoded as PNG
    #[error("failed to encode tile {path}: {source}")]
    EncodeTile {
        path: PathBuf,
        source: image::ImageError,
    },

    /// A zoom-level worker panicked or was aborted
    #[error("tile worker failed: {source}")]
    Worker { source: tokio::task::JoinError },
}
