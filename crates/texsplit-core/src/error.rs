//! Error types for texture splitting.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from loading, splitting, or writing textures.
#[derive(Debug, Error)]
pub enum SplitError {
    /// The input file does not exist.
    #[error("Input file not found: {}", .path.display())]
    NotFound { path: PathBuf },

    /// The input file exists but could not be read.
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The input bytes are not a supported or well-formed image.
    #[error("Failed to decode {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// JPEG encoding of an output image failed.
    #[error("Failed to encode {}: {source}", .path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// An encoded output could not be written to disk.
    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JPEG quality outside `1..=100`.
    #[error("JPEG quality must be between 1 and 100, got {0}")]
    InvalidQuality(u8),

    /// Channel planes with different sizes cannot be merged.
    #[error("Channel planes differ in size: {expected:?} vs {actual:?}")]
    DimensionMismatch {
        expected: (u32, u32),
        actual: (u32, u32),
    },
}
