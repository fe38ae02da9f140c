//! Metallic-roughness splitting.
//!
//! Reads a packed texture, replicates its blue channel into a metalness map
//! and its green channel into a roughness map, and writes both as JPEG.

use std::path::{Path, PathBuf};

use image::RgbImage;

use crate::channel::{split_planes, ColorComponent};
use crate::codec::{self, EncodedJpeg, DEFAULT_JPEG_QUALITY};
use crate::error::SplitError;

/// Input file read when no path is given.
pub const DEFAULT_INPUT: &str = "Default_metalRoughness.jpg";
/// Metalness output written when no path is given.
pub const DEFAULT_METAL_OUTPUT: &str = "Default_metal.jpg";
/// Roughness output written when no path is given.
pub const DEFAULT_ROUGHNESS_OUTPUT: &str = "Default_roughness.jpg";

/// Channel of the packed texture holding metalness.
pub const METALNESS_COMPONENT: ColorComponent = ColorComponent::B;
/// Channel of the packed texture holding roughness.
pub const ROUGHNESS_COMPONENT: ColorComponent = ColorComponent::G;

/// Paths and encoder settings for one split.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitConfig {
    /// Packed metallic-roughness texture.
    pub input: PathBuf,
    /// Where the metalness map is written.
    pub metal_output: PathBuf,
    /// Where the roughness map is written.
    pub roughness_output: PathBuf,
    /// JPEG quality (1-100).
    pub quality: u8,
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            metal_output: PathBuf::from(DEFAULT_METAL_OUTPUT),
            roughness_output: PathBuf::from(DEFAULT_ROUGHNESS_OUTPUT),
            quality: DEFAULT_JPEG_QUALITY,
        }
    }
}

impl SplitConfig {
    /// Default outputs for the given input.
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self::default().with_input(input)
    }

    /// Set the packed texture to read.
    pub fn with_input(mut self, input: impl Into<PathBuf>) -> Self {
        self.input = input.into();
        self
    }

    /// Set where the metalness map is written.
    pub fn with_metal_output(mut self, path: impl Into<PathBuf>) -> Self {
        self.metal_output = path.into();
        self
    }

    /// Set where the roughness map is written.
    pub fn with_roughness_output(mut self, path: impl Into<PathBuf>) -> Self {
        self.roughness_output = path.into();
        self
    }

    /// Set the JPEG quality (1-100); checked by [`SplitConfig::validate`].
    pub fn with_quality(mut self, quality: u8) -> Self {
        self.quality = quality;
        self
    }

    /// Reject settings that would fail after I/O has started.
    pub fn validate(&self) -> Result<(), SplitError> {
        codec::validate_quality(self.quality)?;
        Ok(())
    }
}

/// Metalness and roughness maps built in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitMaps {
    /// Blue channel replicated into RGB.
    pub metal: RgbImage,
    /// Green channel replicated into RGB.
    pub roughness: RgbImage,
}

/// One output file produced by a split.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenImage {
    /// Path the image was written to.
    pub path: PathBuf,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Channel of the source texture the image was built from.
    pub source: ColorComponent,
    /// Size of the encoded file in bytes.
    pub bytes: usize,
    /// BLAKE3 hex digest of the encoded file.
    pub hash: String,
}

impl WrittenImage {
    fn from_encoded(path: &Path, source: ColorComponent, encoded: &EncodedJpeg) -> Self {
        Self {
            path: path.to_path_buf(),
            width: encoded.width,
            height: encoded.height,
            source,
            bytes: encoded.data.len(),
            hash: encoded.hash.clone(),
        }
    }
}

/// Summary of a completed split.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitResult {
    /// Texture that was split.
    pub input: PathBuf,
    /// Width of the source texture.
    pub width: u32,
    /// Height of the source texture.
    pub height: u32,
    /// Metalness output.
    pub metal: WrittenImage,
    /// Roughness output.
    pub roughness: WrittenImage,
}

/// Build the metalness and roughness maps for a packed texture.
pub fn split_maps(source: &RgbImage) -> SplitMaps {
    let planes = split_planes(source);
    SplitMaps {
        metal: planes[METALNESS_COMPONENT.index()].to_rgb_image(),
        roughness: planes[ROUGHNESS_COMPONENT.index()].to_rgb_image(),
    }
}

/// Split the texture named by `config` and write both maps.
///
/// The input is decoded and both outputs are encoded before anything is
/// written, so a bad input never touches existing output files.
pub fn split(config: &SplitConfig) -> Result<SplitResult, SplitError> {
    config.validate()?;

    let source = codec::load_rgb(&config.input)?;
    let (width, height) = source.dimensions();
    let maps = split_maps(&source);
    drop(source);

    let metal = encode_output(&maps.metal, &config.metal_output, config.quality)?;
    let roughness = encode_output(&maps.roughness, &config.roughness_output, config.quality)?;

    metal.write(&config.metal_output)?;
    roughness.write(&config.roughness_output)?;

    Ok(SplitResult {
        input: config.input.clone(),
        width,
        height,
        metal: WrittenImage::from_encoded(&config.metal_output, METALNESS_COMPONENT, &metal),
        roughness: WrittenImage::from_encoded(
            &config.roughness_output,
            ROUGHNESS_COMPONENT,
            &roughness,
        ),
    })
}

/// Split `input` into the default metal and roughness files.
///
/// Returns the `(metal, roughness)` paths that were written.
pub fn split_file(input: &Path) -> Result<(PathBuf, PathBuf), SplitError> {
    let result = split(&SplitConfig::new(input))?;
    Ok((result.metal.path, result.roughness.path))
}

fn encode_output(image: &RgbImage, path: &Path, quality: u8) -> Result<EncodedJpeg, SplitError> {
    codec::encode_jpeg(image, quality).map_err(|source| SplitError::Encode {
        path: path.to_path_buf(),
        source,
    })
}
