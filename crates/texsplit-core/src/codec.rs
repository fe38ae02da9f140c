//! Image decoding and JPEG encoding.
//!
//! Inputs are decoded from their content (not their extension) and forced to
//! 8-bit RGB. Outputs are always baseline JPEG. Encoding goes to memory first
//! so callers can encode every output before touching the filesystem.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use image::codecs::jpeg::JpegEncoder;
use image::{ImageError, RgbImage};

use crate::error::SplitError;

/// JPEG quality used when none is given. Matches the common library default.
pub const DEFAULT_JPEG_QUALITY: u8 = 75;

/// Check that a JPEG quality lies in `1..=100`.
pub fn validate_quality(quality: u8) -> Result<u8, SplitError> {
    if (1..=100).contains(&quality) {
        Ok(quality)
    } else {
        Err(SplitError::InvalidQuality(quality))
    }
}

/// Load an image file and convert it to 8-bit RGB.
///
/// Alpha is dropped without compositing; grayscale inputs are expanded to
/// three equal channels.
pub fn load_rgb(path: &Path) -> Result<RgbImage, SplitError> {
    let bytes = fs::read(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => SplitError::NotFound {
            path: path.to_path_buf(),
        },
        _ => SplitError::Read {
            path: path.to_path_buf(),
            source,
        },
    })?;

    decode_rgb(&bytes).map_err(|source| SplitError::Decode {
        path: path.to_path_buf(),
        source,
    })
}

/// Decode image bytes of any enabled format into 8-bit RGB.
pub fn decode_rgb(bytes: &[u8]) -> Result<RgbImage, ImageError> {
    Ok(image::load_from_memory(bytes)?.to_rgb8())
}

/// An RGB image encoded as JPEG, held in memory.
#[derive(Debug, Clone)]
pub struct EncodedJpeg {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Encoded file contents.
    pub data: Vec<u8>,
    /// BLAKE3 hex digest of `data`.
    pub hash: String,
}

impl EncodedJpeg {
    /// Write the encoded bytes to `path`, replacing any existing file.
    pub fn write(&self, path: &Path) -> Result<(), SplitError> {
        fs::write(path, &self.data).map_err(|source| SplitError::Write {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Encode an RGB image as JPEG into any writer.
pub fn encode_jpeg_to_writer<W: Write>(
    image: &RgbImage,
    writer: W,
    quality: u8,
) -> Result<(), ImageError> {
    let mut encoder = JpegEncoder::new_with_quality(writer, quality);
    encoder.encode_image(image)
}

/// Encode an RGB image as JPEG in memory.
///
/// `quality` is expected to be in `1..=100`; see [`validate_quality`].
pub fn encode_jpeg(image: &RgbImage, quality: u8) -> Result<EncodedJpeg, ImageError> {
    let mut data = Vec::new();
    encode_jpeg_to_writer(image, &mut data, quality)?;
    let hash = hash_bytes(&data);
    Ok(EncodedJpeg {
        width: image.width(),
        height: image.height(),
        data,
        hash,
    })
}

/// Encode an RGB image as JPEG and write it to `path`.
pub fn write_jpeg(image: &RgbImage, path: &Path, quality: u8) -> Result<EncodedJpeg, SplitError> {
    let quality = validate_quality(quality)?;
    let encoded = encode_jpeg(image, quality).map_err(|source| SplitError::Encode {
        path: path.to_path_buf(),
        source,
    })?;
    encoded.write(path)?;
    Ok(encoded)
}

/// Compute the BLAKE3 hash of encoded data.
pub fn hash_bytes(data: &[u8]) -> String {
    blake3::hash(data).to_hex().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, Rgba, RgbaImage};

    #[test]
    fn test_validate_quality_bounds() {
        assert!(validate_quality(1).is_ok());
        assert!(validate_quality(75).is_ok());
        assert!(validate_quality(100).is_ok());
        assert!(matches!(
            validate_quality(0),
            Err(SplitError::InvalidQuality(0))
        ));
        assert!(matches!(
            validate_quality(101),
            Err(SplitError::InvalidQuality(101))
        ));
    }

    #[test]
    fn test_load_missing_file_is_not_found() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("missing.jpg");
        match load_rgb(&path) {
            Err(SplitError::NotFound { path: p }) => assert_eq!(p, path),
            other => panic!("expected NotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_load_directory_is_read_error() {
        let tmp = tempfile::tempdir().unwrap();
        assert!(matches!(
            load_rgb(tmp.path()),
            Err(SplitError::Read { .. })
        ));
    }

    #[test]
    fn test_load_garbage_is_decode_error() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("garbage.jpg");
        fs::write(&path, b"definitely not an image").unwrap();
        assert!(matches!(load_rgb(&path), Err(SplitError::Decode { .. })));
    }

    #[test]
    fn test_load_drops_alpha() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("rgba.png");
        let rgba = RgbaImage::from_pixel(3, 2, Rgba([10, 20, 30, 0]));
        rgba.save(&path).unwrap();

        let rgb = load_rgb(&path).unwrap();
        assert_eq!(rgb.dimensions(), (3, 2));
        assert!(rgb.pixels().all(|p| *p == Rgb([10, 20, 30])));
    }

    #[test]
    fn test_encode_jpeg_produces_decodable_output() {
        let image = RgbImage::from_pixel(16, 8, Rgb([128, 128, 128]));
        let encoded = encode_jpeg(&image, DEFAULT_JPEG_QUALITY).unwrap();

        assert_eq!((encoded.width, encoded.height), (16, 8));
        assert_eq!(&encoded.data[..2], &[0xFF, 0xD8], "missing JPEG SOI marker");
        assert_eq!(encoded.hash, hash_bytes(&encoded.data));

        let decoded = decode_rgb(&encoded.data).unwrap();
        assert_eq!(decoded.dimensions(), (16, 8));
    }

    #[test]
    fn test_encode_jpeg_deterministic() {
        let image = RgbImage::from_fn(32, 32, |x, y| Rgb([x as u8 * 8, y as u8 * 8, 64]));
        let a = encode_jpeg(&image, 90).unwrap();
        let b = encode_jpeg(&image, 90).unwrap();
        assert_eq!(a.hash, b.hash);
        assert_eq!(a.data, b.data);
    }

    #[test]
    fn test_write_jpeg_rejects_bad_quality_before_writing() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("out.jpg");
        let image = RgbImage::new(8, 8);

        assert!(matches!(
            write_jpeg(&image, &path, 0),
            Err(SplitError::InvalidQuality(0))
        ));
        assert!(!path.exists());
    }

    #[test]
    fn test_write_into_missing_directory_is_write_error() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("no_such_dir").join("out.jpg");
        let image = RgbImage::new(8, 8);

        assert!(matches!(
            write_jpeg(&image, &path, DEFAULT_JPEG_QUALITY),
            Err(SplitError::Write { .. })
        ));
    }

    #[test]
    fn test_write_jpeg_returns_written_bytes() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("out.jpg");
        let image = RgbImage::from_pixel(16, 16, Rgb([90, 90, 90]));

        let encoded = write_jpeg(&image, &path, DEFAULT_JPEG_QUALITY).unwrap();

        assert_eq!((encoded.width, encoded.height), (16, 16));
        let on_disk = fs::read(&path).unwrap();
        assert_eq!(on_disk, encoded.data);
        assert_eq!(hash_bytes(&on_disk), encoded.hash);
        assert_eq!(
            encode_jpeg(&image, DEFAULT_JPEG_QUALITY).unwrap().data,
            encoded.data
        );
    }

    #[test]
    fn test_hash_bytes_is_hex() {
        let hash = hash_bytes(b"texsplit");
        assert_eq!(hash.len(), 64);
        assert!(hash.chars().all(|c| c.is_ascii_hexdigit()));
    }
}
