//! Channel planes: single-component views of an RGB texture.
//!
//! A packed material texture stores one scalar property per color channel
//! (glTF metallic-roughness textures keep roughness in green and metalness in
//! blue). This module pulls those channels apart into [`ChannelPlane`]s and
//! turns planes back into RGB images.
//!
//! # Example
//!
//! ```
//! use image::{Rgb, RgbImage};
//! use texsplit_core::channel::{ChannelPlane, ColorComponent};
//!
//! let image = RgbImage::from_pixel(4, 4, Rgb([10, 20, 30]));
//! let blue = ChannelPlane::extract(&image, ColorComponent::B);
//! assert_eq!(blue.get(0, 0), 30);
//!
//! let metal = blue.to_rgb_image();
//! assert_eq!(metal.get_pixel(3, 3), &Rgb([30, 30, 30]));
//! ```

use std::fmt;
use std::str::FromStr;

use image::{GrayImage, ImageBuffer, Luma, Rgb, RgbImage};

use crate::error::SplitError;

/// Color component of an RGB texture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorComponent {
    /// Red channel
    R,
    /// Green channel
    G,
    /// Blue channel
    B,
}

impl ColorComponent {
    /// All components in storage order.
    pub const ALL: [ColorComponent; 3] = [ColorComponent::R, ColorComponent::G, ColorComponent::B];

    /// Byte offset of this component inside an RGB8 pixel.
    #[inline]
    pub fn index(self) -> usize {
        match self {
            ColorComponent::R => 0,
            ColorComponent::G => 1,
            ColorComponent::B => 2,
        }
    }

    /// Lowercase channel name.
    pub fn name(self) -> &'static str {
        match self {
            ColorComponent::R => "red",
            ColorComponent::G => "green",
            ColorComponent::B => "blue",
        }
    }
}

impl fmt::Display for ColorComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ColorComponent {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "r" | "red" => Ok(ColorComponent::R),
            "g" | "green" => Ok(ColorComponent::G),
            "b" | "blue" => Ok(ColorComponent::B),
            other => Err(format!(
                "Unknown color component '{}' (expected r, g, or b)",
                other
            )),
        }
    }
}

/// A single 8-bit channel of an image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelPlane {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Samples (row-major, one byte per pixel).
    pub data: Vec<u8>,
}

impl ChannelPlane {
    /// Create a plane filled with a value.
    pub fn new(width: u32, height: u32, fill: u8) -> Self {
        let size = pixel_count(width, height);
        Self {
            width,
            height,
            data: vec![fill; size],
        }
    }

    /// Copy one component of `image` into a new plane.
    pub fn extract(image: &RgbImage, component: ColorComponent) -> Self {
        let offset = component.index();
        let data = image
            .as_raw()
            .chunks_exact(3)
            .map(|px| px[offset])
            .collect();
        Self {
            width: image.width(),
            height: image.height(),
            data,
        }
    }

    /// Get a sample at the given coordinates.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> u8 {
        let idx = pixel_index(self.width, x, y);
        self.data[idx]
    }

    /// Set a sample at the given coordinates.
    #[inline]
    pub fn set(&mut self, x: u32, y: u32, value: u8) {
        let idx = pixel_index(self.width, x, y);
        self.data[idx] = value;
    }

    /// `(width, height)` of the plane.
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Raw samples.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Convert to a single-channel grayscale image.
    pub fn to_gray_image(&self) -> GrayImage {
        ImageBuffer::from_fn(self.width, self.height, |x, y| Luma([self.get(x, y)]))
    }

    /// Replicate the plane into all three channels of an RGB image.
    pub fn to_rgb_image(&self) -> RgbImage {
        ImageBuffer::from_fn(self.width, self.height, |x, y| {
            let v = self.get(x, y);
            Rgb([v, v, v])
        })
    }
}

/// Number of pixels in a `width` x `height` grid, computed in `usize`.
#[inline]
fn pixel_count(width: u32, height: u32) -> usize {
    width as usize * height as usize
}

/// Row-major offset of `(x, y)`, computed in `usize`.
#[inline]
fn pixel_index(width: u32, x: u32, y: u32) -> usize {
    y as usize * width as usize + x as usize
}

/// Split an RGB image into its red, green, and blue planes in one pass.
pub fn split_planes(image: &RgbImage) -> [ChannelPlane; 3] {
    let (width, height) = image.dimensions();
    let size = pixel_count(width, height);
    let mut r = Vec::with_capacity(size);
    let mut g = Vec::with_capacity(size);
    let mut b = Vec::with_capacity(size);

    for px in image.as_raw().chunks_exact(3) {
        r.push(px[0]);
        g.push(px[1]);
        b.push(px[2]);
    }

    [r, g, b].map(|data| ChannelPlane {
        width,
        height,
        data,
    })
}

/// Build an RGB image from three planes of identical size.
pub fn merge_planes(
    r: &ChannelPlane,
    g: &ChannelPlane,
    b: &ChannelPlane,
) -> Result<RgbImage, SplitError> {
    let expected = r.dimensions();
    for plane in [g, b] {
        if plane.dimensions() != expected {
            return Err(SplitError::DimensionMismatch {
                expected,
                actual: plane.dimensions(),
            });
        }
    }

    Ok(ImageBuffer::from_fn(expected.0, expected.1, |x, y| {
        Rgb([r.get(x, y), g.get(x, y), b.get(x, y)])
    }))
}
