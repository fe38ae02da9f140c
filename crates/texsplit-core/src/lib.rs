//! texsplit: metallic-roughness texture splitting
//!
//! glTF-style PBR materials pack roughness into the green channel and
//! metalness into the blue channel of a single texture. This crate pulls
//! those channels apart into two standalone grayscale maps, encoded as
//! three-channel JPEG so that every viewer shows them the same way.
//!
//! # Example
//!
//! ```no_run
//! use texsplit_core::{split, SplitConfig};
//!
//! let config = SplitConfig::new("Helmet_metalRoughness.png")
//!     .with_metal_output("Helmet_metal.jpg")
//!     .with_roughness_output("Helmet_roughness.jpg")
//!     .with_quality(90);
//!
//! let result = split(&config).unwrap();
//! println!("{} -> {}", result.input.display(), result.metal.path.display());
//! ```
//!
//! # Guarantees
//!
//! - Output dimensions always equal input dimensions
//! - Every output pixel has equal red, green, and blue values
//! - Nothing is written unless the input decodes and both outputs encode
//! - Same input and quality give byte-identical output files

pub mod channel;
pub mod codec;
pub mod error;
pub mod split;

// Re-export main types for convenience
pub use channel::{merge_planes, split_planes, ChannelPlane, ColorComponent};
pub use codec::{load_rgb, write_jpeg, EncodedJpeg, DEFAULT_JPEG_QUALITY};
pub use error::SplitError;
pub use split::{
    split, split_file, split_maps, SplitConfig, SplitMaps, SplitResult, WrittenImage,
    DEFAULT_INPUT, DEFAULT_METAL_OUTPUT, DEFAULT_ROUGHNESS_OUTPUT,
};
