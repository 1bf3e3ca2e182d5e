//! # LSB Mask Core API
//!
//! Hides a text message as a picture: the text is rendered into a black and white mask
//! and every pixel of that mask is stored in the least significant bit of the red channel
//! of a carrier image. Unveiling reads those bits back into a black and white image,
//! the message is then simply readable on it.
//!
//! There are 3 pipelines exposed via [`api`]
//! - [`api::hide`] renders a message and hides it in an image
//! - [`api::unveil`] turns the hidden bits of an image back into a mask image
//! - [`api::mask`] renders a message into a mask image only
//!
//! The in memory transforms are [`encode`] and [`decode`].
//!
//! # Usage Examples
//!
//! ## Hide a message inside an image and unveil it again
//!
//! ```rust
//! use image::{Rgb, RgbImage};
//! use tempfile::tempdir;
//!
//! let temp_dir = tempdir().expect("Failed to create temporary directory");
//! let carrier = temp_dir.path().join("carrier.png");
//! RgbImage::from_pixel(400, 60, Rgb([120, 80, 40]))
//!     .save(&carrier)
//!     .expect("Failed to write carrier image");
//!
//! lsb_mask_core::api::hide::prepare()
//!     .with_message("Hello, World!")
//!     .with_image(&carrier)
//!     .with_output(temp_dir.path().join("image-with-a-message.png"))
//!     .execute()
//!     .expect("Failed to hide message in image");
//!
//! lsb_mask_core::api::unveil::prepare()
//!     .from_secret_file(temp_dir.path().join("image-with-a-message.png"))
//!     .into_output_file(temp_dir.path().join("unveiled.png"))
//!     .execute()
//!     .expect("Failed to unveil message from image");
//! ```
//!
//! ## Fragility
//!
//! The hidden bits only survive lossless storage. Saving the encoded image as JPEG,
//! color correcting it or swapping its channels destroys the message silently.
//! All images written by this crate are PNG for that reason.

#![warn(clippy::redundant_else)]

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod media;
pub mod raster;
pub mod result;

use image::RgbImage;

pub use crate::config::{HideConfig, MaskConfig, UnveilConfig};
pub use crate::error::LsbMaskError;
pub use crate::media::image::{LsbCodec, MaskImage, MaskPixel};
pub use crate::media::{Channel, CodecOptions};
pub use crate::raster::{BitmapFontRasterizer, TextRasterizer};
pub use crate::result::Result;

/// Hides `mask` in the red channel LSB of a copy of `cover`.
///
/// Fails with [`LsbMaskError::DimensionMismatch`] unless both have the same dimensions.
///
/// ```rust
/// use image::{Rgb, RgbImage};
/// use lsb_mask_core::{decode, encode, MaskImage};
///
/// let cover = RgbImage::from_pixel(4, 2, Rgb([200, 1, 2]));
/// let mut mask = MaskImage::new(4, 2);
/// mask.put_ink(1, 0);
///
/// let encoded = encode(&cover, &mask).unwrap();
/// assert_eq!(encoded.get_pixel(1, 0), &Rgb([201, 1, 2]));
/// assert_eq!(decode(&encoded), mask.into_image());
/// ```
pub fn encode(cover: &RgbImage, mask: &MaskImage) -> Result<RgbImage> {
    LsbCodec::hide(cover, mask, &CodecOptions::default())
}

/// Turns the red channel LSB of every pixel into white (1) or black (0).
pub fn decode(encoded: &RgbImage) -> RgbImage {
    LsbCodec::unveil(encoded, &CodecOptions::default()).into_image()
}

/// Renders `text` with the default bitmap font rasterizer.
pub fn render(text: &str, width: u32, height: u32) -> MaskImage {
    BitmapFontRasterizer::default().render(text, width, height)
}
