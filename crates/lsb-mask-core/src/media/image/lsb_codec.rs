use image::RgbImage;
use log::debug;

use super::decoder::ImageRgbColor;
use super::encoder::ImageRgbColorMut;
use super::mask::{MaskImage, MaskPixel};
use crate::media::codec_options::CodecOptions;
use crate::media::primitives::{HideBit, UnveilBit};
use crate::{LsbMaskError, Result};

/// Hides a mask in, and unveils it from, the least significant bit of one color channel
pub struct LsbCodec;

impl LsbCodec {
    /// Returns a copy of `cover` where the LSB of the configured channel of every pixel
    /// is 1 if the mask has ink at that position and 0 otherwise.
    /// All other bits and channels are kept as they are.
    ///
    /// The mask has to have exactly the dimensions of the cover,
    /// otherwise [`LsbMaskError::DimensionMismatch`] is returned and nothing is produced.
    pub fn hide(cover: &RgbImage, mask: &MaskImage, opts: &CodecOptions) -> Result<RgbImage> {
        let (cover_width, cover_height) = cover.dimensions();
        let (mask_width, mask_height) = mask.dimensions();
        if (cover_width, cover_height) != (mask_width, mask_height) {
            return Err(LsbMaskError::DimensionMismatch {
                cover_width,
                cover_height,
                mask_width,
                mask_height,
            });
        }

        let mut encoded = cover.clone();
        let colors = ImageRgbColorMut::new_with_options(&mut encoded, opts);
        for (color, pixel) in colors.zip(mask.pixels()) {
            color.hide_bit(pixel.bit());
        }
        debug!(
            "hid {} ink pixels in the {:?} channel of a {cover_width}x{cover_height} image",
            mask.ink_count(),
            opts.channel
        );

        Ok(encoded)
    }

    /// Reads the LSB of the configured channel of every pixel back into a pure black and white mask.
    ///
    /// Note: unveiling the output of this function again is not meaningful,
    /// every pixel of it is either 0 or 255 and therefore unveils as all white or all black.
    pub fn unveil(encoded: &RgbImage, opts: &CodecOptions) -> MaskImage {
        let (width, height) = encoded.dimensions();
        let mut mask = RgbImage::new(width, height);
        for (pixel, color) in mask
            .pixels_mut()
            .zip(ImageRgbColor::new_with_options(encoded, opts))
        {
            *pixel = MaskPixel::from_bit(color.unveil_bit()).color();
        }

        MaskImage::from_image(mask)
    }
}
