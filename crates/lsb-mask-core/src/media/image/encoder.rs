use image::buffer::PixelsMut;
use image::{Rgb, RgbImage};

use crate::media::codec_options::CodecOptions;

/// Mutable access to one color channel of every pixel of a `RgbImage`,
/// walking the interleaved buffer row by row.
///
/// ## Example of usage
/// ```rust
/// use image::{Rgb, RgbImage};
/// use lsb_mask_core::media::image::encoder::ImageRgbColorMut;
/// use lsb_mask_core::media::HideBit;
///
/// let mut image = RgbImage::from_pixel(2, 2, Rgb([200, 10, 20]));
/// for red in ImageRgbColorMut::new(&mut image) {
///     red.hide_bit(true);
/// }
/// assert_eq!(image.get_pixel(1, 1), &Rgb([201, 10, 20]));
/// ```
pub struct ImageRgbColorMut<'a> {
    channel: usize,
    pixel: PixelsMut<'a, Rgb<u8>>,
}

impl<'a> ImageRgbColorMut<'a> {
    /// constructor for a given `RgbImage` that lives somewhere
    pub fn new(input: &'a mut RgbImage) -> Self {
        Self::new_with_options(input, &CodecOptions::default())
    }

    pub fn new_with_options(input: &'a mut RgbImage, options: &CodecOptions) -> Self {
        Self {
            channel: options.channel.index(),
            pixel: input.pixels_mut(),
        }
    }
}

impl<'a> Iterator for ImageRgbColorMut<'a> {
    type Item = &'a mut u8;

    #[inline(always)]
    fn next(&mut self) -> Option<Self::Item> {
        let channel = self.channel;
        self.pixel.next().map(|p| &mut p.0[channel])
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.pixel.size_hint()
    }
}
