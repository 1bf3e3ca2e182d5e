use image::buffer::Pixels;
use image::{Rgb, RgbImage};

use crate::media::codec_options::CodecOptions;

/// Read only access to one color channel of every pixel of a `RgbImage`,
/// in the same row-major order as [`super::encoder::ImageRgbColorMut`].
pub struct ImageRgbColor<'i> {
    channel: usize,
    pixel: Pixels<'i, Rgb<u8>>,
}

impl<'i> ImageRgbColor<'i> {
    /// constructor for a given `RgbImage` that lives somewhere
    pub fn new(input: &'i RgbImage) -> Self {
        Self::new_with_options(input, &CodecOptions::default())
    }

    pub fn new_with_options(input: &'i RgbImage, options: &CodecOptions) -> Self {
        Self {
            channel: options.channel.index(),
            pixel: input.pixels(),
        }
    }
}

impl<'i> Iterator for ImageRgbColor<'i> {
    type Item = u8;

    #[inline(always)]
    fn next(&mut self) -> Option<Self::Item> {
        self.pixel.next().map(|p| p.0[self.channel])
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.pixel.size_hint()
    }
}
