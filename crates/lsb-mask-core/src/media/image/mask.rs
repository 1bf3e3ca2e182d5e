use image::{Rgb, RgbImage};

/// color of a pixel that carries ink
pub const FOREGROUND: Rgb<u8> = Rgb([u8::MAX, u8::MAX, u8::MAX]);
/// color the rasterizer paints everything else with
pub const BACKGROUND: Rgb<u8> = Rgb([0, 0, 0]);

/// The two states a mask pixel can be in
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum MaskPixel {
    Ink,
    Background,
}

impl MaskPixel {
    pub fn from_bit(bit: bool) -> Self {
        if bit {
            MaskPixel::Ink
        } else {
            MaskPixel::Background
        }
    }

    pub fn bit(self) -> bool {
        self == MaskPixel::Ink
    }

    pub fn color(self) -> Rgb<u8> {
        match self {
            MaskPixel::Ink => FOREGROUND,
            MaskPixel::Background => BACKGROUND,
        }
    }
}

/// Only an exact match with [`FOREGROUND`] counts as ink,
/// anti aliased or otherwise partial coverage is background.
impl From<&Rgb<u8>> for MaskPixel {
    fn from(color: &Rgb<u8>) -> Self {
        Self::from_bit(*color == FOREGROUND)
    }
}

/// A binary image marking where the hidden signal goes.
///
/// The underlying pixels may hold any color, see [`MaskPixel`] for how they are read.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct MaskImage {
    image: RgbImage,
}

impl MaskImage {
    /// all background mask of the given size
    pub fn new(width: u32, height: u32) -> Self {
        Self::from_image(RgbImage::from_pixel(width, height, BACKGROUND))
    }

    pub fn from_image(image: RgbImage) -> Self {
        Self { image }
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// # Panics
    /// if (x, y) is out of bounds
    pub fn pixel(&self, x: u32, y: u32) -> MaskPixel {
        self.image.get_pixel(x, y).into()
    }

    /// Marks (x, y) as ink, coordinates outside of the mask are ignored.
    pub fn put_ink(&mut self, x: u32, y: u32) {
        if x < self.image.width() && y < self.image.height() {
            self.image.put_pixel(x, y, FOREGROUND);
        }
    }

    /// all mask pixels in row-major order, the same order `RgbImage::pixels` walks
    pub fn pixels(&self) -> impl Iterator<Item = MaskPixel> + '_ {
        self.image.pixels().map(MaskPixel::from)
    }

    pub fn ink_count(&self) -> usize {
        self.pixels().filter(|p| p.bit()).count()
    }

    pub fn as_image(&self) -> &RgbImage {
        &self.image
    }

    pub fn into_image(self) -> RgbImage {
        self.image
    }
}

impl From<RgbImage> for MaskImage {
    fn from(image: RgbImage) -> Self {
        Self::from_image(image)
    }
}
