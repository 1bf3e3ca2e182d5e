use std::fs::File;
use std::io::{BufReader, BufWriter, Seek, Write};
use std::path::Path;

use image::io::Reader;
use image::{ColorType, DynamicImage, ImageFormat, RgbImage};
use log::{error, warn};

use super::Persist;
use crate::error::LsbMaskError;
use crate::result::Result;

/// An 8 bit RGB image read from or written to disk
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Media {
    image: RgbImage,
}

impl Media {
    pub fn from_image(image: RgbImage) -> Self {
        Self { image }
    }

    /// Reads a PNG or JPEG image.
    ///
    /// Only 8 bit RGB(A) images are accepted, the alpha channel is dropped.
    /// Grayscale, 16 bit or float images are rejected instead of being converted,
    /// because the conversion would change the color values that carry the data.
    pub fn from_file(f: &Path) -> Result<Self> {
        let format = match f
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase())
            .as_deref()
        {
            Some("png") => ImageFormat::Png,
            Some("jpg" | "jpeg") => ImageFormat::Jpeg,
            _ => return Err(LsbMaskError::UnsupportedMedia),
        };

        let file = File::open(f).map_err(|source| {
            error!("Error opening file {f:?}: {source}");
            LsbMaskError::ReadError { source }
        })?;
        let mut reader = Reader::new(BufReader::new(file));
        reader.set_format(format);
        let image = reader
            .decode()
            .map_err(|source| LsbMaskError::InvalidImageMedia { source })?;

        Self::from_dynamic_image(image)
    }

    pub fn from_dynamic_image(image: DynamicImage) -> Result<Self> {
        match image.color() {
            ColorType::Rgb8 => Ok(Self::from_image(image.into_rgb8())),
            ColorType::Rgba8 => Ok(Self::from_image(image.to_rgb8())),
            other => Err(LsbMaskError::UnsupportedColorType(other)),
        }
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    pub fn image(&self) -> &RgbImage {
        &self.image
    }

    pub fn into_image(self) -> RgbImage {
        self.image
    }

    /// Writes the image as PNG, any lossy format would destroy the least significant bits.
    pub fn save_to_writer<W: Write + Seek>(&self, mut writer: W) -> Result<()> {
        self.image
            .write_to(&mut writer, ImageFormat::Png)
            .map_err(|source| {
                error!("Error saving image: {source}");
                LsbMaskError::ImageEncodingError { source }
            })
    }
}

impl Persist for Media {
    fn save_as(&self, file: &Path) -> Result<()> {
        let is_png = file
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.eq_ignore_ascii_case("png"))
            .unwrap_or(false);
        if !is_png {
            warn!("{file:?} does not end with .png, the content will be PNG anyway");
        }

        let f = File::create(file).map_err(|e| {
            error!("Error creating file {file:?}: {e}");
            LsbMaskError::WriteError { source: e }
        })?;
        let mut writer = BufWriter::new(f);
        let written = self.save_to_writer(&mut writer).and_then(|_| {
            writer
                .flush()
                .map_err(|source| LsbMaskError::WriteError { source })
        });
        drop(writer);
        if written.is_err() {
            // no half written images
            let _ = std::fs::remove_file(file);
        }
        written
    }
}

impl From<RgbImage> for Media {
    fn from(image: RgbImage) -> Self {
        Self::from_image(image)
    }
}
