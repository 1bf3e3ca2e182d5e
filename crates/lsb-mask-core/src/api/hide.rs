use std::path::{Path, PathBuf};

use log::info;

use crate::config::HideConfig;
use crate::media::image::LsbCodec;
use crate::media::{Media, Persist};
use crate::raster::{BitmapFontRasterizer, TextRasterizer};
use crate::{CodecOptions, LsbMaskError};

pub fn prepare() -> HideApi {
    HideApi::default()
}

#[derive(Default, Debug)]
pub struct HideApi<R = BitmapFontRasterizer> {
    message: Option<String>,
    image: Option<PathBuf>,
    output: Option<PathBuf>,
    options: CodecOptions,
    rasterizer: R,
}

impl<R: TextRasterizer> HideApi<R> {
    pub fn with_options(mut self, options: CodecOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_message(mut self, message: &str) -> Self {
        self.message = Some(message.to_string());
        self
    }

    pub fn use_message<S: AsRef<str>>(mut self, message: Option<S>) -> Self {
        self.message = message.map(|s| s.as_ref().to_string());
        self
    }

    /// This is the carrier image, it is only read
    pub fn with_image<A: AsRef<Path>>(mut self, image: A) -> Self {
        self.image = Some(image.as_ref().to_path_buf());
        self
    }

    pub fn with_output<A: AsRef<Path>>(mut self, output: A) -> Self {
        self.output = Some(output.as_ref().to_path_buf());
        self
    }

    /// Replaces the bitmap font rasterizer that turns the message into a mask
    pub fn with_rasterizer<T: TextRasterizer>(self, rasterizer: T) -> HideApi<T> {
        HideApi {
            message: self.message,
            image: self.image,
            output: self.output,
            options: self.options,
            rasterizer,
        }
    }

    pub fn with_config(self, config: HideConfig) -> Self {
        self.with_image(config.cover_path)
            .with_message(&config.mask_text)
            .with_output(config.output_path)
    }

    /// Renders the message, hides it in the carrier and stores the result.
    /// Nothing is written if any of the steps fails.
    pub fn execute(self) -> Result<(), LsbMaskError> {
        let config = self.validate()?;

        let cover = Media::from_file(&config.cover_path)?;
        let (width, height) = cover.dimensions();
        info!(
            "hiding {} character(s) in {:?} ({width}x{height})",
            config.mask_text.chars().count(),
            config.cover_path
        );

        let mask = self.rasterizer.render(&config.mask_text, width, height);
        let encoded = LsbCodec::hide(cover.image(), &mask, &self.options)?;
        Media::from_image(encoded).save_as(&config.output_path)?;
        info!("image with hidden message saved as {:?}", config.output_path);

        Ok(())
    }

    fn validate(&self) -> Result<HideConfig, LsbMaskError> {
        let Some(message) = self.message.as_ref() else {
            return Err(LsbMaskError::MissingMessage);
        };
        let Some(image) = self.image.as_ref() else {
            return Err(LsbMaskError::CarrierNotSet);
        };
        let Some(output) = self.output.as_ref() else {
            return Err(LsbMaskError::TargetNotSet);
        };

        Ok(HideConfig::new(image, message.as_str(), output))
    }
}
