use std::path::{Path, PathBuf};

use log::info;

use crate::config::MaskConfig;
use crate::media::{Media, Persist};
use crate::raster::{BitmapFontRasterizer, TextRasterizer};
use crate::LsbMaskError;

/// Renders a message into a mask image file without hiding it anywhere,
/// handy to check how a message will look like when unveiled.
pub fn prepare() -> MaskApi {
    MaskApi::default()
}

#[derive(Default, Debug)]
pub struct MaskApi {
    message: Option<String>,
    dimensions: Option<(u32, u32)>,
    output: Option<PathBuf>,
    rasterizer: BitmapFontRasterizer,
}

impl MaskApi {
    pub fn with_message(mut self, message: &str) -> Self {
        self.message = Some(message.to_string());
        self
    }

    pub fn with_dimensions(mut self, width: u32, height: u32) -> Self {
        self.dimensions = Some((width, height));
        self
    }

    pub fn with_output<A: AsRef<Path>>(mut self, output: A) -> Self {
        self.output = Some(output.as_ref().to_path_buf());
        self
    }

    pub fn with_rasterizer(mut self, rasterizer: BitmapFontRasterizer) -> Self {
        self.rasterizer = rasterizer;
        self
    }

    pub fn with_config(self, config: MaskConfig) -> Self {
        self.with_message(&config.mask_text)
            .with_dimensions(config.width, config.height)
            .with_output(config.output_path)
    }

    pub fn execute(self) -> Result<(), LsbMaskError> {
        let Some(message) = self.message else {
            return Err(LsbMaskError::MissingMessage);
        };
        let Some((width, height)) = self.dimensions else {
            return Err(LsbMaskError::MissingDimensions);
        };
        let Some(output) = self.output else {
            return Err(LsbMaskError::TargetNotSet);
        };
        let config = MaskConfig::new(message, width, height, output);

        let mask = self
            .rasterizer
            .render(&config.mask_text, config.width, config.height);
        info!(
            "rendered {} ink pixel(s) into a {width}x{height} mask",
            mask.ink_count()
        );

        Media::from_image(mask.into_image()).save_as(&config.output_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn illustrate_api_usage() {
        let temp_dir = tempdir().expect("Failed to create temporary directory");
        let output = temp_dir.path().join("mask.png");

        crate::api::mask::prepare()
            .with_message("Hello World")
            .with_dimensions(120, 30)
            .with_output(&output)
            .execute()
            .expect("Failed to render mask");

        let mask = Media::from_file(&output).expect("Failed to open mask");
        assert_eq!(mask.dimensions(), (120, 30));
    }

    #[test]
    fn should_require_dimensions() {
        let result = prepare()
            .with_message("Hello World")
            .with_output("mask.png")
            .execute();
        assert!(matches!(result, Err(LsbMaskError::MissingDimensions)));
    }
}
