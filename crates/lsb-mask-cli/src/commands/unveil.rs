use std::path::PathBuf;

use clap::Args;
use lsb_mask_core::{CodecOptions, UnveilConfig};

use crate::CliResult;

pub const DEFAULT_SECRET_IMAGE: &str = "images/encoded_sample.png";
pub const DEFAULT_DECODED_OUTPUT: &str = "images/decoded_image.png";

/// Unveils the hidden message of an image as a black and white picture
#[derive(Args, Debug)]
pub struct UnveilArgs {
    /// Source image that contains the hidden message
    #[arg(
        short = 'i',
        long = "in",
        value_name = "media source file",
        default_value = DEFAULT_SECRET_IMAGE
    )]
    pub media: PathBuf,

    /// The unveiled message will be stored as PNG file
    #[arg(
        short = 'o',
        long = "out",
        value_name = "output image file",
        default_value = DEFAULT_DECODED_OUTPUT
    )]
    pub output_file: PathBuf,
}

impl UnveilArgs {
    pub fn run(self, options: CodecOptions) -> CliResult<()> {
        lsb_mask_core::commands::unveil(UnveilConfig::new(self.media, self.output_file), options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::hide::HideArgs;
    use lsb_mask_core::media::Media;
    use lsb_mask_core::{render, MaskImage};
    use tempfile::TempDir;

    #[test]
    fn should_unveil_what_was_hidden() {
        let out_dir = TempDir::new().unwrap();
        let cover = out_dir.path().join("cover.png");
        let secret = out_dir.path().join("secret.png");
        let unveiled = out_dir.path().join("unveiled.png");
        image::RgbImage::from_pixel(240, 40, image::Rgb([10, 20, 30]))
            .save(&cover)
            .unwrap();

        HideArgs {
            media: cover,
            write_to_file: secret.clone(),
            message: "Hello CLI".to_string(),
        }
        .run(CodecOptions::default())
        .unwrap();
        UnveilArgs {
            media: secret,
            output_file: unveiled.clone(),
        }
        .run(CodecOptions::default())
        .unwrap();

        let mask = MaskImage::from_image(Media::from_file(&unveiled).unwrap().into_image());
        assert_eq!(mask, render("Hello CLI", 240, 40));
    }
}
