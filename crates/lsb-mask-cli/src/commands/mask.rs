use std::path::PathBuf;

use clap::Args;
use lsb_mask_core::MaskConfig;

use crate::CliResult;

/// Renders a text message into a mask image, without hiding it
#[derive(Args, Debug)]
pub struct MaskArgs {
    /// The text message to render
    #[arg(short, long, value_name = "text message", required = true)]
    pub message: String,

    /// Width of the mask in pixel
    #[arg(long, value_name = "pixel", default_value = "640")]
    pub width: u32,

    /// Height of the mask in pixel
    #[arg(long, value_name = "pixel", default_value = "480")]
    pub height: u32,

    /// The mask will be stored as PNG file
    #[arg(short = 'o', long = "out", value_name = "output image file", required = true)]
    pub output_file: PathBuf,
}

impl MaskArgs {
    pub fn run(self) -> CliResult<()> {
        lsb_mask_core::commands::render_mask(MaskConfig::new(
            self.message,
            self.width,
            self.height,
            self.output_file,
        ))
    }
}
