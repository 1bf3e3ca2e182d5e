use std::path::PathBuf;

use clap::Args;
use lsb_mask_core::{CodecOptions, HideConfig};

use crate::CliResult;

pub const DEFAULT_COVER: &str = "images/samoyed.jpg";
pub const DEFAULT_ENCODED_OUTPUT: &str = "images/my_secret_message_sample.png";

/// Hides a text message as a picture in the least significant bits of an image
#[derive(Args, Debug)]
pub struct HideArgs {
    /// Carrier image such as PNG or JPEG, used readonly.
    #[arg(short = 'i', long = "in", value_name = "media file", default_value = DEFAULT_COVER)]
    pub media: PathBuf,

    /// Final image will be stored as PNG file
    #[arg(
        short = 'o',
        long = "out",
        value_name = "output image file",
        default_value = DEFAULT_ENCODED_OUTPUT
    )]
    pub write_to_file: PathBuf,

    /// A text message that will be hidden, wrapped at 60 columns
    #[arg(short, long, value_name = "text message", required = true)]
    pub message: String,
}

impl HideArgs {
    pub fn run(self, options: CodecOptions) -> CliResult<()> {
        lsb_mask_core::commands::hide(
            HideConfig::new(self.media, self.message, self.write_to_file),
            options,
        )
    }
}
