use clap::{Parser, Subcommand};
use lsb_mask_core::{Channel, CodecOptions};

use crate::commands::*;
use crate::CliResult;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct CliArgs {
    /// Experimental: color channel carrying the mask, 0 = red, 1 = green, 2 = blue
    #[arg(long = "x-channel", default_value = "0", global = true)]
    pub channel: u8,

    #[command(subcommand)]
    pub command: Commands,
}

impl CliArgs {
    pub fn codec_options(&self) -> CliResult<CodecOptions> {
        Ok(CodecOptions::default().with_channel(Channel::try_from(self.channel)?))
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Hide(hide::HideArgs),
    Unveil(unveil::UnveilArgs),
    Mask(mask::MaskArgs),
}
