use image::{ColorType, ImageError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LsbMaskError {
    /// Represents an unsupported carrier media. For example, a GIF or a WAV file
    #[error("Media format is not supported")]
    UnsupportedMedia,

    /// Represents an invalid carrier image media. For example, a broken PNG file
    #[error("Image media is invalid")]
    InvalidImageMedia { source: ImageError },

    /// Represents an image that is not 8 bit per channel RGB, for example grayscale or 16 bit images
    #[error("Unsupported color type {0:?}, only 8 bit RGB images are supported")]
    UnsupportedColorType(ColorType),

    /// Represents a color channel index that does not exist in an RGB image
    #[error("Invalid color channel index {0}, expected 0 (red), 1 (green) or 2 (blue)")]
    InvalidChannel(u8),

    /// Represents a mask that does not cover the carrier image exactly
    #[error(
        "Dimension mismatch: the mask is {mask_width}x{mask_height} but the carrier image is {cover_width}x{cover_height}"
    )]
    DimensionMismatch {
        cover_width: u32,
        cover_height: u32,
        mask_width: u32,
        mask_height: u32,
    },

    /// Represents a failure to read from input.
    #[error("Read error")]
    ReadError { source: std::io::Error },

    /// Represents a failure to write target file.
    #[error("Write error")]
    WriteError { source: std::io::Error },

    /// Represents a failure when encoding an image file.
    #[error("Image encoding error")]
    ImageEncodingError { source: ImageError },

    /// Represents all other cases of `std::io::Error`.
    #[error(transparent)]
    IoError(#[from] std::io::Error),

    #[error("No carrier media set")]
    CarrierNotSet,

    #[error("No target file set")]
    TargetNotSet,

    #[error("API Error: Missing message")]
    MissingMessage,

    #[error("API Error: Missing mask dimensions")]
    MissingDimensions,
}
