//! Explicit inputs of the three pipelines.

use std::path::{Path, PathBuf};

/// Everything needed to hide a text message in a carrier image
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct HideConfig {
    /// the carrier image, read only
    pub cover_path: PathBuf,
    /// the text that is rendered into the mask
    pub mask_text: String,
    /// where the image with the hidden mask is stored, always as PNG
    pub output_path: PathBuf,
}

impl HideConfig {
    pub fn new(
        cover_path: impl AsRef<Path>,
        mask_text: impl Into<String>,
        output_path: impl AsRef<Path>,
    ) -> Self {
        Self {
            cover_path: cover_path.as_ref().to_path_buf(),
            mask_text: mask_text.into(),
            output_path: output_path.as_ref().to_path_buf(),
        }
    }
}

/// Everything needed to unveil the mask of an encoded image
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct UnveilConfig {
    pub encoded_path: PathBuf,
    /// where the black and white mask is stored, always as PNG
    pub output_path: PathBuf,
}

impl UnveilConfig {
    pub fn new(encoded_path: impl AsRef<Path>, output_path: impl AsRef<Path>) -> Self {
        Self {
            encoded_path: encoded_path.as_ref().to_path_buf(),
            output_path: output_path.as_ref().to_path_buf(),
        }
    }
}

/// Everything needed to render a text mask on its own
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct MaskConfig {
    pub mask_text: String,
    pub width: u32,
    pub height: u32,
    pub output_path: PathBuf,
}

impl MaskConfig {
    pub fn new(
        mask_text: impl Into<String>,
        width: u32,
        height: u32,
        output_path: impl AsRef<Path>,
    ) -> Self {
        Self {
            mask_text: mask_text.into(),
            width,
            height,
            output_path: output_path.as_ref().to_path_buf(),
        }
    }
}
