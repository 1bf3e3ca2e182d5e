use std::path::{Path, PathBuf};

use log::info;

use crate::config::UnveilConfig;
use crate::media::image::LsbCodec;
use crate::media::{Media, Persist};
use crate::{CodecOptions, LsbMaskError};

pub fn prepare() -> UnveilApi {
    UnveilApi::default()
}

#[derive(Default, Debug)]
pub struct UnveilApi {
    secret_media: Option<PathBuf>,
    output_file: Option<PathBuf>,
    options: CodecOptions,
}

impl UnveilApi {
    /// Use the given codec options
    pub fn with_options(mut self, options: CodecOptions) -> Self {
        self.options = options;
        self
    }

    /// This is the secret image that contains the mask to be unveiled
    pub fn from_secret_file(mut self, secret_image: impl AsRef<Path>) -> Self {
        self.secret_media = Some(secret_image.as_ref().to_path_buf());
        self
    }

    /// This is the file the black and white mask will be saved to
    pub fn into_output_file(mut self, output_file: impl AsRef<Path>) -> Self {
        self.output_file = Some(output_file.as_ref().to_path_buf());
        self
    }

    pub fn with_config(self, config: UnveilConfig) -> Self {
        self.from_secret_file(config.encoded_path)
            .into_output_file(config.output_path)
    }

    /// Execute the unveil process and blocks until it is finished
    ///
    /// Note: any lossy re-compression or color correction of the secret image after hiding
    /// changes the least significant bits, the unveiled mask is then just noise.
    pub fn execute(self) -> Result<(), LsbMaskError> {
        let Some(secret_media) = self.secret_media else {
            return Err(LsbMaskError::CarrierNotSet);
        };
        let Some(output_file) = self.output_file else {
            return Err(LsbMaskError::TargetNotSet);
        };
        let config = UnveilConfig::new(secret_media, output_file);

        let media = Media::from_file(&config.encoded_path)?;
        let mask = LsbCodec::unveil(media.image(), &self.options);
        info!(
            "unveiled {} ink pixel(s) from {:?}",
            mask.ink_count(),
            config.encoded_path
        );

        Media::from_image(mask.into_image()).save_as(&config.output_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::image::{BACKGROUND, FOREGROUND};
    use crate::test_utils::write_uniform_cover;
    use tempfile::tempdir;

    #[test]
    fn illustrate_api_usage() {
        let temp_dir = tempdir().expect("Failed to create temporary directory");
        let secret_image = temp_dir.path().join("secret.png");
        let unveiled = temp_dir.path().join("unveiled.png");

        crate::api::hide::prepare()
            .with_message("Hello World")
            .with_image(write_uniform_cover(temp_dir.path(), 200, 40))
            .with_output(&secret_image)
            .execute()
            .expect("Failed to hide message in image");

        crate::api::unveil::prepare()
            .from_secret_file(&secret_image)
            .into_output_file(&unveiled)
            .execute()
            .expect("Failed to unveil message from image");

        let mask = Media::from_file(&unveiled).expect("Failed to open unveiled mask");
        assert_eq!(mask.dimensions(), (200, 40));
        assert!(mask
            .image()
            .pixels()
            .all(|p| *p == FOREGROUND || *p == BACKGROUND));
        assert!(mask.image().pixels().any(|p| *p == FOREGROUND));
    }

    #[test]
    fn should_require_a_secret_image() {
        let result = prepare().into_output_file("out.png").execute();
        assert!(matches!(result, Err(LsbMaskError::CarrierNotSet)));
    }

    #[test]
    fn should_require_an_output_file() {
        let result = prepare().from_secret_file("secret.png").execute();
        assert!(matches!(result, Err(LsbMaskError::TargetNotSet)));
    }
}
