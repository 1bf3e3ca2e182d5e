use crate::config::HideConfig;
use crate::{CodecOptions, LsbMaskError};

pub fn hide(config: HideConfig, options: CodecOptions) -> Result<(), LsbMaskError> {
    crate::api::hide::prepare()
        .with_options(options)
        .with_config(config)
        .execute()
}
