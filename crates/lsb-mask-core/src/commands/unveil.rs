use crate::config::UnveilConfig;
use crate::{CodecOptions, LsbMaskError};

pub fn unveil(config: UnveilConfig, options: CodecOptions) -> Result<(), LsbMaskError> {
    crate::api::unveil::prepare()
        .with_options(options)
        .with_config(config)
        .execute()
}
