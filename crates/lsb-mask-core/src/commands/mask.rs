use crate::config::MaskConfig;
use crate::LsbMaskError;

pub fn render_mask(config: MaskConfig) -> Result<(), LsbMaskError> {
    crate::api::mask::prepare().with_config(config).execute()
}
