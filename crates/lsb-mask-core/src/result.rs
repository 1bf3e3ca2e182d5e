use crate::LsbMaskError;

pub type Result<T> = std::result::Result<T, LsbMaskError>;
