pub mod decoder;
pub mod encoder;
mod lsb_codec;
pub mod mask;

pub use lsb_codec::LsbCodec;
pub use mask::{MaskImage, MaskPixel, BACKGROUND, FOREGROUND};
