mod hide;
mod mask;
mod unveil;

pub use hide::*;
pub use mask::*;
pub use unveil::*;
