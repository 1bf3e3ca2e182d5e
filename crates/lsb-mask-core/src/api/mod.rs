pub mod hide;
pub mod mask;
pub mod unveil;
