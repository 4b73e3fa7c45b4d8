pub mod asset;
pub mod loader;

pub use asset::ImageAsset;
pub use loader::{load_image, LoadedImage};
