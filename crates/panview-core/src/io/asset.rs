use std::path::{Path, PathBuf};

use image::RgbaImage;

use crate::error::{PanViewError, Result};
use crate::geometry::Vec2;

/// A decoded bitmap plus the path it was read from.
#[derive(Clone, Debug)]
pub struct ImageAsset {
    pixels: RgbaImage,
    source: PathBuf,
}

impl ImageAsset {
    /// Wrap decoded pixels. Empty images are rejected since nothing could be drawn.
    pub fn new(pixels: RgbaImage, source: impl Into<PathBuf>) -> Result<Self> {
        let (width, height) = pixels.dimensions();
        if width == 0 || height == 0 {
            return Err(PanViewError::InvalidDimensions { width, height });
        }
        Ok(Self {
            pixels,
            source: source.into(),
        })
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    /// Natural pixel size.
    pub fn size(&self) -> Vec2 {
        Vec2::from(self.pixels.dimensions())
    }

    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }

    /// The file the pixels were decoded from. For converted sources this is
    /// the temporary file, not the original.
    pub fn source(&self) -> &Path {
        &self.source
    }
}
