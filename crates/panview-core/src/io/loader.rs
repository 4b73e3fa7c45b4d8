use std::path::Path;

use image::{ImageFormat, ImageReader};
use tempfile::NamedTempFile;
use tracing::{debug, info};

use crate::consts::{TEMP_FILE_PREFIX, TEMP_FILE_SUFFIX};
use crate::error::{PanViewError, Result};
use crate::io::asset::ImageAsset;

/// Formats that are re-encoded to PNG through a temporary file before loading.
pub const CONVERTED_FORMATS: &[ImageFormat] = &[ImageFormat::WebP];

/// Result of loading an image for display.
///
/// When the source had to be converted, `converted` holds the temporary PNG.
/// The file is deleted when the handle is dropped, so whoever owns the viewer
/// window should keep it for the window's lifetime.
#[derive(Debug)]
pub struct LoadedImage {
    pub asset: ImageAsset,
    pub converted: Option<NamedTempFile>,
}

/// Load an image file, converting formats listed in [`CONVERTED_FORMATS`].
pub fn load_image(path: &Path) -> Result<LoadedImage> {
    let format = detect_format(path)?;

    if CONVERTED_FORMATS.contains(&format) {
        let converted = convert_to_png(path)?;
        let asset = decode(converted.path())?;
        info!(
            source = %path.display(),
            temp = %converted.path().display(),
            width = asset.width(),
            height = asset.height(),
            "Loaded converted image"
        );
        return Ok(LoadedImage {
            asset,
            converted: Some(converted),
        });
    }

    let asset = decode(path)?;
    info!(
        source = %path.display(),
        width = asset.width(),
        height = asset.height(),
        "Loaded image"
    );
    Ok(LoadedImage {
        asset,
        converted: None,
    })
}

/// Detect the image format from file contents, falling back to the extension.
pub fn detect_format(path: &Path) -> Result<ImageFormat> {
    let reader = ImageReader::open(path)?.with_guessed_format()?;
    reader
        .format()
        .ok_or_else(|| PanViewError::UnsupportedFormat(path.display().to_string()))
}

fn decode(path: &Path) -> Result<ImageAsset> {
    let image = ImageReader::open(path)?.with_guessed_format()?.decode()?;
    ImageAsset::new(image.to_rgba8(), path)
}

fn convert_to_png(path: &Path) -> Result<NamedTempFile> {
    let image = ImageReader::open(path)?.with_guessed_format()?.decode()?;
    let file = tempfile::Builder::new()
        .prefix(TEMP_FILE_PREFIX)
        .suffix(TEMP_FILE_SUFFIX)
        .tempfile()?;
    image.save_with_format(file.path(), ImageFormat::Png)?;
    debug!(
        source = %path.display(),
        temp = %file.path().display(),
        "Converted image to PNG"
    );
    Ok(file)
}
