use panview_core::io::ImageAsset;

/// Convert a decoded asset to an egui ColorImage for texture upload.
pub fn asset_to_color_image(asset: &ImageAsset) -> egui::ColorImage {
    let size = [asset.width() as usize, asset.height() as usize];
    egui::ColorImage::from_rgba_unmultiplied(size, asset.pixels().as_raw())
}
