//! Pan/zoom geometry.
//!
//! Device coordinates map to image coordinates through the transform the
//! paint composer sets up on the canvas: translate by `-pan`, then scale by
//! `zoom`. A device point `d` therefore shows the image point
//! `(d + pan) / zoom`.

use crate::geometry::Vec2;

/// Size to draw an image at so it sits inside `viewport_size`.
///
/// An image that fits on both axes keeps its natural size. An oversized image
/// is divided by the larger proportional overflow `(dim - viewport) / viewport`
/// of its two axes, and any result larger than the natural size on either axis
/// falls back to the natural size. The divisor is not the usual uniform
/// fit ratio: overflows below 1.0 always end up at natural size, and only
/// images more than twice the viewport on some axis are actually shrunk.
pub fn fit(image_size: Vec2, viewport_size: Vec2) -> Vec2 {
    if !viewport_size.is_positive_area() {
        return image_size;
    }
    if image_size.x <= viewport_size.x && image_size.y <= viewport_size.y {
        return image_size;
    }

    let overflow_width = (image_size.x - viewport_size.x) / viewport_size.x;
    let overflow_height = (image_size.y - viewport_size.y) / viewport_size.y;
    let scale_divisor = overflow_width.max(overflow_height);

    let scaled = image_size / scale_divisor;
    if scaled.x > image_size.x || scaled.y > image_size.y {
        image_size
    } else {
        scaled
    }
}

/// Top-left position that centers `scaled_image_size` inside `viewport_size`.
pub fn centered_origin(viewport_size: Vec2, scaled_image_size: Vec2) -> Vec2 {
    viewport_size.half() - scaled_image_size.half()
}

/// Pan offset that keeps the image point under `anchor` in place when the zoom
/// factor changes from `old_zoom` to `new_zoom`.
///
/// Both zoom factors must be strictly positive.
pub fn repin_zoom(old_zoom: f64, new_zoom: f64, anchor: Vec2, pan: Vec2) -> Vec2 {
    debug_assert!(old_zoom > 0.0 && new_zoom > 0.0);
    let world = (pan + anchor) / old_zoom;
    world * new_zoom - anchor
}

/// Pan contributed by a drag that started at `drag_anchor` and is now at
/// `pointer`. Moving the pointer right or down moves the content with it.
pub fn drag_delta(drag_anchor: Vec2, pointer: Vec2) -> Vec2 {
    drag_anchor - pointer
}

/// Image-space point shown at device position `device` for the given pan and zoom.
pub fn device_to_image(device: Vec2, pan: Vec2, zoom: f64) -> Vec2 {
    (device + pan) / zoom
}
