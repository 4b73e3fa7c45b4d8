use crate::geometry::{Rect, Vec2};
use crate::transform::{centered_origin, fit};
use crate::view_state::ViewState;

/// Everything a canvas needs to draw the image for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DrawInstruction {
    /// Applied first: the negated total pan.
    pub translate: Vec2,
    /// Applied after the translation, equally on both axes.
    pub scale: f64,
    /// Where the image is drawn, in pre-transform coordinates.
    pub draw_origin: Vec2,
    /// Size the image is drawn at, in pre-transform coordinates.
    pub draw_size: Vec2,
}

impl DrawInstruction {
    /// The rectangle the image covers on the canvas once the transform is applied.
    pub fn screen_rect(&self) -> Rect {
        Rect::new(
            self.translate + self.draw_origin * self.scale,
            self.draw_size * self.scale,
        )
    }
}

/// Build the draw instruction for an image of `image_size` in a viewport of
/// `viewport_size`. Pure, so calling it twice on the same state gives the same
/// result.
pub fn compose(state: &ViewState, image_size: Vec2, viewport_size: Vec2) -> DrawInstruction {
    let draw_size = fit(image_size, viewport_size);
    DrawInstruction {
        translate: -state.total_pan(),
        scale: state.zoom,
        draw_origin: centered_origin(viewport_size, draw_size),
        draw_size,
    }
}
