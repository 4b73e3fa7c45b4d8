use crate::geometry::Vec2;
use crate::io::ImageAsset;
use crate::paint::DrawInstruction;

/// Pointer cursor shapes a viewer asks for.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CursorShape {
    #[default]
    Default,
    /// Shown while a drag is in progress.
    Hand,
}

/// Drawing surface and input source a viewer is attached to.
///
/// Implemented by the GUI frontend. All methods are called on the UI thread.
pub trait Canvas {
    /// Current client size in device pixels. Queried on every paint.
    fn viewport_size(&self) -> Vec2;

    /// Route all pointer input to this canvas until released.
    /// Returns `false` when the platform refuses the capture.
    fn capture_pointer(&mut self) -> bool;

    fn release_pointer(&mut self);

    fn has_capture(&self) -> bool;

    fn set_cursor(&mut self, shape: CursorShape);

    /// Schedule a repaint. Calls made before the next paint coalesce into one.
    fn request_redraw(&mut self);

    /// Draw `asset` as described by `instruction`: translate, then scale,
    /// then draw at `draw_origin` with `draw_size`.
    fn draw_image(&mut self, asset: &ImageAsset, instruction: &DrawInstruction);
}
