use panview_core::canvas::{Canvas, CursorShape};
use panview_core::geometry::Vec2;
use panview_core::io::ImageAsset;
use panview_core::paint::DrawInstruction;

/// [`Canvas`] backed by an egui panel.
///
/// egui is immediate mode, so requests are recorded here and carried out by
/// the viewport panel at the end of each frame.
#[derive(Debug, Default)]
pub struct EguiCanvas {
    viewport: Vec2,
    captured: bool,
    cursor: CursorShape,
    redraw_requested: bool,
    pending: Option<DrawInstruction>,
}

impl EguiCanvas {
    /// Record the panel size for this frame. Returns `true` if it changed.
    pub fn set_viewport(&mut self, size: egui::Vec2) -> bool {
        let size = Vec2::new(f64::from(size.x), f64::from(size.y));
        let changed = size != self.viewport;
        self.viewport = size;
        changed
    }

    pub fn cursor(&self) -> CursorShape {
        self.cursor
    }

    pub fn take_redraw_request(&mut self) -> bool {
        std::mem::take(&mut self.redraw_requested)
    }

    pub fn take_draw(&mut self) -> Option<DrawInstruction> {
        self.pending.take()
    }
}

impl Canvas for EguiCanvas {
    fn viewport_size(&self) -> Vec2 {
        self.viewport
    }

    // egui keeps delivering a drag to the widget it started on, so capture
    // is always granted and only tracked.
    fn capture_pointer(&mut self) -> bool {
        self.captured = true;
        true
    }

    fn release_pointer(&mut self) {
        self.captured = false;
    }

    fn has_capture(&self) -> bool {
        self.captured
    }

    fn set_cursor(&mut self, shape: CursorShape) {
        self.cursor = shape;
    }

    fn request_redraw(&mut self) {
        self.redraw_requested = true;
    }

    fn draw_image(&mut self, _asset: &ImageAsset, instruction: &DrawInstruction) {
        self.pending = Some(*instruction);
    }
}
