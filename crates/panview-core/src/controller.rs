use tracing::{debug, warn};

use crate::canvas::{Canvas, CursorShape};
use crate::config::ZoomConfig;
use crate::error::{PanViewError, Result};
use crate::event::{InputEvent, ViewerButton};
use crate::geometry::Vec2;
use crate::io::ImageAsset;
use crate::paint::{compose, DrawInstruction};
use crate::transform::{drag_delta, repin_zoom};
use crate::view_state::{DragState, ViewState};

/// Zoom factor to move to for a pinch request of `raw_factor` at zoom `current`.
///
/// Gesture input is noisy; a request further than `threshold` from the current
/// zoom is replaced by a single `step` in its direction.
pub fn smooth_pinch_target(current: f64, raw_factor: f64, threshold: f64, step: f64) -> f64 {
    if (current - raw_factor).abs() > threshold {
        if current > raw_factor {
            current - step
        } else {
            current + step
        }
    } else {
        raw_factor
    }
}

/// Restores the default cursor and releases pointer capture when dropped.
struct CaptureRelease<'a, C: Canvas> {
    canvas: &'a mut C,
}

impl<C: Canvas> Drop for CaptureRelease<'_, C> {
    fn drop(&mut self) {
        self.canvas.set_cursor(CursorShape::Default);
        if self.canvas.has_capture() {
            self.canvas.release_pointer();
        }
    }
}

/// Owns a viewer's [`ViewState`] and turns gestures into state changes on it.
pub struct ViewController<C: Canvas> {
    canvas: C,
    state: ViewState,
    zoom: ZoomConfig,
}

impl<C: Canvas> ViewController<C> {
    pub fn new(canvas: C, zoom: ZoomConfig) -> Self {
        Self {
            canvas,
            state: ViewState::default(),
            zoom,
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn canvas(&self) -> &C {
        &self.canvas
    }

    pub fn canvas_mut(&mut self) -> &mut C {
        &mut self.canvas
    }

    pub fn zoom_config(&self) -> &ZoomConfig {
        &self.zoom
    }

    /// Center of the canvas. Anchor for button-driven zoom.
    pub fn viewport_center(&self) -> Vec2 {
        self.canvas.viewport_size().half()
    }

    // -- Drag ---------------------------------------------------------------

    /// Start a drag at `pointer`. Returns `false` if a drag is already running
    /// or the canvas refused pointer capture.
    pub fn begin_drag(&mut self, pointer: Vec2) -> bool {
        if self.state.is_dragging() {
            debug!("begin_drag ignored: drag already in progress");
            return false;
        }
        if !self.canvas.capture_pointer() {
            warn!(x = pointer.x, y = pointer.y, "Pointer capture denied, drag not started");
            return false;
        }

        self.canvas.set_cursor(CursorShape::Hand);
        self.state.drag = DragState::Dragging {
            anchor: pointer,
            in_progress_pan: Vec2::ZERO,
        };
        debug!(x = pointer.x, y = pointer.y, "Drag started");
        true
    }

    /// Move the running drag to `pointer` and redraw. No-op when idle.
    pub fn update_drag(&mut self, pointer: Vec2) -> bool {
        if !self.track_drag(pointer) {
            return false;
        }
        self.canvas.request_redraw();
        true
    }

    fn track_drag(&mut self, pointer: Vec2) -> bool {
        let DragState::Dragging {
            anchor,
            in_progress_pan,
        } = &mut self.state.drag
        else {
            return false;
        };
        *in_progress_pan = drag_delta(*anchor, pointer);
        true
    }

    /// Finish the running drag, folding its offset into the committed pan.
    ///
    /// The pan is committed on every path (pointer release, capture loss,
    /// cancellation by a zoom); `refresh` only decides whether a redraw is
    /// requested. No-op when idle.
    pub fn end_drag(&mut self, refresh: bool) -> bool {
        if !self.state.is_dragging() {
            return false;
        }

        {
            let _release = CaptureRelease {
                canvas: &mut self.canvas,
            };
            self.state.pan += self.state.in_progress_pan();
            self.state.drag = DragState::Idle;
        }

        debug!(pan_x = self.state.pan.x, pan_y = self.state.pan.y, "Drag finished");
        if refresh {
            self.canvas.request_redraw();
        }
        true
    }

    // -- Zoom ---------------------------------------------------------------

    /// Change the zoom factor while keeping the image point under `anchor` fixed.
    ///
    /// Non-positive and non-finite factors are rejected; others are clamped to
    /// the configured range. A running drag is committed without a redraw first.
    pub fn apply_zoom(&mut self, new_zoom: f64, anchor: Vec2) -> Result<()> {
        if !new_zoom.is_finite() || new_zoom <= 0.0 {
            warn!(new_zoom, "Rejected zoom factor");
            return Err(PanViewError::InvalidZoom(new_zoom));
        }
        let new_zoom = self.zoom.clamp(new_zoom);

        if self.state.is_dragging() {
            self.end_drag(false);
        }

        self.state.pan = repin_zoom(self.state.zoom, new_zoom, anchor, self.state.pan);
        self.state.zoom = new_zoom;
        debug!(
            zoom = new_zoom,
            anchor_x = anchor.x,
            anchor_y = anchor.y,
            "Zoom applied"
        );
        self.canvas.request_redraw();
        Ok(())
    }

    pub fn zoom_in(&mut self, anchor: Vec2) -> Result<()> {
        self.apply_zoom(self.state.zoom * self.zoom.zoom_in_factor, anchor)
    }

    pub fn zoom_out(&mut self, anchor: Vec2) -> Result<()> {
        self.apply_zoom(self.state.zoom * self.zoom.zoom_out_factor, anchor)
    }

    /// Zoom toward a pinch gesture's requested factor, smoothing large jumps.
    pub fn handle_pinch(&mut self, raw_factor: f64, anchor: Vec2) -> Result<()> {
        let target = smooth_pinch_target(
            self.state.zoom,
            raw_factor,
            self.zoom.pinch_threshold,
            self.zoom.pinch_step,
        );
        self.apply_zoom(target, anchor)
    }

    // -- Reset / paint ------------------------------------------------------

    /// Back to zoom 1 with no pan. Ends a running drag first.
    pub fn reset(&mut self) {
        self.end_drag(false);
        self.state = ViewState::default();
        debug!("View reset");
        self.canvas.request_redraw();
    }

    /// Compose the draw instruction for `asset` against the current viewport
    /// and hand it to the canvas.
    pub fn paint(&mut self, asset: &ImageAsset) -> DrawInstruction {
        let instruction = compose(&self.state, asset.size(), self.canvas.viewport_size());
        self.canvas.draw_image(asset, &instruction);
        instruction
    }

    /// Dispatch one input event.
    ///
    /// [`ViewerButton::Reset`] only resets the view here; reloading the image
    /// is up to the owner of the asset.
    pub fn handle_event(&mut self, event: InputEvent) -> Result<()> {
        match event {
            InputEvent::PointerDown(p) => {
                self.begin_drag(p);
            }
            InputEvent::PointerMove(p) => {
                self.update_drag(p);
            }
            InputEvent::PointerUp(p) => {
                if self.track_drag(p) {
                    self.end_drag(true);
                }
            }
            InputEvent::CaptureLost => {
                self.end_drag(true);
            }
            InputEvent::DoubleClick(p) => self.zoom_in(p)?,
            InputEvent::Pinch { factor, position } => self.handle_pinch(factor, position)?,
            InputEvent::Button(ViewerButton::ZoomIn) => self.zoom_in(self.viewport_center())?,
            InputEvent::Button(ViewerButton::ZoomOut) => self.zoom_out(self.viewport_center())?,
            InputEvent::Button(ViewerButton::Reset) => self.reset(),
            InputEvent::Resized => self.canvas.request_redraw(),
        }
        Ok(())
    }
}

impl<C: Canvas> Drop for ViewController<C> {
    fn drop(&mut self) {
        if self.state.is_dragging() {
            let _release = CaptureRelease {
                canvas: &mut self.canvas,
            };
        }
    }
}
