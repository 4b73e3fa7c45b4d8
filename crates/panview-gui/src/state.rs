/// Texture cache and gesture bookkeeping for the viewport panel.
#[derive(Default)]
pub struct ViewportState {
    pub texture: Option<egui::TextureHandle>,
    /// Asset generation the texture was uploaded from.
    pub texture_generation: Option<u64>,
    pub pinch: PinchTracker,
}

impl ViewportState {
    /// Forget the cached texture, e.g. when a different image is opened.
    pub fn clear(&mut self) {
        self.texture = None;
        self.texture_generation = None;
        self.pinch = PinchTracker::default();
    }
}

/// Turns egui's per-frame zoom deltas into the cumulative factor a pinch
/// gesture asks for, measured from the zoom the gesture started at.
#[derive(Debug, Default)]
pub struct PinchTracker {
    start_zoom: Option<f64>,
    cumulative: f64,
}

impl PinchTracker {
    /// Feed one frame's zoom delta. Returns the requested zoom factor while a
    /// gesture is active; a frame without zoom input ends the gesture.
    pub fn update(&mut self, zoom_delta: f32, current_zoom: f64) -> Option<f64> {
        if zoom_delta == 1.0 {
            self.start_zoom = None;
            return None;
        }
        if self.start_zoom.is_none() {
            self.start_zoom = Some(current_zoom);
            self.cumulative = 1.0;
        }
        self.cumulative *= f64::from(zoom_delta);
        self.start_zoom.map(|start| start * self.cumulative)
    }
}

#[derive(Default)]
pub struct UiState {
    /// Last error shown in the control bar.
    pub error: Option<String>,
}

impl UiState {
    pub fn set_error<S: Into<String>>(&mut self, msg: S) {
        self.error = Some(msg.into());
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }
}
