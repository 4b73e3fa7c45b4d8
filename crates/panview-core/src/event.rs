use crate::geometry::Vec2;

/// Labeled buttons hosted next to the viewer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewerButton {
    ZoomIn,
    ZoomOut,
    Reset,
}

/// Input delivered by the canvas. Positions are device pixels relative to the
/// canvas's top-left corner.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    PointerDown(Vec2),
    PointerMove(Vec2),
    PointerUp(Vec2),
    /// The platform took pointer capture away mid-drag.
    CaptureLost,
    DoubleClick(Vec2),
    /// Pinch gesture. `factor` is the zoom factor the gesture asks for.
    Pinch { factor: f64, position: Vec2 },
    Button(ViewerButton),
    /// The canvas changed size.
    Resized,
}
