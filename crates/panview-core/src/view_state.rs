use crate::geometry::Vec2;

/// Drag sub-state. The in-progress pan only exists while a drag does.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        /// Pointer position recorded when the drag started.
        anchor: Vec2,
        /// Offset contributed by the drag so far.
        in_progress_pan: Vec2,
    },
}

/// Zoom factor and pan offset of a viewer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewState {
    /// Committed pan, accumulated across completed drags.
    pub pan: Vec2,
    /// Strictly positive; 1.0 draws the image at its fitted size.
    pub zoom: f64,
    pub drag: DragState,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            pan: Vec2::ZERO,
            zoom: 1.0,
            drag: DragState::Idle,
        }
    }
}

impl ViewState {
    pub fn is_dragging(&self) -> bool {
        matches!(self.drag, DragState::Dragging { .. })
    }

    pub fn in_progress_pan(&self) -> Vec2 {
        match self.drag {
            DragState::Idle => Vec2::ZERO,
            DragState::Dragging {
                in_progress_pan, ..
            } => in_progress_pan,
        }
    }

    pub fn drag_anchor(&self) -> Option<Vec2> {
        match self.drag {
            DragState::Idle => None,
            DragState::Dragging { anchor, .. } => Some(anchor),
        }
    }

    /// Pan to render with: committed pan plus whatever the current drag adds.
    pub fn total_pan(&self) -> Vec2 {
        self.pan + self.in_progress_pan()
    }
}
