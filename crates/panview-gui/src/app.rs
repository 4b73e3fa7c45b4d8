use std::path::{Path, PathBuf};

use panview_core::config::ViewerConfig;
use panview_core::event::InputEvent;
use panview_core::viewer::Viewer;
use tracing::{error, info, warn};

use crate::canvas::EguiCanvas;
use crate::panels;
use crate::state::{UiState, ViewportState};

pub struct PanViewApp {
    pub config: ViewerConfig,
    /// The open image. Dropping it deletes its temporary conversion file.
    pub viewer: Option<Viewer<EguiCanvas>>,
    pub viewport: ViewportState,
    pub ui_state: UiState,
}

impl PanViewApp {
    pub fn new(config: ViewerConfig, viewer: Option<Viewer<EguiCanvas>>) -> Self {
        Self {
            config,
            viewer,
            viewport: ViewportState::default(),
            ui_state: UiState::default(),
        }
    }

    /// Open `path`, replacing the current image. Failures are shown in the
    /// control bar and leave the current image in place.
    pub fn open(&mut self, ctx: &egui::Context, path: PathBuf) {
        match Viewer::open(&path, EguiCanvas::default(), self.config.zoom.clone()) {
            Ok(viewer) => {
                info!(path = %path.display(), "Opened image");
                self.close_viewer();
                self.viewer = Some(viewer);
                self.viewport.clear();
                self.ui_state.clear_error();
                ctx.send_viewport_cmd(egui::ViewportCommand::Title(window_title(
                    &self.config.window.title,
                    &path,
                )));
                ctx.request_repaint();
            }
            Err(e) => {
                error!(path = %path.display(), error = %e, "Failed to open image");
                self.ui_state
                    .set_error(format!("Failed to open {}: {e}", path.display()));
            }
        }
    }

    /// Feed one input event to the open viewer, if any.
    pub fn dispatch(&mut self, event: InputEvent) {
        let Some(viewer) = self.viewer.as_mut() else {
            return;
        };
        if let Err(e) = viewer.handle_event(event) {
            warn!(?event, error = %e, "Input event failed");
            self.ui_state.set_error(e.to_string());
        }
    }

    fn close_viewer(&mut self) {
        if let Some(viewer) = self.viewer.take() {
            if let Err(e) = viewer.close() {
                warn!(error = %e, "Failed to remove temporary file");
            }
        }
    }
}

impl eframe::App for PanViewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        panels::controls::show(ctx, self);
        panels::viewport::show(ctx, self);
    }
}

impl Drop for PanViewApp {
    fn drop(&mut self) {
        self.close_viewer();
    }
}

/// "<title> - <file name>"
pub fn window_title(base: &str, path: &Path) -> String {
    match path.file_name() {
        Some(name) => format!("{base} - {}", name.to_string_lossy()),
        None => base.to_string(),
    }
}
