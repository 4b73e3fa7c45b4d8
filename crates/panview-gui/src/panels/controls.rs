use panview_core::event::{InputEvent, ViewerButton};

use crate::app::PanViewApp;

const BUTTON_SIZE: [f32; 2] = [30.0, 30.0];

const IMAGE_EXTENSIONS: &[&str] = &[
    "png", "jpg", "jpeg", "webp", "gif", "bmp", "tif", "tiff", "ico", "tga", "pnm",
];

/// Bottom bar: zoom out, zoom in, reset, open.
pub fn show(ctx: &egui::Context, app: &mut PanViewApp) {
    let mut pressed = None;
    let mut open_requested = false;

    egui::TopBottomPanel::bottom("controls").show(ctx, |ui| {
        ui.add_space(4.0);
        ui.horizontal(|ui| {
            ui.add_enabled_ui(app.viewer.is_some(), |ui| {
                if ui
                    .add_sized(BUTTON_SIZE, egui::Button::new("-"))
                    .on_hover_text("Zoom out")
                    .clicked()
                {
                    pressed = Some(ViewerButton::ZoomOut);
                }
                if ui
                    .add_sized(BUTTON_SIZE, egui::Button::new("+"))
                    .on_hover_text("Zoom in")
                    .clicked()
                {
                    pressed = Some(ViewerButton::ZoomIn);
                }
                ui.add_space(12.0);
                if ui.button("Reset").clicked() {
                    pressed = Some(ViewerButton::Reset);
                }
            });

            ui.separator();
            if ui.button("Open...").clicked() {
                open_requested = true;
            }

            if let Some(ref err) = app.ui_state.error {
                ui.colored_label(egui::Color32::from_rgb(220, 80, 80), err);
            }
        });
        ui.add_space(4.0);
    });

    // Keyboard shortcuts
    let open_shortcut = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::O);
    if ctx.input_mut(|i| i.consume_shortcut(&open_shortcut)) {
        open_requested = true;
    }
    let quit_shortcut = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::Q);
    if ctx.input_mut(|i| i.consume_shortcut(&quit_shortcut)) {
        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
    }

    if let Some(button) = pressed {
        app.dispatch(InputEvent::Button(button));
    }
    if open_requested {
        open_file(ctx, app);
    }
}

fn open_file(ctx: &egui::Context, app: &mut PanViewApp) {
    if let Some(path) = rfd::FileDialog::new()
        .add_filter("Images", IMAGE_EXTENSIONS)
        .add_filter("All files", &["*"])
        .pick_file()
    {
        app.open(ctx, path);
    }
}
