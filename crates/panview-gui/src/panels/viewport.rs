use panview_core::canvas::CursorShape;
use panview_core::error::PanViewError;
use panview_core::event::InputEvent;
use panview_core::geometry::Vec2;
use panview_core::view_state::ViewState;
use tracing::warn;

use crate::app::PanViewApp;
use crate::convert::asset_to_color_image;
use crate::state::{PinchTracker, UiState};

pub fn show(ctx: &egui::Context, app: &mut PanViewApp) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let rect = ui.available_rect_before_wrap();
        paint_background(ui, rect);

        let PanViewApp {
            viewer,
            viewport,
            ui_state,
            ..
        } = app;
        let Some(viewer) = viewer.as_mut() else {
            show_placeholder(ui);
            return;
        };

        let response = ui.allocate_rect(rect, egui::Sense::click_and_drag());

        let mut events = Vec::new();
        if viewer.canvas_mut().set_viewport(rect.size()) {
            events.push(InputEvent::Resized);
        }
        collect_pointer_events(ui, &response, rect, viewer.state(), &mut events);
        collect_pinch_event(ui, &response, rect, viewer.state(), &mut viewport.pinch, &mut events);

        for event in events {
            if let Err(e) = viewer.handle_event(event) {
                report(ui_state, event, &e);
            }
        }

        if viewport.texture_generation != Some(viewer.generation()) {
            let image = asset_to_color_image(viewer.asset());
            viewport.texture = Some(ctx.load_texture("viewer", image, egui::TextureOptions::LINEAR));
            viewport.texture_generation = Some(viewer.generation());
        }

        viewer.paint();
        if let (Some(instruction), Some(texture)) =
            (viewer.canvas_mut().take_draw(), viewport.texture.as_ref())
        {
            let screen = instruction.screen_rect();
            let img_rect = egui::Rect::from_min_size(
                rect.min + to_egui(screen.origin),
                to_egui(screen.size),
            );
            draw_image(ui, rect, texture.id(), img_rect);
        }

        draw_zoom_label(ui, rect, viewer.state().zoom);

        if viewer.canvas().cursor() == CursorShape::Hand {
            ctx.set_cursor_icon(egui::CursorIcon::Grabbing);
        }
        if viewer.canvas_mut().take_redraw_request() {
            ctx.request_repaint();
        }
    });
}

fn report(ui_state: &mut UiState, event: InputEvent, e: &PanViewError) {
    warn!(?event, error = %e, "Input event failed");
    ui_state.set_error(e.to_string());
}

/// Position relative to the panel's top-left corner.
fn to_local(rect: egui::Rect, pos: egui::Pos2) -> Vec2 {
    let offset = pos - rect.min;
    Vec2::new(f64::from(offset.x), f64::from(offset.y))
}

fn to_egui(v: Vec2) -> egui::Vec2 {
    egui::vec2(v.x as f32, v.y as f32)
}

fn collect_pointer_events(
    ui: &egui::Ui,
    response: &egui::Response,
    rect: egui::Rect,
    state: &ViewState,
    events: &mut Vec<InputEvent>,
) {
    let primary = egui::PointerButton::Primary;

    if response.drag_started_by(primary) {
        // egui reports the drag once the pointer has moved past a threshold;
        // anchor it where the button went down.
        let origin = ui
            .input(|i| i.pointer.press_origin())
            .or(response.interact_pointer_pos());
        if let Some(pos) = origin {
            events.push(InputEvent::PointerDown(to_local(rect, pos)));
        }
    }

    if response.dragged_by(primary) && response.drag_delta() != egui::Vec2::ZERO {
        if let Some(pos) = response.interact_pointer_pos() {
            events.push(InputEvent::PointerMove(to_local(rect, pos)));
        }
    }

    let window_unfocused = ui.input(|i| i.viewport().focused) == Some(false);
    if response.drag_stopped_by(primary) {
        match ui.input(|i| i.pointer.latest_pos()) {
            Some(pos) if !window_unfocused => {
                events.push(InputEvent::PointerUp(to_local(rect, pos)));
            }
            _ => events.push(InputEvent::CaptureLost),
        }
    } else if state.is_dragging()
        && (window_unfocused || !(response.dragged() || response.drag_started()))
    {
        events.push(InputEvent::CaptureLost);
    }

    if response.double_clicked() {
        if let Some(pos) = response.interact_pointer_pos() {
            events.push(InputEvent::DoubleClick(to_local(rect, pos)));
        }
    }
}

fn collect_pinch_event(
    ui: &egui::Ui,
    response: &egui::Response,
    rect: egui::Rect,
    state: &ViewState,
    pinch: &mut PinchTracker,
    events: &mut Vec<InputEvent>,
) {
    let zoom_delta = if response.contains_pointer() {
        ui.input(|i| i.zoom_delta())
    } else {
        1.0
    };
    let Some(factor) = pinch.update(zoom_delta, state.zoom) else {
        return;
    };

    let position = ui
        .input(|i| i.multi_touch().map(|t| t.center_pos).or(i.pointer.hover_pos()))
        .unwrap_or_else(|| rect.center());
    events.push(InputEvent::Pinch {
        factor,
        position: to_local(rect, position),
    });
}

fn paint_background(ui: &egui::Ui, rect: egui::Rect) {
    ui.painter()
        .rect_filled(rect, 0.0, egui::Color32::from_gray(30));
}

fn draw_image(ui: &egui::Ui, clip: egui::Rect, texture_id: egui::TextureId, img_rect: egui::Rect) {
    ui.painter_at(clip).image(
        texture_id,
        img_rect,
        egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
        egui::Color32::WHITE,
    );
}

fn draw_zoom_label(ui: &egui::Ui, rect: egui::Rect, zoom: f64) {
    let label_pos = rect.left_top() + egui::vec2(8.0, 8.0);
    ui.painter().text(
        label_pos,
        egui::Align2::LEFT_TOP,
        format!("{:.0}%", zoom * 100.0),
        egui::FontId::proportional(14.0),
        egui::Color32::from_white_alpha(200),
    );
}

fn show_placeholder(ui: &mut egui::Ui) {
    ui.centered_and_justified(|ui| {
        ui.label(
            egui::RichText::new("Open an image to begin")
                .size(18.0)
                .color(egui::Color32::from_gray(100)),
        );
    });
}
