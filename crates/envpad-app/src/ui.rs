//! egui drawing for the controls and the debug inspector overlay.

use egui::{
    Align2, Context, CornerRadius, FontId, LayerId, Painter, Pos2, Stroke, StrokeKind,
};
use envpad_core::{Axis, Orientation, Slider, ValueArea};

/// Widget colors.
mod theme {
    use egui::Color32;

    /// Track background.
    pub const TRACK_BG: Color32 = Color32::from_rgb(255, 255, 255);
    /// Track border.
    pub const TRACK_BORDER: Color32 = Color32::from_rgb(200, 200, 205);
    /// Interactive-span outline.
    pub const SPAN: Color32 = Color32::from_rgb(225, 228, 235);
    /// Crosshair lines.
    pub const CROSSHAIR: Color32 = Color32::from_rgb(160, 170, 185);
    /// Cursor dot.
    pub const CURSOR: Color32 = Color32::from_rgb(59, 130, 246);
    /// Cursor dot while dragging.
    pub const CURSOR_ACTIVE: Color32 = Color32::from_rgb(37, 99, 235);
    /// Labels drawn next to the controls.
    pub const LABEL: Color32 = Color32::from_rgb(120, 120, 120);
}

/// UI state that survives across frames.
#[derive(Debug, Clone)]
pub struct UiState {
    pub show_inspector: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            show_inspector: true,
        }
    }
}

/// Draw the controls and, when enabled, the inspector overlay.
pub fn render_ui(ctx: &Context, ui_state: &mut UiState, pad: &mut ValueArea, attack: &mut Slider) {
    let painter = ctx.layer_painter(LayerId::background());
    paint_value_area(&painter, pad);
    paint_slider(&painter, attack);

    if ui_state.show_inspector {
        inspector_window(ctx, pad, attack);
    }

    egui::TopBottomPanel::bottom("status_bar")
        .show_separator_line(false)
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.checkbox(&mut ui_state.show_inspector, "Inspector");
                ui.separator();
                ui.label(format!(
                    "x {:.1}   y {:.1}   attack {:.2}",
                    pad.x_value(),
                    pad.y_value(),
                    attack.value()
                ));
            });
        });
}

fn to_pos(p: kurbo::Point) -> Pos2 {
    Pos2::new(p.x as f32, p.y as f32)
}

fn to_rect(r: kurbo::Rect) -> egui::Rect {
    egui::Rect::from_min_max(
        Pos2::new(r.x0 as f32, r.y0 as f32),
        Pos2::new(r.x1 as f32, r.y1 as f32),
    )
}

fn paint_value_area(painter: &Painter, pad: &ValueArea) {
    let bounds = to_rect(pad.bounds());
    if !bounds.is_positive() {
        return;
    }

    painter.rect_filled(bounds, CornerRadius::same(6), theme::TRACK_BG);
    painter.rect_stroke(
        bounds,
        CornerRadius::same(6),
        Stroke::new(1.0, theme::TRACK_BORDER),
        StrokeKind::Inside,
    );

    // Outline of the padded interactive span the cursor lives in.
    let cursor = to_pos(pad.value_pos());
    let span = to_rect(pad.bounds().inset(-pad.padding));
    if span.is_positive() {
        painter.rect_stroke(
            span,
            CornerRadius::ZERO,
            Stroke::new(1.0, theme::SPAN),
            StrokeKind::Inside,
        );

        let crosshair = Stroke::new(1.0, theme::CROSSHAIR);
        painter.line_segment(
            [Pos2::new(span.min.x, cursor.y), Pos2::new(span.max.x, cursor.y)],
            crosshair,
        );
        painter.line_segment(
            [Pos2::new(cursor.x, span.min.y), Pos2::new(cursor.x, span.max.y)],
            crosshair,
        );
    }

    let color = if pad.is_dragging() {
        theme::CURSOR_ACTIVE
    } else {
        theme::CURSOR
    };
    painter.circle_filled(cursor, 7.0, color);

    painter.text(
        Pos2::new(bounds.min.x, bounds.min.y - 6.0),
        Align2::LEFT_BOTTOM,
        "envelope pad",
        FontId::proportional(12.0),
        theme::LABEL,
    );
}

fn paint_slider(painter: &Painter, slider: &Slider) {
    let bounds = to_rect(slider.bounds());
    if !bounds.is_positive() {
        return;
    }

    painter.rect_filled(bounds, CornerRadius::same(6), theme::TRACK_BG);
    painter.rect_stroke(
        bounds,
        CornerRadius::same(6),
        Stroke::new(1.0, theme::TRACK_BORDER),
        StrokeKind::Inside,
    );

    // Groove along the oriented center line, cursor riding the mapped
    // coordinate.
    let pos = slider.value_pos();
    let (groove, cursor) = match slider.orientation {
        Orientation::Horizontal => {
            let cy = bounds.center().y;
            let pad = slider.padding as f32;
            (
                [
                    Pos2::new(bounds.min.x + pad, cy),
                    Pos2::new(bounds.max.x - pad, cy),
                ],
                Pos2::new(pos.x as f32, cy),
            )
        }
        Orientation::Vertical => {
            let cx = bounds.center().x;
            let pad = slider.padding as f32;
            (
                [
                    Pos2::new(cx, bounds.min.y + pad),
                    Pos2::new(cx, bounds.max.y - pad),
                ],
                Pos2::new(cx, pos.y as f32),
            )
        }
    };
    painter.line_segment(groove, Stroke::new(2.0, theme::SPAN));

    let color = if slider.is_dragging() {
        theme::CURSOR_ACTIVE
    } else {
        theme::CURSOR
    };
    painter.circle_filled(cursor, 9.0, color);

    painter.text(
        Pos2::new(bounds.min.x, bounds.min.y - 6.0),
        Align2::LEFT_BOTTOM,
        "attack",
        FontId::proportional(12.0),
        theme::LABEL,
    );
}

/// Debug inspector: live widget state plus the dynamic configuration
/// surface. Tooling only, not part of the widget contract.
fn inspector_window(ctx: &Context, pad: &mut ValueArea, attack: &mut Slider) {
    egui::Window::new("Inspector")
        .default_pos(Pos2::new(16.0, 16.0))
        .default_width(260.0)
        .show(ctx, |ui| {
            ui.collapsing("Envelope pad", |ui| {
                value_readout(ui, "x", &pad.x_axis);
                value_readout(ui, "y", &pad.y_axis);
                ui.label(format!(
                    "cursor  ({:.1}, {:.1})",
                    pad.value_pos().x,
                    pad.value_pos().y
                ));
                ui.label(match pad.grab_owner() {
                    Some(id) => format!("grab    {:?}", id),
                    None => "grab    idle".to_string(),
                });
                ui.separator();
                range_editor(ui, "x range", &mut pad.x_axis);
                range_editor(ui, "y range", &mut pad.y_axis);
                ui.horizontal(|ui| {
                    ui.label("padding");
                    ui.add(
                        egui::DragValue::new(&mut pad.padding)
                            .speed(1.0)
                            .range(0.0..=64.0),
                    );
                });
                ui.checkbox(&mut pad.enabled, "enabled");
            });

            ui.collapsing("Attack slider", |ui| {
                value_readout(ui, "value", &attack.axis);
                ui.label(match attack.grab_owner() {
                    Some(id) => format!("grab    {:?}", id),
                    None => "grab    idle".to_string(),
                });
                ui.separator();
                range_editor(ui, "range", &mut attack.axis);
                ui.horizontal(|ui| {
                    ui.label("orientation");
                    ui.selectable_value(&mut attack.orientation, Orientation::Horizontal, "H");
                    ui.selectable_value(&mut attack.orientation, Orientation::Vertical, "V");
                });
                ui.checkbox(&mut attack.enabled, "enabled");
            });
        });
}

fn value_readout(ui: &mut egui::Ui, label: &str, axis: &Axis) {
    ui.label(format!(
        "{label}  {:.2}  (norm {:.3})",
        axis.value(),
        axis.normalized()
    ));
}

/// min/max/step editors. Edits are clamped so the inspector cannot produce
/// a reversed range, which the core leaves unspecified.
fn range_editor(ui: &mut egui::Ui, label: &str, axis: &mut Axis) {
    let range = &mut axis.range;
    ui.horizontal(|ui| {
        ui.label(label);
        ui.add(
            egui::DragValue::new(&mut range.min)
                .speed(1.0)
                .range(f64::NEG_INFINITY..=range.max),
        );
        ui.add(
            egui::DragValue::new(&mut range.max)
                .speed(1.0)
                .range(range.min..=f64::INFINITY),
        );
        ui.label("step");
        ui.add(
            egui::DragValue::new(&mut range.step)
                .speed(0.1)
                .range(0.0..=f64::INFINITY),
        );
    });
}
