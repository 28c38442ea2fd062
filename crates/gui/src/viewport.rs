//! 2D gear viewport: pointer-driven rotation and painter drawing.

use std::f64::consts::TAU;

use eframe::egui::{self, Rect, Sense, Stroke, Ui};
use glam::DVec2;

use crate::input::angle_from_pointer_y;
use crate::palette;
use crate::screen::to_screen;
use crate::state::AppState;

pub fn show(ui: &mut Ui, state: &mut AppState) {
    let (rect, response) = ui.allocate_exact_size(ui.available_size(), Sense::hover());

    // Vertical pointer position drives the mesh rotation.
    if let Some(pointer) = response.hover_pos() {
        state
            .mesh
            .set_drive_angle(angle_from_pointer_y(pointer.y - rect.top()));
    }

    if !ui.is_rect_visible(rect) {
        return;
    }

    let painter = ui.painter_at(rect);
    painter.rect_filled(rect, 0.0, palette::BACKGROUND);

    let circle_stroke = Stroke::new(1.0, palette::CIRCLES);
    let s = &state.settings;
    let drive_center = state.mesh.drive.pos;
    let driven_center = state.mesh.driven.pos;

    if state.overlays.base {
        draw_circle(&painter, rect, drive_center, s.base_diameter() / 2.0, circle_stroke);
    }
    if state.overlays.addendum {
        draw_circle(&painter, rect, drive_center, s.addendum_diameter() / 2.0, circle_stroke);
    }
    if state.overlays.dedendum {
        draw_circle(&painter, rect, drive_center, s.dedendum_diameter() / 2.0, circle_stroke);
    }
    if state.overlays.clearing {
        draw_circle(&painter, rect, drive_center, s.clearing_diameter() / 2.0, circle_stroke);
    }
    if state.overlays.pitch {
        let pitch_r = s.pitch_diameter() / 2.0;
        draw_circle(&painter, rect, driven_center, pitch_r, circle_stroke);
        let bright = Stroke::new(1.0, palette::PITCH_CIRCLE);
        draw_circle(&painter, rect, drive_center, pitch_r, bright);
    }

    let outline = Stroke::new(1.0, palette::OUTLINE);
    draw_view(&painter, rect, &state.mesh.drive, outline);
    draw_view(&painter, rect, &state.mesh.driven, outline);
    draw_view(
        &painter,
        rect,
        &state.mesh.indicator,
        Stroke::new(1.0, palette::INDICATOR),
    );
}

/// Draws a circle as line segments with roughly pixel-sized steps, matching
/// the gear outlines' segment rendering.
fn draw_circle(painter: &egui::Painter, rect: Rect, center: DVec2, radius: f64, stroke: Stroke) {
    if radius <= 0.0 {
        return;
    }
    let step = 1.0 / radius;
    let mut angle: f64 = 0.0;
    let mut prev = to_screen(rect, center + radius * DVec2::new(angle.sin(), angle.cos()));
    while angle <= TAU {
        angle += step;
        let next = to_screen(rect, center + radius * DVec2::new(angle.sin(), angle.cos()));
        painter.line_segment([prev, next], stroke);
        prev = next;
    }
}

fn draw_view(painter: &egui::Painter, rect: Rect, view: &gears::GearView, stroke: Stroke) {
    let mut points = view.world_points().map(|p| to_screen(rect, p));
    let Some(mut prev) = points.next() else {
        return;
    };
    for next in points {
        painter.line_segment([prev, next], stroke);
        prev = next;
    }
}
