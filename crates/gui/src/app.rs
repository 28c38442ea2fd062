//! Main application: parameter panel plus the gear viewport.

use eframe::egui;

use crate::state::AppState;
use crate::viewport;

#[derive(Default)]
pub struct GearApp {
    state: AppState,
}

impl eframe::App for GearApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let before = self.state.settings;

        egui::SidePanel::left("parameters")
            .default_width(190.0)
            .show(ctx, |ui| {
                parameter_panel(ui, &mut self.state);
            });

        if self.state.settings != before {
            self.state.regenerate();
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                viewport::show(ui, &mut self.state);
            });

        ctx.send_viewport_cmd(egui::ViewportCommand::Title(format!(
            "Involute Gears — drive angle {:.3} rad",
            self.state.mesh.drive_angle()
        )));

        // Steady redraw cadence so the mesh follows the pointer without
        // waiting for the next input event.
        ctx.request_repaint_after(std::time::Duration::from_millis(10));
    }
}

fn parameter_panel(ui: &mut egui::Ui, state: &mut AppState) {
    ui.heading("Gear");
    ui.add_space(4.0);

    egui::Grid::new("gear_params").num_columns(2).show(ui, |ui| {
        ui.label("Teeth");
        ui.add(egui::DragValue::new(&mut state.settings.num_teeth).range(4..=200));
        ui.end_row();

        ui.label("Module");
        ui.add(
            egui::DragValue::new(&mut state.settings.module)
                .range(1.0..=50.0)
                .speed(0.5),
        );
        ui.end_row();

        ui.label("Pressure angle");
        ui.add(
            egui::DragValue::new(&mut state.settings.pressure_angle_deg)
                .range(14.0..=25.0)
                .suffix("°"),
        );
        ui.end_row();
    });

    ui.add_space(8.0);
    ui.heading("Reference circles");
    ui.checkbox(&mut state.overlays.pitch, "Pitch");
    ui.checkbox(&mut state.overlays.base, "Base");
    ui.checkbox(&mut state.overlays.addendum, "Addendum");
    ui.checkbox(&mut state.overlays.dedendum, "Dedendum");
    ui.checkbox(&mut state.overlays.clearing, "Clearing");

    ui.add_space(8.0);
    ui.separator();
    ui.label(format!("Pitch Ø {:.2}", state.settings.pitch_diameter()));
    ui.label(format!("Base Ø {:.2}", state.settings.base_diameter()));
    ui.label(format!(
        "Drive angle {:.3} rad",
        state.mesh.drive_angle()
    ));
}
