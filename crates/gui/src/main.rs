mod app;
mod viewport;

// Re-export library modules so `crate::state` etc. resolve to the lib crate
// types everywhere in the binary.
pub use gear_gui_lib::input;
pub use gear_gui_lib::palette;
pub use gear_gui_lib::screen;
pub use gear_gui_lib::state;

use std::process::ExitCode;

use app::GearApp;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gear_gui=info".into()),
        )
        .init();

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Involute Gears")
            .with_inner_size([800.0, 600.0])
            .with_min_inner_size([400.0, 300.0]),
        ..Default::default()
    };

    if let Err(e) = eframe::run_native(
        "gear-gui",
        native_options,
        Box::new(|_cc| Ok(Box::new(GearApp::default()))),
    ) {
        tracing::error!("Failed to start application: {e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
