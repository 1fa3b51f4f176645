#![warn(clippy::all, rust_2018_idioms)]
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use repute_ui::state::State;

mod alloc {
    #[global_allocator]
    static MALLOC: mimalloc::MiMalloc = mimalloc::MiMalloc;
}

fn main() -> eframe::Result {
    // Log to stderr (if you run with `RUST_LOG=debug`).
    env_logger::Builder::from_env(env_logger::Env::default()).init();

    let native_options = eframe::NativeOptions {
        hardware_acceleration: eframe::HardwareAcceleration::Preferred,
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([420.0, 720.0])
            .with_min_inner_size([320.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Repute",
        native_options,
        Box::new(move |cc| {
            // Avatar URIs are loaded straight from the network.
            egui_extras::install_image_loaders(&cc.egui_ctx);

            let state = State::default();
            let app = repute_ui::ReputeApp::new(state);
            Ok(Box::new(app))
        }),
    )
}
