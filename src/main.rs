#![warn(clippy::all, rust_2018_idioms)]
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

use draw_shapes::{DrawShapesApp, EditorConfig};

fn main() -> eframe::Result {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).

    let config = EditorConfig::from_env().unwrap_or_else(|e| {
        log::warn!("Falling back to default config: {}", e);
        EditorConfig::default()
    });

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.canvas_size)
            .with_resizable(false)
            .with_title("Draw Shapes!"),
        ..Default::default()
    };
    eframe::run_native(
        "Draw Shapes!",
        native_options,
        Box::new(move |cc| Ok(Box::new(DrawShapesApp::new(cc, config)))),
    )
}
