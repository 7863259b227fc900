//! BrewMap Desktop GUI
//!
//! Interactive map of Los Angeles coffee shops: sidebar list, detail panel,
//! and OpenStreetMap markers, kept in sync by a single selection.

mod app;
mod dock;
mod io;
mod menu;
mod panels;
mod state;

use app::BrewMapApp;

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("BrewMap — Los Angeles Coffee")
            .with_inner_size([1280.0, 860.0])
            .with_min_inner_size([800.0, 600.0]),
        ..Default::default()
    };

    eframe::run_native(
        "BrewMap",
        native_options,
        Box::new(|cc| Ok(Box::new(BrewMapApp::new(cc)))),
    )
}
