mod app;
mod color;
mod data;
mod state;
mod ui;

use std::path::Path;

use anyhow::Context;
use app::LaunchBoardApp;
use eframe::egui;

/// Input table, read once at startup.
const DATA_FILE: &str = "launch_records.csv";

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let dataset = data::loader::load_file(Path::new(DATA_FILE))
        .with_context(|| format!("loading {DATA_FILE}"))?;
    log::info!(
        "Loaded {} launches across {} sites",
        dataset.len(),
        dataset.sites.len()
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Launch Records Dashboard",
        options,
        Box::new(move |_cc| Ok(Box::new(LaunchBoardApp::new(dataset)))),
    )
    .map_err(|e| anyhow::anyhow!("eframe error: {e}"))
}
