//! Formation Editor
//!
//! Main entry point for the application.

use std::io;
use std::path::Path;

use anyhow::Context as _;
use formation_editor::app::WINDOW_TITLE;
use formation_editor::config::prompt_config;
use formation_editor::{FormationApp, FormationEditor, StageConfig};

fn main() -> anyhow::Result<()> {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    log::info!("Starting Formation Editor v{}", env!("CARGO_PKG_VERSION"));

    let config = load_config()?;
    let editor = FormationEditor::new(&config)?;

    let [width, height] = config
        .layout
        .window_size(config.rows, config.cols, config.performer_count);

    // Configure native options
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([width, height])
            .with_min_inner_size([640.0, 480.0])
            .with_resizable(true)
            .with_title(WINDOW_TITLE),
        ..Default::default()
    };

    // Run the app
    eframe::run_native(
        WINDOW_TITLE,
        native_options,
        Box::new(move |cc| Box::new(FormationApp::new(cc, editor))),
    )
    .map_err(|e| anyhow::anyhow!("event loop error: {}", e))
}

/// Read the stage config from the JSON file named on the command line, or prompt for it
fn load_config() -> anyhow::Result<StageConfig> {
    if let Some(path) = std::env::args_os().nth(1) {
        let path = Path::new(&path);
        return StageConfig::load(path).with_context(|| format!("loading {}", path.display()));
    }

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();
    Ok(prompt_config(&mut input, &mut output)?)
}
