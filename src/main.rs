//! Torrent Statusbar - host window
//!
//! Shows a torrent list with the status bar over either a JSON snapshot
//! file or a built-in demo swarm.

use clap::Parser;
use eframe::egui;
use statusbar_core::config::{self, AppConfig, ConfigHandle};
use statusbar_core::core::title::APP_NAME;
use statusbar_core::set_locale;
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::prelude::*;

mod gui;

/// Command line arguments of the host window
#[derive(Parser, Debug)]
#[command(name = "statusbar", version, about = "Torrent status bar host window")]
struct Args {
    /// Snapshot JSON file to display (re-read on change); demo data when absent
    #[arg(short, long)]
    snapshot: Option<PathBuf>,

    /// Configuration file (defaults to the platform config directory)
    #[arg(short, long, env = "STATUSBAR_CONFIG")]
    config: Option<PathBuf>,
}

/// Console logging plus a daily log file when the log directory is usable
fn init_logging() -> Option<WorkerGuard> {
    let filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::INFO.into());

    let (file_layer, guard) = match config::log_dir() {
        Some(dir) if std::fs::create_dir_all(&dir).is_ok() => {
            let appender = tracing_appender::rolling::daily(dir, "statusbar.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false);
            (Some(layer), Some(guard))
        }
        _ => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .with(file_layer)
        .init();

    guard
}

fn load_config(path: Option<&PathBuf>) -> AppConfig {
    let Some(path) = path else {
        tracing::warn!("No config directory available, using defaults");
        return AppConfig::default();
    };
    match AppConfig::load_from(path) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("Failed to load config {}: {}, using defaults", path.display(), e);
            AppConfig::default()
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let _log_guard = init_logging();

    tracing::info!("Starting {} v{}", APP_NAME, env!("CARGO_PKG_VERSION"));

    if let Err(e) = config::init_directories() {
        tracing::warn!("Failed to create application directories: {}", e);
    }

    let config_path = args.config.or_else(config::config_file);
    let config = load_config(config_path.as_ref());
    set_locale(config.locale());

    let viewport = egui::ViewportBuilder::default()
        .with_inner_size([config.window.width, config.window.height])
        .with_min_inner_size([480.0, 320.0])
        .with_maximized(config.window.maximized)
        .with_title(APP_NAME);

    let native_options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    let feed = match args.snapshot {
        Some(path) => {
            tracing::info!("Reading snapshots from {}", path.display());
            gui::Feed::file(path)
        }
        None => gui::Feed::demo(),
    };
    let config = ConfigHandle::new(config);

    eframe::run_native(
        APP_NAME,
        native_options,
        Box::new(move |cc| Ok(Box::new(gui::StatusbarApp::new(cc, config, config_path, feed)))),
    )
    .map_err(|e| anyhow::anyhow!("Window closed with an error: {e}"))
}
