#![windows_subsystem = "windows"]
//! Finance Dashboard - Main entry point

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

mod app;
mod constants;
mod settings;
mod theme;
mod types;
mod ui;
mod utils;

use app::App;
use constants::*;
use eframe::egui;
use tracing::{info, warn};
use utils::{create_dirs, get_data_dir};

/// Initialize file logging. Returns a guard that must be held for the app lifetime.
fn init_logging(logs_dir: &std::path::Path) -> tracing_appender::non_blocking::WorkerGuard {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let file_appender = tracing_appender::rolling::daily(logs_dir, LOG_FILE);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,finance_dashboard=debug"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true),
        )
        .init();

    guard
}

fn main() -> eframe::Result<()> {
    let data_dir = get_data_dir();
    let logs_dir = data_dir.join("logs");
    let failed_dirs = create_dirs(&[data_dir.as_path(), logs_dir.as_path()]);

    // Initialize logging - guard must live for entire app lifetime
    let _log_guard = init_logging(&logs_dir);

    info!(version = APP_VERSION, "Finance Dashboard starting");
    for (path, e) in &failed_dirs {
        warn!(error = %e, path = %path.display(), "Failed to create directory");
    }

    // Load saved window position/size
    let settings = settings::Settings::load(&data_dir);

    let mut viewport = egui::ViewportBuilder::default()
        .with_inner_size(
            settings
                .window_size()
                .unwrap_or(egui::Vec2::from(DEFAULT_WINDOW_SIZE)),
        )
        .with_min_inner_size(MIN_WINDOW_SIZE)
        .with_title(APP_NAME);

    if let Some(pos) = settings.window_pos() {
        viewport = viewport.with_position(pos);
    }

    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        APP_NAME,
        options,
        Box::new(move |cc| Ok(Box::new(App::new(cc, settings, data_dir)))),
    )
}
