//! Application constants and configuration

pub const APP_NAME: &str = "Finance Dashboard";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Directory under the platform's local data dir holding settings and logs
pub const DATA_DIR_NAME: &str = "Finance Dashboard";
pub const SETTINGS_FILE: &str = "settings.json";
pub const LOG_FILE: &str = "finance-dashboard.log";

pub const DEFAULT_WINDOW_SIZE: [f32; 2] = [1100.0, 720.0];
pub const MIN_WINDOW_SIZE: [f32; 2] = [900.0, 600.0];
