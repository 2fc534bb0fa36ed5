//! Where linepad keeps its config file and logs
//!
//! Everything lives under the platform config directory reported by
//! [`dirs::config_dir`]: `~/.config/linepad/` on Linux (honouring
//! `XDG_CONFIG_HOME`), `~/Library/Application Support/linepad/` on macOS and
//! `%APPDATA%\linepad\` on Windows.

use std::path::PathBuf;

const APP_DIR: &str = "linepad";

/// Base config directory, or `None` when the platform has no home directory
pub fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|base| base.join(APP_DIR))
}

/// `<config dir>/config.yaml`, read by [`EditorConfig::load`](crate::config::EditorConfig::load)
pub fn config_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.yaml"))
}

/// `<config dir>/logs/`, home of the rolling log file
pub fn logs_dir() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("logs"))
}

/// Create the logs directory if needed and return it
pub fn ensure_logs_dir() -> Result<PathBuf, String> {
    let logs = logs_dir().ok_or_else(|| "No config directory available".to_string())?;
    std::fs::create_dir_all(&logs)
        .map_err(|e| format!("Failed to create {}: {}", logs.display(), e))?;
    Ok(logs)
}
