//! Editor configuration persistence
//!
//! Stores user preferences in `config.yaml` under the linepad config directory
//! (see [`crate::config_paths`])

use std::path::Path;

use serde::{Deserialize, Deserializer, Serialize};

use crate::model::LineEnding;

/// Editor configuration that persists across sessions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditorConfig {
    /// Ending given to lines created by typing a line break; `none` is rejected
    #[serde(
        default = "default_line_ending",
        deserialize_with = "deserialize_line_ending"
    )]
    pub line_ending: LineEnding,

    /// Maximum number of commands kept on the undo stack
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,
}

fn default_line_ending() -> LineEnding {
    LineEnding::native()
}

fn deserialize_line_ending<'de, D>(deserializer: D) -> Result<LineEnding, D::Error>
where
    D: Deserializer<'de>,
{
    let ending = LineEnding::deserialize(deserializer)?;
    if ending.is_terminated() {
        Ok(ending)
    } else {
        Err(serde::de::Error::custom(
            "line_ending must be one of unix, dos, mac",
        ))
    }
}

fn default_history_limit() -> usize {
    1000
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            line_ending: default_line_ending(),
            history_limit: default_history_limit(),
        }
    }
}

impl EditorConfig {
    /// Load config from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };
        Self::load_from(&path)
    }

    /// Load config from a specific file, falling back to defaults on any error
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save config to disk
    ///
    /// Creates the config directory if it doesn't exist.
    pub fn save(&self) -> Result<(), String> {
        let path = crate::config_paths::config_file()
            .ok_or_else(|| "No config directory available".to_string())?;
        self.save_to(&path)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let content = serde_yaml::to_string(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        std::fs::write(path, content)
            .map_err(|e| format!("Failed to write config to {}: {}", path.display(), e))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }
}
