//! Configuration file loading for properorder.
//!
//! Reads `.properorder/properorder.json` and provides typed access to all settings.
//! Falls back to defaults when the config file is missing or incomplete.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Directory holding the config file, relative to the project root.
pub const CONFIG_DIR: &str = ".properorder";
/// Config file name inside [`CONFIG_DIR`].
pub const CONFIG_FILE: &str = "properorder.json";

/// Top-level properorder configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProperOrderConfig {
    #[serde(default = "default_version")]
    pub version: String,
    /// Check name to enabled flag, handed to the check registry unchanged.
    /// Kept as raw JSON so a malformed value surfaces as a registry error.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checks: Option<serde_json::Value>,
    #[serde(default)]
    pub ignore_patterns: Vec<String>,
}

fn default_version() -> String {
    "0.1.0".to_string()
}

impl Default for ProperOrderConfig {
    fn default() -> Self {
        Self {
            version: default_version(),
            checks: None,
            ignore_patterns: vec![],
        }
    }
}

impl ProperOrderConfig {
    /// Load configuration from `properorder.json` inside the given config directory.
    /// Returns defaults if the file doesn't exist or can't be parsed.
    pub fn load(config_dir: &Path) -> Self {
        Self::load_file(&config_dir.join(CONFIG_FILE))
    }

    /// Load configuration from an explicit file path, with the same fallbacks as [`load`](Self::load).
    pub fn load_file(config_path: &Path) -> Self {
        let content = match std::fs::read_to_string(config_path) {
            Ok(c) => c,
            Err(_) => return Self::default(),
        };
        match serde_json::from_str(&content) {
            Ok(cfg) => cfg,
            Err(e) => {
                tracing::warn!(
                    path = %config_path.display(),
                    error = %e,
                    "failed to parse config, using defaults"
                );
                Self::default()
            }
        }
    }

    /// Write this configuration into `config_dir`, creating the directory.
    pub fn save(&self, config_dir: &Path) -> std::io::Result<PathBuf> {
        std::fs::create_dir_all(config_dir)?;
        let path = config_dir.join(CONFIG_FILE);
        let body = serde_json::to_string_pretty(self).map_err(std::io::Error::other)?;
        std::fs::write(&path, body + "\n")?;
        Ok(path)
    }
}
