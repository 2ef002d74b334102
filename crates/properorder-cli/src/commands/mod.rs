pub mod check;
pub mod checks;
pub mod init;

use std::path::{Path, PathBuf};

use properorder_core::config::{ProperOrderConfig, CONFIG_DIR};

/// Load the config named on the command line, or the project default.
pub(crate) fn load_config(cwd: &Path, explicit: Option<&Path>) -> ProperOrderConfig {
    match explicit {
        Some(path) => ProperOrderConfig::load_file(path),
        None => ProperOrderConfig::load(&cwd.join(CONFIG_DIR)),
    }
}

/// Resolve relative paths against `cwd`.
pub(crate) fn absolutize(cwd: &Path, paths: Vec<PathBuf>) -> Vec<PathBuf> {
    paths
        .into_iter()
        .map(|p| if p.is_absolute() { p } else { cwd.join(p) })
        .collect()
}
