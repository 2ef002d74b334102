use properorder_core::config::{ProperOrderConfig, CONFIG_DIR, CONFIG_FILE};
use properorder_enforce::registry::Registry;

/// Run `properorder init`: write `.properorder/properorder.json` with every check enabled.
pub fn run(force: bool) -> i32 {
    let cwd = match std::env::current_dir() {
        Ok(p) => p,
        Err(e) => {
            eprintln!("properorder init: failed to get current directory: {}", e);
            return 2;
        }
    };

    let config_dir = cwd.join(CONFIG_DIR);
    if config_dir.join(CONFIG_FILE).exists() && !force {
        eprintln!(
            "properorder init: {}/{} already exists (use --force to overwrite)",
            CONFIG_DIR, CONFIG_FILE
        );
        return 2;
    }

    let checks: serde_json::Map<String, serde_json::Value> = Registry::builtin()
        .names()
        .into_iter()
        .map(|name| (name.to_string(), serde_json::Value::Bool(true)))
        .collect();
    let config = ProperOrderConfig {
        checks: Some(serde_json::Value::Object(checks)),
        ..ProperOrderConfig::default()
    };

    match config.save(&config_dir) {
        Ok(path) => {
            tracing::info!(path = %path.display(), "wrote config");
            0
        }
        Err(e) => {
            eprintln!("properorder init: failed to write config: {}", e);
            2
        }
    }
}
