use std::path::Path;

use properorder_enforce::registry::Registry;
use properorder_enforce::types::CheckInfo;
use properorder_output::OutputFormatter;

/// Run `properorder checks`: list registered checks and their state.
pub fn run(formatter: &dyn OutputFormatter, config_path: Option<&Path>) -> i32 {
    let cwd = match std::env::current_dir() {
        Ok(p) => p,
        Err(e) => {
            eprintln!("properorder checks: failed to get current directory: {}", e);
            return 2;
        }
    };

    let config = super::load_config(&cwd, config_path);
    let registry = Registry::builtin();
    let states = match registry.states(config.checks.as_ref()) {
        Ok(states) => states,
        Err(e) => {
            eprintln!("properorder checks: {}", e);
            return 2;
        }
    };

    let infos: Vec<CheckInfo> = states
        .into_iter()
        .filter_map(|(name, enabled)| {
            registry.get(name).map(|check| CheckInfo {
                name: name.to_string(),
                doc: check.doc().to_string(),
                enabled,
            })
        })
        .collect();

    print!("{}", formatter.format_checks(&infos));
    0
}
