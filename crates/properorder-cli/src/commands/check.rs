use std::path::{Path, PathBuf};

use properorder_core::stream;
use properorder_enforce::engine::EnforcementEngine;
use properorder_enforce::registry::Registry;
use properorder_enforce::types::CheckReport;
use properorder_output::OutputFormatter;

/// Run `properorder check`: validate declaration order in stream documents.
pub fn run(formatter: &dyn OutputFormatter, config_path: Option<&Path>, paths: Vec<PathBuf>) -> i32 {
    let cwd = match std::env::current_dir() {
        Ok(p) => p,
        Err(e) => {
            eprintln!("properorder check: failed to get current directory: {}", e);
            return 2;
        }
    };

    let config = super::load_config(&cwd, config_path);
    let registry = Registry::builtin();
    let engine = match EnforcementEngine::with_config(&registry, &config) {
        Ok(engine) => engine,
        Err(e) => {
            eprintln!("properorder check: {}", e);
            return 2;
        }
    };

    let ignore = match stream::build_ignore_set(&config.ignore_patterns) {
        Ok(set) => set,
        Err(e) => {
            eprintln!("properorder check: {}", e);
            return 2;
        }
    };

    let roots = if paths.is_empty() {
        vec![cwd.clone()]
    } else {
        super::absolutize(&cwd, paths)
    };

    let files = match stream::load_paths(&roots, &ignore) {
        Ok(files) => files,
        Err(e) => {
            eprintln!("properorder check: {}", e);
            return 2;
        }
    };
    tracing::info!(files = files.len(), checks = ?engine.check_names(), "running checks");

    let report = engine.check(&files);
    output_result(formatter, &report)
}

fn output_result(formatter: &dyn OutputFormatter, report: &CheckReport) -> i32 {
    let output = formatter.format_check(report);
    if !output.is_empty() {
        println!("{}", output);
    }

    if report.is_clean() {
        tracing::info!("clean: no ordering violations");
        0
    } else {
        1
    }
}
