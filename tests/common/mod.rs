/// Shared test helpers for all properorder integration tests.
///
/// Import from any integration test file with:
///   `#[path = "common/mod.rs"] mod common;`
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use properorder_core::stream;
use properorder_core::types::{Diagnostic, SourceFile};
use properorder_enforce::check::Check;
use tempfile::TempDir;

/// Absolute path of a file or directory under `tests/fixtures`.
#[allow(dead_code)]
pub fn fixture_path(rel: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(rel)
}

/// Load every source file of a fixture document or directory.
#[allow(dead_code)]
pub fn load_fixture(rel: &str) -> Vec<SourceFile> {
    let ignore = stream::build_ignore_set(&[]).unwrap();
    stream::load_paths(&[fixture_path(rel)], &ignore)
        .unwrap_or_else(|e| panic!("failed to load fixture {}: {}", rel, e))
}

/// Run `check` over a fixture and compare its diagnostics with the `want`
/// expectations recorded in the fixture.
///
/// A diagnostic matches an expectation on the same file and line whose
/// pattern is a substring of the message. Returns one line per unexpected
/// diagnostic and per unmatched expectation; empty means the fixture passed.
#[allow(dead_code)]
pub fn analyze_fixture(rel: &str, check: &dyn Check) -> Vec<String> {
    let mut problems = Vec::new();

    for file in load_fixture(rel) {
        let mut diagnostics: Vec<Diagnostic> = Vec::new();
        check.check_file(&file, &mut diagnostics);

        let mut pending = file.expectations.clone();
        for d in &diagnostics {
            let hit = pending.iter().position(|e| {
                e.position.file == d.position.file
                    && e.position.line == d.position.line
                    && d.message.contains(&e.pattern)
            });
            match hit {
                Some(i) => {
                    pending.remove(i);
                }
                None => problems.push(format!("{}: unexpected diagnostic: {}", d.position, d.message)),
            }
        }
        for e in pending {
            problems.push(format!(
                "{}:{}: no diagnostic was reported matching {:?}",
                e.position.file, e.position.line, e.pattern
            ));
        }
    }

    problems
}

/// Write `(relative_path, content)` pairs into a fresh temp directory.
///
/// Returns (TempDir, project_root). Hold the TempDir to keep the directory alive.
#[allow(dead_code)]
pub fn setup_project(files: &[(&str, &str)]) -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    for (path, content) in files {
        let full = dir.path().join(path);
        if let Some(parent) = full.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&full, content).unwrap();
    }
    let root = dir.path().to_path_buf();
    (dir, root)
}

/// Copy a fixture document into `root` under the same file name.
#[allow(dead_code)]
pub fn copy_fixture(rel: &str, root: &Path) -> PathBuf {
    let src = fixture_path(rel);
    let dest = root.join(src.file_name().unwrap());
    fs::copy(&src, &dest).unwrap();
    dest
}

/// Get path to compiled properorder binary.
///
/// Builds the binary if it doesn't exist yet.
#[allow(dead_code)]
pub fn properorder_bin() -> PathBuf {
    let mut path = std::env::current_exe().unwrap();
    path.pop(); // remove test binary name
    path.pop(); // remove 'deps'
    path.push("properorder");
    if path.exists() {
        return path;
    }
    let workspace = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let status = Command::new("cargo")
        .args(["build", "-p", "properorder-cli"])
        .current_dir(&workspace)
        .status()
        .expect("Failed to build properorder");
    assert!(status.success(), "Failed to build properorder binary");
    path
}

/// Run the binary in `dir` with `args`.
#[allow(dead_code)]
pub fn run_in(dir: &Path, args: &[&str]) -> std::process::Output {
    Command::new(properorder_bin())
        .args(args)
        .current_dir(dir)
        .env_remove("PROPERORDER_CONFIG")
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run properorder")
}
