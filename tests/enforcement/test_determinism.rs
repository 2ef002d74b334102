// Tests for stable, reproducible diagnostics.

use properorder_core::types::SourceFile;
use properorder_enforce::engine::EnforcementEngine;
use properorder_enforce::registry::Registry;

use super::common;

fn engine() -> EnforcementEngine {
    EnforcementEngine::new(Registry::builtin().enabled(None).unwrap())
}

#[test]
/// Running twice over the same stream gives the same report.
fn test_rerun_is_identical() {
    let files = common::load_fixture("streams");
    let first = engine().check(&files);
    let second = engine().check(&files);
    assert_eq!(first, second);
    assert_eq!(first.diagnostics.len(), 8);
}

#[test]
/// Many copies of the reference file, checked in parallel, come back sorted
/// by file and identical to a sequential run.
fn test_parallel_report_is_sorted() {
    let text = std::fs::read_to_string(common::fixture_path("streams/properorder.decls.json")).unwrap();
    let files: Vec<SourceFile> = (0..32)
        .rev()
        .map(|i| retarget(&text, &format!("pkg{:02}/properorder.go", i)))
        .collect();

    let parallel = engine().check(&files);
    let sequential = engine().check_sequential(&files);
    assert_eq!(parallel, sequential);
    assert_eq!(parallel.diagnostics.len(), 32 * 8);

    let positions: Vec<_> = parallel.diagnostics.iter().map(|d| d.position.clone()).collect();
    let mut sorted = positions.clone();
    sorted.sort();
    assert_eq!(positions, sorted);
    assert_eq!(parallel.diagnostics[0].position.file, "pkg00/properorder.go");
}

/// Reparse the reference document under another file path.
fn retarget(text: &str, path: &str) -> SourceFile {
    let text = text.replace("\"src/properorder.go\"", &format!("\"{}\"", path));
    properorder_core::stream::parse_document(&text, path).unwrap().remove(0)
}
