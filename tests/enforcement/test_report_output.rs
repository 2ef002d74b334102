// Tests for rendering engine reports through the output formatters.

use properorder_enforce::engine::EnforcementEngine;
use properorder_enforce::registry::Registry;
use properorder_enforce::types::CheckReport;
use properorder_output::human::HumanFormatter;
use properorder_output::json::JsonFormatter;
use properorder_output::OutputFormatter;

use super::common;

fn fixture_report() -> CheckReport {
    let engine = EnforcementEngine::new(Registry::builtin().enabled(None).unwrap());
    engine.check(&common::load_fixture("streams"))
}

#[test]
/// The JSON rendering of a real report decodes back to the same report.
fn test_json_output_preserves_report() {
    let report = fixture_report();
    let out = JsonFormatter.format_check(&report);
    let back: CheckReport = serde_json::from_str(&out).unwrap();
    assert_eq!(back, report);
}

#[test]
/// The human rendering lists every diagnostic with its position and a
/// summary counting only files with findings.
fn test_human_output_lists_every_diagnostic() {
    let report = fixture_report();
    let out = HumanFormatter.format_check(&report);
    for d in &report.diagnostics {
        assert!(out.contains(&format!("--> {}\n", d.position)), "missing {}", d.position);
    }
    assert!(out.ends_with("\n8 warning(s) in 1 of 2 file(s)\n"), "{}", out);
}

#[test]
/// A clean report renders to nothing in human form.
fn test_human_output_clean_report_is_empty() {
    let engine = EnforcementEngine::new(Registry::builtin().enabled(None).unwrap());
    let report = engine.check(&common::load_fixture("streams/clean.decls.json"));
    assert!(HumanFormatter.format_check(&report).is_empty());
}
