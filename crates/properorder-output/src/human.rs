use crate::human_helpers::format_diagnostic_human;
use crate::OutputFormatter;
use properorder_enforce::types::{CheckInfo, CheckReport};

pub struct HumanFormatter;

impl OutputFormatter for HumanFormatter {
    fn format_check(&self, report: &CheckReport) -> String {
        if report.diagnostics.is_empty() {
            return String::new(); // Clean check = empty stdout
        }

        let mut out = String::new();
        for d in &report.diagnostics {
            out.push_str(&format_diagnostic_human(d));
        }

        let files_with_findings = {
            let mut files: Vec<&str> = report
                .diagnostics
                .iter()
                .map(|d| d.position.file.as_str())
                .collect();
            files.dedup();
            files.len()
        };
        out.push_str(&format!(
            "\n{} warning(s) in {} of {} file(s)\n",
            report.diagnostics.len(),
            files_with_findings,
            report.files_analyzed.len(),
        ));
        out
    }

    fn format_checks(&self, checks: &[CheckInfo]) -> String {
        let width = checks.iter().map(|c| c.name.len()).max().unwrap_or(0);
        let mut out = String::new();
        for c in checks {
            let state = if c.enabled { "enabled" } else { "disabled" };
            out.push_str(&format!(
                "{:<width$}  {:<8}  {}\n",
                c.name,
                state,
                c.doc,
                width = width
            ));
        }
        out
    }
}
