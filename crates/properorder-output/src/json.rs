use crate::OutputFormatter;
use properorder_enforce::types::{CheckInfo, CheckReport};

pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format_check(&self, report: &CheckReport) -> String {
        serde_json::to_string_pretty(report).unwrap_or_default()
    }
    fn format_checks(&self, checks: &[CheckInfo]) -> String {
        serde_json::to_string_pretty(checks).unwrap_or_default()
    }
}
