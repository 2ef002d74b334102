//! Output formatters for properorder command results.
//!
//! Provides two output modes:
//! - **Human** (default): one `file:line:column` block per diagnostic
//! - **JSON** (`--json`): Machine-readable structured output

pub mod human;
pub(crate) mod human_helpers;
pub mod json;

use properorder_enforce::types::{CheckInfo, CheckReport};

pub trait OutputFormatter {
    fn format_check(&self, report: &CheckReport) -> String;
    fn format_checks(&self, checks: &[CheckInfo]) -> String;
}
