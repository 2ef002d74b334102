use properorder_core::types::Diagnostic;
use serde::{Deserialize, Serialize};

/// Result of one `check` run over a set of files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckReport {
    pub version: String,
    pub command: String,
    pub status: String, // "ok" | "warning"
    pub checks: Vec<String>,
    pub files_analyzed: Vec<String>,
    pub diagnostics: Vec<Diagnostic>,
}

impl CheckReport {
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

/// One entry of the `checks` listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckInfo {
    pub name: String,
    pub doc: String,
    pub enabled: bool,
}
