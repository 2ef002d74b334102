use std::collections::HashSet;
use std::sync::Arc;

use properorder_core::config::ProperOrderConfig;
use properorder_core::types::{Diagnostic, SourceFile};
use rayon::prelude::*;

use crate::check::Check;
use crate::registry::{Registry, RegistryError};
use crate::sink::sort_diagnostics;
use crate::types::CheckReport;

/// Runs the enabled checks over many files.
///
/// Files are independent: each one is checked on its own with fresh check
/// state, in parallel, and the merged diagnostics are sorted by file and
/// position so the report does not depend on scheduling.
pub struct EnforcementEngine {
    checks: Vec<Arc<dyn Check>>,
}

impl EnforcementEngine {
    pub fn new(checks: Vec<Arc<dyn Check>>) -> Self {
        Self { checks }
    }

    /// Create an engine with the checks a config enables.
    pub fn with_config(
        registry: &Registry,
        config: &ProperOrderConfig,
    ) -> Result<Self, RegistryError> {
        Ok(Self::new(registry.enabled(config.checks.as_ref())?))
    }

    pub fn check_names(&self) -> Vec<String> {
        self.checks.iter().map(|c| c.name().to_string()).collect()
    }

    /// Check every file, in parallel.
    pub fn check(&self, files: &[SourceFile]) -> CheckReport {
        let per_file: Vec<Vec<Diagnostic>> = files.par_iter().map(|f| self.check_one(f)).collect();
        self.report(files, per_file)
    }

    /// Check every file on the calling thread.
    pub fn check_sequential(&self, files: &[SourceFile]) -> CheckReport {
        let per_file: Vec<Vec<Diagnostic>> = files.iter().map(|f| self.check_one(f)).collect();
        self.report(files, per_file)
    }

    fn check_one(&self, file: &SourceFile) -> Vec<Diagnostic> {
        let mut sink: Vec<Diagnostic> = Vec::new();
        for check in &self.checks {
            check.check_file(file, &mut sink);
        }
        tracing::debug!(
            file = %file.path,
            declarations = file.declarations.len(),
            diagnostics = sink.len(),
            "checked file"
        );
        sink
    }

    fn report(&self, files: &[SourceFile], per_file: Vec<Vec<Diagnostic>>) -> CheckReport {
        let mut diagnostics: Vec<Diagnostic> = per_file.into_iter().flatten().collect();
        sort_diagnostics(&mut diagnostics);

        // First-seen order; a path named by several documents counts once.
        let mut seen = HashSet::new();
        let files_analyzed: Vec<String> = files
            .iter()
            .filter(|f| seen.insert(f.path.as_str()))
            .map(|f| f.path.clone())
            .collect();

        tracing::info!(
            files = files_analyzed.len(),
            diagnostics = diagnostics.len(),
            "check complete"
        );

        CheckReport {
            version: env!("CARGO_PKG_VERSION").to_string(),
            command: "check".to_string(),
            status: if diagnostics.is_empty() { "ok" } else { "warning" }.to_string(),
            checks: self.check_names(),
            files_analyzed,
            diagnostics,
        }
    }
}
