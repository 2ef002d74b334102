use properorder_core::types::Diagnostic;

/// Receives diagnostics as checks emit them.
pub trait DiagnosticSink {
    fn report(&mut self, diagnostic: Diagnostic);
}

impl DiagnosticSink for Vec<Diagnostic> {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}

/// Order diagnostics by file, then line, then column.
///
/// The sort is stable: diagnostics at the same position keep emission order.
pub fn sort_diagnostics(diagnostics: &mut [Diagnostic]) {
    diagnostics.sort_by(|a, b| a.position.cmp(&b.position));
}
