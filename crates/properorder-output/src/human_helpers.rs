use properorder_core::types::Diagnostic;

pub(crate) fn format_diagnostic_human(d: &Diagnostic) -> String {
    format!(
        "warning[{}]: {}\n  --> {}\n",
        d.check, d.message, d.position,
    )
}
