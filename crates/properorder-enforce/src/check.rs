use properorder_core::types::SourceFile;

use crate::prefixes::ConstructorPrefixes;
use crate::sink::DiagnosticSink;
use crate::validator::{OrderValidator, CHECK_NAME};

/// A named check that can be enabled or disabled by the host.
pub trait Check: Send + Sync {
    fn name(&self) -> &'static str;
    fn doc(&self) -> &'static str;
    /// Run over one file. Must not keep state between files.
    fn check_file(&self, file: &SourceFile, sink: &mut dyn DiagnosticSink);
}

/// The declaration order check. Each file gets a fresh validator.
#[derive(Debug, Clone, Default)]
pub struct OrderCheck {
    prefixes: ConstructorPrefixes,
}

impl OrderCheck {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_prefixes(prefixes: ConstructorPrefixes) -> Self {
        Self { prefixes }
    }
}

impl Check for OrderCheck {
    fn name(&self) -> &'static str {
        CHECK_NAME
    }

    fn doc(&self) -> &'static str {
        "Checks code style part about the structure of the code in the file"
    }

    fn check_file(&self, file: &SourceFile, sink: &mut dyn DiagnosticSink) {
        let mut validator = OrderValidator::with_prefixes(self.prefixes.clone());
        validator.run(&file.declarations, sink);
    }
}
