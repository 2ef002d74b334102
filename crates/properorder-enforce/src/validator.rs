use properorder_core::types::{Declaration, Diagnostic};

use crate::prefixes::ConstructorPrefixes;
use crate::rules::{self, Violation};
use crate::sink::DiagnosticSink;

/// Name under which the order validator is registered and reported.
pub const CHECK_NAME: &str = "properorder";

/// Single-pass stack machine checking the relative order of declarations.
///
/// The history stack only ever holds declarations of one file: it is cleared
/// whenever the visited declaration belongs to a different file than the
/// previous one, and whenever a constructor is visited.
#[derive(Debug, Default)]
pub struct OrderValidator {
    prefixes: ConstructorPrefixes,
    stack: Vec<Declaration>,
    current_file: Option<String>,
}

impl OrderValidator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_prefixes(prefixes: ConstructorPrefixes) -> Self {
        Self {
            prefixes,
            ..Self::default()
        }
    }

    /// Declarations currently on the history stack, bottom first.
    pub fn stack(&self) -> &[Declaration] {
        &self.stack
    }

    /// Visit every declaration in order.
    pub fn run<'a, I>(&mut self, declarations: I, sink: &mut dyn DiagnosticSink)
    where
        I: IntoIterator<Item = &'a Declaration>,
    {
        for decl in declarations {
            self.visit(decl, sink);
        }
    }

    /// Check one declaration against the history, then record it.
    pub fn visit(&mut self, decl: &Declaration, sink: &mut dyn DiagnosticSink) {
        if self.current_file.as_deref() != Some(decl.file()) {
            self.stack.clear();
            self.current_file = Some(decl.file().to_string());
        }
        tracing::trace!(kind = %decl.kind(), name = decl.name(), depth = self.stack.len(), "visit");

        match decl {
            Declaration::Type(ty) => {
                let prev = self.stack.last();
                if let Some(v) = prev.and_then(|p| rules::type_after_constructor(p, ty, &self.prefixes)) {
                    // The misplaced constructor must not anchor later rules.
                    self.stack.pop();
                    report(sink, v);
                }
            }
            Declaration::Function(_) | Declaration::Method(_) => {
                if let Some(v) = self.check_function(decl) {
                    report(sink, v);
                }
                if rules::is_constructor(decl, &self.prefixes) {
                    self.stack.clear();
                }
            }
        }

        self.stack.push(decl.clone());
    }

    /// Dispatch on the stack top. First matching rule wins.
    fn check_function(&self, next: &Declaration) -> Option<Violation> {
        let prev = self.stack.last()?;
        match prev {
            Declaration::Type(ty) => rules::function_after_type(ty, next, &self.prefixes),
            Declaration::Function(f) if f.result.is_none() => {
                let anchor = self.anchor_below_helpers()?;
                rules::helper_inside_block(prev, anchor, next, &self.prefixes)
            }
            _ => match (prev, next) {
                (Declaration::Method(m), Declaration::Function(f)) if f.result.is_some() => {
                    rules::method_above_constructor(m, f, &self.prefixes)
                }
                (_, Declaration::Method(m)) => rules::receiver_consistency(prev, m),
                _ => None,
            },
        }
    }

    /// The nearest function or method below the run of bare helpers at the
    /// top of the stack. None if a type declaration or the stack bottom is
    /// reached first.
    fn anchor_below_helpers(&self) -> Option<&Declaration> {
        let found = self
            .stack
            .iter()
            .rev()
            .skip(1)
            .find(|d| !rules::is_bare_helper(d))?;
        match found {
            Declaration::Type(_) => None,
            _ => Some(found),
        }
    }
}

fn report(sink: &mut dyn DiagnosticSink, v: Violation) {
    tracing::debug!(rule = %v.rule, at = %v.position, "order violation");
    sink.report(Diagnostic {
        check: CHECK_NAME.to_string(),
        position: v.position,
        message: v.rule.message().to_string(),
    });
}

#[cfg(test)]
#[path = "validator_tests.rs"]
mod tests;
