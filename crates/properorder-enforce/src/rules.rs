//! The ordering rules, as pure functions of an anchor declaration and the
//! declaration being visited. Stack handling lives in the validator.

use properorder_core::types::{Declaration, FunctionDecl, MethodDecl, Position, TypeDecl, TypeRef};

use crate::prefixes::ConstructorPrefixes;

/// Every ordering violation the validator can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderRule {
    /// A constructor directly above the type it builds.
    ConstructorBeforeType,
    /// A method under a type declaration of another type.
    MethodUnderForeignType,
    /// A constructor under a type declaration of another type.
    ConstructorUnderForeignType,
    /// A bare helper splitting a run of methods of one type.
    HelperInsideMethodBlock,
    /// A bare helper between a constructor and the methods of its type.
    HelperInsideConstructorBlock,
    /// A method directly above the constructor of its type.
    MethodAboveConstructor,
    /// A method following a method of another type.
    MethodAfterForeignMethod,
    /// A method following a function that returns another type.
    MethodAfterForeignResult,
}

impl OrderRule {
    /// The exact diagnostic text.
    pub fn message(&self) -> &'static str {
        match self {
            OrderRule::ConstructorBeforeType => {
                "the constructor must be positioned after the type is defined."
            }
            OrderRule::MethodUnderForeignType => {
                "the method has a different type than the declared type above."
            }
            OrderRule::ConstructorUnderForeignType => {
                "the return value of the function has a different type than the declared type above."
            }
            OrderRule::HelperInsideMethodBlock => {
                "the function is located inside a block of consecutive methods."
            }
            OrderRule::HelperInsideConstructorBlock => {
                "the function is located inside the constructor and method block."
            }
            OrderRule::MethodAboveConstructor => {
                "the method must be located below the constructor function."
            }
            OrderRule::MethodAfterForeignMethod => {
                "the method has a different type than the method above."
            }
            OrderRule::MethodAfterForeignResult => {
                "the method has a different type than the return value of the function above."
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderRule::ConstructorBeforeType => "constructor_before_type",
            OrderRule::MethodUnderForeignType => "method_under_foreign_type",
            OrderRule::ConstructorUnderForeignType => "constructor_under_foreign_type",
            OrderRule::HelperInsideMethodBlock => "helper_inside_method_block",
            OrderRule::HelperInsideConstructorBlock => "helper_inside_constructor_block",
            OrderRule::MethodAboveConstructor => "method_above_constructor",
            OrderRule::MethodAfterForeignMethod => "method_after_foreign_method",
            OrderRule::MethodAfterForeignResult => "method_after_foreign_result",
        }
    }
}

impl std::fmt::Display for OrderRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A rule that fired, and where to report it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub rule: OrderRule,
    pub position: Position,
}

impl Violation {
    fn at(rule: OrderRule, position: &Position) -> Self {
        Self {
            rule,
            position: position.clone(),
        }
    }
}

/// A free function with no result.
pub fn is_bare_helper(decl: &Declaration) -> bool {
    matches!(decl, Declaration::Function(f) if f.result.is_none())
}

/// The result of a free function, if it has one and its name marks it as a
/// constructor.
pub fn constructor_result<'a>(
    f: &'a FunctionDecl,
    prefixes: &ConstructorPrefixes,
) -> Option<&'a TypeRef> {
    f.result.as_ref().filter(|_| prefixes.matches(&f.name))
}

/// True for declarations that start a fresh grouping: constructors.
pub fn is_constructor(decl: &Declaration, prefixes: &ConstructorPrefixes) -> bool {
    matches!(decl, Declaration::Function(f) if constructor_result(f, prefixes).is_some())
}

/// A type declared right below its own constructor.
pub fn type_after_constructor(
    prev: &Declaration,
    ty: &TypeDecl,
    prefixes: &ConstructorPrefixes,
) -> Option<Violation> {
    let Declaration::Function(f) = prev else {
        return None;
    };
    let result = constructor_result(f, prefixes)?;
    (result.id == ty.id).then(|| Violation::at(OrderRule::ConstructorBeforeType, &result.position))
}

/// A function right below a type declaration.
///
/// Functions that take the type as a parameter are exempt.
pub fn function_after_type(
    ty: &TypeDecl,
    next: &Declaration,
    prefixes: &ConstructorPrefixes,
) -> Option<Violation> {
    match next {
        Declaration::Type(_) => None,
        Declaration::Method(m) => {
            if m.params.contains(&ty.id) || m.receiver.id == ty.id {
                return None;
            }
            Some(Violation::at(
                OrderRule::MethodUnderForeignType,
                &m.receiver.position,
            ))
        }
        Declaration::Function(f) => {
            if f.params.contains(&ty.id) {
                return None;
            }
            let result = constructor_result(f, prefixes)?;
            (result.id != ty.id)
                .then(|| Violation::at(OrderRule::ConstructorUnderForeignType, &result.position))
        }
    }
}

/// A bare helper sitting between `anchor` (the nearest non-helper above it)
/// and `next`.
pub fn helper_inside_block(
    helper: &Declaration,
    anchor: &Declaration,
    next: &Declaration,
    prefixes: &ConstructorPrefixes,
) -> Option<Violation> {
    let Declaration::Method(next) = next else {
        return None;
    };
    match anchor {
        Declaration::Method(a) => (a.receiver.id == next.receiver.id).then(|| {
            Violation::at(OrderRule::HelperInsideMethodBlock, helper.position())
        }),
        Declaration::Function(a) => {
            let result = constructor_result(a, prefixes)?;
            (result.id == next.receiver.id).then(|| {
                Violation::at(OrderRule::HelperInsideConstructorBlock, helper.position())
            })
        }
        Declaration::Type(_) => None,
    }
}

/// A constructor right below a method of the type it builds.
pub fn method_above_constructor(
    prev: &MethodDecl,
    next: &FunctionDecl,
    prefixes: &ConstructorPrefixes,
) -> Option<Violation> {
    let result = constructor_result(next, prefixes)?;
    (result.id == prev.receiver.id)
        .then(|| Violation::at(OrderRule::MethodAboveConstructor, &prev.receiver.position))
}

/// A method whose receiver differs from the method or function result above.
pub fn receiver_consistency(prev: &Declaration, next: &MethodDecl) -> Option<Violation> {
    let expected = match prev {
        Declaration::Method(p) => {
            return (p.receiver.id != next.receiver.id).then(|| {
                Violation::at(OrderRule::MethodAfterForeignMethod, &next.receiver.position)
            });
        }
        Declaration::Function(p) => p.result.as_ref()?,
        Declaration::Type(_) => return None,
    };
    (expected.id != next.receiver.id)
        .then(|| Violation::at(OrderRule::MethodAfterForeignResult, &next.receiver.position))
}
