use serde::{Deserialize, Serialize};

/// A location in a source file. Lines and columns are 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub file: String,
    pub line: u32,
    pub column: u32,
}

impl Position {
    pub fn new(file: impl Into<String>, line: u32, column: u32) -> Self {
        Self {
            file: file.into(),
            line,
            column,
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}:{}", self.file, self.line, self.column)
    }
}

/// Identity of a named type with pointer/reference indirection stripped.
///
/// Two identities are equal iff they denote the same named type, so `*Stack`,
/// `&Stack` and `Stack` all compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeId(String);

impl TypeId {
    /// Build an identity from a type spelling as written at the use site.
    pub fn from_spelling(spelling: &str) -> Self {
        let mut rest = spelling.trim();
        loop {
            if let Some(r) = rest.strip_prefix('*') {
                rest = r.trim_start();
            } else if let Some(r) = rest.strip_prefix('&') {
                let r = r.trim_start();
                rest = r.strip_prefix("mut ").unwrap_or(r).trim_start();
            } else {
                break;
            }
        }
        TypeId(rest.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Display for TypeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A type used at a specific position (a receiver or a result).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeRef {
    pub id: TypeId,
    pub position: Position,
}

impl TypeRef {
    pub fn new(spelling: &str, position: Position) -> Self {
        Self {
            id: TypeId::from_spelling(spelling),
            position,
        }
    }
}

/// `type Name ...`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDecl {
    pub name: String,
    pub id: TypeId,
    pub position: Position,
}

impl TypeDecl {
    pub fn new(name: impl Into<String>, position: Position) -> Self {
        let name = name.into();
        Self {
            id: TypeId::from_spelling(&name),
            name,
            position,
        }
    }
}

/// A free function: no receiver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionDecl {
    pub name: String,
    pub position: Position,
    /// First declared result only; later results are never consulted.
    pub result: Option<TypeRef>,
    pub params: Vec<TypeId>,
}

impl FunctionDecl {
    pub fn new(name: impl Into<String>, position: Position) -> Self {
        Self {
            name: name.into(),
            position,
            result: None,
            params: Vec::new(),
        }
    }

    pub fn returning(mut self, result: TypeRef) -> Self {
        self.result = Some(result);
        self
    }

    pub fn with_params<I, S>(mut self, params: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.params = params
            .into_iter()
            .map(|p| TypeId::from_spelling(p.as_ref()))
            .collect();
        self
    }
}

/// A function bound to a named type through its receiver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodDecl {
    pub name: String,
    pub position: Position,
    pub receiver: TypeRef,
    pub result: Option<TypeRef>,
    pub params: Vec<TypeId>,
}

impl MethodDecl {
    pub fn new(name: impl Into<String>, position: Position, receiver: TypeRef) -> Self {
        Self {
            name: name.into(),
            position,
            receiver,
            result: None,
            params: Vec::new(),
        }
    }

    pub fn returning(mut self, result: TypeRef) -> Self {
        self.result = Some(result);
        self
    }

    pub fn with_params<I, S>(mut self, params: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.params = params
            .into_iter()
            .map(|p| TypeId::from_spelling(p.as_ref()))
            .collect();
        self
    }
}

/// Kinds of top-level declarations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeclKind {
    Type,
    Function,
    Method,
}

impl DeclKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeclKind::Type => "type",
            DeclKind::Function => "function",
            DeclKind::Method => "method",
        }
    }
}

impl std::fmt::Display for DeclKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One top-level declaration, in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Declaration {
    Type(TypeDecl),
    Function(FunctionDecl),
    Method(MethodDecl),
}

impl Declaration {
    pub fn kind(&self) -> DeclKind {
        match self {
            Declaration::Type(_) => DeclKind::Type,
            Declaration::Function(_) => DeclKind::Function,
            Declaration::Method(_) => DeclKind::Method,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Declaration::Type(t) => &t.name,
            Declaration::Function(f) => &f.name,
            Declaration::Method(m) => &m.name,
        }
    }

    pub fn position(&self) -> &Position {
        match self {
            Declaration::Type(t) => &t.position,
            Declaration::Function(f) => &f.position,
            Declaration::Method(m) => &m.position,
        }
    }

    pub fn file(&self) -> &str {
        &self.position().file
    }
}

impl From<TypeDecl> for Declaration {
    fn from(t: TypeDecl) -> Self {
        Declaration::Type(t)
    }
}

impl From<FunctionDecl> for Declaration {
    fn from(f: FunctionDecl) -> Self {
        Declaration::Function(f)
    }
}

impl From<MethodDecl> for Declaration {
    fn from(m: MethodDecl) -> Self {
        Declaration::Method(m)
    }
}

/// An expected diagnostic attached to a declaration in a fixture stream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expectation {
    pub position: Position,
    pub pattern: String,
}

/// All declarations of one file, in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceFile {
    pub path: String,
    pub declarations: Vec<Declaration>,
    pub expectations: Vec<Expectation>,
}

impl SourceFile {
    pub fn new(path: impl Into<String>, declarations: Vec<Declaration>) -> Self {
        Self {
            path: path.into(),
            declarations,
            expectations: Vec::new(),
        }
    }
}

/// An advisory finding produced by a check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub check: String,
    pub position: Position,
    pub message: String,
}

/// Errors that can occur while loading declaration streams.
#[derive(Debug, thiserror::Error)]
pub enum StreamError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decode {path}: {source}")]
    Decode {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("path not found: {0}")]
    NotFound(String),

    #[error("invalid ignore pattern {pattern:?}: {message}")]
    InvalidPattern { pattern: String, message: String },
}
