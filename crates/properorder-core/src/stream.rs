//! Declaration stream documents.
//!
//! The front end hands over already-resolved declarations as JSON:
//!
//! ```json
//! { "files": [ { "path": "stack.go", "declarations": [
//!     { "kind": "type", "name": "Stack", "line": 3, "column": 6 },
//!     { "kind": "function", "name": "NewStack", "line": 5, "column": 1,
//!       "result": { "type": "*Stack", "line": 5, "column": 17 } },
//!     { "kind": "method", "name": "Pop", "line": 9, "column": 1,
//!       "receiver": { "type": "*Stack", "line": 9, "column": 7 } }
//! ] } ] }
//! ```
//!
//! A declaration may carry a `"want"` string: an expected diagnostic used by
//! fixture tests. Everything else about the declaration is positional.

use std::path::{Path, PathBuf};

use globset::{Glob, GlobSet, GlobSetBuilder};
use serde::Deserialize;
use walkdir::WalkDir;

use crate::types::{
    Declaration, Expectation, FunctionDecl, MethodDecl, Position, SourceFile, StreamError,
    TypeDecl, TypeRef,
};

/// File suffix of declaration stream documents found by directory walks.
pub const STREAM_SUFFIX: &str = ".decls.json";

#[derive(Debug, Deserialize)]
struct StreamDocument {
    #[serde(default)]
    files: Vec<RawFile>,
}

#[derive(Debug, Deserialize)]
struct RawFile {
    path: String,
    #[serde(default)]
    declarations: Vec<RawDeclaration>,
}

#[derive(Debug, Deserialize)]
struct RawTypeRef {
    #[serde(rename = "type")]
    spelling: String,
    line: u32,
    #[serde(default = "default_column")]
    column: u32,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum RawDeclaration {
    Type {
        name: String,
        line: u32,
        #[serde(default = "default_column")]
        column: u32,
        #[serde(default)]
        want: Option<String>,
    },
    Function {
        name: String,
        line: u32,
        #[serde(default = "default_column")]
        column: u32,
        #[serde(default)]
        result: Option<RawTypeRef>,
        #[serde(default)]
        params: Vec<String>,
        #[serde(default)]
        want: Option<String>,
    },
    Method {
        name: String,
        line: u32,
        #[serde(default = "default_column")]
        column: u32,
        receiver: RawTypeRef,
        #[serde(default)]
        result: Option<RawTypeRef>,
        #[serde(default)]
        params: Vec<String>,
        #[serde(default)]
        want: Option<String>,
    },
}

fn default_column() -> u32 {
    1
}

/// Resolve a raw type reference. An empty spelling means the front end
/// could not resolve it and is treated as absent.
fn resolve_ref(raw: Option<RawTypeRef>, file: &str) -> Option<TypeRef> {
    let raw = raw?;
    let type_ref = TypeRef::new(&raw.spelling, Position::new(file, raw.line, raw.column));
    if type_ref.id.is_empty() {
        tracing::debug!(file, line = raw.line, "unresolved type reference treated as absent");
        return None;
    }
    Some(type_ref)
}

fn convert_file(raw: RawFile) -> SourceFile {
    let path = raw.path;
    let mut declarations = Vec::with_capacity(raw.declarations.len());
    let mut expectations = Vec::new();

    for decl in raw.declarations {
        let (decl, want): (Declaration, Option<String>) = match decl {
            RawDeclaration::Type {
                name,
                line,
                column,
                want,
            } => (
                TypeDecl::new(name, Position::new(&path, line, column)).into(),
                want,
            ),
            RawDeclaration::Function {
                name,
                line,
                column,
                result,
                params,
                want,
            } => {
                let mut f = FunctionDecl::new(name, Position::new(&path, line, column))
                    .with_params(&params);
                f.result = resolve_ref(result, &path);
                (f.into(), want)
            }
            RawDeclaration::Method {
                name,
                line,
                column,
                receiver,
                result,
                params,
                want,
            } => {
                let position = Position::new(&path, line, column);
                let result = resolve_ref(result, &path);
                match resolve_ref(Some(receiver), &path) {
                    Some(receiver) => {
                        let mut m = MethodDecl::new(name, position, receiver).with_params(&params);
                        m.result = result;
                        (m.into(), want)
                    }
                    None => {
                        // Unresolved receiver: fall back to a free function.
                        let mut f = FunctionDecl::new(name, position).with_params(&params);
                        f.result = result;
                        (Declaration::Function(f), want)
                    }
                }
            }
        };
        if let Some(pattern) = want {
            expectations.push(Expectation {
                position: decl.position().clone(),
                pattern,
            });
        }
        declarations.push(decl);
    }

    SourceFile {
        path,
        declarations,
        expectations,
    }
}

/// Parse a declaration stream document. `origin` names the document in errors.
pub fn parse_document(text: &str, origin: &str) -> Result<Vec<SourceFile>, StreamError> {
    let doc: StreamDocument = serde_json::from_str(text).map_err(|source| StreamError::Decode {
        path: origin.to_string(),
        source,
    })?;
    Ok(doc.files.into_iter().map(convert_file).collect())
}

/// Read and parse one declaration stream document from disk.
pub fn load_document(path: &Path) -> Result<Vec<SourceFile>, StreamError> {
    let origin = path.display().to_string();
    let text = std::fs::read_to_string(path).map_err(|source| StreamError::Io {
        path: origin.clone(),
        source,
    })?;
    parse_document(&text, &origin)
}

/// Compile ignore globs into a matcher.
pub fn build_ignore_set(patterns: &[String]) -> Result<GlobSet, StreamError> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let glob = Glob::new(pattern).map_err(|e| StreamError::InvalidPattern {
            pattern: pattern.clone(),
            message: e.to_string(),
        })?;
        builder.add(glob);
    }
    builder.build().map_err(|e| StreamError::InvalidPattern {
        pattern: patterns.join(","),
        message: e.to_string(),
    })
}

/// Find declaration stream documents under `root`, sorted by path.
///
/// A file path is returned as-is; a directory is walked recursively.
pub fn discover(root: &Path, ignore: &GlobSet) -> Result<Vec<PathBuf>, StreamError> {
    if !root.exists() {
        return Err(StreamError::NotFound(root.display().to_string()));
    }
    if root.is_file() {
        return Ok(vec![root.to_path_buf()]);
    }

    let mut found: Vec<PathBuf> = WalkDir::new(root)
        .follow_links(false)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| e.into_path())
        .filter(|p| {
            p.file_name()
                .and_then(|n| n.to_str())
                .is_some_and(|n| n.ends_with(STREAM_SUFFIX))
        })
        .filter(|p| {
            let rel = p.strip_prefix(root).unwrap_or(p);
            !ignore.is_match(rel)
        })
        .collect();
    found.sort();
    Ok(found)
}

/// Load every source file reachable from `roots`.
///
/// Files from all documents are concatenated in document order.
pub fn load_paths(roots: &[PathBuf], ignore: &GlobSet) -> Result<Vec<SourceFile>, StreamError> {
    let mut files = Vec::new();
    for root in roots {
        for doc in discover(root, ignore)? {
            let loaded = load_document(&doc)?;
            tracing::debug!(document = %doc.display(), files = loaded.len(), "loaded declaration stream");
            files.extend(loaded);
        }
    }
    Ok(files)
}
