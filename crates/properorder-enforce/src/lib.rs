//! Declaration order enforcement for properorder.
//!
//! Validates the relative order of top-level declarations in each file:
//! - a type is declared before its constructor
//! - a constructor precedes the methods of the type it builds
//! - methods of one type form a contiguous block, free of bare helpers
//!
//! The [`validator`] is a single-pass stack machine over a file's
//! declarations; [`rules`] holds the individual ordering rules. The
//! [`registry`] exposes it as the named check `properorder`, and the
//! [`engine`] runs enabled checks over many files in parallel.

pub mod check;
pub mod engine;
pub mod prefixes;
pub mod registry;
pub mod rules;
pub mod sink;
pub mod types;
pub mod validator;
