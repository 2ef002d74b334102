//! Core types, declaration streams, and configuration for properorder.
//!
//! This crate provides the data consumed by every check:
//! - [`types`]: Declarations, type identities, positions, and diagnostics
//! - [`stream`]: Loading declaration stream documents produced by a front end
//! - [`config`]: Configuration loading from `.properorder/properorder.json`

pub mod config;
pub mod stream;
pub mod types;
