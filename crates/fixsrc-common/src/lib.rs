//! Common types and utilities for the fixsrc fixture analyzer.
//!
//! This crate provides foundational types used across all fixsrc crates:
//! - String interning (`Atom`, `Interner`)
//! - Line/character source positions (`Position`, `Range`)
//! - The diagnostic model and message table
//! - Centralized traversal limits
//! - Well-known test framework type names

// String interning for type and parameter names
pub mod interner;
pub use interner::{Atom, Interner};

// Position/Range types for line/column source locations
pub mod position;
pub use position::{Position, Range};

// Centralized limits and thresholds
pub mod limits;

// Names the analyzer recognizes in the symbol graph
pub mod well_known;

pub mod diagnostics;
pub use diagnostics::{Diagnostic, DiagnosticCategory};
