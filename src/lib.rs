//! fixsrc: checks that test-class constructor parameters have a fixture source.
//!
//! The workspace is split the way the analysis flows:
//!
//! - [`common`]: interner, positions, diagnostics, limits, framework names
//! - [`binder`]: symbol graph and the JSON interchange format
//! - [`solver`]: hierarchy walking, groups, editions, fixture availability
//! - [`checker`]: the fixture source rule and its diagnostics
//!
//! ```ignore
//! let graph = fixsrc::binder::bind_json(text)?;
//! let check = fixsrc::checker::check_graph(
//!     &graph,
//!     None,
//!     &fixsrc::checker::CheckerOptions::default(),
//!     &fixsrc::checker::CancellationToken::new(),
//! );
//! for diagnostic in &check.diagnostics {
//!     println!("{}: {}", diagnostic.code_string(), diagnostic.message_text);
//! }
//! ```

pub use fixsrc_binder as binder;
pub use fixsrc_checker as checker;
pub use fixsrc_common as common;
pub use fixsrc_solver as solver;

pub mod tracing_config;

pub use fixsrc_binder::{SymbolGraph, bind_json};
pub use fixsrc_checker::{CancellationToken, CheckerOptions, GraphCheck, check_graph};
pub use fixsrc_common::Diagnostic;
pub use fixsrc_solver::{Edition, EditionContext};
