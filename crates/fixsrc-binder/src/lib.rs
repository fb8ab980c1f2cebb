//! Symbol graph for the fixsrc fixture analyzer.
//!
//! The binder lowers the JSON interchange format emitted by a language
//! front end into an immutable `SymbolGraph`:
//!
//! - `symbols`: `SymbolId`, `TypeRef` and the `TypeDescriptor` node type
//! - `graph`: `SymbolGraph` plus `GraphBuilder` for programmatic construction
//! - `type_syntax`: parser for written type references (`Fixture<int>`)
//! - `source`: serde model of the interchange format
//! - `binder`: name resolution and lowering, with `BindError` reporting

pub mod symbols;
pub use symbols::{
    CapabilityInterface, CapabilityKind, ConstructorDescriptor, ParameterDescriptor, SymbolId,
    TypeDescriptor, TypeFlags, TypeRef,
};

pub mod graph;
pub use graph::{GraphBuilder, SymbolGraph};

pub mod type_syntax;
pub use type_syntax::{TypeSyntax, TypeSyntaxError, parse_type};

pub mod source;
pub use source::GraphSource;

pub mod binder;
pub use binder::{BindError, BindErrors, BinderState, bind_json, bind_source};
