//! Fixture availability resolution.
//!
//! Given an immutable `SymbolGraph`, the solver answers two questions for a
//! test class: which fixture types the host can inject into it, and whether
//! a given constructor parameter is one of them.
//!
//! - `hierarchy`: ancestor chains and flattened capabilities
//! - `groups`: collection name to collection definition
//! - `edition`: edition detection and per-edition rules
//! - `relation`: identity and assignability between type references
//! - `availability`: the merged set of available fixtures
//! - `matcher`: per-parameter satisfaction

pub mod instantiate;
pub use instantiate::Substitution;

pub mod hierarchy;
pub use hierarchy::{AncestorChain, CapabilitySet, ChainElement, HierarchyWalker};

pub mod groups;
pub use groups::GroupRegistry;

pub mod edition;
pub use edition::{Edition, EditionContext, GenericMatchMode, ParseEditionError, detect_edition};

pub mod relation;
pub use relation::TypeRelation;

pub mod availability;
pub use availability::{AvailabilityCalculator, AvailableFixtures};

pub mod matcher;
pub use matcher::{ParameterMatcher, Satisfaction};
