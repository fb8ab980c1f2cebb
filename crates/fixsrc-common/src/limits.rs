//! Centralized limits and thresholds for the fixture analyzer.
//!
//! The symbol graph promises acyclic, finite base chains. The walkers still
//! carry a visited set and a depth bound so that a malformed graph ends the
//! walk early instead of looping forever.

/// Maximum number of elements in one ancestor chain.
///
/// Real test hierarchies are a handful of levels deep; reaching this bound
/// means the graph is malformed and the chain is truncated.
pub const MAX_HIERARCHY_DEPTH: usize = 256;

/// Maximum depth of nested supertype exploration during an assignability
/// check (base chain plus implemented interfaces, transitively).
pub const MAX_RELATION_DEPTH: u32 = 64;

/// Maximum nesting of generic arguments accepted by the type-reference parser.
///
/// ```text
/// Fixture<List<Map<string, Fixture<int>>>>   // depth 4
/// ```
pub const MAX_TYPE_ARGUMENT_DEPTH: u32 = 32;
