//! Edition Context: the per-framework-edition rules the engine runs under.
//!
//! Edition A (xUnit.net v2) matches fixture types exactly and knows one
//! built-in injectable. Edition B (v3) adds the test-context accessor,
//! assembly-wide fixtures, and assignability-based matching.

use fixsrc_binder::{SymbolGraph, SymbolId, TypeRef};
use fixsrc_common::well_known::{edition_a, edition_b};
use rustc_hash::FxHashSet;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Edition {
    A,
    B,
}

impl Edition {
    pub fn as_str(self) -> &'static str {
        match self {
            Edition::A => "a",
            Edition::B => "b",
        }
    }

    pub fn match_mode(self) -> GenericMatchMode {
        match self {
            Edition::A => GenericMatchMode::Invariant,
            Edition::B => GenericMatchMode::Covariant,
        }
    }

    fn built_in_injectables(self) -> &'static [&'static str] {
        match self {
            Edition::A => edition_a::BUILT_IN_INJECTABLES,
            Edition::B => edition_b::BUILT_IN_INJECTABLES,
        }
    }

    fn markers(self) -> &'static [&'static str] {
        match self {
            Edition::A => edition_a::MARKERS,
            Edition::B => edition_b::MARKERS,
        }
    }
}

impl fmt::Display for Edition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseEditionError(pub String);

impl fmt::Display for ParseEditionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown edition '{}' (expected 'a' or 'b')", self.0)
    }
}

impl std::error::Error for ParseEditionError {}

impl FromStr for Edition {
    type Err = ParseEditionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "a" | "v2" => Ok(Edition::A),
            "b" | "v3" => Ok(Edition::B),
            _ => Err(ParseEditionError(s.to_string())),
        }
    }
}

/// How a declared fixture type is compared against a parameter type.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GenericMatchMode {
    /// Structural identity, generic arguments included.
    Invariant,
    /// Assignability, with unbound type parameters acting as wildcards.
    Covariant,
}

/// Pick the edition from the framework types the unit can reference.
/// Edition B markers take precedence; `None` means the unit does not use
/// the framework and should not be analyzed.
pub fn detect_edition(graph: &SymbolGraph) -> Option<Edition> {
    [Edition::B, Edition::A].into_iter().find(|edition| {
        edition
            .markers()
            .iter()
            .any(|marker| graph.lookup_qualified(marker).is_some())
    })
}

#[derive(Clone, Debug)]
pub struct EditionContext {
    pub edition: Edition,
    /// Parameter types the host always supplies.
    pub built_in_injectables: FxHashSet<SymbolId>,
    /// Process-scope fixtures; empty in Edition A.
    pub process_wide_fixtures: Vec<TypeRef>,
    pub match_mode: GenericMatchMode,
}

impl EditionContext {
    /// Context for `edition`, resolved against the framework types `graph`
    /// references. Built-ins the unit cannot reference are simply absent.
    pub fn for_edition(edition: Edition, graph: &SymbolGraph) -> Self {
        let built_in_injectables = edition
            .built_in_injectables()
            .iter()
            .filter_map(|name| graph.lookup_qualified(name))
            .collect();
        let process_wide_fixtures = match edition {
            Edition::A => Vec::new(),
            Edition::B => graph.process_fixtures().to_vec(),
        };
        if edition == Edition::A && !graph.process_fixtures().is_empty() {
            debug!(
                count = graph.process_fixtures().len(),
                "assembly fixtures ignored under edition a"
            );
        }
        Self {
            edition,
            built_in_injectables,
            process_wide_fixtures,
            match_mode: edition.match_mode(),
        }
    }

    /// Detect the edition and build its context.
    pub fn detect(graph: &SymbolGraph) -> Option<Self> {
        detect_edition(graph).map(|edition| Self::for_edition(edition, graph))
    }

    pub fn is_built_in(&self, ty: &TypeRef) -> bool {
        ty.symbol()
            .is_some_and(|symbol| self.built_in_injectables.contains(&symbol))
    }
}

#[cfg(test)]
#[path = "../tests/edition_tests.rs"]
mod tests;
