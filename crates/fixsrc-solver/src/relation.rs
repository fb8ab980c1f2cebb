//! Type relations used to match a declared fixture against a parameter.
//!
//! - identity: structural equality of two references (Edition A).
//! - assignability: the fixture, or one of its supertypes, has the
//!   parameter's identity with compatible generic arguments (Edition B).
//!
//! Generic arguments are compared invariantly, except that an unbound type
//! parameter on either side unifies with anything. That is what lets an open
//! `ICollectionFixture<Fixture<T>>` declared on `TestCollection<T>` serve a
//! `Fixture<int>` parameter.

use crate::edition::GenericMatchMode;
use crate::instantiate::Substitution;
use fixsrc_binder::{SymbolGraph, SymbolId, TypeRef};
use fixsrc_common::limits::MAX_RELATION_DEPTH;
use rustc_hash::FxHashSet;
use std::collections::VecDeque;
use tracing::trace;

#[derive(Clone, Copy)]
pub struct TypeRelation<'g> {
    graph: &'g SymbolGraph,
}

impl<'g> TypeRelation<'g> {
    pub fn new(graph: &'g SymbolGraph) -> Self {
        Self { graph }
    }

    /// Whether a fixture of type `fixture` can be passed to a parameter of
    /// type `target` under `mode`.
    pub fn matches(&self, fixture: &TypeRef, target: &TypeRef, mode: GenericMatchMode) -> bool {
        match mode {
            GenericMatchMode::Invariant => is_identical(fixture, target),
            GenericMatchMode::Covariant => self.is_assignable(fixture, target),
        }
    }

    pub fn is_assignable(&self, source: &TypeRef, target: &TypeRef) -> bool {
        let TypeRef::Named { symbol: target_symbol, .. } = target else {
            return true;
        };
        if *target_symbol == SymbolId::OBJECT || source.is_param() {
            return true;
        }
        self.supertypes(source)
            .iter()
            .any(|candidate| unifies(candidate, target))
    }

    /// `source` and every type it derives from or implements, transitively,
    /// instantiated in `source`'s terms. Breadth-first, `source` first.
    pub fn supertypes(&self, source: &TypeRef) -> Vec<TypeRef> {
        let mut seen = FxHashSet::default();
        let mut out = Vec::new();
        let mut queue = VecDeque::from([(source.clone(), 0u32)]);

        while let Some((ty, depth)) = queue.pop_front() {
            if !seen.insert(ty.clone()) {
                continue;
            }
            out.push(ty.clone());
            if depth >= MAX_RELATION_DEPTH {
                trace!(ty = %self.graph.format_type(&ty), "supertype walk depth limit");
                continue;
            }
            let Some(descriptor) = ty.symbol().and_then(|s| self.graph.get(s)) else {
                continue;
            };
            let substitution = Substitution::new(&descriptor.type_params, ty.args());
            for parent in descriptor.base.iter().chain(&descriptor.interfaces) {
                queue.push_back((substitution.apply(parent), depth + 1));
            }
        }

        out
    }
}

/// Structural equality; type parameters are equal only to themselves.
pub fn is_identical(a: &TypeRef, b: &TypeRef) -> bool {
    a == b
}

/// Equality where an unbound type parameter on either side matches anything.
pub fn unifies(a: &TypeRef, b: &TypeRef) -> bool {
    match (a, b) {
        (TypeRef::Param(_), _) | (_, TypeRef::Param(_)) => true,
        (
            TypeRef::Named { symbol: sa, args: aa },
            TypeRef::Named { symbol: sb, args: ab },
        ) => sa == sb && aa.len() == ab.len() && aa.iter().zip(ab).all(|(x, y)| unifies(x, y)),
    }
}

#[cfg(test)]
#[path = "../tests/relation_tests.rs"]
mod tests;
