//! Parameter Matcher: decides whether one constructor parameter has a source.

use crate::availability::AvailableFixtures;
use crate::edition::EditionContext;
use crate::relation::TypeRelation;
use fixsrc_binder::{ParameterDescriptor, SymbolGraph, TypeRef};

/// Why a parameter is (or is not) satisfied.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Satisfaction {
    /// The parameter has a default value.
    DefaultValue,
    /// The host always supplies this type.
    BuiltIn,
    /// Supplied by this available fixture.
    Fixture(TypeRef),
    Unsatisfied,
}

impl Satisfaction {
    pub fn is_satisfied(&self) -> bool {
        !matches!(self, Satisfaction::Unsatisfied)
    }
}

#[derive(Clone, Copy)]
pub struct ParameterMatcher<'g> {
    relation: TypeRelation<'g>,
}

impl<'g> ParameterMatcher<'g> {
    pub fn new(graph: &'g SymbolGraph) -> Self {
        Self {
            relation: TypeRelation::new(graph),
        }
    }

    pub fn check(
        &self,
        param: &ParameterDescriptor,
        available: &AvailableFixtures,
        edition: &EditionContext,
    ) -> Satisfaction {
        if param.has_default_value {
            return Satisfaction::DefaultValue;
        }
        if edition.is_built_in(&param.declared_type) {
            return Satisfaction::BuiltIn;
        }
        available
            .iter()
            .find(|fixture| {
                self.relation
                    .matches(fixture, &param.declared_type, edition.match_mode)
            })
            .map_or(Satisfaction::Unsatisfied, |fixture| {
                Satisfaction::Fixture(fixture.clone())
            })
    }

    pub fn is_satisfied(
        &self,
        param: &ParameterDescriptor,
        available: &AvailableFixtures,
        edition: &EditionContext,
    ) -> bool {
        self.check(param, available, edition).is_satisfied()
    }
}

#[cfg(test)]
#[path = "../tests/matcher_tests.rs"]
mod tests;
