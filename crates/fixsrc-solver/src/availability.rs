//! Fixture Availability Calculator
//!
//! For a test class, the fixture types the host can inject:
//!
//! 1. class-scoped capabilities of the class's own chain;
//! 2. every capability of the chain of the definition of the nearest
//!    declared group (both scopes count there);
//! 3. the edition's process-wide fixtures.
//!
//! Results are deduplicated and keep that order. Group capability sets are
//! memoised per definition type, since many classes share one group.

use crate::edition::EditionContext;
use crate::groups::GroupRegistry;
use crate::hierarchy::HierarchyWalker;
use dashmap::DashMap;
use fixsrc_binder::{CapabilityKind, SymbolGraph, SymbolId, TypeRef};
use indexmap::IndexSet;
use rustc_hash::FxBuildHasher;
use std::sync::Arc;
use tracing::{debug, trace};

/// Fixture types available to one test class, in stable order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AvailableFixtures {
    fixtures: IndexSet<TypeRef, FxBuildHasher>,
}

impl AvailableFixtures {
    pub fn iter(&self) -> impl Iterator<Item = &TypeRef> {
        self.fixtures.iter()
    }

    pub fn contains(&self, ty: &TypeRef) -> bool {
        self.fixtures.contains(ty)
    }

    pub fn len(&self) -> usize {
        self.fixtures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fixtures.is_empty()
    }
}

impl FromIterator<TypeRef> for AvailableFixtures {
    fn from_iter<I: IntoIterator<Item = TypeRef>>(iter: I) -> Self {
        Self {
            fixtures: iter.into_iter().collect(),
        }
    }
}

pub struct AvailabilityCalculator<'g> {
    walker: HierarchyWalker<'g>,
    registry: GroupRegistry<'g>,
    group_cache: DashMap<SymbolId, Arc<[TypeRef]>>,
}

impl<'g> AvailabilityCalculator<'g> {
    pub fn new(graph: &'g SymbolGraph) -> Self {
        Self {
            walker: HierarchyWalker::new(graph),
            registry: GroupRegistry::build(graph),
            group_cache: DashMap::new(),
        }
    }

    pub fn graph(&self) -> &'g SymbolGraph {
        self.walker.graph()
    }

    pub fn walker(&self) -> HierarchyWalker<'g> {
        self.walker
    }

    pub fn registry(&self) -> &GroupRegistry<'g> {
        &self.registry
    }

    pub fn available_capabilities(
        &self,
        test_class: SymbolId,
        edition: &EditionContext,
    ) -> AvailableFixtures {
        let mut fixtures = IndexSet::<TypeRef, FxBuildHasher>::default();

        for cap in self.walker.flattened_capabilities(test_class) {
            if cap.kind == CapabilityKind::ClassScoped {
                fixtures.insert(cap.fixture);
            }
        }

        if let Some(group) = self.walker.nearest_group_membership(test_class) {
            match self.registry.resolve(group) {
                Some(definition) => {
                    fixtures.extend(self.group_fixtures(definition.id).iter().cloned());
                }
                None => debug!(
                    class = self.graph().symbol_name(test_class),
                    group = self.graph().name(group),
                    "collection has no definition"
                ),
            }
        }

        fixtures.extend(edition.process_wide_fixtures.iter().cloned());

        trace!(
            class = self.graph().symbol_name(test_class),
            available = fixtures.len(),
            "computed available fixtures"
        );
        AvailableFixtures { fixtures }
    }

    /// Fixture types of every capability in the chain of a group definition.
    fn group_fixtures(&self, definition: SymbolId) -> Arc<[TypeRef]> {
        if let Some(cached) = self.group_cache.get(&definition) {
            return Arc::clone(&cached);
        }
        let fixtures: IndexSet<TypeRef, FxBuildHasher> = self
            .walker
            .flattened_capabilities(definition)
            .into_iter()
            .map(|cap| cap.fixture)
            .collect();
        let fixtures: Arc<[TypeRef]> = fixtures.into_iter().collect();
        Arc::clone(&self.group_cache.entry(definition).or_insert(fixtures))
    }

    /// Number of group definitions with a memoised capability set.
    pub fn cached_groups(&self) -> usize {
        self.group_cache.len()
    }
}

#[cfg(test)]
#[path = "../tests/availability_tests.rs"]
mod tests;
