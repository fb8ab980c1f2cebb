//! Group Registry: collection name -> collection-definition type.

use fixsrc_binder::{SymbolGraph, SymbolId, TypeDescriptor};
use fixsrc_common::Atom;
use rustc_hash::FxHashMap;
use tracing::{debug, warn};

pub struct GroupRegistry<'g> {
    graph: &'g SymbolGraph,
    definitions: FxHashMap<Atom, SymbolId>,
}

impl<'g> GroupRegistry<'g> {
    /// Collect every type that defines a group. When two types define the
    /// same name the first in declaration order is kept.
    pub fn build(graph: &'g SymbolGraph) -> Self {
        let mut definitions = FxHashMap::default();
        for ty in graph.declarations() {
            let Some(name) = ty.group_definition else {
                continue;
            };
            if let Some(&first) = definitions.get(&name) {
                warn!(
                    group = graph.name(name),
                    kept = graph.symbol_name(first),
                    ignored = graph.symbol_name(ty.id),
                    "duplicate collection definition"
                );
                continue;
            }
            definitions.insert(name, ty.id);
        }
        debug!(groups = definitions.len(), "built group registry");
        Self { graph, definitions }
    }

    /// The definition of `name`; `None` means the group contributes no
    /// capabilities.
    pub fn resolve(&self, name: Atom) -> Option<&'g TypeDescriptor> {
        let id = self.definitions.get(&name)?;
        self.graph.get(*id)
    }

    pub fn resolve_str(&self, name: &str) -> Option<&'g TypeDescriptor> {
        let atom = self.graph.interner().lookup(name)?;
        self.resolve(atom)
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

#[cfg(test)]
#[path = "../tests/groups_tests.rs"]
mod tests;
