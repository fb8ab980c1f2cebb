//! Hierarchy Walker
//!
//! Resolves the single-inheritance chain of a type and the capabilities it
//! exposes through that chain. Descriptors only record what their own
//! declaration says, so everything inherited is computed here, with generic
//! arguments pushed down from the leaf:
//!
//! ```text
//! TestClass : TestContext<int>        subst {}
//!   TestContext<T> : Base<T>          subst {T -> int}
//!     Base<U>                         subst {U -> int}
//! ```
//!
//! The chain is assumed acyclic. A visited set and `MAX_HIERARCHY_DEPTH`
//! keep the walk finite when that assumption does not hold.

use crate::instantiate::Substitution;
use fixsrc_binder::{CapabilityInterface, SymbolGraph, SymbolId, TypeDescriptor, TypeFlags};
use fixsrc_common::Atom;
use fixsrc_common::limits::MAX_HIERARCHY_DEPTH;
use indexmap::IndexSet;
use rustc_hash::{FxBuildHasher, FxHashSet};
use smallvec::SmallVec;
use tracing::debug;

/// Capabilities in stable leaf-first order, deduplicated by value.
pub type CapabilitySet = IndexSet<CapabilityInterface, FxBuildHasher>;

/// One element of an ancestor chain.
#[derive(Clone, Debug)]
pub struct ChainElement<'g> {
    pub ty: &'g TypeDescriptor,
    /// Maps this element's type parameters to arguments in the leaf's terms.
    pub substitution: Substitution,
}

/// Ancestors of a type, leaf first.
#[derive(Clone, Debug, Default)]
pub struct AncestorChain<'g> {
    elements: SmallVec<[ChainElement<'g>; 4]>,
    truncated: bool,
}

impl<'g> AncestorChain<'g> {
    pub fn iter(&self) -> impl Iterator<Item = &ChainElement<'g>> {
        self.elements.iter()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn leaf(&self) -> Option<&'g TypeDescriptor> {
        self.elements.first().map(|e| e.ty)
    }

    pub fn symbols(&self) -> impl Iterator<Item = SymbolId> + '_ {
        self.elements.iter().map(|e| e.ty.id)
    }

    /// True when the walk stopped on a cycle or at the depth limit.
    pub fn is_truncated(&self) -> bool {
        self.truncated
    }
}

#[derive(Clone, Copy)]
pub struct HierarchyWalker<'g> {
    graph: &'g SymbolGraph,
}

impl<'g> HierarchyWalker<'g> {
    pub fn new(graph: &'g SymbolGraph) -> Self {
        Self { graph }
    }

    pub fn graph(&self) -> &'g SymbolGraph {
        self.graph
    }

    /// The chain starting at `id` and following `base` until none remains.
    /// Empty when `id` is not in the graph.
    pub fn ancestor_chain(&self, id: SymbolId) -> AncestorChain<'g> {
        let mut chain = AncestorChain::default();
        let mut visited = FxHashSet::default();
        let mut next = self
            .graph
            .get(id)
            .map(|ty| (ty, Substitution::identity()));

        while let Some((ty, substitution)) = next.take() {
            if !visited.insert(ty.id) {
                debug!(
                    leaf = self.graph.symbol_name(id),
                    at = self.graph.symbol_name(ty.id),
                    "cyclic base chain"
                );
                chain.truncated = true;
                break;
            }
            if chain.elements.len() >= MAX_HIERARCHY_DEPTH {
                debug!(
                    leaf = self.graph.symbol_name(id),
                    depth = MAX_HIERARCHY_DEPTH,
                    "base chain exceeds depth limit"
                );
                chain.truncated = true;
                break;
            }

            next = ty.base.as_ref().and_then(|written| {
                let base = substitution.apply(written);
                let base_ty = self.graph.get(base.symbol()?)?;
                Some((base_ty, Substitution::new(&base_ty.type_params, base.args())))
            });
            chain.elements.push(ChainElement { ty, substitution });
        }

        chain
    }

    /// Every capability declared anywhere in the chain of `id`, with fixture
    /// types instantiated in the leaf's terms.
    pub fn flattened_capabilities(&self, id: SymbolId) -> CapabilitySet {
        let mut set = CapabilitySet::default();
        for element in self.ancestor_chain(id).iter() {
            for cap in &element.ty.capabilities {
                set.insert(CapabilityInterface {
                    kind: cap.kind,
                    fixture: element.substitution.apply(&cap.fixture),
                });
            }
        }
        set
    }

    /// Group membership of the first chain element that declares one.
    pub fn nearest_group_membership(&self, id: SymbolId) -> Option<Atom> {
        self.ancestor_chain(id)
            .iter()
            .find_map(|element| element.ty.group_membership)
    }

    /// A concrete class whose chain declares at least one test method.
    pub fn is_test_class(&self, id: SymbolId) -> bool {
        let Some(ty) = self.graph.get(id) else {
            return false;
        };
        if ty
            .flags
            .intersects(TypeFlags::ABSTRACT | TypeFlags::INTERFACE | TypeFlags::EXTERNAL)
        {
            return false;
        }
        self.ancestor_chain(id)
            .iter()
            .any(|element| element.ty.declares_tests())
    }

    /// Test classes of the analysis unit, in declaration order.
    pub fn test_classes(self) -> impl Iterator<Item = &'g TypeDescriptor> + 'g {
        self.graph
            .declarations()
            .filter(move |ty| self.is_test_class(ty.id))
    }
}

#[cfg(test)]
#[path = "../tests/hierarchy_tests.rs"]
mod tests;
