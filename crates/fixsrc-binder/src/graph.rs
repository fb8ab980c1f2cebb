//! The symbol graph for one analysis unit.
//!
//! A `SymbolGraph` owns every `TypeDescriptor` of the unit plus the
//! interner that names them. It is produced by `GraphBuilder` (directly, or
//! through the JSON binder) and is immutable afterwards, so it can be shared
//! by reference across checker threads.

use crate::symbols::{SymbolId, TypeDescriptor, TypeFlags, TypeRef};
use fixsrc_common::well_known::{self, INTRINSIC_TYPES};
use fixsrc_common::{Atom, Interner};
use rustc_hash::FxHashMap;
use std::fmt::Write;
use tracing::trace;

#[derive(Debug)]
pub struct SymbolGraph {
    file: String,
    interner: Interner,
    types: Vec<TypeDescriptor>,
    /// Simple and qualified names to symbols. Locally declared names shadow
    /// the simple names of external types.
    by_name: FxHashMap<Atom, SymbolId>,
    /// Fixture types declared at process (assembly) scope.
    process_fixtures: Vec<TypeRef>,
}

impl SymbolGraph {
    /// Name of the source file the graph was produced from.
    pub fn file(&self) -> &str {
        &self.file
    }

    pub fn interner(&self) -> &Interner {
        &self.interner
    }

    #[inline]
    pub fn get(&self, id: SymbolId) -> Option<&TypeDescriptor> {
        self.types.get(id.index())
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// All descriptors, intrinsics and externals included, in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &TypeDescriptor> {
        self.types.iter()
    }

    /// Types declared by the analysis unit itself, in declaration order.
    pub fn declarations(&self) -> impl Iterator<Item = &TypeDescriptor> {
        self.types
            .iter()
            .filter(|ty| !ty.is_external() && !ty.is_intrinsic())
    }

    /// Look up a type by simple or qualified name.
    pub fn lookup(&self, name: &str) -> Option<SymbolId> {
        let atom = self.interner.lookup(name)?;
        self.by_name.get(&atom).copied()
    }

    /// Look up a type by qualified name only; simple-name aliases are not
    /// consulted, so a local `ITestOutputHelper` never matches a framework name.
    pub fn lookup_qualified(&self, qualified: &str) -> Option<SymbolId> {
        let id = self.lookup(qualified)?;
        let ty = self.get(id)?;
        (self.name(ty.qualified_name) == qualified).then_some(id)
    }

    pub fn name(&self, atom: Atom) -> &str {
        self.interner.resolve(atom)
    }

    /// Simple name of a symbol, or `<unknown>` for an id outside the graph.
    pub fn symbol_name(&self, id: SymbolId) -> &str {
        self.get(id)
            .map(|ty| self.name(ty.name))
            .unwrap_or("<unknown>")
    }

    pub fn process_fixtures(&self) -> &[TypeRef] {
        &self.process_fixtures
    }

    /// Render a type reference the way it would be written: `Fixture<int>`.
    pub fn format_type(&self, ty: &TypeRef) -> String {
        let mut out = String::new();
        self.write_type(&mut out, ty);
        out
    }

    fn write_type(&self, out: &mut String, ty: &TypeRef) {
        match ty {
            TypeRef::Param(name) => out.push_str(self.name(*name)),
            TypeRef::Named { symbol, args } => {
                out.push_str(self.symbol_name(*symbol));
                if !args.is_empty() {
                    out.push('<');
                    for (i, arg) in args.iter().enumerate() {
                        if i > 0 {
                            out.push_str(", ");
                        }
                        self.write_type(out, arg);
                    }
                    out.push('>');
                }
            }
        }
    }

    /// Multi-line dump of the graph, used by `--debug-graph` and in tests.
    pub fn dump(&self) -> String {
        let mut out = String::new();
        for ty in self.declarations() {
            let _ = write!(out, "{}", self.format_type(&ty.self_reference()));
            if let Some(base) = &ty.base {
                let _ = write!(out, " : {}", self.format_type(base));
            }
            out.push('\n');
            for cap in &ty.capabilities {
                let _ = writeln!(out, "  {:?}<{}>", cap.kind, self.format_type(&cap.fixture));
            }
            if let Some(group) = ty.group_membership {
                let _ = writeln!(out, "  member of \"{}\"", self.name(group));
            }
            if let Some(group) = ty.group_definition {
                let _ = writeln!(out, "  defines \"{}\"", self.name(group));
            }
        }
        out
    }
}

/// Incremental construction of a `SymbolGraph`.
///
/// The intrinsic types are declared first, so `SymbolId::OBJECT` and friends
/// are valid in every graph.
pub struct GraphBuilder {
    graph: SymbolGraph,
}

impl GraphBuilder {
    pub fn new(file: impl Into<String>) -> Self {
        let mut interner = Interner::new();
        interner.intern_common();
        let mut builder = GraphBuilder {
            graph: SymbolGraph {
                file: file.into(),
                interner,
                types: Vec::new(),
                by_name: FxHashMap::default(),
                process_fixtures: Vec::new(),
            },
        };
        for name in INTRINSIC_TYPES {
            let atom = builder.intern(name);
            let id = builder.push(atom, atom, TypeFlags::INTRINSIC);
            builder.graph.by_name.insert(atom, id);
        }
        debug_assert_eq!(builder.graph.types.len() as u32, SymbolId::INTRINSIC_COUNT);
        builder
    }

    pub fn intern(&mut self, s: &str) -> Atom {
        self.graph.interner.intern(s)
    }

    pub fn graph(&self) -> &SymbolGraph {
        &self.graph
    }

    fn push(&mut self, name: Atom, qualified_name: Atom, flags: TypeFlags) -> SymbolId {
        let id = SymbolId(self.graph.types.len() as u32);
        self.graph
            .types
            .push(TypeDescriptor::new(id, name, qualified_name, flags));
        id
    }

    /// Declare a framework type by qualified name. Its simple name is
    /// registered too unless something already owns it.
    pub fn declare_external(&mut self, qualified: &str) -> SymbolId {
        if let Some(existing) = self.graph.lookup_qualified(qualified) {
            return existing;
        }
        let qualified_atom = self.intern(qualified);
        let simple_atom = self.intern(well_known::simple_name(qualified));
        let id = self.push(simple_atom, qualified_atom, TypeFlags::EXTERNAL);
        self.graph.by_name.insert(qualified_atom, id);
        self.graph.by_name.entry(simple_atom).or_insert(id);
        trace!(qualified, id = id.0, "declared external type");
        id
    }

    /// Declare a type of the analysis unit. Returns `None` when a local type
    /// with the same name already exists.
    pub fn declare_type(&mut self, name: &str, type_params: &[&str]) -> Option<SymbolId> {
        let atom = self.intern(name);
        if let Some(&existing) = self.graph.by_name.get(&atom)
            && let Some(ty) = self.graph.get(existing)
            && !ty.is_external()
        {
            return None;
        }
        let id = self.push(atom, atom, TypeFlags::empty());
        let params = type_params.iter().map(|p| self.intern(p)).collect();
        if let Some(ty) = self.graph.types.get_mut(id.index()) {
            ty.type_params = params;
        }
        // Local declarations shadow external simple names.
        self.graph.by_name.insert(atom, id);
        Some(id)
    }

    pub fn type_mut(&mut self, id: SymbolId) -> Option<&mut TypeDescriptor> {
        self.graph.types.get_mut(id.index())
    }

    pub fn add_process_fixture(&mut self, fixture: TypeRef) {
        self.graph.process_fixtures.push(fixture);
    }

    pub fn finish(self) -> SymbolGraph {
        self.graph
    }
}

#[cfg(test)]
#[path = "../tests/graph_tests.rs"]
mod tests;
