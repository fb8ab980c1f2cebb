//! Type descriptors: the nodes of the symbol graph.
//!
//! Everything here is plain data. Inheritance is *not* flattened into the
//! descriptors: each descriptor stores only what its own declaration says,
//! and the solver's hierarchy walker resolves the chain.

use bitflags::bitflags;
use fixsrc_common::{Atom, Range};

/// Nominal identity of a declared type.
///
/// Generic types have one `SymbolId` for the definition; instantiations are
/// expressed as `TypeRef::Named` with arguments.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SymbolId(pub u32);

impl SymbolId {
    /// `object`, the universal supertype.
    pub const OBJECT: SymbolId = SymbolId(0);
    pub const INT: SymbolId = SymbolId(1);
    pub const BOOL: SymbolId = SymbolId(2);
    pub const STRING: SymbolId = SymbolId(3);

    /// Number of intrinsic symbols declared before anything else.
    pub const INTRINSIC_COUNT: u32 = 4;

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// A reference to a type as written in a declaration.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum TypeRef {
    /// A nominal type, instantiated with `args` when generic.
    Named { symbol: SymbolId, args: Vec<TypeRef> },
    /// A generic type parameter of the enclosing declaration (`T`).
    Param(Atom),
}

impl TypeRef {
    pub fn named(symbol: SymbolId) -> Self {
        TypeRef::Named {
            symbol,
            args: Vec::new(),
        }
    }

    pub fn generic(symbol: SymbolId, args: Vec<TypeRef>) -> Self {
        TypeRef::Named { symbol, args }
    }

    pub fn object() -> Self {
        Self::named(SymbolId::OBJECT)
    }

    /// The nominal identity, if this is not a bare type parameter.
    pub fn symbol(&self) -> Option<SymbolId> {
        match self {
            TypeRef::Named { symbol, .. } => Some(*symbol),
            TypeRef::Param(_) => None,
        }
    }

    pub fn args(&self) -> &[TypeRef] {
        match self {
            TypeRef::Named { args, .. } => args,
            TypeRef::Param(_) => &[],
        }
    }

    pub fn is_param(&self) -> bool {
        matches!(self, TypeRef::Param(_))
    }

    /// True when a type parameter appears anywhere in the reference
    /// (`Fixture<T>` is open, `Fixture<int>` is closed).
    pub fn is_open(&self) -> bool {
        match self {
            TypeRef::Param(_) => true,
            TypeRef::Named { args, .. } => args.iter().any(TypeRef::is_open),
        }
    }
}

bitflags! {
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
    pub struct TypeFlags: u16 {
        /// Cannot be instantiated; never analyzed as a test class.
        const ABSTRACT = 1 << 0;
        /// Declares at least one test method.
        const HAS_TESTS = 1 << 1;
        /// Declared by a referenced framework assembly, not the analysis unit.
        const EXTERNAL = 1 << 2;
        /// `object`, `int`, `bool`, `string`.
        const INTRINSIC = 1 << 3;
        const INTERFACE = 1 << 4;
    }
}

/// Scope at which a fixture capability is declared.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CapabilityKind {
    /// `IClassFixture<T>`: the fixture is shared by one test class.
    ClassScoped,
    /// `ICollectionFixture<T>`: the fixture is shared by every class in a group.
    CollectionScoped,
}

/// "This type may receive fixture type `fixture`" at scope `kind`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CapabilityInterface {
    pub kind: CapabilityKind,
    pub fixture: TypeRef,
}

impl CapabilityInterface {
    pub fn class_scoped(fixture: TypeRef) -> Self {
        Self {
            kind: CapabilityKind::ClassScoped,
            fixture,
        }
    }

    pub fn collection_scoped(fixture: TypeRef) -> Self {
        Self {
            kind: CapabilityKind::CollectionScoped,
            fixture,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParameterDescriptor {
    pub name: Atom,
    pub declared_type: TypeRef,
    /// A parameter with a default value is always satisfied.
    pub has_default_value: bool,
    pub range: Range,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConstructorDescriptor {
    pub parameters: Vec<ParameterDescriptor>,
    pub range: Range,
}

/// One declared type in the analysis unit.
#[derive(Clone, Debug)]
pub struct TypeDescriptor {
    pub id: SymbolId,
    /// Simple name (`TestClass`).
    pub name: Atom,
    /// Fully qualified name; equal to `name` for types declared in the unit.
    pub qualified_name: Atom,
    pub type_params: Vec<Atom>,
    pub flags: TypeFlags,
    pub base: Option<TypeRef>,
    /// Ordinary implemented interfaces (fixture capabilities excluded).
    pub interfaces: Vec<TypeRef>,
    pub capabilities: Vec<CapabilityInterface>,
    /// `[Collection("name")]` declared directly on this type.
    pub group_membership: Option<Atom>,
    /// `[CollectionDefinition("name")]` declared directly on this type.
    pub group_definition: Option<Atom>,
    pub constructors: Vec<ConstructorDescriptor>,
    pub range: Range,
}

impl TypeDescriptor {
    pub fn new(id: SymbolId, name: Atom, qualified_name: Atom, flags: TypeFlags) -> Self {
        Self {
            id,
            name,
            qualified_name,
            type_params: Vec::new(),
            flags,
            base: None,
            interfaces: Vec::new(),
            capabilities: Vec::new(),
            group_membership: None,
            group_definition: None,
            constructors: Vec::new(),
            range: Range::default(),
        }
    }

    pub fn is_abstract(&self) -> bool {
        self.flags.contains(TypeFlags::ABSTRACT)
    }

    pub fn is_external(&self) -> bool {
        self.flags.contains(TypeFlags::EXTERNAL)
    }

    pub fn is_intrinsic(&self) -> bool {
        self.flags.contains(TypeFlags::INTRINSIC)
    }

    pub fn declares_tests(&self) -> bool {
        self.flags.contains(TypeFlags::HAS_TESTS)
    }

    /// The constructor the host uses: the first one in declaration order.
    pub fn primary_constructor(&self) -> Option<&ConstructorDescriptor> {
        self.constructors.first()
    }

    /// This type used as a reference to itself: `TestCollection<T>` inside
    /// its own declaration.
    pub fn self_reference(&self) -> TypeRef {
        TypeRef::generic(
            self.id,
            self.type_params.iter().copied().map(TypeRef::Param).collect(),
        )
    }
}
