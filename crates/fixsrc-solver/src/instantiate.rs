//! Generic type instantiation.
//!
//! A `Substitution` maps the type parameters of one declaration to
//! arguments. Walking from `TestClass : TestContext<int>` into
//! `TestContext<T>` produces `{T -> int}`, and everything `TestContext`
//! declares is instantiated through it before being compared.

use fixsrc_binder::TypeRef;
use fixsrc_common::Atom;
use smallvec::SmallVec;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Substitution {
    bindings: SmallVec<[(Atom, TypeRef); 2]>,
}

impl Substitution {
    /// The empty substitution: every reference is left as written.
    pub fn identity() -> Self {
        Self::default()
    }

    /// Bind `params` to `args` pairwise. Parameters without an argument
    /// stay unbound.
    pub fn new(params: &[Atom], args: &[TypeRef]) -> Self {
        Self {
            bindings: params.iter().copied().zip(args.iter().cloned()).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    pub fn get(&self, param: Atom) -> Option<&TypeRef> {
        self.bindings
            .iter()
            .find(|(name, _)| *name == param)
            .map(|(_, ty)| ty)
    }

    pub fn apply(&self, ty: &TypeRef) -> TypeRef {
        if self.is_empty() || !ty.is_open() {
            return ty.clone();
        }
        match ty {
            TypeRef::Param(name) => self.get(*name).cloned().unwrap_or_else(|| ty.clone()),
            TypeRef::Named { symbol, args } => TypeRef::Named {
                symbol: *symbol,
                args: args.iter().map(|arg| self.apply(arg)).collect(),
            },
        }
    }
}

#[cfg(test)]
#[path = "../tests/instantiate_tests.rs"]
mod tests;
