//! Lowering of a `GraphSource` into a `SymbolGraph`.
//!
//! Binding runs in two passes: every type name is declared first, so that
//! declarations can reference each other in any order, then each declaration
//! body (base, interfaces, attributes, constructors) is resolved.
//!
//! Fixture interfaces and collection attributes are turned into explicit
//! descriptor fields here; later stages never look at attribute names.

use crate::graph::{GraphBuilder, SymbolGraph};
use crate::source::{GraphSource, TypeKindSource, TypeSource};
use crate::symbols::{
    CapabilityInterface, CapabilityKind, ConstructorDescriptor, ParameterDescriptor, SymbolId,
    TypeFlags, TypeRef,
};
use crate::type_syntax::{TypeSyntax, TypeSyntaxError, parse_type};
use fixsrc_common::Atom;
use fixsrc_common::well_known::{
    self, CLASS_FIXTURE_INTERFACE, COLLECTION_ATTRIBUTE, COLLECTION_DEFINITION_ATTRIBUTE,
    COLLECTION_FIXTURE_INTERFACE,
};
use std::fmt;
use tracing::{debug, trace};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BindError {
    /// The input was not valid interchange JSON.
    Json { message: String },
    DuplicateType { name: String },
    UnknownType { name: String, context: String },
    ArityMismatch {
        name: String,
        expected: usize,
        found: usize,
        context: String,
    },
    /// A base type must be a nominal type, not a type parameter.
    InvalidBase { base: String, context: String },
    MissingAttributeArgument { attribute: String, context: String },
    Syntax {
        context: String,
        error: TypeSyntaxError,
    },
}

impl fmt::Display for BindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BindError::Json { message } => write!(f, "invalid symbol graph: {message}"),
            BindError::DuplicateType { name } => write!(f, "type '{name}' is declared more than once"),
            BindError::UnknownType { name, context } => {
                write!(f, "unknown type '{name}' referenced from '{context}'")
            }
            BindError::ArityMismatch {
                name,
                expected,
                found,
                context,
            } => write!(
                f,
                "type '{name}' expects {expected} type argument(s) but {found} were given in '{context}'"
            ),
            BindError::InvalidBase { base, context } => {
                write!(f, "'{context}' cannot derive from type parameter '{base}'")
            }
            BindError::MissingAttributeArgument { attribute, context } => {
                write!(f, "attribute '{attribute}' on '{context}' requires a name argument")
            }
            BindError::Syntax { context, error } => write!(f, "{error} in '{context}'"),
        }
    }
}

impl std::error::Error for BindError {}

/// All errors found while binding one graph.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BindErrors(pub Vec<BindError>);

impl fmt::Display for BindErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.0.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{error}")?;
        }
        Ok(())
    }
}

impl std::error::Error for BindErrors {}

/// Parse interchange JSON and bind it.
pub fn bind_json(text: &str) -> Result<SymbolGraph, BindErrors> {
    let source = GraphSource::from_json(text).map_err(|e| {
        BindErrors(vec![BindError::Json {
            message: e.to_string(),
        }])
    })?;
    bind_source(&source)
}

pub fn bind_source(source: &GraphSource) -> Result<SymbolGraph, BindErrors> {
    BinderState::new(source).bind()
}

pub struct BinderState<'s> {
    source: &'s GraphSource,
    builder: GraphBuilder,
    errors: Vec<BindError>,
}

impl<'s> BinderState<'s> {
    pub fn new(source: &'s GraphSource) -> Self {
        Self {
            source,
            builder: GraphBuilder::new(source.file.clone()),
            errors: Vec::new(),
        }
    }

    pub fn bind(mut self) -> Result<SymbolGraph, BindErrors> {
        let source = self.source;
        for reference in &source.references {
            self.builder.declare_external(reference);
        }

        let mut declared = Vec::with_capacity(source.types.len());
        for ty in &source.types {
            let params: Vec<&str> = ty.type_params.iter().map(String::as_str).collect();
            let id = self.builder.declare_type(&ty.name, &params);
            if id.is_none() {
                self.errors.push(BindError::DuplicateType {
                    name: ty.name.clone(),
                });
            }
            declared.push(id);
        }

        for (ty, id) in source.types.iter().zip(declared) {
            if let Some(id) = id {
                self.bind_type(ty, id);
            }
        }

        for written in &source.assembly_fixtures {
            if let Some(fixture) = self.resolve_written(written, &[], "assembly") {
                self.builder.add_process_fixture(fixture);
            }
        }

        debug!(
            file = %source.file,
            types = source.types.len(),
            errors = self.errors.len(),
            "bound symbol graph"
        );

        if self.errors.is_empty() {
            Ok(self.builder.finish())
        } else {
            Err(BindErrors(self.errors))
        }
    }

    fn bind_type(&mut self, source: &TypeSource, id: SymbolId) {
        let context = source.name.as_str();
        let scope: Vec<Atom> = self
            .builder
            .graph()
            .get(id)
            .map(|ty| ty.type_params.clone())
            .unwrap_or_default();

        let mut flags = TypeFlags::empty();
        if source.is_abstract {
            flags |= TypeFlags::ABSTRACT;
        }
        if source.kind == TypeKindSource::Interface {
            flags |= TypeFlags::INTERFACE;
        }
        if !source.test_methods.is_empty() {
            flags |= TypeFlags::HAS_TESTS;
        }

        let base = source.base.as_deref().and_then(|written| {
            let base = self.resolve_written(written, &scope, context)?;
            if base.is_param() {
                self.errors.push(BindError::InvalidBase {
                    base: written.to_string(),
                    context: context.to_string(),
                });
                return None;
            }
            Some(base)
        });

        let mut interfaces = Vec::new();
        let mut capabilities = Vec::new();
        for written in &source.implements {
            let syntax = match parse_type(written) {
                Ok(syntax) => syntax,
                Err(error) => {
                    self.errors.push(BindError::Syntax {
                        context: context.to_string(),
                        error,
                    });
                    continue;
                }
            };
            if let Some(kind) = capability_kind(&syntax) {
                if syntax.args.len() != 1 {
                    self.errors.push(BindError::ArityMismatch {
                        name: syntax.name.clone(),
                        expected: 1,
                        found: syntax.args.len(),
                        context: context.to_string(),
                    });
                    continue;
                }
                if let Some(fixture) = self.resolve_or_report(&syntax.args[0], &scope, context) {
                    capabilities.push(CapabilityInterface { kind, fixture });
                }
            } else if let Some(interface) = self.resolve_or_report(&syntax, &scope, context) {
                interfaces.push(interface);
            }
        }

        let mut group_membership = None;
        let mut group_definition = None;
        for attribute in &source.attributes {
            let name = well_known::attribute_name(&attribute.name);
            let slot = if name == COLLECTION_ATTRIBUTE {
                &mut group_membership
            } else if name == COLLECTION_DEFINITION_ATTRIBUTE {
                &mut group_definition
            } else {
                trace!(attribute = %attribute.name, context, "ignoring attribute");
                continue;
            };
            match &attribute.argument {
                Some(argument) => *slot = Some(self.builder.intern(argument)),
                None => self.errors.push(BindError::MissingAttributeArgument {
                    attribute: name.to_string(),
                    context: context.to_string(),
                }),
            }
        }

        let mut constructors = Vec::with_capacity(source.constructors.len());
        for ctor in &source.constructors {
            let mut parameters = Vec::with_capacity(ctor.parameters.len());
            for param in &ctor.parameters {
                let Some(declared_type) = self.resolve_written(&param.ty, &scope, context) else {
                    continue;
                };
                parameters.push(ParameterDescriptor {
                    name: self.builder.intern(&param.name),
                    declared_type,
                    has_default_value: param.has_default,
                    range: param.range,
                });
            }
            constructors.push(ConstructorDescriptor {
                parameters,
                range: ctor.range,
            });
        }

        if let Some(ty) = self.builder.type_mut(id) {
            ty.flags |= flags;
            ty.base = base;
            ty.interfaces = interfaces;
            ty.capabilities = capabilities;
            ty.group_membership = group_membership;
            ty.group_definition = group_definition;
            ty.constructors = constructors;
            ty.range = source.range;
        }
    }

    fn resolve_written(&mut self, written: &str, scope: &[Atom], context: &str) -> Option<TypeRef> {
        match parse_type(written) {
            Ok(syntax) => self.resolve_or_report(&syntax, scope, context),
            Err(error) => {
                self.errors.push(BindError::Syntax {
                    context: context.to_string(),
                    error,
                });
                None
            }
        }
    }

    fn resolve_or_report(
        &mut self,
        syntax: &TypeSyntax,
        scope: &[Atom],
        context: &str,
    ) -> Option<TypeRef> {
        match self.resolve(syntax, scope, context) {
            Ok(ty) => Some(ty),
            Err(error) => {
                self.errors.push(error);
                None
            }
        }
    }

    /// Resolve syntax to a reference. Type parameters in `scope` win over
    /// declared types of the same name.
    fn resolve(&self, syntax: &TypeSyntax, scope: &[Atom], context: &str) -> Result<TypeRef, BindError> {
        let graph = self.builder.graph();
        if syntax.args.is_empty()
            && let Some(atom) = graph.interner().lookup(&syntax.name)
            && scope.contains(&atom)
        {
            return Ok(TypeRef::Param(atom));
        }

        let Some(id) = graph.lookup(&syntax.name) else {
            return Err(BindError::UnknownType {
                name: syntax.name.clone(),
                context: context.to_string(),
            });
        };

        // Framework types are declared without their parameter lists.
        if let Some(ty) = graph.get(id)
            && !ty.is_external()
            && ty.type_params.len() != syntax.args.len()
        {
            return Err(BindError::ArityMismatch {
                name: syntax.name.clone(),
                expected: ty.type_params.len(),
                found: syntax.args.len(),
                context: context.to_string(),
            });
        }

        let args = syntax
            .args
            .iter()
            .map(|arg| self.resolve(arg, scope, context))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(TypeRef::generic(id, args))
    }
}

fn capability_kind(syntax: &TypeSyntax) -> Option<CapabilityKind> {
    match well_known::simple_name(&syntax.name) {
        CLASS_FIXTURE_INTERFACE => Some(CapabilityKind::ClassScoped),
        COLLECTION_FIXTURE_INTERFACE => Some(CapabilityKind::CollectionScoped),
        _ => None,
    }
}

#[cfg(test)]
#[path = "../tests/binder_tests.rs"]
mod tests;
