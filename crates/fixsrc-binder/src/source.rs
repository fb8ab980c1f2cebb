//! JSON interchange format produced by a language front end.
//!
//! The front end owns parsing; this format carries just enough of each type
//! declaration for fixture analysis. Type references are written as strings
//! (`"ICollectionFixture<Fixture<T>>"`) and resolved by the binder.

use fixsrc_common::Range;
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GraphSource {
    /// Source file the declarations came from; used in diagnostics.
    #[serde(default)]
    pub file: String,
    /// Referenceable framework types, by qualified name.
    #[serde(default)]
    pub references: Vec<String>,
    /// Process-wide (assembly-level) fixture declarations.
    #[serde(default)]
    pub assembly_fixtures: Vec<String>,
    #[serde(default)]
    pub types: Vec<TypeSource>,
}

impl GraphSource {
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeKindSource {
    #[default]
    Class,
    Interface,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TypeSource {
    pub name: String,
    #[serde(default)]
    pub kind: TypeKindSource,
    #[serde(default)]
    pub type_params: Vec<String>,
    #[serde(default, rename = "abstract")]
    pub is_abstract: bool,
    #[serde(default)]
    pub base: Option<String>,
    #[serde(default)]
    pub implements: Vec<String>,
    #[serde(default)]
    pub attributes: Vec<AttributeSource>,
    #[serde(default)]
    pub constructors: Vec<ConstructorSource>,
    #[serde(default)]
    pub test_methods: Vec<String>,
    #[serde(default)]
    pub range: Range,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AttributeSource {
    pub name: String,
    #[serde(default)]
    pub argument: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConstructorSource {
    #[serde(default)]
    pub parameters: Vec<ParameterSource>,
    #[serde(default)]
    pub range: Range,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ParameterSource {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
    #[serde(default)]
    pub has_default: bool,
    #[serde(default)]
    pub range: Range,
}
