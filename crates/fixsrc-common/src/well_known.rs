//! Well-known test framework names.
//!
//! The binder recognizes these names while lowering a symbol graph, and the
//! solver uses the per-edition lists to pick built-in injectable types and to
//! detect which edition of the framework an analysis unit references.

/// Attribute placing a test class in a named collection.
pub const COLLECTION_ATTRIBUTE: &str = "Collection";

/// Attribute naming the type that defines a collection.
pub const COLLECTION_DEFINITION_ATTRIBUTE: &str = "CollectionDefinition";

/// `IClassFixture<T>`: class-scoped fixture capability.
pub const CLASS_FIXTURE_INTERFACE: &str = "IClassFixture";

/// `ICollectionFixture<T>`: collection-scoped fixture capability.
pub const COLLECTION_FIXTURE_INTERFACE: &str = "ICollectionFixture";

/// Intrinsic types that every symbol graph declares.
pub const INTRINSIC_TYPES: &[&str] = &["object", "int", "bool", "string"];

/// The universal supertype.
pub const OBJECT_TYPE: &str = "object";

/// Edition A (xUnit.net v2) runtime types.
pub mod edition_a {
    pub const TEST_OUTPUT_HELPER: &str = "Xunit.Abstractions.ITestOutputHelper";

    /// Types whose presence marks an analysis unit as referencing Edition A.
    pub const MARKERS: &[&str] = &[TEST_OUTPUT_HELPER, "Xunit.Sdk.TestFrameworkDiscoverer"];

    /// Constructor parameter types the host always supplies.
    pub const BUILT_IN_INJECTABLES: &[&str] = &[TEST_OUTPUT_HELPER];
}

/// Edition B (xUnit.net v3) runtime types.
///
/// The built-in set covers every role Edition A's does (test output) and
/// adds the test-context accessor. It names the v3 output helper, not
/// `Xunit.Abstractions.ITestOutputHelper`, which v3 units do not reference.
pub mod edition_b {
    pub const TEST_OUTPUT_HELPER: &str = "Xunit.v3._ITestOutputHelper";
    pub const TEST_CONTEXT_ACCESSOR: &str = "Xunit.ITestContextAccessor";

    /// Types whose presence marks an analysis unit as referencing Edition B.
    pub const MARKERS: &[&str] = &[
        TEST_CONTEXT_ACCESSOR,
        TEST_OUTPUT_HELPER,
        "Xunit.AssemblyFixtureAttribute",
    ];

    /// Constructor parameter types the host always supplies.
    pub const BUILT_IN_INJECTABLES: &[&str] = &[TEST_OUTPUT_HELPER, TEST_CONTEXT_ACCESSOR];
}

/// Last segment of a dotted name: `Xunit.IClassFixture` -> `IClassFixture`.
pub fn simple_name(qualified: &str) -> &str {
    qualified.rsplit('.').next().unwrap_or(qualified)
}

/// Attribute name as written, normalized to its short form:
/// `Xunit.CollectionAttribute` -> `Collection`.
pub fn attribute_name(written: &str) -> &str {
    let name = simple_name(written);
    match name.strip_suffix("Attribute") {
        Some(short) if !short.is_empty() => short,
        _ => name,
    }
}
