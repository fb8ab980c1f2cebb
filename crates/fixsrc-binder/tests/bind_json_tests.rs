//! End-to-end binding of interchange documents through the public API.

use fixsrc_binder::{
    BindError, CapabilityKind, GraphSource, SymbolId, TypeFlags, bind_json, bind_source,
};
use fixsrc_common::{Position, Range};

const COLLECTION_UNIT: &str = r#"{
    "file": "CollectionTests.cs",
    "references": [
        "Xunit.Abstractions.ITestOutputHelper",
        "Xunit.ICollectionFixture",
        "Xunit.CollectionAttribute",
        "Xunit.CollectionDefinitionAttribute"
    ],
    "types": [
        { "name": "Fixture", "type_params": ["T"] },
        {
            "name": "TestCollection",
            "type_params": ["TCollectionFixture"],
            "attributes": [{ "name": "CollectionDefinition", "argument": "test" }],
            "implements": ["ICollectionFixture<Fixture<TCollectionFixture>>"]
        },
        {
            "name": "TestClass",
            "attributes": [{ "name": "Collection", "argument": "test" }],
            "constructors": [{
                "parameters": [
                    {
                        "name": "fixture",
                        "type": "Fixture<int>",
                        "range": { "start": { "line": 11, "character": 21 }, "end": { "line": 11, "character": 41 } }
                    },
                    { "name": "output", "type": "ITestOutputHelper" },
                    { "name": "retries", "type": "int", "has_default": true }
                ]
            }],
            "test_methods": ["TestMethod"],
            "range": { "start": { "line": 9, "character": 0 }, "end": { "line": 15, "character": 1 } }
        }
    ]
}"#;

#[test]
fn binds_collection_unit() {
    let graph = bind_json(COLLECTION_UNIT).expect("binds");
    assert_eq!(graph.file(), "CollectionTests.cs");
    assert_eq!(graph.declarations().count(), 3);

    let output = graph
        .lookup_qualified("Xunit.Abstractions.ITestOutputHelper")
        .expect("reference declared");
    assert!(
        graph
            .get(output)
            .expect("descriptor")
            .flags
            .contains(TypeFlags::EXTERNAL)
    );

    let class = graph
        .lookup("TestClass")
        .and_then(|id| graph.get(id))
        .expect("test class");
    let ctor = class.primary_constructor().expect("constructor");
    let types: Vec<String> = ctor
        .parameters
        .iter()
        .map(|p| graph.format_type(&p.declared_type))
        .collect();
    assert_eq!(types, ["Fixture<int>", "ITestOutputHelper", "int"]);
    assert!(ctor.parameters[2].has_default_value);
    assert_eq!(
        ctor.parameters[0].range,
        Range::new(Position::new(11, 21), Position::new(11, 41))
    );
    assert_eq!(ctor.parameters[2].declared_type.symbol(), Some(SymbolId::INT));

    let coll = graph
        .lookup("TestCollection")
        .and_then(|id| graph.get(id))
        .expect("definition");
    assert_eq!(coll.capabilities[0].kind, CapabilityKind::CollectionScoped);
}

#[test]
fn bind_source_accepts_programmatic_documents() {
    let mut source = GraphSource::from_json(COLLECTION_UNIT).expect("parses");
    source.types.retain(|ty| ty.name != "Fixture");

    let errors = bind_source(&source).expect_err("Fixture removed");
    assert!(
        errors
            .0
            .iter()
            .all(|e| matches!(e, BindError::UnknownType { name, .. } if name == "Fixture"))
    );
    assert_eq!(errors.0.len(), 2);
}

#[test]
fn unknown_fields_are_ignored() {
    let graph = bind_json(
        r#"{ "generator": "roslyn", "types": [{ "name": "A", "docs": "ignored" }] }"#,
    )
    .expect("binds");
    assert!(graph.lookup("A").is_some());
}
