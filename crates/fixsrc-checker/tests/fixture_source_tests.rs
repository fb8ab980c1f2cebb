//! Fixture source rule over framework-shaped symbol graphs.

use fixsrc_binder::bind_json;
use fixsrc_checker::{CancellationToken, CheckerOptions, GraphCheck, check_graph};
use fixsrc_common::{DiagnosticCategory, Range};
use fixsrc_solver::Edition;

const V2: &[&str] = &[
    "Xunit.Abstractions.ITestOutputHelper",
    "Xunit.IClassFixture",
    "Xunit.ICollectionFixture",
];
const V3: &[&str] = &[
    "Xunit.v3._ITestOutputHelper",
    "Xunit.ITestContextAccessor",
    "Xunit.AssemblyFixtureAttribute",
    "Xunit.IClassFixture",
    "Xunit.ICollectionFixture",
];

/// Wrap `types` (a JSON array body) into a unit referencing `references`.
fn unit(references: &[&str], assembly_fixtures: &[&str], types: &str) -> String {
    let quote = |items: &[&str]| {
        items
            .iter()
            .map(|r| format!("\"{r}\""))
            .collect::<Vec<_>>()
            .join(", ")
    };
    format!(
        r#"{{ "file": "Tests.cs", "references": [{}], "assembly_fixtures": [{}], "types": [{types}] }}"#,
        quote(references),
        quote(assembly_fixtures)
    )
}

fn check(text: &str) -> GraphCheck {
    let graph = match bind_json(text) {
        Ok(graph) => graph,
        Err(errors) => panic!("bind failed:\n{errors}"),
    };
    check_graph(
        &graph,
        None,
        &CheckerOptions::default(),
        &CancellationToken::new(),
    )
}

fn flagged(check: &GraphCheck) -> Vec<&str> {
    check
        .result
        .findings
        .iter()
        .map(|f| f.parameter_name.as_str())
        .collect()
}

#[test]
fn non_test_class_is_ignored() {
    for refs in [V2, V3] {
        let result = check(&unit(
            refs,
            &[],
            r#"{ "name": "NonTestClass", "constructors": [{ "parameters": [{ "name": "_", "type": "object" }] }] }"#,
        ));
        assert!(result.diagnostics.is_empty());
        assert_eq!(result.result.classes_checked, 0);
    }
}

#[test]
fn missing_source_produces_positioned_diagnostic() {
    let result = check(&unit(
        V2,
        &[],
        r#"{
            "name": "TestClass",
            "constructors": [{ "parameters": [{
                "name": "_",
                "type": "object",
                "range": { "start": { "line": 1, "character": 32 }, "end": { "line": 1, "character": 40 } }
            }] }],
            "test_methods": ["TestMethod"]
        }"#,
    ));
    assert_eq!(result.edition, Some(Edition::A));
    assert_eq!(result.diagnostics.len(), 1);
    let diagnostic = &result.diagnostics[0];
    assert_eq!(diagnostic.code, 1041);
    assert_eq!(diagnostic.code_string(), "FX1041");
    assert_eq!(diagnostic.category, DiagnosticCategory::Error);
    assert_eq!(diagnostic.file, "Tests.cs");
    assert_eq!(diagnostic.range, Range::on_line(1, 32, 40));
    assert_eq!(
        diagnostic.message_text,
        "Fixture argument '_' does not have a fixture source (if it comes from a collection \
         definition, ensure the definition is in the same assembly as the test)"
    );
}

#[test]
fn built_in_injectables_per_edition() {
    let v2 = check(&unit(
        V2,
        &[],
        r#"{
            "name": "TestClass",
            "attributes": [{ "name": "Collection", "argument": "TestCollection" }],
            "constructors": [{ "parameters": [{ "name": "output", "type": "ITestOutputHelper" }] }],
            "test_methods": ["TestMethod"]
        }"#,
    ));
    assert!(v2.diagnostics.is_empty());

    let v3 = check(&unit(
        V3,
        &[],
        r#"{
            "name": "TestClass",
            "constructors": [{ "parameters": [
                { "name": "output", "type": "_ITestOutputHelper" },
                { "name": "accessor", "type": "ITestContextAccessor" }
            ] }],
            "test_methods": ["TestMethod"]
        }"#,
    ));
    assert_eq!(v3.edition, Some(Edition::B));
    assert!(v3.diagnostics.is_empty());
}

#[test]
fn context_accessor_is_not_built_in_for_edition_a() {
    let graph = bind_json(&unit(
        &["Xunit.Abstractions.ITestOutputHelper", "Xunit.ITestContextAccessor"],
        &[],
        r#"{
            "name": "TestClass",
            "constructors": [{ "parameters": [{ "name": "accessor", "type": "ITestContextAccessor" }] }],
            "test_methods": ["TestMethod"]
        }"#,
    ))
    .expect("binds");
    let forced = check_graph(
        &graph,
        Some(Edition::A),
        &CheckerOptions::default(),
        &CancellationToken::new(),
    );
    assert_eq!(forced.edition, Some(Edition::A));
    assert_eq!(flagged(&forced), vec!["accessor"]);
}

#[test]
fn class_fixture_on_collection_definition_is_a_source() {
    for refs in [V2, V3] {
        let result = check(&unit(
            refs,
            &[],
            r#"
            {
                "name": "TestCollection",
                "attributes": [{ "name": "CollectionDefinition", "argument": "test" }],
                "implements": ["IClassFixture<object>"]
            },
            {
                "name": "TestClass",
                "attributes": [{ "name": "Collection", "argument": "test" }],
                "constructors": [{ "parameters": [{ "name": "_", "type": "object" }] }],
                "test_methods": ["TestMethod"]
            }"#,
        ));
        assert!(result.diagnostics.is_empty());
    }
}

#[test]
fn open_generic_collection_definition_needs_edition_b() {
    let types = r#"
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
            "constructors": [{ "parameters": [{ "name": "fixture", "type": "Fixture<int>" }] }],
            "test_methods": ["TestMethod"]
        }"#;
    assert_eq!(flagged(&check(&unit(V2, &[], types))), vec!["fixture"]);
    assert!(check(&unit(V3, &[], types)).diagnostics.is_empty());
}

#[test]
fn assembly_fixture_is_a_source_in_edition_b() {
    let types = r#"
        { "name": "AssemblyFixture" },
        {
            "name": "TestClass",
            "constructors": [{ "parameters": [{ "name": "fixture", "type": "AssemblyFixture" }] }],
            "test_methods": ["TestMethod"]
        }"#;
    assert!(check(&unit(V3, &["AssemblyFixture"], types)).diagnostics.is_empty());
    assert_eq!(
        flagged(&check(&unit(V2, &["AssemblyFixture"], types))),
        vec!["fixture"]
    );
}

#[test]
fn undefined_collection_still_reports() {
    let result = check(&unit(
        V2,
        &[],
        r#"{
            "name": "TestClass",
            "attributes": [{ "name": "Collection", "argument": "TestCollection" }],
            "constructors": [{ "parameters": [{ "name": "_", "type": "object" }] }],
            "test_methods": ["TestMethod"]
        }"#,
    ));
    assert_eq!(flagged(&result), vec!["_"]);
}

#[test]
fn mixed_fixtures_report_only_the_missing_one() {
    let types = |collection_fixture: bool, class_fixture: bool| {
        format!(
            r#"
            {{ "name": "ClassFixture" }},
            {{ "name": "CollectionFixture" }},
            {{
                "name": "TestCollection",
                "attributes": [{{ "name": "CollectionDefinition", "argument": "test" }}],
                "implements": [{}]
            }},
            {{
                "name": "TestClass",
                "attributes": [{{ "name": "Collection", "argument": "test" }}],
                "implements": [{}],
                "constructors": [{{ "parameters": [
                    {{ "name": "collectionFixture", "type": "CollectionFixture" }},
                    {{ "name": "classFixture", "type": "ClassFixture" }}
                ] }}],
                "test_methods": ["TestMethod"]
            }}"#,
            if collection_fixture { r#""ICollectionFixture<CollectionFixture>""# } else { "" },
            if class_fixture { r#""IClassFixture<ClassFixture>""# } else { "" },
        )
    };
    for refs in [V2, V3] {
        assert!(check(&unit(refs, &[], &types(true, true))).diagnostics.is_empty());
        assert_eq!(
            flagged(&check(&unit(refs, &[], &types(false, true)))),
            vec!["collectionFixture"]
        );
        assert_eq!(
            flagged(&check(&unit(refs, &[], &types(true, false)))),
            vec!["classFixture"]
        );
    }
}

#[test]
fn collection_membership_through_generic_base() {
    for refs in [V2, V3] {
        let result = check(&unit(
            refs,
            &[],
            r#"
            { "name": "ClassFixture" },
            { "name": "CollectionFixture" },
            {
                "name": "TestCollection",
                "attributes": [{ "name": "CollectionDefinition", "argument": "test" }],
                "implements": ["ICollectionFixture<CollectionFixture>"]
            },
            {
                "name": "TestContext",
                "abstract": true,
                "type_params": ["TContext"],
                "attributes": [{ "name": "Collection", "argument": "test" }],
                "implements": ["IClassFixture<ClassFixture>"]
            },
            {
                "name": "TestClass",
                "base": "TestContext<int>",
                "constructors": [{ "parameters": [
                    { "name": "collectionFixture", "type": "CollectionFixture" },
                    { "name": "classFixture", "type": "ClassFixture" }
                ] }],
                "test_methods": ["TestMethod"]
            }"#,
        ));
        assert!(result.diagnostics.is_empty(), "{:?}", result.diagnostics);
    }
}

#[test]
fn graph_without_framework_is_skipped() {
    let result = check(&unit(
        &[],
        &[],
        r#"{
            "name": "TestClass",
            "constructors": [{ "parameters": [{ "name": "_", "type": "object" }] }],
            "test_methods": ["TestMethod"]
        }"#,
    ));
    assert_eq!(result.edition, None);
    assert!(result.diagnostics.is_empty());
}
