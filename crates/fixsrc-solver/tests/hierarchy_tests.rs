use super::*;
use fixsrc_binder::{CapabilityKind, TypeRef, bind_json};

fn graph(text: &str) -> SymbolGraph {
    match bind_json(text) {
        Ok(graph) => graph,
        Err(errors) => panic!("bind failed:\n{errors}"),
    }
}

fn id(graph: &SymbolGraph, name: &str) -> SymbolId {
    graph
        .lookup(name)
        .unwrap_or_else(|| panic!("type {name} not bound"))
}

fn fixtures(graph: &SymbolGraph, set: &CapabilitySet) -> Vec<String> {
    set.iter()
        .map(|cap| format!("{:?} {}", cap.kind, graph.format_type(&cap.fixture)))
        .collect()
}

#[test]
fn test_root_type_has_singleton_chain() {
    let g = graph(r#"{ "types": [{ "name": "TestClass" }] }"#);
    let walker = HierarchyWalker::new(&g);
    let chain = walker.ancestor_chain(id(&g, "TestClass"));
    assert_eq!(chain.len(), 1);
    assert!(!chain.is_truncated());
    assert_eq!(chain.leaf().map(|t| t.id), Some(id(&g, "TestClass")));
}

#[test]
fn test_chain_is_leaf_first() {
    let g = graph(
        r#"{ "types": [
            { "name": "C", "base": "B" },
            { "name": "B", "base": "A" },
            { "name": "A" }
        ] }"#,
    );
    let walker = HierarchyWalker::new(&g);
    let chain: Vec<_> = walker.ancestor_chain(id(&g, "C")).symbols().collect();
    assert_eq!(chain, vec![id(&g, "C"), id(&g, "B"), id(&g, "A")]);
}

#[test]
fn test_unknown_symbol_has_empty_chain() {
    let g = graph(r#"{ "types": [] }"#);
    let walker = HierarchyWalker::new(&g);
    assert!(walker.ancestor_chain(SymbolId(999)).is_empty());
    assert!(walker.flattened_capabilities(SymbolId(999)).is_empty());
}

#[test]
fn test_inherited_capabilities_are_flattened_and_deduplicated() {
    let g = graph(
        r#"{ "types": [
            { "name": "Fixture" },
            { "name": "Other" },
            { "name": "Base", "implements": ["IClassFixture<Fixture>", "IClassFixture<Other>"] },
            { "name": "TestClass", "base": "Base", "implements": ["IClassFixture<Fixture>"] }
        ] }"#,
    );
    let walker = HierarchyWalker::new(&g);
    let caps = walker.flattened_capabilities(id(&g, "TestClass"));
    assert_eq!(
        fixtures(&g, &caps),
        vec!["ClassScoped Fixture", "ClassScoped Other"]
    );
}

#[test]
fn test_same_fixture_at_both_scopes_is_kept_twice() {
    let g = graph(
        r#"{ "types": [
            { "name": "Fixture" },
            { "name": "A", "implements": ["IClassFixture<Fixture>", "ICollectionFixture<Fixture>"] }
        ] }"#,
    );
    let caps = HierarchyWalker::new(&g).flattened_capabilities(id(&g, "A"));
    assert_eq!(caps.len(), 2);
}

#[test]
fn test_generic_base_capabilities_are_instantiated() {
    let g = graph(
        r#"{ "types": [
            { "name": "Fixture", "type_params": ["T"] },
            { "name": "Base", "type_params": ["U"], "implements": ["IClassFixture<Fixture<U>>"] },
            { "name": "Middle", "type_params": ["V"], "base": "Base<V>" },
            { "name": "TestClass", "base": "Middle<int>" }
        ] }"#,
    );
    let walker = HierarchyWalker::new(&g);
    let caps = walker.flattened_capabilities(id(&g, "TestClass"));
    let fixture = id(&g, "Fixture");
    assert!(caps.contains(&CapabilityInterface {
        kind: CapabilityKind::ClassScoped,
        fixture: TypeRef::generic(fixture, vec![TypeRef::named(SymbolId::INT)]),
    }));
}

#[test]
fn test_nearest_group_membership_wins() {
    let g = graph(
        r#"{ "types": [
            { "name": "Base", "attributes": [{ "name": "Collection", "argument": "outer" }] },
            { "name": "Middle", "base": "Base" },
            { "name": "TestClass", "base": "Middle", "attributes": [{ "name": "Collection", "argument": "inner" }] },
            { "name": "Other", "base": "Middle" }
        ] }"#,
    );
    let walker = HierarchyWalker::new(&g);
    let inner = walker.nearest_group_membership(id(&g, "TestClass"));
    let outer = walker.nearest_group_membership(id(&g, "Other"));
    assert_eq!(inner.map(|a| g.name(a)), Some("inner"));
    assert_eq!(outer.map(|a| g.name(a)), Some("outer"));
}

#[test]
fn test_cyclic_chain_terminates() {
    let g = graph(
        r#"{ "types": [
            { "name": "A", "base": "B", "implements": ["IClassFixture<object>"] },
            { "name": "B", "base": "A" }
        ] }"#,
    );
    let walker = HierarchyWalker::new(&g);
    let chain = walker.ancestor_chain(id(&g, "A"));
    assert_eq!(chain.len(), 2);
    assert!(chain.is_truncated());
    assert_eq!(walker.flattened_capabilities(id(&g, "B")).len(), 1);
    assert_eq!(walker.nearest_group_membership(id(&g, "B")), None);
}

#[test]
fn test_test_class_selection() {
    let g = graph(
        r#"{ "types": [
            { "name": "Base", "abstract": true, "test_methods": ["Inherited"] },
            { "name": "Derived", "base": "Base" },
            { "name": "Helper" },
            { "name": "ITests", "kind": "interface", "test_methods": ["M"] },
            { "name": "Direct", "test_methods": ["M"] }
        ] }"#,
    );
    let walker = HierarchyWalker::new(&g);
    let names: Vec<&str> = walker.test_classes().map(|t| g.name(t.name)).collect();
    assert_eq!(names, vec!["Derived", "Direct"]);
    assert!(!walker.is_test_class(id(&g, "Base")));
}
