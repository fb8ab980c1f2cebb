use super::*;

#[test]
fn test_intern_deduplicates() {
    let mut interner = Interner::new();
    let a = interner.intern("Fixture");
    let b = interner.intern("Fixture");
    let c = interner.intern("ClassFixture");

    assert_eq!(a, b);
    assert_ne!(a, c);
    assert_eq!(interner.resolve(a), "Fixture");
    assert_eq!(interner.resolve(c), "ClassFixture");
}

#[test]
fn test_empty_string_is_none_atom() {
    let mut interner = Interner::new();
    assert!(interner.is_empty());
    assert_eq!(interner.intern(""), Atom::NONE);
    assert!(Atom::NONE.is_none());
}

#[test]
fn test_lookup_does_not_intern() {
    let mut interner = Interner::new();
    assert_eq!(interner.lookup("TestClass"), None);
    let len = interner.len();
    let atom = interner.intern("TestClass");
    assert_eq!(interner.lookup("TestClass"), Some(atom));
    assert_eq!(interner.len(), len + 1);
}

#[test]
fn test_out_of_bounds_resolve_is_empty() {
    let interner = Interner::new();
    assert_eq!(interner.resolve(Atom(999)), "");
}

#[test]
fn test_intern_common_is_idempotent() {
    let mut interner = Interner::new();
    interner.intern_common();
    let len = interner.len();
    interner.intern_common();
    assert_eq!(interner.len(), len);
    assert!(interner.lookup("ICollectionFixture").is_some());
}
