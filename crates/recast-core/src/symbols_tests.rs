use crate::{ClassHierarchy, SymbolUniverse};

fn hierarchy() -> ClassHierarchy {
    ClassHierarchy::new()
        .with_class("Animal", &[])
        .with_class("Dog", &["Animal", "Pet"])
        .with_class("Puppy", &["Dog"])
        .with_class("Stone", &[])
}

#[test]
fn exists_only_for_declared_classes() {
    let h = hierarchy();
    assert!(h.exists("Dog"));
    assert!(h.exists("\\dog"));
    // referenced as a parent, never declared
    assert!(!h.exists("Pet"));
    assert!(!h.exists("Cat"));
}

#[test]
fn subclass_is_reflexive_and_transitive() {
    let h = hierarchy();
    assert!(h.is_subclass_of("Puppy", "Puppy"));
    assert!(h.is_subclass_of("Puppy", "Animal"));
    assert!(h.is_subclass_of("PUPPY", "pet"));
    assert!(!h.is_subclass_of("Animal", "Dog"));
    assert!(!h.is_subclass_of("Stone", "Animal"));
    assert!(!h.is_subclass_of("Unknown", "Animal"));
}

#[test]
fn related_checks_both_directions() {
    let h = hierarchy();
    assert!(h.are_related("Animal", "Puppy"));
    assert!(h.are_related("Puppy", "Animal"));
    assert!(!h.are_related("Stone", "Dog"));
}

#[test]
fn redeclaring_merges_supertypes() {
    let mut h = ClassHierarchy::new();
    h.declare("A", &["B"]);
    h.declare("a", &["C", "B"]);

    assert_eq!(h.len(), 1);
    assert!(h.is_subclass_of("A", "C"));
    assert_eq!(h.classes().collect::<Vec<_>>(), vec!["A"]);
}

#[test]
fn cyclic_declarations_terminate() {
    let h = ClassHierarchy::new()
        .with_class("A", &["B"])
        .with_class("B", &["A"]);
    assert!(h.is_subclass_of("A", "B"));
    assert!(!h.is_subclass_of("A", "C"));
}
