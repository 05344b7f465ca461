use recast_core::{ClassHierarchy, InferredType, ObjectType, TypeKind};
use recast_syntax::TreeBuilder;

use crate::{Config, SyntaxTypeNode, TypeMapper, TypeSlot, resolve_syntax_type};

fn resolve(node: &SyntaxTypeNode) -> InferredType {
    resolve_syntax_type(&node.to_syntax()).unwrap()
}

#[test]
fn resolves_names() {
    assert_eq!(resolve(&SyntaxTypeNode::identifier("int")), InferredType::int());
    assert_eq!(resolve(&SyntaxTypeNode::identifier("BOOL")), InferredType::bool());
    assert_eq!(
        resolve(&SyntaxTypeNode::identifier("array")),
        InferredType::array_of(InferredType::Mixed)
    );
    assert_eq!(
        resolve(&SyntaxTypeNode::identifier("iterable")),
        InferredType::iterable_of(InferredType::Mixed)
    );
    assert_eq!(resolve(&SyntaxTypeNode::identifier("callable")), InferredType::Callable);
    assert_eq!(resolve(&SyntaxTypeNode::identifier("object")), InferredType::ObjectWithoutClass);
    assert_eq!(resolve(&SyntaxTypeNode::identifier("void")), InferredType::Void);
    assert!(resolve(&SyntaxTypeNode::identifier("self"))
        .as_object()
        .is_some_and(ObjectType::is_self));
    assert_eq!(resolve(&SyntaxTypeNode::identifier("Foo")), InferredType::object("Foo"));
    assert_eq!(
        resolve(&SyntaxTypeNode::fully_qualified("App\\Foo")),
        InferredType::fully_qualified("App\\Foo")
    );
}

#[test]
fn resolves_compound_annotations() {
    let nullable = SyntaxTypeNode::nullable(SyntaxTypeNode::identifier("int"));
    assert_eq!(resolve(&nullable), InferredType::nullable(InferredType::int()));

    let union = SyntaxTypeNode::Union(vec![
        SyntaxTypeNode::identifier("int"),
        SyntaxTypeNode::fully_qualified("Foo"),
    ]);
    assert_eq!(
        resolve(&union),
        InferredType::union([InferredType::int(), InferredType::fully_qualified("Foo")])
    );
}

#[test]
fn non_annotation_nodes_do_not_resolve() {
    let root = TreeBuilder::root(|b| {
        b.assign_stmt("a", |b| {
            b.int(1);
        });
    });
    assert_eq!(resolve_syntax_type(&root), None);
}

/// Kind an annotation can describe for `ty`, allowing for the documented
/// narrowing: closures annotate as `callable`, array-like unions collapse
/// to `array`/`iterable` and related objects collapse to one class.
fn expected_kind(ty: &InferredType, node: &SyntaxTypeNode) -> TypeKind {
    match (ty, node) {
        (InferredType::Closure, _) => TypeKind::Callable,
        (InferredType::Union(_), SyntaxTypeNode::Identifier(name)) if name == "array" => {
            TypeKind::Array
        }
        (InferredType::Union(_), SyntaxTypeNode::Identifier(name)) if name == "iterable" => {
            TypeKind::Iterable
        }
        (InferredType::Union(_), SyntaxTypeNode::FullyQualified(_)) => TypeKind::Object,
        _ => ty.kind(),
    }
}

#[test]
fn annotations_round_trip() {
    let symbols = ClassHierarchy::new()
        .with_class("Animal", &[])
        .with_class("Dog", &["Animal"]);
    let types = [
        InferredType::int(),
        InferredType::string(),
        InferredType::array_of(InferredType::int()),
        InferredType::iterable_of(InferredType::string()),
        InferredType::object("Dog"),
        InferredType::self_ref("Dog"),
        InferredType::ObjectWithoutClass,
        InferredType::Callable,
        InferredType::Closure,
        InferredType::Void,
        InferredType::nullable(InferredType::float()),
        InferredType::nullable(InferredType::object("Dog")),
        InferredType::union([InferredType::array_of(InferredType::int()), InferredType::Null]),
        InferredType::union([
            InferredType::array_of(InferredType::int()),
            InferredType::iterable_of(InferredType::int()),
        ]),
        InferredType::union([InferredType::int(), InferredType::string()]),
        InferredType::union([InferredType::object("Dog"), InferredType::object("Animal")]),
    ];

    for version in ["7.2", "8.0"] {
        let config = Config::new().target_version(version.parse().unwrap());
        let mapper = TypeMapper::new(config, &symbols);
        let mut checked = 0;
        for ty in &types {
            let Some(node) = mapper.to_syntax_type_node(ty, TypeSlot::Return).unwrap() else {
                continue;
            };
            let tree = mapper.to_syntax_tree(ty, TypeSlot::Return).unwrap().unwrap();
            let back = resolve_syntax_type(&tree).unwrap();

            let expected = match (&back, &node) {
                // `?array` reads back as `array|null`
                (InferredType::Union(_), SyntaxTypeNode::Nullable(_)) => TypeKind::Union,
                _ => expected_kind(ty, &node),
            };
            assert_eq!(back.kind(), expected, "{ty} as {node} under {version}");
            checked += 1;
        }
        assert!(checked >= 14, "only {checked} types mapped under {version}");
    }
}
