use indoc::indoc;
use recast_syntax::{SyntaxKind, TreeBuilder, dump};

use crate::SyntaxTypeNode;

#[test]
fn display_forms() {
    assert_eq!(SyntaxTypeNode::identifier("int").to_string(), "int");
    assert_eq!(SyntaxTypeNode::fully_qualified("App\\Foo").to_string(), "\\App\\Foo");

    let nullable = SyntaxTypeNode::nullable(SyntaxTypeNode::identifier("iterable"));
    assert_eq!(nullable.to_string(), "?iterable");
    assert!(nullable.is_nullable());

    let union = SyntaxTypeNode::Union(vec![
        SyntaxTypeNode::identifier("int"),
        SyntaxTypeNode::fully_qualified("Foo"),
    ]);
    assert_eq!(union.to_string(), "int|\\Foo");
    assert!(union.is_union());
}

#[test]
fn green_tree_shape() {
    let node = SyntaxTypeNode::nullable(SyntaxTypeNode::fully_qualified("Foo"));
    let tree = node.to_syntax();

    assert_eq!(tree.kind(), SyntaxKind::NullableType);
    assert_eq!(tree.text().to_string(), node.to_string());
    insta::assert_snapshot!(dump(&tree), @r"
    NullableType ?
      FullyQualifiedName \Foo
    ");
}

#[test]
fn union_tree_text_matches_display() {
    let node = SyntaxTypeNode::Union(vec![
        SyntaxTypeNode::identifier("int"),
        SyntaxTypeNode::identifier("string"),
        SyntaxTypeNode::fully_qualified("Foo"),
    ]);
    let tree = node.to_syntax();

    assert_eq!(tree.text().to_string(), "int|string|\\Foo");
    assert_eq!(
        dump(&tree),
        indoc! {r"
            UnionType
              TypeName int
              TypeName string
              FullyQualifiedName \Foo
        "}
    );
}

#[test]
fn splices_into_a_parameter() {
    let node = SyntaxTypeNode::nullable(SyntaxTypeNode::fully_qualified("Foo"));
    let root = TreeBuilder::root(|b| {
        b.function(
            "handle",
            |b| {
                let ty: &dyn Fn(&mut TreeBuilder) = &|b| node.build(b);
                b.param("item", Some(ty));
            },
            |_| {},
        );
    });

    assert_eq!(root.text().to_string(), "function handle(?\\Foo $item) {\n}\n");
    let param = root
        .descendants()
        .find(|n| n.kind() == SyntaxKind::Param)
        .unwrap();
    assert_eq!(
        param.first_child().map(|n| n.kind()),
        Some(SyntaxKind::NullableType)
    );
}
