use crate::cst::{SyntaxKind, SyntaxNode};
use crate::resolve::node_name;
use crate::{NameResolver, NodeComparer, StructuralComparer, TokenNameResolver, TreeBuilder};

fn first(root: &SyntaxNode, kind: SyntaxKind) -> SyntaxNode {
    root.descendants().find(|n| n.kind() == kind).unwrap()
}

fn expr(f: impl FnOnce(&mut TreeBuilder)) -> SyntaxNode {
    let root = TreeBuilder::root(|b| {
        b.expr_stmt(f);
    });
    let stmt = first(&root, SyntaxKind::ExpressionStmt);
    stmt.children().next().unwrap()
}

#[test]
fn names_of_calls_and_fetches() {
    let method = expr(|b| {
        b.method_call(|b| { b.variable("repo"); }, "save", |_| {});
    });
    assert_eq!(node_name(&method).as_deref(), Some("save"));

    let static_call = expr(|b| {
        b.static_call("Cache", "flush", |_| {});
    });
    assert_eq!(node_name(&static_call).as_deref(), Some("flush"));

    let fetch = expr(|b| {
        b.property_fetch("this", "items");
    });
    assert_eq!(node_name(&fetch).as_deref(), Some("items"));

    let constant = expr(|b| {
        b.const_fetch("PHP_EOL");
    });
    assert_eq!(node_name(&constant).as_deref(), Some("PHP_EOL"));

    let literal = expr(|b| {
        b.int(7);
    });
    assert_eq!(node_name(&literal), None);
}

#[test]
fn names_of_declarations() {
    let root = TreeBuilder::root(|b| {
        b.function("handle", |_| {}, |_| {});
        b.expr_stmt(|b| {
            b.new_anonymous_class(|_| {});
        });
    });

    assert_eq!(
        node_name(&first(&root, SyntaxKind::Function)).as_deref(),
        Some("handle")
    );
    assert_eq!(node_name(&first(&root, SyntaxKind::Class)), None);
}

#[test]
fn case_sensitivity_follows_kind() {
    let resolver = TokenNameResolver;

    let var = expr(|b| {
        b.variable("Total");
    });
    assert!(resolver.is_name(&var, "Total"));
    assert!(!resolver.is_name(&var, "total"));
    assert!(!resolver.is_name(&var, "$Total"));

    let call = expr(|b| {
        b.func_call("Array_Map", |_| {});
    });
    assert!(resolver.is_name(&call, "array_map"));
    assert!(resolver.is_name(&call, "\\ARRAY_MAP"));
    assert!(!resolver.is_name(&call, "array_filter"));

    let fetch = expr(|b| {
        b.property_fetch("this", "Items");
    });
    assert!(!resolver.is_name(&fetch, "items"));
}

#[test]
fn structural_equality_ignores_trivia() {
    let plain = expr(|b| {
        b.variable("a");
    });
    let commented = expr(|b| {
        b.node(SyntaxKind::Variable, |b| {
            b.comment("/* counter */").ws().token(SyntaxKind::VarName, "$a");
        });
    });

    assert_ne!(plain.text().to_string(), commented.text().to_string());
    assert!(StructuralComparer.are_equal(&plain, &commented));
}

#[test]
fn structural_equality_checks_kinds_and_text() {
    let a = expr(|b| {
        b.variable("a");
    });
    let b_var = expr(|b| {
        b.variable("b");
    });
    let fetch = expr(|b| {
        b.property_fetch("a", "x");
    });
    let other_fetch = expr(|b| {
        b.property_fetch("a", "x");
    });

    assert!(!StructuralComparer.are_equal(&a, &b_var));
    assert!(!StructuralComparer.are_equal(&a, &fetch));
    assert!(StructuralComparer.are_equal(&fetch, &other_fetch));
}
