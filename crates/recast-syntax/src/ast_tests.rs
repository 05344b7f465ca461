use indoc::indoc;

use crate::ast::{self, Assign, Class, ClassLike, ExpressionStmt, Root, Variable};
use crate::cst::{SyntaxKind, SyntaxNode};
use crate::{TreeBuilder, dump};

fn first(root: &SyntaxNode, kind: SyntaxKind) -> SyntaxNode {
    root.descendants().find(|n| n.kind() == kind).unwrap()
}

#[test]
fn built_tree_reads_like_source() {
    let root = TreeBuilder::root(|b| {
        b.assign_stmt("a", |b| {
            b.int(1);
        });
        b.echo(|b| {
            b.variable("a");
        });
    });

    assert_eq!(root.text().to_string(), "$a = 1;\necho $a;\n");
    insta::assert_snapshot!(dump(&root), @r"
    Root
      ExpressionStmt
        Assign
          Variable $a
          Literal 1
      EchoStmt
        Variable $a
    ");
}

#[test]
fn built_class_text() {
    let root = TreeBuilder::root(|b| {
        b.class(Some("Counter"), |b| {
            b.property("count");
            b.method("reset", |_| {}, |b| {
                b.return_stmt(None);
            });
        });
    });

    assert_eq!(
        root.text().to_string(),
        indoc! {"
            class Counter {
            public $count;
            public function reset() {
            return;
            }
            }
        "}
    );
}

#[test]
fn class_names() {
    let root = TreeBuilder::root(|b| {
        b.class_extending(Some("Child"), Some("Base"), |_| {});
        b.expr_stmt(|b| {
            b.new_anonymous_class(|_| {});
        });
    });

    let classes: Vec<Class> = root.descendants().filter_map(Class::cast).collect();
    assert_eq!(classes.len(), 2);

    let named = &classes[0];
    assert_eq!(named.name().unwrap().text(), "Child");
    assert_eq!(named.parent_name().unwrap().text(), "Base");
    assert!(!named.is_anonymous());

    let anonymous = &classes[1];
    assert!(anonymous.name().is_none());
    assert!(anonymous.is_anonymous());
}

#[test]
fn class_like_wraps_all_declarations() {
    let root = TreeBuilder::root(|b| {
        b.interface("Countable", |_| {});
        b.trait_decl("Loggable", |_| {});
    });

    let names: Vec<String> = root
        .descendants()
        .filter_map(ClassLike::cast)
        .filter_map(|c| c.name())
        .map(|n| n.text())
        .collect();
    assert_eq!(names, vec!["Countable", "Loggable"]);
}

#[test]
fn assign_sides() {
    let root = TreeBuilder::root(|b| {
        b.assign_stmt("total", |b| {
            b.binary(|b| { b.variable("x"); }, "+", |b| { b.int(2); });
        });
    });

    let stmt = ExpressionStmt::cast(first(&root, SyntaxKind::ExpressionStmt)).unwrap();
    let assign = Assign::cast(stmt.expr().unwrap()).unwrap();

    let target = Variable::cast(assign.target().unwrap()).unwrap();
    assert_eq!(target.name().as_deref(), Some("total"));
    assert_eq!(assign.value().unwrap().text().to_string(), "$x + 2");
}

#[test]
fn statement_navigation_stays_in_list() {
    let root = TreeBuilder::root(|b| {
        b.assign_stmt("a", |b| {
            b.int(1);
        });
        b.function("run", |_| {}, |b| {
            b.echo(|b| {
                b.variable("a");
            });
            b.return_stmt(None);
        });
    });

    let echo = first(&root, SyntaxKind::EchoStmt);
    let var = first(&echo, SyntaxKind::Variable);

    assert_eq!(ast::enclosing_statement(&var), Some(echo.clone()));
    assert_eq!(ast::enclosing_statement(&echo), Some(echo.clone()));
    assert_eq!(ast::previous_statement(&echo), None);
    assert_eq!(
        ast::next_statement(&echo).map(|s| s.kind()),
        Some(SyntaxKind::ReturnStmt)
    );

    let function = first(&root, SyntaxKind::Function);
    assert_eq!(
        ast::previous_statement(&function).map(|s| s.kind()),
        Some(SyntaxKind::ExpressionStmt)
    );

    let statements: Vec<SyntaxKind> = Root::cast(root.clone())
        .unwrap()
        .statements()
        .map(|s| s.kind())
        .collect();
    assert_eq!(statements, vec![SyntaxKind::ExpressionStmt, SyntaxKind::Function]);
}
