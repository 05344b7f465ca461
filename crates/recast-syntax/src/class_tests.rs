use crate::class::kind_name;
use crate::cst::{KindSet, SyntaxKind::*, kind_sets};
use crate::NodeClass;

#[test]
fn resolves_concrete_kinds() {
    let class = NodeClass::resolve("Assign").unwrap();
    assert_eq!(class.name(), "Assign");
    assert!(class.contains(Assign));
    assert!(!class.contains(Variable));
}

#[test]
fn abstract_classes_are_hierarchy_aware() {
    let class_like = NodeClass::resolve("ClassLike").unwrap();
    assert!(class_like.contains(Class));
    assert!(class_like.contains(Interface));
    assert!(class_like.contains(Trait));
    assert!(!class_like.contains(Function));

    let stmt = NodeClass::resolve("Stmt").unwrap();
    assert!(stmt.contains(Class));
    assert!(stmt.contains(ExpressionStmt));
    assert!(!stmt.contains(Assign));

    let node = NodeClass::resolve("Node").unwrap();
    assert!(node.contains(Root));
    assert!(node.contains(UnionType));
    assert!(!node.contains(Ident));
}

#[test]
fn tokens_and_unknown_names_do_not_resolve() {
    assert_eq!(NodeClass::resolve("Ident"), None);
    assert_eq!(NodeClass::resolve("Whitespace"), None);
    assert_eq!(NodeClass::resolve("NotANodeKind"), None);
    // names are exact
    assert_eq!(NodeClass::resolve("assign"), None);
}

#[test]
fn kind_names_cover_nodes_only() {
    assert_eq!(kind_name(ClassMethod), Some("ClassMethod"));
    assert_eq!(kind_name(VarName), None);
}

#[test]
fn kind_set_membership() {
    let set = KindSet::new(&[Class, Variable]);
    assert!(set.contains(Class));
    assert!(set.contains(Variable));
    assert!(!set.contains(Assign));
    assert!(KindSet::single(Assign).contains(Assign));
    assert_eq!(KindSet::new(&[]), KindSet::EMPTY);
}

#[test]
fn kind_set_all_nodes_excludes_tokens() {
    let all = KindSet::all_nodes();
    assert!(all.contains(Root));
    assert!(all.contains(Error));
    assert!(!all.contains(Semicolon));
    assert!(!all.contains(Whitespace));
}

#[test]
fn kind_set_debug() {
    let debug_str = format!("{:?}", kind_sets::CLASS_LIKE);
    assert_eq!(debug_str, "{Class, Interface, Trait}");
    assert_eq!(format!("{:?}", KindSet::EMPTY), "{}");
}

#[test]
fn statement_and_expression_predicates() {
    assert!(IfStmt.is_statement());
    assert!(!Block.is_statement());
    assert!(Closure.is_expr());
    assert!(Root.is_statement_list());
    assert!(Ident.is_token());
    assert!(!Ident.is_node());
    assert!(Name.is_node());
    assert!(Comment.is_trivia());
}
