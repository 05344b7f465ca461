//! Name resolution and structural comparison of nodes.

use crate::ast::{Class, Name, Variable};
use crate::cst::{SyntaxElement, SyntaxKind, SyntaxNode};

/// Answers "is this node named `name`?".
pub trait NameResolver {
    fn is_name(&self, node: &SyntaxNode, name: &str) -> bool;
}

/// Decides whether two nodes denote the same code.
pub trait NodeComparer {
    fn are_equal(&self, a: &SyntaxNode, b: &SyntaxNode) -> bool;
}

/// Reads names straight off the tree.
///
/// Variables and properties compare case-sensitively; classes, functions,
/// methods and constants compare ASCII-case-insensitively.
#[derive(Clone, Copy, Debug, Default)]
pub struct TokenNameResolver;

impl NameResolver for TokenNameResolver {
    fn is_name(&self, node: &SyntaxNode, name: &str) -> bool {
        let Some(actual) = node_name(node) else {
            return false;
        };
        if is_case_sensitive(node.kind()) {
            actual == name
        } else {
            actual
                .trim_start_matches('\\')
                .eq_ignore_ascii_case(name.trim_start_matches('\\'))
        }
    }
}

fn is_case_sensitive(kind: SyntaxKind) -> bool {
    matches!(
        kind,
        SyntaxKind::Variable | SyntaxKind::PropertyFetch | SyntaxKind::Property
    )
}

/// Name carried by a node, if it has one.
///
/// Variables yield their name without `$`; calls yield the callee name;
/// declarations yield the declared name.
pub fn node_name(node: &SyntaxNode) -> Option<String> {
    match node.kind() {
        SyntaxKind::Variable => Variable::cast(node.clone())?.name(),
        SyntaxKind::Property => node.children().find_map(Variable::cast)?.name(),
        SyntaxKind::Name => Name::cast(node.clone()).map(|n| n.text()),
        SyntaxKind::Class => Class::cast(node.clone())?.name().map(|n| n.text()),
        SyntaxKind::Interface
        | SyntaxKind::Trait
        | SyntaxKind::Function
        | SyntaxKind::ClassMethod
        | SyntaxKind::FuncCall
        | SyntaxKind::ConstFetch => node.children().find_map(Name::cast).map(|n| n.text()),
        // The callee name is the last `Name`; `Foo::bar()` also carries the class.
        SyntaxKind::MethodCall | SyntaxKind::StaticCall | SyntaxKind::PropertyFetch => node
            .children()
            .filter_map(Name::cast)
            .last()
            .map(|n| n.text()),
        _ => None,
    }
}

/// Compares kinds and significant tokens, ignoring whitespace and comments.
///
/// Two nodes that the printer would render identically modulo formatting
/// compare equal.
#[derive(Clone, Copy, Debug, Default)]
pub struct StructuralComparer;

impl NodeComparer for StructuralComparer {
    fn are_equal(&self, a: &SyntaxNode, b: &SyntaxNode) -> bool {
        significant(a).eq(significant(b))
    }
}

fn significant(node: &SyntaxNode) -> impl Iterator<Item = (SyntaxKind, Option<String>)> {
    node.descendants_with_tokens()
        .filter(|it| !it.kind().is_trivia())
        .map(|it| match it {
            SyntaxElement::Node(n) => (n.kind(), None),
            SyntaxElement::Token(t) => (t.kind(), Some(t.text().to_string())),
        })
}
