//! Indented tree dump for tests and debugging.

use std::fmt::Write;

use crate::cst::{SyntaxKind, SyntaxNode};

/// One line per node; significant leaf tokens follow the kind.
///
/// ```text
/// Root
///   ExpressionStmt
///     Assign
///       Variable $a
///       Literal 1
/// ```
pub fn dump(node: &SyntaxNode) -> String {
    let mut out = String::new();
    dump_node(node, 0, &mut out);
    out
}

fn dump_node(node: &SyntaxNode, depth: usize, out: &mut String) {
    let _ = write!(out, "{:indent$}{:?}", "", node.kind(), indent = depth * 2);
    for token in node
        .children_with_tokens()
        .filter_map(|it| it.into_token())
        .filter(|t| is_shown(t.kind()))
    {
        let _ = write!(out, " {}", token.text());
    }
    out.push('\n');
    for child in node.children() {
        dump_node(&child, depth + 1, out);
    }
}

fn is_shown(kind: SyntaxKind) -> bool {
    matches!(
        kind,
        SyntaxKind::Ident
            | SyntaxKind::VarName
            | SyntaxKind::IntNumber
            | SyntaxKind::StringLiteral
            | SyntaxKind::Operator
            | SyntaxKind::Question
    )
}
