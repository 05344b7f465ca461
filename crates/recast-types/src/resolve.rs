//! Reading syntax annotations back into inferred types.

use recast_core::{InferredType, ScalarKind};
use recast_syntax::{SyntaxKind, SyntaxNode};

/// Type described by an annotation subtree.
///
/// `None` if `node` is not a type annotation. Relative names other than the
/// built-ins become `ObjectType::Named`.
pub fn resolve_syntax_type(node: &SyntaxNode) -> Option<InferredType> {
    match node.kind() {
        SyntaxKind::TypeName => Some(resolve_name(&ident_text(node)?)),
        SyntaxKind::FullyQualifiedName => Some(InferredType::fully_qualified(
            ident_text(node)?.trim_start_matches('\\'),
        )),
        SyntaxKind::NullableType => {
            let inner = node.children().find_map(|child| resolve_syntax_type(&child))?;
            Some(InferredType::nullable(inner))
        }
        SyntaxKind::UnionType => {
            let members = node
                .children()
                .map(|child| resolve_syntax_type(&child))
                .collect::<Option<Vec<_>>>()?;
            Some(InferredType::union(members))
        }
        _ => None,
    }
}

fn ident_text(node: &SyntaxNode) -> Option<String> {
    node.children_with_tokens()
        .filter_map(|it| it.into_token())
        .find(|t| t.kind() == SyntaxKind::Ident)
        .map(|t| t.text().to_string())
}

fn resolve_name(name: &str) -> InferredType {
    if let Some(kind) = ScalarKind::from_name(name) {
        return InferredType::Scalar(kind);
    }
    match name.to_ascii_lowercase().as_str() {
        "array" => InferredType::array_of(InferredType::Mixed),
        "iterable" => InferredType::iterable_of(InferredType::Mixed),
        "callable" => InferredType::Callable,
        "object" => InferredType::ObjectWithoutClass,
        "void" => InferredType::Void,
        "mixed" => InferredType::Mixed,
        "null" => InferredType::Null,
        "self" => InferredType::self_ref("self"),
        "static" => InferredType::StaticRef("static".to_string()),
        _ => InferredType::object(name),
    }
}
