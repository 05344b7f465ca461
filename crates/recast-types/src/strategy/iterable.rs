use recast_core::{InferredType, TypeKind, VersionFeature};

use super::TypeStrategy;
use crate::doc_node::DocTypeNode;
use crate::mapper::{TypeMapper, TypeSlot};
use crate::syntax_node::SyntaxTypeNode;
use crate::Result;

/// `iterable<T>`: documented like an array of `T`.
#[derive(Clone, Copy, Debug, Default)]
pub struct IterableStrategy;

impl TypeStrategy for IterableStrategy {
    fn kind(&self) -> TypeKind {
        TypeKind::Iterable
    }

    // The mapper distributes iterables before dispatch.
    fn to_doc_node(&self, ty: &InferredType, mapper: &TypeMapper<'_>) -> Result<DocTypeNode> {
        mapper.to_doc_type_node(ty)
    }

    fn to_syntax_node(
        &self,
        _ty: &InferredType,
        _slot: TypeSlot,
        mapper: &TypeMapper<'_>,
    ) -> Result<Option<SyntaxTypeNode>> {
        if !mapper.supports(VersionFeature::IterableType) {
            return Ok(None);
        }
        Ok(Some(SyntaxTypeNode::identifier("iterable")))
    }
}
