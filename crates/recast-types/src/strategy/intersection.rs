use recast_core::{InferredType, TypeKind};

use super::TypeStrategy;
use crate::doc_node::DocTypeNode;
use crate::mapper::{TypeMapper, TypeSlot};
use crate::syntax_node::SyntaxTypeNode;
use crate::Result;

/// `A&B`, doc comments only.
#[derive(Clone, Copy, Debug, Default)]
pub struct IntersectionStrategy;

impl TypeStrategy for IntersectionStrategy {
    fn kind(&self) -> TypeKind {
        TypeKind::Intersection
    }

    fn to_doc_node(&self, ty: &InferredType, mapper: &TypeMapper<'_>) -> Result<DocTypeNode> {
        let mut members = Vec::new();
        for member in ty.members().unwrap_or_default() {
            let node = mapper.to_doc_type_node(member)?;
            if !members.contains(&node) {
                members.push(node);
            }
        }
        Ok(DocTypeNode::Intersection(members))
    }

    fn to_syntax_node(
        &self,
        _ty: &InferredType,
        _slot: TypeSlot,
        _mapper: &TypeMapper<'_>,
    ) -> Result<Option<SyntaxTypeNode>> {
        Ok(None)
    }
}
