use recast_core::{InferredType, TypeKind, VersionFeature};

use super::TypeStrategy;
use crate::doc_node::DocTypeNode;
use crate::mapper::{TypeMapper, TypeSlot};
use crate::syntax_node::SyntaxTypeNode;
use crate::{Error, Result};

/// `int`, `float`, `string`, `bool`.
#[derive(Clone, Copy, Debug, Default)]
pub struct ScalarStrategy;

impl ScalarStrategy {
    fn name(ty: &InferredType, operation: &'static str) -> Result<&'static str> {
        match ty {
            InferredType::Scalar(kind) => Ok(kind.name()),
            other => Err(Error::UnsupportedType {
                operation,
                kind: other.kind(),
            }),
        }
    }
}

impl TypeStrategy for ScalarStrategy {
    fn kind(&self) -> TypeKind {
        TypeKind::Scalar
    }

    fn to_doc_node(&self, ty: &InferredType, _mapper: &TypeMapper<'_>) -> Result<DocTypeNode> {
        Self::name(ty, "to_doc_type_node").map(DocTypeNode::identifier)
    }

    fn to_syntax_node(
        &self,
        ty: &InferredType,
        _slot: TypeSlot,
        mapper: &TypeMapper<'_>,
    ) -> Result<Option<SyntaxTypeNode>> {
        let name = Self::name(ty, "to_syntax_type_node")?;
        if !mapper.supports(VersionFeature::ScalarTypes) {
            return Ok(None);
        }
        Ok(Some(SyntaxTypeNode::identifier(name)))
    }
}
