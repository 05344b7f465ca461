//! Types that only exist in doc comments.

use recast_core::{InferredType, TypeKind};

use super::TypeStrategy;
use crate::doc_node::DocTypeNode;
use crate::mapper::{TypeMapper, TypeSlot};
use crate::syntax_node::SyntaxTypeNode;
use crate::Result;

macro_rules! doc_only_strategy {
    ($(#[$meta:meta])* $name:ident, $kind:ident, $doc:literal) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Default)]
        pub struct $name;

        impl TypeStrategy for $name {
            fn kind(&self) -> TypeKind {
                TypeKind::$kind
            }

            fn to_doc_node(
                &self,
                _ty: &InferredType,
                _mapper: &TypeMapper<'_>,
            ) -> Result<DocTypeNode> {
                Ok(DocTypeNode::identifier($doc))
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
    };
}

doc_only_strategy!(NullStrategy, Null, "null");
doc_only_strategy!(MixedStrategy, Mixed, "mixed");
doc_only_strategy!(
    /// `never` is documented as `mixed`.
    NeverStrategy,
    Never,
    "mixed"
);
