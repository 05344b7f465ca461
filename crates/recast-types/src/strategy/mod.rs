//! Per-kind mapping strategies.
//!
//! The mapper tries strategies in registration order and the first one that
//! accepts a type owns it, so the order of `defaults()` is part of the
//! mapper's behavior.

mod intersection;
mod iterable;
mod scalar;
mod special;

pub use intersection::IntersectionStrategy;
pub use iterable::IterableStrategy;
pub use scalar::ScalarStrategy;
pub use special::{MixedStrategy, NeverStrategy, NullStrategy};

use recast_core::{InferredType, TypeKind};

use crate::doc_node::DocTypeNode;
use crate::mapper::{TypeMapper, TypeSlot};
use crate::syntax_node::SyntaxTypeNode;
use crate::Result;

/// Converts one `TypeKind` into doc and syntax forms.
///
/// The mapper is passed in on every call so a strategy can render nested
/// types without holding a reference back to it.
pub trait TypeStrategy: Send + Sync {
    /// Kind this strategy is registered for.
    fn kind(&self) -> TypeKind;

    fn accepts(&self, ty: &InferredType) -> bool {
        ty.kind() == self.kind()
    }

    fn to_doc_node(&self, ty: &InferredType, mapper: &TypeMapper<'_>) -> Result<DocTypeNode>;

    /// `Ok(None)` when the type has no annotation form for this slot.
    fn to_syntax_node(
        &self,
        ty: &InferredType,
        slot: TypeSlot,
        mapper: &TypeMapper<'_>,
    ) -> Result<Option<SyntaxTypeNode>>;
}

/// The default registry, in dispatch order.
pub fn defaults() -> Vec<Box<dyn TypeStrategy>> {
    vec![
        Box::new(ScalarStrategy),
        Box::new(NullStrategy),
        Box::new(MixedStrategy),
        Box::new(NeverStrategy),
        Box::new(IterableStrategy),
        Box::new(IntersectionStrategy),
    ]
}
