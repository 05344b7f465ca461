//! In-code type annotation nodes.

use std::fmt;

use recast_syntax::{SyntaxKind, SyntaxNode, TreeBuilder};
use rowan::GreenNode;

/// Type annotation for a parameter, property or return slot.
///
/// Unrepresentable types are `None` at the mapper level, never a variant here.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum SyntaxTypeNode {
    /// Built-in or relative name: `int`, `self`, `iterable`.
    Identifier(String),
    /// Class name rendered from the namespace root.
    FullyQualified(String),
    Nullable(Box<SyntaxTypeNode>),
    Union(Vec<SyntaxTypeNode>),
}

impl SyntaxTypeNode {
    pub fn identifier(name: impl Into<String>) -> Self {
        Self::Identifier(name.into())
    }

    pub fn fully_qualified(name: impl Into<String>) -> Self {
        Self::FullyQualified(name.into())
    }

    pub fn nullable(inner: SyntaxTypeNode) -> Self {
        Self::Nullable(Box::new(inner))
    }

    pub fn is_nullable(&self) -> bool {
        matches!(self, Self::Nullable(_))
    }

    pub fn is_union(&self) -> bool {
        matches!(self, Self::Union(_))
    }

    /// Emit the annotation into `b` at the current position.
    pub fn build(&self, b: &mut TreeBuilder) {
        match self {
            Self::Identifier(name) => {
                b.node(SyntaxKind::TypeName, |b| {
                    b.token(SyntaxKind::Ident, name);
                });
            }
            Self::FullyQualified(name) => {
                b.node(SyntaxKind::FullyQualifiedName, |b| {
                    b.token(SyntaxKind::Ident, &format!("\\{name}"));
                });
            }
            Self::Nullable(inner) => {
                b.node(SyntaxKind::NullableType, |b| {
                    b.token(SyntaxKind::Question, "?");
                    inner.build(b);
                });
            }
            Self::Union(members) => {
                b.node(SyntaxKind::UnionType, |b| {
                    for (i, member) in members.iter().enumerate() {
                        if i > 0 {
                            b.token(SyntaxKind::Pipe, "|");
                        }
                        member.build(b);
                    }
                });
            }
        }
    }

    /// Standalone green subtree, ready to splice.
    pub fn to_green(&self) -> GreenNode {
        let mut b = TreeBuilder::new();
        self.build(&mut b);
        b.finish_green()
    }

    pub fn to_syntax(&self) -> SyntaxNode {
        SyntaxNode::new_root(self.to_green())
    }
}

impl fmt::Display for SyntaxTypeNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Identifier(name) => f.write_str(name),
            Self::FullyQualified(name) => write!(f, "\\{name}"),
            Self::Nullable(inner) => write!(f, "?{inner}"),
            Self::Union(members) => {
                for (i, member) in members.iter().enumerate() {
                    if i > 0 {
                        f.write_str("|")?;
                    }
                    write!(f, "{member}")?;
                }
                Ok(())
            }
        }
    }
}
