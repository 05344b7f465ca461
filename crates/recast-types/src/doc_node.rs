//! Doc-comment type nodes.

use std::fmt;

/// Type as written in a doc comment.
///
/// Strictly more expressive than a syntax annotation: arrays of unions and
/// unions of arrays are both representable.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum DocTypeNode {
    Identifier(String),
    Array(Box<DocTypeNode>),
    Union(Vec<DocTypeNode>),
    Intersection(Vec<DocTypeNode>),
}

impl DocTypeNode {
    pub fn identifier(name: impl Into<String>) -> Self {
        Self::Identifier(name.into())
    }

    pub fn array(inner: DocTypeNode) -> Self {
        Self::Array(Box::new(inner))
    }

    pub fn is_union(&self) -> bool {
        matches!(self, Self::Union(_))
    }

    fn is_compound(&self) -> bool {
        matches!(self, Self::Union(_) | Self::Intersection(_))
    }
}

impl fmt::Display for DocTypeNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Identifier(name) => f.write_str(name),
            Self::Array(inner) if inner.is_compound() => write!(f, "({inner})[]"),
            Self::Array(inner) => write!(f, "{inner}[]"),
            Self::Union(members) => write_joined(f, members, "|"),
            Self::Intersection(members) => write_joined(f, members, "&"),
        }
    }
}

fn write_joined(f: &mut fmt::Formatter<'_>, members: &[DocTypeNode], sep: &str) -> fmt::Result {
    for (i, member) in members.iter().enumerate() {
        if i > 0 {
            f.write_str(sep)?;
        }
        write!(f, "{member}")?;
    }
    Ok(())
}
