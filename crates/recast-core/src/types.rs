//! Inferred type model.
//!
//! `InferredType` is what the external inference engine hands over for a
//! single query. Values are produced fresh per call and never cached here.
//! `TypeKind` is the closed discriminant used for strategy dispatch.

use std::fmt;

/// Scalar built-in types.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ScalarKind {
    Int,
    Float,
    String,
    Bool,
}

impl ScalarKind {
    /// Canonical short name, identical in doc comments and annotations.
    pub fn name(self) -> &'static str {
        match self {
            Self::Int => "int",
            Self::Float => "float",
            Self::String => "string",
            Self::Bool => "bool",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "int" | "integer" => Some(Self::Int),
            "float" | "double" => Some(Self::Float),
            "string" => Some(Self::String),
            "bool" | "boolean" => Some(Self::Bool),
            _ => None,
        }
    }
}

/// Identity of a class-typed value.
///
/// Local variants (`Aliased`, `Shortened`) remember the name as written in
/// source next to the resolved one.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ObjectType {
    /// Plain class reference, resolved against the symbol universe on render.
    Named(String),
    /// Always rendered from the namespace root.
    FullyQualified(String),
    /// Imported under an alias: `use Foo\Bar as Baz`.
    Aliased { alias: String, full: String },
    /// Imported and referenced by its short name.
    Shortened { short: String, full: String },
    /// The enclosing class, referenced as `self`.
    SelfRef(String),
}

impl ObjectType {
    /// Name as it appears at the use site.
    pub fn class_name(&self) -> &str {
        match self {
            Self::Named(name) | Self::FullyQualified(name) | Self::SelfRef(name) => name,
            Self::Aliased { alias, .. } => alias,
            Self::Shortened { short, .. } => short,
        }
    }

    /// Fully resolved class name.
    pub fn identity(&self) -> &str {
        match self {
            Self::Named(name) | Self::FullyQualified(name) | Self::SelfRef(name) => name,
            Self::Aliased { full, .. } | Self::Shortened { full, .. } => full,
        }
    }

    pub fn is_self(&self) -> bool {
        matches!(self, Self::SelfRef(_))
    }
}

/// Discriminant of `InferredType`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TypeKind {
    Scalar,
    Array,
    Iterable,
    Union,
    Intersection,
    Object,
    ObjectWithoutClass,
    StaticRef,
    Closure,
    Callable,
    Void,
    Never,
    Null,
    Mixed,
    Resource,
}

impl TypeKind {
    pub fn name(self) -> &'static str {
        match self {
            Self::Scalar => "scalar",
            Self::Array => "array",
            Self::Iterable => "iterable",
            Self::Union => "union",
            Self::Intersection => "intersection",
            Self::Object => "object",
            Self::ObjectWithoutClass => "object-without-class",
            Self::StaticRef => "static",
            Self::Closure => "closure",
            Self::Callable => "callable",
            Self::Void => "void",
            Self::Never => "never",
            Self::Null => "null",
            Self::Mixed => "mixed",
            Self::Resource => "resource",
        }
    }
}

impl fmt::Display for TypeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Result of whole-program type inference for one expression or slot.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum InferredType {
    Scalar(ScalarKind),
    Array(Box<InferredType>),
    Iterable(Box<InferredType>),
    /// Ordered, deduplicated members; cardinality is expected to be >= 2.
    Union(Vec<InferredType>),
    Intersection(Vec<InferredType>),
    Object(ObjectType),
    ObjectWithoutClass,
    /// Late static binding to the given class.
    StaticRef(String),
    Closure,
    Callable,
    Void,
    Never,
    Null,
    Mixed,
    Resource,
}

impl InferredType {
    pub fn int() -> Self {
        Self::Scalar(ScalarKind::Int)
    }

    pub fn float() -> Self {
        Self::Scalar(ScalarKind::Float)
    }

    pub fn string() -> Self {
        Self::Scalar(ScalarKind::String)
    }

    pub fn bool() -> Self {
        Self::Scalar(ScalarKind::Bool)
    }

    pub fn array_of(item: InferredType) -> Self {
        Self::Array(Box::new(item))
    }

    pub fn iterable_of(item: InferredType) -> Self {
        Self::Iterable(Box::new(item))
    }

    pub fn object(name: impl Into<String>) -> Self {
        Self::Object(ObjectType::Named(name.into()))
    }

    pub fn fully_qualified(name: impl Into<String>) -> Self {
        Self::Object(ObjectType::FullyQualified(name.into()))
    }

    pub fn self_ref(name: impl Into<String>) -> Self {
        Self::Object(ObjectType::SelfRef(name.into()))
    }

    /// `T|null`, normalized like any other union.
    pub fn nullable(inner: InferredType) -> Self {
        Self::union([inner, Self::Null])
    }

    /// Normalizing union constructor.
    ///
    /// Nested unions are flattened and duplicates dropped, keeping the first
    /// occurrence. A single survivor is returned bare; no members at all
    /// yields `Never`.
    pub fn union(members: impl IntoIterator<Item = InferredType>) -> Self {
        let mut flat = Vec::new();
        for member in members {
            match member {
                Self::Union(inner) => inner.into_iter().for_each(|m| push_unique(&mut flat, m)),
                other => push_unique(&mut flat, other),
            }
        }
        match flat.len() {
            0 => Self::Never,
            1 => flat.remove(0),
            _ => Self::Union(flat),
        }
    }

    /// Normalizing intersection constructor, same rules as `union`.
    pub fn intersection(members: impl IntoIterator<Item = InferredType>) -> Self {
        let mut flat = Vec::new();
        for member in members {
            match member {
                Self::Intersection(inner) => {
                    inner.into_iter().for_each(|m| push_unique(&mut flat, m))
                }
                other => push_unique(&mut flat, other),
            }
        }
        match flat.len() {
            0 => Self::Mixed,
            1 => flat.remove(0),
            _ => Self::Intersection(flat),
        }
    }

    pub fn kind(&self) -> TypeKind {
        match self {
            Self::Scalar(_) => TypeKind::Scalar,
            Self::Array(_) => TypeKind::Array,
            Self::Iterable(_) => TypeKind::Iterable,
            Self::Union(_) => TypeKind::Union,
            Self::Intersection(_) => TypeKind::Intersection,
            Self::Object(_) => TypeKind::Object,
            Self::ObjectWithoutClass => TypeKind::ObjectWithoutClass,
            Self::StaticRef(_) => TypeKind::StaticRef,
            Self::Closure => TypeKind::Closure,
            Self::Callable => TypeKind::Callable,
            Self::Void => TypeKind::Void,
            Self::Never => TypeKind::Never,
            Self::Null => TypeKind::Null,
            Self::Mixed => TypeKind::Mixed,
            Self::Resource => TypeKind::Resource,
        }
    }

    /// Members of a union or intersection.
    pub fn members(&self) -> Option<&[InferredType]> {
        match self {
            Self::Union(members) | Self::Intersection(members) => Some(members),
            _ => None,
        }
    }

    /// Item type of an array or iterable.
    pub fn item(&self) -> Option<&InferredType> {
        match self {
            Self::Array(item) | Self::Iterable(item) => Some(item),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&ObjectType> {
        match self {
            Self::Object(object) => Some(object),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn is_union(&self) -> bool {
        matches!(self, Self::Union(_))
    }
}

fn push_unique(members: &mut Vec<InferredType>, ty: InferredType) {
    if !members.contains(&ty) {
        members.push(ty);
    }
}

/// Debug-oriented description, used in diagnostics and trace events.
impl fmt::Display for InferredType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar(kind) => f.write_str(kind.name()),
            Self::Array(item) => write!(f, "array<{item}>"),
            Self::Iterable(item) => write!(f, "iterable<{item}>"),
            Self::Union(members) => write_joined(f, members, "|"),
            Self::Intersection(members) => write_joined(f, members, "&"),
            Self::Object(object) => f.write_str(object.class_name()),
            Self::ObjectWithoutClass => f.write_str("object"),
            Self::StaticRef(class) => write!(f, "static({class})"),
            Self::Closure => f.write_str("Closure"),
            Self::Callable => f.write_str("callable"),
            Self::Void => f.write_str("void"),
            Self::Never => f.write_str("never"),
            Self::Null => f.write_str("null"),
            Self::Mixed => f.write_str("mixed"),
            Self::Resource => f.write_str("resource"),
        }
    }
}

fn write_joined(f: &mut fmt::Formatter<'_>, members: &[InferredType], sep: &str) -> fmt::Result {
    f.write_str("(")?;
    for (i, member) in members.iter().enumerate() {
        if i > 0 {
            f.write_str(sep)?;
        }
        write!(f, "{member}")?;
    }
    f.write_str(")")
}
