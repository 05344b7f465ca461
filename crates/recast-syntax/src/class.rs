//! Node classes: named descriptors for "is kind of" queries.
//!
//! A class is either a concrete node kind (`Assign`) or an abstract category
//! (`Expr`, `Stmt`, `ClassLike`, ...). Matching is hierarchy-aware: a `Class`
//! node is a `ClassLike`, a `Stmt` and a `Node`. Token kinds are not node
//! classes.

use crate::cst::{KindSet, SyntaxKind, SyntaxNode, kind_sets};

use SyntaxKind::*;

/// Concrete node kinds addressable by name.
const CONCRETE: &[(&str, SyntaxKind)] = &[
    ("Root", Root),
    ("Block", Block),
    ("Class", Class),
    ("Interface", Interface),
    ("Trait", Trait),
    ("Function", Function),
    ("ClassMethod", ClassMethod),
    ("Property", Property),
    ("ExpressionStmt", ExpressionStmt),
    ("ReturnStmt", ReturnStmt),
    ("EchoStmt", EchoStmt),
    ("IfStmt", IfStmt),
    ("Assign", Assign),
    ("Variable", Variable),
    ("MethodCall", MethodCall),
    ("StaticCall", StaticCall),
    ("FuncCall", FuncCall),
    ("PropertyFetch", PropertyFetch),
    ("New", New),
    ("Closure", Closure),
    ("BinaryOp", BinaryOp),
    ("ConstFetch", ConstFetch),
    ("Literal", Literal),
    ("Name", Name),
    ("ParamList", ParamList),
    ("Param", Param),
    ("ArgList", ArgList),
    ("Arg", Arg),
    ("TypeName", TypeName),
    ("FullyQualifiedName", FullyQualifiedName),
    ("NullableType", NullableType),
    ("UnionType", UnionType),
    ("Error", Error),
];

/// Abstract categories.
const ABSTRACT: &[(&str, KindSet)] = &[
    ("Node", KindSet::all_nodes()),
    ("Stmt", kind_sets::STMT),
    ("Expr", kind_sets::EXPR),
    ("ClassLike", kind_sets::CLASS_LIKE),
    ("FunctionLike", kind_sets::FUNCTION_LIKE),
    ("CallLike", kind_sets::CALL_LIKE),
    ("ComplexType", kind_sets::COMPLEX_TYPE),
    ("TypeAnnotation", kind_sets::TYPE_ANNOTATION),
];

/// A resolved node class.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NodeClass {
    name: &'static str,
    kinds: KindSet,
}

impl NodeClass {
    /// Resolve a class by name. Returns `None` for token kinds and unknown names.
    pub fn resolve(name: &str) -> Option<Self> {
        if let Some(&(name, kind)) = CONCRETE.iter().find(|(n, _)| *n == name) {
            return Some(Self {
                name,
                kinds: KindSet::single(kind),
            });
        }
        ABSTRACT
            .iter()
            .find(|(n, _)| *n == name)
            .map(|&(name, kinds)| Self { name, kinds })
    }

    /// The class of exactly one concrete node kind.
    pub fn of_kind(kind: SyntaxKind) -> Option<Self> {
        CONCRETE
            .iter()
            .find(|(_, k)| *k == kind)
            .map(|&(name, kind)| Self {
                name,
                kinds: KindSet::single(kind),
            })
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn kinds(&self) -> KindSet {
        self.kinds
    }

    #[inline]
    pub fn contains(&self, kind: SyntaxKind) -> bool {
        self.kinds.contains(kind)
    }

    #[inline]
    pub fn matches(&self, node: &SyntaxNode) -> bool {
        self.contains(node.kind())
    }
}

/// Name of a concrete node kind, `None` for tokens.
pub fn kind_name(kind: SyntaxKind) -> Option<&'static str> {
    NodeClass::of_kind(kind).map(|class| class.name())
}
