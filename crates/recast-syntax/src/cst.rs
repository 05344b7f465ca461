//! Syntax kinds for the rewritten language.
//!
//! `SyntaxKind` covers both token kinds and node kinds. Trees are produced by
//! an external parser (or by `TreeBuilder`); this crate never lexes text.
//! `PhpLang` implements Rowan's `Language` trait for tree construction.

use rowan::Language;

/// All token and node kinds. Tokens first, then nodes, then `__LAST` sentinel.
/// `#[repr(u16)]` enables safe transmute in `kind_from_raw`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
pub enum SyntaxKind {
    ParenOpen = 0,
    ParenClose,
    BraceOpen,
    BraceClose,
    Semicolon,
    Comma,
    Equals,
    Question,
    Pipe,
    Amp,
    Arrow,
    DoubleColon,
    Operator,

    KwClass,
    KwInterface,
    KwTrait,
    KwFunction,
    KwReturn,
    KwNew,
    KwEcho,
    KwIf,
    KwExtends,
    KwPublic,

    /// Identifier or qualified name segment, e.g. `Foo\Bar`.
    Ident,
    /// Variable name including the sigil, e.g. `$a`.
    VarName,
    IntNumber,
    StringLiteral,

    Whitespace,
    Newline,
    Comment,

    // --- Node kinds (non-terminals) ---
    Root,
    Block,

    // Statements
    Class,
    Interface,
    Trait,
    Function,
    ClassMethod,
    Property,
    ExpressionStmt,
    ReturnStmt,
    EchoStmt,
    IfStmt,

    // Expressions
    Assign,
    Variable,
    MethodCall,
    StaticCall,
    FuncCall,
    PropertyFetch,
    New,
    Closure,
    BinaryOp,
    ConstFetch,
    Literal,

    // Auxiliary nodes
    Name,
    ParamList,
    Param,
    ArgList,
    Arg,

    // Type annotations
    TypeName,
    FullyQualifiedName,
    NullableType,
    UnionType,

    Error,

    // Must be last - used for bounds checking in `kind_from_raw`
    #[doc(hidden)]
    __LAST,
}

use SyntaxKind::*;

impl SyntaxKind {
    #[inline]
    pub fn is_trivia(self) -> bool {
        matches!(self, Whitespace | Newline | Comment)
    }

    #[inline]
    pub fn is_token(self) -> bool {
        (self as u16) < (Root as u16)
    }

    #[inline]
    pub fn is_node(self) -> bool {
        !self.is_token() && self != __LAST
    }

    #[inline]
    pub fn is_statement(self) -> bool {
        kind_sets::STMT.contains(self)
    }

    #[inline]
    pub fn is_expr(self) -> bool {
        kind_sets::EXPR.contains(self)
    }

    /// Node kinds that hold a sequence of statements.
    #[inline]
    pub fn is_statement_list(self) -> bool {
        matches!(self, Root | Block)
    }
}

impl From<SyntaxKind> for rowan::SyntaxKind {
    #[inline]
    fn from(kind: SyntaxKind) -> Self {
        Self(kind as u16)
    }
}

/// Language tag for Rowan's tree types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PhpLang {}

impl Language for PhpLang {
    type Kind = SyntaxKind;

    fn kind_from_raw(raw: rowan::SyntaxKind) -> Self::Kind {
        assert!(raw.0 < __LAST as u16);
        // SAFETY: We've verified the value is in bounds, and SyntaxKind is repr(u16)
        unsafe { std::mem::transmute::<u16, SyntaxKind>(raw.0) }
    }

    fn kind_to_raw(kind: Self::Kind) -> rowan::SyntaxKind {
        kind.into()
    }
}

/// Type aliases for Rowan types parameterized by our language.
pub type SyntaxNode = rowan::SyntaxNode<PhpLang>;
pub type SyntaxToken = rowan::SyntaxToken<PhpLang>;
pub type SyntaxElement = rowan::NodeOrToken<SyntaxNode, SyntaxToken>;

/// 128-bit bitset of `SyntaxKind`s for O(1) membership testing.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct KindSet(u128);

impl KindSet {
    pub const EMPTY: KindSet = KindSet(0);

    /// Panics at compile time if any kind's discriminant >= 128.
    #[inline]
    pub const fn new(kinds: &[SyntaxKind]) -> Self {
        let mut bits = 0u128;
        let mut i = 0;
        while i < kinds.len() {
            let kind = kinds[i] as u16;
            assert!(kind < 128, "SyntaxKind value exceeds KindSet capacity");
            bits |= 1 << kind;
            i += 1;
        }
        KindSet(bits)
    }

    #[inline]
    pub const fn single(kind: SyntaxKind) -> Self {
        let kind = kind as u16;
        assert!(kind < 128, "SyntaxKind value exceeds KindSet capacity");
        KindSet(1 << kind)
    }

    /// Every node kind, tokens excluded.
    pub const fn all_nodes() -> Self {
        let mut bits = 0u128;
        let mut kind = Root as u16;
        while kind < __LAST as u16 {
            bits |= 1 << kind;
            kind += 1;
        }
        KindSet(bits)
    }

    #[inline]
    pub const fn contains(&self, kind: SyntaxKind) -> bool {
        let kind = kind as u16;
        if kind >= 128 {
            return false;
        }
        self.0 & (1 << kind) != 0
    }
}

impl std::fmt::Debug for KindSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kinds = (0..__LAST as u16)
            .filter(|raw| self.0 & (1 << raw) != 0)
            .map(|raw| PhpLang::kind_from_raw(rowan::SyntaxKind(raw)));
        f.debug_set().entries(kinds).finish()
    }
}

/// Pre-defined kind sets backing the abstract node classes.
pub mod kind_sets {
    use super::*;

    pub const CLASS_LIKE: KindSet = KindSet::new(&[Class, Interface, Trait]);

    pub const FUNCTION_LIKE: KindSet = KindSet::new(&[Function, ClassMethod, Closure]);

    pub const STMT: KindSet = KindSet::new(&[
        Class,
        Interface,
        Trait,
        Function,
        ClassMethod,
        Property,
        ExpressionStmt,
        ReturnStmt,
        EchoStmt,
        IfStmt,
    ]);

    pub const EXPR: KindSet = KindSet::new(&[
        Assign,
        Variable,
        MethodCall,
        StaticCall,
        FuncCall,
        PropertyFetch,
        New,
        Closure,
        BinaryOp,
        ConstFetch,
        Literal,
    ]);

    pub const CALL_LIKE: KindSet = KindSet::new(&[MethodCall, StaticCall, FuncCall, New]);

    pub const COMPLEX_TYPE: KindSet = KindSet::new(&[NullableType, UnionType]);

    pub const TYPE_ANNOTATION: KindSet =
        KindSet::new(&[TypeName, FullyQualifiedName, NullableType, UnionType]);
}
