//! Typed AST wrappers over CST nodes.
//!
//! Each struct wraps a `SyntaxNode` and provides typed accessors.
//! Cast is infallible for correct `SyntaxKind` - validation happens elsewhere.

use rowan::Direction;

use crate::cst::{SyntaxKind, SyntaxNode, SyntaxToken};

macro_rules! ast_node {
    ($name:ident, $kind:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub struct $name(SyntaxNode);

        impl $name {
            pub fn cast(node: SyntaxNode) -> Option<Self> {
                (node.kind() == SyntaxKind::$kind).then(|| Self(node))
            }

            pub fn as_cst(&self) -> &SyntaxNode {
                &self.0
            }
        }
    };
}

ast_node!(Root, Root);
ast_node!(Block, Block);
ast_node!(Class, Class);
ast_node!(Interface, Interface);
ast_node!(Trait, Trait);
ast_node!(ExpressionStmt, ExpressionStmt);
ast_node!(Assign, Assign);
ast_node!(Variable, Variable);
ast_node!(Name, Name);

/// Class, interface or trait declaration.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ClassLike {
    Class(Class),
    Interface(Interface),
    Trait(Trait),
}

impl ClassLike {
    pub fn cast(node: SyntaxNode) -> Option<Self> {
        match node.kind() {
            SyntaxKind::Class => Class::cast(node).map(ClassLike::Class),
            SyntaxKind::Interface => Interface::cast(node).map(ClassLike::Interface),
            SyntaxKind::Trait => Trait::cast(node).map(ClassLike::Trait),
            _ => None,
        }
    }

    pub fn as_cst(&self) -> &SyntaxNode {
        match self {
            ClassLike::Class(n) => n.as_cst(),
            ClassLike::Interface(n) => n.as_cst(),
            ClassLike::Trait(n) => n.as_cst(),
        }
    }

    pub fn name(&self) -> Option<Name> {
        match self {
            ClassLike::Class(class) => class.name(),
            ClassLike::Interface(n) => name_child(n.as_cst()),
            ClassLike::Trait(n) => name_child(n.as_cst()),
        }
    }

    /// Only classes can be anonymous.
    pub fn is_anonymous(&self) -> bool {
        match self {
            ClassLike::Class(class) => class.is_anonymous(),
            _ => false,
        }
    }
}

impl Root {
    pub fn statements(&self) -> impl Iterator<Item = SyntaxNode> + '_ {
        self.0.children().filter(|n| n.kind().is_statement())
    }
}

impl Block {
    pub fn statements(&self) -> impl Iterator<Item = SyntaxNode> + '_ {
        self.0.children().filter(|n| n.kind().is_statement())
    }
}

impl Class {
    /// Name following the `class` keyword.
    pub fn name(&self) -> Option<Name> {
        name_after(&self.0, SyntaxKind::KwClass)
    }

    pub fn parent_name(&self) -> Option<Name> {
        name_after(&self.0, SyntaxKind::KwExtends)
    }

    /// `new class { ... }` declares a class without a name.
    pub fn is_anonymous(&self) -> bool {
        self.name().is_none()
    }

    pub fn members(&self) -> impl Iterator<Item = SyntaxNode> + '_ {
        self.0.children().filter(|n| n.kind().is_statement())
    }
}

impl ExpressionStmt {
    pub fn expr(&self) -> Option<SyntaxNode> {
        self.0.children().find(|n| n.kind().is_expr())
    }
}

impl Assign {
    /// Left-hand side.
    pub fn target(&self) -> Option<SyntaxNode> {
        self.0.children().find(|n| n.kind().is_expr())
    }

    /// Right-hand side.
    pub fn value(&self) -> Option<SyntaxNode> {
        self.0.children().filter(|n| n.kind().is_expr()).nth(1)
    }
}

impl Variable {
    pub fn token(&self) -> Option<SyntaxToken> {
        self.0
            .children_with_tokens()
            .filter_map(|it| it.into_token())
            .find(|t| t.kind() == SyntaxKind::VarName)
    }

    /// Name without the `$` sigil.
    pub fn name(&self) -> Option<String> {
        self.token()
            .map(|t| t.text().trim_start_matches('$').to_string())
    }
}

impl Name {
    pub fn text(&self) -> String {
        self.0
            .children_with_tokens()
            .filter_map(|it| it.into_token())
            .filter(|t| !t.kind().is_trivia())
            .map(|t| t.text().to_string())
            .collect()
    }
}

fn name_child(node: &SyntaxNode) -> Option<Name> {
    node.children().find_map(Name::cast)
}

/// `Name` directly following the `keyword` token, trivia skipped.
fn name_after(node: &SyntaxNode, keyword: SyntaxKind) -> Option<Name> {
    node.children_with_tokens()
        .filter(|it| !it.kind().is_trivia())
        .skip_while(|it| it.kind() != keyword)
        .nth(1)
        .and_then(|it| it.into_node())
        .and_then(Name::cast)
}

/// Nearest statement containing `node`, `node` itself included.
pub fn enclosing_statement(node: &SyntaxNode) -> Option<SyntaxNode> {
    node.ancestors().find(|n| n.kind().is_statement())
}

/// Statement before `stmt` in the same statement list.
///
/// Returns `None` at the start of the list; the walk never leaves the list.
pub fn previous_statement(stmt: &SyntaxNode) -> Option<SyntaxNode> {
    stmt.siblings(Direction::Prev)
        .skip(1)
        .find(|n| n.kind().is_statement())
}

/// Statement after `stmt` in the same statement list.
pub fn next_statement(stmt: &SyntaxNode) -> Option<SyntaxNode> {
    stmt.siblings(Direction::Next)
        .skip(1)
        .find(|n| n.kind().is_statement())
}
