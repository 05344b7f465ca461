//! Read-only search over syntax trees.
//!
//! Descendant searches are pre-order and include the scope roots themselves.
//! Node kinds are requested by class name (`"Assign"`, `"Expr"`,
//! `"ClassLike"`, ...); a name that is not a node class is a caller bug and
//! fails with `Error::InvalidArgument` rather than matching nothing.

use crate::ast::{self, Assign, ClassLike};
use crate::class::NodeClass;
use crate::cst::{SyntaxKind, SyntaxNode};
use crate::resolve::{NameResolver, NodeComparer, StructuralComparer, TokenNameResolver};
use crate::{Error, Result};

/// One or more subtrees to search.
pub trait Scope {
    fn roots(&self) -> &[SyntaxNode];
}

impl Scope for SyntaxNode {
    fn roots(&self) -> &[SyntaxNode] {
        std::slice::from_ref(self)
    }
}

impl Scope for [SyntaxNode] {
    fn roots(&self) -> &[SyntaxNode] {
        self
    }
}

impl Scope for Vec<SyntaxNode> {
    fn roots(&self) -> &[SyntaxNode] {
        self
    }
}

impl<const N: usize> Scope for [SyntaxNode; N] {
    fn roots(&self) -> &[SyntaxNode] {
        self
    }
}

/// Tree queries used by rewrite rules to gather context.
#[derive(Clone, Debug, Default)]
pub struct NodeFinder<R = TokenNameResolver, C = StructuralComparer> {
    resolver: R,
    comparer: C,
}

impl NodeFinder {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<R: NameResolver, C: NodeComparer> NodeFinder<R, C> {
    pub fn with(resolver: R, comparer: C) -> Self {
        Self { resolver, comparer }
    }

    // --- Ancestors ---

    /// First ancestor (the node itself excluded) matching any of `kinds`.
    pub fn find_first_ancestor_of_types(
        &self,
        node: &SyntaxNode,
        kinds: &[&str],
    ) -> Result<Option<SyntaxNode>> {
        let classes = resolve_all(kinds, "find_first_ancestor_of_types", 2)?;
        Ok(node
            .ancestors()
            .skip(1)
            .find(|ancestor| classes.iter().any(|class| class.matches(ancestor))))
    }

    pub fn find_first_ancestor_of_type(
        &self,
        node: &SyntaxNode,
        kind: &str,
    ) -> Result<Option<SyntaxNode>> {
        let class = resolve(kind, "find_first_ancestor_of_type", 2)?;
        Ok(node.ancestors().skip(1).find(|ancestor| class.matches(ancestor)))
    }

    // --- Descendants ---

    pub fn find_all_of_type<S: Scope + ?Sized>(
        &self,
        scope: &S,
        kind: &str,
    ) -> Result<Vec<SyntaxNode>> {
        let class = resolve(kind, "find_all_of_type", 2)?;
        Ok(self.find(scope, |node| class.matches(node)))
    }

    pub fn find_first_of_type<S: Scope + ?Sized>(
        &self,
        scope: &S,
        kind: &str,
    ) -> Result<Option<SyntaxNode>> {
        let class = resolve(kind, "find_first_of_type", 2)?;
        Ok(self.find_first(scope, |node| class.matches(node)))
    }

    /// Last node of `find_all_of_type`, not a reverse search.
    pub fn find_last_of_type<S: Scope + ?Sized>(
        &self,
        scope: &S,
        kind: &str,
    ) -> Result<Option<SyntaxNode>> {
        let class = resolve(kind, "find_last_of_type", 2)?;
        Ok(self.find(scope, |node| class.matches(node)).pop())
    }

    pub fn find<S: Scope + ?Sized>(
        &self,
        scope: &S,
        mut predicate: impl FnMut(&SyntaxNode) -> bool,
    ) -> Vec<SyntaxNode> {
        preorder(scope).filter(|node| predicate(node)).collect()
    }

    pub fn find_first<S: Scope + ?Sized>(
        &self,
        scope: &S,
        mut predicate: impl FnMut(&SyntaxNode) -> bool,
    ) -> Option<SyntaxNode> {
        preorder(scope).find(|node| predicate(node))
    }

    /// Class, interface and trait declarations; anonymous classes excluded.
    pub fn find_class_likes<S: Scope + ?Sized>(&self, scope: &S) -> Vec<ClassLike> {
        preorder(scope)
            .filter_map(ClassLike::cast)
            .filter(|class_like| !class_like.is_anonymous())
            .collect()
    }

    pub fn find_first_non_anonymous_class<S: Scope + ?Sized>(
        &self,
        scope: &S,
    ) -> Option<ClassLike> {
        preorder(scope)
            .filter_map(ClassLike::cast)
            .find(|class_like| !class_like.is_anonymous())
    }

    pub fn has_descendant_of_types<S: Scope + ?Sized>(
        &self,
        scope: &S,
        kinds: &[&str],
    ) -> Result<bool> {
        let classes = resolve_all(kinds, "has_descendant_of_types", 2)?;
        Ok(preorder(scope).any(|node| classes.iter().any(|class| class.matches(&node))))
    }

    /// First node of class `kind` whose name resolves to `name`.
    pub fn find_descendant_named<S: Scope + ?Sized>(
        &self,
        scope: &S,
        kind: &str,
        name: &str,
    ) -> Result<Option<SyntaxNode>> {
        let class = resolve(kind, "find_descendant_named", 2)?;
        Ok(self.find_first(scope, |node| {
            class.matches(node) && self.resolver.is_name(node, name)
        }))
    }

    pub fn has_descendant_named<S: Scope + ?Sized>(
        &self,
        scope: &S,
        kind: &str,
        name: &str,
    ) -> Result<bool> {
        let class = resolve(kind, "has_descendant_named", 2)?;
        Ok(preorder(scope).any(|node| class.matches(&node) && self.resolver.is_name(&node, name)))
    }

    /// `$name` anywhere in scope; `name` is given without the sigil.
    pub fn find_variable_named<S: Scope + ?Sized>(
        &self,
        scope: &S,
        name: &str,
    ) -> Option<SyntaxNode> {
        self.find_first(scope, |node| {
            node.kind() == SyntaxKind::Variable && self.resolver.is_name(node, name)
        })
    }

    pub fn has_variable_named<S: Scope + ?Sized>(&self, scope: &S, name: &str) -> bool {
        self.find_variable_named(scope, name).is_some()
    }

    // --- Backward statement search ---

    /// Nearest earlier assignment whose target is structurally equal to `expr`.
    ///
    /// The statement containing `expr` is searched first, then each earlier
    /// statement of the same list. Enclosing blocks are never entered.
    pub fn find_previous_assignment_to(&self, expr: &SyntaxNode) -> Option<SyntaxNode> {
        self.find_first_previous(expr, |node| {
            Assign::cast(node.clone())
                .and_then(|assign| assign.target())
                .is_some_and(|target| self.comparer.are_equal(&target, expr))
        })
    }

    /// Search the statement enclosing `node`, then walk earlier statements
    /// of the same list until `predicate` matches or the list starts.
    pub fn find_first_previous(
        &self,
        node: &SyntaxNode,
        mut predicate: impl FnMut(&SyntaxNode) -> bool,
    ) -> Option<SyntaxNode> {
        let mut stmt = ast::enclosing_statement(node)?;
        loop {
            tracing::trace!(kind = ?stmt.kind(), range = ?stmt.text_range(), "searching statement");
            if let Some(found) = stmt.descendants().find(|n| predicate(n)) {
                return Some(found);
            }
            stmt = ast::previous_statement(&stmt)?;
        }
    }

    pub fn find_first_previous_of_types(
        &self,
        node: &SyntaxNode,
        kinds: &[&str],
    ) -> Result<Option<SyntaxNode>> {
        let classes = resolve_all(kinds, "find_first_previous_of_types", 2)?;
        Ok(self.find_first_previous(node, |n| classes.iter().any(|class| class.matches(n))))
    }
}

fn preorder<S: Scope + ?Sized>(scope: &S) -> impl Iterator<Item = SyntaxNode> + '_ {
    scope.roots().iter().flat_map(|root| root.descendants())
}

fn resolve(kind: &str, location: &'static str, position: usize) -> Result<NodeClass> {
    NodeClass::resolve(kind).ok_or_else(|| {
        tracing::debug!(location, given = kind, "rejected non-node kind");
        Error::InvalidArgument {
            location,
            position,
            given: kind.to_string(),
        }
    })
}

fn resolve_all(kinds: &[&str], location: &'static str, position: usize) -> Result<Vec<NodeClass>> {
    kinds
        .iter()
        .map(|kind| resolve(kind, location, position))
        .collect()
}
