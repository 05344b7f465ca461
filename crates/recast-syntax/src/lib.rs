//! Syntax trees for recast and the queries rewrite rules run over them.
//!
//! - `cst` - syntax kinds and Rowan tree types
//! - `ast` - typed wrappers and statement-list navigation
//! - `class` - named node classes for hierarchy-aware kind checks
//! - `builder` - green tree construction
//! - `finder` - ancestor, descendant and backward statement search
//! - `resolve` - name resolution and structural comparison

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod ast;
pub mod builder;
pub mod class;
pub mod cst;
pub mod dump;
pub mod finder;
pub mod resolve;

#[cfg(test)]
mod ast_tests;
#[cfg(test)]
mod class_tests;
#[cfg(test)]
mod resolve_tests;

pub use builder::TreeBuilder;
pub use class::NodeClass;
pub use cst::{KindSet, PhpLang, SyntaxElement, SyntaxKind, SyntaxNode, SyntaxToken};
pub use dump::dump;
pub use finder::{NodeFinder, Scope};
pub use resolve::{NameResolver, NodeComparer, StructuralComparer, TokenNameResolver};

/// Errors raised by tree queries.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A kind argument did not name a node class.
    #[error(
        "kind given to `{location}()` at argument {position} must be a node class, `{given}` given"
    )]
    InvalidArgument {
        location: &'static str,
        position: usize,
        given: String,
    },
}

/// Result type for tree queries.
pub type Result<T> = std::result::Result<T, Error>;
