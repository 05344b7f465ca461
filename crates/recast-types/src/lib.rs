//! Type rendering for rewrite rules.
//!
//! `TypeMapper` turns an `InferredType` into one of three shapes:
//!
//! - a `DocTypeNode` for doc comments
//! - a `SyntaxTypeNode` for parameter, property and return annotations,
//!   gated by the target version
//! - a flat doc string
//!
//! Per-kind behavior lives in `strategy`; the mapper owns the fallback chain.

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

mod config;
mod doc_node;
mod mapper;
mod resolve;
pub mod strategy;
mod syntax_node;

#[cfg(test)]
mod resolve_tests;
#[cfg(test)]
mod syntax_node_tests;

pub use config::Config;
pub use doc_node::DocTypeNode;
pub use mapper::{TypeMapper, TypeMapperBuilder, TypeSlot};
pub use resolve::resolve_syntax_type;
pub use strategy::TypeStrategy;
pub use syntax_node::SyntaxTypeNode;

use recast_core::TypeKind;

/// Errors raised while rendering types.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// No strategy and no fallback covers this type shape.
    #[error("`{operation}` has no mapping for `{kind}` types")]
    UnsupportedType {
        operation: &'static str,
        kind: TypeKind,
    },

    /// An internal assumption about mapper output did not hold.
    #[error("invariant violated: {0}")]
    InvariantViolation(String),
}

/// Result type for type rendering.
pub type Result<T> = std::result::Result<T, Error>;
