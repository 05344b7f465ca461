#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Shared vocabulary for recast.
//!
//! - `types`: the inferred type model handed over by the inference engine
//! - `version`: target version and the annotation features it enables
//! - `symbols`: the class universe used for existence and ancestry checks

mod interner;
mod symbols;
mod types;
mod version;

#[cfg(test)]
mod symbols_tests;
#[cfg(test)]
mod version_tests;

pub use interner::{Interner, Symbol};
pub use symbols::{ClassHierarchy, SymbolUniverse};
pub use types::{InferredType, ObjectType, ScalarKind, TypeKind};
pub use version::{ParseVersionError, TargetVersion, VersionFeature, VersionFeatureProvider};
