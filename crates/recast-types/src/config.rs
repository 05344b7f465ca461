//! Configuration for type rendering.

use recast_core::{TargetVersion, VersionFeature, VersionFeatureProvider};
use serde::{Deserialize, Serialize};

/// Configuration for `TypeMapper`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Config {
    /// Version whose annotation features gate syntax output
    pub(crate) target_version: TargetVersion,
    /// Class that closures are documented as
    pub(crate) closure_class: String,
    /// Class treated as a generic iterable when collapsing unions
    pub(crate) iterable_marker: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            target_version: TargetVersion::default(),
            closure_class: "Closure".to_string(),
            iterable_marker: "Traversable".to_string(),
        }
    }
}

impl Config {
    /// Create a new Config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the target version.
    pub fn target_version(mut self, value: TargetVersion) -> Self {
        self.target_version = value;
        self
    }

    /// Set the class closures are documented as, without the leading `\`.
    pub fn closure_class(mut self, value: impl Into<String>) -> Self {
        self.closure_class = value.into();
        self
    }

    /// Set the generic iterable marker class.
    pub fn iterable_marker(mut self, value: impl Into<String>) -> Self {
        self.iterable_marker = value.into();
        self
    }

    pub fn version(&self) -> TargetVersion {
        self.target_version
    }
}

impl VersionFeatureProvider for Config {
    fn is_at_least(&self, feature: VersionFeature) -> bool {
        self.target_version.is_at_least(feature)
    }
}
