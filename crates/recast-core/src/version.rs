//! Target language version and the annotation features it unlocks.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Annotation forms that depend on the target version.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum VersionFeature {
    /// `int`, `float`, `string`, `bool` in signatures.
    ScalarTypes,
    /// `void` return annotation.
    VoidType,
    /// `iterable` pseudo-type.
    IterableType,
    /// `?T` annotations.
    NullableType,
    /// `object` annotation.
    ObjectType,
    /// Multi-member `A|B` annotations.
    UnionTypes,
}

impl VersionFeature {
    /// First version that supports the feature.
    pub fn min_version(self) -> TargetVersion {
        match self {
            Self::ScalarTypes => TargetVersion::new(7, 0),
            Self::VoidType | Self::IterableType | Self::NullableType => TargetVersion::new(7, 1),
            Self::ObjectType => TargetVersion::new(7, 2),
            Self::UnionTypes => TargetVersion::new(8, 0),
        }
    }
}

/// Capability query consulted by the type mapper.
pub trait VersionFeatureProvider {
    fn is_at_least(&self, feature: VersionFeature) -> bool;
}

impl<T: VersionFeatureProvider + ?Sized> VersionFeatureProvider for &T {
    fn is_at_least(&self, feature: VersionFeature) -> bool {
        (*self).is_at_least(feature)
    }
}

/// Version id in `MAJOR * 10000 + MINOR * 100 + PATCH` form, e.g. `70400`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TargetVersion(u32);

impl TargetVersion {
    /// Newest version the feature table knows about.
    pub const LATEST: TargetVersion = TargetVersion(80400);

    pub const fn new(major: u32, minor: u32) -> Self {
        Self(major * 10_000 + minor * 100)
    }

    pub const fn from_id(id: u32) -> Self {
        Self(id)
    }

    pub fn id(self) -> u32 {
        self.0
    }

    pub fn major(self) -> u32 {
        self.0 / 10_000
    }

    pub fn minor(self) -> u32 {
        self.0 / 100 % 100
    }
}

impl Default for TargetVersion {
    fn default() -> Self {
        Self::LATEST
    }
}

impl VersionFeatureProvider for TargetVersion {
    fn is_at_least(&self, feature: VersionFeature) -> bool {
        *self >= feature.min_version()
    }
}

impl fmt::Display for TargetVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major(), self.minor())
    }
}

/// Malformed version string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid target version `{0}`, expected `MAJOR.MINOR` or a numeric id like `70400`")]
pub struct ParseVersionError(pub String);

impl FromStr for TargetVersion {
    type Err = ParseVersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let err = || ParseVersionError(s.to_string());

        if !s.contains('.') {
            let id: u32 = s.parse().map_err(|_| err())?;
            if id < 10_000 {
                return Err(err());
            }
            return Ok(Self(id));
        }

        let mut parts = s.split('.');
        let mut next = || -> Result<u32, ParseVersionError> {
            match parts.next() {
                Some(part) => part.parse().map_err(|_| err()),
                None => Ok(0),
            }
        };
        let major = next()?;
        let minor = next()?;
        let patch = next()?;
        if minor > 99 || patch > 99 || parts.next().is_some() {
            return Err(err());
        }
        major
            .checked_mul(10_000)
            .and_then(|id| id.checked_add(minor * 100 + patch))
            .map(Self)
            .ok_or_else(err)
    }
}

impl TryFrom<String> for TargetVersion {
    type Error = ParseVersionError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TargetVersion> for String {
    fn from(version: TargetVersion) -> Self {
        version.to_string()
    }
}
