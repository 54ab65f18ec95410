use crate::error::{GenSemverError, Result};
use std::fmt;

/// Semantic version representation
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Version(semver::Version);

impl Version {
    /// Create a new version
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Version(semver::Version::new(major, minor, patch))
    }

    /// Parse version from a tag or describe string
    /// (e.g., "v1.2.3" -> 1.2.3, "1.2.3-4-gabc1234" -> 1.2.3-4-gabc1234)
    pub fn parse(tag: &str) -> Result<Self> {
        let clean_tag = tag.trim().trim_start_matches('v').trim_start_matches('V');

        semver::Version::parse(clean_tag)
            .map(Version)
            .map_err(|e| GenSemverError::version(format!("Invalid version '{}': {}", tag, e)))
    }

    pub fn major(&self) -> u64 {
        self.0.major
    }

    pub fn minor(&self) -> u64 {
        self.0.minor
    }

    pub fn patch(&self) -> u64 {
        self.0.patch
    }

    /// Bump version according to bump type.
    ///
    /// Pre-release and build metadata (such as a describe suffix) are dropped.
    pub fn bump(&self, bump_type: VersionBump) -> Self {
        let v = &self.0;
        match bump_type {
            VersionBump::Major => Version::new(v.major + 1, 0, 0),
            VersionBump::Minor => Version::new(v.major, v.minor + 1, 0),
            VersionBump::Patch => Version::new(v.major, v.minor, v.patch + 1),
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Version bump type decision
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionBump {
    Major,
    Minor,
    Patch,
}

impl fmt::Display for VersionBump {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            VersionBump::Major => "major",
            VersionBump::Minor => "minor",
            VersionBump::Patch => "patch",
        };
        f.write_str(name)
    }
}
