use crate::domain::Version;
use crate::error::Result;

/// Result of describing HEAD against the nearest reachable tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagDescription {
    /// HEAD is the tagged commit itself (e.g. "1.2.3")
    Tagged(String),
    /// HEAD is some commits past the tag (e.g. "1.2.3-4-gabc1234")
    Ahead(String),
}

impl TagDescription {
    /// Classify describe output. Any `-` means commits exist since the tag.
    pub fn parse(describe_output: &str) -> Self {
        let trimmed = describe_output.trim().to_string();
        if trimmed.contains('-') {
            TagDescription::Ahead(trimmed)
        } else {
            TagDescription::Tagged(trimmed)
        }
    }

    /// The describe output as given by git
    pub fn as_str(&self) -> &str {
        match self {
            TagDescription::Tagged(s) | TagDescription::Ahead(s) => s,
        }
    }

    /// Parse the describe output as a version to bump from
    pub fn version(&self) -> Result<Version> {
        Version::parse(self.as_str())
    }
}
