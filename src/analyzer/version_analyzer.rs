use crate::config::LabelsConfig;
use crate::domain::{LabelSet, Version, VersionBump};
use tracing::debug;

/// Decides the version bump from merge request labels
pub struct VersionAnalyzer {
    config: LabelsConfig,
}

impl VersionAnalyzer {
    /// Create a new version analyzer
    pub fn new(config: LabelsConfig) -> Self {
        VersionAnalyzer { config }
    }

    /// Pick exactly one bump: major beats minor, minor beats the default patch
    pub fn analyze_labels(&self, labels: &LabelSet) -> VersionBump {
        let bump = if labels.mentions(&self.config.major) {
            VersionBump::Major
        } else if labels.mentions(&self.config.minor) {
            VersionBump::Minor
        } else {
            VersionBump::Patch
        };

        debug!(labels = %labels.representation(), %bump, "analyzed merge request labels");
        bump
    }

    /// Compute the next version from the last tag and the labels
    pub fn next_version(&self, last: &Version, labels: &LabelSet) -> Version {
        last.bump(self.analyze_labels(labels))
    }
}

impl Default for VersionAnalyzer {
    fn default() -> Self {
        Self::new(LabelsConfig::default())
    }
}
