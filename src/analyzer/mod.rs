//! Analysis engine for determining version bumps from merge request labels

pub mod version_analyzer;

pub use version_analyzer::VersionAnalyzer;
