use thiserror::Error;

/// Unified error type for gen-semver operations
#[derive(Error, Debug)]
pub enum GenSemverError {
    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Version parsing error: {0}")]
    Version(String),

    #[error("Unresolvable merge request reference: {0}")]
    Reference(String),

    #[error("Project API error: {0}")]
    Api(String),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Manifest error: {0}")]
    Manifest(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Remote operation failed: {0}")]
    Remote(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in gen-semver
pub type Result<T> = std::result::Result<T, GenSemverError>;

impl GenSemverError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        GenSemverError::Config(msg.into())
    }

    /// Create a version error with context
    pub fn version(msg: impl Into<String>) -> Self {
        GenSemverError::Version(msg.into())
    }

    /// Create a merge request reference error with context
    pub fn reference(msg: impl Into<String>) -> Self {
        GenSemverError::Reference(msg.into())
    }

    /// Create a project API error with context
    pub fn api(msg: impl Into<String>) -> Self {
        GenSemverError::Api(msg.into())
    }

    /// Create a manifest error with context
    pub fn manifest(msg: impl Into<String>) -> Self {
        GenSemverError::Manifest(msg.into())
    }

    /// Create a remote error with context
    pub fn remote(msg: impl Into<String>) -> Self {
        GenSemverError::Remote(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = GenSemverError::config("missing CI_PROJECT_ID");
        assert_eq!(err.to_string(), "Configuration error: missing CI_PROJECT_ID");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: GenSemverError = io_err.into();
        assert!(err.to_string().contains("I/O error"));
    }

    #[test]
    fn test_error_from_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{ nope").unwrap_err();
        let err: GenSemverError = json_err.into();
        assert!(err.to_string().starts_with("JSON error"));
    }

    #[test]
    fn test_error_messages_are_descriptive() {
        let error_pairs = vec![
            (GenSemverError::config("x"), "Configuration error"),
            (GenSemverError::version("x"), "Version parsing error"),
            (
                GenSemverError::reference("x"),
                "Unresolvable merge request reference",
            ),
            (GenSemverError::api("x"), "Project API error"),
            (GenSemverError::manifest("x"), "Manifest error"),
            (GenSemverError::remote("x"), "Remote operation failed"),
        ];

        for (err, expected_prefix) in error_pairs {
            let msg = err.to_string();
            assert!(
                msg.starts_with(expected_prefix),
                "Error message should start with '{}', but got '{}'",
                expected_prefix,
                msg
            );
        }
    }

    #[test]
    fn test_error_keeps_message() {
        let err = GenSemverError::reference("release notes without an MR");
        assert!(err.to_string().contains("release notes without an MR"));
    }
}
