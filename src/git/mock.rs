use crate::error::{GenSemverError, Result};
use crate::git::Repository;
use std::cell::RefCell;
use std::path::{Path, PathBuf};

/// A side-effecting call recorded by [MockRepository]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GitCall {
    Stage(PathBuf),
    Commit(String),
    PushHead { remote: String, branch: String },
    SetPushUrl { remote: String, url: String },
    CreateTag(String),
    PushTag { remote: String, tag: String },
}

/// Mock repository for testing without actual git operations
pub struct MockRepository {
    description: Option<String>,
    commit_message: String,
    failing_call: Option<&'static str>,
    calls: RefCell<Vec<GitCall>>,
}

impl MockRepository {
    /// Create a mock repository with no tags and an empty HEAD message
    pub fn new() -> Self {
        MockRepository {
            description: None,
            commit_message: String::new(),
            failing_call: None,
            calls: RefCell::new(Vec::new()),
        }
    }

    /// Set what `describe_tags` reports
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the HEAD commit message
    pub fn with_commit_message(mut self, message: impl Into<String>) -> Self {
        self.commit_message = message.into();
        self
    }

    /// Make one operation fail, by name: "stage", "commit", "push_head",
    /// "set_push_url", "create_tag" or "push_tag"
    pub fn failing_on(mut self, operation: &'static str) -> Self {
        self.failing_call = Some(operation);
        self
    }

    /// Side-effecting calls made so far, in order
    pub fn calls(&self) -> Vec<GitCall> {
        self.calls.borrow().clone()
    }

    fn record(&self, operation: &'static str, call: GitCall) -> Result<()> {
        if self.failing_call == Some(operation) {
            return Err(GenSemverError::remote(format!("{} failed", operation)));
        }
        self.calls.borrow_mut().push(call);
        Ok(())
    }
}

impl Default for MockRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl Repository for MockRepository {
    fn describe_tags(&self) -> Result<Option<String>> {
        Ok(self.description.clone())
    }

    fn last_commit_message(&self) -> Result<String> {
        Ok(self.commit_message.clone())
    }

    fn stage_file_forced(&self, path: &Path) -> Result<()> {
        self.record("stage", GitCall::Stage(path.to_path_buf()))
    }

    fn commit(&self, message: &str) -> Result<()> {
        self.record("commit", GitCall::Commit(message.to_string()))
    }

    fn push_head(&self, remote: &str, branch: &str) -> Result<()> {
        self.record(
            "push_head",
            GitCall::PushHead {
                remote: remote.to_string(),
                branch: branch.to_string(),
            },
        )
    }

    fn set_push_url(&self, remote: &str, url: &str) -> Result<()> {
        self.record(
            "set_push_url",
            GitCall::SetPushUrl {
                remote: remote.to_string(),
                url: url.to_string(),
            },
        )
    }

    fn create_tag(&self, name: &str) -> Result<()> {
        self.record("create_tag", GitCall::CreateTag(name.to_string()))
    }

    fn push_tag(&self, remote: &str, tag_name: &str) -> Result<()> {
        self.record(
            "push_tag",
            GitCall::PushTag {
                remote: remote.to_string(),
                tag: tag_name.to_string(),
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_repository_default() {
        let repo = MockRepository::default();
        assert_eq!(repo.describe_tags().unwrap(), None);
        assert_eq!(repo.last_commit_message().unwrap(), "");
        assert!(repo.calls().is_empty());
    }

    #[test]
    fn test_mock_repository_records_calls() {
        let repo = MockRepository::new();
        repo.commit("release 1.0.0 [ci skip]").unwrap();
        repo.create_tag("1.0.0").unwrap();

        assert_eq!(
            repo.calls(),
            vec![
                GitCall::Commit("release 1.0.0 [ci skip]".to_string()),
                GitCall::CreateTag("1.0.0".to_string()),
            ]
        );
    }

    #[test]
    fn test_mock_repository_failure() {
        let repo = MockRepository::new().failing_on("push_tag");
        repo.create_tag("1.0.0").unwrap();
        assert!(repo.push_tag("origin", "1.0.0").is_err());
        assert_eq!(repo.calls().len(), 1);
    }

    #[test]
    fn test_mock_repository_description() {
        let repo = MockRepository::new()
            .with_description("1.2.3-1-gabcdef0")
            .with_commit_message("See merge request a/b!1");
        assert_eq!(
            repo.describe_tags().unwrap().as_deref(),
            Some("1.2.3-1-gabcdef0")
        );
        assert_eq!(repo.last_commit_message().unwrap(), "See merge request a/b!1");
    }
}
